//! Preview Watermark
//!
//! Adds a diagonal mark and a footer notice to every page. Additive only:
//! existing placements are never touched, so stamping twice stacks marks.

use crate::layout::{Font, Layer, PAGE_HEIGHT, PAGE_WIDTH, PageLayout, PlacedText};

pub const DIAGONAL_TEXT: &str = "PREVIEW - NOT FOR DOWNLOAD";
pub const FOOTER_TEXT: &str = "PREVIEW ONLY - PAYMENT REQUIRED FOR FINAL VERSION";

fn diagonal() -> PlacedText {
    PlacedText {
        text: DIAGONAL_TEXT.into(),
        x: PAGE_WIDTH / 2.0 - 150.0,
        y: PAGE_HEIGHT / 2.0,
        font: Font::HelveticaBold,
        size: 24.0,
        gray: 0.8,
        rotation: Some(45.0),
        layer: Layer::Watermark,
    }
}

fn footer() -> PlacedText {
    PlacedText {
        text: FOOTER_TEXT.into(),
        x: 60.0,
        y: 30.0,
        font: Font::HelveticaBold,
        size: 10.0,
        gray: 0.6,
        rotation: None,
        layer: Layer::Watermark,
    }
}

/// Stamp the preview watermark onto every page
#[must_use]
pub fn stamp(mut layout: PageLayout) -> PageLayout {
    for page in &mut layout.pages {
        page.push(diagonal());
        page.push(footer());
    }
    layout
}
