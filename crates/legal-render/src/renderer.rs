//! Document Renderer
//!
//! Places the title and every template line top-down, starting a new page
//! whenever the cursor drops below the bottom margin.

use legal_core::{DocumentKind, FieldValues};

use crate::classify::{LineStyle, classify};
use crate::layout::{PAGE_HEIGHT, PAGE_WIDTH, PageLayout, PlacedText};
use crate::template::template_lines;

/// Distance from the page top to the first baseline
pub const TOP_MARGIN: f32 = 60.0;

/// A new page starts once the cursor falls below this y
pub const BOTTOM_MARGIN: f32 = 60.0;

/// x of every body line
pub const LEFT_MARGIN: f32 = 60.0;

/// Extra leading added to the font size after each line
const LINE_GAP: f32 = 4.0;

/// Space between the title baseline and the first body line
const TITLE_GAP: f32 = 50.0;

/// Vertical cursor over a growing layout
struct Cursor {
    layout: PageLayout,
    y: f32,
}

impl Cursor {
    fn new() -> Self {
        Self {
            layout: PageLayout::new(),
            y: PAGE_HEIGHT - TOP_MARGIN,
        }
    }

    fn title(&mut self, kind: DocumentKind) {
        let style = LineStyle::Title;
        let x = PAGE_WIDTH / 2.0 - kind.title_offset();
        let item = PlacedText::content(kind.title(), x, self.y, style.font(), style.size());

        self.layout.current_page().push(item);
        self.y -= TITLE_GAP;
    }

    fn line(&mut self, text: String, style: LineStyle) {
        if self.y < BOTTOM_MARGIN {
            self.layout.add_page();
            self.y = PAGE_HEIGHT - TOP_MARGIN;
        }

        let size = style.size();
        let item = PlacedText::content(text, LEFT_MARGIN, self.y, style.font(), size);
        self.layout.current_page().push(item);
        self.y -= size + LINE_GAP;
    }
}

/// Lay out a document. Deterministic for identical inputs.
///
/// Lines are never wrapped; text wider than the page runs past the right
/// margin.
pub fn render(kind: DocumentKind, fields: &FieldValues) -> PageLayout {
    let mut cursor = Cursor::new();
    cursor.title(kind);

    for text in template_lines(kind, fields) {
        let style = classify(kind, &text);
        cursor.line(text, style);
    }

    tracing::debug!(
        kind = %kind,
        pages = cursor.layout.page_count(),
        "Rendered document layout"
    );

    cursor.layout
}
