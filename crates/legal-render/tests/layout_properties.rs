//! Property tests for rendering and watermarking

use legal_core::{DocumentKind, FieldValues, catalog};
use legal_render::renderer::BOTTOM_MARGIN;
use legal_render::template::template_lines;
use legal_render::{Layer, render, stamp};
use proptest::prelude::*;

fn any_kind() -> impl Strategy<Value = DocumentKind> {
    prop_oneof![Just(DocumentKind::Will), Just(DocumentKind::PowerOfAttorney)]
}

/// Field maps drawing from the real field names plus arbitrary extras
fn any_fields(kind: DocumentKind) -> impl Strategy<Value = FieldValues> {
    let names: Vec<&'static str> = catalog::fields(kind).iter().map(|f| f.name).collect();
    let known = proptest::sample::select(names).prop_map(String::from);
    let name = prop_oneof![3 => known, 1 => "[a-zA-Z]{1,12}"];

    proptest::collection::vec((name, "\\PC{0,80}"), 0..14)
        .prop_map(|pairs| pairs.into_iter().collect())
}

fn kind_and_fields() -> impl Strategy<Value = (DocumentKind, FieldValues)> {
    any_kind().prop_flat_map(|kind| (Just(kind), any_fields(kind)))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn render_always_produces_content((kind, fields) in kind_and_fields()) {
        let layout = render(kind, &fields);
        prop_assert!(layout.page_count() >= 1);
        prop_assert!(layout.pages.iter().all(|p| p.content().count() > 0));
    }

    #[test]
    fn every_template_line_appears_once_in_order((kind, fields) in kind_and_fields()) {
        let layout = render(kind, &fields);
        let placed: Vec<&str> = layout.content_lines().skip(1).map(|l| l.text.as_str()).collect();
        let expected = template_lines(kind, &fields);

        prop_assert_eq!(placed, expected.iter().map(String::as_str).collect::<Vec<_>>());
        prop_assert!(layout.content_lines().all(|l| l.y >= BOTTOM_MARGIN));
    }

    #[test]
    fn stamping_preserves_content((kind, fields) in kind_and_fields(), times in 1usize..4) {
        let layout = render(kind, &fields);
        let mut stamped = layout.clone();
        for _ in 0..times {
            stamped = stamp(stamped);
        }

        prop_assert_eq!(stamped.page_count(), layout.page_count());
        for (before, after) in layout.pages.iter().zip(&stamped.pages) {
            prop_assert_eq!(before.content().collect::<Vec<_>>(), after.content().collect::<Vec<_>>());
            prop_assert_eq!(after.watermarks().count(), 2 * times);
            let diagonals = after
                .items
                .iter()
                .filter(|i| i.layer == Layer::Watermark && i.rotation == Some(45.0))
                .count();
            prop_assert_eq!(diagonals, times);
        }
    }
}

#[test]
fn poa_overflows_onto_a_second_page() {
    let fields = FieldValues::new()
        .with("principalName", "Jane Doe")
        .with("attorneyName", "John Roe");
    let layout = render(DocumentKind::PowerOfAttorney, &fields);

    assert!(layout.page_count() > 1);
    let texts: Vec<_> = layout.content_lines().map(|l| l.text.clone()).collect();
    assert_eq!(texts.iter().filter(|t| *t == "Notary Public").count(), 1);
    assert_eq!(texts.iter().filter(|t| *t == "KNOW ALL MEN BY THESE PRESENTS:").count(), 1);
}
