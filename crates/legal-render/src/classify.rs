//! Line Classifier
//!
//! Picks the style of a template line from its text. The heuristics are
//! content-based and kept here so they can change without touching layout.

use legal_core::DocumentKind;

use crate::layout::Font;

/// Power of attorney labels are bolded only below this many characters
const LABEL_MAX_CHARS: usize = 30;

/// Visual style of a line
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineStyle {
    /// Document heading, first page only
    Title,
    /// Article or label line
    Heading,
    Body,
}

impl LineStyle {
    pub const fn font(self) -> Font {
        match self {
            Self::Title | Self::Heading => Font::TimesBold,
            Self::Body => Font::TimesRoman,
        }
    }

    pub const fn size(self) -> f32 {
        match self {
            Self::Title => 18.0,
            Self::Heading => 12.0,
            Self::Body => 11.0,
        }
    }
}

/// Style for a body line of `kind`
pub fn classify(kind: DocumentKind, text: &str) -> LineStyle {
    let heading = match kind {
        DocumentKind::Will => text.starts_with("ARTICLE"),
        DocumentKind::PowerOfAttorney => {
            text.contains(':') && text.chars().count() < LABEL_MAX_CHARS
        }
    };

    if heading { LineStyle::Heading } else { LineStyle::Body }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_will_articles_are_headings() {
        assert_eq!(classify(DocumentKind::Will, "ARTICLE I - REVOCATION"), LineStyle::Heading);
        assert_eq!(classify(DocumentKind::Will, "Address: 1 Elm St"), LineStyle::Body);
        assert_eq!(classify(DocumentKind::Will, " ARTICLE indented"), LineStyle::Body);
        assert_eq!(classify(DocumentKind::Will, ""), LineStyle::Body);
    }

    #[test]
    fn test_poa_short_labels_are_headings() {
        let kind = DocumentKind::PowerOfAttorney;
        assert_eq!(classify(kind, "DURATION:"), LineStyle::Heading);
        assert_eq!(classify(kind, "Name: Jane Doe"), LineStyle::Heading);
        // 31 characters
        assert_eq!(classify(kind, "KNOW ALL MEN BY THESE PRESENTS:"), LineStyle::Body);
        assert_eq!(classify(kind, "ARTICLE without colon"), LineStyle::Body);
    }

    #[test]
    fn test_poa_label_boundary() {
        let kind = DocumentKind::PowerOfAttorney;
        let at_limit = format!("{}:", "x".repeat(28));
        let over_limit = format!("{}:", "x".repeat(29));
        assert_eq!(classify(kind, &at_limit), LineStyle::Heading);
        assert_eq!(classify(kind, &over_limit), LineStyle::Body);
    }

    #[test]
    fn test_style_metrics() {
        assert_eq!(LineStyle::Title.size(), 18.0);
        assert_eq!(LineStyle::Heading.font(), Font::TimesBold);
        assert_eq!(LineStyle::Body.font(), Font::TimesRoman);
    }
}
