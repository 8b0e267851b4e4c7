//! Page Layout Model
//!
//! Coordinates are PDF user space: origin at the bottom-left corner,
//! y increasing upward, units in points.

/// US Letter width (8.5in)
pub const PAGE_WIDTH: f32 = 612.0;

/// US Letter height (11in)
pub const PAGE_HEIGHT: f32 = 792.0;

/// Standard Type1 fonts used by the documents
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Font {
    TimesRoman,
    TimesBold,
    HelveticaBold,
}

impl Font {
    pub const ALL: [Self; 3] = [Self::TimesRoman, Self::TimesBold, Self::HelveticaBold];

    /// PostScript name of the base font
    pub const fn base_font(self) -> &'static str {
        match self {
            Self::TimesRoman => "Times-Roman",
            Self::TimesBold => "Times-Bold",
            Self::HelveticaBold => "Helvetica-Bold",
        }
    }

    /// Key in the page resource dictionary
    pub const fn resource_name(self) -> &'static str {
        match self {
            Self::TimesRoman => "F1",
            Self::TimesBold => "F2",
            Self::HelveticaBold => "F3",
        }
    }
}

/// Which pass produced a placement
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layer {
    Content,
    Watermark,
}

/// A single run of text at a fixed position
#[derive(Clone, Debug, PartialEq)]
pub struct PlacedText {
    pub text: String,
    pub x: f32,
    pub y: f32,
    pub font: Font,
    pub size: f32,
    /// Fill grey level, 0.0 black to 1.0 white
    pub gray: f32,
    /// Counter-clockwise rotation in degrees
    pub rotation: Option<f32>,
    pub layer: Layer,
}

impl PlacedText {
    /// Black, unrotated content text
    pub fn content(text: impl Into<String>, x: f32, y: f32, font: Font, size: f32) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            font,
            size,
            gray: 0.0,
            rotation: None,
            layer: Layer::Content,
        }
    }

    /// Blank spacer lines occupy a slot but draw nothing
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// One fixed-size page
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Page {
    pub items: Vec<PlacedText>,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, item: PlacedText) {
        self.items.push(item);
    }

    pub fn content(&self) -> impl Iterator<Item = &PlacedText> {
        self.items.iter().filter(|i| i.layer == Layer::Content)
    }

    pub fn watermarks(&self) -> impl Iterator<Item = &PlacedText> {
        self.items.iter().filter(|i| i.layer == Layer::Watermark)
    }
}

/// Ordered pages produced by the renderer
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PageLayout {
    pub pages: Vec<Page>,
}

impl PageLayout {
    /// A layout holding a single empty page
    pub fn new() -> Self {
        Self {
            pages: vec![Page::new()],
        }
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Start a new page and return it
    pub fn add_page(&mut self) -> &mut Page {
        self.pages.push(Page::new());
        let last = self.pages.len() - 1;
        &mut self.pages[last]
    }

    /// The page currently being filled
    pub fn current_page(&mut self) -> &mut Page {
        if self.pages.is_empty() {
            return self.add_page();
        }
        let last = self.pages.len() - 1;
        &mut self.pages[last]
    }

    /// Content text in reading order across all pages
    pub fn content_lines(&self) -> impl Iterator<Item = &PlacedText> {
        self.pages.iter().flat_map(Page::content)
    }

    pub fn watermark_count(&self) -> usize {
        self.pages.iter().map(|p| p.watermarks().count()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_layout_has_one_page() {
        let mut layout = PageLayout::new();
        assert_eq!(layout.page_count(), 1);

        layout.current_page().push(PlacedText::content("x", 60.0, 700.0, Font::TimesRoman, 11.0));
        layout.add_page();
        assert_eq!(layout.page_count(), 2);
        assert!(layout.current_page().items.is_empty());
        assert_eq!(layout.content_lines().count(), 1);
    }

    #[test]
    fn test_font_resource_names_are_unique() {
        let mut names: Vec<_> = Font::ALL.iter().map(|f| f.resource_name()).collect();
        names.dedup();
        assert_eq!(names.len(), Font::ALL.len());
    }
}
