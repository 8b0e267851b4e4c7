//! # legal-render
//!
//! Turns a document kind plus form values into a paginated page layout,
//! optionally stamps a preview watermark on it, and serializes it to PDF.
//!
//! ```text
//! FieldValues ─▶ template ─▶ classify ─▶ render ─▶ PageLayout ─┬─▶ stamp ─▶ pdf (preview)
//!                                                              └──────────▶ pdf (final)
//! ```
//!
//! Layout is kept separate from PDF encoding so pagination and watermark
//! placement can be inspected without parsing PDF bytes.

pub mod classify;
pub mod layout;
pub mod pdf;
pub mod renderer;
pub mod template;
pub mod watermark;

pub use classify::{LineStyle, classify};
pub use layout::{Font, Layer, Page, PageLayout, PlacedText};
pub use pdf::{extract_page_text, to_pdf_bytes};
pub use renderer::render;
pub use watermark::stamp;
