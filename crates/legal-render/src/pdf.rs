//! PDF Serialization
//!
//! Writes a [`PageLayout`] as a PDF 1.5 document using the standard Type1
//! fonts, and reads the shown strings back out of PDF bytes.
//!
//! Text is encoded as WinAnsi (the encoding declared on every font), so
//! Latin-1 characters and common typographic punctuation survive. Anything
//! else is replaced with `?`.

use lopdf::content::{Content, Operation};
use lopdf::{Dictionary, Document, Object, ObjectId, Stream, StringFormat};

use legal_core::{DocError, Result};

use crate::layout::{Font, PAGE_HEIGHT, PAGE_WIDTH, Page, PageLayout, PlacedText};

/// Code points 0x80..=0x9F in WinAnsiEncoding. `None` marks unused slots.
const WIN_ANSI_HIGH: [Option<char>; 32] = [
    Some('\u{20AC}'), None, Some('\u{201A}'), Some('\u{0192}'),
    Some('\u{201E}'), Some('\u{2026}'), Some('\u{2020}'), Some('\u{2021}'),
    Some('\u{02C6}'), Some('\u{2030}'), Some('\u{0160}'), Some('\u{2039}'),
    Some('\u{0152}'), None, Some('\u{017D}'), None,
    None, Some('\u{2018}'), Some('\u{2019}'), Some('\u{201C}'),
    Some('\u{201D}'), Some('\u{2022}'), Some('\u{2013}'), Some('\u{2014}'),
    Some('\u{02DC}'), Some('\u{2122}'), Some('\u{0161}'), Some('\u{203A}'),
    Some('\u{0153}'), None, Some('\u{017E}'), Some('\u{0178}'),
];

fn fault(context: &str) -> impl FnOnce(lopdf::Error) -> DocError + '_ {
    move |e| DocError::InternalRenderFault(format!("{context}: {e}"))
}

/// Encode a string as WinAnsi bytes
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|ch| match u32::from(ch) {
            code @ (0x20..=0x7E | 0xA0..=0xFF) => u8::try_from(code).unwrap_or(b'?'),
            _ => WIN_ANSI_HIGH
                .iter()
                .position(|slot| *slot == Some(ch))
                .and_then(|i| u8::try_from(0x80 + i).ok())
                .unwrap_or(b'?'),
        })
        .collect()
}

/// Decode WinAnsi bytes back to a string
pub fn decode_win_ansi(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|&b| match b {
            0x80..=0x9F => WIN_ANSI_HIGH[usize::from(b - 0x80)].unwrap_or('?'),
            _ => char::from(b),
        })
        .collect()
}

fn text_operations(item: &PlacedText) -> Vec<Operation> {
    let position = match item.rotation {
        Some(degrees) => {
            let (sin, cos) = degrees.to_radians().sin_cos();
            Operation::new(
                "Tm",
                vec![
                    Object::Real(cos),
                    Object::Real(sin),
                    Object::Real(-sin),
                    Object::Real(cos),
                    Object::Real(item.x),
                    Object::Real(item.y),
                ],
            )
        }
        None => Operation::new("Td", vec![Object::Real(item.x), Object::Real(item.y)]),
    };

    vec![
        Operation::new("g", vec![Object::Real(item.gray)]),
        Operation::new("BT", vec![]),
        Operation::new(
            "Tf",
            vec![
                Object::Name(item.font.resource_name().as_bytes().to_vec()),
                Object::Real(item.size),
            ],
        ),
        position,
        Operation::new(
            "Tj",
            vec![Object::String(encode_win_ansi(&item.text), StringFormat::Literal)],
        ),
        Operation::new("ET", vec![]),
    ]
}

fn page_content(page: &Page) -> Content {
    let operations = page
        .items
        .iter()
        .filter(|item| !item.is_blank())
        .flat_map(text_operations)
        .collect();

    Content { operations }
}

fn font_resources(doc: &mut Document) -> ObjectId {
    let fonts: Dictionary = Font::ALL
        .iter()
        .map(|font| {
            let font_id = doc.add_object(Dictionary::from_iter([
                ("Type", Object::Name(b"Font".to_vec())),
                ("Subtype", Object::Name(b"Type1".to_vec())),
                ("BaseFont", Object::Name(font.base_font().as_bytes().to_vec())),
                ("Encoding", Object::Name(b"WinAnsiEncoding".to_vec())),
            ]));
            (font.resource_name(), Object::Reference(font_id))
        })
        .collect();

    doc.add_object(Dictionary::from_iter([("Font", Object::Dictionary(fonts))]))
}

/// Serialize a layout to PDF bytes
pub fn to_pdf_bytes(layout: &PageLayout) -> Result<Vec<u8>> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let resources_id = font_resources(&mut doc);

    let mut kids = Vec::with_capacity(layout.page_count());
    for page in &layout.pages {
        let bytes = page_content(page)
            .encode()
            .map_err(fault("encoding page content"))?;
        let content_id = doc.add_object(Stream::new(Dictionary::new(), bytes));

        let page_id = doc.add_object(Dictionary::from_iter([
            ("Type", Object::Name(b"Page".to_vec())),
            ("Parent", Object::Reference(pages_id)),
            ("Contents", Object::Reference(content_id)),
            ("Resources", Object::Reference(resources_id)),
            (
                "MediaBox",
                Object::Array(vec![
                    Object::Integer(0),
                    Object::Integer(0),
                    Object::Real(PAGE_WIDTH),
                    Object::Real(PAGE_HEIGHT),
                ]),
            ),
        ]));
        kids.push(Object::Reference(page_id));
    }

    let count = i64::try_from(kids.len())
        .map_err(|_| DocError::InternalRenderFault("too many pages".into()))?;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(Dictionary::from_iter([
            ("Type", Object::Name(b"Pages".to_vec())),
            ("Kids", Object::Array(kids)),
            ("Count", Object::Integer(count)),
        ])),
    );

    let catalog_id = doc.add_object(Dictionary::from_iter([
        ("Type", Object::Name(b"Catalog".to_vec())),
        ("Pages", Object::Reference(pages_id)),
    ]));
    doc.trailer.set("Root", Object::Reference(catalog_id));
    doc.compress();

    let mut output = Vec::new();
    doc.save_to(&mut output)
        .map_err(|e| DocError::InternalRenderFault(format!("writing PDF: {e}")))?;

    tracing::debug!(pages = layout.page_count(), bytes = output.len(), "Serialized PDF");
    Ok(output)
}

/// Shown strings of every page, in page order
pub fn extract_page_text(bytes: &[u8]) -> Result<Vec<Vec<String>>> {
    let doc = Document::load_mem(bytes).map_err(fault("parsing PDF"))?;

    doc.get_pages()
        .into_values()
        .map(|page_id| -> Result<Vec<String>> {
            let raw = doc.get_page_content(page_id).map_err(fault("reading page"))?;
            let content = Content::decode(&raw).map_err(fault("decoding content"))?;

            Ok(content
                .operations
                .iter()
                .filter(|op| op.operator == "Tj")
                .filter_map(|op| match op.operands.first() {
                    Some(Object::String(text, _)) => Some(decode_win_ansi(text)),
                    _ => None,
                })
                .collect())
        })
        .collect()
}
