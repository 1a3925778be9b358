//! Font-family references collected from SVG markup (made by FontLab https://www.fontlab.com/)

use anyhow::{Context, Result};
use indexmap::IndexSet;
use roxmltree::{Document, Node, ParsingOptions};

/// Elements whose inline style can name a font.
const TEXT_ELEMENTS: [&str; 3] = ["text", "tspan", "textPath"];

/// Distinct font-family names in the order they first appear.
pub type FontReferences = IndexSet<String>;

/// Parse SVG source text. DTDs are allowed since many exported SVGs carry one.
pub fn parse_document(text: &str) -> Result<Document<'_>> {
    let opts = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    Document::parse_with_options(text, opts).context("parsing SVG document")
}

/// Collect every font-family named in a text element's `style` attribute.
pub fn extract_references(doc: &Document) -> FontReferences {
    doc.descendants()
        .filter(is_text_element)
        .filter_map(|node| node.attribute("style"))
        .flat_map(parse_font_family)
        .collect()
}

pub fn extract_references_from_str(text: &str) -> Result<FontReferences> {
    let doc = parse_document(text)?;
    Ok(extract_references(&doc))
}

fn is_text_element(node: &Node) -> bool {
    node.is_element() && TEXT_ELEMENTS.contains(&node.tag_name().name())
}

/// Pull the `font-family` values out of one inline style string.
///
/// A fallback list such as `'Foo', serif` is kept whole, so it becomes the
/// single reference `Foo, serif`. Quote characters are removed wherever they
/// appear in the value.
pub fn parse_font_family(style: &str) -> Vec<String> {
    style
        .split(';')
        .filter_map(|decl| decl.split_once(':'))
        .filter(|(prop, _)| prop.trim() == "font-family")
        .map(|(_, value)| clean_family(value))
        .filter(|family| !family.is_empty())
        .collect()
}

fn clean_family(value: &str) -> String {
    value
        .chars()
        .filter(|c| !matches!(c, '\'' | '"'))
        .collect::<String>()
        .trim()
        .to_string()
}
