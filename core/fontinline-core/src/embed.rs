//! `@font-face` generation and style injection (made by FontLab https://www.fontlab.com/)

use std::fs;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use roxmltree::Document;

use crate::references::parse_document;
use crate::resolve::ResolutionMap;

/// MIME type for a font file, keyed on its extension.
pub fn mime_type(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "otf" => Some("application/vnd.ms-opentype"),
        "ttf" => Some("font/sfnt"),
        "woff" => Some("application/font-woff"),
        _ => None,
    }
}

/// One `@font-face` rule carrying the font as a base64 data URL.
pub fn font_face_rule(family: &str, mime: &str, data: &[u8]) -> String {
    format!(
        "@font-face {{\n font-family: '{family}';\n src:url(\"data:{mime};charset=utf-8;base64,{}\");\n}}\n",
        STANDARD.encode(data)
    )
}

/// Concatenate one rule per resolved reference, in map order.
pub fn build_stylesheet(resolved: &ResolutionMap) -> Result<String> {
    let mut css = String::new();
    for (family, font) in resolved {
        let mime = mime_type(&font.path)
            .ok_or_else(|| anyhow!("no MIME type for font {}", font.path.display()))?;
        let data = fs::read(&font.path)
            .with_context(|| format!("reading font {}", font.path.display()))?;
        css.push_str(&font_face_rule(family, mime, &data));
    }
    Ok(css)
}

/// Insert `<style>` holding `css` as the first child of the root `<svg>`.
///
/// The source text is spliced rather than re-serialized, so every byte
/// outside the new element is preserved.
pub fn insert_style(svg: &str, css: &str) -> Result<String> {
    let doc = parse_document(svg)?;
    splice_style(svg, &doc, css)
}

/// [`insert_style`] for a document already parsed from `svg`.
pub fn splice_style(svg: &str, doc: &Document, css: &str) -> Result<String> {
    let root = doc.root_element();
    if root.tag_name().name() != "svg" {
        return Err(anyhow!(
            "root element is <{}>, expected <svg>",
            root.tag_name().name()
        ));
    }

    let start = root.range().start;
    let tag = start_tag(svg, start).ok_or_else(|| anyhow!("unterminated <svg> start tag"))?;
    let qname = &svg[start + 1..start + 1 + tag.name_len];
    let prefix = qname.split_once(':').map(|(prefix, _)| prefix);
    let style = style_element(css, prefix);

    let mut out = String::with_capacity(svg.len() + style.len() + qname.len() + 3);
    if tag.self_closing {
        // `<svg .../>` becomes `<svg ...>` + style + `</svg>`
        out.push_str(&svg[..tag.close - 1]);
        out.push('>');
        out.push_str(&style);
        out.push_str(&format!("</{qname}>"));
    } else {
        out.push_str(&svg[..=tag.close]);
        out.push_str(&style);
    }
    out.push_str(&svg[tag.close + 1..]);
    Ok(out)
}

fn style_element(css: &str, prefix: Option<&str>) -> String {
    let name = match prefix {
        Some(prefix) => format!("{prefix}:style"),
        None => "style".to_string(),
    };
    format!(
        "<{name}><![CDATA[\n{}]]></{name}>",
        css.replace("]]>", "]]]]><![CDATA[>")
    )
}

struct StartTag {
    /// Byte index of the closing `>`.
    close: usize,
    /// Length of the qualified element name after `<`.
    name_len: usize,
    self_closing: bool,
}

/// Locate the end of the start tag beginning at `start` (which points at `<`).
fn start_tag(text: &str, start: usize) -> Option<StartTag> {
    let bytes = text.as_bytes();
    if bytes.get(start) != Some(&b'<') {
        return None;
    }

    let name_len = bytes[start + 1..]
        .iter()
        .position(|b| b.is_ascii_whitespace() || matches!(b, b'/' | b'>'))?;

    let mut quote: Option<u8> = None;
    for (idx, &b) in bytes.iter().enumerate().skip(start + 1 + name_len) {
        match quote {
            Some(q) if b == q => quote = None,
            Some(_) => {}
            None => match b {
                b'"' | b'\'' => quote = Some(b),
                b'>' => {
                    return Some(StartTag {
                        close: idx,
                        name_len,
                        self_closing: bytes[idx - 1] == b'/',
                    })
                }
                _ => {}
            },
        }
    }
    None
}
