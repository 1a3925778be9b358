//! fontinline-core: the quiet courier that packs fonts into SVG files
//!
//! An SVG that names a font only renders as intended where that font is
//! installed. This library reads the font-family names a document asks for,
//! finds the matching font files on disk, and tucks them into the document
//! as base64 `@font-face` rules so it travels with everything it needs.
//!
//! ## Four Stops Along the Way
//!
//! **References**: reading the guest list
//! - Looks at the inline `style` of `text`, `tspan` and `textPath` elements
//! - Keeps each distinct `font-family` value once, in order of appearance
//!
//! **Catalog**: knocking on every font directory
//! - Walks the configured directories in priority order
//! - Reads full and family names straight from each font's `name` table
//! - Shrugs off broken files and carries on
//!
//! **Resolution**: pairing names with files
//! - Exact full name first, then exact family name, then family substring
//! - Earlier directories win ties; a match is never revisited
//!
//! **Embedding**: sealing the envelope
//! - One `@font-face` rule per resolved family, font bytes in base64
//! - A single `<style>` element becomes the first child of the root `<svg>`
//!
//! ## A Sample Run
//!
//! ```rust,no_run
//! use fontinline_core::config::FontDirs;
//! use fontinline_core::pipeline::{embed_fonts, EmbedOptions};
//!
//! let svg = std::fs::read_to_string("drawing.svg")?;
//! let report = embed_fonts(&svg, &FontDirs::from_env(), &EmbedOptions::default())?;
//!
//! for (family, font) in &report.resolved {
//!     println!("{family} <- {} ({})", font.path.display(), font.pass);
//! }
//! std::fs::write("drawing-embedded.svg", &report.output)?;
//! #
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ---
//!
//! Crafted with care at FontLab https://www.fontlab.com/

pub mod catalog;
pub mod config;
pub mod discovery;
pub mod embed;
pub mod names;
pub mod pipeline;
pub mod references;
pub mod resolve;

#[cfg(test)]
pub(crate) mod test_fonts;
