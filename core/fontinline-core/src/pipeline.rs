//! Extract → catalog → resolve → embed, end to end (made by FontLab https://www.fontlab.com/)

use std::path::PathBuf;

use anyhow::{anyhow, Result};
use log::{info, warn};
use roxmltree::Document;
use serde::Serialize;

use crate::catalog::{CatalogOptions, FontCatalog};
use crate::config::FontDirs;
use crate::embed::{build_stylesheet, splice_style};
use crate::references::{extract_references, parse_document, FontReferences};
use crate::resolve::{resolve, MatchPass, ResolutionMap};

/// What to do about references no font could be found for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnresolvedPolicy {
    /// Drop them without a word.
    Ignore,
    /// Log a warning per reference; output is unaffected.
    #[default]
    Warn,
    /// Fail the run before any output is produced.
    Error,
}

#[derive(Debug, Clone, Default)]
pub struct EmbedOptions {
    pub catalog: CatalogOptions,
    pub unresolved: UnresolvedPolicy,
}

impl EmbedOptions {
    pub fn with_catalog(mut self, catalog: CatalogOptions) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn with_unresolved(mut self, policy: UnresolvedPolicy) -> Self {
        self.unresolved = policy;
        self
    }
}

/// Result of one embedding run.
#[derive(Debug, Clone)]
pub struct EmbedReport {
    /// The rewritten document.
    pub output: String,
    pub references: FontReferences,
    pub resolved: ResolutionMap,
    pub unresolved: Vec<String>,
    pub catalog_size: usize,
    pub skipped_files: usize,
}

/// Serializable digest of an [`EmbedReport`], without the document body.
#[derive(Debug, Clone, Serialize)]
pub struct EmbedSummary {
    pub references: Vec<String>,
    pub resolved: Vec<ResolvedEntry>,
    pub unresolved: Vec<String>,
    pub catalog_size: usize,
    pub skipped_files: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResolvedEntry {
    pub reference: String,
    pub path: PathBuf,
    pub pass: MatchPass,
}

impl EmbedReport {
    pub fn summary(&self) -> EmbedSummary {
        EmbedSummary {
            references: self.references.iter().cloned().collect(),
            resolved: self
                .resolved
                .iter()
                .map(|(reference, font)| ResolvedEntry {
                    reference: reference.clone(),
                    path: font.path.clone(),
                    pass: font.pass,
                })
                .collect(),
            unresolved: self.unresolved.clone(),
            catalog_size: self.catalog_size,
            skipped_files: self.skipped_files,
        }
    }
}

/// Embed every resolvable referenced font into `svg`, walking `dirs` for fonts.
pub fn embed_fonts(svg: &str, dirs: &FontDirs, opts: &EmbedOptions) -> Result<EmbedReport> {
    let doc = parse_document(svg)?;
    let references = extract_references(&doc);
    info!("found {} referenced font famil(ies)", references.len());

    let catalog = if references.is_empty() {
        FontCatalog::default()
    } else {
        FontCatalog::build(dirs, &opts.catalog)
    };

    finish(svg, &doc, references, &catalog, opts.unresolved)
}

/// Same as [`embed_fonts`], with the document parsed and the catalog in hand.
pub fn embed_with_catalog(
    svg: &str,
    doc: &Document,
    catalog: &FontCatalog,
    policy: UnresolvedPolicy,
) -> Result<EmbedReport> {
    finish(svg, doc, extract_references(doc), catalog, policy)
}

fn finish(
    svg: &str,
    doc: &Document,
    references: FontReferences,
    catalog: &FontCatalog,
    policy: UnresolvedPolicy,
) -> Result<EmbedReport> {
    let resolution = resolve(&references, catalog);

    if !resolution.is_complete() {
        match policy {
            UnresolvedPolicy::Ignore => {}
            UnresolvedPolicy::Warn => {
                for name in &resolution.unresolved {
                    warn!("no font found for {name:?}; it will not be embedded");
                }
            }
            UnresolvedPolicy::Error => {
                return Err(anyhow!(
                    "no font found for: {}",
                    resolution.unresolved.join(", ")
                ));
            }
        }
    }

    let output = if resolution.resolved.is_empty() {
        svg.to_string()
    } else {
        let css = build_stylesheet(&resolution.resolved)?;
        info!("embedding {} font(s)", resolution.resolved.len());
        splice_style(svg, doc, &css)?
    };

    Ok(EmbedReport {
        output,
        references,
        resolved: resolution.resolved,
        unresolved: resolution.unresolved,
        catalog_size: catalog.len(),
        skipped_files: catalog.skipped(),
    })
}
