//! Font catalog: discovered files and the names they answer to (made by FontLab https://www.fontlab.com/)

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::config::FontDirs;
use crate::discovery::{FontDiscovery, FontSourceRef, PathDiscovery};
use crate::names::{read_font_names, NameDecoding};

/// One font file and the names read from its `name` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontRecord {
    pub path: PathBuf,
    /// Full font name (name ID 4); empty when absent.
    pub canonical_name: String,
    /// Family name (name ID 1); empty when absent.
    pub family_name: String,
}

impl FontRecord {
    pub fn new(
        path: impl Into<PathBuf>,
        canonical_name: impl Into<String>,
        family_name: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            canonical_name: canonical_name.into(),
            family_name: family_name.into(),
        }
    }

    /// Read one font file and build its record.
    pub fn load(path: &Path, decoding: NameDecoding) -> Result<Self> {
        let data = fs::read(path).with_context(|| format!("reading font {}", path.display()))?;
        let names = read_font_names(&data, decoding)
            .with_context(|| format!("reading names from {}", path.display()))?;
        Ok(Self {
            path: path.to_path_buf(),
            canonical_name: names.full_name,
            family_name: names.family_name,
        })
    }
}

#[derive(Debug, Default, Clone)]
pub struct CatalogOptions {
    pub follow_symlinks: bool,
    pub decoding: NameDecoding,
}

impl CatalogOptions {
    pub fn with_follow_symlinks(mut self, follow: bool) -> Self {
        self.follow_symlinks = follow;
        self
    }

    pub fn with_decoding(mut self, decoding: NameDecoding) -> Self {
        self.decoding = decoding;
        self
    }
}

/// Every font found for this run, in directory priority order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FontCatalog {
    records: Vec<FontRecord>,
    skipped: usize,
}

impl FontCatalog {
    /// Walk `dirs` in order and read every `.ttf`/`.otf` file found.
    pub fn build(dirs: &FontDirs, opts: &CatalogOptions) -> Self {
        let discovery = PathDiscovery::new(dirs.roots()).follow_symlinks(opts.follow_symlinks);
        Self::from_discovery(&discovery, opts.decoding)
    }

    pub fn from_discovery(discovery: &dyn FontDiscovery, decoding: NameDecoding) -> Self {
        Self::from_sources(discovery.discover(), decoding)
    }

    /// Load records for the given files, skipping any that fail to load.
    pub fn from_sources<I>(sources: I, decoding: NameDecoding) -> Self
    where
        I: IntoIterator<Item = FontSourceRef>,
    {
        let mut catalog = Self::default();

        for source in sources {
            match FontRecord::load(&source.path, decoding) {
                Ok(record) => {
                    debug!(
                        "cataloged {} (name {:?}, family {:?})",
                        record.path.display(),
                        record.canonical_name,
                        record.family_name
                    );
                    catalog.records.push(record);
                }
                Err(err) => {
                    debug!("skipping {}: {err:#}", source.path.display());
                    catalog.skipped += 1;
                }
            }
        }

        info!(
            "cataloged {} font file(s), skipped {}",
            catalog.records.len(),
            catalog.skipped
        );
        catalog
    }

    pub fn from_records(records: Vec<FontRecord>) -> Self {
        Self {
            records,
            skipped: 0,
        }
    }

    pub fn records(&self) -> &[FontRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of candidate files that could not be read or parsed.
    pub fn skipped(&self) -> usize {
        self.skipped
    }
}
