//! Font file discovery for fontinline-core (made by FontLab https://www.fontlab.com/)

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use log::debug;
use walkdir::WalkDir;

/// Path to a candidate font file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontSourceRef {
    pub path: PathBuf,
}

/// Trait for enumerating candidate font files from some backing store.
pub trait FontDiscovery {
    fn discover(&self) -> Vec<FontSourceRef>;
}

/// Recursive filesystem walker that collects `.ttf` and `.otf` files.
///
/// Roots are walked in the order given. Missing or unreadable roots are
/// skipped rather than reported, since the default search list routinely
/// names directories that do not exist on a given machine.
#[derive(Debug, Clone)]
pub struct PathDiscovery {
    roots: Vec<PathBuf>,
    follow_symlinks: bool,
}

impl PathDiscovery {
    pub fn new<I, P>(roots: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        let roots = roots.into_iter().map(Into::into).collect();
        Self {
            roots,
            follow_symlinks: false,
        }
    }

    pub fn follow_symlinks(mut self, follow: bool) -> Self {
        self.follow_symlinks = follow;
        self
    }
}

impl FontDiscovery for PathDiscovery {
    fn discover(&self) -> Vec<FontSourceRef> {
        let mut found = Vec::new();
        let mut seen = HashSet::new();

        for root in &self.roots {
            if !root.is_dir() {
                debug!("skipping font directory {}: not a directory", root.display());
                continue;
            }

            for entry in WalkDir::new(root).follow_links(self.follow_symlinks) {
                let entry = match entry {
                    Ok(entry) => entry,
                    Err(err) => {
                        debug!("skipping unreadable entry under {}: {err}", root.display());
                        continue;
                    }
                };
                if entry.file_type().is_file() && is_font(entry.path()) {
                    let path = entry.path().to_path_buf();
                    if seen.insert(path.clone()) {
                        found.push(FontSourceRef { path });
                    }
                }
            }
        }

        found
    }
}

fn is_font(path: &Path) -> bool {
    let ext = match path.extension().and_then(|e| e.to_str()) {
        Some(ext) => ext.to_ascii_lowercase(),
        None => return false,
    };

    matches!(ext.as_str(), "ttf" | "otf")
}
