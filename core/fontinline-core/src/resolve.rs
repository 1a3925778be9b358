//! Matching font references to catalog records (made by FontLab https://www.fontlab.com/)

use std::fmt;
use std::path::PathBuf;

use indexmap::IndexMap;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::catalog::{FontCatalog, FontRecord};
use crate::references::FontReferences;

/// One tier of the matching policy. Tiers run in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatchPass {
    /// Reference equals the font's full name.
    FullName,
    /// Reference equals the font's family name.
    FamilyName,
    /// Reference occurs somewhere inside the font's family name.
    FamilySubstring,
}

impl MatchPass {
    pub const ALL: [MatchPass; 3] = [
        MatchPass::FullName,
        MatchPass::FamilyName,
        MatchPass::FamilySubstring,
    ];

    pub fn matches(self, record: &FontRecord, reference: &str) -> bool {
        match self {
            MatchPass::FullName => record.canonical_name == reference,
            MatchPass::FamilyName => record.family_name == reference,
            MatchPass::FamilySubstring => {
                !reference.is_empty() && record.family_name.contains(reference)
            }
        }
    }
}

impl fmt::Display for MatchPass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MatchPass::FullName => "full name",
            MatchPass::FamilyName => "family name",
            MatchPass::FamilySubstring => "family substring",
        };
        f.write_str(label)
    }
}

/// Where a reference was resolved to, and by which tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedFont {
    pub path: PathBuf,
    pub pass: MatchPass,
}

/// Reference name → resolved font, in reference order.
pub type ResolutionMap = IndexMap<String, ResolvedFont>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolution {
    pub resolved: ResolutionMap,
    /// References no pass could match, in reference order.
    pub unresolved: Vec<String>,
}

impl Resolution {
    pub fn is_complete(&self) -> bool {
        self.unresolved.is_empty()
    }
}

/// Resolve references against the catalog with the three-tier policy.
///
/// Each pass only sees references left over from earlier passes, and within
/// a pass the first record in catalog order wins.
pub fn resolve(references: &FontReferences, catalog: &FontCatalog) -> Resolution {
    let mut found: IndexMap<&str, ResolvedFont> = IndexMap::new();

    for pass in MatchPass::ALL {
        let pending: Vec<&str> = references
            .iter()
            .map(String::as_str)
            .filter(|name| !found.contains_key(name))
            .collect();
        if pending.is_empty() {
            break;
        }

        for name in pending {
            if let Some(record) = catalog.records().iter().find(|r| pass.matches(r, name)) {
                debug!("{name:?} -> {} ({pass})", record.path.display());
                found.insert(
                    name,
                    ResolvedFont {
                        path: record.path.clone(),
                        pass,
                    },
                );
            }
        }
    }

    let mut resolution = Resolution::default();
    for name in references {
        match found.swap_remove(name.as_str()) {
            Some(font) => {
                resolution.resolved.insert(name.clone(), font);
            }
            None => resolution.unresolved.push(name.clone()),
        }
    }
    resolution
}
