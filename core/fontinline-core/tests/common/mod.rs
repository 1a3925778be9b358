//! Synthetic font fixtures shared by the integration tests.

use std::fs;
use std::path::{Path, PathBuf};

use write_fonts::tables::name::{Name, NameRecord};
use write_fonts::types::NameId;
use write_fonts::FontBuilder;

/// Build an sfnt whose `name` table carries the given family (ID 1) and full (ID 4) names.
pub fn named_font(family: &str, full: &str) -> Vec<u8> {
    let mut records = Vec::new();
    for (id, value) in [(1u16, family), (4u16, full)] {
        if !value.is_empty() {
            records.push(NameRecord::new(
                3,
                1,
                0x409,
                NameId::new(id),
                value.to_string().into(),
            ));
        }
    }

    let mut builder = FontBuilder::new();
    builder
        .add_table(&Name::new(records))
        .expect("add name table");
    builder.build()
}

/// Write a named font to `dir/file_name` and return its path.
pub fn write_font(dir: &Path, file_name: &str, family: &str, full: &str) -> PathBuf {
    let path = dir.join(file_name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create font dir");
    }
    fs::write(&path, named_font(family, full)).expect("write font");
    path
}
