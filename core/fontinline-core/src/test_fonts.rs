//! Tiny synthetic fonts for unit tests.

use write_fonts::tables::name::{Name, NameRecord};
use write_fonts::types::NameId;
use write_fonts::FontBuilder;

pub(crate) struct NameSpec {
    platform_id: u16,
    encoding_id: u16,
    language_id: u16,
    name_id: u16,
    value: &'static str,
}

impl NameSpec {
    pub(crate) fn windows(name_id: u16, value: &'static str) -> Self {
        Self {
            platform_id: 3,
            encoding_id: 1,
            language_id: 0x409,
            name_id,
            value,
        }
    }

    pub(crate) fn windows_lang(language_id: u16, name_id: u16, value: &'static str) -> Self {
        Self {
            language_id,
            ..Self::windows(name_id, value)
        }
    }

    pub(crate) fn mac(name_id: u16, value: &'static str) -> Self {
        Self {
            platform_id: 1,
            encoding_id: 0,
            language_id: 0,
            name_id,
            value,
        }
    }
}

/// An sfnt holding only a `name` table with the given records.
pub(crate) fn font_with_names(specs: &[NameSpec]) -> Vec<u8> {
    let records: Vec<NameRecord> = specs
        .iter()
        .map(|spec| {
            NameRecord::new(
                spec.platform_id,
                spec.encoding_id,
                spec.language_id,
                NameId::new(spec.name_id),
                spec.value.to_string().into(),
            )
        })
        .collect();

    let mut builder = FontBuilder::new();
    builder
        .add_table(&Name::new(records))
        .expect("add name table");
    builder.build()
}

/// Windows-platform font with the given family and full names.
pub(crate) fn named_font(family: &'static str, full: &'static str) -> Vec<u8> {
    font_with_names(&[NameSpec::windows(1, family), NameSpec::windows(4, full)])
}
