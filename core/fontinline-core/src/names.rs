//! Name table extraction (made by FontLab https://www.fontlab.com/)

use anyhow::{Context, Result};
use read_fonts::tables::name::{Name, NameRecord};
use read_fonts::types::NameId;
use read_fonts::{FontRef, Offset, TableProvider};

/// The two names a font is matched by.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FontNames {
    /// Full font name (name ID 4), e.g. "Arial Bold Italic".
    pub full_name: String,
    /// Font family name (name ID 1), e.g. "Arial".
    pub family_name: String,
}

/// How raw name record bytes become strings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NameDecoding {
    /// UTF-16BE when the bytes contain a NUL, Latin-1 otherwise.
    #[default]
    NullByteHeuristic,
    /// Decode according to each record's platform and encoding IDs.
    Platform,
}

/// Read the full and family names from an sfnt (`.ttf`/`.otf`) blob.
///
/// Records are scanned in table order and the first record for each name ID
/// wins. Scanning stops once both names are known. Either name is left empty
/// when the table has no record for it.
pub fn read_font_names(data: &[u8], decoding: NameDecoding) -> Result<FontNames> {
    let font = FontRef::new(data).context("parsing font")?;
    let name = font.name().context("reading name table")?;
    Ok(names_from_table(&name, decoding))
}

fn names_from_table(name: &Name, decoding: NameDecoding) -> FontNames {
    let mut names = FontNames::default();

    for record in name.name_record() {
        let id = record.name_id();
        let wanted = (id == NameId::FULL_NAME && names.full_name.is_empty())
            || (id == NameId::FAMILY_NAME && names.family_name.is_empty());
        if !wanted {
            continue;
        }

        let Some(value) = decode_record(name, record, decoding) else {
            continue;
        };
        if id == NameId::FULL_NAME {
            names.full_name = value;
        } else {
            names.family_name = value;
        }

        if !names.full_name.is_empty() && !names.family_name.is_empty() {
            break;
        }
    }

    names
}

fn decode_record(name: &Name, record: &NameRecord, decoding: NameDecoding) -> Option<String> {
    let data = name.string_data();
    match decoding {
        NameDecoding::NullByteHeuristic => {
            let start = record.string_offset().non_null().unwrap_or(0);
            let end = start + record.length() as usize;
            let bytes = data.as_bytes().get(start..end)?;
            Some(decode_name_bytes(bytes))
        }
        NameDecoding::Platform => record.string(data).ok().map(|s| s.to_string()),
    }
}

/// Decode raw name record bytes without looking at platform IDs.
///
/// Windows and Unicode platform strings are UTF-16BE, so anything in the
/// Basic Latin range carries a zero high byte. Macintosh strings are single
/// byte and never contain NUL.
pub fn decode_name_bytes(bytes: &[u8]) -> String {
    if bytes.contains(&0) {
        let units = bytes
            .chunks_exact(2)
            .map(|pair| u16::from_be_bytes([pair[0], pair[1]]));
        char::decode_utf16(units)
            .map(|c| c.unwrap_or(char::REPLACEMENT_CHARACTER))
            .collect()
    } else {
        bytes.iter().map(|&b| char::from(b)).collect()
    }
}
