//! Emoji table built from the bundled Unicode emoji data file

use crate::error::{NormalizeError, Result};
use std::collections::HashSet;

/// Emoji data bundled with the crate, in the `emoji-data.txt` layout:
/// `code(s) ;\tdefault style ;\tlevel ;\tstatus ;\tsources # comment`.
pub const BUNDLED_EMOJI_DATA: &str = include_str!("../../data/emoji-data.txt");

const FIELD_SEPARATOR: &str = " ;\t";

/// Literal emoji strings whose default presentation is emoji style.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmojiTable {
    entries: Vec<String>,
}

impl EmojiTable {
    /// Parse an emoji data file. Rows whose default style is not `emoji`
    /// are skipped; any malformed row fails the whole table.
    pub fn parse(data: &str) -> Result<Self> {
        let mut entries: Vec<String> = Vec::new();
        let mut seen: HashSet<String> = HashSet::new();

        for (index, raw) in data.lines().enumerate() {
            let line = raw.trim_end();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let row = EmojiRow::parse(line).map_err(|details| NormalizeError::EmojiData {
                line: index + 1,
                details,
            })?;

            if row.default_style != "emoji" {
                continue;
            }
            if seen.insert(row.literal.clone()) {
                entries.push(row.literal);
            }
        }

        Ok(Self { entries })
    }

    /// Table built from [`BUNDLED_EMOJI_DATA`].
    pub fn bundled() -> Result<Self> {
        Self::parse(BUNDLED_EMOJI_DATA)
    }

    #[must_use]
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

struct EmojiRow<'a> {
    literal: String,
    default_style: &'a str,
}

impl<'a> EmojiRow<'a> {
    fn parse(line: &'a str) -> std::result::Result<Self, String> {
        let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
        if fields.len() < 4 {
            return Err(format!(
                "expected at least 4 fields, found {}",
                fields.len()
            ));
        }

        let default_style = fields[1].trim();
        if default_style != "emoji" && default_style != "text" {
            return Err(format!("unknown default style {default_style:?}"));
        }

        let literal = codepoints_to_string(fields[0])?;

        Ok(Self {
            literal,
            default_style,
        })
    }
}

/// Convert a space-separated list of hex codepoints into the string they spell.
fn codepoints_to_string(codepoints: &str) -> std::result::Result<String, String> {
    let mut literal = String::new();
    for hex in codepoints.split_whitespace() {
        let value =
            u32::from_str_radix(hex, 16).map_err(|_| format!("invalid codepoint {hex:?}"))?;
        let ch = char::from_u32(value)
            .ok_or_else(|| format!("codepoint {hex} is not a scalar value"))?;
        literal.push(ch);
    }

    if literal.is_empty() {
        return Err("empty codepoint field".into());
    }

    Ok(literal)
}
