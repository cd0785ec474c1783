//! Plain-text body stripping
//!
//! Removes quoted lines, "X wrote:" lead-ins (including ones a client wrapped
//! over two lines) and device footers, then cuts the body at the first
//! forward or reply banner.

use crate::config::TextStripConfig;
use crate::patterns::{self, PatternLibrary};
use regex::Regex;
use std::sync::LazyLock;
use tracing::trace;

static QUOTE_MARKER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[>|]+( |$)").unwrap());

static QUOTE_OR_STAR_MARKER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[>|*]+( |$)").unwrap());

static BLANK_RUN_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{2,}").unwrap());

/// Signature delimiter line (`-- ` once trimmed).
const SIGNATURE_DELIMITER: &str = "--";

/// One physical line of the body.
struct Line<'a> {
    /// The line as written, without its line ending
    raw: &'a str,
    trimmed: &'a str,
    /// Length of `trimmed` in characters
    len: usize,
}

impl<'a> Line<'a> {
    fn new(raw: &'a str) -> Self {
        let raw = raw.strip_suffix('\r').unwrap_or(raw);
        let trimmed = raw.trim();
        Self {
            raw,
            trimmed,
            len: trimmed.chars().count(),
        }
    }
}

/// Strip quoted history, lead-ins and banners from a plain-text body.
///
/// Returns `None` only when there is no body. A body made only of quoted
/// content strips to an empty string.
#[must_use]
pub fn strip_plain_text(body: Option<&str>) -> Option<String> {
    strip_plain_text_with(body, &TextStripConfig::default())
}

/// [`strip_plain_text`] with explicit settings.
#[must_use]
pub fn strip_plain_text_with(body: Option<&str>, config: &TextStripConfig) -> Option<String> {
    let body = body?;
    Some(strip_lines(body, config, patterns::global()))
}

fn strip_lines(body: &str, config: &TextStripConfig, patterns: &PatternLibrary) -> String {
    let quote_marker = if config.star_quote_markers {
        &*QUOTE_OR_STAR_MARKER_REGEX
    } else {
        &*QUOTE_MARKER_REGEX
    };

    let lines: Vec<Line<'_>> = body.split('\n').map(Line::new).collect();
    let mut kept: Vec<&str> = Vec::with_capacity(lines.len());
    let mut skip_next = false;

    for (index, line) in lines.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }

        // Checked before any pattern so a hostile line costs nothing to match.
        if line.len > config.max_line_length {
            trace!(line = index, len = line.len, "Keeping over-long line unmatched");
            kept.push(line.raw);
            continue;
        }

        let text = line.trimmed;

        if quote_marker.is_match(text) || patterns.reply_wrote.is_match(text) {
            continue;
        }

        // A next line that is already a lead-in of its own is dropped on the
        // next iteration; merging with it would also drop the current line.
        if let Some(next) = lines.get(index + 1)
            && next.len <= config.max_line_length
            && (continues_previous(next.trimmed) || !patterns.reply_wrote.is_match(next.trimmed))
        {
            let merged = format!("{text} {}", next.trimmed);
            if patterns.reply_wrote.is_match(&merged) {
                trace!(line = index, "Dropping lead-in wrapped over two lines");
                skip_next = true;
                continue;
            }
        }

        if patterns.sent_from.is_match(text) {
            continue;
        }

        if patterns.forward_body.is_match(text) || patterns.reply_header.is_match(text) {
            trace!(line = index, "Quoted thread starts here");
            break;
        }

        kept.push(text);
    }

    while kept.last().is_some_and(|line| line.is_empty()) {
        kept.pop();
    }

    if kept.len() >= 2 && kept[kept.len() - 2] == SIGNATURE_DELIMITER {
        kept.truncate(kept.len() - 2);
    }

    let joined = kept.join("\n");
    BLANK_RUN_REGEX
        .replace_all(joined.trim(), "\n\n")
        .into_owned()
}

/// Wrapped text resumes mid-sentence: lowercase or a digit, not a capital.
fn continues_previous(line: &str) -> bool {
    line.chars()
        .next()
        .is_some_and(|c| c.is_lowercase() || c.is_numeric())
}
