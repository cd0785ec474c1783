//! Locale pattern tables and the matchers compiled from them
//!
//! Each concern (forward banners, reply banners, "X wrote:" lead-ins, device
//! footers, subject prefixes, sign-offs, emoji) keeps its source table as a
//! plain list of strings. The tables are deduplicated, joined into a single
//! alternation and compiled once into a case-insensitive [`CompiledMatcher`].
//! The resulting [`PatternLibrary`] is immutable and shared process-wide.

pub mod emoji;
pub mod forward;
pub mod reply;
pub mod sent;
pub mod signature;

use crate::error::{NormalizeError, Result};
use regex::{Regex, RegexBuilder};
use std::collections::HashSet;
use std::fmt;
use std::sync::OnceLock;
use tracing::debug;

pub use emoji::{BUNDLED_EMOJI_DATA, EmojiTable};

// The reply lead-in union carries a few hundred `.*` alternatives; with
// Unicode case folding it outgrows the default compiled size limit.
const REGEX_SIZE_LIMIT: usize = 64 * 1024 * 1024;

/// How a concern's alternation is anchored when compiled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    /// `^(...)$`: the entry must be the whole line.
    FullLine,
    /// `^---+ ?(...) ?---+$`: the entry must be the whole line, flanked by dashes.
    Banner,
    /// `^(...): `: the entry must start the text, followed by a colon and a space.
    SubjectPrefix,
    /// No anchoring; an entry may occur anywhere.
    Embedded,
}

impl Anchor {
    #[must_use]
    pub fn wrap(self, alternation: &str) -> String {
        match self {
            Self::FullLine => format!("^(?:{alternation})$"),
            Self::Banner => format!("^---+ ?(?:{alternation}) ?---+$"),
            Self::SubjectPrefix => format!("^(?:{alternation}): "),
            Self::Embedded => format!("(?:{alternation})"),
        }
    }
}

/// An ordered, duplicate-free list of locale patterns for one concern.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatternSet {
    entries: Vec<String>,
}

impl PatternSet {
    /// Build a set from regular-expression entries, dropping later duplicates.
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::default().extend(entries)
    }

    /// Build a set from literal strings, escaping regex metacharacters.
    pub fn literals<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::new(entries.into_iter().map(|e| regex::escape(e.as_ref())))
    }

    /// Append entries, keeping first-seen order and skipping duplicates.
    #[must_use]
    pub fn extend<I, S>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen: HashSet<String> = self.entries.iter().cloned().collect();
        for entry in entries {
            let entry = entry.into();
            if seen.insert(entry.clone()) {
                self.entries.push(entry);
            }
        }
        self
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

    /// Entries joined with `|`.
    #[must_use]
    pub fn alternation(&self) -> String {
        self.entries.join("|")
    }

    pub fn compile(&self, concern: &'static str, anchor: Anchor) -> Result<CompiledMatcher> {
        CompiledMatcher::build(concern, &anchor.wrap(&self.alternation()))
    }
}

/// A compiled, case-insensitive matcher for one concern.
///
/// `^` and `$` match at line boundaries (LF or CRLF), so a matcher can be run
/// against a single line or against a whole body.
#[derive(Clone)]
pub struct CompiledMatcher {
    concern: &'static str,
    regex: Regex,
}

impl CompiledMatcher {
    pub fn build(concern: &'static str, pattern: &str) -> Result<Self> {
        let regex = RegexBuilder::new(pattern)
            .case_insensitive(true)
            .multi_line(true)
            .crlf(true)
            .size_limit(REGEX_SIZE_LIMIT)
            .build()
            .map_err(|source| NormalizeError::InvalidPattern { concern, source })?;

        Ok(Self { concern, regex })
    }

    #[must_use]
    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    #[must_use]
    pub const fn concern(&self) -> &'static str {
        self.concern
    }

    #[must_use]
    pub const fn regex(&self) -> &Regex {
        &self.regex
    }
}

impl fmt::Debug for CompiledMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompiledMatcher")
            .field("concern", &self.concern)
            .field("pattern_len", &self.regex.as_str().len())
            .finish()
    }
}

/// Every matcher the normalizer needs, compiled once.
#[derive(Debug, Clone)]
pub struct PatternLibrary {
    /// Whole-line forward openers or dashed forward banners.
    pub forward_body: CompiledMatcher,
    /// `Fwd: `-style subject prefixes.
    pub forward_subject: CompiledMatcher,
    /// Dashed `Original Message` banners.
    pub reply_header: CompiledMatcher,
    /// "X wrote:" lead-in lines.
    pub reply_wrote: CompiledMatcher,
    /// `Re: `-style subject prefixes.
    pub reply_subject: CompiledMatcher,
    /// Reply prefix, forward prefix or a trailing ` (fwd)`.
    pub subject_strip: CompiledMatcher,
    /// "Sent from my device" lines.
    pub sent_from: CompiledMatcher,
    /// Sign-off phrases preceding a signature.
    pub closing: CompiledMatcher,
    /// Phone footers inside an extracted signature.
    pub phone_closing: CompiledMatcher,
    /// Any emoji from the emoji table.
    pub emoji: CompiledMatcher,
    emoji_count: usize,
}

impl PatternLibrary {
    /// Compile the built-in tables with the bundled emoji data.
    pub fn build() -> Result<Self> {
        Self::with_emoji_table(&EmojiTable::bundled()?)
    }

    /// Compile the built-in tables with a caller-supplied emoji table.
    pub fn with_emoji_table(emojis: &EmojiTable) -> Result<Self> {
        let forward_headers = PatternSet::new(forward::FORWARD_HEADER_PATTERNS.iter().copied());
        let forward_starts =
            PatternSet::new(forward::FORWARD_BODY_START_PATTERNS.iter().copied());
        let forward_subjects = PatternSet::new(forward::FORWARD_SUBJECTS.iter().copied());
        let reply_headers = PatternSet::new(reply::REPLY_HEADER_PATTERNS.iter().copied());
        let reply_wrote = PatternSet::new(reply::REPLY_WROTE_PATTERNS.iter().copied());
        let reply_subjects = PatternSet::new(reply::REPLY_SUBJECTS.iter().copied());
        let sent_from = PatternSet::new(sent::SENT_FROM_PATTERNS.iter().copied());
        let closings = PatternSet::new(signature::CLOSING_PATTERNS.iter().copied());
        let phone_closings = PatternSet::new(signature::PHONE_CLOSING_PATTERNS.iter().copied());
        let emoji_set = PatternSet::literals(emojis.entries());

        let forward_body = CompiledMatcher::build(
            "forward body",
            &Anchor::FullLine.wrap(&format!(
                "{}|{}",
                forward_starts.alternation(),
                Anchor::Banner.wrap(&forward_headers.alternation())
            )),
        )?;

        let subject_strip = CompiledMatcher::build(
            "subject strip",
            &format!(
                "{}|{}| \\(fwd\\)$",
                Anchor::SubjectPrefix.wrap(&reply_subjects.alternation()),
                Anchor::SubjectPrefix.wrap(&forward_subjects.alternation()),
            ),
        )?;

        let closing = CompiledMatcher::build(
            "closing",
            &format!(
                "^[ \\t]*(?:{})(?:[ \\t]*[,.!]|[ \\t]*$)",
                closings.alternation()
            ),
        )?;

        let library = Self {
            forward_body,
            forward_subject: forward_subjects.compile("forward subject", Anchor::SubjectPrefix)?,
            reply_header: reply_headers.compile("reply header", Anchor::Banner)?,
            reply_wrote: reply_wrote.compile("reply lead-in", Anchor::FullLine)?,
            reply_subject: reply_subjects.compile("reply subject", Anchor::SubjectPrefix)?,
            subject_strip,
            sent_from: sent_from.compile("sent from", Anchor::FullLine)?,
            closing,
            phone_closing: phone_closings.compile("phone closing", Anchor::FullLine)?,
            emoji: emoji_set.compile("emoji", Anchor::Embedded)?,
            emoji_count: emoji_set.len(),
        };

        debug!(
            forward_headers = forward_headers.len(),
            reply_headers = reply_headers.len(),
            reply_lead_ins = reply_wrote.len(),
            closings = closings.len(),
            emojis = library.emoji_count,
            "Compiled pattern library"
        );

        Ok(library)
    }

    /// Number of distinct emoji compiled into [`Self::emoji`].
    #[must_use]
    pub const fn emoji_count(&self) -> usize {
        self.emoji_count
    }
}

static LIBRARY: OnceLock<PatternLibrary> = OnceLock::new();

/// Build the shared library now, reporting a malformed table as an error
/// instead of panicking on first use.
pub fn init() -> Result<&'static PatternLibrary> {
    if let Some(library) = LIBRARY.get() {
        return Ok(library);
    }
    let library = PatternLibrary::build()?;
    Ok(LIBRARY.get_or_init(|| library))
}

/// The shared library, built on first use.
///
/// # Panics
///
/// Panics if the bundled tables fail to compile. Call [`init`] at startup to
/// handle that case as an error.
pub fn global() -> &'static PatternLibrary {
    LIBRARY.get_or_init(|| {
        PatternLibrary::build()
            .unwrap_or_else(|e| panic!("pattern library failed to initialize: {e}"))
    })
}
