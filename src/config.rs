//! Tunables for the stripping heuristics

use crate::error::{NormalizeError, Result};
use kuchiki::Selectors;
use serde::{Deserialize, Serialize};

/// Lines longer than this (in characters, after trimming) are kept verbatim
/// and never matched against the locale patterns.
pub const DEFAULT_MAX_LINE_LENGTH: usize = 200;

/// Configuration for every normalization step.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizeConfig {
    /// Plain-text stripping
    pub text: TextStripConfig,

    /// HTML stripping
    pub html: HtmlMarkers,
}

impl NormalizeConfig {
    /// Load configuration from JSON. Missing fields take their defaults;
    /// HTML selectors are checked before the configuration is returned.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.html.validate()?;
        Ok(config)
    }
}

/// Plain-text stripper settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextStripConfig {
    /// Per-line length ceiling bounding matching cost on hostile input
    pub max_line_length: usize,

    /// Treat `*` like `>` and `|` as a quote marker
    pub star_quote_markers: bool,
}

impl Default for TextStripConfig {
    fn default() -> Self {
        Self {
            max_line_length: DEFAULT_MAX_LINE_LENGTH,
            star_quote_markers: true,
        }
    }
}

/// Provenance header and CSS selectors of the webmail client whose quoted
/// thread and signature markup is removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HtmlMarkers {
    /// Header whose presence identifies the client
    pub provenance_header: String,

    /// Selector of the quoted thread container
    pub quote_selector: String,

    /// Selector of the signature container
    pub signature_selector: String,
}

impl HtmlMarkers {
    /// Check that both selectors parse.
    pub fn validate(&self) -> Result<()> {
        for selector in [&self.quote_selector, &self.signature_selector] {
            Selectors::compile(selector)
                .map_err(|()| NormalizeError::InvalidSelector(selector.clone()))?;
        }
        Ok(())
    }
}

impl Default for HtmlMarkers {
    fn default() -> Self {
        Self {
            provenance_header: "X-Google-Smtp-Source".into(),
            quote_selector: "div.gmail_quote".into(),
            signature_selector: "div.gmail_signature".into(),
        }
    }
}
