// Enforce at crate level
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

//! Email Content Normalizer
//!
//! Separates new content from quoted history, reply lead-ins, forwarding
//! banners and signature blocks in already-decoded email fields, across
//! dozens of locales and client conventions.
//!
//! # Features
//!
//! - Locale-aware pattern library compiled once and shared read-only
//! - Fixed-point removal of `Re:`/`Fwd:`-style subject prefixes
//! - Plain-text quote, lead-in and banner stripping with a per-line
//!   length ceiling against hostile input
//! - Quoted thread and signature removal for Gmail HTML
//! - Signature extraction after the last sign-off phrase
//! - Forwarded, subscription and emoji classifiers
//! - A complete message pipeline on top of `mailparse`
//!
//! # Example
//!
//! ```rust
//! use email_normalize::{normalize_subject, parse_email, strip_plain_text};
//!
//! assert_eq!(
//!     normalize_subject(Some("Fwd: Re: hello")).as_deref(),
//!     Some("hello")
//! );
//! assert_eq!(
//!     strip_plain_text(Some("line one\n> quoted\nline two")).as_deref(),
//!     Some("line one\nline two")
//! );
//!
//! let raw = b"From: sender@example.com\r\nSubject: Re: Hello\r\n\r\nBody";
//! let email = parse_email(raw).unwrap();
//! println!("Subject: {:?}", email.stripped_subject);
//! ```

mod classify;
mod config;
mod error;
mod html;
mod parser;
pub mod patterns;
mod signature;
mod subject;
mod text;
mod types;

pub use classify::{has_emojis, is_forwarded, is_subscription};
pub use config::{DEFAULT_MAX_LINE_LENGTH, HtmlMarkers, NormalizeConfig, TextStripConfig};
pub use error::{NormalizeError, Result};
pub use html::{normalize_html, strip_html, strip_html_with};
pub use parser::{parse_email, parse_email_with};
pub use patterns::{Anchor, CompiledMatcher, EmojiTable, PatternLibrary, PatternSet};
pub use signature::extract_signature;
pub use subject::normalize_subject;
pub use text::{strip_plain_text, strip_plain_text_with};
pub use types::*;
