//! Core types for normalized emails

use chrono::{DateTime, Utc};
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Analysis-ready fields extracted from one raw message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParsedEmail {
    /// Decoded subject, absent when the message has none
    pub subject: Option<String>,

    /// Sender header address, falling back to From
    pub sender: Address,

    /// First From address
    pub from: Address,

    /// To, Cc and Bcc recipients in that order
    pub recipients: Vec<Recipient>,

    /// All headers, grouped by capitalized name
    pub headers: HeaderMap,

    /// Top-level MIME type
    pub mime_type: String,

    /// Date sent, when the Date header parses
    pub date: Option<DateTime<Utc>>,

    /// Selected text/plain body
    pub body_plain: Option<String>,

    /// Selected text/html body, normalized by a parse/serialize round trip
    pub body_html: Option<String>,

    /// Attached files
    pub attachments: Vec<Attachment>,

    /// Has any `List-*` header
    pub is_subscription: bool,

    /// Forward prefix in the subject or forward banner in the body
    pub is_forwarded: bool,

    /// Plain body without quoted history, lead-ins and banners
    pub stripped_text: Option<String>,

    /// HTML body without the client's quoted thread and signature
    pub stripped_html: Option<String>,

    /// Subject without reply/forward prefixes
    pub stripped_subject: Option<String>,

    /// Subject contains at least one emoji
    pub subject_has_emojis: bool,

    /// Text following the last sign-off phrase
    pub email_signature: Option<String>,
}

impl ParsedEmail {
    /// Serialize the record as JSON
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Mailbox with optional display name.
///
/// Both fields are `None` when the source header was present but could not
/// be parsed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    /// Address (e.g., "john@example.com")
    pub email: Option<String>,

    /// Display name (e.g., "John Doe")
    pub name: Option<String>,
}

impl Address {
    /// Build an address, dropping display names that are empty or look like
    /// an address themselves.
    #[must_use]
    pub fn new(email: impl Into<String>, display_name: Option<&str>) -> Self {
        let name = display_name
            .map(str::trim)
            .filter(|name| !name.is_empty() && !name.contains('@'))
            .map(ToString::to_string);

        Self {
            email: Some(email.into()),
            name,
        }
    }

    /// Placeholder for an unparseable header
    #[must_use]
    pub const fn unknown() -> Self {
        Self {
            email: None,
            name: None,
        }
    }

    #[must_use]
    pub const fn is_unknown(&self) -> bool {
        self.email.is_none() && self.name.is_none()
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.name, &self.email) {
            (Some(name), Some(email)) => write!(f, "{name} <{email}>"),
            (None, Some(email)) => write!(f, "{email}"),
            (Some(name), None) => write!(f, "{name}"),
            (None, None) => write!(f, "(unknown)"),
        }
    }
}

/// Outcome of reading a single-address header
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderAddress {
    /// The header held at least one mailbox
    Parsed(Address),
    /// The header was present but not a valid address list
    Unparseable,
    /// The header was absent or held no mailbox
    Missing,
}

impl HeaderAddress {
    /// Collapse to an address, using the placeholder for anything unparsed
    #[must_use]
    pub fn into_address(self) -> Address {
        match self {
            Self::Parsed(address) => address,
            Self::Unparseable | Self::Missing => Address::unknown(),
        }
    }
}

/// Recipient header a recipient was listed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecipientKind {
    To,
    Cc,
    Bcc,
}

impl RecipientKind {
    /// Header name holding recipients of this kind
    #[must_use]
    pub const fn header_name(self) -> &'static str {
        match self {
            Self::To => "To",
            Self::Cc => "Cc",
            Self::Bcc => "Bcc",
        }
    }
}

impl fmt::Display for RecipientKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::To => write!(f, "to"),
            Self::Cc => write!(f, "cc"),
            Self::Bcc => write!(f, "bcc"),
        }
    }
}

/// A To/Cc/Bcc recipient
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipient {
    pub email: Option<String>,
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub kind: RecipientKind,
}

impl Recipient {
    #[must_use]
    pub fn new(address: Address, kind: RecipientKind) -> Self {
        Self {
            email: address.email,
            name: address.name,
            kind,
        }
    }
}

/// Attached file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    /// File name, if the part declared one
    pub name: Option<String>,

    pub mime_type: String,

    /// Decoded size in bytes
    pub size: usize,
}

/// Headers grouped by name, in first-seen order, keeping every value.
///
/// Lookups ignore ASCII case.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderMap {
    entries: Vec<(String, Vec<String>)>,
}

impl HeaderMap {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Add a value, grouping it under an existing name when present
    pub fn append(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self
            .entries
            .iter_mut()
            .find(|(existing, _)| existing.eq_ignore_ascii_case(&name))
        {
            Some((_, values)) => values.push(value),
            None => self.entries.push((name, vec![value])),
        }
    }

    /// All values recorded for a header
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(existing, _)| existing.eq_ignore_ascii_case(name))
            .map(|(_, values)| values.as_slice())
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(name, values)| (name.as_str(), values.as_slice()))
    }

    /// Number of distinct header names
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for HeaderMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (name, value) in iter {
            map.append(name, value);
        }
        map
    }
}

impl Serialize for HeaderMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, values) in &self.entries {
            map.serialize_entry(name, values)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for HeaderMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct HeaderMapVisitor;

        impl<'de> Visitor<'de> for HeaderMapVisitor {
            type Value = HeaderMap;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of header names to lists of values")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<HeaderMap, A::Error> {
                let mut map = HeaderMap::new();
                while let Some((name, values)) = access.next_entry::<String, Vec<String>>()? {
                    for value in values {
                        map.append(name.clone(), value);
                    }
                }
                Ok(map)
            }
        }

        deserializer.deserialize_map(HeaderMapVisitor)
    }
}
