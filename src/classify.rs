//! Boolean signals over already-extracted fields

use crate::patterns;
use crate::types::HeaderMap;

/// Header name prefix used by mailing list software (RFC 2369).
const LIST_HEADER_PREFIX: &str = "list-";

/// Forward prefix in the subject, or a forward banner on any body line.
#[must_use]
pub fn is_forwarded(subject: Option<&str>, body_plain: Option<&str>) -> bool {
    let library = patterns::global();
    subject.is_some_and(|s| library.forward_subject.is_match(s))
        || body_plain.is_some_and(|b| library.forward_body.is_match(b))
}

/// Any emoji anywhere in the subject.
#[must_use]
pub fn has_emojis(subject: Option<&str>) -> bool {
    subject.is_some_and(|s| patterns::global().emoji.is_match(s))
}

/// Any `List-*` header, compared case-insensitively.
#[must_use]
pub fn is_subscription(headers: &HeaderMap) -> bool {
    headers.names().any(|name| {
        name.get(..LIST_HEADER_PREFIX.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(LIST_HEADER_PREFIX))
    })
}
