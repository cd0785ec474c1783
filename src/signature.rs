//! Signature extraction from plain-text bodies

use crate::patterns;

/// Return the text following the last sign-off phrase ("Best,", "Regards,"),
/// minus any phone footer and surrounding whitespace, periods and commas.
///
/// `None` means no sign-off was found; a sign-off with nothing after it
/// yields an empty string.
#[must_use]
pub fn extract_signature(body: Option<&str>) -> Option<String> {
    let body = body?;
    let library = patterns::global();

    let last_closing = library.closing.regex().find_iter(body).last()?;
    let trailing = &body[last_closing.end()..];

    let signature = library.phone_closing.regex().replace(trailing, "");

    Some(
        signature
            .trim_matches(|c: char| c.is_whitespace() || c == '.' || c == ',')
            .to_string(),
    )
}
