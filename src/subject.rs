//! Reply and forward prefix removal for subjects

use crate::patterns;

/// Remove reply/forward prefixes and a trailing ` (fwd)` until none remain.
///
/// `"Fwd: Re: hello"` becomes `"hello"`. Each pass removes the first match
/// of any marker, so the loop ends once a pass leaves the subject unchanged.
#[must_use]
pub fn normalize_subject(subject: Option<&str>) -> Option<String> {
    let matcher = patterns::global().subject_strip.regex();
    let mut stripped = subject?.to_string();

    loop {
        let next = matcher.replace(&stripped, "");
        if next == stripped {
            break;
        }
        stripped = next.into_owned();
    }

    Some(stripped)
}
