//! "Sent from my device" footers

/// Whole-line footers appended by mobile clients.
pub const SENT_FROM_PATTERNS: &[&str] = &[
    "Sent from .*",
    "Enviado desde .*",
    "Diese Nachricht wurde von meinem .* gesendet.",
    "Von meinem .* gesendet",
];
