//! Sign-off phrases that precede a signature block

/// Closing phrases. A phrase only counts when it starts a line and is
/// followed by `,`, `.`, `!` or the end of the line, so "regards" inside a
/// sentence is not mistaken for a sign-off.
pub const CLOSING_PATTERNS: &[&str] = &[
    // English
    "Best regards",
    "Kind regards",
    "Warm regards",
    "Warmest regards",
    "Regards",
    "Best wishes",
    "All the best",
    "Best",
    "Cheers",
    "Thanks",
    "Thank you",
    "Many thanks",
    "Thanks again",
    "Sincerely",
    "Yours sincerely",
    "Yours truly",
    "Yours faithfully",
    "Cordially",
    "Respectfully",
    // Spanish
    "Saludos",
    "Saludos cordiales",
    "Un saludo",
    "Un abrazo",
    "Atentamente",
    "Cordialmente",
    "Gracias",
    "Muchas gracias",
    // Portuguese
    "Abraços",
    "Atenciosamente",
    "Obrigado",
    "Obrigada",
    // French
    "Cordialement",
    "Bien à vous",
    "Bien cordialement",
    "Merci",
    // German
    "Mit freundlichen Grüßen",
    "Freundliche Grüße",
    "Viele Grüße",
    "Beste Grüße",
    "Liebe Grüße",
    "Gruß",
    // Italian
    "Cordiali saluti",
    "Distinti saluti",
    "Saluti",
    "Grazie",
    // Dutch
    "Met vriendelijke groet",
    "Groeten",
];

/// Footers added by phone and tablet clients, removed from an extracted
/// signature.
pub const PHONE_CLOSING_PATTERNS: &[&str] = &[
    "Sent from my .*",
    "Sent via .*",
    "Get Outlook for .*",
    "Enviado desde mi .*",
    "Enviado do meu .*",
    "Envoyé de mon .*",
    "Von meinem .* gesendet",
    "Inviato da .*",
    "Verzonden vanaf mijn .*",
];
