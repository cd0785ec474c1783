use email_normalize::extract_signature;

fn signature(body: &str) -> Option<String> {
    extract_signature(Some(body))
}

#[test]
fn test_absent_body_has_no_signature() {
    assert_eq!(extract_signature(None), None);
}

#[test]
fn test_no_closing_phrase() {
    assert_eq!(signature("Hello there\nJohn"), None);
    assert_eq!(signature("Thanks for the help yesterday.\nJohn"), None);
}

#[test]
fn test_closing_inside_sentence_ignored() {
    assert_eq!(signature("Please send my regards to everyone.\nJohn"), None);
}

#[test]
fn test_text_after_closing() {
    assert_eq!(signature("See you soon.\n\nBest,\nJohn").as_deref(), Some("John"));
    assert_eq!(signature("Ok\n\nBest regards, Jane").as_deref(), Some("Jane"));
}

#[test]
fn test_last_closing_wins() {
    let body = "Thanks, that helps.\n\nI will look into it.\n\nBest,\nJohn Smith\nAcme Corp";
    assert_eq!(signature(body).as_deref(), Some("John Smith\nAcme Corp"));
}

#[test]
fn test_phone_footer_removed() {
    assert_eq!(
        signature("Cheers,\nJohn\n\nSent from my iPhone").as_deref(),
        Some("John")
    );
    assert_eq!(
        signature("Saludos,\nJuana\nEnviado desde mi iPhone").as_deref(),
        Some("Juana")
    );
}

#[test]
fn test_surrounding_punctuation_trimmed() {
    assert_eq!(
        signature("Best regards,\n\nJane Doe.\n").as_deref(),
        Some("Jane Doe")
    );
}

#[test]
fn test_unicode_whitespace_trimmed() {
    assert_eq!(
        signature("Best,\n\u{a0}John\u{a0}\n").as_deref(),
        Some("John")
    );
}

#[test]
fn test_closing_with_nothing_after() {
    assert_eq!(signature("Hello\n\nRegards,").as_deref(), Some(""));
}

#[test]
fn test_longer_phrase_preferred_over_prefix() {
    assert_eq!(
        signature("Hola\n\nSaludos cordiales,\nJuana").as_deref(),
        Some("Juana")
    );
    assert_eq!(
        signature("Ok\n\nThanks again!\nBob").as_deref(),
        Some("Bob")
    );
}

#[test]
fn test_case_insensitive() {
    assert_eq!(signature("thanks!\nbob").as_deref(), Some("bob"));
    assert_eq!(
        signature("mit freundlichen grüßen\nHans").as_deref(),
        Some("Hans")
    );
}
