use email_normalize::{TextStripConfig, strip_plain_text, strip_plain_text_with};

fn stripped(body: &str) -> String {
    strip_plain_text(Some(body)).unwrap()
}

#[test]
fn test_absent_body_stays_absent() {
    assert_eq!(strip_plain_text(None), None);
}

#[test]
fn test_quoted_lines_removed() {
    assert_eq!(stripped("line one\n> quoted\nline two"), "line one\nline two");
    assert_eq!(stripped("a\n| piped\n>> nested\n>>> deep\n>\nb"), "a\nb");
}

#[test]
fn test_quote_marker_needs_space_or_end() {
    assert_eq!(stripped(">not a quote\n->arrow"), ">not a quote\n->arrow");
}

#[test]
fn test_star_marker_recognized_by_default() {
    assert_eq!(stripped("keep\n* starred"), "keep");
}

#[test]
fn test_reply_banner_truncates() {
    assert_eq!(
        stripped("keep this\n---- Original Message ----\ndropped"),
        "keep this"
    );
    assert_eq!(
        stripped("keep\n-----Original Message-----\nFrom: a@b.c\n\nnot quoted but gone"),
        "keep"
    );
}

#[test]
fn test_forward_banner_truncates() {
    assert_eq!(
        stripped("See below\n\n---------- Forwarded message ---------\nFrom: x <x@y.z>\nbody"),
        "See below"
    );
    assert_eq!(
        stripped("FYI\n\nBegin forwarded message:\n\nFrom: x"),
        "FYI"
    );
}

#[test]
fn test_lead_in_and_quote_removed() {
    let body = "Sounds good.\n\n\
                On Mon, Jan 6, 2020 at 9:00 AM Alice <alice@example.com> wrote:\n\
                > Can we meet?\n\
                > Thanks\n";
    assert_eq!(stripped(body), "Sounds good.");
}

#[test]
fn test_lead_in_wrapped_over_two_lines() {
    let body = "Thanks!\n\n\
                On Mon, Jan 6, 2020 at 9:00 AM Alice Example <alice@example.com>\n\
                wrote:\n\
                > quoted";
    assert_eq!(stripped(body), "Thanks!");
}

#[test]
fn test_wrapped_lead_in_never_leaks() {
    let result = stripped("On Jan 1,\n2020, Alice wrote:\nquoted");
    assert!(!result.contains("wrote"));
    assert!(!result.contains("Jan 1"));
}

#[test]
fn test_lead_in_right_after_content_keeps_content() {
    let body = "Hi Bob,\n\
                See you tomorrow.\n\
                On Mon, Jan 6, 2020 at 9:00 AM Alice <alice@example.com> wrote:\n\
                > quoted";
    assert_eq!(stripped(body), "Hi Bob,\nSee you tomorrow.");

    let body = "Sounds good.\n\nBest,\nJohn\nOn Mon, Jan 6, 2020, Alice wrote:\n> quoted";
    assert_eq!(stripped(body), "Sounds good.\n\nBest,\nJohn");
}

#[test]
fn test_sent_from_removed() {
    assert_eq!(stripped("See you there\n\nSent from my iPhone"), "See you there");
    assert_eq!(stripped("Bis dann\nVon meinem iPhone gesendet"), "Bis dann");
}

#[test]
fn test_trailing_signature_delimiter_removed() {
    assert_eq!(stripped("Hello\n\n-- \nJohn"), "Hello");
    assert_eq!(stripped("Hello\n--\nJohn\n\n\n"), "Hello");
}

#[test]
fn test_signature_with_several_lines_kept() {
    assert_eq!(
        stripped("Hello\n-- \nJohn\nAcme"),
        "Hello\n--\nJohn\nAcme"
    );
}

#[test]
fn test_blank_runs_collapse() {
    assert_eq!(stripped("a\n\n\n\nb\n\n\nc"), "a\n\nb\n\nc");
    assert_eq!(stripped("\n\n  padded  \n\n"), "padded");
}

#[test]
fn test_sample_reply() {
    let body = "This is a sample message\n\
                in two lines\n\
                \n\
                \n\
                \n\
                Some more text\n\
                \n\
                On Sat, May 7, 2011 at 4:52 AM, Juana <juanadiaz@gmail.com> wrote:\n\
                > Old text\n";
    assert_eq!(
        stripped(body),
        "This is a sample message\nin two lines\n\nSome more text"
    );
}

#[test]
fn test_fully_quoted_body_is_empty_not_absent() {
    assert_eq!(strip_plain_text(Some("> a\n> b")), Some(String::new()));
    assert_eq!(strip_plain_text(Some("")), Some(String::new()));
}

#[test]
fn test_crlf_body() {
    assert_eq!(
        stripped("line one\r\n> quoted\r\nline two\r\n"),
        "line one\nline two"
    );
}

#[test]
fn test_long_lines_exempt_from_matching() {
    let quote = format!("> {}", "x".repeat(498));
    assert_eq!(stripped(&format!("keep\n{quote}")), format!("keep\n{quote}"));

    let lead_in = format!("On {} wrote:", "a".repeat(290));
    assert_eq!(stripped(&lead_in), lead_in);

    let long_banner = format!("{}Original Message-----", "-".repeat(300));
    assert_eq!(
        stripped(&format!("keep\n{long_banner}\nafter")),
        format!("keep\n{long_banner}\nafter")
    );
}

#[test]
fn test_ceiling_is_strict() {
    let at_ceiling = format!("> {}", "a".repeat(198));
    assert_eq!(at_ceiling.chars().count(), 200);
    assert_eq!(stripped(&format!("keep\n{at_ceiling}")), "keep");

    let over_ceiling = format!("> {}", "a".repeat(199));
    assert_eq!(
        stripped(&format!("keep\n{over_ceiling}")),
        format!("keep\n{over_ceiling}")
    );
}

#[test]
fn test_ceiling_counts_characters_not_bytes() {
    let line = format!("> {}", "é".repeat(150));
    assert!(line.len() > 200);
    assert_eq!(stripped(&format!("keep\n{line}")), "keep");
}

#[test]
fn test_configurable_ceiling() {
    let config = TextStripConfig {
        max_line_length: 10,
        ..TextStripConfig::default()
    };
    assert_eq!(
        strip_plain_text_with(Some("Hi\nOn Monday, Alice wrote:"), &config).as_deref(),
        Some("Hi\nOn Monday, Alice wrote:")
    );
    assert_eq!(
        strip_plain_text_with(Some("Hi\n> short"), &config).as_deref(),
        Some("Hi")
    );
}
