use email_normalize::patterns::{self, forward, reply};
use email_normalize::*;

// --- PatternSet ---

#[test]
fn test_pattern_set_dedups_in_order() {
    let set = PatternSet::new(["b", "a", "b", "c", "a"]);
    assert_eq!(set.entries(), ["b", "a", "c"]);
    assert_eq!(set.alternation(), "b|a|c");
}

#[test]
fn test_pattern_set_extend_skips_known_entries() {
    let set = PatternSet::new(["Re"]).extend(["Aw", "Re", "Sv"]);
    assert_eq!(set.entries(), ["Re", "Aw", "Sv"]);
    assert_eq!(set.len(), 3);
}

#[test]
fn test_pattern_set_literals_are_escaped() {
    let set = PatternSet::literals(["a.b", "(x)"]);
    assert_eq!(set.entries(), [r"a\.b", r"\(x\)"]);
}

#[test]
fn test_locale_tables_contain_duplicates_that_are_dropped() {
    let headers = PatternSet::new(reply::REPLY_HEADER_PATTERNS.iter().copied());
    assert!(headers.len() < reply::REPLY_HEADER_PATTERNS.len());

    let lead_ins = PatternSet::new(reply::REPLY_WROTE_PATTERNS.iter().copied());
    assert!(lead_ins.len() < reply::REPLY_WROTE_PATTERNS.len());

    let subjects = PatternSet::new(reply::REPLY_SUBJECTS.iter().copied());
    assert!(subjects.len() < reply::REPLY_SUBJECTS.len());
    assert_eq!(subjects.entries().iter().filter(|e| *e == "SV").count(), 1);
}

#[test]
fn test_forward_tables_compile_as_is() {
    let subjects = PatternSet::new(forward::FORWARD_SUBJECTS.iter().copied());
    assert_eq!(subjects.len(), forward::FORWARD_SUBJECTS.len());
    assert!(subjects.compile("forward subject", Anchor::SubjectPrefix).is_ok());
}

// --- Anchor ---

#[test]
fn test_anchor_wrapping() {
    assert_eq!(Anchor::FullLine.wrap("a|b"), "^(?:a|b)$");
    assert_eq!(Anchor::Banner.wrap("a|b"), "^---+ ?(?:a|b) ?---+$");
    assert_eq!(Anchor::SubjectPrefix.wrap("a|b"), "^(?:a|b): ");
    assert_eq!(Anchor::Embedded.wrap("a|b"), "(?:a|b)");
}

#[test]
fn test_invalid_pattern_is_reported() {
    let result = PatternSet::new(["(unclosed"]).compile("broken", Anchor::FullLine);
    match result {
        Err(NormalizeError::InvalidPattern { concern, .. }) => assert_eq!(concern, "broken"),
        other => panic!("expected invalid pattern error, got {other:?}"),
    }
}

// --- Compiled library ---

#[test]
fn test_init_returns_the_global_library() {
    let initialized = patterns::init().unwrap();
    assert!(std::ptr::eq(initialized, patterns::global()));
}

#[test]
fn test_reply_header_banner() {
    let m = &patterns::global().reply_header;
    assert!(m.is_match("---- Original Message ----"));
    assert!(m.is_match("-----Original Message-----"));
    assert!(m.is_match("-----ORIGINAL MESSAGE-----"));
    assert!(m.is_match("-------- Ursprüngliche Nachricht --------"));
    assert!(m.is_match("----- Mensaje original -----"));
    assert!(!m.is_match("Original Message"));
    assert!(!m.is_match("see ---- Original Message ---- below"));
}

#[test]
fn test_forward_body_forms() {
    let m = &patterns::global().forward_body;
    assert!(m.is_match("Begin forwarded message:"));
    assert!(m.is_match("---------- Forwarded message ---------"));
    assert!(m.is_match("-------- Message transféré --------"));
    assert!(m.is_match("--- Mensaje reenviado de Juana ---"));
    assert!(!m.is_match("I will Begin forwarded message: later"));
}

#[test]
fn test_forward_body_matches_any_line_of_a_crlf_body() {
    let m = &patterns::global().forward_body;
    assert!(m.is_match("hi\r\nBegin forwarded message:\r\nFrom: a@b.c\r\n"));
    assert!(!m.is_match("hi\r\nnothing to see\r\n"));
}

#[test]
fn test_reply_lead_ins() {
    let m = &patterns::global().reply_wrote;
    assert!(m.is_match("On Mon, Jan 6, 2020 at 9:00 AM Alice <alice@example.com> wrote:"));
    assert!(m.is_match("Am 01.01.2020 um 10:00 schrieb Bob:"));
    assert!(m.is_match("Le 1 janv. 2020 à 10:00, Alice a écrit :"));
    assert!(m.is_match("El 3 de marzo de 2020, Juana escribió:"));
    assert!(m.is_match("2020-01-01 10:00 GMT+01:00 Bob <bob@example.com>:"));
    assert!(!m.is_match("I wrote the report yesterday"));
    assert!(!m.is_match("Hello Alice"));
}

#[test]
fn test_right_to_left_lead_ins() {
    let m = &patterns::global().reply_wrote;
    assert!(m.is_match("كتب أحمد على الاثنين \u{202b}10:00:"));
}

#[test]
fn test_sent_from_footers() {
    let m = &patterns::global().sent_from;
    assert!(m.is_match("Sent from my iPhone"));
    assert!(m.is_match("sent from Mail for Windows"));
    assert!(m.is_match("Von meinem iPad gesendet"));
    assert!(!m.is_match("It was sent from the office"));
}

#[test]
fn test_subject_prefixes() {
    let library = patterns::global();
    assert!(library.reply_subject.is_match("Re: lunch"));
    assert!(library.reply_subject.is_match("AW: Termin"));
    assert!(library.reply_subject.is_match("Odpowiedź: spotkanie"));
    assert!(!library.reply_subject.is_match("Rex: lunch"));
    assert!(!library.reply_subject.is_match("Re:lunch"));
    assert!(!library.reply_subject.is_match("lunch Re: today"));

    assert!(library.forward_subject.is_match("Fwd: lunch"));
    assert!(library.forward_subject.is_match("WG: Termin"));
    assert!(library.forward_subject.is_match("转发: 通知"));
    assert!(!library.forward_subject.is_match("Re: lunch"));
}

#[test]
fn test_bundled_emoji_table_is_compiled() {
    let library = patterns::global();
    assert!(library.emoji_count() > 900);
    assert!(library.emoji.is_match("🎉"));
    assert!(!library.emoji.is_match("abc 123 #"));
}

#[test]
fn test_library_with_custom_emoji_table() {
    let table = EmojiTable::parse("2764 ;\temoji ;\tL1 ;\tnone ;\tj\t# (❤) HEAVY BLACK HEART\n")
        .unwrap();
    let library = PatternLibrary::with_emoji_table(&table).unwrap();
    assert_eq!(library.emoji_count(), 1);
    assert!(library.emoji.is_match("I ❤ Rust"));
    assert!(!library.emoji.is_match("I 😀 Rust"));
}
