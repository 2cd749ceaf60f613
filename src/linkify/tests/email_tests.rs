use crate::linkify::{scan, LinkKind, Linkifier, LinkifyConfig};

#[test]
fn test_email_wins_over_bare_domain() {
    let spans = scan("contact me at user@example.com today");

    assert_eq!(spans.len(), 1);
    assert_eq!(spans[0].kind, LinkKind::Email);
    assert_eq!(spans[0].start, 14);
    assert_eq!(spans[0].end, 30);
    assert_eq!(spans[0].text, "user@example.com");
}

#[test]
fn test_local_part_punctuation() {
    let spans = scan("first.last-x_y@mail.example.co");

    assert_eq!(spans.len(), 1);
    assert_eq!(spans[0].text, "first.last-x_y@mail.example.co");
}

#[test]
fn test_email_has_no_trailing_scan() {
    let spans = scan("user@example.com/path");

    assert_eq!(spans.len(), 1);
    assert_eq!(spans[0].kind, LinkKind::Email);
    assert_eq!(spans[0].end, 16);
}

#[test]
fn test_email_excludes_sentence_period() {
    let spans = scan("user@example.com.");

    assert_eq!(spans.len(), 1);
    assert_eq!(spans[0].text, "user@example.com");
}

#[test]
fn test_email_in_parentheses() {
    let spans = scan("(user@example.com)");

    assert_eq!(spans.len(), 1);
    assert_eq!((spans[0].start, spans[0].end), (1, 17));
}

#[test]
fn test_unicode_email() {
    let spans = scan("écrire à rené@exemple.fr");

    assert_eq!(spans.len(), 1);
    assert_eq!(spans[0].kind, LinkKind::Email);
    assert_eq!(spans[0].start, 9);
    assert_eq!(spans[0].end, 24);
    assert_eq!(spans[0].text, "rené@exemple.fr");
}

#[test]
fn test_missing_local_part_falls_back_to_url() {
    let spans = scan("@example.com");

    assert_eq!(spans.len(), 1);
    assert_eq!(spans[0].kind, LinkKind::Url);
    assert_eq!(spans[0].start, 1);
}

#[test]
fn test_emails_disabled_splits_address() {
    let linkifier = Linkifier::with_config(&LinkifyConfig { detect_emails: false, ..Default::default() });
    let spans = linkifier.scan("user@example.com");

    assert_eq!(spans.len(), 1);
    assert_eq!(spans[0].kind, LinkKind::Url);
    assert_eq!(spans[0].start, 5);
    assert_eq!(spans[0].text, "http://example.com");
}

#[test]
fn test_href_is_mailto() {
    let spans = scan("write to a@b.co");
    assert_eq!(spans[0].href(), "mailto:a@b.co");
}
