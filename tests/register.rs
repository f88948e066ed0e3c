//! Registration of labels.

mod common;

use common::init_logging;
use domain_idn::{register, register_utf8, ErrorKind, Flags};
use rstest::rstest;

#[rstest]
#[case(Some("müller"), Some("xn--mller-kva"), "xn--mller-kva")]
#[case(Some("müller"), Some("XN--MLLER-KVA"), "xn--mller-kva")]
#[case(Some("müller"), None, "xn--mller-kva")]
#[case(None, Some("xn--mller-kva"), "xn--mller-kva")]
#[case(None, Some("Xn--Mller-Kva"), "xn--mller-kva")]
#[case(Some("example"), None, "example")]
#[case(Some("straße"), None, "xn--strae-oqa")]
#[case(Some("\u{03B1}\u{03B9}"), None, "xn--mxaq")]
#[case(Some("\u{1E922}\u{200C}\u{1E923}"), None, "xn--0ug1411pea")]
#[case(Some("\u{0627}\u{0644}\u{0639}\u{0631}\u{0628}\u{064A}\u{0629}"), None,
       "xn--mgbcd4a2b0d2b")]
fn register_succeeds(
    #[case] ulabel: Option<&str>,
    #[case] alabel: Option<&str>,
    #[case] expected: &str,
) {
    init_logging();
    assert_eq!(register(ulabel, alabel, Flags::EMPTY).unwrap(), expected);
}

#[rstest]
#[case(Some("müller"), Some("xn--wrong-encoding"), ErrorKind::Mismatch)]
#[case(Some("müller"), Some("xn--bcher-kva"), ErrorKind::Mismatch)]
#[case(None, None, ErrorKind::StructuralViolation)]
#[case(None, Some("mller-kva"), ErrorKind::PunycodeError)]
#[case(None, Some("xn---tda"), ErrorKind::PunycodeError)]
#[case(Some("Müller"), None, ErrorKind::DisallowedCodepoint)]
#[case(Some("mu\u{0308}ller"), None, ErrorKind::NotNfc)]
#[case(Some("_sip"), None, ErrorKind::DisallowedCodepoint)]
#[case(Some("-müller"), None, ErrorKind::StructuralViolation)]
#[case(Some("a\u{00B7}b"), None, ErrorKind::ContextViolation)]
#[case(Some("a\u{0378}"), None, ErrorKind::UnassignedCodepoint)]
#[case(Some("\u{1FB3}"), None, ErrorKind::DisallowedCodepoint)]
#[case(Some("\u{1F80}"), None, ErrorKind::DisallowedCodepoint)]
fn register_fails(
    #[case] ulabel: Option<&str>,
    #[case] alabel: Option<&str>,
    #[case] kind: ErrorKind,
) {
    init_logging();
    assert_eq!(
        register(ulabel, alabel, Flags::EMPTY).unwrap_err().kind(),
        kind
    );
}

#[test]
fn contexto_rules() {
    init_logging();

    // MIDDLE DOT is fine between two l.
    assert_eq!(
        register(Some("l\u{00B7}l"), None, Flags::EMPTY).unwrap(),
        "xn--ll-0ea"
    );
}

#[test]
fn oversized_label() {
    init_logging();
    let label = "\u{4E2D}".repeat(100_000);
    assert_eq!(
        register(Some(&label), None, Flags::EMPTY).unwrap_err().kind(),
        ErrorKind::LabelTooLong
    );
}

#[test]
fn unassigned_never_allowed() {
    init_logging();
    assert_eq!(
        register(Some("a\u{0378}"), None, Flags::ALLOW_UNASSIGNED)
            .unwrap_err()
            .kind(),
        ErrorKind::UnassignedCodepoint
    );
}

#[test]
fn invalid_flags() {
    init_logging();
    assert_eq!(
        register(
            Some("müller"),
            None,
            Flags::TRANSITIONAL | Flags::NONTRANSITIONAL
        )
        .unwrap_err()
        .kind(),
        ErrorKind::InvalidFlags
    );
}

#[test]
fn utf8_input() {
    init_logging();
    assert_eq!(
        register_utf8(Some("müller".as_bytes()), None, Flags::EMPTY)
            .unwrap(),
        "xn--mller-kva"
    );
    assert_eq!(
        register_utf8(Some(b"m\xFCller"), None, Flags::EMPTY)
            .unwrap_err()
            .kind(),
        ErrorKind::InvalidEncoding
    );
}
