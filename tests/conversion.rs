//! Conversion of complete domain names.

mod common;

use common::init_logging;
use domain_idn::unicode::normalize::nfc;
use domain_idn::{
    lookup, to_ascii, to_unicode, ConversionFlags, ErrorKind, Flags,
    DOMAIN_MAX_LENGTH, LABEL_MAX_LENGTH,
};
use rstest::rstest;

//----------- Tests ----------------------------------------------------------

#[rstest]
#[case("münchen.de", "xn--mnchen-3ya.de")]
#[case("MÜNCHEN.DE", "xn--mnchen-3ya.de")]
#[case("bücher.example.", "xn--bcher-kva.example.")]
#[case("example.com", "example.com")]
#[case("xn--mnchen-3ya.de", "xn--mnchen-3ya.de")]
#[case("straße.de", "xn--strae-oqa.de")]
#[case("\u{4F8B}\u{3048}.\u{30C6}\u{30B9}\u{30C8}", "xn--r8jz45g.xn--zckzah")]
#[case("пример.рф", "xn--e1afmkfd.xn--p1ai")]
#[case("\u{05E2}\u{05D1}\u{05E8}\u{05D9}\u{05EA}.il", "xn--5dbqzzl.il")]
#[case("_sip._tcp.example", "_sip._tcp.example")]
#[case("\u{1FB3}", "xn--mxaq")]
#[case("\u{1F80}.gr", "xn--uxa970l.gr")]
#[case("\u{1E922}\u{200C}\u{1E923}", "xn--0ug1411pea")]
fn to_ascii_converts(#[case] input: &str, #[case] expected: &str) {
    init_logging();
    assert_eq!(to_ascii(input, Flags::EMPTY).unwrap(), expected);
}

#[rstest]
#[case("xn--mnchen-3ya.de", "münchen.de")]
#[case("xn--bcher-kva.example.", "bücher.example.")]
#[case("XN--BCHER-KVA.example", "bücher.example")]
#[case("xn--r8jz45g.xn--zckzah", "\u{4F8B}\u{3048}.\u{30C6}\u{30B9}\u{30C8}")]
#[case("example.com", "example.com")]
#[case("", "")]
fn to_unicode_converts(#[case] input: &str, #[case] expected: &str) {
    init_logging();
    assert_eq!(to_unicode(input, Flags::EMPTY).unwrap(), expected);
}

#[rstest]
#[case("a..b", ErrorKind::StructuralViolation)]
#[case(".example", ErrorKind::StructuralViolation)]
#[case("-ü.de", ErrorKind::StructuralViolation)]
#[case("ab--ü.de", ErrorKind::StructuralViolation)]
#[case("\u{0301}a.de", ErrorKind::StructuralViolation)]
#[case("\u{05D0}a.de", ErrorKind::StructuralViolation)]
#[case("a\u{2603}.de", ErrorKind::DisallowedCodepoint)]
#[case("a\u{2488}.de", ErrorKind::DisallowedCodepoint)]
#[case("a\u{0378}.de", ErrorKind::UnassignedCodepoint)]
#[case("a\u{200C}b.de", ErrorKind::ContextViolation)]
#[case("xn--mnchen-3y!.de", ErrorKind::PunycodeError)]
#[case("xn---tda.de", ErrorKind::PunycodeError)]
#[case("xn--abc-.de", ErrorKind::PunycodeError)]
fn to_ascii_fails(#[case] input: &str, #[case] kind: ErrorKind) {
    init_logging();
    assert_eq!(to_ascii(input, Flags::EMPTY).unwrap_err().kind(), kind);
}

#[rstest]
#[case("münchen")]
#[case("bücher")]
#[case("straße")]
#[case("\u{4E2D}\u{6587}")]
#[case("ελληνικά")]
#[case("\u{05E2}\u{05D1}\u{05E8}\u{05D9}\u{05EA}")]
#[case("\u{0939}\u{093F}\u{0928}\u{094D}\u{0926}\u{0940}")]
#[case("mu\u{0308}nchen")]
fn roundtrip(#[case] label: &str) {
    init_logging();
    let flags = ConversionFlags::new().with_nfc_input(true);
    let ascii = to_ascii(label, flags).unwrap();
    assert!(ascii.is_ascii());
    assert_eq!(to_unicode(&ascii, flags).unwrap(), nfc(label));
}

#[rstest]
#[case("münchen.de")]
#[case("MÜNCHEN.de.")]
#[case("example.com")]
#[case("_srv.xn--bcher-kva.example")]
#[case("\u{4F8B}\u{3048}\u{3002}\u{30C6}\u{30B9}\u{30C8}")]
fn idempotent(#[case] domain: &str) {
    init_logging();
    let once = to_ascii(domain, Flags::EMPTY).unwrap();
    let twice = to_ascii(&once, Flags::EMPTY).unwrap();
    assert_eq!(once, twice);
}

#[test]
fn label_length_boundary() {
    init_logging();

    let label = "a".repeat(LABEL_MAX_LENGTH);
    assert_eq!(to_ascii(&label, Flags::EMPTY).unwrap(), label);
    let label = "a".repeat(LABEL_MAX_LENGTH + 1);
    assert_eq!(
        to_ascii(&label, Flags::EMPTY).unwrap_err().kind(),
        ErrorKind::LabelTooLong
    );

    // The length applies to the encoded label.
    let label = format!("{}ü", "a".repeat(55));
    assert_eq!(
        to_ascii(&label, Flags::EMPTY).unwrap().len(),
        LABEL_MAX_LENGTH
    );
    let label = format!("{}ü", "a".repeat(56));
    assert_eq!(
        to_ascii(&label, Flags::EMPTY).unwrap_err().kind(),
        ErrorKind::LabelTooLong
    );

    let label = "\u{4E2D}".repeat(200_000);
    assert_eq!(
        to_ascii(&label, Flags::EMPTY).unwrap_err().kind(),
        ErrorKind::LabelTooLong
    );
}

#[test]
fn domain_length_boundary() {
    init_logging();

    // Three labels of 63 and one of 61 octets make 253 characters which
    // are 255 octets in wire format.
    let long = "a".repeat(63);
    let name = format!("{0}.{0}.{0}.{1}", long, "a".repeat(61));
    assert_eq!(name.len() + 2, DOMAIN_MAX_LENGTH);
    assert_eq!(to_ascii(&name, Flags::EMPTY).unwrap(), name);

    let name = format!("{0}.{0}.{0}.{1}", long, "a".repeat(62));
    assert_eq!(
        to_ascii(&name, Flags::EMPTY).unwrap_err().kind(),
        ErrorKind::DomainTooLong
    );
}

#[test]
fn nfc_input_flag() {
    init_logging();

    // Decomposed, i.e., not normalized but canonically equivalent to
    // "münchen.de".
    let raw = "mu\u{0308}nchen.de";
    let normalized = nfc(raw);
    let nfc_flags = ConversionFlags::new().with_nfc_input(true);
    assert_eq!(
        to_ascii(&normalized, ConversionFlags::new()).unwrap(),
        to_ascii(raw, nfc_flags).unwrap()
    );

    // Without TR46 mapping, the normalization really is needed.
    let no_tr46 = ConversionFlags::new().with_no_tr46(true);
    assert_eq!(
        to_ascii(raw, no_tr46).unwrap_err().kind(),
        ErrorKind::NotNfc
    );
    assert_eq!(
        to_ascii(&normalized, no_tr46).unwrap(),
        to_ascii(raw, no_tr46.with_nfc_input(true)).unwrap()
    );
}

#[test]
fn processing_modes() {
    init_logging();

    let transitional = ConversionFlags::new().with_transitional(true);
    assert_eq!(to_ascii("faß.de", transitional).unwrap(), "fass.de");
    assert_eq!(
        to_ascii("faß.de", ConversionFlags::new()).unwrap(),
        "xn--fa-hia.de"
    );
    assert_eq!(
        to_ascii("faß.de", Flags::NONTRANSITIONAL).unwrap(),
        "xn--fa-hia.de"
    );
    assert_eq!(
        to_ascii("faß.de", Flags::TRANSITIONAL | Flags::NONTRANSITIONAL)
            .unwrap_err()
            .kind(),
        ErrorKind::InvalidFlags
    );
}

#[test]
fn std3_rules() {
    init_logging();

    let std3 = ConversionFlags::new().with_use_std3_ascii_rules(true);
    assert_eq!(
        to_ascii("_sip._tcp.example", std3).unwrap_err().kind(),
        ErrorKind::DisallowedCodepoint
    );
    assert_eq!(
        to_ascii("-example.com", std3).unwrap_err().kind(),
        ErrorKind::StructuralViolation
    );
    assert_eq!(to_ascii("münchen.de", std3).unwrap(), "xn--mnchen-3ya.de");
}

#[test]
fn unassigned_code_points() {
    init_logging();

    let allow = ConversionFlags::new().with_allow_unassigned(true);
    assert!(to_ascii("a\u{0378}.de", allow).is_ok());
}

#[test]
fn lookup_checks_roundtrip() {
    init_logging();

    assert_eq!(
        lookup("Mu\u{0308}nchen.de", Flags::EMPTY).unwrap(),
        "xn--mnchen-3ya.de"
    );
    assert_eq!(
        lookup("xn--mnchen-3ya.de", Flags::EMPTY).unwrap(),
        "xn--mnchen-3ya.de"
    );
}
