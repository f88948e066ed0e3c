//! The bidi rule.
//!
//! Labels containing right-to-left characters have to satisfy the six
//! conditions of RFC 5893, section 2, so that they display unambiguously
//! no matter which labels surround them.

use crate::base::error::{Error, ErrorKind};
use unicode_bidi::{bidi_class, BidiClass};

/// Returns whether a label contains right-to-left characters.
///
/// These are characters of the bidi classes R, AL, and AN.
#[must_use]
pub fn is_rtl_label(label: &[char]) -> bool {
    label.iter().any(|&ch| {
        matches!(bidi_class(ch), BidiClass::R | BidiClass::AL | BidiClass::AN)
    })
}

/// Checks the bidi rule for a label.
///
/// Labels without right-to-left characters always pass.
pub fn check_bidi(label: &[char]) -> Result<(), Error> {
    if !is_rtl_label(label) {
        return Ok(());
    }
    let first = match label.first() {
        Some(ch) => bidi_class(*ch),
        None => return Ok(()),
    };

    // The last character that isn’t a non-spacing mark.
    let last = label
        .iter()
        .rev()
        .map(|ch| bidi_class(*ch))
        .find(|class| *class != BidiClass::NSM);

    match first {
        BidiClass::R | BidiClass::AL => {
            // Rule 2
            if !label.iter().all(|&ch| {
                matches!(
                    bidi_class(ch),
                    BidiClass::R
                        | BidiClass::AL
                        | BidiClass::AN
                        | BidiClass::EN
                        | BidiClass::ES
                        | BidiClass::CS
                        | BidiClass::ET
                        | BidiClass::ON
                        | BidiClass::BN
                        | BidiClass::NSM
                )
            }) {
                return Err(violation("invalid character in RTL label"));
            }

            // Rule 3
            if !matches!(
                last,
                Some(BidiClass::R)
                    | Some(BidiClass::AL)
                    | Some(BidiClass::EN)
                    | Some(BidiClass::AN)
            ) {
                return Err(violation("invalid end of RTL label"));
            }

            // Rule 4
            let has_en =
                label.iter().any(|&ch| bidi_class(ch) == BidiClass::EN);
            let has_an =
                label.iter().any(|&ch| bidi_class(ch) == BidiClass::AN);
            if has_en && has_an {
                return Err(violation(
                    "European and Arabic numbers mixed in RTL label",
                ));
            }
        }
        BidiClass::L => {
            // Rule 5
            if !label.iter().all(|&ch| {
                matches!(
                    bidi_class(ch),
                    BidiClass::L
                        | BidiClass::EN
                        | BidiClass::ES
                        | BidiClass::CS
                        | BidiClass::ET
                        | BidiClass::ON
                        | BidiClass::BN
                        | BidiClass::NSM
                )
            }) {
                return Err(violation("invalid character in LTR label"));
            }

            // Rule 6
            if !matches!(last, Some(BidiClass::L) | Some(BidiClass::EN)) {
                return Err(violation("invalid end of LTR label"));
            }
        }
        // Rule 1
        _ => return Err(violation("label starts with a neutral character")),
    }
    Ok(())
}

fn violation(msg: &'static str) -> Error {
    Error::new(ErrorKind::StructuralViolation, msg)
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;

    fn check(s: &str) -> Result<(), Error> {
        check_bidi(&s.chars().collect::<Vec<_>>())
    }

    #[test]
    fn ltr_labels_pass() {
        assert!(check("example").is_ok());
        assert!(check("1example").is_ok());
        assert!(check("").is_ok());
    }

    #[test]
    fn rtl_labels() {
        // Hebrew
        assert!(check("\u{05D0}\u{05D1}").is_ok());
        // Arabic with a trailing Arabic-Indic digit.
        assert!(check("\u{0628}\u{0661}").is_ok());
        // Hebrew with European digits at the end.
        assert!(check("\u{05D0}1").is_ok());
        // Digit first.
        assert!(check("1\u{05D0}").is_err());
        // Latin letter in an RTL label.
        assert!(check("\u{05D0}a").is_err());
        // Mixed numbers.
        assert!(check("\u{0628}1\u{0661}").is_err());
    }

    #[test]
    fn ltr_with_arabic_number() {
        assert!(check("a\u{0661}").is_err());
    }

    #[test]
    fn trailing_nsm() {
        // Hebrew letter followed by a point.
        assert!(check("\u{05D0}\u{05B0}").is_ok());
    }
}
