//! Contextual rules.
//!
//! Code points with the derived property CONTEXTJ or CONTEXTO are only
//! allowed if their surroundings satisfy the rule defined for them in
//! appendix A of RFC 5892. The functions here take the label as a slice
//! of characters and the position of the code point to check.

use super::Tables;
use unicode_joining_type::{get_joining_type, JoiningType as Ucd};
use unicode_normalization::char::canonical_combining_class;

/// The canonical combining class of a virama.
const VIRAMA: u8 = 9;

//------------ JoiningType ---------------------------------------------------

/// The Joining_Type property of a code point.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum JoiningType {
    /// Non-joining.
    U,

    /// Join causing.
    C,

    /// Dual joining.
    D,

    /// Left joining.
    L,

    /// Right joining.
    R,

    /// Transparent.
    T,
}

impl JoiningType {
    /// Returns the joining type of a code point.
    ///
    /// Code points not listed in the joining data are transparent if they
    /// are nonspacing or enclosing marks or format characters other than
    /// ZERO WIDTH NON-JOINER, and non-joining otherwise.
    #[must_use]
    pub fn of(ch: char) -> Self {
        match get_joining_type(ch) {
            Ucd::JoinCausing => JoiningType::C,
            Ucd::DualJoining => JoiningType::D,
            Ucd::LeftJoining => JoiningType::L,
            Ucd::RightJoining => JoiningType::R,
            Ucd::Transparent => JoiningType::T,
            Ucd::NonJoining => {
                if ch != '\u{200C}' && Tables::get().is_transparent(ch) {
                    JoiningType::T
                } else {
                    JoiningType::U
                }
            }
        }
    }
}

//------------ CONTEXTJ ------------------------------------------------------

/// Checks the rule for a CONTEXTJ code point at `pos`.
///
/// Returns `false` for code points without a CONTEXTJ rule.
#[must_use]
pub fn check_contextj(label: &[char], pos: usize) -> bool {
    let before = pos.checked_sub(1).map(|idx| label[idx]);
    let after_virama = before
        .map(|ch| canonical_combining_class(ch) == VIRAMA)
        .unwrap_or(false);
    match label[pos] {
        // ZERO WIDTH NON-JOINER, RFC 5892, A.1.
        '\u{200C}' => after_virama || joins_cursively(label, pos),
        // ZERO WIDTH JOINER, RFC 5892, A.2.
        '\u{200D}' => after_virama,
        _ => false,
    }
}

/// Checks whether a ZWNJ sits between two cursively joining characters.
///
/// This is the regular expression
/// `(Joining_Type:{L,D})(Joining_Type:T)*\u200C
/// (Joining_Type:T)*(Joining_Type:{R,D})`.
fn joins_cursively(label: &[char], pos: usize) -> bool {
    let left = label[..pos]
        .iter()
        .rev()
        .map(|ch| JoiningType::of(*ch))
        .find(|jt| *jt != JoiningType::T);
    let right = label[pos + 1..]
        .iter()
        .map(|ch| JoiningType::of(*ch))
        .find(|jt| *jt != JoiningType::T);
    matches!(left, Some(JoiningType::L) | Some(JoiningType::D))
        && matches!(right, Some(JoiningType::R) | Some(JoiningType::D))
}

//------------ CONTEXTO ------------------------------------------------------

/// Checks the rule for a CONTEXTO code point at `pos`.
///
/// Returns `false` for code points without a CONTEXTO rule.
#[must_use]
pub fn check_contexto(label: &[char], pos: usize) -> bool {
    let tables = Tables::get();
    let before = pos.checked_sub(1).map(|idx| label[idx]);
    let after = label.get(pos + 1).copied();
    match label[pos] {
        // MIDDLE DOT, A.3.
        '\u{00B7}' => before == Some('l') && after == Some('l'),
        // GREEK LOWER NUMERAL SIGN (KERAIA), A.4.
        '\u{0375}' => after.map(|ch| tables.is_greek(ch)).unwrap_or(false),
        // HEBREW PUNCTUATION GERESH and GERSHAYIM, A.5 and A.6.
        '\u{05F3}' | '\u{05F4}' => {
            before.map(|ch| tables.is_hebrew(ch)).unwrap_or(false)
        }
        // KATAKANA MIDDLE DOT, A.7.
        '\u{30FB}' => label
            .iter()
            .any(|&ch| ch != '\u{30FB}' && tables.is_japanese(ch)),
        // ARABIC-INDIC DIGITS, A.8.
        '\u{0660}'..='\u{0669}' => {
            !label.iter().any(|ch| matches!(ch, '\u{06F0}'..='\u{06F9}'))
        }
        // EXTENDED ARABIC-INDIC DIGITS, A.9.
        '\u{06F0}'..='\u{06F9}' => {
            !label.iter().any(|ch| matches!(ch, '\u{0660}'..='\u{0669}'))
        }
        _ => false,
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn zwnj() {
        // After a Devanagari virama.
        let label = chars("\u{0915}\u{094D}\u{200C}\u{0937}");
        assert!(check_contextj(&label, 2));

        // Between two dual-joining Arabic letters.
        let label = chars("\u{0628}\u{200C}\u{0628}");
        assert!(check_contextj(&label, 1));

        // With a transparent mark in between.
        let label = chars("\u{0628}\u{064E}\u{200C}\u{0627}");
        assert!(check_contextj(&label, 2));

        // Between Latin letters.
        let label = chars("a\u{200C}b");
        assert!(!check_contextj(&label, 1));

        // Between dual-joining letters outside the Arabic script.
        let label = chars("\u{1E922}\u{200C}\u{1E923}");
        assert!(check_contextj(&label, 1));
        let label = chars("\u{1E900}\u{064E}\u{200C}\u{1E943}");
        assert!(check_contextj(&label, 1));

        // At the start.
        let label = chars("\u{200C}\u{0628}");
        assert!(!check_contextj(&label, 0));
    }

    #[test]
    fn zwj() {
        let label = chars("\u{0915}\u{094D}\u{200D}");
        assert!(check_contextj(&label, 2));
        let label = chars("\u{0628}\u{200D}\u{0628}");
        assert!(!check_contextj(&label, 1));
    }

    #[test]
    fn middle_dot() {
        assert!(check_contexto(&chars("l\u{00B7}l"), 1));
        assert!(!check_contexto(&chars("a\u{00B7}l"), 1));
        assert!(!check_contexto(&chars("l\u{00B7}"), 1));
    }

    #[test]
    fn keraia_and_geresh() {
        assert!(check_contexto(&chars("\u{0375}α"), 0));
        assert!(!check_contexto(&chars("\u{0375}a"), 0));
        assert!(check_contexto(&chars("\u{05D0}\u{05F3}"), 1));
        assert!(!check_contexto(&chars("\u{05F3}"), 0));
    }

    #[test]
    fn katakana_middle_dot() {
        assert!(check_contexto(&chars("\u{30A2}\u{30FB}"), 1));
        assert!(!check_contexto(&chars("a\u{30FB}"), 1));
        assert!(!check_contexto(&chars("\u{30FB}"), 0));
    }

    #[test]
    fn arabic_digits() {
        assert!(check_contexto(&chars("\u{0660}\u{0661}"), 0));
        assert!(!check_contexto(&chars("\u{0660}\u{06F1}"), 0));
        assert!(check_contexto(&chars("\u{06F0}\u{06F1}"), 1));
        assert!(!check_contexto(&chars("\u{06F0}\u{0661}"), 0));
    }

    #[test]
    fn joining_type() {
        assert_eq!(JoiningType::of('\u{0628}'), JoiningType::D);
        assert_eq!(JoiningType::of('\u{0627}'), JoiningType::R);
        assert_eq!(JoiningType::of('\u{064E}'), JoiningType::T);
        assert_eq!(JoiningType::of('\u{200D}'), JoiningType::C);
        assert_eq!(JoiningType::of('\u{200C}'), JoiningType::U);
        assert_eq!(JoiningType::of('\u{0640}'), JoiningType::C);
        assert_eq!(JoiningType::of('\u{1E900}'), JoiningType::D);
        assert_eq!(JoiningType::of('\u{1E943}'), JoiningType::D);
        assert_eq!(JoiningType::of('\u{0301}'), JoiningType::T);
        assert_eq!(JoiningType::of('a'), JoiningType::U);
    }
}
