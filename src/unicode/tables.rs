//! Fixed code point tables.
//!
//! These are the parts of the IDNA2008 data that are defined by the RFCs
//! themselves rather than derived from Unicode properties. All tables are
//! sorted lists of inclusive ranges.

use super::derived::DerivedProperty;

//------------ RFC 5892 Exceptions -------------------------------------------

/// The exceptions of RFC 5892, section 2.6.
pub const EXCEPTIONS: &[(u32, u32, DerivedProperty)] = &[
    (0x00B7, 0x00B7, DerivedProperty::ContextO),
    (0x00DF, 0x00DF, DerivedProperty::Pvalid),
    (0x0375, 0x0375, DerivedProperty::ContextO),
    (0x03C2, 0x03C2, DerivedProperty::Pvalid),
    (0x05F3, 0x05F4, DerivedProperty::ContextO),
    (0x0640, 0x0640, DerivedProperty::Disallowed),
    (0x0660, 0x0669, DerivedProperty::ContextO),
    (0x06F0, 0x06F9, DerivedProperty::ContextO),
    (0x06FD, 0x06FE, DerivedProperty::Pvalid),
    (0x07FA, 0x07FA, DerivedProperty::Disallowed),
    (0x0F0B, 0x0F0B, DerivedProperty::Pvalid),
    (0x3007, 0x3007, DerivedProperty::Pvalid),
    (0x302E, 0x302F, DerivedProperty::Disallowed),
    (0x3031, 0x3035, DerivedProperty::Disallowed),
    (0x303B, 0x303B, DerivedProperty::Disallowed),
    (0x30FB, 0x30FB, DerivedProperty::ContextO),
];

/// Returns the exceptional property of a code point if it has one.
pub fn exception(ch: char) -> Option<DerivedProperty> {
    let ch = u32::from(ch);
    EXCEPTIONS
        .binary_search_by(|&(from, to, _)| {
            if to < ch {
                core::cmp::Ordering::Less
            } else if from > ch {
                core::cmp::Ordering::Greater
            } else {
                core::cmp::Ordering::Equal
            }
        })
        .ok()
        .map(|idx| EXCEPTIONS[idx].2)
}

//------------ Other RFC 5892 Categories -------------------------------------

/// Conjoining jamo with a Hangul_Syllable_Type of L, V, or T.
pub const OLD_HANGUL_JAMO: &[(u32, u32)] = &[
    (0x1100, 0x11FF),
    (0xA960, 0xA97C),
    (0xD7B0, 0xD7C6),
    (0xD7CB, 0xD7FB),
];

/// Blocks whose code points are disallowed regardless of category.
///
/// These are Combining Diacritical Marks for Symbols, Musical Symbols,
/// and Ancient Greek Musical Notation.
pub const IGNORABLE_BLOCKS: &[(u32, u32)] = &[
    (0x20D0, 0x20FF),
    (0x1D100, 0x1D1FF),
    (0x1D200, 0x1D24F),
];

//------------ TR46 ----------------------------------------------------------

/// Code points TR46 ignores, i.e., removes during mapping.
pub const TR46_IGNORED: &[(u32, u32)] = &[
    (0x00AD, 0x00AD),
    (0x034F, 0x034F),
    (0x180B, 0x180D),
    (0x180F, 0x180F),
    (0x200B, 0x200B),
    (0x2060, 0x2060),
    (0x2064, 0x2064),
    (0xFE00, 0xFE0F),
    (0xFEFF, 0xFEFF),
    (0x1BCA0, 0x1BCA3),
    (0xE0100, 0xE01EF),
];

//------------ Helper Functions ----------------------------------------------

/// Returns whether `ch` is in one of the ranges of a sorted table.
pub fn contains(table: &[(u32, u32)], ch: char) -> bool {
    let ch = u32::from(ch);
    table
        .binary_search_by(|&(from, to)| {
            if to < ch {
                core::cmp::Ordering::Less
            } else if from > ch {
                core::cmp::Ordering::Greater
            } else {
                core::cmp::Ordering::Equal
            }
        })
        .is_ok()
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;

    fn is_sorted(table: &[(u32, u32)]) -> bool {
        table.iter().all(|(from, to)| from <= to)
            && table.windows(2).all(|pair| pair[0].1 < pair[1].0)
    }

    #[test]
    fn tables_sorted() {
        let exceptions: Vec<_> =
            EXCEPTIONS.iter().map(|&(from, to, _)| (from, to)).collect();
        assert!(is_sorted(&exceptions));
        assert!(is_sorted(OLD_HANGUL_JAMO));
        assert!(is_sorted(IGNORABLE_BLOCKS));
        assert!(is_sorted(TR46_IGNORED));
    }

    #[test]
    fn lookup() {
        assert_eq!(exception('ß'), Some(DerivedProperty::Pvalid));
        assert_eq!(exception('\u{0665}'), Some(DerivedProperty::ContextO));
        assert_eq!(exception('a'), None);
        assert!(contains(OLD_HANGUL_JAMO, '\u{1100}'));
        assert!(!contains(OLD_HANGUL_JAMO, '\u{AC00}'));
        assert!(contains(TR46_IGNORED, '\u{FE0F}'));
        assert!(!contains(TR46_IGNORED, 'a'));
    }
}
