//! The IDNA2008 derived property of code points.
//!
//! RFC 5892 assigns each code point one of five property values through a
//! fixed sequence of rules, section 3 of the RFC. The first rule that
//! matches determines the value. The rules are evaluated here on demand
//! using the property sets from [`Tables`].

use super::tables::{self, IGNORABLE_BLOCKS, OLD_HANGUL_JAMO};
use super::Tables;
use unicode_casefold::UnicodeCaseFold;
use unicode_normalization::UnicodeNormalization;

//------------ DerivedProperty -----------------------------------------------

/// The IDNA2008 derived property value of a code point.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum DerivedProperty {
    /// The code point may appear in a label.
    Pvalid,

    /// The code point is a join control permitted only in some contexts.
    ContextJ,

    /// The code point is permitted only in some contexts.
    ContextO,

    /// The code point may not appear in a label.
    Disallowed,

    /// The code point is not assigned in this Unicode version.
    Unassigned,
}

//------------ derived_property ----------------------------------------------

/// Determines the derived property value of a code point.
pub fn derived_property(ch: char) -> DerivedProperty {
    if let Some(prop) = tables::exception(ch) {
        return prop;
    }
    if ch.is_ascii() {
        return if ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '-'
        {
            DerivedProperty::Pvalid
        } else {
            DerivedProperty::Disallowed
        };
    }

    let tables = Tables::get();
    if tables.is_unassigned(ch) {
        DerivedProperty::Unassigned
    } else if ch == '\u{200C}' || ch == '\u{200D}' {
        DerivedProperty::ContextJ
    } else if tables::contains(OLD_HANGUL_JAMO, ch)
        || is_unstable(ch)
        || tables.is_ignorable(ch)
        || tables::contains(IGNORABLE_BLOCKS, ch)
    {
        DerivedProperty::Disallowed
    } else if tables.is_letter_digit(ch) {
        DerivedProperty::Pvalid
    } else {
        DerivedProperty::Disallowed
    }
}

/// Returns whether a code point is changed by NFKC and case folding.
fn is_unstable(ch: char) -> bool {
    !nfkc_casefold(ch).chars().eq(core::iter::once(ch))
}

/// Returns `toNFKC(toCaseFold(toNFKC(ch)))`.
///
/// Case folding is full case folding, so a character may fold into
/// several, e.g., U+1FB3 folds into U+03B1 U+03B9.
pub(crate) fn nfkc_casefold(ch: char) -> String {
    let folded: String = core::iter::once(ch).nfkc().case_fold().collect();
    folded.nfkc().collect()
}

//============ Testing =======================================================
