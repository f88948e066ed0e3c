//! Unicode IDNA compatibility processing.
//!
//! Before a label is checked against the IDNA2008 rules, TR46 maps it so
//! that input users commonly type, such as upper case letters or
//! fullwidth forms, is turned into the form IDNA2008 expects. Each code
//! point has a [`Status`] that says what happens to it.
//!
//! The mapping used here is the one TR46 derives its table from: a code
//! point maps to the NFKC form of the case folded NFKC form of itself.
//! Mappings that would produce a label separator are disallowed.

use crate::base::error::{Error, ErrorKind};
use crate::base::flags::{Flags, Tr46Mode};
use crate::unicode::tables::{self, TR46_IGNORED};
use crate::unicode::{nfkc_casefold, Tables};
use unicode_normalization::UnicodeNormalization;

//------------ Status --------------------------------------------------------

/// The TR46 status of a code point.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Status {
    /// The code point is kept.
    Valid,

    /// The code point is removed.
    Ignored,

    /// The code point is replaced by its mapping.
    Mapped,

    /// The code point is kept or mapped depending on the processing mode.
    Deviation,

    /// The code point is not allowed.
    Disallowed,

    /// The code point is kept unless the STD3 rules are in effect.
    DisallowedStd3Valid,

    /// The code point is mapped unless the STD3 rules are in effect.
    DisallowedStd3Mapped,

    /// The code point is not assigned.
    Unassigned,
}

impl Status {
    /// Returns the status of a code point.
    #[must_use]
    pub fn of(ch: char) -> Self {
        if ch.is_ascii() {
            return if is_ldh_char(ch) {
                Status::Valid
            } else if ch.is_ascii_uppercase() {
                Status::Mapped
            } else {
                Status::DisallowedStd3Valid
            };
        }
        if is_deviation(ch) {
            return Status::Deviation;
        }
        if tables::contains(TR46_IGNORED, ch) {
            return Status::Ignored;
        }
        let tables = Tables::get();
        if tables.is_unassigned(ch) {
            return Status::Unassigned;
        }
        if tables.is_control(ch) {
            return Status::Disallowed;
        }
        let mapped = nfkc_casefold(ch);
        if mapped.chars().eq(core::iter::once(ch)) {
            Status::Valid
        } else if mapped.is_empty() || mapped.contains('.') {
            Status::Disallowed
        } else if mapped.chars().any(|ch| ch.is_ascii() && !is_ldh_char(ch)) {
            Status::DisallowedStd3Mapped
        } else {
            Status::Mapped
        }
    }
}

//------------ Mapping -------------------------------------------------------

/// Maps a label according to TR46.
///
/// The resulting label is in normalization form C.
pub fn map_label(
    label: &str,
    mode: Tr46Mode,
    flags: Flags,
) -> Result<String, Error> {
    let std3 = flags.contains(Flags::USE_STD3_ASCII_RULES);
    let mut res = String::with_capacity(label.len());
    for ch in label.chars() {
        match Status::of(ch) {
            Status::Valid => res.push(ch),
            Status::Ignored => {}
            Status::Mapped => map_char(ch, &mut res),
            Status::Deviation => match mode {
                Tr46Mode::Transitional => {
                    res.push_str(deviation_mapping(ch))
                }
                Tr46Mode::Nontransitional => res.push(ch),
            },
            Status::Disallowed => return Err(disallowed(ch)),
            Status::DisallowedStd3Valid => {
                if std3 {
                    return Err(disallowed(ch));
                }
                res.push(ch)
            }
            Status::DisallowedStd3Mapped => {
                if std3 {
                    return Err(disallowed(ch));
                }
                map_char(ch, &mut res)
            }
            Status::Unassigned => {
                if !flags.contains(Flags::ALLOW_UNASSIGNED) {
                    return Err(Error::with_codepoint(
                        ErrorKind::UnassignedCodepoint,
                        "unassigned code point",
                        ch,
                    ));
                }
                res.push(ch)
            }
        }
    }
    if unicode_normalization::is_nfc(&res) {
        Ok(res)
    } else {
        Ok(res.nfc().collect())
    }
}

fn map_char(ch: char, target: &mut String) {
    if ch.is_ascii() {
        target.push(ch.to_ascii_lowercase())
    } else {
        target.push_str(&nfkc_casefold(ch))
    }
}

fn is_deviation(ch: char) -> bool {
    matches!(ch, '\u{00DF}' | '\u{03C2}' | '\u{200C}' | '\u{200D}')
}

/// Returns the transitional mapping of a deviation character.
fn deviation_mapping(ch: char) -> &'static str {
    match ch {
        '\u{00DF}' => "ss",
        '\u{03C2}' => "\u{03C3}",
        _ => "",
    }
}

fn is_ldh_char(ch: char) -> bool {
    ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '-'
}

fn disallowed(ch: char) -> Error {
    Error::with_codepoint(
        ErrorKind::DisallowedCodepoint,
        "code point disallowed by TR46",
        ch,
    )
}

//============ Testing =======================================================
