//! Unicode normalization and input decoding.
//!
//! Conversions operate on `str`. The functions for decoding other
//! encodings into strings live here, too, as decoding is the first step
//! of normalizing input.

use crate::base::error::{Error, ErrorKind};
use crate::base::flags::Flags;
use std::borrow::Cow;
use unicode_normalization::UnicodeNormalization;

/// Normalizes text as requested by the flags.
///
/// If the `nfc_input` option is set, the text is converted into Unicode
/// normalization form C. Otherwise it is returned unchanged.
pub fn normalize(text: &str, flags: Flags) -> Cow<str> {
    if flags.contains(Flags::NFC_INPUT) {
        nfc(text)
    } else {
        Cow::Borrowed(text)
    }
}

/// Converts text into normalization form C.
///
/// Text that already is in NFC is returned borrowed.
pub fn nfc(text: &str) -> Cow<str> {
    if is_nfc(text) {
        Cow::Borrowed(text)
    } else {
        Cow::Owned(text.nfc().collect())
    }
}

/// Returns whether text is in normalization form C.
#[must_use]
pub fn is_nfc(text: &str) -> bool {
    unicode_normalization::is_nfc(text)
}

/// Decodes UTF-8 encoded input.
pub fn decode_utf8(octets: &[u8]) -> Result<&str, Error> {
    core::str::from_utf8(octets).map_err(|_| {
        Error::new(ErrorKind::InvalidEncoding, "input is not valid UTF-8")
    })
}

/// Decodes input given as a sequence of Unicode code points.
///
/// Surrogates and values beyond U+10FFFF are rejected.
pub fn decode_ucs4(units: &[u32]) -> Result<String, Error> {
    units
        .iter()
        .map(|&unit| {
            char::from_u32(unit).ok_or(Error::new(
                ErrorKind::InvalidEncoding,
                "input is not a valid code point sequence",
            ))
        })
        .collect()
}

//============ Testing =======================================================
