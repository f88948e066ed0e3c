//! Domain name labels.
//!
//! Labels enter the converter as plain string slices. This module
//! provides the few facts about them that every part of the converter
//! needs: their maximum length, how to recognize the ASCII-compatible
//! encoding prefix, and which of the three label forms a slice is in.

use super::error::{Error, ErrorKind};

//------------ Constants -----------------------------------------------------

/// Domain name labels have a maximum length of 63 octets.
pub const LABEL_MAX_LENGTH: usize = 63;

/// The prefix marking an A-label.
pub const ACE_PREFIX: &str = "xn--";

//------------ LabelForm -----------------------------------------------------

/// The form a label is in.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum LabelForm {
    /// An ASCII label without the ACE prefix.
    ///
    /// This includes traditional host name labels as well as labels with
    /// characters outside the host name rules such as underscores.
    Ascii,

    /// An ASCII label starting with the ACE prefix.
    ///
    /// Whether it actually is a valid A-label is only known after
    /// decoding.
    ALabel,

    /// A label containing non-ASCII characters.
    Unicode,
}

impl LabelForm {
    /// Determines the form of a label.
    #[must_use]
    pub fn of(label: &str) -> Self {
        if !label.is_ascii() {
            LabelForm::Unicode
        } else if has_ace_prefix(label) {
            LabelForm::ALabel
        } else {
            LabelForm::Ascii
        }
    }
}

//------------ Helper Functions ----------------------------------------------

/// Returns whether a label starts with the ACE prefix.
///
/// The prefix is compared ignoring ASCII case.
#[must_use]
pub fn has_ace_prefix(label: &str) -> bool {
    label
        .as_bytes()
        .get(..ACE_PREFIX.len())
        .map(|head| head.eq_ignore_ascii_case(ACE_PREFIX.as_bytes()))
        .unwrap_or(false)
}

/// Returns the label without the ACE prefix if it has one.
#[must_use]
pub fn strip_ace_prefix(label: &str) -> Option<&str> {
    if has_ace_prefix(label) {
        Some(&label[ACE_PREFIX.len()..])
    } else {
        None
    }
}

/// Checks that the encoded form of a label is not too long.
pub fn check_encoded_len(label: &str) -> Result<(), Error> {
    if label.len() > LABEL_MAX_LENGTH {
        Err(Error::new(
            ErrorKind::LabelTooLong,
            "label longer than 63 octets",
        ))
    } else {
        Ok(())
    }
}

/// Checks that a label with non-ASCII characters can fit once encoded.
///
/// Every character adds at least one octet to the A-label, so a label
/// with more characters than fit after the ACE prefix is too long. This
/// avoids encoding labels that are going to be rejected anyway.
pub fn check_unencoded_len(label: &str) -> Result<(), Error> {
    if label.chars().count() > LABEL_MAX_LENGTH - ACE_PREFIX.len() {
        Err(Error::new(
            ErrorKind::LabelTooLong,
            "label too long to be encoded in 63 octets",
        ))
    } else {
        Ok(())
    }
}

/// Returns whether the label has hyphens in the third and fourth position.
///
/// Positions are counted in characters, not octets.
#[must_use]
pub fn has_hyphens_3_4(label: &str) -> bool {
    let mut chars = label.chars().skip(2);
    chars.next() == Some('-') && chars.next() == Some('-')
}

/// Returns whether the label is an LDH label.
///
/// These labels only contain ASCII letters, digits, and hyphens, and
/// neither start nor end with a hyphen.
#[must_use]
pub fn is_ldh(label: &str) -> bool {
    !label.is_empty()
        && !label.starts_with('-')
        && !label.ends_with('-')
        && label
            .bytes()
            .all(|ch| ch.is_ascii_alphanumeric() || ch == b'-')
}

//============ Testing =======================================================
