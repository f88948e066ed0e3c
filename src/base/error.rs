//! Error handling.
//!
//! All conversions report failure through a single [`Error`] type. An
//! error carries an [`ErrorKind`] from a closed set of categories, a short
//! static message describing what exactly went wrong, and optionally the
//! code point that triggered it.

use core::fmt;

//------------ ErrorKind -----------------------------------------------------

/// The category of a conversion failure.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ErrorKind {
    /// The input contained ill-formed code units.
    InvalidEncoding,

    /// A label exceeded [`LABEL_MAX_LENGTH`][crate::LABEL_MAX_LENGTH].
    LabelTooLong,

    /// The domain exceeded [`DOMAIN_MAX_LENGTH`][crate::DOMAIN_MAX_LENGTH].
    DomainTooLong,

    /// A label contained a code point that IDNA2008 disallows.
    DisallowedCodepoint,

    /// A label contained an unassigned code point.
    ///
    /// This only happens if unassigned code points have not been allowed.
    UnassignedCodepoint,

    /// A label violated a structural rule.
    ///
    /// This covers empty labels, misplaced hyphens, leading combining
    /// marks, and the bidi rule.
    StructuralViolation,

    /// A label’s contextual rule was not satisfied.
    ContextViolation,

    /// A label was not in Unicode normalization form C.
    NotNfc,

    /// An ASCII-compatible encoding was malformed.
    PunycodeError,

    /// Decoding the produced A-label did not lead back to the U-label.
    RoundtripMismatch,

    /// A U-label and an A-label given for registration did not match.
    Mismatch,

    /// The library is older than the requested version.
    VersionTooOld,

    /// The combination of flags is not allowed.
    InvalidFlags,
}

impl ErrorKind {
    /// Returns a stable, machine friendly name for the kind.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::InvalidEncoding => "INVALID_ENCODING",
            ErrorKind::LabelTooLong => "LABEL_TOO_LONG",
            ErrorKind::DomainTooLong => "DOMAIN_TOO_LONG",
            ErrorKind::DisallowedCodepoint => "DISALLOWED",
            ErrorKind::UnassignedCodepoint => "UNASSIGNED",
            ErrorKind::StructuralViolation => "STRUCTURE",
            ErrorKind::ContextViolation => "CONTEXT",
            ErrorKind::NotNfc => "NOT_NFC",
            ErrorKind::PunycodeError => "PUNYCODE",
            ErrorKind::RoundtripMismatch => "ALABEL_ROUNDTRIP_FAILED",
            ErrorKind::Mismatch => "UALABEL_MISMATCH",
            ErrorKind::VersionTooOld => "VERSION_TOO_OLD",
            ErrorKind::InvalidFlags => "INVALID_FLAGS",
        }
    }

    /// Returns a human readable description of the kind.
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            ErrorKind::InvalidEncoding => "input has ill-formed encoding",
            ErrorKind::LabelTooLong => "label exceeds maximum length",
            ErrorKind::DomainTooLong => "domain name exceeds maximum length",
            ErrorKind::DisallowedCodepoint => {
                "domain name contains a disallowed character"
            }
            ErrorKind::UnassignedCodepoint => {
                "domain name contains an unassigned character"
            }
            ErrorKind::StructuralViolation => {
                "label has an invalid structure"
            }
            ErrorKind::ContextViolation => {
                "label violates a contextual rule"
            }
            ErrorKind::NotNfc => "string is not in Unicode NFC format",
            ErrorKind::PunycodeError => "punycode conversion failed",
            ErrorKind::RoundtripMismatch => "A-label roundtrip failed",
            ErrorKind::Mismatch => "U-label and A-label do not match",
            ErrorKind::VersionTooOld => "library version too old",
            ErrorKind::InvalidFlags => "invalid combination of flags",
        }
    }
}

//--- Display

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.description())
    }
}

//------------ Error ---------------------------------------------------------

/// A conversion failed.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Error {
    /// The category of the error.
    kind: ErrorKind,

    /// What exactly went wrong.
    msg: &'static str,

    /// The code point that caused the error, if there is one.
    codepoint: Option<char>,
}

impl Error {
    /// Creates a new error from a kind and a message.
    #[must_use]
    pub const fn new(kind: ErrorKind, msg: &'static str) -> Self {
        Error {
            kind,
            msg,
            codepoint: None,
        }
    }

    /// Creates a new error caused by a specific code point.
    #[must_use]
    pub const fn with_codepoint(
        kind: ErrorKind,
        msg: &'static str,
        ch: char,
    ) -> Self {
        Error {
            kind,
            msg,
            codepoint: Some(ch),
        }
    }

    /// Returns the kind of the error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the error message.
    #[must_use]
    pub fn message(&self) -> &'static str {
        self.msg
    }

    /// Returns the code point that caused the error if known.
    #[must_use]
    pub fn codepoint(&self) -> Option<char> {
        self.codepoint
    }
}

//--- From

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error::new(kind, kind.description())
    }
}

//--- Display and Error

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.msg)?;
        if let Some(ch) = self.codepoint {
            write!(f, " (U+{:04X})", u32::from(ch))?;
        }
        Ok(())
    }
}

impl std::error::Error for Error {}

//============ Testing =======================================================
