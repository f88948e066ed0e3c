//! Label validation.
//!
//! Before a label can be converted, it needs to be checked against the
//! IDNA2008 rules. Which rules apply depends on what the label is used
//! for. Labels that are looked up only need to be safe to use in the DNS
//! while labels that are registered in a zone are checked strictly. The
//! set of rules is described by [`Checks`].
//!
//! The result of validating a label is a [`ValidatedLabel`] that provides
//! both the Unicode and the ASCII form of the label.

use crate::base::error::{Error, ErrorKind};
use crate::base::flags::{Flags, Tr46Mode};
use crate::base::label::{
    check_encoded_len, check_unencoded_len, has_hyphens_3_4, LabelForm,
};
use crate::tr46;
use crate::unicode::normalize::{is_nfc, normalize};
use crate::unicode::{
    check_bidi, check_contextj, check_contexto, derived_property,
    DerivedProperty, Tables,
};
use crate::utils::punycode;
use smallvec::SmallVec;
use std::borrow::Cow;

//------------ Checks --------------------------------------------------------

/// The set of rules a label is validated against.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Checks {
    /// The options for the conversion.
    flags: Flags,

    /// The TR46 processing mode or `None` if TR46 is not used.
    tr46: Option<Tr46Mode>,

    /// Whether the rules of CONTEXTO code points are evaluated.
    contexto: bool,

    /// Whether only LDH labels are accepted among the ASCII labels.
    ldh_only: bool,
}

impl Checks {
    /// Returns the checks for looking up a name.
    ///
    /// TR46 processing happens as selected by the flags. CONTEXTO code
    /// points are accepted without checking their rules.
    pub fn lookup(flags: impl Into<Flags>) -> Result<Self, Error> {
        let flags = flags.into();
        Ok(Checks {
            flags,
            tr46: flags.tr46_mode()?,
            contexto: false,
            ldh_only: flags.contains(Flags::USE_STD3_ASCII_RULES),
        })
    }

    /// Returns the checks for registering a name.
    ///
    /// Labels are not mapped and all contextual rules are evaluated.
    /// Unassigned code points are never accepted and ASCII labels have to
    /// be LDH labels.
    pub fn strict(flags: impl Into<Flags>) -> Result<Self, Error> {
        let flags = flags.into();
        flags.tr46_mode()?;
        Ok(Checks {
            flags: Flags::from_bits_truncate(
                flags.bits() & !Flags::ALLOW_UNASSIGNED.bits(),
            ),
            tr46: None,
            contexto: true,
            ldh_only: true,
        })
    }

    /// Returns the checks for the U-label decoded from an A-label.
    ///
    /// These are the current checks with all contextual rules evaluated.
    fn decoded(self) -> Self {
        Checks {
            tr46: None,
            contexto: true,
            ..self
        }
    }

    /// Returns the flags the checks were created from.
    #[must_use]
    pub fn flags(&self) -> Flags {
        self.flags
    }

    /// Returns the TR46 processing mode if TR46 is used.
    #[must_use]
    pub fn tr46_mode(&self) -> Option<Tr46Mode> {
        self.tr46
    }

    /// Validates a label.
    pub fn validate(&self, label: &str) -> Result<ValidatedLabel, Error> {
        let label = normalize(label, self.flags);
        let label = match self.tr46 {
            Some(mode) => {
                Cow::Owned(tr46::map_label(&label, mode, self.flags)?)
            }
            None => label,
        };
        if label.is_empty() {
            return Err(Error::new(
                ErrorKind::StructuralViolation,
                "empty label",
            ));
        }
        match LabelForm::of(&label) {
            LabelForm::Ascii => {
                self.check_ascii(&label)?;
                check_encoded_len(&label)?;
                let label = label.into_owned();
                Ok(ValidatedLabel {
                    ulabel: label.clone(),
                    alabel: label,
                })
            }
            LabelForm::ALabel => {
                check_encoded_len(&label)?;
                let ulabel = punycode::from_alabel(&label)?;
                self.decoded().check_ulabel(&ulabel)?;
                Ok(ValidatedLabel {
                    ulabel,
                    alabel: label.to_ascii_lowercase(),
                })
            }
            LabelForm::Unicode => {
                check_unencoded_len(&label)?;
                self.check_ulabel(&label)?;
                let alabel = punycode::to_alabel(&label)?.into_owned();
                check_encoded_len(&alabel)?;
                Ok(ValidatedLabel {
                    ulabel: label.into_owned(),
                    alabel,
                })
            }
        }
    }

    /// Checks an ASCII label that isn’t an A-label.
    fn check_ascii(&self, label: &str) -> Result<(), Error> {
        if !self.ldh_only {
            return Ok(());
        }
        if let Some(ch) = label
            .chars()
            .find(|ch| !ch.is_ascii_alphanumeric() && *ch != '-')
        {
            return Err(Error::with_codepoint(
                ErrorKind::DisallowedCodepoint,
                "non-LDH character in ASCII label",
                ch,
            ));
        }
        check_hyphens(label)
    }

    /// Checks a label that contains non-ASCII characters.
    fn check_ulabel(&self, label: &str) -> Result<(), Error> {
        if !is_nfc(label) {
            return Err(Error::new(
                ErrorKind::NotNfc,
                "label not in normalization form C",
            ));
        }
        check_hyphens(label)?;
        if has_hyphens_3_4(label) {
            return Err(Error::new(
                ErrorKind::StructuralViolation,
                "hyphens in third and fourth position",
            ));
        }

        let chars: SmallVec<[char; 64]> = label.chars().collect();
        if let Some(&first) = chars.first() {
            if Tables::get().is_mark(first) {
                return Err(Error::with_codepoint(
                    ErrorKind::StructuralViolation,
                    "label starts with a combining mark",
                    first,
                ));
            }
        }
        for (pos, &ch) in chars.iter().enumerate() {
            match derived_property(ch) {
                DerivedProperty::Pvalid => {}
                DerivedProperty::ContextJ => {
                    if !check_contextj(&chars, pos) {
                        return Err(Error::with_codepoint(
                            ErrorKind::ContextViolation,
                            "join control in invalid context",
                            ch,
                        ));
                    }
                }
                DerivedProperty::ContextO => {
                    if self.contexto && !check_contexto(&chars, pos) {
                        return Err(Error::with_codepoint(
                            ErrorKind::ContextViolation,
                            "code point in invalid context",
                            ch,
                        ));
                    }
                }
                DerivedProperty::Disallowed => {
                    return Err(Error::with_codepoint(
                        ErrorKind::DisallowedCodepoint,
                        "disallowed code point",
                        ch,
                    ));
                }
                DerivedProperty::Unassigned => {
                    if !self.flags.contains(Flags::ALLOW_UNASSIGNED) {
                        return Err(Error::with_codepoint(
                            ErrorKind::UnassignedCodepoint,
                            "unassigned code point",
                            ch,
                        ));
                    }
                }
            }
        }
        check_bidi(&chars)
    }
}

fn check_hyphens(label: &str) -> Result<(), Error> {
    if label.starts_with('-') || label.ends_with('-') {
        Err(Error::new(
            ErrorKind::StructuralViolation,
            "label starts or ends with a hyphen",
        ))
    } else {
        Ok(())
    }
}

/// Validates a label for lookup.
///
/// This is a shortcut for `Checks::lookup(flags)?.validate(label)`.
pub fn validate(
    label: &str,
    flags: impl Into<Flags>,
) -> Result<ValidatedLabel, Error> {
    Checks::lookup(flags)?.validate(label)
}

//------------ ValidatedLabel ------------------------------------------------

/// A label that passed validation.
///
/// For labels with non-ASCII characters, the Unicode form is the U-label
/// and the ASCII form is the A-label. For all other labels, both forms
/// are the same.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct ValidatedLabel {
    ulabel: String,
    alabel: String,
}

impl ValidatedLabel {
    /// Returns the Unicode form of the label.
    #[must_use]
    pub fn ulabel(&self) -> &str {
        &self.ulabel
    }

    /// Returns the ASCII form of the label.
    #[must_use]
    pub fn alabel(&self) -> &str {
        &self.alabel
    }

    /// Returns whether the label is an IDN label.
    #[must_use]
    pub fn is_idn(&self) -> bool {
        self.ulabel != self.alabel
    }

    /// Converts the label into its Unicode and ASCII forms.
    #[must_use]
    pub fn into_parts(self) -> (String, String) {
        (self.ulabel, self.alabel)
    }
}

//============ Testing =======================================================
