//! Conversion of domain names.
//!
//! The functions in this module convert complete domain names. They split
//! the name into labels, run each label through [`Checks::validate`], and
//! assemble the converted labels into the result. The first label that
//! fails stops the conversion and its error is returned.
//!
//! There are four operations:
//!
//! * [`to_ascii`] converts a name into its ASCII form as needed for
//!   anything that talks to the DNS,
//! * [`to_unicode`] converts a name into its Unicode form for display,
//! * [`lookup`] is [`to_ascii`] with the options suitable for looking up
//!   a name the user entered, and
//! * [`register`] checks a single label before it is added to a zone.
//!
//! For input that isn’t available as a `str`, there are variants of these
//! functions that decode the input first.

use crate::base::error::{Error, ErrorKind};
use crate::base::flags::Flags;
use crate::base::label::has_ace_prefix;
use crate::base::name::{Domain, DomainBuilder, Separators};
use crate::unicode::normalize::{decode_ucs4, decode_utf8};
use crate::utils::punycode::{self, PunycodeError};
use crate::validate::{Checks, ValidatedLabel};
use tracing::{debug, trace};

//------------ to_ascii ------------------------------------------------------

/// Converts a domain name into its ASCII form.
///
/// Labels containing non-ASCII characters are converted into A-labels.
/// All other labels are kept unless TR46 processing maps them. A-labels
/// in the input are checked by decoding them. A trailing dot is kept.
///
/// # Examples
///
/// ```
/// use domain_idn::{to_ascii, Flags};
///
/// assert_eq!(
///     to_ascii("münchen.de", Flags::EMPTY).unwrap(),
///     "xn--mnchen-3ya.de"
/// );
/// ```
pub fn to_ascii(
    domain: &str,
    flags: impl Into<Flags>,
) -> Result<String, Error> {
    let checks = Checks::lookup(flags)?;
    let separators = if checks.tr46_mode().is_some() {
        Separators::Unicode
    } else {
        Separators::Ascii
    };
    let name = Domain::split(domain, separators).map_err(|err| {
        debug!("Cannot split '{domain}': {err}");
        err
    })?;
    let mut res = DomainBuilder::with_capacity(domain.len());
    for (index, label) in name.labels().iter().enumerate() {
        let label = convert_label(&checks, index, label)?;
        res.push(label.alabel());
    }
    res.finish_ascii(name.is_absolute()).map_err(|err| {
        debug!("Converting '{domain}' failed: {err}");
        err
    })
}

/// Converts UTF-8 encoded input into the ASCII form of a domain name.
pub fn to_ascii_utf8(
    domain: &[u8],
    flags: impl Into<Flags>,
) -> Result<String, Error> {
    to_ascii(decode_utf8(domain)?, flags)
}

/// Converts a sequence of code points into the ASCII form of a name.
pub fn to_ascii_ucs4(
    domain: &[u32],
    flags: impl Into<Flags>,
) -> Result<String, Error> {
    to_ascii(&decode_ucs4(domain)?, flags)
}

//------------ to_unicode ----------------------------------------------------

/// Converts a domain name into its Unicode form.
///
/// A-labels are decoded into U-labels which are then validated. All other
/// labels are copied over unchanged. Only the full stop is recognized as
/// a label separator.
pub fn to_unicode(
    domain: &str,
    flags: impl Into<Flags>,
) -> Result<String, Error> {
    let checks = Checks::lookup(flags)?;
    let name = Domain::split(domain, Separators::Ascii).map_err(|err| {
        debug!("Cannot split '{domain}': {err}");
        err
    })?;
    let mut res = DomainBuilder::with_capacity(domain.len() * 2);
    for (index, label) in name.labels().iter().enumerate() {
        if has_ace_prefix(label) {
            let label = convert_label(&checks, index, label)?;
            res.push(label.ulabel());
        } else {
            trace!("Label {index}: '{label}' kept");
            res.push(label);
        }
    }
    Ok(res.finish(name.is_absolute()))
}

/// Converts UTF-8 encoded input into the Unicode form of a domain name.
pub fn to_unicode_utf8(
    domain: &[u8],
    flags: impl Into<Flags>,
) -> Result<String, Error> {
    to_unicode(decode_utf8(domain)?, flags)
}

//------------ lookup --------------------------------------------------------

/// Converts a domain name into the ASCII form used for lookups.
///
/// This is [`to_ascii`] with the input normalized to NFC and every
/// A-label checked by decoding it again, regardless of `flags`.
pub fn lookup(
    domain: &str,
    flags: impl Into<Flags>,
) -> Result<String, Error> {
    to_ascii(
        domain,
        flags.into() | Flags::NFC_INPUT | Flags::ALABEL_ROUNDTRIP,
    )
}

/// Converts UTF-8 encoded input into the lookup form of a domain name.
pub fn lookup_utf8(
    domain: &[u8],
    flags: impl Into<Flags>,
) -> Result<String, Error> {
    lookup(decode_utf8(domain)?, flags)
}

//------------ register ------------------------------------------------------

/// Checks a label for registration and returns its A-label.
///
/// The label can be given as its U-label, its A-label, or both. If both
/// are given, they have to match, otherwise an error of kind
/// [`ErrorKind::Mismatch`] is returned. The label is checked without TR46
/// mapping and all contextual rules are evaluated.
///
/// Labels that consist of ASCII characters only are returned unchanged
/// if they are LDH labels.
///
/// # Examples
///
/// ```
/// use domain_idn::{register, ErrorKind, Flags};
///
/// assert_eq!(
///     register(Some("müller"), Some("xn--mller-kva"), Flags::EMPTY)
///         .unwrap(),
///     "xn--mller-kva"
/// );
/// assert_eq!(
///     register(Some("müller"), Some("xn--wrong-encoding"), Flags::EMPTY)
///         .unwrap_err()
///         .kind(),
///     ErrorKind::Mismatch
/// );
/// ```
pub fn register(
    ulabel: Option<&str>,
    alabel: Option<&str>,
    flags: impl Into<Flags>,
) -> Result<String, Error> {
    let checks = Checks::strict(flags)?;
    let label = match (ulabel, alabel) {
        (Some(ulabel), alabel) => {
            let label = convert_label(&checks, 0, ulabel)?;
            if let Some(alabel) = alabel {
                if !label.alabel().eq_ignore_ascii_case(alabel) {
                    debug!(
                        "U-label '{ulabel}' encodes to '{}', not '{alabel}'",
                        label.alabel()
                    );
                    return Err(Error::new(
                        ErrorKind::Mismatch,
                        "U-label and A-label do not match",
                    ));
                }
            }
            label
        }
        (None, Some(alabel)) => {
            if !has_ace_prefix(alabel) {
                return Err(PunycodeError::NoPrefix.into());
            }
            convert_label(&checks, 0, &alabel.to_ascii_lowercase())?
        }
        (None, None) => {
            return Err(Error::new(
                ErrorKind::StructuralViolation,
                "neither U-label nor A-label given",
            ))
        }
    };
    Ok(label.into_parts().1)
}

/// Registers a label given in UTF-8 encoding.
pub fn register_utf8(
    ulabel: Option<&[u8]>,
    alabel: Option<&[u8]>,
    flags: impl Into<Flags>,
) -> Result<String, Error> {
    let ulabel = ulabel.map(decode_utf8).transpose()?;
    let alabel = alabel.map(decode_utf8).transpose()?;
    register(ulabel, alabel, flags)
}

//------------ Helper Functions ----------------------------------------------

/// Validates a single label and performs the round trip check if asked.
fn convert_label(
    checks: &Checks,
    index: usize,
    label: &str,
) -> Result<ValidatedLabel, Error> {
    let res = checks.validate(label).and_then(|res| {
        if checks.flags().contains(Flags::ALABEL_ROUNDTRIP) {
            check_roundtrip(&res)?;
        }
        Ok(res)
    });
    match res {
        Ok(res) => {
            trace!(
                "Label {index}: '{label}' -> '{}' / '{}'",
                res.ulabel(),
                res.alabel()
            );
            Ok(res)
        }
        Err(err) => {
            debug!(
                "Label {index}: '{label}' failed ({}): {err}",
                err.kind().as_str()
            );
            Err(err)
        }
    }
}

/// Checks that an A-label decodes back into its U-label.
///
/// A-labels taken from the input have passed this check while being
/// decoded already.
fn check_roundtrip(label: &ValidatedLabel) -> Result<(), Error> {
    if !label.is_idn() {
        return Ok(());
    }
    match punycode::from_alabel(label.alabel()) {
        Ok(decoded) if decoded == label.ulabel() => Ok(()),
        _ => Err(Error::new(
            ErrorKind::RoundtripMismatch,
            "A-label does not decode into U-label",
        )),
    }
}

//============ Testing =======================================================
