//! Conversion options.
//!
//! Options can be given in two forms. [`ConversionFlags`] is a config
//! struct with one named boolean per option which is what most users will
//! want. [`Flags`] is the option word that results from combining the
//! options by bitwise OR. Its bit values are those of the established
//! libidn2 interface so that option words can be exchanged with other
//! implementations.
//!
//! All conversion functions accept anything that converts into [`Flags`].
//! The option word is resolved into the actual processing rules only once
//! a conversion starts.

use super::error::{Error, ErrorKind};
use core::{fmt, ops};

//------------ Flags ---------------------------------------------------------

/// An option word.
#[derive(Clone, Copy, Default, Eq, Hash, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "u32", into = "u32")
)]
pub struct Flags(u32);

impl Flags {
    /// No options set.
    pub const EMPTY: Self = Flags(0);

    /// Normalize input to Unicode NFC before processing.
    pub const NFC_INPUT: Self = Flags(0x01);

    /// Check that produced A-labels decode back to their U-labels.
    ///
    /// A-labels in the input are always checked for being the canonical
    /// encoding of their U-label, with or without this option. The option
    /// adds the same check for the A-labels produced from U-labels, which
    /// only fails if encoder and decoder disagree.
    pub const ALABEL_ROUNDTRIP: Self = Flags(0x02);

    /// Use TR46 transitional processing.
    pub const TRANSITIONAL: Self = Flags(0x04);

    /// Use TR46 nontransitional processing.
    pub const NONTRANSITIONAL: Self = Flags(0x08);

    /// Accept unassigned code points.
    pub const ALLOW_UNASSIGNED: Self = Flags(0x10);

    /// Restrict ASCII to letters, digits, and hyphens.
    pub const USE_STD3_ASCII_RULES: Self = Flags(0x20);

    /// Disable TR46 processing altogether.
    pub const NO_TR46: Self = Flags(0x40);

    /// All options this implementation knows about.
    pub const SUPPORTED: Self = Flags(0x7F);

    /// The option names and their flags.
    const NAMES: [(&'static str, Flags); 7] = [
        ("nfc_input", Flags::NFC_INPUT),
        ("alabel_roundtrip", Flags::ALABEL_ROUNDTRIP),
        ("no_tr46", Flags::NO_TR46),
        ("transitional", Flags::TRANSITIONAL),
        ("nontransitional", Flags::NONTRANSITIONAL),
        ("allow_unassigned", Flags::ALLOW_UNASSIGNED),
        ("use_std3_ascii_rules", Flags::USE_STD3_ASCII_RULES),
    ];

    /// Creates flags from a raw option word.
    ///
    /// Fails if the word contains bits for options not supported by this
    /// implementation.
    pub fn from_bits(bits: u32) -> Result<Self, Error> {
        if bits & !Self::SUPPORTED.0 != 0 {
            Err(Error::new(ErrorKind::InvalidFlags, "unknown option bits"))
        } else {
            Ok(Flags(bits))
        }
    }

    /// Creates flags from a raw option word dropping unknown bits.
    #[must_use]
    pub const fn from_bits_truncate(bits: u32) -> Self {
        Flags(bits & Self::SUPPORTED.0)
    }

    /// Returns the raw option word.
    #[must_use]
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Returns the flag for an option name.
    ///
    /// This can be used to probe whether an option is supported.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::NAMES
            .iter()
            .find(|(item, _)| *item == name)
            .map(|(_, flag)| *flag)
    }

    /// Returns an iterator over the names of all supported options.
    pub fn names() -> impl Iterator<Item = &'static str> {
        Self::NAMES.iter().map(|(name, _)| *name)
    }

    /// Returns whether all options in `other` are set in `self`.
    #[must_use]
    pub const fn contains(self, other: Flags) -> bool {
        self.0 & other.0 == other.0
    }

    /// Returns whether no option is set.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Resolves the TR46 processing mode selected by the flags.
    ///
    /// Unless TR46 processing is disabled, it defaults to nontransitional
    /// processing. Asking for both modes at the same time or for a mode
    /// while disabling TR46 is an error.
    pub fn tr46_mode(self) -> Result<Option<Tr46Mode>, Error> {
        let transitional = self.contains(Flags::TRANSITIONAL);
        let nontransitional = self.contains(Flags::NONTRANSITIONAL);
        if transitional && nontransitional {
            return Err(Error::new(
                ErrorKind::InvalidFlags,
                "transitional and nontransitional processing requested",
            ));
        }
        if self.contains(Flags::NO_TR46) {
            if transitional || nontransitional {
                return Err(Error::new(
                    ErrorKind::InvalidFlags,
                    "TR46 processing mode requested but TR46 disabled",
                ));
            }
            return Ok(None);
        }
        if transitional {
            Ok(Some(Tr46Mode::Transitional))
        } else {
            Ok(Some(Tr46Mode::Nontransitional))
        }
    }
}

//--- BitOr, BitOrAssign

impl ops::BitOr for Flags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Flags(self.0 | rhs.0)
    }
}

impl ops::BitOrAssign for Flags {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0
    }
}

//--- From and TryFrom

impl From<Flags> for u32 {
    fn from(flags: Flags) -> u32 {
        flags.0
    }
}

impl TryFrom<u32> for Flags {
    type Error = Error;

    fn try_from(bits: u32) -> Result<Self, Error> {
        Flags::from_bits(bits)
    }
}

impl From<ConversionFlags> for Flags {
    fn from(flags: ConversionFlags) -> Self {
        flags.to_flags()
    }
}

impl<'a> From<&'a ConversionFlags> for Flags {
    fn from(flags: &'a ConversionFlags) -> Self {
        flags.to_flags()
    }
}

//--- Debug

impl fmt::Debug for Flags {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("Flags(")?;
        let mut first = true;
        for (name, flag) in Self::NAMES.iter() {
            if self.contains(*flag) {
                if !first {
                    f.write_str(" | ")?;
                }
                f.write_str(name)?;
                first = false;
            }
        }
        f.write_str(")")
    }
}

//------------ Tr46Mode ------------------------------------------------------

/// The flavour of TR46 processing.
///
/// The two modes differ only in how the four deviation characters ß, ς,
/// ZERO WIDTH JOINER, and ZERO WIDTH NON-JOINER are treated.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Tr46Mode {
    /// Deviation characters are mapped as in IDNA2003.
    Transitional,

    /// Deviation characters are kept.
    Nontransitional,
}

//------------ ConversionFlags -----------------------------------------------

/// Conversion options as named booleans.
///
/// All options are off by default. Note that with all options off,
/// nontransitional TR46 processing is used. It is only switched off via
/// [`set_no_tr46`][Self::set_no_tr46].
///
/// With the `serde` feature, the options are (de)serialized as a map of
/// booleans. Like with [`from_options`][Self::from_options], missing
/// options are off and unknown options are ignored.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct ConversionFlags {
    /// Normalize input to NFC.
    nfc_input: bool,

    /// Verify produced A-labels by decoding them again.
    alabel_roundtrip: bool,

    /// Disable TR46 processing.
    no_tr46: bool,

    /// Use transitional TR46 processing.
    transitional: bool,

    /// Explicitly ask for nontransitional TR46 processing.
    nontransitional: bool,

    /// Accept unassigned code points.
    allow_unassigned: bool,

    /// Enforce the STD3 rules for ASCII.
    use_std3_ascii_rules: bool,
}

impl ConversionFlags {
    /// Creates a new value with all options off.
    #[must_use]
    pub fn new() -> Self {
        Default::default()
    }

    /// Creates a value from a sequence of named options.
    ///
    /// Options that are not mentioned stay off. Unknown names are
    /// ignored, use [`Flags::from_name`] to check for them.
    pub fn from_options<'a>(
        options: impl IntoIterator<Item = (&'a str, bool)>,
    ) -> Self {
        let mut res = Self::new();
        for (name, value) in options {
            if let Some(flag) = Flags::from_name(name) {
                res.set_flag(flag, value);
            }
        }
        res
    }

    /// Assembles the option word.
    #[must_use]
    pub fn to_flags(&self) -> Flags {
        let mut res = Flags::EMPTY;
        for (value, flag) in [
            (self.nfc_input, Flags::NFC_INPUT),
            (self.alabel_roundtrip, Flags::ALABEL_ROUNDTRIP),
            (self.no_tr46, Flags::NO_TR46),
            (self.transitional, Flags::TRANSITIONAL),
            (self.nontransitional, Flags::NONTRANSITIONAL),
            (self.allow_unassigned, Flags::ALLOW_UNASSIGNED),
            (self.use_std3_ascii_rules, Flags::USE_STD3_ASCII_RULES),
        ] {
            if value {
                res |= flag
            }
        }
        res
    }

    fn set_flag(&mut self, flag: Flags, value: bool) {
        let field = match flag {
            Flags::NFC_INPUT => &mut self.nfc_input,
            Flags::ALABEL_ROUNDTRIP => &mut self.alabel_roundtrip,
            Flags::NO_TR46 => &mut self.no_tr46,
            Flags::TRANSITIONAL => &mut self.transitional,
            Flags::NONTRANSITIONAL => &mut self.nontransitional,
            Flags::ALLOW_UNASSIGNED => &mut self.allow_unassigned,
            Flags::USE_STD3_ASCII_RULES => &mut self.use_std3_ascii_rules,
            _ => return,
        };
        *field = value
    }

    /// Returns whether input is normalized to NFC.
    pub fn nfc_input(&self) -> bool {
        self.nfc_input
    }

    /// Sets whether input is normalized to NFC.
    ///
    /// Without this option, input that isn’t in NFC already is rejected
    /// unless TR46 processing normalizes it anyway.
    pub fn set_nfc_input(&mut self, value: bool) {
        self.nfc_input = value
    }

    /// Returns whether produced A-labels are verified.
    pub fn alabel_roundtrip(&self) -> bool {
        self.alabel_roundtrip
    }

    /// Sets whether produced A-labels are verified.
    pub fn set_alabel_roundtrip(&mut self, value: bool) {
        self.alabel_roundtrip = value
    }

    /// Returns whether TR46 processing is disabled.
    pub fn no_tr46(&self) -> bool {
        self.no_tr46
    }

    /// Sets whether TR46 processing is disabled.
    pub fn set_no_tr46(&mut self, value: bool) {
        self.no_tr46 = value
    }

    /// Returns whether transitional processing is requested.
    pub fn transitional(&self) -> bool {
        self.transitional
    }

    /// Sets whether transitional processing is requested.
    pub fn set_transitional(&mut self, value: bool) {
        self.transitional = value
    }

    /// Returns whether nontransitional processing is requested.
    pub fn nontransitional(&self) -> bool {
        self.nontransitional
    }

    /// Sets whether nontransitional processing is requested.
    pub fn set_nontransitional(&mut self, value: bool) {
        self.nontransitional = value
    }

    /// Returns whether unassigned code points are accepted.
    pub fn allow_unassigned(&self) -> bool {
        self.allow_unassigned
    }

    /// Sets whether unassigned code points are accepted.
    pub fn set_allow_unassigned(&mut self, value: bool) {
        self.allow_unassigned = value
    }

    /// Returns whether the STD3 ASCII rules are enforced.
    pub fn use_std3_ascii_rules(&self) -> bool {
        self.use_std3_ascii_rules
    }

    /// Sets whether the STD3 ASCII rules are enforced.
    pub fn set_use_std3_ascii_rules(&mut self, value: bool) {
        self.use_std3_ascii_rules = value
    }
}

/// # Builder-style setters
///
impl ConversionFlags {
    #[must_use]
    pub fn with_nfc_input(mut self, value: bool) -> Self {
        self.set_nfc_input(value);
        self
    }

    #[must_use]
    pub fn with_alabel_roundtrip(mut self, value: bool) -> Self {
        self.set_alabel_roundtrip(value);
        self
    }

    #[must_use]
    pub fn with_no_tr46(mut self, value: bool) -> Self {
        self.set_no_tr46(value);
        self
    }

    #[must_use]
    pub fn with_transitional(mut self, value: bool) -> Self {
        self.set_transitional(value);
        self
    }

    #[must_use]
    pub fn with_nontransitional(mut self, value: bool) -> Self {
        self.set_nontransitional(value);
        self
    }

    #[must_use]
    pub fn with_allow_unassigned(mut self, value: bool) -> Self {
        self.set_allow_unassigned(value);
        self
    }

    #[must_use]
    pub fn with_use_std3_ascii_rules(mut self, value: bool) -> Self {
        self.set_use_std3_ascii_rules(value);
        self
    }
}

//--- From

impl From<Flags> for ConversionFlags {
    fn from(flags: Flags) -> Self {
        let mut res = Self::new();
        for (_, flag) in Flags::NAMES.iter() {
            res.set_flag(*flag, flags.contains(*flag));
        }
        res
    }
}

//============ Testing =======================================================
