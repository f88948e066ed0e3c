//! Library version and capabilities.
//!
//! Applications that need a certain version of this crate or a certain
//! conversion option can find out at run time via [`check_version`] and
//! [`Capabilities`].

use crate::base::error::{Error, ErrorKind};
use crate::base::flags::Flags;

//------------ Constants -----------------------------------------------------

/// The version of the crate as a string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The version of the crate as a number.
///
/// The number is of the form `0xMMmmpppp` with `MM` the major, `mm` the
/// minor, and `pppp` the patch version.
pub const VERSION_NUMBER: u32 = {
    let major = parse_const(env!("CARGO_PKG_VERSION_MAJOR"));
    let minor = parse_const(env!("CARGO_PKG_VERSION_MINOR"));
    let patch = parse_const(env!("CARGO_PKG_VERSION_PATCH"));
    (major << 24) | (minor << 16) | patch
};

/// Parses a decimal number at compile time.
const fn parse_const(s: &str) -> u32 {
    let bytes = s.as_bytes();
    let mut res = 0;
    let mut i = 0;
    while i < bytes.len() {
        res = res * 10 + (bytes[i] - b'0') as u32;
        i += 1;
    }
    res
}

//------------ check_version -------------------------------------------------

/// Checks that the crate is at least of the given version.
///
/// The required version is given as up to three dot-separated decimal
/// numbers. Anything following the digits of a component, such as a
/// pre-release suffix, is ignored, as are components beyond the third.
/// Missing components are taken as zero.
///
/// Returns the version string of the crate if it is the same or newer
/// than `required` or if `required` is `None`.
pub fn check_version(required: Option<&str>) -> Result<&'static str, Error> {
    let required = match required {
        Some(required) => required,
        None => return Ok(VERSION),
    };
    match parse_version(required) {
        Some(number) if number <= VERSION_NUMBER => Ok(VERSION),
        Some(_) => Err(Error::new(
            ErrorKind::VersionTooOld,
            "library version older than required",
        )),
        None => Err(Error::new(
            ErrorKind::VersionTooOld,
            "invalid version requirement",
        )),
    }
}

/// Parses a version string into its numerical form.
fn parse_version(version: &str) -> Option<u32> {
    let mut res = 0u32;
    let mut components = version.trim().split('.');
    for (shift, max) in [(24u32, 0xFFu32), (16, 0xFF), (0, 0xFFFF)] {
        let component = match components.next() {
            Some(component) => component,
            None => break,
        };
        let digits = component
            .find(|ch: char| !ch.is_ascii_digit())
            .map(|end| &component[..end])
            .unwrap_or(component);
        let value: u32 = digits.parse().ok()?;
        if value > max {
            return None;
        }
        res |= value << shift;
    }
    Some(res)
}

//------------ Capabilities --------------------------------------------------

/// What this build of the crate can do.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Capabilities {
    version: &'static str,
    version_number: u32,
    flags: Flags,
}

impl Capabilities {
    /// Returns the capabilities of the crate.
    #[must_use]
    pub fn get() -> Self {
        Capabilities {
            version: VERSION,
            version_number: VERSION_NUMBER,
            flags: Flags::SUPPORTED,
        }
    }

    /// Returns the version string.
    #[must_use]
    pub fn version(&self) -> &'static str {
        self.version
    }

    /// Returns the version number.
    #[must_use]
    pub fn version_number(&self) -> u32 {
        self.version_number
    }

    /// Returns all supported options.
    #[must_use]
    pub fn flags(&self) -> Flags {
        self.flags
    }

    /// Returns whether the option with the given name is supported.
    #[must_use]
    pub fn supports(&self, name: &str) -> bool {
        Flags::from_name(name)
            .map(|flag| self.flags.contains(flag))
            .unwrap_or(false)
    }
}

impl Default for Capabilities {
    fn default() -> Self {
        Self::get()
    }
}

//============ Testing =======================================================
