//! Internationalized domain names for Rust.
//!
//! This crate converts domain names between their Unicode form and the
//! ASCII-compatible encoding used in the DNS following IDNA2008, i.e.,
//! [RFC 5890] through [RFC 5893], and the compatibility processing of
//! [Unicode Technical Standard #46][TR46].
//!
//! A label containing non-ASCII characters is called a *U-label.* Its
//! ASCII form, the *A-label,* consists of the prefix `xn--` followed by
//! the [Punycode] encoding of the U-label.
//!
//! # Usage
//!
//! The four main operations are available at the crate root:
//!
//! * [`to_ascii`] converts a domain name into ASCII,
//! * [`to_unicode`] converts a domain name into Unicode,
//! * [`lookup`] converts a domain name a user entered for looking it up,
//!   and
//! * [`register`] checks a label before it is added to a zone.
//!
//! ```
//! use domain_idn::{to_ascii, to_unicode, Flags};
//!
//! let ascii = to_ascii("münchen.de", Flags::EMPTY).unwrap();
//! assert_eq!(ascii, "xn--mnchen-3ya.de");
//! assert_eq!(to_unicode(&ascii, Flags::EMPTY).unwrap(), "münchen.de");
//! ```
//!
//! All operations take options that change the details of processing.
//! These can be given either as a [`Flags`] value or as a
//! [`ConversionFlags`] config struct. If something goes wrong, an
//! [`Error`] describes what it was.
//!
//! # Modules
//!
//! * [base] contains the fundamental types such as errors, options, and
//!   domain names,
//! * [convert] contains the conversion functions,
//! * [validate] checks individual labels,
//! * [tr46] contains the TR46 mapping,
//! * [unicode] provides the Unicode character data and normalization,
//! * [utils] contains the Punycode codec, and
//! * [version] allows checking the version and capabilities of the crate.
//!
//! # Reference of Feature Flags
//!
//! * `serde`: Enables serde serialization for [`Flags`] and
//!   [`ConversionFlags`].
//!
//! [RFC 5890]: https://tools.ietf.org/html/rfc5890
//! [RFC 5893]: https://tools.ietf.org/html/rfc5893
//! [TR46]: https://www.unicode.org/reports/tr46/
//! [Punycode]: https://tools.ietf.org/html/rfc3492

#![allow(renamed_and_removed_lints)]
#![allow(clippy::unknown_clippy_lints)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub use self::base::error::{Error, ErrorKind};
pub use self::base::flags::{ConversionFlags, Flags};
pub use self::base::label::LABEL_MAX_LENGTH;
pub use self::base::name::DOMAIN_MAX_LENGTH;
pub use self::convert::{
    lookup, lookup_utf8, register, register_utf8, to_ascii, to_ascii_ucs4,
    to_ascii_utf8, to_unicode, to_unicode_utf8,
};
pub use self::version::{check_version, VERSION, VERSION_NUMBER};

pub mod base;
pub mod convert;
pub mod tr46;
pub mod unicode;
pub mod utils;
pub mod validate;
pub mod version;
