//! Basics.
//!
//! This module provides the types shared by all parts of the crate:
//!
//! * [error] for the error type reported by all conversions,
//! * [flags] for the conversion options,
//! * [label] for facts about individual labels, and
//! * [name] for splitting and assembling domain names.
//!
//! The most important types are re-exported at the crate root.

pub use self::error::{Error, ErrorKind};
pub use self::flags::{ConversionFlags, Flags, Tr46Mode};
pub use self::label::{LabelForm, ACE_PREFIX, LABEL_MAX_LENGTH};
pub use self::name::{Domain, DomainBuilder, Separators, DOMAIN_MAX_LENGTH};

pub mod error;
pub mod flags;
pub mod label;
pub mod name;
