//! Domain names.
//!
//! A domain name in its textual form is a sequence of labels separated by
//! dots. If the name ends in a dot, it is *absolute*, i.e., the last label
//! is the empty root label. Because in practice the final dot is often
//! omitted, names without it are accepted, too, and the distinction is
//! kept so that the converted name looks like the original.
//!
//! Conversion first splits a name into its labels via [`Domain::split`],
//! converts each label on its own, and then assembles the result with a
//! [`DomainBuilder`] which keeps track of the overall length.

use super::error::{Error, ErrorKind};
use smallvec::SmallVec;

//------------ Constants -----------------------------------------------------

/// Domain names have a maximum length of 255 octets in wire format.
///
/// In wire format, each label is preceded by a length octet and the name
/// ends in the root label’s zero octet. For the textual form this means
/// that a name may have at most 253 characters, not counting a final dot.
pub const DOMAIN_MAX_LENGTH: usize = 255;

/// The label separators recognized in addition to the ASCII full stop.
///
/// These are IDEOGRAPHIC FULL STOP, FULLWIDTH FULL STOP, and HALFWIDTH
/// IDEOGRAPHIC FULL STOP which TR46 maps to a full stop.
const UNICODE_DOTS: [char; 3] = ['\u{3002}', '\u{FF0E}', '\u{FF61}'];

//------------ Separators ----------------------------------------------------

/// The set of characters treated as label separators.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Separators {
    /// Only the ASCII full stop separates labels.
    Ascii,

    /// All full stop variants mapped to a full stop by TR46 separate
    /// labels.
    Unicode,
}

impl Separators {
    /// Returns whether `ch` is a separator.
    #[must_use]
    pub fn is_separator(self, ch: char) -> bool {
        match self {
            Separators::Ascii => ch == '.',
            Separators::Unicode => ch == '.' || UNICODE_DOTS.contains(&ch),
        }
    }
}

//------------ Domain --------------------------------------------------------

/// A domain name split into its labels.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Domain<'a> {
    /// The labels of the name, not including the root label.
    labels: SmallVec<[&'a str; 8]>,

    /// Whether the name ended in a separator.
    absolute: bool,
}

impl<'a> Domain<'a> {
    /// Splits a domain name into its labels.
    ///
    /// The empty string is the empty name and a single separator is the
    /// root name. Otherwise, no label may be empty except for a single
    /// trailing one which marks the name as absolute.
    pub fn split(
        input: &'a str,
        separators: Separators,
    ) -> Result<Self, Error> {
        if input.is_empty() {
            return Ok(Domain {
                labels: SmallVec::new(),
                absolute: false,
            });
        }
        let mut labels: SmallVec<[&'a str; 8]> =
            input.split(|ch| separators.is_separator(ch)).collect();

        // A lone separator is the root name.
        if labels.len() == 2 && labels.iter().all(|l| l.is_empty()) {
            return Ok(Domain {
                labels: SmallVec::new(),
                absolute: true,
            });
        }
        let absolute =
            labels.last().map(|label| label.is_empty()) == Some(true);
        if absolute {
            labels.pop();
        }
        if labels.iter().any(|label| label.is_empty()) {
            return Err(Error::new(
                ErrorKind::StructuralViolation,
                "empty label",
            ));
        }
        Ok(Domain { labels, absolute })
    }

    /// Returns the labels of the name.
    #[must_use]
    pub fn labels(&self) -> &[&'a str] {
        &self.labels
    }

    /// Returns the number of labels, not counting the root label.
    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Returns whether the name has no labels.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Returns whether the name ended in a separator.
    #[must_use]
    pub fn is_absolute(&self) -> bool {
        self.absolute
    }
}

//------------ DomainBuilder -------------------------------------------------

/// Assembles a domain name from converted labels.
#[derive(Clone, Debug, Default)]
pub struct DomainBuilder {
    /// The name assembled so far.
    buf: String,

    /// The number of labels pushed.
    labels: usize,
}

impl DomainBuilder {
    /// Creates a new, empty builder.
    #[must_use]
    pub fn new() -> Self {
        Default::default()
    }

    /// Creates a new builder with room for `capacity` octets.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        DomainBuilder {
            buf: String::with_capacity(capacity),
            labels: 0,
        }
    }

    /// Appends a label.
    pub fn push(&mut self, label: &str) {
        if self.labels > 0 {
            self.buf.push('.');
        }
        self.buf.push_str(label);
        self.labels += 1;
    }

    /// Returns the number of labels pushed so far.
    #[must_use]
    pub fn label_count(&self) -> usize {
        self.labels
    }

    /// Returns the length of the name in wire format.
    ///
    /// This assumes all labels are in ASCII.
    #[must_use]
    pub fn wire_len(&self) -> usize {
        if self.labels == 0 {
            1
        } else {
            self.buf.len() + 2
        }
    }

    /// Finishes an ASCII name.
    ///
    /// Fails if the name is longer than [`DOMAIN_MAX_LENGTH`] octets in
    /// wire format.
    pub fn finish_ascii(self, absolute: bool) -> Result<String, Error> {
        if self.wire_len() > DOMAIN_MAX_LENGTH {
            return Err(Error::new(
                ErrorKind::DomainTooLong,
                "domain name longer than 255 octets",
            ));
        }
        Ok(self.finish(absolute))
    }

    /// Finishes the name without checking its length.
    #[must_use]
    pub fn finish(mut self, absolute: bool) -> String {
        if absolute {
            self.buf.push('.');
        }
        self.buf
    }
}

//============ Testing =======================================================
