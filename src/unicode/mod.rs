//! Unicode character data.
//!
//! IDNA2008 decides whether a code point may appear in a label based on
//! a number of its Unicode properties. Most of these properties are taken
//! from the Unicode character database via the `regex-syntax` crate which
//! carries the relevant tables anyway. Since building the sets is not free,
//! this happens once, the first time [`Tables::get`] is called. The sets
//! are never modified afterwards and can be shared between threads
//! freely.
//!
//! The remaining data is defined by the IDNA2008 RFCs directly and lives
//! in constant tables.

pub use self::bidi::{check_bidi, is_rtl_label};
pub use self::context::{check_contextj, check_contexto, JoiningType};
pub use self::derived::{derived_property, DerivedProperty};
pub(crate) use self::derived::nfkc_casefold;

pub mod normalize;

mod bidi;
mod context;
mod derived;
pub(crate) mod tables;

use regex_syntax::hir::{Class, HirKind};
use std::sync::OnceLock;
use tracing::debug;

//------------ Tables --------------------------------------------------------

/// The Unicode property sets needed for processing labels.
#[derive(Debug)]
pub struct Tables {
    /// General_Category Cn.
    unassigned: RangeSet,

    /// Noncharacter_Code_Point.
    noncharacters: RangeSet,

    /// General_Category Ll, Lu, Lo, Nd, Lm, Mn, or Mc.
    letter_digits: RangeSet,

    /// General_Category M.
    marks: RangeSet,

    /// Default_Ignorable_Code_Point, White_Space, or Noncharacter_Code_Point.
    ignorable: RangeSet,

    /// General_Category Mn, Me, or Cf.
    transparent: RangeSet,

    /// General_Category Cc, Cf, Co, Zl, or Zp.
    controls: RangeSet,

    /// Script Greek.
    greek: RangeSet,

    /// Script Hebrew.
    hebrew: RangeSet,

    /// Script Hiragana, Katakana, or Han.
    japanese: RangeSet,
}

static TABLES: OnceLock<Tables> = OnceLock::new();

impl Tables {
    /// Returns a reference to the tables, building them if necessary.
    pub fn get() -> &'static Self {
        TABLES.get_or_init(Self::build)
    }

    fn build() -> Self {
        debug!("building Unicode property tables");
        Tables {
            unassigned: RangeSet::from_class(r"\p{Cn}"),
            noncharacters: RangeSet::from_class(
                r"\p{Noncharacter_Code_Point}",
            ),
            letter_digits: RangeSet::from_class(
                r"[\p{Ll}\p{Lu}\p{Lo}\p{Nd}\p{Lm}\p{Mn}\p{Mc}]",
            ),
            marks: RangeSet::from_class(r"\p{M}"),
            ignorable: RangeSet::from_class(
                r"[\p{Default_Ignorable_Code_Point}\p{White_Space}\p{Noncharacter_Code_Point}]",
            ),
            transparent: RangeSet::from_class(r"[\p{Mn}\p{Me}\p{Cf}]"),
            controls: RangeSet::from_class(
                r"[\p{Cc}\p{Cf}\p{Co}\p{Zl}\p{Zp}]",
            ),
            greek: RangeSet::from_class(r"\p{Greek}"),
            hebrew: RangeSet::from_class(r"\p{Hebrew}"),
            japanese: RangeSet::from_class(
                r"[\p{Hiragana}\p{Katakana}\p{Han}]",
            ),
        }
    }

    /// Returns whether a code point is unassigned.
    ///
    /// Noncharacters are not considered unassigned.
    pub fn is_unassigned(&self, ch: char) -> bool {
        self.unassigned.contains(ch) && !self.noncharacters.contains(ch)
    }

    /// Returns whether a code point is a letter, digit or non-enclosing mark.
    pub fn is_letter_digit(&self, ch: char) -> bool {
        self.letter_digits.contains(ch)
    }

    /// Returns whether a code point is a combining mark.
    pub fn is_mark(&self, ch: char) -> bool {
        self.marks.contains(ch)
    }

    /// Returns whether a code point has one of the ignorable properties.
    pub fn is_ignorable(&self, ch: char) -> bool {
        self.ignorable.contains(ch)
    }

    /// Returns whether a code point is transparent for cursive joining.
    pub fn is_transparent(&self, ch: char) -> bool {
        self.transparent.contains(ch)
    }

    /// Returns whether a code point is a control, format or private use
    /// character or a line or paragraph separator.
    pub fn is_control(&self, ch: char) -> bool {
        self.controls.contains(ch)
    }

    /// Returns whether a code point is in the Greek script.
    pub fn is_greek(&self, ch: char) -> bool {
        self.greek.contains(ch)
    }

    /// Returns whether a code point is in the Hebrew script.
    pub fn is_hebrew(&self, ch: char) -> bool {
        self.hebrew.contains(ch)
    }

    /// Returns whether a code point is Hiragana, Katakana, or Han.
    pub fn is_japanese(&self, ch: char) -> bool {
        self.japanese.contains(ch)
    }
}

//------------ RangeSet ------------------------------------------------------

/// A set of code points as a sorted list of inclusive ranges.
#[derive(Clone, Debug, Default)]
struct RangeSet(Box<[(u32, u32)]>);

impl RangeSet {
    /// Creates the set for a character class expression.
    ///
    /// # Panics
    ///
    /// The function panics if the expression isn’t a valid character
    /// class. As it is only called with fixed expressions, this would be
    /// a bug.
    fn from_class(pattern: &str) -> Self {
        let hir =
            regex_syntax::parse(pattern).expect("invalid character class");
        match hir.into_kind() {
            HirKind::Class(Class::Unicode(class)) => RangeSet(
                class
                    .ranges()
                    .iter()
                    .map(|range| {
                        (u32::from(range.start()), u32::from(range.end()))
                    })
                    .collect(),
            ),
            HirKind::Literal(literal) => RangeSet(
                core::str::from_utf8(&literal.0)
                    .expect("non-UTF-8 literal")
                    .chars()
                    .map(|ch| (u32::from(ch), u32::from(ch)))
                    .collect(),
            ),
            _ => panic!("not a Unicode character class"),
        }
    }

    fn contains(&self, ch: char) -> bool {
        tables::contains(&self.0, ch)
    }
}

//============ Testing =======================================================
