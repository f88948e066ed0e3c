//! Decoding and encoding of Punycode.
//!
//! Punycode is defined in [RFC 3492]. It encodes a sequence of Unicode
//! code points into a sequence of the letters, digits, and hyphens
//! allowed in host names. The basic, i.e., ASCII, code points of the
//! input are copied over first, followed by the insertion positions and
//! values of all other code points as variable-length integers.
//!
//! Functions for the raw encoding are [`encode`] and [`decode`]. The
//! functions [`to_alabel`] and [`from_alabel`] deal with complete labels
//! including the ACE prefix.
//!
//! [RFC 3492]: https://tools.ietf.org/html/rfc3492

use crate::base::error::{Error, ErrorKind};
use crate::base::label::{strip_ace_prefix, ACE_PREFIX};
use core::fmt;
use smallvec::SmallVec;
use std::borrow::Cow;

//------------ Constants -----------------------------------------------------

const BASE: u32 = 36;
const T_MIN: u32 = 1;
const T_MAX: u32 = 26;
const SKEW: u32 = 38;
const DAMP: u32 = 700;
const INITIAL_BIAS: u32 = 72;
const INITIAL_N: u32 = 0x80;
const DELIMITER: char = '-';

/// The buffer for a decoded label.
///
/// A label has at most 63 octets, so this will not spill for any input
/// that came out of a domain name.
type CharBuf = SmallVec<[char; 64]>;

//------------ Convenience Functions -----------------------------------------

/// Converts a label into an A-label.
///
/// Labels consisting of ASCII characters only are returned unchanged.
/// For all other labels, the ACE prefix is prepended to their Punycode
/// encoding.
pub fn to_alabel(label: &str) -> Result<Cow<str>, PunycodeError> {
    if label.is_ascii() {
        return Ok(Cow::Borrowed(label));
    }
    let encoded = encode(label)?;
    let mut res = String::with_capacity(ACE_PREFIX.len() + encoded.len());
    res.push_str(ACE_PREFIX);
    res.push_str(&encoded);
    Ok(Cow::Owned(res))
}

/// Converts an A-label into a U-label.
///
/// The ACE prefix is recognized regardless of case. Besides the label
/// being correctly encoded, the encoding must be the one that [`encode`]
/// produces for the result, ignoring ASCII case, and the result must
/// contain at least one non-ASCII character.
pub fn from_alabel(label: &str) -> Result<String, PunycodeError> {
    let encoded = strip_ace_prefix(label).ok_or(PunycodeError::NoPrefix)?;
    let res = decode(encoded)?;
    if res.is_ascii() {
        return Err(PunycodeError::AsciiOnly);
    }
    if !encode(&res)?.eq_ignore_ascii_case(encoded) {
        return Err(PunycodeError::NotCanonical);
    }
    Ok(res)
}

//------------ Encoding ------------------------------------------------------

/// Encodes a string into Punycode.
///
/// The result does not include the ACE prefix. Encoding only fails on
/// overflow which requires input far longer than any label.
pub fn encode(input: &str) -> Result<String, PunycodeError> {
    let chars: CharBuf = input.chars().collect();
    let mut output: String =
        chars.iter().filter(|ch| ch.is_ascii()).collect();
    let basic_len = output.len() as u32;
    let input_len = chars.len() as u32;
    if basic_len > 0 {
        output.push(DELIMITER);
    }

    let mut n = INITIAL_N;
    let mut delta = 0u32;
    let mut bias = INITIAL_BIAS;
    let mut handled = basic_len;
    while handled < input_len {
        // The smallest code point not yet handled.
        let m = match chars
            .iter()
            .map(|&ch| u32::from(ch))
            .filter(|&ch| ch >= n)
            .min()
        {
            Some(m) => m,
            None => break,
        };
        delta = (m - n)
            .checked_mul(handled + 1)
            .and_then(|inc| delta.checked_add(inc))
            .ok_or(PunycodeError::Overflow)?;
        n = m;

        for &ch in chars.iter() {
            let ch = u32::from(ch);
            if ch < n {
                delta = delta.checked_add(1).ok_or(PunycodeError::Overflow)?;
            }
            if ch == n {
                let mut q = delta;
                let mut k = BASE;
                loop {
                    let t = threshold(k, bias);
                    if q < t {
                        break;
                    }
                    output.push(encode_digit(t + (q - t) % (BASE - t)));
                    q = (q - t) / (BASE - t);
                    k += BASE;
                }
                output.push(encode_digit(q));
                bias = adapt(delta, handled + 1, handled == basic_len);
                delta = 0;
                handled += 1;
            }
        }
        delta = delta.checked_add(1).ok_or(PunycodeError::Overflow)?;
        n += 1;
    }
    Ok(output)
}

//------------ Decoding ------------------------------------------------------

/// Decodes a Punycode string.
///
/// The input must not include the ACE prefix. Digits are accepted in
/// either case.
pub fn decode(input: &str) -> Result<String, PunycodeError> {
    // Everything before the last delimiter is copied verbatim.
    let (basic, mut input) = match input.rfind(DELIMITER) {
        Some(pos) => (&input[..pos], input[pos + 1..].as_bytes()),
        None => ("", input.as_bytes()),
    };
    if !basic.is_ascii() {
        return Err(PunycodeError::NonBasic);
    }
    let mut output: CharBuf = basic.chars().collect();

    let mut n = INITIAL_N;
    let mut i = 0u32;
    let mut bias = INITIAL_BIAS;
    let mut first = true;
    while !input.is_empty() {
        // Read one variable-length integer and add it to i.
        let old_i = i;
        let mut weight = 1u32;
        let mut k = BASE;
        loop {
            let (&octet, rest) =
                input.split_first().ok_or(PunycodeError::ShortInput)?;
            input = rest;
            let digit = decode_digit(octet)?;
            i = digit
                .checked_mul(weight)
                .and_then(|inc| i.checked_add(inc))
                .ok_or(PunycodeError::Overflow)?;
            let t = threshold(k, bias);
            if digit < t {
                break;
            }
            weight = weight
                .checked_mul(BASE - t)
                .ok_or(PunycodeError::Overflow)?;
            k += BASE;
        }

        let len = output.len() as u32 + 1;
        bias = adapt(i - old_i, len, first);
        first = false;
        n = n.checked_add(i / len).ok_or(PunycodeError::Overflow)?;
        i %= len;
        let ch = char::from_u32(n).ok_or(PunycodeError::InvalidCodePoint)?;
        output.insert(i as usize, ch);
        i += 1;
    }
    Ok(output.into_iter().collect())
}

//------------ Helper Functions ----------------------------------------------

/// Adjusts the bias after a delta has been processed.
fn adapt(mut delta: u32, num_points: u32, first: bool) -> u32 {
    delta /= if first { DAMP } else { 2 };
    delta += delta / num_points;
    let mut k = 0;
    while delta > ((BASE - T_MIN) * T_MAX) / 2 {
        delta /= BASE - T_MIN;
        k += BASE;
    }
    k + (((BASE - T_MIN + 1) * delta) / (delta + SKEW))
}

fn threshold(k: u32, bias: u32) -> u32 {
    k.saturating_sub(bias).clamp(T_MIN, T_MAX)
}

/// Returns the value of a digit.
///
/// 'A'..'Z' and 'a'..'z' are 0..25, '0'..'9' are 26..35.
fn decode_digit(octet: u8) -> Result<u32, PunycodeError> {
    match octet {
        b'A'..=b'Z' => Ok(u32::from(octet - b'A')),
        b'a'..=b'z' => Ok(u32::from(octet - b'a')),
        b'0'..=b'9' => Ok(u32::from(octet - b'0') + 26),
        _ => Err(PunycodeError::IllegalChar(char::from(octet))),
    }
}

/// Returns the lower case digit for a value.
fn encode_digit(value: u32) -> char {
    debug_assert!(value < BASE);
    let value = value as u8;
    if value < 26 {
        char::from(b'a' + value)
    } else {
        char::from(b'0' + value - 26)
    }
}

//============ Error Types ===================================================

//------------ PunycodeError -------------------------------------------------

/// Punycode data was malformed.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PunycodeError {
    /// A character was found that isn’t a Punycode digit.
    IllegalChar(char),

    /// The basic code points contained non-ASCII characters.
    NonBasic,

    /// The input ended in the middle of an integer.
    ShortInput,

    /// A value exceeded the 32 bit integer range.
    Overflow,

    /// A decoded value is not a Unicode scalar value.
    InvalidCodePoint,

    /// An A-label did not start with the ACE prefix.
    NoPrefix,

    /// An A-label decoded to ASCII characters only.
    AsciiOnly,

    /// The encoding was not the one produced for the decoded label.
    NotCanonical,
}

impl PunycodeError {
    /// Returns a static description of the error.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            PunycodeError::IllegalChar(_) => {
                "illegal character in Punycode"
            }
            PunycodeError::NonBasic => "non-ASCII basic code points",
            PunycodeError::ShortInput => "incomplete Punycode input",
            PunycodeError::Overflow => "Punycode overflow",
            PunycodeError::InvalidCodePoint => "invalid decoded code point",
            PunycodeError::NoPrefix => "missing ACE prefix",
            PunycodeError::AsciiOnly => {
                "A-label without non-ASCII characters"
            }
            PunycodeError::NotCanonical => "non-canonical Punycode",
        }
    }
}

//--- From

impl From<PunycodeError> for Error {
    fn from(err: PunycodeError) -> Self {
        match err {
            PunycodeError::IllegalChar(ch) => Error::with_codepoint(
                ErrorKind::PunycodeError,
                err.as_str(),
                ch,
            ),
            _ => Error::new(ErrorKind::PunycodeError, err.as_str()),
        }
    }
}

//--- Display and Error

impl fmt::Display for PunycodeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            PunycodeError::IllegalChar(ch) => {
                write!(f, "illegal character '{}' in Punycode", ch)
            }
            _ => f.write_str(self.as_str()),
        }
    }
}

impl std::error::Error for PunycodeError {}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn labels() {
        assert_eq!(encode("münchen").unwrap(), "mnchen-3ya");
        assert_eq!(encode("müller").unwrap(), "mller-kva");
        assert_eq!(encode("bücher").unwrap(), "bcher-kva");
        assert_eq!(decode("mnchen-3ya").unwrap(), "münchen");
        assert_eq!(decode("mller-kva").unwrap(), "müller");
        assert_eq!(to_alabel("münchen").unwrap(), "xn--mnchen-3ya");
        assert_eq!(to_alabel("example").unwrap(), "example");
        assert_eq!(from_alabel("xn--mnchen-3ya").unwrap(), "münchen");
        assert_eq!(from_alabel("XN--MNCHEN-3YA").unwrap(), "MüNCHEN");
    }

    #[test]
    fn rfc3492_samples() {
        const SAMPLES: &[(&str, &str)] = &[
            (
                "egbpdaj6bu4bxfgehfvwxn",
                "\u{0644}\u{064A}\u{0647}\u{0645}\u{0627}\u{0628}\u{062A}\
                 \u{0643}\u{0644}\u{0645}\u{0648}\u{0634}\u{0639}\u{0631}\
                 \u{0628}\u{064A}\u{061F}",
            ),
            (
                "ihqwcrb4cv8a8dqg056pqjye",
                "\u{4ED6}\u{4EEC}\u{4E3A}\u{4EC0}\u{4E48}\u{4E0D}\u{8BF4}\
                 \u{4E2D}\u{6587}",
            ),
            (
                "Proprostnemluvesky-uyb24dma41a",
                "Pro\u{010D}prost\u{011B}nemluv\u{00ED}\u{010D}esky",
            ),
            (
                "3B-ww4c5e180e575a65lsy2b",
                "3\u{5E74}B\u{7D44}\u{91D1}\u{516B}\u{5148}\u{751F}",
            ),
            (
                "-with-SUPER-MONKEYS-pc58ag80a8qai00g7n9n",
                "\u{5B89}\u{5BA4}\u{5948}\u{7F8E}\u{6075}-with-SUPER-MONKEYS",
            ),
            (
                "MajiKoi5-783gue6qz075azm5e",
                "Maji\u{3067}Koi\u{3059}\u{308B}5\u{79D2}\u{524D}",
            ),
            (
                "d9juau41awczczp",
                "\u{305D}\u{306E}\u{30B9}\u{30D4}\u{30FC}\u{30C9}\u{3067}",
            ),
        ];

        for (encoded, decoded) in SAMPLES {
            assert_eq!(&decode(encoded).unwrap(), decoded);
            assert!(encode(decoded).unwrap().eq_ignore_ascii_case(encoded));
        }
    }

    #[test]
    fn mixed_case_digits() {
        assert_eq!(
            decode("b1abfaaepdrnnbgefbaDotcwatmq2g4l").unwrap(),
            "\u{043F}\u{043E}\u{0447}\u{0435}\u{043C}\u{0443}\u{0436}\
             \u{0435}\u{043E}\u{043D}\u{0438}\u{043D}\u{0435}\u{0433}\
             \u{043E}\u{0432}\u{043E}\u{0440}\u{044F}\u{0442}\u{043F}\
             \u{043E}\u{0440}\u{0443}\u{0441}\u{0441}\u{043A}\u{0438}"
        );
    }

    #[test]
    fn malformed() {
        assert_eq!(
            decode("mnchen-3y!"),
            Err(PunycodeError::IllegalChar('!'))
        );
        assert_eq!(decode("mnchen-3"), Err(PunycodeError::ShortInput));
        assert_eq!(decode("m\u{00FC}-3ya"), Err(PunycodeError::NonBasic));
        assert_eq!(decode("99999999999"), Err(PunycodeError::Overflow));
        assert_eq!(from_alabel("mnchen-3ya"), Err(PunycodeError::NoPrefix));
        assert_eq!(from_alabel("xn--abc-"), Err(PunycodeError::AsciiOnly));
        assert_eq!(from_alabel("xn--"), Err(PunycodeError::AsciiOnly));
    }

    #[test]
    fn not_canonical() {
        // A delimiter without basic code points.
        assert_eq!(decode("-tda").unwrap(), "ü");
        assert_eq!(from_alabel("xn--tda").unwrap(), "ü");
        assert_eq!(from_alabel("xn---tda"), Err(PunycodeError::NotCanonical));
    }

    #[test]
    fn into_error() {
        let err = Error::from(PunycodeError::Overflow);
        assert_eq!(err.kind(), ErrorKind::PunycodeError);
        assert_eq!(err.message(), "Punycode overflow");
    }
}
