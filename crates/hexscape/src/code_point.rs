use core::{fmt, str::FromStr};

use alloc::string::ToString;

use crate::{
    compose::{self, EncodedBytes},
    error::EncodeError,
    tier::ByteTier,
};

const MAX_CODE_POINT: u32 = 0x10_FFFF;

/// A numeric code point, checked to lie in the Unicode code space
/// `0x0..=0x10FFFF`.
///
/// Every numeric entry point funnels through these constructors, so the
/// composer never sees a value it cannot pack. Unlike [`char`], surrogate
/// code points are representable; they pack by the usual three byte rules
/// (see [`is_surrogate`](Self::is_surrogate)).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    any(test, feature = "serde"),
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "i64", into = "u32")
)]
pub struct CodePoint(u32);

impl CodePoint {
    /// The highest code point, `U+10FFFF`.
    pub const MAX: Self = Self(MAX_CODE_POINT);

    /// Checks `value` against the Unicode code space.
    ///
    /// # Errors
    ///
    /// [`EncodeError::OutOfRangeCodePoint`] for negative values and values
    /// above `0x10FFFF`.
    pub fn new(value: i64) -> Result<Self, EncodeError> {
        match u32::try_from(value) {
            Ok(v) if v <= MAX_CODE_POINT => Ok(Self(v)),
            _ => Err(EncodeError::OutOfRangeCodePoint(value)),
        }
    }

    /// The numeric value.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }

    /// The byte-length tier the value encodes under.
    #[must_use]
    pub fn tier(self) -> ByteTier {
        match ByteTier::classify(self.0) {
            Ok(tier) => tier,
            // Construction range-checks, so the classifier cannot reject.
            Err(_) => unreachable!("code point out of range"),
        }
    }

    /// Packs the value into its UTF-8 bytes.
    #[must_use]
    pub fn encode_utf8(self) -> EncodedBytes {
        compose::encode_utf8(self)
    }

    /// Whether the value is a UTF-16 surrogate, `0xD800..=0xDFFF`.
    ///
    /// Surrogates are not scalar values and never arise from `&str` input,
    /// but the numeric constructors accept them.
    #[must_use]
    pub const fn is_surrogate(self) -> bool {
        matches!(self.0, 0xD800..=0xDFFF)
    }
}

impl From<char> for CodePoint {
    fn from(c: char) -> Self {
        Self(c as u32)
    }
}

impl From<CodePoint> for u32 {
    fn from(code_point: CodePoint) -> Self {
        code_point.0
    }
}

impl TryFrom<u32> for CodePoint {
    type Error = EncodeError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(i64::from(value))
    }
}

impl TryFrom<i64> for CodePoint {
    type Error = EncodeError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Parses decimal (`"65"`), `0x` hex (`"0x41"`), and Unicode notation
/// (`"U+0041"`), with surrounding whitespace ignored.
impl FromStr for CodePoint {
    type Err = EncodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let hex = trimmed
            .strip_prefix("U+")
            .or_else(|| trimmed.strip_prefix("u+"))
            .or_else(|| trimmed.strip_prefix("0x"))
            .or_else(|| trimmed.strip_prefix("0X"));
        let value = match hex {
            Some(digits) => i64::from_str_radix(digits, 16),
            None => trimmed.parse(),
        }
        .map_err(|_| EncodeError::InvalidNumericInput(s.to_string()))?;
        Self::new(value)
    }
}

/// Renders standard `U+XXXX` notation.
impl fmt::Display for CodePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "U+{:04X}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn accepts_the_full_code_space() {
        assert_eq!(CodePoint::new(0), Ok(CodePoint::from('\0')));
        assert_eq!(CodePoint::new(0x41), Ok(CodePoint::from('A')));
        assert_eq!(CodePoint::new(0x10_FFFF), Ok(CodePoint::MAX));
    }

    #[test]
    fn rejects_negative_and_oversized_values() {
        assert_eq!(
            CodePoint::new(-1),
            Err(EncodeError::OutOfRangeCodePoint(-1))
        );
        assert_eq!(
            CodePoint::new(0x11_0000),
            Err(EncodeError::OutOfRangeCodePoint(0x11_0000))
        );
        assert_eq!(
            CodePoint::new(i64::MIN),
            Err(EncodeError::OutOfRangeCodePoint(i64::MIN))
        );
    }

    #[test]
    fn parses_decimal_hex_and_unicode_notation() {
        assert_eq!("65".parse(), Ok(CodePoint::from('A')));
        assert_eq!("0x41".parse(), Ok(CodePoint::from('A')));
        assert_eq!("0X41".parse(), Ok(CodePoint::from('A')));
        assert_eq!("U+0041".parse(), Ok(CodePoint::from('A')));
        assert_eq!("u+41".parse(), Ok(CodePoint::from('A')));
        assert_eq!(" 65 ".parse(), Ok(CodePoint::from('A')));
    }

    #[test]
    fn parsed_values_still_range_check() {
        assert_eq!(
            "-1".parse::<CodePoint>(),
            Err(EncodeError::OutOfRangeCodePoint(-1))
        );
        assert_eq!(
            "0x110000".parse::<CodePoint>(),
            Err(EncodeError::OutOfRangeCodePoint(0x11_0000))
        );
    }

    #[test]
    fn reports_unparseable_text() {
        for bad in ["", "banana", "0x", "U+", "4 1", "0b101", "99999999999999999999"] {
            match bad.parse::<CodePoint>() {
                Err(EncodeError::InvalidNumericInput(text)) => assert_eq!(text, bad),
                other => panic!("expected InvalidNumericInput for {bad:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn displays_unicode_notation() {
        assert_eq!(CodePoint::from('A').to_string(), "U+0041");
        assert_eq!(CodePoint::from('가').to_string(), "U+AC00");
        assert_eq!(CodePoint::MAX.to_string(), "U+10FFFF");
    }

    #[test]
    fn flags_surrogates() {
        assert!(CodePoint::new(0xD800).unwrap().is_surrogate());
        assert!(CodePoint::new(0xDFFF).unwrap().is_surrogate());
        assert!(!CodePoint::from('A').is_surrogate());
        assert!(!CodePoint::new(0xE000).unwrap().is_surrogate());
    }

    #[test]
    fn serde_round_trips_and_revalidates() {
        let json = serde_json::to_string(&CodePoint::from('가')).unwrap();
        assert_eq!(json, "44032");
        assert_eq!(
            serde_json::from_str::<CodePoint>(&json).unwrap(),
            CodePoint::from('가')
        );
        assert!(serde_json::from_str::<CodePoint>("1114112").is_err());
        assert!(serde_json::from_str::<CodePoint>("-1").is_err());
    }
}
