use crate::error::EncodeError;

/// Number of bytes a code point occupies when encoded as UTF-8.
///
/// The code space splits into four contiguous ranges, one per encoded
/// length. [`classify`](Self::classify) picks the tier for a raw value; the
/// composer then packs the value's bits into that many bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    any(test, feature = "serde"),
    derive(serde::Serialize, serde::Deserialize)
)]
pub enum ByteTier {
    /// `0x0000..=0x007F`: ASCII, a single identity byte.
    One = 1,
    /// `0x0080..=0x07FF`: two bytes, five payload bits in the lead byte.
    Two = 2,
    /// `0x0800..=0xFFFF`: three bytes, the rest of the basic plane.
    Three = 3,
    /// `0x10000..=0x10FFFF`: four bytes, the supplementary planes.
    Four = 4,
}

impl ByteTier {
    /// Returns the tier whose range contains `code_point`.
    ///
    /// The ranges are contiguous from zero, so the only rejection is a
    /// value above `0x10FFFF`. Negative inputs never reach here; they are
    /// caught by [`CodePoint::new`](crate::CodePoint::new).
    ///
    /// # Errors
    ///
    /// [`EncodeError::OutOfRangeCodePoint`] if `code_point` exceeds
    /// `0x10FFFF`.
    pub fn classify(code_point: u32) -> Result<Self, EncodeError> {
        match code_point {
            0x0000..=0x007F => Ok(Self::One),
            0x0080..=0x07FF => Ok(Self::Two),
            0x0800..=0xFFFF => Ok(Self::Three),
            0x1_0000..=0x10_FFFF => Ok(Self::Four),
            _ => Err(EncodeError::OutOfRangeCodePoint(i64::from(code_point))),
        }
    }

    /// Returns the tier of a scalar value.
    #[must_use]
    pub fn for_char(c: char) -> Self {
        match Self::classify(c as u32) {
            Ok(tier) => tier,
            // A char is a scalar value, at most 0x10FFFF.
            Err(_) => unreachable!("char above the Unicode code space"),
        }
    }

    /// Number of bytes an encoding under this tier occupies, `1..=4`.
    #[must_use]
    pub const fn byte_count(self) -> usize {
        self as usize
    }
}
