use crate::{code_point::CodePoint, tier::ByteTier};

// Marker bits of a lead byte: as many set bits as the sequence has bytes,
// then a clear bit. Continuation bytes carry `10` and six payload bits.
const TAG_TWO: u8 = 0b1100_0000;
const TAG_THREE: u8 = 0b1110_0000;
const TAG_FOUR: u8 = 0b1111_0000;
const TAG_CONT: u8 = 0b1000_0000;
const MASK_CONT: u8 = 0b0011_1111;

/// UTF-8 bytes of a single code point, stored inline.
///
/// Produced by [`CodePoint::encode_utf8`]. Holds between one and four
/// bytes; [`as_bytes`](Self::as_bytes) exposes the occupied prefix in
/// transmission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EncodedBytes {
    buf: [u8; 4],
    tier: ByteTier,
}

impl EncodedBytes {
    /// The encoded bytes, lead byte first.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.tier.byte_count()]
    }

    /// Number of occupied bytes, between one and four.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.tier.byte_count()
    }

    /// Always `false`: every code point occupies at least one byte.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The tier the code point was packed under.
    #[must_use]
    pub fn tier(&self) -> ByteTier {
        self.tier
    }
}

impl AsRef<[u8]> for EncodedBytes {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

/// Packs `code_point` into its UTF-8 bytes.
///
/// Each arm writes the tier's marker into the lead byte along with the
/// value's high bits, then drains the remaining bits into continuation
/// bytes in six-bit groups, most significant group first.
// The tier bounds every shifted group to its byte, so the casts are
// lossless.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn encode_utf8(code_point: CodePoint) -> EncodedBytes {
    let cp = code_point.value();
    let tier = code_point.tier();
    let mut buf = [0u8; 4];
    match tier {
        ByteTier::One => {
            buf[0] = cp as u8;
        }
        ByteTier::Two => {
            buf[0] = TAG_TWO | (cp >> 6) as u8;
            buf[1] = TAG_CONT | (cp as u8 & MASK_CONT);
        }
        ByteTier::Three => {
            buf[0] = TAG_THREE | (cp >> 12) as u8;
            buf[1] = TAG_CONT | ((cp >> 6) as u8 & MASK_CONT);
            buf[2] = TAG_CONT | (cp as u8 & MASK_CONT);
        }
        ByteTier::Four => {
            buf[0] = TAG_FOUR | (cp >> 18) as u8;
            buf[1] = TAG_CONT | ((cp >> 12) as u8 & MASK_CONT);
            buf[2] = TAG_CONT | ((cp >> 6) as u8 & MASK_CONT);
            buf[3] = TAG_CONT | (cp as u8 & MASK_CONT);
        }
    }
    EncodedBytes { buf, tier }
}
