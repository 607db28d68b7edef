use alloc::string::String;

use thiserror::Error;

/// Reasons a numeric code point can fail to encode.
///
/// Text entry points ([`Encoder::encode`](crate::Encoder::encode)) cannot
/// fail; these errors arise only where raw numbers or numeric text cross
/// into the crate. A failing call returns nothing but the error.
#[derive(Debug, Error, PartialEq)]
pub enum EncodeError {
    /// The value lies outside the Unicode code space `0x0..=0x10FFFF`.
    #[error("code point {0} is outside the Unicode code space 0x0..=0x10FFFF")]
    OutOfRangeCodePoint(i64),
    /// The text does not denote a number this crate can interpret.
    #[error("invalid numeric code point {0:?}")]
    InvalidNumericInput(String),
}
