//! Escape Unicode text as its UTF-8 bytes, one uppercase hex token per
//! byte (`"A가"` becomes `\x41\xEA\xB0\x80`).
//!
//! The encoder is a pure text-to-text codec: classify each code point into
//! one of the four UTF-8 byte-length tiers, pack its bits into that many
//! bytes, and render every byte as a prefixed two-digit token. The prefix
//! defaults to `\x` and is configurable through [`EncodeOptions`].
//!
//! ```rust
//! use hexscape::{EncodeOptions, Encoder};
//!
//! assert_eq!(hexscape::encode("Hi"), "\\x48\\x69");
//!
//! let encoder = Encoder::new(EncodeOptions {
//!     prefix: "%".into(),
//! });
//! assert_eq!(encoder.encode("é"), "%C3%A9");
//! ```

#![no_std]
#![allow(missing_docs)]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod code_point;
mod compose;
mod hex;
mod tier;

mod encoder;
mod error;
mod options;


pub use code_point::CodePoint;
pub use compose::EncodedBytes;
pub use encoder::{Encoder, Escaped, encode, encode_scalars};
pub use error::EncodeError;
pub use options::{DEFAULT_PREFIX, EncodeOptions};
pub use tier::ByteTier;
