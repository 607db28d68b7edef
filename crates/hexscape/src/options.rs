use alloc::string::String;

/// Prefix emitted before each escaped byte unless overridden: `\x`.
pub const DEFAULT_PREFIX: &str = "\\x";

/// Configuration options for the escape encoder.
///
/// # Examples
///
/// ```rust
/// use hexscape::{EncodeOptions, Encoder};
///
/// let encoder = Encoder::new(EncodeOptions {
///     prefix: "%".into(),
/// });
/// assert_eq!(encoder.encode("A"), "%41");
/// ```
///
/// # Default
///
/// The prefix defaults to [`DEFAULT_PREFIX`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    any(test, feature = "serde"),
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct EncodeOptions {
    /// Text emitted verbatim before the two hex digits of every byte.
    ///
    /// May be any string, including the empty string, in which case the
    /// digit pairs run back to back. The prefix itself is never escaped.
    ///
    /// # Default
    ///
    /// `\x`
    pub prefix: String,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            prefix: String::from(DEFAULT_PREFIX),
        }
    }
}
