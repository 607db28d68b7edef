use core::fmt;

use alloc::string::String;

use crate::{code_point::CodePoint, error::EncodeError, hex, options::EncodeOptions};

/// Escapes text as UTF-8 hex tokens.
///
/// The encoder owns its [`EncodeOptions`] and nothing else: calls are
/// independent, side-effect free, and safe to issue from any number of
/// threads.
///
/// # Examples
///
/// ```rust
/// use hexscape::Encoder;
///
/// let encoder = Encoder::default();
/// assert_eq!(encoder.encode("A가"), "\\x41\\xEA\\xB0\\x80");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Encoder {
    options: EncodeOptions,
}

impl Encoder {
    /// Creates an encoder with the given options.
    #[must_use]
    pub fn new(options: EncodeOptions) -> Self {
        Self { options }
    }

    /// Creates an encoder that emits `prefix` before each byte's digits.
    #[must_use]
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self::new(EncodeOptions {
            prefix: prefix.into(),
        })
    }

    /// The options the encoder was built with.
    #[must_use]
    pub fn options(&self) -> &EncodeOptions {
        &self.options
    }

    /// Escapes every scalar value of `text`, in order.
    ///
    /// Each code point contributes one token per UTF-8 byte; tokens are
    /// concatenated with no separator. Empty input yields an empty string.
    #[must_use]
    pub fn encode(&self, text: &str) -> String {
        // A scalar's UTF-8 length equals its token count, so the input's
        // byte length sizes the output exactly.
        let mut out = String::with_capacity(text.len() * self.token_width());
        for c in text.chars() {
            self.push_code_point(&mut out, c.into());
        }
        out
    }

    /// Escapes a single scalar value.
    #[must_use]
    pub fn encode_char(&self, c: char) -> String {
        let mut out = String::with_capacity(c.len_utf8() * self.token_width());
        self.push_code_point(&mut out, c.into());
        out
    }

    /// Escapes raw numeric code points.
    ///
    /// Unlike [`encode`](Self::encode), the input is untrusted: every value
    /// is range-checked before its bytes are packed.
    ///
    /// # Errors
    ///
    /// [`EncodeError::OutOfRangeCodePoint`] on the first value above
    /// `0x10FFFF`. The call fails as a whole; no partial output is
    /// returned.
    pub fn encode_scalars<I>(&self, scalars: I) -> Result<String, EncodeError>
    where
        I: IntoIterator<Item = u32>,
    {
        let scalars = scalars.into_iter();
        let (lower, _) = scalars.size_hint();
        let mut out = String::with_capacity(lower * self.token_width());
        for raw in scalars {
            let code_point = CodePoint::try_from(raw)?;
            self.push_code_point(&mut out, code_point);
        }
        Ok(out)
    }

    /// Escapes possibly invalid UTF-8, substituting U+FFFD for each
    /// undecodable sequence.
    ///
    /// Valid input produces exactly the tokens [`encode`](Self::encode)
    /// would.
    #[must_use]
    pub fn encode_lossy(&self, bytes: &[u8]) -> String {
        let mut out = String::with_capacity(bytes.len() * self.token_width());
        let mut rest = bytes;
        while !rest.is_empty() {
            let (decoded, len) = bstr::decode_utf8(rest);
            let c = decoded.unwrap_or(char::REPLACEMENT_CHARACTER);
            self.push_code_point(&mut out, c.into());
            rest = &rest[len..];
        }
        out
    }

    /// Returns an adapter that escapes `text` as it is formatted, with no
    /// intermediate allocation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hexscape::Encoder;
    ///
    /// let encoder = Encoder::default();
    /// assert_eq!(format!("<{}>", encoder.escaped("A")), "<\\x41>");
    /// ```
    #[must_use]
    pub fn escaped<'a>(&'a self, text: &'a str) -> Escaped<'a> {
        Escaped {
            text,
            prefix: &self.options.prefix,
        }
    }

    fn token_width(&self) -> usize {
        self.options.prefix.len() + 2
    }

    fn push_code_point(&self, out: &mut String, code_point: CodePoint) {
        write_code_point(out, &self.options.prefix, code_point)
            .expect("writing to a String cannot fail");
    }
}

/// Escapes `text` with the default `\x` prefix.
///
/// # Examples
///
/// ```rust
/// assert_eq!(hexscape::encode("Hi"), "\\x48\\x69");
/// assert_eq!(hexscape::encode(""), "");
/// ```
#[must_use]
pub fn encode(text: &str) -> String {
    Encoder::default().encode(text)
}

/// Escapes raw numeric code points with the default `\x` prefix.
///
/// # Errors
///
/// [`EncodeError::OutOfRangeCodePoint`] for any value above `0x10FFFF`.
pub fn encode_scalars<I>(scalars: I) -> Result<String, EncodeError>
where
    I: IntoIterator<Item = u32>,
{
    Encoder::default().encode_scalars(scalars)
}

/// Lazily escaped text, created by [`Encoder::escaped`].
#[derive(Debug, Clone, Copy)]
pub struct Escaped<'a> {
    text: &'a str,
    prefix: &'a str,
}

impl fmt::Display for Escaped<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.text.chars() {
            write_code_point(f, self.prefix, c.into())?;
        }
        Ok(())
    }
}

fn write_code_point<W: fmt::Write>(
    w: &mut W,
    prefix: &str,
    code_point: CodePoint,
) -> fmt::Result {
    for &byte in code_point.encode_utf8().as_bytes() {
        hex::write_token(w, prefix, byte)?;
    }
    Ok(())
}
