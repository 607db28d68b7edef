use core::fmt::{self, Write};

/// Writes one escape token: `prefix` followed by exactly two uppercase hex
/// digits of `byte`.
pub(crate) fn write_token<W: Write>(w: &mut W, prefix: &str, byte: u8) -> fmt::Result {
    w.write_str(prefix)?;
    write!(w, "{byte:02X}")
}

#[cfg(test)]
mod tests {
    use alloc::string::String;

    use super::*;

    fn token(prefix: &str, byte: u8) -> String {
        let mut out = String::new();
        write_token(&mut out, prefix, byte).unwrap();
        out
    }

    #[test]
    fn pads_to_two_uppercase_digits() {
        assert_eq!(token("\\x", 0x00), "\\x00");
        assert_eq!(token("\\x", 0x0F), "\\x0F");
        assert_eq!(token("\\x", 0xA0), "\\xA0");
        assert_eq!(token("\\x", 0xFF), "\\xFF");
    }

    #[test]
    fn prefix_is_emitted_verbatim() {
        assert_eq!(token("", 0x41), "41");
        assert_eq!(token("%", 0x41), "%41");
        assert_eq!(token("0x", 0x41), "0x41");
    }
}
