//! Embed arbitrary text in a C source file as a hex-escaped string
//! literal.
//!
//! Hex escapes sidestep source-encoding questions: the literal carries the
//! UTF-8 bytes of the text, one `\xNN` escape per byte, and reads the same
//! under any source charset. Swapping the prefix for `%` turns the same
//! token stream into percent-encoding of those bytes.
//!
//! Run with:
//!
//! ```bash
//! cargo run -p hexscape --example escape_literal
//! ```

use hexscape::{EncodeOptions, Encoder};

fn main() {
    let greeting = "안녕, world! 😀";

    // C string literal: every byte spelled as \xNN.
    let c_literal = format!(
        "const char *GREETING = \"{}\";",
        hexscape::encode(greeting)
    );
    println!("{c_literal}");

    // The same bytes, percent-encoded.
    let url = Encoder::with_prefix("%");
    println!("https://example.com/?q={}", url.encode(greeting));

    // Options struct form, for prefixes that come from configuration.
    let encoder = Encoder::new(EncodeOptions {
        prefix: "0x".into(),
    });
    println!("bytes: {}", encoder.encode("Hi"));

    insta::assert_snapshot!(
        c_literal,
        @r#"const char *GREETING = "\xEC\x95\x88\xEB\x85\x95\x2C\x20\x77\x6F\x72\x6C\x64\x21\x20\xF0\x9F\x98\x80";"#
    );
}
