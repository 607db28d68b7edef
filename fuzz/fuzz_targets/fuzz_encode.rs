#![no_main]

use arbitrary::Arbitrary;
use hexscape::Encoder;
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct EscapeInput<'a> {
    prefix_selector: u8,
    payload: &'a [u8],
}

/// Reverses a token stream back into bytes, panicking on any shape
/// violation.
fn tokens_to_bytes(tokens: &str, prefix: &str) -> Vec<u8> {
    let mut bytes = Vec::new();
    let mut rest = tokens;
    while !rest.is_empty() {
        rest = rest.strip_prefix(prefix).expect("token without prefix");
        let digits = rest.get(..2).expect("token shorter than two digits");
        bytes.push(u8::from_str_radix(digits, 16).expect("token digits not hex"));
        rest = &rest[2..];
    }
    bytes
}

fn escape(input: &EscapeInput<'_>) {
    let prefix = match input.prefix_selector % 4 {
        0 => "\\x",
        1 => "%",
        2 => "",
        _ => "0x",
    };
    let encoder = Encoder::with_prefix(prefix);

    // The lossy entry accepts any bytes and must emit tokens that reverse
    // to well-formed UTF-8.
    let tokens = encoder.encode_lossy(input.payload);
    let bytes = tokens_to_bytes(&tokens, prefix);
    let text = String::from_utf8(bytes).expect("lossy tokens must reverse to UTF-8");

    // The strict entry on that text must reverse to exactly its bytes.
    assert_eq!(
        tokens_to_bytes(&encoder.encode(&text), prefix),
        text.as_bytes()
    );

    // Well-formed payloads take the strict and lossy paths to the same
    // tokens.
    if let Ok(s) = std::str::from_utf8(input.payload) {
        assert_eq!(encoder.encode_lossy(input.payload), encoder.encode(s));
    }

    // The numeric entry must accept or reject, never panic.
    let scalars = input
        .payload
        .chunks_exact(4)
        .map(|chunk| u32::from_le_bytes(chunk.try_into().unwrap()));
    let _ = encoder.encode_scalars(scalars);
}

fuzz_target!(|input: EscapeInput<'_>| escape(&input));
