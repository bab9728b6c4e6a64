//! Percent-decoding of query values.
//!
//! Only `%XX` escapes are decoded; `+` is left alone. Malformed escapes are
//! passed through literally, so decoding never fails.

use std::borrow::Cow;

/// Converts a single ASCII hex digit into its value.
fn hex_value(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

/// Decodes the byte named by the first two bytes of `chunk`, if they are hex digits.
fn decode_pair(chunk: &[u8]) -> Option<u8> {
    match chunk {
        [hi, lo, ..] => Some((hex_value(*hi)? << 4) | hex_value(*lo)?),
        _ => None,
    }
}

/// Decodes `%XX` escapes in `input`.
///
/// Input without any `%` is returned as-is without copying.
///
/// # Example
///
/// ```
/// # use pi_in_the_sky::http::percent::decode;
/// assert_eq!(&*decode(b"abc%20def"), b"abc def");
/// assert_eq!(&*decode(b"100%"), b"100%");
/// assert_eq!(&*decode(b"a+b"), b"a+b");
/// ```
pub fn decode(input: &[u8]) -> Cow<'_, [u8]> {
    if !input.contains(&b'%') {
        return Cow::Borrowed(input);
    }

    let mut chunks = input.split(|&b| b == b'%');
    let mut out = Vec::with_capacity(input.len());

    // First chunk precedes any '%'
    if let Some(head) = chunks.next() {
        out.extend_from_slice(head);
    }

    for chunk in chunks {
        match decode_pair(chunk) {
            Some(byte) => {
                out.push(byte);
                out.extend_from_slice(&chunk[2..]);
            }
            None => {
                out.push(b'%');
                out.extend_from_slice(chunk);
            }
        }
    }

    Cow::Owned(out)
}

/// Decodes `input` and converts the result to text, replacing invalid UTF-8.
pub fn decode_to_string(input: &str) -> String {
    String::from_utf8_lossy(&decode(input.as_bytes())).into_owned()
}
