//! JSON encoding for the Stingray wire format.
//!
//! The appliance does not decode the `\u0026`, `\u003c` and `\u003e` escape
//! sequences that conformant JSON encoders may emit for `&`, `<` and `>`.
//! Every outbound body therefore goes through [`unescape_html`] after
//! standard encoding. Inbound bodies are decoded with plain `serde_json` and
//! never rewritten.

use serde::de::DeserializeOwned;
use serde::Serialize;

const REPLACEMENTS: [(&[u8], u8); 3] = [
    (b"\\u0026", b'&'),
    (b"\\u003c", b'<'),
    (b"\\u003e", b'>'),
];

/// Encodes a value as JSON suitable for sending to the appliance.
///
/// # Errors
///
/// Returns the `serde_json` error if the value cannot be serialized.
pub fn to_vec<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>, serde_json::Error> {
    serde_json::to_vec(value).map(|bytes| unescape_html(&bytes))
}

/// Decodes a JSON body received from the appliance.
///
/// # Errors
///
/// Returns the `serde_json` error unchanged if the body does not match `T`.
pub fn from_slice<T: DeserializeOwned>(data: &[u8]) -> Result<T, serde_json::Error> {
    serde_json::from_slice(data)
}

/// Replaces the `\u0026`, `\u003c` and `\u003e` escapes with the raw
/// characters `&`, `<` and `>`.
///
/// Escaped backslashes (`\\`) are copied through untouched, so a string
/// holding the literal text `\u0026` survives. Only meant for already-encoded
/// outbound JSON.
#[must_use]
pub fn unescape_html(data: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(data.len());
    let mut i = 0;

    'outer: while i < data.len() {
        if data[i] == b'\\' {
            if data.get(i + 1) == Some(&b'\\') {
                out.extend_from_slice(b"\\\\");
                i += 2;
                continue;
            }
            for (escaped, raw) in REPLACEMENTS {
                if data[i..].starts_with(escaped) {
                    out.push(raw);
                    i += escaped.len();
                    continue 'outer;
                }
            }
        }
        out.push(data[i]);
        i += 1;
    }

    out
}
