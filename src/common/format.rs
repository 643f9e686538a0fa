//! Display formatting for ticket fields.

use anyhow::Result;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value;

/// Line width used for the hex ciphertext.
pub const CIPHERTEXT_WIDTH: usize = 32;
/// Line width used for decrypted ticket text (one cipher block per line).
pub const PLAINTEXT_WIDTH: usize = 16;

/// Split `text` into lines of `width` characters, each followed by `\n`.
///
/// The last line may be shorter. Empty input yields an empty string.
///
/// # Panics
///
/// Panics if `width` is zero.
pub fn split_text(text: &str, width: usize) -> String {
    assert!(width > 0, "split width must be positive");

    let chars: Vec<char> = text.chars().collect();
    let mut split = String::with_capacity(text.len() + chars.len() / width + 1);
    for chunk in chars.chunks(width) {
        split.extend(chunk);
        split.push('\n');
    }
    split
}

/// Serialize `value` as JSON indented by four spaces.
pub fn pretty_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    Ok(String::from_utf8(buf)?)
}

/// Parse `text` as JSON and re-serialize it with [`pretty_json`].
pub fn reformat_json(text: &str) -> Result<String> {
    let value: Value = serde_json::from_str(text)?;
    pretty_json(&value)
}
