//! Character encoding detection and decoding for byte input.
//!
//! Fragments rarely carry a charset declaration, so a byte order mark is
//! checked first, then `<meta>` declarations near the start, then UTF-8.

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;

use crate::patterns::{CHARSET_META, CONTENT_TYPE_CHARSET};

/// Bytes examined for a `<meta>` charset declaration.
const SNIFF_LEN: usize = 1024;

/// Detect the character encoding of HTML bytes.
///
/// Order:
/// 1. Byte order mark (UTF-8, UTF-16LE, UTF-16BE)
/// 2. `<meta charset="...">`
/// 3. `<meta http-equiv="Content-Type" content="...; charset=...">`
/// 4. UTF-8
///
/// Unknown labels are ignored.
#[must_use]
pub fn detect_encoding(html: &[u8]) -> &'static Encoding {
    if let Some((encoding, _)) = Encoding::for_bom(html) {
        return encoding;
    }

    let head = String::from_utf8_lossy(&html[..html.len().min(SNIFF_LEN)]);

    declared_encoding(&CHARSET_META, &head)
        .or_else(|| declared_encoding(&CONTENT_TYPE_CHARSET, &head))
        .unwrap_or(UTF_8)
}

/// The encoding named by the first label `declaration` captures in `head`.
fn declared_encoding(declaration: &Regex, head: &str) -> Option<&'static Encoding> {
    declaration
        .captures(head)
        .and_then(|c| c.get(1))
        .and_then(|label| Encoding::for_label(label.as_str().as_bytes()))
}

/// Decode HTML bytes to a UTF-8 string.
///
/// A leading byte order mark is stripped. Invalid sequences are replaced
/// with U+FFFD.
///
/// # Examples
///
/// ```
/// use replace_in_html::encoding::decode;
///
/// assert_eq!(decode(b"\xEF\xBB\xBFmeow"), "meow");
/// assert_eq!(decode(b"<meta charset=latin1>caf\xE9"), "<meta charset=latin1>caf\u{e9}");
/// ```
#[must_use]
pub fn decode(html: &[u8]) -> String {
    let encoding = detect_encoding(html);

    // `decode` sniffs and strips the BOM itself.
    let (decoded, _encoding_used, _had_errors) = encoding.decode(html);
    decoded.into_owned()
}
