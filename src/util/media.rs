//! Placeholder media references for avatars and banners.
//!
//! References are opaque string paths following the pattern
//! `<base>?height=<H>&width=<W>&query=<urlencoded text>`; an empty query text
//! falls back to the bare default reference (no `query` parameter). The query
//! text is percent-encoded with the same unreserved set as JavaScript's
//! `encodeURIComponent`, so references stay byte-compatible with assets
//! produced by the platform's placeholder service.

#[cfg(test)]
#[path = "media_test.rs"]
mod media_test;

/// Base path of the placeholder image service.
pub const PLACEHOLDER_BASE: &str = "/placeholder.svg";

/// Avatar dimensions as (height, width).
pub const AVATAR_SIZE: (u32, u32) = (100, 100);
/// Banner dimensions as (height, width).
pub const BANNER_SIZE: (u32, u32) = (200, 1200);

/// Build a placeholder reference with the given dimensions and query text.
pub fn placeholder_ref(height: u32, width: u32, query: &str) -> String {
    let base = format!("{PLACEHOLDER_BASE}?height={height}&width={width}");
    if query.is_empty() {
        base
    } else {
        format!("{base}&query={}", encode_query(query))
    }
}

/// Avatar reference for the given query text.
pub fn avatar_ref(query: &str) -> String {
    placeholder_ref(AVATAR_SIZE.0, AVATAR_SIZE.1, query)
}

/// Banner reference for the given query text.
pub fn banner_ref(query: &str) -> String {
    placeholder_ref(BANNER_SIZE.0, BANNER_SIZE.1, query)
}

/// Extract the raw (still-encoded) query text from a reference, if present.
pub fn query_of(reference: &str) -> Option<&str> {
    reference.split_once("query=").map(|(_, query)| query)
}

// Unreserved set of encodeURIComponent.
fn is_unreserved(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'_' | b'.' | b'!' | b'~' | b'*' | b'\'' | b'(' | b')')
}

/// Percent-encode query text, UTF-8 byte by byte.
pub fn encode_query(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for &byte in text.as_bytes() {
        if is_unreserved(byte) {
            out.push(byte as char);
        } else {
            out.push_str(&format!("%{byte:02X}"));
        }
    }
    out
}

/// Decode percent-encoded query text.
///
/// Malformed escapes are passed through literally; invalid UTF-8 decodes
/// lossily rather than failing, since query text is display-only.
pub fn decode_query(text: &str) -> String {
    let bytes = text.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            if let (Some(hi), Some(lo)) = (
                bytes.get(i + 1).and_then(|b| (*b as char).to_digit(16)),
                bytes.get(i + 2).and_then(|b| (*b as char).to_digit(16)),
            ) {
                out.push((hi * 16 + lo) as u8);
                i += 3;
                continue;
            }
        }
        out.push(bytes[i]);
        i += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}
