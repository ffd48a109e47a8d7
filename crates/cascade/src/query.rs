use percent_encoding::percent_decode_str;

/// Decodes a request's path and query for echoing back to the client.
///
/// `+` becomes a space and `%XX` escapes are decoded. A malformed escape
/// makes the whole value undecodable.
pub fn unescape_query(raw: &str) -> Option<String> {
    if has_malformed_escape(raw) {
        return None;
    }
    let spaced = raw.replace('+', " ");
    Some(percent_decode_str(&spaced).decode_utf8_lossy().into_owned())
}

/// The final segment of a request path, percent-decoded.
///
/// Bytes that are not valid UTF-8 become U+FFFD instead of failing the
/// request. `+` is left alone, as it is literal in a path.
pub fn last_path_segment(path: &str) -> String {
    let raw = path.rsplit('/').next().unwrap_or_default();
    percent_decode_str(raw).decode_utf8_lossy().into_owned()
}

fn has_malformed_escape(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    bytes.iter().enumerate().any(|(index, byte)| {
        *byte == b'%'
            && !matches!(
                (bytes.get(index + 1), bytes.get(index + 2)),
                (Some(hi), Some(lo)) if hi.is_ascii_hexdigit() && lo.is_ascii_hexdigit()
            )
    })
}

#[cfg(test)]
#[path = "tests/query_tests.rs"]
mod tests;
