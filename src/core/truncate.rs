/// Shortens `text` to at most `max_len` bytes.
///
/// Returns `text` untouched when it already fits. When byte `max_len` falls
/// inside a multi-byte character the cut moves back to the previous character
/// boundary, so the result may be shorter than `max_len`.
pub fn shorten_string(text: &str, max_len: usize) -> &str {
    if text.len() <= max_len {
        return text;
    }

    let mut end = max_len;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}

/// Raw byte prefix of at most `max_len` bytes, with no regard for encoding.
pub fn shorten_bytes(bytes: &[u8], max_len: usize) -> &[u8] {
    &bytes[..bytes.len().min(max_len)]
}
