/// Decodes captured program output, falling back to lossy UTF-8.
pub(crate) fn decode_utf8(bytes: Vec<u8>, origin: &str) -> String {
    match String::from_utf8(bytes) {
        Ok(s) => s,
        Err(e) => {
            tracing::warn!(
                origin = origin,
                valid_up_to = e.utf8_error().valid_up_to(),
                "output is not valid UTF-8, invalid bytes replaced"
            );
            String::from_utf8_lossy(e.as_bytes()).into_owned()
        }
    }
}

/// Last `max_chars` characters of stderr, trimmed, on one line.
pub(crate) fn stderr_tail(bytes: &[u8], max_chars: usize) -> String {
    let text = String::from_utf8_lossy(bytes);
    let text = text.trim();
    let count = text.chars().count();
    let tail: String = if count > max_chars {
        text.chars().skip(count - max_chars).collect()
    } else {
        text.to_string()
    };
    tail.replace(['\r', '\n'], " ")
}
