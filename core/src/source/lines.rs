#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawLine {
    /// 1-based position in the captured output.
    pub number: usize,
    pub text: String,
}

impl RawLine {
    pub fn new(number: usize, text: impl Into<String>) -> Self {
        Self {
            number,
            text: text.into(),
        }
    }
}

/// Splits captured output on `\n`. A trailing `\r` is stripped from each
/// line and the empty segment after a final newline is dropped.
pub fn split_lines(output: &str) -> Vec<RawLine> {
    let body = output.strip_suffix('\n').unwrap_or(output);
    if body.is_empty() {
        return Vec::new();
    }

    body.split('\n')
        .enumerate()
        .map(|(idx, line)| RawLine::new(idx + 1, line.strip_suffix('\r').unwrap_or(line)))
        .collect()
}
