//! Line tokenization helpers shared by the diff pipeline.

/// Number of lines in `text`, where a trailing separator starts a final empty
/// line. The empty document has zero lines.
pub fn line_count(text: &str) -> usize {
    if text.is_empty() {
        0
    } else {
        text.split('\n').count()
    }
}

/// Split `text` into lines that keep their trailing separator; the final line
/// may lack one. Alignment tokenizes this way so that a missing newline at
/// end of file is part of the last line, never a token of its own.
pub fn split_keeping_separator(text: &str) -> Vec<&str> {
    text.split_inclusive('\n').collect()
}

/// Split a change-group payload into its lines, dropping the single empty
/// element produced by a final separator.
pub fn payload_lines(payload: &str) -> Vec<&str> {
    let mut lines: Vec<&str> = payload.split('\n').collect();
    if lines.last() == Some(&"") {
        lines.pop();
    }
    lines
}
