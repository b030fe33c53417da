//! Tokenizer for brainrot source lines.

/// Split one raw source line into tokens.
///
/// Strips everything from the first `#` (full-line and trailing comments
/// alike) and splits the rest on runs of whitespace. Returns an empty Vec
/// for blank and comment-only lines; there are no error conditions.
pub(crate) fn tokenize_line(line: &str) -> Vec<String> {
    let line = match line.find('#') {
        Some(pos) => &line[..pos],
        None => line,
    };
    line.split_whitespace().map(str::to_string).collect()
}
