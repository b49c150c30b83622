//! Whitespace helpers shared by the block processors.

/// Drop whole blank lines from the start of `s`.
///
/// Indentation on the first non-blank line is kept.
pub fn trim_leading_blank_lines(s: &str) -> &str {
    let content_start = s.len() - s.trim_start().len();
    match s[..content_start].rfind('\n') {
        Some(i) => &s[i + 1..],
        None => s,
    }
}

/// Drop blank lines at both ends and trailing whitespace on the last line.
pub fn trim_blank_lines(s: &str) -> &str {
    trim_leading_blank_lines(s).trim_end()
}
