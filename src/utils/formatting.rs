//! Formatting utilities used for CLI output.

/// Left-aligned, padded to at least `width`. Longer values are kept whole.
pub fn pad_right(s: &str, width: usize) -> String {
    format!("{:<width$}", s, width = width)
}

pub fn separator(ch: char, len: usize) -> String {
    std::iter::repeat_n(ch, len).collect()
}

