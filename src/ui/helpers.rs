//! Shared rendering utilities.
//!
//! Components draw into a [`Frame`], a plain string of text and ANSI escape
//! sequences that the renderer prints in one go. Widths are measured in
//! characters so multi-byte titles pad correctly.

use std::fmt::Write;

/// Accumulated output of one render pass.
pub type Frame = String;

/// Moves the cursor to a 1-indexed `row`/`col` (`\u{1b}[{row};{col}H`).
///
/// # Example
///
/// ```rust
/// use jiffy::ui::helpers::{position_cursor, Frame};
///
/// let mut frame = Frame::new();
/// position_cursor(&mut frame, 5, 1);
/// assert_eq!(frame, "\u{1b}[5;1H");
/// ```
pub fn position_cursor(out: &mut Frame, row: usize, col: usize) {
    let _ = write!(out, "\u{1b}[{row};{col}H");
}

/// Display width of `text` in characters.
#[must_use]
pub fn text_width(text: &str) -> usize {
    text.chars().count()
}

/// Writes `text` cut to at most `width` characters, then pads with spaces
/// up to `width`.
pub fn write_padded(out: &mut Frame, text: &str, width: usize) {
    let shown: String = text.chars().take(width).collect();
    let shown_width = text_width(&shown);
    out.push_str(&shown);
    out.push_str(&" ".repeat(width.saturating_sub(shown_width)));
}

/// Writes `text` centered in `width` columns, filling both sides.
pub fn write_centered(out: &mut Frame, text: &str, width: usize) {
    let text_len = text_width(text).min(width);
    let padding = width.saturating_sub(text_len) / 2;
    out.push_str(&" ".repeat(padding));
    write_padded(out, text, width.saturating_sub(padding));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_and_truncates_by_characters() {
        let mut out = Frame::new();
        write_padded(&mut out, "héllo", 7);
        assert_eq!(out, "héllo  ");

        let mut out = Frame::new();
        write_padded(&mut out, "héllo world", 5);
        assert_eq!(out, "héllo");
    }

    #[test]
    fn centers_with_left_bias_on_odd_space() {
        let mut out = Frame::new();
        write_centered(&mut out, "ab", 7);
        assert_eq!(out, "  ab   ");
    }
}
