//! Unicode-aware width and padding helpers.

use unicode_width::UnicodeWidthStr;

/// Returns the display width of `text` in terminal cells.
///
/// Wide glyphs (CJK, fullwidth forms) count as 2 cells, so this can differ
/// from both the byte length and the character count.
///
/// ```rust
/// use colgrid::display_width;
///
/// assert_eq!(display_width("hello"), 5);
/// assert_eq!(display_width("日本語"), 6);
/// ```
pub fn display_width(text: &str) -> usize {
    text.width()
}

/// Pads `text` on the right with spaces to `width` display cells.
///
/// Text already at or beyond `width` is returned unchanged.
pub fn pad_right(text: &str, width: usize) -> String {
    let current = display_width(text);
    if current >= width {
        text.to_string()
    } else {
        format!("{}{}", text, " ".repeat(width - current))
    }
}
