//! Display width helpers.
//!
//! Cursor columns are character indices; terminal placement needs cell
//! columns. All width decisions in the workspace flow through this module so
//! the renderer and the caret computation agree on where a character lands.
//!
//! Invariants:
//! - Control characters (tab included) count as one cell; the painter prints
//!   them as a single replacement glyph.
//! - Zero-width characters still count as zero so combining marks stack.

use unicode_width::UnicodeWidthChar;

/// Width in terminal cells of a single character.
pub fn char_width(c: char) -> usize {
    if c.is_control() {
        return 1;
    }
    c.width().unwrap_or(1)
}

/// Width in terminal cells of a whole string.
pub fn display_width(s: &str) -> usize {
    s.chars().map(char_width).sum()
}

/// Cell column reached after the first `col` characters of `line`.
pub fn display_col(line: &str, col: usize) -> usize {
    line.chars().take(col).map(char_width).sum()
}

/// Longest prefix of `line` fitting into `max_cells`, returned as a slice.
pub fn fit_to_width(line: &str, max_cells: usize) -> &str {
    let mut used = 0usize;
    for (idx, c) in line.char_indices() {
        let w = char_width(c);
        if used + w > max_cells {
            return &line[..idx];
        }
        used += w;
    }
    line
}
