//! Screen layout: a text region on top and a one-row status line below it.
//!
//! Coordinates are terminal cells (`u16`) matching crossterm's API. A terminal
//! one row tall has a zero-height text region; callers treat that as
//! "nothing to scroll".

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    width: u16,
    text_height: u16,
}

impl Layout {
    /// Split a full terminal of `width` x `height` cells.
    pub fn for_terminal(width: u16, height: u16) -> Self {
        Self {
            width,
            text_height: height.saturating_sub(1),
        }
    }

    /// Rows available for document lines.
    pub fn text_height(&self) -> usize {
        self.text_height as usize
    }

    pub fn width(&self) -> usize {
        self.width as usize
    }

    /// The status line sits directly below the text region.
    pub fn status_row(&self) -> u16 {
        self.text_height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_row_is_last_line() {
        let l = Layout::for_terminal(80, 24);
        assert_eq!(l.text_height(), 23);
        assert_eq!(l.status_row(), 23);
        assert_eq!(l.width(), 80);
    }

    #[test]
    fn degenerate_terminal() {
        let l = Layout::for_terminal(10, 0);
        assert_eq!(l.text_height(), 0);
        assert_eq!(l.status_row(), 0);
    }
}
