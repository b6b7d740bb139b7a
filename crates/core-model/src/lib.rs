//! Editor model: the document-centric `EditorState` paired with the single
//! `View` (cursor + viewport) that presents it.
//!
//! A `View` owns presentation state only. It never mutates document content;
//! every method that needs line lengths borrows the `Document` explicitly.
//!
//! Core invariants (must hold after every public call):
//! * `cursor.line < document.line_count()`.
//! * `cursor.col <= document.line_len(cursor.line)` (character columns).
//! * After `scroll_to_contain(h)` with `h > 0`:
//!   `viewport_first_line <= cursor.line < viewport_first_line + h`.
//!
//! Horizontal movement stops at line boundaries. Moving left at column 0 or
//! right at end of line does nothing; it never wraps to the adjacent line.

use core_state::EditorState;
use core_text::{Document, Position};

mod layout;
pub use layout::Layout;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct View {
    pub cursor: Position,
    pub viewport_first_line: usize,
}

impl View {
    pub fn new(cursor: Position, viewport_first_line: usize) -> Self {
        Self {
            cursor,
            viewport_first_line,
        }
    }

    /// Move by a signed delta, clamping row to the document and column to the
    /// destination row's length.
    pub fn move_by(&mut self, doc: &Document, dy: isize, dx: isize) {
        let last = doc.line_count().saturating_sub(1);
        let line = self.cursor.line.saturating_add_signed(dy).min(last);
        let col = self.cursor.col.saturating_add_signed(dx).min(doc.line_len(line));
        self.cursor = Position::new(line, col);
    }

    /// Re-apply the bounds clamp after a document mutation.
    pub fn reclamp(&mut self, doc: &Document) {
        self.cursor.clamp_to(doc.line_count(), |i| doc.line_len(i));
    }

    /// Minimal scroll keeping the cursor row inside a window of `height` rows.
    /// Returns true if the first visible line changed.
    pub fn scroll_to_contain(&mut self, height: usize) -> bool {
        if height == 0 {
            return false;
        }
        let row = self.cursor.line;
        let first = self.viewport_first_line;
        let new_first = if row < first {
            row
        } else if row >= first + height {
            row - (height - 1)
        } else {
            return false;
        };
        self.viewport_first_line = new_first;
        true
    }

    /// Translate a click in screen cells to a document position.
    ///
    /// `None` for clicks on the gutter or at/below `viewport_height` (the
    /// status row). Rows past the document end land on the last line; columns
    /// past the line end land on the end of line.
    pub fn map_click(
        &self,
        doc: &Document,
        screen_row: usize,
        screen_col: usize,
        gutter_width: usize,
        viewport_height: usize,
    ) -> Option<Position> {
        if screen_col < gutter_width || screen_row >= viewport_height {
            return None;
        }
        let last = doc.line_count().saturating_sub(1);
        let line = (self.viewport_first_line + screen_row).min(last);
        let col = (screen_col - gutter_width).min(doc.line_len(line));
        Some(Position::new(line, col))
    }
}

/// Width of the line-number gutter: the digit count of the largest line
/// number plus one space of padding on each side.
pub fn gutter_width(line_count: usize) -> usize {
    let mut digits = 1;
    let mut n = line_count.max(1);
    while n >= 10 {
        n /= 10;
        digits += 1;
    }
    digits + 2
}

pub struct EditorModel {
    state: EditorState,
    view: View,
}

impl EditorModel {
    pub fn new(state: EditorState) -> Self {
        Self {
            state,
            view: View::default(),
        }
    }

    /// Test/helper constructor allowing an already prepared view to be injected.
    /// The cursor is reclamped against the document.
    pub fn with_view(mut view: View, state: EditorState) -> Self {
        view.reclamp(&state.document);
        Self { state, view }
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }
    pub fn state_mut(&mut self) -> &mut EditorState {
        &mut self.state
    }
    pub fn view(&self) -> &View {
        &self.view
    }
    pub fn view_mut(&mut self) -> &mut View {
        &mut self.view
    }

    /// Borrow state and view mutably at the same time.
    pub fn split_state_and_view(&mut self) -> (&mut EditorState, &mut View) {
        (&mut self.state, &mut self.view)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(lines: &[&str]) -> Document {
        Document::from_lines(lines.iter().copied())
    }

    fn numbered(n: usize) -> Document {
        Document::from_lines((0..n).map(|i| i.to_string()))
    }

    #[test]
    fn move_clamps_column_to_shorter_line() {
        let d = doc(&["abcdef", "ab"]);
        let mut v = View::new(Position::new(0, 5), 0);
        v.move_by(&d, 1, 0);
        assert_eq!(v.cursor, Position::new(1, 2));
    }

    #[test]
    fn horizontal_move_does_not_wrap() {
        let d = doc(&["ab", "cd"]);
        let mut v = View::new(Position::new(1, 0), 0);
        v.move_by(&d, 0, -1);
        assert_eq!(v.cursor, Position::new(1, 0));
        let mut v = View::new(Position::new(0, 2), 0);
        v.move_by(&d, 0, 1);
        assert_eq!(v.cursor, Position::new(0, 2));
    }

    #[test]
    fn vertical_move_clamps_to_document() {
        let d = doc(&["a", "b"]);
        let mut v = View::default();
        v.move_by(&d, -1, 0);
        assert_eq!(v.cursor, Position::origin());
        v.move_by(&d, 5, 0);
        assert_eq!(v.cursor.line, 1);
    }

    #[test]
    fn reclamp_after_lines_removed() {
        let mut d = doc(&["hello", "world"]);
        let mut v = View::new(Position::new(1, 5), 0);
        d.replace_lines(vec!["hi".to_string()]);
        v.reclamp(&d);
        assert_eq!(v.cursor, Position::new(0, 2));
    }

    #[test]
    fn scroll_down_and_up_minimally() {
        let mut v = View::default();
        let h = 5usize;
        assert!(!v.scroll_to_contain(h));
        v.cursor.line = 4;
        assert!(!v.scroll_to_contain(h));
        v.cursor.line = 5;
        assert!(v.scroll_to_contain(h));
        assert_eq!(v.viewport_first_line, 1);
        v.cursor.line = 9;
        assert!(v.scroll_to_contain(h));
        assert_eq!(v.viewport_first_line, 5);
        v.cursor.line = 3;
        assert!(v.scroll_to_contain(h));
        assert_eq!(v.viewport_first_line, 3);
    }

    #[test]
    fn scroll_zero_height_is_noop() {
        let mut v = View::new(Position::new(40, 0), 0);
        assert!(!v.scroll_to_contain(0));
        assert_eq!(v.viewport_first_line, 0);
    }

    #[test]
    fn click_maps_through_offset_and_gutter() {
        let d = numbered(30);
        let v = View::new(Position::origin(), 10);
        assert_eq!(v.map_click(&d, 2, 4, 4, 20), Some(Position::new(12, 0)));
        assert_eq!(v.map_click(&d, 2, 5, 4, 20), Some(Position::new(12, 1)));
    }

    #[test]
    fn click_in_gutter_or_status_is_ignored() {
        let d = numbered(3);
        let v = View::default();
        assert_eq!(v.map_click(&d, 0, 3, 4, 10), None);
        assert_eq!(v.map_click(&d, 10, 8, 4, 10), None);
    }

    #[test]
    fn click_past_end_clamps() {
        let d = doc(&["abc", "de"]);
        let v = View::default();
        assert_eq!(v.map_click(&d, 8, 50, 3, 10), Some(Position::new(1, 2)));
    }

    #[test]
    fn gutter_width_by_digits() {
        assert_eq!(gutter_width(0), 3);
        assert_eq!(gutter_width(9), 3);
        assert_eq!(gutter_width(10), 4);
        assert_eq!(gutter_width(999), 5);
        assert_eq!(gutter_width(1000), 6);
    }

    #[test]
    fn split_borrow_mutates_both() {
        let st = EditorState::new(doc(&["abc"]));
        let mut model = EditorModel::new(st);
        let (state, view) = model.split_state_and_view();
        state.document.insert_char(0, 0, 'x');
        view.cursor.col = 1;
        assert_eq!(model.state().document.line(0), Some("xabc"));
        assert_eq!(model.view().cursor, Position::new(0, 1));
    }

    #[test]
    fn with_view_reclamps() {
        let st = EditorState::new(doc(&["ab"]));
        let model = EditorModel::with_view(View::new(Position::new(4, 9), 0), st);
        assert_eq!(model.view().cursor, Position::new(0, 2));
    }
}
