//! Text edit action handling (insert/backspace/newline).
//!
//! Each handler records exactly one snapshot before touching the document,
//! except the no-op backspace at the very start of the document which
//! records nothing.

use super::DispatchResult;
use core_model::View;
use core_state::EditorState;
use core_text::Position;

pub(crate) fn handle_insert(ch: char, state: &mut EditorState, view: &mut View) -> DispatchResult {
    let before = view.cursor;
    state.record(before);
    state.document.insert_char(before.line, before.col, ch);
    view.cursor.col += 1;
    tracing::trace!(target: "actions.dispatch", op = "insert_char", line = before.line, col = before.col, "edit");
    DispatchResult::dirty()
}

pub(crate) fn handle_newline(state: &mut EditorState, view: &mut View) -> DispatchResult {
    let before = view.cursor;
    state.record(before);
    state.document.split_line(before.line, before.col);
    view.cursor = Position::new(before.line + 1, 0);
    tracing::trace!(target: "actions.dispatch", op = "insert_newline", line = before.line, col = before.col, "edit");
    DispatchResult::dirty()
}

pub(crate) fn handle_backspace(state: &mut EditorState, view: &mut View) -> DispatchResult {
    let before = view.cursor;
    if before == Position::origin() {
        return DispatchResult::clean();
    }
    state.record(before);
    if before.col > 0 {
        state.document.delete_char_before(before.line, before.col);
        view.cursor.col -= 1;
    } else {
        let col = state.document.join_with_previous(before.line);
        view.cursor = Position::new(before.line - 1, col);
    }
    tracing::trace!(target: "actions.dispatch", op = "backspace", line = before.line, col = before.col, to_line = view.cursor.line, to_col = view.cursor.col, "edit");
    DispatchResult::dirty()
}
