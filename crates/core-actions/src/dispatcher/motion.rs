//! Cursor motion and pointer placement.
//!
//! Neither handler mutates the document or records history.

use super::DispatchResult;
use crate::Direction;
use core_model::{View, gutter_width};
use core_state::EditorState;

pub(crate) fn handle_move(dir: Direction, state: &mut EditorState, view: &mut View) -> DispatchResult {
    let before = view.cursor;
    let (dy, dx) = dir.delta();
    view.move_by(&state.document, dy, dx);
    if view.cursor == before {
        return DispatchResult::clean();
    }
    tracing::trace!(target: "actions.dispatch", op = "move", ?dir, to_line = view.cursor.line, to_col = view.cursor.col, "motion");
    DispatchResult::dirty()
}

pub(crate) fn handle_click(
    row: usize,
    col: usize,
    text_height: usize,
    state: &mut EditorState,
    view: &mut View,
) -> DispatchResult {
    let gutter = gutter_width(state.document.line_count());
    match view.map_click(&state.document, row, col, gutter, text_height) {
        Some(pos) => {
            tracing::trace!(target: "actions.dispatch", op = "click", row, col, to_line = pos.line, to_col = pos.col, "motion");
            view.cursor = pos;
            DispatchResult::dirty()
        }
        None => DispatchResult::clean(),
    }
}
