//! Undo / Redo handling: delegates to the snapshot engine inside `EditorState`.

use super::DispatchResult;
use core_model::View;
use core_state::EditorState;

pub(crate) fn handle_undo(state: &mut EditorState, view: &mut View) -> DispatchResult {
    if state.undo(&mut view.cursor) {
        view.reclamp(&state.document);
        tracing::trace!(target: "actions.dispatch", op = "undo", undo_depth = state.undo_depth(), "undo");
        DispatchResult::dirty()
    } else {
        DispatchResult::clean()
    }
}

pub(crate) fn handle_redo(state: &mut EditorState, view: &mut View) -> DispatchResult {
    if state.redo(&mut view.cursor) {
        view.reclamp(&state.document);
        tracing::trace!(target: "actions.dispatch", op = "redo", redo_depth = state.redo_depth(), "redo");
        DispatchResult::dirty()
    } else {
        DispatchResult::clean()
    }
}
