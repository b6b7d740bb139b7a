//! Search and bulk replace.

use super::DispatchResult;
use core_model::View;
use core_search::{Replacer, find_forward};
use core_state::EditorState;

pub(crate) fn handle_search(term: String, state: &mut EditorState, view: &mut View) -> DispatchResult {
    if term.is_empty() {
        state.search.clear();
        return DispatchResult::dirty();
    }
    let found = find_forward(state.document.lines(), &term, view.cursor.line);
    state.search.set(term);
    match found {
        Some(pos) => view.cursor = pos,
        None => state.set_ephemeral("Not found"),
    }
    DispatchResult::dirty()
}

pub(crate) fn handle_replace(
    pattern: &str,
    replacement: &str,
    state: &mut EditorState,
    view: &mut View,
) -> DispatchResult {
    if pattern.is_empty() {
        return DispatchResult::clean();
    }
    let replacer = match Replacer::new(pattern, replacement) {
        Ok(r) => r,
        Err(e) => {
            tracing::debug!(target: "actions.dispatch", op = "replace", error = %e, "pattern_rejected");
            state.set_ephemeral(format!("Pattern error: {e}"));
            return DispatchResult::dirty();
        }
    };
    state.record(view.cursor);
    let count = replacer.apply(&mut state.document);
    view.reclamp(&state.document);
    state.set_ephemeral(format!("Replaced {count} occurrence(s)"));
    DispatchResult::dirty()
}
