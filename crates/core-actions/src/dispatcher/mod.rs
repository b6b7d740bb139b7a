//! Dispatcher applying `Action` to mutable editor state.
//!
//! Decomposed into focused sub-modules:
//! * `motion` - cursor movement and click placement
//! * `edit`   - text mutation (insert/backspace/newline)
//! * `undo`   - undo / redo dispatch
//! * `file`   - save and quit
//! * `search` - search and bulk replace
//!
//! Every structural mutation records a history snapshot first. After any
//! action the viewport is scrolled so the cursor row stays visible.

use crate::{Action, Prompt};
use core_model::EditorModel;

mod edit;
mod file;
mod motion;
mod search;
mod undo;

/// Result of dispatching a single `Action`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchResult {
    pub dirty: bool,
    pub quit: bool,
}

impl DispatchResult {
    pub fn dirty() -> Self {
        Self {
            dirty: true,
            quit: false,
        }
    }
    pub fn clean() -> Self {
        Self {
            dirty: false,
            quit: false,
        }
    }
    pub fn quit() -> Self {
        Self {
            dirty: true,
            quit: true,
        }
    }
}

/// Apply an action to editor state. `text_height` is the number of document
/// rows on screen, used for click mapping and scrolling.
pub fn dispatch(
    action: Action,
    model: &mut EditorModel,
    text_height: usize,
    prompt: &mut dyn Prompt,
) -> DispatchResult {
    let (state, view) = model.split_state_and_view();
    tracing::trace!(target: "actions.dispatch", ?action, line = view.cursor.line, col = view.cursor.col, "dispatch");

    let mut result = match action {
        Action::Move(dir) => motion::handle_move(dir, state, view),
        Action::Click { row, col } => {
            motion::handle_click(row as usize, col as usize, text_height, state, view)
        }
        Action::InsertChar('\n' | '\r') | Action::Newline => edit::handle_newline(state, view),
        Action::InsertChar(ch) => edit::handle_insert(ch, state, view),
        Action::Backspace => edit::handle_backspace(state, view),
        Action::Undo => undo::handle_undo(state, view),
        Action::Redo => undo::handle_redo(state, view),
        Action::Save => file::handle_save(state, prompt),
        Action::Quit => file::handle_quit(state, prompt),
        Action::Search(term) => search::handle_search(term, state, view),
        Action::Replace {
            pattern,
            replacement,
        } => search::handle_replace(&pattern, &replacement, state, view),
    };

    debug_assert!(view.cursor.line < state.document.line_count());
    debug_assert!(view.cursor.col <= state.document.line_len(view.cursor.line));
    if view.scroll_to_contain(text_height) {
        result.dirty = true;
    }
    result
}
