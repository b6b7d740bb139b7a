//! Save and quit.
//!
//! Both may consult the `Prompt`: save asks for a filename when the buffer
//! has none, quit asks for confirmation when there are unsaved changes. An
//! empty or cancelled answer leaves everything as it was.

use std::path::PathBuf;

use super::DispatchResult;
use crate::Prompt;
use crate::io_ops::write_file;
use core_state::EditorState;

pub(crate) fn handle_save(state: &mut EditorState, prompt: &mut dyn Prompt) -> DispatchResult {
    let path = match state.file_name.clone() {
        Some(p) => p,
        None => {
            let answer = prompt.ask("Save as:").unwrap_or_default();
            let answer = answer.trim();
            if answer.is_empty() {
                tracing::debug!(target: "actions.dispatch", op = "save", "save_as_cancelled");
                return DispatchResult::dirty();
            }
            PathBuf::from(answer)
        }
    };
    state.file_name = Some(path.clone());
    match write_file(&state.document, &path) {
        Ok(bytes) => {
            state.document.set_modified(false);
            state.set_ephemeral(format!("Wrote {bytes} bytes to {}", path.display()));
        }
        Err(e) => {
            state.set_ephemeral(format!("Save error: {e}"));
        }
    }
    DispatchResult::dirty()
}

pub(crate) fn handle_quit(state: &mut EditorState, prompt: &mut dyn Prompt) -> DispatchResult {
    if state.document.is_modified() && !prompt.confirm("Unsaved changes, quit anyway?") {
        tracing::debug!(target: "actions.dispatch", op = "quit", "quit_declined");
        // The prompt overwrote part of the screen.
        return DispatchResult::dirty();
    }
    DispatchResult::quit()
}
