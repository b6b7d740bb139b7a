//! Edit session: applies one `Action` at a time to the editor model.
//!
//! The dispatcher mutates `EditorState` and the `View` and reports whether a
//! repaint or exit is needed. Anything that needs an answer from the user
//! mid-action (quit confirmation, save-as filename) goes through the `Prompt`
//! collaborator so the session never touches the terminal.

pub mod dispatcher;
pub mod io_ops;
pub mod key_translator;
mod session;

pub use core_events::{Action, Direction};
pub use dispatcher::{DispatchResult, dispatch};
pub use key_translator::translate_command;
pub use session::EditSession;

/// Question/answer collaborator used while servicing an action.
pub trait Prompt {
    /// Ask for a line of text. `None` means the user cancelled.
    fn ask(&mut self, question: &str) -> Option<String>;

    /// Yes/no question; anything but an answer starting with `y` is a no.
    fn confirm(&mut self, question: &str) -> bool {
        self.ask(&format!("{question} (y/N)"))
            .map(|a| a.trim().to_ascii_lowercase().starts_with('y'))
            .unwrap_or(false)
    }
}
