//! Command to `Action` translation.
//!
//! Most commands map one-to-one. Search and replace need text first, so they
//! ask the `Prompt`:
//! * Search: a cancelled prompt yields nothing; an empty answer still yields
//!   `Action::Search("")`, which clears the highlight.
//! * Replace: a cancelled or empty pattern yields nothing. An empty
//!   replacement is valid and deletes every match.

use crate::{Action, Prompt};
use core_keymap::Command;

pub fn translate_command(cmd: Command, prompt: &mut dyn Prompt) -> Option<Action> {
    let action = match cmd {
        Command::Save => Action::Save,
        Command::Quit => Action::Quit,
        Command::Undo => Action::Undo,
        Command::Redo => Action::Redo,
        Command::Insert(c) => Action::InsertChar(c),
        Command::Move(d) => Action::Move(d),
        Command::Backspace => Action::Backspace,
        Command::Newline => Action::Newline,
        Command::Search => Action::Search(prompt.ask("Search:")?),
        Command::Replace => {
            let pattern = prompt.ask("Replace (regex):")?;
            if pattern.is_empty() {
                return None;
            }
            let replacement = prompt.ask("Replace with:")?;
            Action::Replace {
                pattern,
                replacement,
            }
        }
        Command::Unbound => return None,
    };
    Some(action)
}
