//! Status-row prompt used for save-as, search and replace questions.
//!
//! `PromptLine` is the pure editing state: it consumes normalized key events
//! and reports when the user submits or cancels. `TerminalPrompt` draws it on
//! the status row and feeds it from the terminal.

use std::io::{Write, stdout};

use anyhow::Result;
use core_actions::Prompt;
use core_events::{InputEvent, KeyCode, KeyEvent, KeyModifiers};
use core_render::status::fit_status;
use core_render::writer::{Paint, Writer};
use core_text::display_width;
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptStep {
    Continue,
    Submit(String),
    Cancel,
}

#[derive(Debug, Default)]
pub struct PromptLine {
    answer: String,
}

impl PromptLine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn feed(&mut self, key: KeyEvent) -> PromptStep {
        let mods = key.mods - KeyModifiers::SHIFT;
        match key.code {
            KeyCode::Enter => PromptStep::Submit(std::mem::take(&mut self.answer)),
            KeyCode::Esc => PromptStep::Cancel,
            KeyCode::Char('c' | 'g') if mods == KeyModifiers::CTRL => PromptStep::Cancel,
            KeyCode::Backspace => {
                self.answer.pop();
                PromptStep::Continue
            }
            KeyCode::Char('h') if mods == KeyModifiers::CTRL => {
                self.answer.pop();
                PromptStep::Continue
            }
            KeyCode::Char(c) if mods.is_empty() && !c.is_control() => {
                self.answer.push(c);
                PromptStep::Continue
            }
            _ => PromptStep::Continue,
        }
    }
}

/// Prompt drawn on the status row of the live terminal.
pub struct TerminalPrompt {
    width: u16,
    status_row: u16,
    shown: bool,
}

impl TerminalPrompt {
    pub fn new(width: u16, status_row: u16) -> Self {
        Self {
            width,
            status_row,
            shown: false,
        }
    }

    /// True once any question has been drawn over the status row.
    pub fn was_shown(&self) -> bool {
        self.shown
    }

    fn draw(&self, question: &str, answer: &str) -> Result<()> {
        let line = format!("{question} {answer}");
        let text = fit_status(&line, self.width as usize);
        let caret = display_width(&line).min((self.width as usize).saturating_sub(1));
        let mut w = Writer::new();
        w.move_to(0, self.status_row);
        w.clear_line();
        w.set_paint(Paint::StatusBar);
        w.print(text);
        w.set_paint(Paint::Plain);
        w.move_to(u16::try_from(caret).unwrap_or(u16::MAX), self.status_row);
        w.flush_to(&mut stdout().lock())
    }

    fn run(&mut self, question: &str) -> Result<Option<String>> {
        let mut line = PromptLine::new();
        loop {
            self.draw(question, line.answer())?;
            let Some(ev) = core_input::read_event()? else {
                continue;
            };
            match ev {
                InputEvent::Key(key) => match line.feed(key) {
                    PromptStep::Continue => {}
                    PromptStep::Submit(answer) => return Ok(Some(answer)),
                    PromptStep::Cancel => return Ok(None),
                },
                InputEvent::Resize(w, h) => {
                    self.width = w;
                    self.status_row = h.saturating_sub(1);
                }
                InputEvent::Mouse(_) => {}
            }
        }
    }
}

impl Prompt for TerminalPrompt {
    fn ask(&mut self, question: &str) -> Option<String> {
        debug!(target: "runtime.prompt", question, "ask");
        self.shown = true;
        match self.run(question) {
            Ok(answer) => answer,
            Err(e) => {
                warn!(target: "runtime.prompt", error = %e, "prompt_failed");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed_all(line: &mut PromptLine, keys: &[KeyEvent]) -> Vec<PromptStep> {
        keys.iter().map(|k| line.feed(*k)).collect()
    }

    #[test]
    fn typing_and_submit() {
        let mut line = PromptLine::new();
        let steps = feed_all(
            &mut line,
            &[
                KeyEvent::plain(KeyCode::Char('a')),
                KeyEvent::new(KeyCode::Char('B'), KeyModifiers::SHIFT),
                KeyEvent::plain(KeyCode::Char(' ')),
                KeyEvent::plain(KeyCode::Enter),
            ],
        );
        assert_eq!(steps.last(), Some(&PromptStep::Submit("aB ".into())));
        assert_eq!(line.answer(), "");
    }

    #[test]
    fn backspace_edits_and_ignores_empty() {
        let mut line = PromptLine::new();
        line.feed(KeyEvent::plain(KeyCode::Backspace));
        line.feed(KeyEvent::plain(KeyCode::Char('x')));
        line.feed(KeyEvent::plain(KeyCode::Char('y')));
        line.feed(KeyEvent::plain(KeyCode::Backspace));
        line.feed(KeyEvent::ctrl('h'));
        line.feed(KeyEvent::plain(KeyCode::Char('z')));
        assert_eq!(line.answer(), "z");
    }

    #[test]
    fn escape_and_ctrl_c_cancel() {
        let mut line = PromptLine::new();
        line.feed(KeyEvent::plain(KeyCode::Char('q')));
        assert_eq!(line.feed(KeyEvent::plain(KeyCode::Esc)), PromptStep::Cancel);
        assert_eq!(line.feed(KeyEvent::ctrl('c')), PromptStep::Cancel);
    }

    #[test]
    fn control_chords_and_arrows_ignored() {
        let mut line = PromptLine::new();
        line.feed(KeyEvent::ctrl('s'));
        line.feed(KeyEvent::plain(KeyCode::Left));
        line.feed(KeyEvent::plain(KeyCode::Tab));
        assert_eq!(line.answer(), "");
    }
}
