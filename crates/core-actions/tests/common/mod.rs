#![allow(dead_code)] // Shared across integration tests; each test binary uses a subset of helpers.

use core_actions::{Action, DispatchResult, EditSession, Prompt};
use core_config::Config;
use core_text::{Document, Position};
use std::collections::VecDeque;
use std::path::PathBuf;

/// Prompt fake answering from a queue and remembering every question.
#[derive(Default)]
pub struct ScriptedPrompt {
    answers: VecDeque<Option<String>>,
    pub asked: Vec<String>,
}

impl ScriptedPrompt {
    pub fn new(answers: &[Option<&str>]) -> Self {
        Self {
            answers: answers.iter().map(|a| a.map(str::to_string)).collect(),
            asked: Vec::new(),
        }
    }
}

impl Prompt for ScriptedPrompt {
    fn ask(&mut self, question: &str) -> Option<String> {
        self.asked.push(question.to_string());
        self.answers.pop_front().flatten()
    }
}

pub fn session(lines: &[&str]) -> EditSession {
    session_with(lines, None)
}

pub fn session_with(lines: &[&str], file: Option<PathBuf>) -> EditSession {
    let doc = Document::from_lines(lines.iter().copied());
    let mut s = EditSession::from_document(doc, file, &Config::default());
    s.set_text_height(20);
    s
}

pub fn at(s: &mut EditSession, line: usize, col: usize) {
    s.model_mut().view_mut().cursor = Position::new(line, col);
}

pub fn run(s: &mut EditSession, action: Action) -> DispatchResult {
    let mut p = ScriptedPrompt::default();
    s.dispatch(action, &mut p)
}

pub fn lines(s: &EditSession) -> Vec<String> {
    s.model().state().document.lines().to_vec()
}

pub fn cursor(s: &EditSession) -> Position {
    s.model().view().cursor
}

pub fn status(s: &EditSession) -> Option<String> {
    s.model()
        .state()
        .ephemeral_status
        .as_ref()
        .map(|m| m.text.clone())
}
