use std::path::PathBuf;

use crate::{Action, DispatchResult, Prompt, dispatch, io_ops};
use core_config::Config;
use core_model::EditorModel;
use core_state::EditorState;
use core_text::Document;

/// One open file plus everything needed to service actions against it.
pub struct EditSession {
    model: EditorModel,
    text_height: usize,
}

impl EditSession {
    /// Load `path` (missing or unreadable files give an empty buffer) and
    /// build a session using the configured history capacity.
    pub fn open(path: Option<PathBuf>, config: &Config) -> Self {
        let doc = io_ops::load_file(path.as_deref());
        Self::from_document(doc, path, config)
    }

    pub fn from_document(doc: Document, file_name: Option<PathBuf>, config: &Config) -> Self {
        let mut state = EditorState::with_history_capacity(doc, config.history_capacity());
        state.file_name = file_name;
        Self {
            model: EditorModel::new(state),
            text_height: 0,
        }
    }

    /// Number of document rows on screen; zero disables scrolling and clicks.
    pub fn set_text_height(&mut self, height: usize) {
        self.text_height = height;
        self.model.view_mut().scroll_to_contain(height);
    }

    pub fn text_height(&self) -> usize {
        self.text_height
    }

    /// Service one action. Any transient status message is dropped first.
    pub fn dispatch(&mut self, action: Action, prompt: &mut dyn Prompt) -> DispatchResult {
        let cleared = self.model.state_mut().clear_ephemeral();
        let mut result = dispatch(action, &mut self.model, self.text_height, prompt);
        result.dirty |= cleared;
        result
    }

    /// Input arrived that maps to no action; still expires the status message.
    pub fn note_input(&mut self) -> bool {
        self.model.state_mut().clear_ephemeral()
    }

    pub fn model(&self) -> &EditorModel {
        &self.model
    }

    pub fn model_mut(&mut self) -> &mut EditorModel {
        &mut self.model
    }
}
