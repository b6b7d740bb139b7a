//! Editor state: the open document, its file association, search state,
//! transient status message, and the undo engine.
//!
//! View concerns (cursor, scroll offset) live in `core-model`; this crate
//! stays document-centric. Operations that need the cursor take it as an
//! explicit argument, which keeps snapshot capture honest: a snapshot is
//! always `(lines, cursor)` as of the moment `record` is called.
//!
//! Snapshot policy:
//! - A baseline snapshot is recorded when the state is constructed.
//! - The session calls `record` immediately before every structural mutation
//!   (insert, delete, split, join, bulk replace) and never before pure cursor
//!   movement. Bulk replace records once for the whole operation.
//! - Undo and redo mark the document modified even when they land back on the
//!   saved content; only a successful save clears the flag.
//!
//! Telemetry: snapshot lifecycle emits trace events under `state.undo`.

use std::path::PathBuf;

use core_search::SearchState;
use core_text::{Document, Position};

pub mod undo;
use undo::UndoEngine;
pub use undo::{EditSnapshot, UNDO_HISTORY_MAX};

/// Transient status message shown in place of the status line until the next input event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EphemeralMessage {
    pub text: String,
}

/// Top-level editor state container (exactly one document per session).
pub struct EditorState {
    pub document: Document,
    pub file_name: Option<PathBuf>,
    pub search: SearchState,
    pub ephemeral_status: Option<EphemeralMessage>,
    undo: UndoEngine,
}

impl EditorState {
    /// Create a new state with the default history capacity and a recorded baseline.
    pub fn new(document: Document) -> Self {
        Self::with_history_capacity(document, UNDO_HISTORY_MAX)
    }

    pub fn with_history_capacity(document: Document, capacity: usize) -> Self {
        let mut undo = UndoEngine::with_capacity(capacity);
        undo.record(&document, Position::origin());
        Self {
            document,
            file_name: None,
            search: SearchState::default(),
            ephemeral_status: None,
            undo,
        }
    }

    /// Attach (or replace) the file the document saves to.
    pub fn with_file_name(mut self, path: impl Into<PathBuf>) -> Self {
        self.file_name = Some(path.into());
        self
    }

    /// File name as given on the command line or at the save prompt, or
    /// `[No Name]` when the buffer has no file yet.
    pub fn display_name(&self) -> String {
        match self.file_name.as_deref() {
            Some(p) => p.to_string_lossy().into_owned(),
            None => "[No Name]".to_string(),
        }
    }

    pub fn set_ephemeral<S: Into<String>>(&mut self, msg: S) {
        self.ephemeral_status = Some(EphemeralMessage { text: msg.into() });
    }

    /// Drop the transient message; returns true if one was showing.
    pub fn clear_ephemeral(&mut self) -> bool {
        self.ephemeral_status.take().is_some()
    }

    /// Capture the pre-mutation snapshot. Call right before a structural edit.
    pub fn record(&mut self, cursor: Position) {
        self.undo.record(&self.document, cursor);
    }

    /// Restore the previous snapshot. Returns true if the document changed hands.
    pub fn undo(&mut self, cursor: &mut Position) -> bool {
        let applied = self.undo.undo(&mut self.document, cursor);
        if applied {
            self.document.set_modified(true);
        }
        applied
    }

    /// Re-apply an undone snapshot. Returns true if applied.
    pub fn redo(&mut self, cursor: &mut Position) -> bool {
        let applied = self.undo.redo(&mut self.document, cursor);
        if applied {
            self.document.set_modified(true);
        }
        applied
    }

    // Test/metrics helpers
    pub fn undo_depth(&self) -> usize {
        self.undo.undo_depth()
    }
    pub fn redo_depth(&self) -> usize {
        self.undo.redo_depth()
    }
    pub fn history_capacity(&self) -> usize {
        self.undo.capacity()
    }
}
