use core_text::{Document, Position};
use std::collections::VecDeque;
use tracing::trace;

/// Default maximum number of snapshots retained in undo history.
pub const UNDO_HISTORY_MAX: usize = 100;

/// A full-state snapshot for undo/redo: every line plus the cursor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditSnapshot {
    pub lines: Vec<String>,
    pub cursor: Position,
}

impl EditSnapshot {
    fn capture(doc: &Document, cursor: Position) -> Self {
        Self {
            lines: doc.lines().to_vec(),
            cursor,
        }
    }

    fn restore(self, doc: &mut Document, cursor: &mut Position) {
        doc.replace_lines(self.lines);
        *cursor = self.cursor;
        cursor.clamp_to(doc.line_count(), |i| doc.line_len(i));
    }
}

/// Two-stack snapshot history.
///
/// The bottom entry of the undo stack is the baseline: it is pushed once at
/// initialization and is never popped, so undo stops there. Every other
/// entry is the state captured just before one recorded mutation.
///
/// Once capacity eviction has dropped the baseline, the bottom entry is a
/// real pre-mutation state. Undo restores it once and keeps it in place as
/// the new floor.
pub struct UndoEngine {
    undo_stack: VecDeque<EditSnapshot>,
    redo_stack: Vec<EditSnapshot>,
    capacity: usize,
    baseline_evicted: bool,
}

impl Default for UndoEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl UndoEngine {
    pub fn new() -> Self {
        Self::with_capacity(UNDO_HISTORY_MAX)
    }

    /// Capacity below 2 would leave no room past the baseline and is raised to 2.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            undo_stack: VecDeque::new(),
            redo_stack: Vec::new(),
            capacity: capacity.max(2),
            baseline_evicted: false,
        }
    }

    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }
    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Snapshot the current state ahead of a mutation and drop the redo branch.
    pub fn record(&mut self, doc: &Document, cursor: Position) {
        self.push_undo(EditSnapshot::capture(doc, cursor));
        if !self.redo_stack.is_empty() {
            self.redo_stack.clear();
            trace!(target: "state.undo", "redo_stack_cleared_on_new_edit");
        }
    }

    /// Step back one recorded mutation. Returns false at the baseline.
    pub fn undo(&mut self, doc: &mut Document, cursor: &mut Position) -> bool {
        let target = if self.undo_stack.len() >= 2 {
            self.undo_stack.pop_back()
        } else if self.baseline_evicted {
            // Restoring the floor makes it equal to the current state.
            self.baseline_evicted = false;
            self.undo_stack.front().cloned()
        } else {
            None
        };
        let Some(target) = target else {
            trace!(target: "state.undo", undo_depth = self.undo_stack.len(), "undo_at_baseline");
            return false;
        };
        self.redo_stack.push(EditSnapshot::capture(doc, *cursor));
        trace!(target: "state.undo", undo_depth = self.undo_stack.len(), redo_depth = self.redo_stack.len(), "undo_pop");
        target.restore(doc, cursor);
        true
    }

    /// Re-apply the most recently undone state. Returns false when nothing is pending.
    ///
    /// Redo records like any other mutation, so the redo branch is dropped
    /// and only one step can be redone.
    pub fn redo(&mut self, doc: &mut Document, cursor: &mut Position) -> bool {
        let Some(next) = self.redo_stack.pop() else {
            return false;
        };
        self.record(doc, *cursor);
        trace!(target: "state.undo", undo_depth = self.undo_stack.len(), "redo_pop");
        next.restore(doc, cursor);
        true
    }

    fn push_undo(&mut self, snap: EditSnapshot) {
        let lines = snap.lines.len();
        self.undo_stack.push_back(snap);
        trace!(target: "state.undo", undo_depth = self.undo_stack.len(), redo_depth = self.redo_stack.len(), lines, "push_snapshot");
        if self.undo_stack.len() > self.capacity {
            self.undo_stack.pop_front();
            self.baseline_evicted = true;
            trace!(target: "state.undo", capacity = self.capacity, "undo_stack_trimmed");
        }
    }
}
