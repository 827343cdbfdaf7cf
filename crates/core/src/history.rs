//! Snapshot-based undo/redo.
//!
//! The undo stack starts with the post-deal snapshot, which is the floor of
//! history and is never popped. Every undoable action pushes the state from
//! just before it ran. Undo hands back that pre-action state and parks the
//! current one on the redo stack; redo does the reverse. Recording a new action
//! invalidates everything on the redo stack.

use crate::snapshot::GameSnapshot;

#[derive(Debug, Clone, Default)]
pub struct History {
    undo: Vec<GameSnapshot>,
    redo: Vec<GameSnapshot>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop all history and start over from `floor`.
    pub fn reset(&mut self, floor: GameSnapshot) {
        self.undo.clear();
        self.redo.clear();
        self.undo.push(floor);
    }

    /// Record the state from just before an undoable action.
    pub fn record(&mut self, before: GameSnapshot) {
        self.undo.push(before);
        self.redo.clear();
    }

    pub fn can_undo(&self) -> bool {
        self.undo.len() > 1
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    /// Step back one action.
    ///
    /// `current` is only evaluated when there is something to undo. Returns the
    /// snapshot the caller must restore, or `None` at the history floor.
    pub fn undo(&mut self, current: impl FnOnce() -> GameSnapshot) -> Option<GameSnapshot> {
        if !self.can_undo() {
            return None;
        }
        let previous = self.undo.pop()?;
        self.redo.push(current());
        Some(previous)
    }

    /// Re-apply the most recently undone action.
    ///
    /// Returns the snapshot the caller must restore, or `None` if nothing was undone.
    pub fn redo(&mut self, current: impl FnOnce() -> GameSnapshot) -> Option<GameSnapshot> {
        let next = self.redo.pop()?;
        self.undo.push(current());
        Some(next)
    }

    /// Undo stack depth, including the floor
    pub fn undo_len(&self) -> usize {
        self.undo.len()
    }

    pub fn redo_len(&self) -> usize {
        self.redo.len()
    }
}
