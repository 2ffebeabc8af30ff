use thiserror::Error;
use tracing::debug;

use super::types::HumanResource;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HistoryError {
    #[error("No edits to undo")]
    NothingToUndo,

    #[error("No edits to redo")]
    NothingToRedo,
}

/// Records changes to a resource so the host can step back through them.
pub trait UndoManager {
    fn undoable_edit(
        &mut self,
        description: &str,
        target: &mut HumanResource,
        edit: &mut dyn FnMut(&mut HumanResource),
    );
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditRecord {
    pub description: String,
    pub undo_state: HumanResource,
    pub redo_state: HumanResource,
}

/// Linear undo/redo stack of whole-resource snapshots.
#[derive(Debug, Clone, Default)]
pub struct EditHistory {
    edit_stack: Vec<EditRecord>,
    num_edits_applied: usize,
}

impl EditHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.edit_stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edit_stack.is_empty()
    }

    pub fn can_undo(&self) -> bool {
        self.num_edits_applied > 0
    }

    pub fn can_redo(&self) -> bool {
        self.num_edits_applied < self.edit_stack.len()
    }

    /// Description of the edit `undo` would revert.
    pub fn undo_description(&self) -> Option<&str> {
        self.num_edits_applied
            .checked_sub(1)
            .map(|i| self.edit_stack[i].description.as_str())
    }

    pub fn undo(&mut self, target: &mut HumanResource) -> Result<(), HistoryError> {
        if !self.can_undo() {
            return Err(HistoryError::NothingToUndo);
        }
        let record = &self.edit_stack[self.num_edits_applied - 1];
        debug!(description = %record.description, "undo");
        *target = record.undo_state.clone();
        self.num_edits_applied -= 1;
        Ok(())
    }

    pub fn redo(&mut self, target: &mut HumanResource) -> Result<(), HistoryError> {
        if !self.can_redo() {
            return Err(HistoryError::NothingToRedo);
        }
        let record = &self.edit_stack[self.num_edits_applied];
        debug!(description = %record.description, "redo");
        *target = record.redo_state.clone();
        self.num_edits_applied += 1;
        Ok(())
    }

    fn append_to_edit_history(&mut self, record: EditRecord) {
        if self.num_edits_applied < self.edit_stack.len() {
            self.edit_stack.truncate(self.num_edits_applied);
        }
        self.edit_stack.push(record);
        self.num_edits_applied = self.edit_stack.len();
    }
}

impl UndoManager for EditHistory {
    fn undoable_edit(
        &mut self,
        description: &str,
        target: &mut HumanResource,
        edit: &mut dyn FnMut(&mut HumanResource),
    ) {
        let undo_state = target.clone();
        edit(target);
        self.append_to_edit_history(EditRecord {
            description: description.to_string(),
            undo_state,
            redo_state: target.clone(),
        });
    }
}
