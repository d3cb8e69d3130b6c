//! Modal selection slots for the list view.
//!
//! The view modal and the delete-confirmation modal each target at most one
//! record at a time, independently of each other. Slots hold snapshots, not
//! live references; a slot is cleared the moment its modal closes (or, for
//! delete, the moment the delete succeeds) so staleness is never observable.

use crate::types::TrademarkRecord;

/// Two independent single-slot registers: one record targeted for viewing,
/// one targeted for deletion. All operations are idempotent.
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    view_target: Option<TrademarkRecord>,
    delete_target: Option<TrademarkRecord>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open_view(&mut self, record: TrademarkRecord) {
        self.view_target = Some(record);
    }

    pub fn close_view(&mut self) {
        self.view_target = None;
    }

    pub fn view_target(&self) -> Option<&TrademarkRecord> {
        self.view_target.as_ref()
    }

    pub fn open_delete(&mut self, record: TrademarkRecord) {
        self.delete_target = Some(record);
    }

    pub fn close_delete(&mut self) {
        self.delete_target = None;
    }

    pub fn delete_target(&self) -> Option<&TrademarkRecord> {
        self.delete_target.as_ref()
    }
}
