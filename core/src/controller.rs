//! List-view controller: one explicit state object for the record table.
//!
//! # Design
//! Gathers what the admin list view needs — the loaded page, the page
//! window, the two modal selection slots — behind a small set of
//! transitions, so the synchronization rules hold without any rendering
//! layer involved:
//!
//! - a successful `create`, `update`, or `confirm_delete` is followed by
//!   exactly one list fetch for the current page, issued only after the
//!   mutation's response arrived;
//! - a failed mutation changes no state (a failed delete leaves the delete
//!   target set so the user can retry or cancel);
//! - a list fetch that fails resets the view to empty and records the
//!   failure as a one-shot recoverable notice.
//!
//! Fetches are ticketed: `begin_fetch` bumps a monotonic generation and
//! `apply_list` drops any outcome that is not from the latest fetch. The
//! blocking `refresh` path goes through the same pair, and a host that runs
//! its transport off-thread can drive the two halves directly to get the
//! stale-response guard.

use crate::error::ApiError;
use crate::http::Transport;
use crate::pagination::PageWindow;
use crate::selection::SelectionState;
use crate::store::{ListOutcome, RecordStore};
use crate::types::{RecordDraft, TrademarkRecord};

/// Proof of which fetch an outcome belongs to. Issued by `begin_fetch`;
/// only the most recently issued ticket is honored by `apply_list`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

/// Stateful controller for the paginated record list and its modals.
pub struct ListController<T: Transport> {
    store: RecordStore<T>,
    records: Vec<TrademarkRecord>,
    window: PageWindow,
    selection: SelectionState,
    generation: u64,
    list_failure: Option<ApiError>,
}

impl<T: Transport> ListController<T> {
    /// Starts on page 1 with nothing loaded; call `refresh` to populate.
    pub fn new(store: RecordStore<T>) -> Self {
        Self {
            store,
            records: Vec::new(),
            window: PageWindow::new(),
            selection: SelectionState::new(),
            generation: 0,
            list_failure: None,
        }
    }

    pub fn records(&self) -> &[TrademarkRecord] {
        &self.records
    }

    pub fn current_page(&self) -> u32 {
        self.window.current()
    }

    pub fn total_pages(&self) -> u32 {
        self.window.total_pages()
    }

    /// The failure behind the last empty list state, surfaced once for a
    /// transient notification.
    pub fn take_list_failure(&mut self) -> Option<ApiError> {
        self.list_failure.take()
    }

    /// Start a fetch: any outcome from an earlier fetch becomes stale.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.generation += 1;
        FetchTicket(self.generation)
    }

    /// Apply a fetched page. Returns false and leaves all state untouched
    /// when `ticket` is not from the latest `begin_fetch`.
    pub fn apply_list(&mut self, ticket: FetchTicket, outcome: ListOutcome) -> bool {
        if ticket.0 != self.generation {
            return false;
        }
        self.records = outcome.records;
        self.window.set_total_pages(outcome.total_pages);
        self.list_failure = outcome.error;
        true
    }

    /// Re-fetch the current page.
    pub fn refresh(&mut self) {
        let ticket = self.begin_fetch();
        let outcome = self.store.list(self.window.current());
        self.apply_list(ticket, outcome);
    }

    /// Move to page `n` and re-fetch it. A target outside
    /// `[1, total_pages]` is rejected: no state change, no fetch.
    pub fn go_to(&mut self, n: u32) -> bool {
        if !self.window.go_to(n) {
            return false;
        }
        self.refresh();
        true
    }

    pub fn create(&mut self, draft: &RecordDraft) -> Result<TrademarkRecord, ApiError> {
        let record = self.store.create(draft)?;
        self.refresh();
        Ok(record)
    }

    pub fn update(&mut self, id: i64, draft: &RecordDraft) -> Result<TrademarkRecord, ApiError> {
        let record = self.store.update(id, draft)?;
        self.refresh();
        Ok(record)
    }

    /// Fetch a single record for the detail or edit view. No list state is
    /// touched; errors propagate so the caller can redirect.
    pub fn get_one(&self, id: i64) -> Result<TrademarkRecord, ApiError> {
        self.store.get_one(id)
    }

    pub fn open_view(&mut self, record: TrademarkRecord) {
        self.selection.open_view(record);
    }

    pub fn close_view(&mut self) {
        self.selection.close_view();
    }

    pub fn view_target(&self) -> Option<&TrademarkRecord> {
        self.selection.view_target()
    }

    pub fn open_delete(&mut self, record: TrademarkRecord) {
        self.selection.open_delete(record);
    }

    pub fn close_delete(&mut self) {
        self.selection.close_delete();
    }

    pub fn delete_target(&self) -> Option<&TrademarkRecord> {
        self.selection.delete_target()
    }

    /// Delete the record in the delete slot. The slot is cleared before the
    /// re-fetch so the modal closes even if the list fetch then fails; on a
    /// failed delete the slot stays set. No-op when the slot is empty.
    pub fn confirm_delete(&mut self) -> Result<(), ApiError> {
        let id = match self.selection.delete_target() {
            Some(target) => target.id,
            None => return Ok(()),
        };
        self.store.remove(id)?;
        self.selection.close_delete();
        self.refresh();
        Ok(())
    }
}
