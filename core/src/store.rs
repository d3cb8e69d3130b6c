//! Record store façade: the only entry points a UI layer calls.
//!
//! # Design
//! `RecordStore` glues the stateless client to a `Transport` and folds in
//! the page-to-offset translation. It holds no cache — every call re-queries
//! the server, which stays the single source of truth.
//!
//! `list` never fails: the list view must survive a flaky backend, so any
//! failure collapses to an empty page with the error carried alongside as a
//! recoverable notice. Every other operation propagates its error because
//! the calling flow cannot proceed without the result.

use crate::client::TrademarkClient;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse, Transport};
use crate::pagination::{to_offset, to_page_count, PAGE_SIZE};
use crate::types::{RecordDraft, TrademarkRecord};

/// One fetched list page, plus the failure (if any) that was recovered from.
/// `error.is_some()` implies empty records and zero pages.
#[derive(Debug)]
pub struct ListOutcome {
    pub records: Vec<TrademarkRecord>,
    pub total_pages: u32,
    pub error: Option<ApiError>,
}

impl ListOutcome {
    fn empty(error: ApiError) -> Self {
        Self {
            records: Vec::new(),
            total_pages: 0,
            error: Some(error),
        }
    }
}

/// Mediates between UI flows and the transport client.
pub struct RecordStore<T: Transport> {
    client: TrademarkClient,
    transport: T,
}

impl<T: Transport> RecordStore<T> {
    pub fn new(client: TrademarkClient, transport: T) -> Self {
        Self { client, transport }
    }

    fn exec(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        self.transport
            .execute(request)
            .map_err(|e| ApiError::Network(e.0))
    }

    /// Fetch one 1-based page of records. Never fails — see module docs.
    pub fn list(&self, page: u32) -> ListOutcome {
        let request = self.client.build_list(to_offset(page, PAGE_SIZE), PAGE_SIZE);
        let response = match self.exec(request) {
            Ok(response) => response,
            Err(e) => return ListOutcome::empty(e),
        };
        match self.client.parse_list(response) {
            Ok(body) => ListOutcome {
                records: body.data,
                total_pages: to_page_count(body.total, PAGE_SIZE),
                error: None,
            },
            Err(e) => ListOutcome::empty(e),
        }
    }

    /// Fetch a single record. Errors propagate — a detail view has nothing
    /// to render without data, so the caller redirects to the list.
    pub fn get_one(&self, id: i64) -> Result<TrademarkRecord, ApiError> {
        let response = self.exec(self.client.build_get(id))?;
        self.client.parse_get(response)
    }

    pub fn create(&self, draft: &RecordDraft) -> Result<TrademarkRecord, ApiError> {
        let request = self.client.build_create(draft)?;
        let response = self.exec(request)?;
        self.client.parse_create(response)
    }

    pub fn update(&self, id: i64, draft: &RecordDraft) -> Result<TrademarkRecord, ApiError> {
        let request = self.client.build_update(id, draft)?;
        let response = self.exec(request)?;
        self.client.parse_update(response)
    }

    pub fn remove(&self, id: i64) -> Result<(), ApiError> {
        let response = self.exec(self.client.build_delete(id))?;
        self.client.parse_delete(response)
    }
}
