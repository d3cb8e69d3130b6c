//! Synchronous client core for the trademark admin API.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern). The caller executes the
//! actual HTTP round-trip, making the core fully deterministic and testable.
//!
//! # Design
//! - `TrademarkClient` is stateless — it holds only `base_url` (the
//!   collection endpoint, configurable via `TRADEMARKS_API_URL`).
//! - Each CRUD operation is split into `build_*` (produces request) and
//!   `parse_*` (consumes response), so the I/O boundary is explicit.
//! - `RecordStore` and `ListController` layer page math, the empty-list
//!   fallback, selection slots, and the refresh-after-mutation rule on top
//!   of the client, behind the `Transport` trait.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod controller;
pub mod error;
pub mod http;
pub mod pagination;
pub mod selection;
pub mod store;
pub mod types;

#[cfg(test)]
pub(crate) mod testutil;

pub use client::TrademarkClient;
pub use controller::{FetchTicket, ListController};
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport, TransportError};
pub use pagination::{to_offset, to_page_count, PageWindow, PAGE_SIZE};
pub use selection::SelectionState;
pub use store::{ListOutcome, RecordStore};
pub use types::{ListResponse, RecordDraft, Status, TrademarkRecord};
