//! Domain DTOs for the trademark API.
//!
//! # Design
//! These types mirror the mock-server's schema but are defined independently,
//! so the client compiles against the wire contract rather than any server
//! internals. Integration tests catch schema drift between the two crates.

use serde::{Deserialize, Serialize};

/// Lifecycle status of a trademark record. The server is the source of
/// truth; the client never produces a value outside this pair.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum Status {
    #[default]
    Active,
    Inactive,
}

/// A single trademark record returned by the API. `id` is server-assigned
/// and immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TrademarkRecord {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub status: Status,
}

/// Request payload for creating or replacing a trademark. Update is a full
/// replace — every field is sent, and omitted `status` defaults to Active.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordDraft {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: Status,
}

impl RecordDraft {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            status: Status::default(),
        }
    }
}

/// Wire shape of the list endpoint: one page of records plus the
/// server-reported total count across all pages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListResponse {
    pub data: Vec<TrademarkRecord>,
    pub total: u64,
}
