use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum Status {
    #[default]
    Active,
    Inactive,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Trademark {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub status: Status,
}

/// Payload for both create and update; update is a full replace.
#[derive(Deserialize)]
pub struct TrademarkDraft {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: Status,
}

/// One list page plus the total count across all pages.
#[derive(Serialize, Deserialize)]
pub struct ListResponse {
    pub data: Vec<Trademark>,
    pub total: u64,
}

#[derive(Serialize, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}

#[derive(Deserialize)]
pub struct ListParams {
    #[serde(default)]
    pub skip: usize,
    #[serde(default = "default_limit")]
    pub limit: usize,
}

fn default_limit() -> usize {
    10
}

/// Records keyed by id (ordered, so pagination is stable) plus the next
/// id to assign. Ids are sequential from 1 and never reused.
#[derive(Default)]
pub struct Registry {
    next_id: i64,
    records: BTreeMap<i64, Trademark>,
}

pub type Db = Arc<RwLock<Registry>>;

type ApiFailure = (StatusCode, Json<ErrorBody>);

fn failure(status: StatusCode, detail: &str) -> ApiFailure {
    (
        status,
        Json(ErrorBody {
            detail: detail.to_string(),
        }),
    )
}

fn validate_name(draft: &TrademarkDraft) -> Result<(), ApiFailure> {
    if draft.name.trim().is_empty() {
        return Err(failure(
            StatusCode::UNPROCESSABLE_ENTITY,
            "name must not be empty",
        ));
    }
    Ok(())
}

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Registry::default()));
    Router::new()
        .route("/api/v1/trademarks", get(list_trademarks).post(create_trademark))
        .route(
            "/api/v1/trademarks/{id}",
            get(get_trademark).put(update_trademark).delete(delete_trademark),
        )
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_trademarks(
    State(db): State<Db>,
    Query(params): Query<ListParams>,
) -> Json<ListResponse> {
    let registry = db.read().await;
    let data = registry
        .records
        .values()
        .skip(params.skip)
        .take(params.limit)
        .cloned()
        .collect();
    Json(ListResponse {
        data,
        total: registry.records.len() as u64,
    })
}

async fn create_trademark(
    State(db): State<Db>,
    Json(draft): Json<TrademarkDraft>,
) -> Result<(StatusCode, Json<Trademark>), ApiFailure> {
    validate_name(&draft)?;
    let mut registry = db.write().await;
    registry.next_id += 1;
    let trademark = Trademark {
        id: registry.next_id,
        name: draft.name,
        description: draft.description,
        status: draft.status,
    };
    registry.records.insert(trademark.id, trademark.clone());
    Ok((StatusCode::CREATED, Json(trademark)))
}

async fn get_trademark(
    State(db): State<Db>,
    Path(id): Path<i64>,
) -> Result<Json<Trademark>, ApiFailure> {
    let registry = db.read().await;
    registry
        .records
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| failure(StatusCode::NOT_FOUND, "Trademark not found"))
}

async fn update_trademark(
    State(db): State<Db>,
    Path(id): Path<i64>,
    Json(draft): Json<TrademarkDraft>,
) -> Result<Json<Trademark>, ApiFailure> {
    validate_name(&draft)?;
    let mut registry = db.write().await;
    let trademark = registry
        .records
        .get_mut(&id)
        .ok_or_else(|| failure(StatusCode::NOT_FOUND, "Trademark not found"))?;
    trademark.name = draft.name;
    trademark.description = draft.description;
    trademark.status = draft.status;
    Ok(Json(trademark.clone()))
}

async fn delete_trademark(
    State(db): State<Db>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiFailure> {
    let mut registry = db.write().await;
    registry
        .records
        .remove(&id)
        .map(|_| StatusCode::NO_CONTENT)
        .ok_or_else(|| failure(StatusCode::NOT_FOUND, "Trademark not found"))
}
