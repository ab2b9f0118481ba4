//! Ordered collection handlers

use axum::{
    Json,
    extract::{
        Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
};
use serde::{Deserialize, Serialize};
use shared::error::{AppError, AppResult};
use shared::{AppResponse, BatchSortOrderRequest, IdQuery};

use crate::core::{HasCollection, ServerState};
use crate::store::{Collection, Document};

/// Response for a reorder batch
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReorderSummary {
    pub updated: usize,
}

fn collection<T>(state: &ServerState) -> &Collection<T>
where
    T: Document,
    ServerState: HasCollection<T>,
{
    <ServerState as HasCollection<T>>::collection(state)
}

/// Well-formed JSON of the wrong shape is a validation failure
fn body<P>(payload: Result<Json<P>, JsonRejection>) -> AppResult<P> {
    match payload {
        Ok(Json(payload)) => Ok(payload),
        Err(JsonRejection::JsonDataError(e)) => Err(AppError::validation(e.body_text())),
        Err(e) => Err(AppError::invalid_request(e.body_text())),
    }
}

fn id(query: Result<Query<IdQuery>, QueryRejection>) -> AppResult<String> {
    query
        .map(|Query(query)| query.id)
        .map_err(|e| AppError::invalid_request(e.body_text()))
}

/// GET /api/<resource> - every document, in order
pub async fn list<T>(State(state): State<ServerState>) -> Json<AppResponse<Vec<T>>>
where
    T: Document,
    ServerState: HasCollection<T>,
{
    Json(AppResponse::success(collection::<T>(&state).list().await))
}

/// POST /api/<resource> - create at the end of the order
pub async fn create<T>(
    State(state): State<ServerState>,
    payload: Result<Json<T::Create>, JsonRejection>,
) -> AppResult<Json<AppResponse<T>>>
where
    T: Document,
    ServerState: HasCollection<T>,
{
    let payload = body(payload)?;
    T::validate(&payload)?;
    let document = collection::<T>(&state).create(payload).await;
    Ok(Json(AppResponse::success(document)))
}

/// PUT /api/<resource>?id=... - partial update
pub async fn update<T>(
    State(state): State<ServerState>,
    query: Result<Query<IdQuery>, QueryRejection>,
    payload: Result<Json<T::Update>, JsonRejection>,
) -> AppResult<Json<AppResponse<T>>>
where
    T: Document,
    ServerState: HasCollection<T>,
{
    let id = id(query)?;
    let payload = body(payload)?;
    let document = collection::<T>(&state).update(&id, payload).await?;
    Ok(Json(AppResponse::success(document)))
}

/// DELETE /api/<resource>?id=...
pub async fn delete<T>(
    State(state): State<ServerState>,
    query: Result<Query<IdQuery>, QueryRejection>,
) -> AppResult<Json<AppResponse<()>>>
where
    T: Document,
    ServerState: HasCollection<T>,
{
    collection::<T>(&state).delete(&id(query)?).await?;
    Ok(Json(AppResponse::ok()))
}

/// POST /api/<resource>/reorder - apply a batch of `(id, order)` pairs
pub async fn reorder<T>(
    State(state): State<ServerState>,
    request: Result<Json<BatchSortOrderRequest>, JsonRejection>,
) -> AppResult<Json<AppResponse<ReorderSummary>>>
where
    T: Document,
    ServerState: HasCollection<T>,
{
    let request = body(request)?;
    tracing::info!(
        resource = T::RESOURCE,
        count = request.items.len(),
        "Batch reorder request received"
    );
    let updated = collection::<T>(&state).reorder(&request.items).await?;
    Ok(Json(AppResponse::success(ReorderSummary { updated })))
}
