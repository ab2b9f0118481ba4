//! HTTP API

pub mod resource;

use axum::Router;
use http::Uri;
use shared::error::AppError;
use shared::{JourneyEntry, Project};

use crate::core::ServerState;

/// Build the Axum router (without state)
pub fn build_app() -> Router<ServerState> {
    Router::<ServerState>::new()
        .merge(resource::router::<Project>())
        .merge(resource::router::<JourneyEntry>())
        .fallback(fallback)
}

async fn fallback(uri: Uri) -> AppError {
    AppError::not_found(format!("Route {}", uri.path()))
}
