//! Ordered collection API, mounted once per entity type

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::{HasCollection, ServerState};
use crate::store::Document;

pub use handler::ReorderSummary;

/// `/api/<resource>` routes for `T`
pub fn router<T>() -> Router<ServerState>
where
    T: Document,
    ServerState: HasCollection<T>,
{
    Router::new().nest(&format!("/api/{}", T::RESOURCE), routes::<T>())
}

fn routes<T>() -> Router<ServerState>
where
    T: Document,
    ServerState: HasCollection<T>,
{
    Router::new()
        .route(
            "/",
            get(handler::list::<T>)
                .post(handler::create::<T>)
                .put(handler::update::<T>)
                .delete(handler::delete::<T>),
        )
        .route("/reorder", post(handler::reorder::<T>))
}
