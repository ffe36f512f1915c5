pub mod scores;
pub mod system;

use crate::state::AppState;
use axum::Router;
use std::sync::Arc;

pub fn system_routes() -> Router<Arc<AppState>> {
    Router::new().route("/health", axum::routing::get(system::health))
}

pub fn tracker_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", axum::routing::get(scores::index))
        .route("/add", axum::routing::post(scores::add))
        .route("/view", axum::routing::get(scores::view))
        .route(
            "/delete_raw/{index}",
            axum::routing::post(scores::delete_raw),
        )
        .route(
            "/delete_avg/{index}",
            axum::routing::post(scores::delete_avg),
        )
}
