pub mod error;
pub mod render;
pub mod routes;
pub mod state;

use crate::state::AppState;
use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub fn router(state: Arc<AppState>) -> Router {
    routes::system_routes()
        .merge(routes::tracker_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
