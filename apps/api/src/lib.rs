pub mod bio;
pub mod config;
pub mod errors;
pub mod routes;
pub mod state;
pub mod store;
pub mod validation;

use axum::Router;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::routes::build_router;
use crate::state::AppState;

/// The full HTTP application: routes plus tracing and CORS layers.
pub fn build_app(state: AppState) -> Router {
    build_router(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive()), // TODO: restrict origins once the frontend host is fixed
    )
}
