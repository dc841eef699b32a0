pub mod bio;
pub mod health;
pub mod profile;
pub mod projects;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/profile",
            get(profile::handle_get_profile).put(profile::handle_replace_profile),
        )
        .route(
            "/api/projects",
            get(projects::handle_list_projects).post(projects::handle_create_project),
        )
        .route(
            "/api/projects/:id",
            put(projects::handle_update_project).delete(projects::handle_delete_project),
        )
        .route("/api/generate-bio", post(bio::handle_generate_bio))
        .with_state(state)
}
