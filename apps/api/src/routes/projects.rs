//! Axum route handlers for the project collection.

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use portfolio_types::{Project, ProjectId, ProjectInput};

use crate::errors::AppError;
use crate::state::AppState;
use crate::validation::validate_project;

/// GET /api/projects
pub async fn handle_list_projects(State(state): State<AppState>) -> Json<Vec<Project>> {
    Json(state.projects.list())
}

/// POST /api/projects
pub async fn handle_create_project(
    State(state): State<AppState>,
    body: Result<Json<ProjectInput>, JsonRejection>,
) -> Result<(StatusCode, Json<Project>), AppError> {
    let Json(input) = body?;
    validate_project(&input)?;
    Ok((StatusCode::CREATED, Json(state.projects.create(input))))
}

/// PUT /api/projects/:id
///
/// Full replacement: every field comes from the body, only the id is kept.
pub async fn handle_update_project(
    State(state): State<AppState>,
    id: Result<Path<ProjectId>, PathRejection>,
    body: Result<Json<ProjectInput>, JsonRejection>,
) -> Result<Json<Project>, AppError> {
    let Path(id) = id?;
    let Json(input) = body?;
    validate_project(&input)?;

    let project = state
        .projects
        .update(id, input)
        .map_err(|e| AppError::NotFound(e.to_string()))?;
    Ok(Json(project))
}

/// DELETE /api/projects/:id
pub async fn handle_delete_project(
    State(state): State<AppState>,
    id: Result<Path<ProjectId>, PathRejection>,
) -> Result<StatusCode, AppError> {
    let Path(id) = id?;
    if state.projects.delete(id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!("Project {id} not found")))
    }
}
