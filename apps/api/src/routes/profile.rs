use axum::{extract::rejection::JsonRejection, extract::State, Json};
use portfolio_types::Profile;

use crate::errors::AppError;
use crate::state::AppState;
use crate::validation::validate_profile;

/// GET /api/profile
pub async fn handle_get_profile(State(state): State<AppState>) -> Json<Profile> {
    Json(state.profile.get())
}

/// PUT /api/profile
///
/// Replaces the whole profile. Fields left out of the body are cleared.
pub async fn handle_replace_profile(
    State(state): State<AppState>,
    body: Result<Json<Profile>, JsonRejection>,
) -> Result<Json<Profile>, AppError> {
    let Json(profile) = body?;
    validate_profile(&profile)?;
    Ok(Json(state.profile.replace(profile)))
}
