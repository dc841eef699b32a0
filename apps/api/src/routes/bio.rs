use axum::{extract::rejection::JsonRejection, extract::State, Json};
use portfolio_types::{BioRequest, BioResponse};

use crate::errors::AppError;
use crate::state::AppState;
use crate::validation::validate_bio_request;

/// POST /api/generate-bio
pub async fn handle_generate_bio(
    State(state): State<AppState>,
    body: Result<Json<BioRequest>, JsonRejection>,
) -> Result<Json<BioResponse>, AppError> {
    let Json(request) = body?;
    validate_bio_request(&request)?;

    let bio = state.bio.generate(&request.skills, &request.title).await?;
    if bio.trim().is_empty() {
        return Err(AppError::Internal(anyhow::anyhow!(
            "bio generator returned empty text"
        )));
    }
    Ok(Json(BioResponse { bio }))
}
