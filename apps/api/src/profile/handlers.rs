use axum::{extract::State, Json};

use crate::auth::CurrentUser;
use crate::errors::AppError;
use crate::models::user::UserRow;
use crate::profile::service::{
    find_user_by_external_id, update_profile, OnboardingStatus, UpdateProfileRequest,
};
use crate::state::AppState;

/// PUT /api/v1/profile
///
/// Updates the caller's profile and ensures the insight record exists for
/// the submitted industry. Identity and validation failures surface as
/// themselves; everything else inside the combined flow is collapsed to
/// the opaque profile-update error.
pub async fn handle_update_profile(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(request): Json<UpdateProfileRequest>,
) -> Result<Json<UserRow>, AppError> {
    let profile = find_user_by_external_id(&state.db, &user.external_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No profile for user {}", user.external_id)))?;

    if request.industry.trim().is_empty() {
        return Err(AppError::Validation(
            "Industry must not be empty".to_string(),
        ));
    }

    let updated = update_profile(
        &state.db,
        state.insights.as_ref(),
        state.llm.as_ref(),
        &profile,
        &request,
    )
    .await
    .map_err(AppError::ProfileUpdate)?;

    Ok(Json(updated))
}

/// GET /api/v1/profile/onboarding
pub async fn handle_onboarding_status(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<Json<OnboardingStatus>, AppError> {
    let profile = find_user_by_external_id(&state.db, &user.external_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No profile for user {}", user.external_id)))?;

    Ok(Json(OnboardingStatus {
        is_onboarded: profile.industry.is_some(),
    }))
}
