use axum::{extract::State, Json};

use crate::auth::CurrentUser;
use crate::errors::AppError;
use crate::insights::ensure::get_or_create_insight;
use crate::models::insight::IndustryInsightRow;
use crate::profile::service::find_user_by_external_id;
use crate::state::AppState;

/// GET /api/v1/insights
///
/// Returns the shared insight record for the caller's industry, creating
/// it on first miss. Generation failures never surface here; the caller
/// receives the default record instead.
pub async fn handle_get_insights(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<Json<IndustryInsightRow>, AppError> {
    let profile = find_user_by_external_id(&state.db, &user.external_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No profile for user {}", user.external_id)))?;

    let industry = profile
        .industry
        .ok_or_else(|| AppError::Validation("Profile has no industry set".to_string()))?;

    let insight =
        get_or_create_insight(state.insights.as_ref(), state.llm.as_ref(), &industry).await?;

    Ok(Json(insight))
}
