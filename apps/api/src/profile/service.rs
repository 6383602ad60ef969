use anyhow::Result;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::insights::ensure::get_or_create_insight;
use crate::insights::store::InsightStore;
use crate::llm_client::TextGenerator;
use crate::models::user::UserRow;

#[derive(Debug, Deserialize)]
pub struct UpdateProfileRequest {
    pub industry: String,
    pub experience_years: Option<i32>,
    pub bio: Option<String>,
    pub skills: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct OnboardingStatus {
    pub is_onboarded: bool,
}

pub async fn find_user_by_external_id(
    pool: &PgPool,
    external_id: &str,
) -> Result<Option<UserRow>, sqlx::Error> {
    sqlx::query_as::<_, UserRow>("SELECT * FROM users WHERE external_id = $1")
        .bind(external_id)
        .fetch_optional(pool)
        .await
}

/// Ensures the insight record exists for the (possibly new) industry, then
/// updates the caller's own profile fields and returns the updated row.
///
/// The industry may differ from the user's previous one; an existing record
/// for it is never overwritten. Pipeline failures are absorbed inside the
/// gate, so the only errors escaping here are storage-level, and the
/// handler collapses those to the opaque profile-update failure.
pub async fn update_profile(
    pool: &PgPool,
    store: &dyn InsightStore,
    llm: &dyn TextGenerator,
    user: &UserRow,
    request: &UpdateProfileRequest,
) -> Result<UserRow> {
    get_or_create_insight(store, llm, &request.industry).await?;

    let updated = sqlx::query_as::<_, UserRow>(
        r#"
        UPDATE users
        SET industry = $1, experience_years = $2, bio = $3, skills = $4, updated_at = now()
        WHERE id = $5
        RETURNING *
        "#,
    )
    .bind(&request.industry)
    .bind(request.experience_years)
    .bind(request.bio.as_deref())
    .bind(&request.skills)
    .bind(user.id)
    .fetch_one(pool)
    .await?;

    Ok(updated)
}
