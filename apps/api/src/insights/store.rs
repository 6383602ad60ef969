//! Insight persistence. At-most-one record per industry is enforced at the
//! storage boundary (the UNIQUE constraint), not by application locking:
//! multiple process instances may run concurrently, so an in-process lock
//! would not cover the race. Losers of the insert race re-read the winner.

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::insights::normalize::InsightPayload;
use crate::models::insight::IndustryInsightRow;

/// A record to persist for an industry that has no row yet.
pub struct NewIndustryInsight<'a> {
    pub industry: &'a str,
    pub payload: &'a InsightPayload,
    pub next_update: DateTime<Utc>,
}

/// Outcome of a uniqueness-constrained insert.
pub enum CreateOutcome {
    Created(IndustryInsightRow),
    /// A concurrent writer created the row first. The caller's payload is
    /// discarded; re-read to obtain the winning record.
    Conflict,
}

#[async_trait]
pub trait InsightStore: Send + Sync {
    async fn find_by_industry(&self, industry: &str) -> Result<Option<IndustryInsightRow>>;

    /// Inserts at most one row per industry. Never overwrites.
    async fn create_unique(&self, insight: NewIndustryInsight<'_>) -> Result<CreateOutcome>;
}

/// Production store backed by the `industry_insights` table.
pub struct PgInsightStore {
    pool: PgPool,
}

impl PgInsightStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl InsightStore for PgInsightStore {
    async fn find_by_industry(&self, industry: &str) -> Result<Option<IndustryInsightRow>> {
        Ok(sqlx::query_as::<_, IndustryInsightRow>(
            "SELECT * FROM industry_insights WHERE industry = $1",
        )
        .bind(industry)
        .fetch_optional(&self.pool)
        .await?)
    }

    async fn create_unique(&self, insight: NewIndustryInsight<'_>) -> Result<CreateOutcome> {
        let payload = insight.payload;
        let salary_ranges = serde_json::to_value(&payload.salary_ranges)?;
        let recommended_skills = serde_json::to_value(&payload.recommended_skills)?;

        let row = sqlx::query_as::<_, IndustryInsightRow>(
            r#"
            INSERT INTO industry_insights
                (industry, salary_ranges, growth_rate, demand_level, top_skills,
                 market_outlook, key_trends, recommended_skills, next_update)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            ON CONFLICT (industry) DO NOTHING
            RETURNING *
            "#,
        )
        .bind(insight.industry)
        .bind(salary_ranges)
        .bind(payload.growth_rate)
        .bind(payload.demand_level.as_str())
        .bind(&payload.top_skills)
        .bind(payload.market_outlook.as_str())
        .bind(&payload.key_trends)
        .bind(recommended_skills)
        .bind(insight.next_update)
        .fetch_optional(&self.pool)
        .await?;

        Ok(match row {
            Some(row) => CreateOutcome::Created(row),
            None => CreateOutcome::Conflict,
        })
    }
}
