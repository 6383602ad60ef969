use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

/// A persisted industry insight record. At most one row exists per industry,
/// enforced by the UNIQUE constraint on `industry`.
///
/// `salary_ranges` and `recommended_skills` are stored losslessly as JSONB
/// documents; `top_skills` and `key_trends` as ordered text arrays.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct IndustryInsightRow {
    pub id: Uuid,
    pub industry: String,
    pub salary_ranges: Value,
    pub growth_rate: f64,
    pub demand_level: String,
    pub top_skills: Vec<String>,
    pub market_outlook: String,
    pub key_trends: Vec<String>,
    pub recommended_skills: Value,
    pub created_at: DateTime<Utc>,
    /// Advisory regeneration timestamp, 7 days after creation. Callers decide
    /// whether to act on it; the gate never refreshes an existing row.
    pub next_update: DateTime<Utc>,
}
