//! The repository gate: returns the persisted insight for an industry,
//! creating it exactly once on first miss.

use anyhow::{anyhow, Result};
use chrono::{Duration, Utc};
use tracing::warn;

use crate::insights::normalize::InsightPayload;
use crate::insights::pipeline::generate_insights;
use crate::insights::store::{CreateOutcome, InsightStore, NewIndustryInsight};
use crate::llm_client::TextGenerator;
use crate::models::insight::IndustryInsightRow;

/// Advisory refresh horizon stamped on every created record.
pub const NEXT_UPDATE_DAYS: i64 = 7;

/// Returns the insight record for `industry`, creating it on first miss.
///
/// An existing record is returned unchanged; `next_update` is advisory
/// metadata for callers and is never enforced here. On a miss, pipeline
/// failures (upstream outage, unparseable payload) degrade to the default
/// empty payload so the industry always ends up with a record. When a
/// concurrent caller wins the insert race, the locally computed payload is
/// discarded and the winning row is returned.
pub async fn get_or_create_insight(
    store: &dyn InsightStore,
    llm: &dyn TextGenerator,
    industry: &str,
) -> Result<IndustryInsightRow> {
    if let Some(existing) = store.find_by_industry(industry).await? {
        return Ok(existing);
    }

    let payload = match generate_insights(llm, industry).await {
        Ok(payload) => payload,
        Err(e) => {
            warn!("Insight generation failed for '{industry}', storing empty payload: {e}");
            InsightPayload::default()
        }
    };

    let insight = NewIndustryInsight {
        industry,
        payload: &payload,
        next_update: Utc::now() + Duration::days(NEXT_UPDATE_DAYS),
    };

    match store.create_unique(insight).await? {
        CreateOutcome::Created(row) => Ok(row),
        CreateOutcome::Conflict => store.find_by_industry(industry).await?.ok_or_else(|| {
            anyhow!("Insight for '{industry}' vanished after a uniqueness conflict")
        }),
    }
}
