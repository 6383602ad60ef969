//! The generation pipeline: prompt, model call, sanitize, parse, normalize.

use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::insights::normalize::{normalize, InsightPayload};
use crate::insights::prompts::{build_insight_prompt, INSIGHT_SYSTEM};
use crate::insights::sanitize::strip_code_fences;
use crate::llm_client::{LlmError, TextGenerator};

/// The complete failure surface of the pipeline. Everything past the parse
/// step is infallible: malformed field values are the normalizer's job.
#[derive(Debug, Error)]
pub enum InsightError {
    /// The model call failed at the transport or service level.
    #[error("text generation unavailable: {0}")]
    UpstreamUnavailable(#[from] LlmError),

    /// The sanitized response did not decode as JSON.
    #[error("model returned a malformed payload: {0}")]
    MalformedPayload(String),
}

/// Runs the full generation pipeline for one industry and returns a
/// schema-valid payload. Exactly one model call per invocation, no retries.
pub async fn generate_insights(
    llm: &dyn TextGenerator,
    industry: &str,
) -> Result<InsightPayload, InsightError> {
    let prompt = build_insight_prompt(industry);
    let raw = llm.generate(&prompt, INSIGHT_SYSTEM).await?;

    let candidate = strip_code_fences(&raw);
    let decoded: Value = serde_json::from_str(&candidate)
        .map_err(|e| InsightError::MalformedPayload(e.to_string()))?;

    debug!("Decoded insight payload for industry '{industry}'");
    Ok(normalize(&decoded))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::insights::normalize::DemandLevel;
    use async_trait::async_trait;

    struct StaticGenerator(&'static str);

    #[async_trait]
    impl TextGenerator for StaticGenerator {
        async fn generate(&self, _prompt: &str, _system: &str) -> Result<String, LlmError> {
            Ok(self.0.to_string())
        }
    }

    struct FailingGenerator;

    #[async_trait]
    impl TextGenerator for FailingGenerator {
        async fn generate(&self, _prompt: &str, _system: &str) -> Result<String, LlmError> {
            Err(LlmError::Api {
                status: 503,
                message: "overloaded".to_string(),
            })
        }
    }

    #[tokio::test]
    async fn test_fenced_malformed_fields_are_normalized() {
        let llm = StaticGenerator(
            "```json\n{\"growthRate\":\"15%\",\"demandLevel\":\"Extreme\",\"topSkills\":[[\"Go\"],[\"Rust\"]]}\n```",
        );
        let payload = generate_insights(&llm, "Tech").await.unwrap();
        assert_eq!(payload.growth_rate, 15.0);
        assert_eq!(payload.demand_level, DemandLevel::Medium);
        assert_eq!(payload.top_skills, vec!["Go", "Rust"]);
    }

    #[tokio::test]
    async fn test_prose_response_is_malformed_payload() {
        let llm = StaticGenerator("Sorry, I cannot help.");
        let err = generate_insights(&llm, "Tech").await.unwrap_err();
        assert!(matches!(err, InsightError::MalformedPayload(_)));
    }

    #[tokio::test]
    async fn test_transport_failure_is_upstream_unavailable() {
        let err = generate_insights(&FailingGenerator, "Tech")
            .await
            .unwrap_err();
        assert!(matches!(err, InsightError::UpstreamUnavailable(_)));
    }

    #[tokio::test]
    async fn test_unfenced_clean_json_parses_directly() {
        let llm = StaticGenerator("{\"growthRate\": 3.5, \"marketOutlook\": \"Positive\"}");
        let payload = generate_insights(&llm, "Finance").await.unwrap();
        assert_eq!(payload.growth_rate, 3.5);
    }
}
