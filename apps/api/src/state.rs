use std::sync::Arc;

use sqlx::PgPool;

use crate::insights::store::InsightStore;
use crate::llm_client::TextGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    /// Stateless text-generation collaborator. `LlmClient` in production,
    /// stub generators in tests.
    pub llm: Arc<dyn TextGenerator>,
    /// Insight persistence behind a trait so the repository gate can be
    /// exercised against an in-memory store in tests.
    pub insights: Arc<dyn InsightStore>,
}
