// Industry insight pipeline.
// Implements: prompt building, model call, sanitizing, parsing,
// normalization, and the get-or-create repository gate.
// All LLM calls go through llm_client; no direct API calls here.

pub mod ensure;
pub mod handlers;
pub mod normalize;
pub mod pipeline;
pub mod prompts;
pub mod sanitize;
pub mod store;
