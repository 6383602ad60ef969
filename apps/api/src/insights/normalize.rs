//! Schema Normalizer: coerces arbitrary decoded model output into the
//! canonical insight payload.
//!
//! Normalization is total. Every field has an independent coercion rule
//! with a safe default, so a maximally malformed input yields a payload of
//! all defaults rather than an error. The one exception to defaulting is
//! `salaryRanges`: entries without a usable role and numeric bounds are
//! dropped outright, because a placeholder salary band would be misleading
//! where an empty skill string is merely useless.

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const MAX_TOP_SKILLS: usize = 10;
pub const MAX_KEY_TRENDS: usize = 10;
pub const MAX_SOURCES_PER_SKILL: usize = 3;

const DEFAULT_SOURCE_TYPE: &str = "Article";

/// Hiring demand for an industry. Unknown values collapse to `Medium`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DemandLevel {
    High,
    #[default]
    Medium,
    Low,
}

impl DemandLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            DemandLevel::High => "High",
            DemandLevel::Medium => "Medium",
            DemandLevel::Low => "Low",
        }
    }

    /// Exact, case-sensitive membership test; anything else is the default.
    fn from_value(value: Option<&Value>) -> Self {
        match value.and_then(Value::as_str) {
            Some("High") => DemandLevel::High,
            Some("Medium") => DemandLevel::Medium,
            Some("Low") => DemandLevel::Low,
            _ => DemandLevel::Medium,
        }
    }
}

/// Overall market direction. Unknown values collapse to `Neutral`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarketOutlook {
    Positive,
    #[default]
    Neutral,
    Negative,
}

impl MarketOutlook {
    pub fn as_str(&self) -> &'static str {
        match self {
            MarketOutlook::Positive => "Positive",
            MarketOutlook::Neutral => "Neutral",
            MarketOutlook::Negative => "Negative",
        }
    }

    fn from_value(value: Option<&Value>) -> Self {
        match value.and_then(Value::as_str) {
            Some("Positive") => MarketOutlook::Positive,
            Some("Neutral") => MarketOutlook::Neutral,
            Some("Negative") => MarketOutlook::Negative,
            _ => MarketOutlook::Neutral,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryRange {
    pub role: String,
    pub min: f64,
    pub max: f64,
    pub median: f64,
    pub location: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillSource {
    pub name: String,
    #[serde(rename = "type")]
    pub source_type: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendedSkill {
    pub skill: String,
    pub sources: Vec<SkillSource>,
}

/// The fully normalized, schema-valid insight payload. `Default` is the
/// empty/neutral record the gate persists when generation fails upstream.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightPayload {
    pub salary_ranges: Vec<SalaryRange>,
    pub growth_rate: f64,
    pub demand_level: DemandLevel,
    pub top_skills: Vec<String>,
    pub market_outlook: MarketOutlook,
    pub key_trends: Vec<String>,
    pub recommended_skills: Vec<RecommendedSkill>,
}

/// Coerces an arbitrary decoded value into a complete `InsightPayload`.
/// Never fails: a non-object input produces the all-defaults payload.
pub fn normalize(value: &Value) -> InsightPayload {
    InsightPayload {
        salary_ranges: normalize_salary_ranges(value.get("salaryRanges")),
        growth_rate: coerce_number(value.get("growthRate")).unwrap_or(0.0),
        demand_level: DemandLevel::from_value(value.get("demandLevel")),
        top_skills: normalize_string_list(value.get("topSkills"), MAX_TOP_SKILLS),
        market_outlook: MarketOutlook::from_value(value.get("marketOutlook")),
        key_trends: normalize_string_list(value.get("keyTrends"), MAX_KEY_TRENDS),
        recommended_skills: normalize_recommended_skills(value.get("recommendedSkills")),
    }
}

/// Recursively flattens nested arrays to the leaf values. The model
/// sometimes wraps an array inside extra array layers. Non-array input
/// yields an empty sequence.
fn flattened_items(value: Option<&Value>) -> Vec<&Value> {
    let mut out = Vec::new();
    if let Some(Value::Array(items)) = value {
        for item in items {
            push_flattened(item, &mut out);
        }
    }
    out
}

fn push_flattened<'a>(value: &'a Value, out: &mut Vec<&'a Value>) {
    match value {
        Value::Array(items) => {
            for item in items {
                push_flattened(item, out);
            }
        }
        leaf => out.push(leaf),
    }
}

/// Native numbers pass through; anything else is stringified, stripped of
/// all non-digit/non-dot characters, and parsed. `None` when no number
/// survives ("n/a", missing field, empty string).
fn coerce_number(value: Option<&Value>) -> Option<f64> {
    let value = value?;
    if let Some(n) = value.as_f64() {
        return Some(n);
    }
    let cleaned: String = stringify(value)
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    cleaned.parse::<f64>().ok()
}

/// String values pass through; null becomes the empty string; other
/// scalars and composites take their JSON rendering.
fn stringify(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Flatten, cap, then stringify each surviving leaf.
fn normalize_string_list(value: Option<&Value>, cap: usize) -> Vec<String> {
    flattened_items(value)
        .into_iter()
        .take(cap)
        .map(stringify)
        .collect()
}

fn normalize_salary_ranges(value: Option<&Value>) -> Vec<SalaryRange> {
    flattened_items(value)
        .into_iter()
        .filter_map(salary_range_from_value)
        .collect()
}

/// Entries missing a non-empty role or a numeric min/max are dropped, not
/// defaulted. Zero is accepted as a legitimate salary boundary (the source
/// system dropped zero bounds as a side effect of truthiness filtering).
fn salary_range_from_value(value: &Value) -> Option<SalaryRange> {
    let map = value.as_object()?;
    let role = map.get("role").map(stringify).filter(|r| !r.is_empty())?;
    let min = coerce_number(map.get("min"))?;
    let max = coerce_number(map.get("max"))?;

    Some(SalaryRange {
        role,
        min,
        max,
        median: coerce_number(map.get("median")).unwrap_or(0.0),
        location: map.get("location").map(stringify).unwrap_or_default(),
    })
}

fn normalize_recommended_skills(value: Option<&Value>) -> Vec<RecommendedSkill> {
    flattened_items(value)
        .into_iter()
        .map(recommended_skill_from_value)
        .collect()
}

fn recommended_skill_from_value(value: &Value) -> RecommendedSkill {
    let sources = flattened_items(value.get("sources"))
        .into_iter()
        .take(MAX_SOURCES_PER_SKILL)
        .map(source_from_value)
        .collect();

    RecommendedSkill {
        skill: value.get("skill").map(stringify).unwrap_or_default(),
        sources,
    }
}

fn source_from_value(value: &Value) -> SkillSource {
    SkillSource {
        name: value.get("name").map(stringify).unwrap_or_default(),
        source_type: value
            .get("type")
            .map(stringify)
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| DEFAULT_SOURCE_TYPE.to_string()),
        url: value.get("url").map(stringify).unwrap_or_default(),
    }
}
