// Industry insight prompt templates.
// All prompts for the insights module are defined here.

pub const INSIGHT_SYSTEM: &str = "\
You are a precise labor-market analyst. \
You MUST respond with valid JSON only. \
Do NOT include any text outside the JSON object. \
Do NOT use markdown code fences. \
Do NOT include explanations or apologies.";

pub const INSIGHT_PROMPT_TEMPLATE: &str = r#"Analyze the current state of the {industry} industry and provide insights in ONLY the following JSON format without any additional notes or explanations:
{
  "salaryRanges": [
    { "role": "string", "min": number, "max": number, "median": number, "location": "string" }
  ],
  "growthRate": number,
  "demandLevel": "High" | "Medium" | "Low",
  "topSkills": ["skill1", "skill2"],
  "marketOutlook": "Positive" | "Neutral" | "Negative",
  "keyTrends": ["trend1", "trend2"],
  "recommendedSkills": [
    {
      "skill": "string",
      "sources": [
        { "name": "string", "type": "Video" | "Course" | "Documentation" | "Article", "url": "string" }
      ]
    }
  ]
}

IMPORTANT:
- Return ONLY the JSON. No extra text, no markdown formatting.
- Include at least 5 common roles for salary ranges.
- Growth rate should be a percentage number.
- Include at least 5 skills and 5 trends.
- For each recommended skill, provide exactly 3 trusted sources (official docs, videos, or courses)."#;

/// Builds the instruction text for one industry. Pure template expansion,
/// no side effects.
pub fn build_insight_prompt(industry: &str) -> String {
    INSIGHT_PROMPT_TEMPLATE.replace("{industry}", industry)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_names_the_industry() {
        let prompt = build_insight_prompt("Cybersecurity");
        assert!(prompt.contains("the Cybersecurity industry"));
        assert!(!prompt.contains("{industry}"));
    }

    #[test]
    fn test_prompt_states_schema_and_enums() {
        let prompt = build_insight_prompt("Finance");
        for field in [
            "salaryRanges",
            "growthRate",
            "demandLevel",
            "topSkills",
            "marketOutlook",
            "keyTrends",
            "recommendedSkills",
        ] {
            assert!(prompt.contains(field), "prompt missing field {field}");
        }
        assert!(prompt.contains(r#""High" | "Medium" | "Low""#));
        assert!(prompt.contains(r#""Positive" | "Neutral" | "Negative""#));
    }

    #[test]
    fn test_prompt_states_minimum_cardinalities() {
        let prompt = build_insight_prompt("Finance");
        assert!(prompt.contains("at least 5 common roles"));
        assert!(prompt.contains("at least 5 skills and 5 trends"));
        assert!(prompt.contains("exactly 3 trusted sources"));
    }

    #[test]
    fn test_prompt_forbids_markdown_wrapping() {
        let prompt = build_insight_prompt("Finance");
        assert!(prompt.contains("no markdown formatting"));
        assert!(INSIGHT_SYSTEM.contains("markdown code fences"));
    }
}
