use crate::document::Language;

/// Fixed system instruction. Constant across languages and attempts; the
/// target language is carried by the per-call user prompt.
pub const SYSTEM_PROMPT: &str = r#"
You are an expert legal analyst specialized in the legislation of the Republic of Kazakhstan.
Your analysis must be strictly based on the Civil Code, Tax Code, and Labor Code of the Republic of Kazakhstan.

Your task is to analyze legal documents and identify potential risks, clauses that violate Kazakhstani law, or unfavorable terms.

You must provide the output in the following JSON format:
{
  "summary": "A concise summary of the document.",
  "risks": [
    {
      "clause": "The specific clause text or reference.",
      "riskLevel": "Low" | "Medium" | "High" | "Critical",
      "violation": "Explanation of how this violates Kazakhstani law or why it is risky.",
      "recommendation": "Actionable advice to mitigate the risk."
    }
  ],
  "verdict": "Safe" | "Needs Review" | "Dangerous"
}

The output language must match the requested language (en, ru, or kz).
"#;

/// Per-call user instruction. Identical across the attempts of one analysis.
pub fn build_user_prompt(language: Language) -> String {
    format!(
        "Analyze this legal document in {}. Focus on the legislation of the Republic of Kazakhstan.",
        language.as_str()
    )
}

/// Structured-output schema attached to every attempt regardless of tier.
/// Capability tiers drop reasoning and search, never schema enforcement.
pub fn response_schema() -> serde_json::Value {
    serde_json::json!({
        "type": "OBJECT",
        "properties": {
            "summary": { "type": "STRING" },
            "risks": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "clause": { "type": "STRING" },
                        "riskLevel": {
                            "type": "STRING",
                            "enum": ["Low", "Medium", "High", "Critical"]
                        },
                        "violation": { "type": "STRING" },
                        "recommendation": { "type": "STRING" }
                    },
                    "required": ["clause", "riskLevel", "violation", "recommendation"]
                }
            },
            "verdict": {
                "type": "STRING",
                "enum": ["Safe", "Needs Review", "Dangerous"]
            }
        },
        "required": ["summary", "risks", "verdict"]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_prompt_embeds_language_code() {
        for language in [Language::En, Language::Ru, Language::Kz] {
            let prompt = build_user_prompt(language);
            assert!(prompt.contains(language.as_str()));
        }
    }

    #[test]
    fn schema_requires_all_top_level_fields() {
        let schema = response_schema();
        let required: Vec<&str> = schema["required"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap())
            .collect();
        assert_eq!(required, vec!["summary", "risks", "verdict"]);
    }

    #[test]
    fn schema_closes_the_enumerations() {
        let schema = response_schema();
        let levels = &schema["properties"]["risks"]["items"]["properties"]["riskLevel"]["enum"];
        assert_eq!(levels.as_array().unwrap().len(), 4);
        let verdicts = &schema["properties"]["verdict"]["enum"];
        assert_eq!(verdicts.as_array().unwrap().len(), 3);
    }

    #[test]
    fn system_prompt_mandates_kazakhstan_grounding() {
        assert!(SYSTEM_PROMPT.contains("Republic of Kazakhstan"));
        assert!(SYSTEM_PROMPT.contains("JSON"));
    }
}
