use serde::Serialize;

use super::capability::CapabilityTier;
use super::prompt::{build_user_prompt, response_schema, SYSTEM_PROMPT};
use crate::document::Language;
use crate::pipeline::extraction::DocumentContent;

/// Request body for Gemini `models/{model}:generateContent`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub system_instruction: Content,
    pub contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tools: Option<Vec<Tool>>,
    pub generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
pub struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<&'static str>,
    pub parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Part {
    Text {
        text: String,
    },
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: InlineData,
    },
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    pub mime_type: String,
    pub data: String,
}

#[derive(Debug, Serialize)]
pub struct Tool {
    #[serde(rename = "googleSearch")]
    pub google_search: serde_json::Value,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub response_mime_type: &'static str,
    pub response_schema: serde_json::Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thinking_config: Option<ThinkingConfig>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThinkingConfig {
    pub thinking_level: &'static str,
}

/// Assemble one fully-formed invocation request for a capability tier.
///
/// Text content rides inside the prompt; binary content becomes an
/// `inlineData` part followed by the prompt. The response schema is attached
/// unconditionally.
pub fn build_request(
    content: &DocumentContent,
    language: Language,
    tier: CapabilityTier,
) -> GenerateContentRequest {
    let prompt = build_user_prompt(language);

    let parts = match content {
        DocumentContent::Text(text) => vec![Part::Text {
            text: format!("{prompt}\n\nDocument Content:\n{text}"),
        }],
        DocumentContent::Binary { data, mime_type } => vec![
            Part::InlineData {
                inline_data: InlineData {
                    mime_type: mime_type.clone(),
                    data: data.clone(),
                },
            },
            Part::Text { text: prompt },
        ],
    };

    GenerateContentRequest {
        system_instruction: Content {
            role: None,
            parts: vec![Part::Text {
                text: SYSTEM_PROMPT.to_string(),
            }],
        },
        contents: vec![Content {
            role: Some("user"),
            parts,
        }],
        tools: tier
            .web_search
            .then(|| vec![Tool {
                google_search: serde_json::json!({}),
            }]),
        generation_config: GenerationConfig {
            response_mime_type: "application/json",
            response_schema: response_schema(),
            thinking_config: tier.elevated_reasoning.then(|| ThinkingConfig {
                thinking_level: "HIGH",
            }),
        },
    }
}
