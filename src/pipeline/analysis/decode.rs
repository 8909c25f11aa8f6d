use super::types::AnalysisResult;
use super::AttemptError;

/// Parse the model's raw response body into a validated analysis result.
///
/// Fails on an empty body, malformed JSON, any missing required field, and
/// any enumeration token outside the closed severity/verdict sets.
pub fn decode_analysis(body: &str) -> Result<AnalysisResult, AttemptError> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return Err(AttemptError::EmptyResponse);
    }

    let json = strip_json_fence(trimmed);
    serde_json::from_str(json).map_err(|e| AttemptError::Decode(e.to_string()))
}

/// Strip a Markdown ```json fence if the model wrapped its output in one
/// despite the JSON response directive.
fn strip_json_fence(body: &str) -> &str {
    let Some(rest) = body
        .strip_prefix("```json")
        .or_else(|| body.strip_prefix("```"))
    else {
        return body;
    };

    match rest.rfind("```") {
        Some(end) => rest[..end].trim(),
        None => rest.trim(),
    }
}
