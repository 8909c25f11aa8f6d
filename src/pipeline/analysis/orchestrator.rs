use tokio_util::sync::CancellationToken;

use super::capability::capability_ladder;
use super::client::{GeminiClient, ModelClient};
use super::decode::decode_analysis;
use super::request::build_request;
use super::types::AnalysisResult;
use super::{AnalysisError, AttemptError};
use crate::config::AnalyzerConfig;
use crate::document::{Document, Language};
use crate::pipeline::extraction::extract_content;

/// Runs the full document-to-analysis pipeline: credential check, content
/// extraction, then a descending ladder of up to three invocation attempts
/// that narrows model capabilities after each failure.
pub struct DocumentAnalyzer {
    client: Box<dyn ModelClient + Send + Sync>,
    config: AnalyzerConfig,
}

impl DocumentAnalyzer {
    /// Production analyzer backed by the Gemini HTTP client.
    pub fn from_config(config: AnalyzerConfig) -> Self {
        let client = GeminiClient::new(&config);
        Self {
            client: Box::new(client),
            config,
        }
    }

    /// Analyzer with an injected model client.
    pub fn with_client(config: AnalyzerConfig, client: Box<dyn ModelClient + Send + Sync>) -> Self {
        Self { client, config }
    }

    /// Analyze a document, resolving with a validated result or rejecting
    /// with `MissingApiKey` or `Exhausted`. Intermediate failures are
    /// absorbed by the retry ladder and logged only.
    pub async fn analyze(
        &self,
        document: &Document,
        language: Language,
        deep_analysis: bool,
    ) -> Result<AnalysisResult, AnalysisError> {
        self.analyze_cancellable(document, language, deep_analysis, &CancellationToken::new())
            .await
    }

    /// Like [`analyze`](Self::analyze), with cooperative cancellation:
    /// checked before each tier, and an in-flight call is aborted when the
    /// token fires.
    pub async fn analyze_cancellable(
        &self,
        document: &Document,
        language: Language,
        deep_analysis: bool,
        cancel: &CancellationToken,
    ) -> Result<AnalysisResult, AnalysisError> {
        if !self.config.has_api_key() {
            return Err(AnalysisError::MissingApiKey);
        }

        let content = extract_content(document);
        let ladder = capability_ladder(deep_analysis);

        let mut last_failure: Option<AttemptError> = None;

        for (index, tier) in ladder.iter().enumerate() {
            let attempt = index + 1;

            if cancel.is_cancelled() {
                return Err(AnalysisError::Cancelled);
            }

            let request = build_request(&content, language, *tier);
            tracing::info!(
                document = %document.name(),
                attempt,
                reasoning = tier.elevated_reasoning,
                search = tier.web_search,
                "Invoking model"
            );

            let outcome = tokio::select! {
                _ = cancel.cancelled() => return Err(AnalysisError::Cancelled),
                outcome = self.client.generate(&request) => outcome,
            };

            let failure = match outcome {
                Ok(body) => match decode_analysis(&body) {
                    Ok(result) => {
                        tracing::info!(
                            document = %document.name(),
                            attempt,
                            risks = result.risks.len(),
                            verdict = result.verdict.as_str(),
                            "Analysis complete"
                        );
                        return Ok(result);
                    }
                    Err(e) => e,
                },
                Err(e) => e,
            };

            tracing::warn!(
                document = %document.name(),
                attempt,
                error = %failure,
                "Attempt failed"
            );
            last_failure = Some(failure);
        }

        Err(AnalysisError::Exhausted {
            source: last_failure.unwrap_or(AttemptError::EmptyResponse),
        })
    }
}
