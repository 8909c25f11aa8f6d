//! Qorgan analyzes legal documents against the legislation of the Republic
//! of Kazakhstan using a remote generative AI backend.
//!
//! The pipeline ingests a document of heterogeneous format, normalizes it
//! into a model request (inline text for DOCX, base64 binary for everything
//! else), and issues the request through a descending three-tier capability
//! ladder: elevated reasoning and web search are dropped tier by tier until
//! a schema-valid structured result is obtained or the ladder is exhausted.
//! The response schema itself is attached to every attempt and never
//! dropped.
//!
//! ```no_run
//! use qorgan::{AnalyzerConfig, Document, DocumentAnalyzer, Language};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let analyzer = DocumentAnalyzer::from_config(AnalyzerConfig::from_env());
//! let document = Document::from_path("contract.pdf".as_ref()).await?;
//! let report = analyzer.analyze(&document, Language::Ru, true).await?;
//! println!("{}: {} findings", report.verdict.as_str(), report.risks.len());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod document;
pub mod pipeline;

pub use config::AnalyzerConfig;
pub use document::{Document, Language};
pub use pipeline::analysis::{
    AnalysisError, AnalysisResult, DocumentAnalyzer, RiskFinding, Severity, Verdict,
};
