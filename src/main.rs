use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use qorgan::{AnalysisResult, AnalyzerConfig, Document, DocumentAnalyzer, Language};

#[derive(Parser, Debug)]
#[command(
    name = "qorgan",
    version,
    about = "Legal document risk analysis for the Republic of Kazakhstan"
)]
struct Cli {
    /// Document to analyze (PDF, DOCX, text, markdown or image).
    file: PathBuf,

    /// Report language.
    #[arg(long, default_value = "en")]
    language: Language,

    /// Request elevated reasoning and live web search.
    #[arg(long)]
    deep: bool,

    /// Output machine-readable JSON.
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let document = match Document::from_path(&cli.file).await {
        Ok(document) => document,
        Err(e) => {
            eprintln!("error: cannot read {}: {e}", cli.file.display());
            return ExitCode::FAILURE;
        }
    };

    let analyzer = DocumentAnalyzer::from_config(AnalyzerConfig::from_env());

    match analyzer.analyze(&document, cli.language, cli.deep).await {
        Ok(result) => {
            print_report(&result, cli.json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn print_report(result: &AnalysisResult, json: bool) {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(result).unwrap_or_default()
        );
        return;
    }

    println!("Verdict: {}", result.verdict.as_str());
    println!();
    println!("{}", result.summary);
    println!();

    if result.risks.is_empty() {
        println!("No risk findings.");
        return;
    }

    for (index, risk) in result.risks.iter().enumerate() {
        println!("{}. [{}] {}", index + 1, risk.risk_level.as_str(), risk.clause);
        println!("   Violation: {}", risk.violation);
        println!("   Recommendation: {}", risk.recommendation);
    }
}
