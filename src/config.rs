use std::env;

/// Default Gemini model used for analysis.
pub const DEFAULT_MODEL: &str = "gemini-3.1-pro-preview";

/// Default Gemini API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Per-attempt request timeout in seconds, equal across all tiers.
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Runtime configuration for the analysis pipeline.
///
/// The credential is ordinary configuration: sourced from the environment or
/// injected by the caller, never baked into the binary.
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl AnalyzerConfig {
    /// Build configuration from the process environment.
    ///
    /// `GEMINI_API_KEY` carries the credential; `QORGAN_MODEL`,
    /// `QORGAN_BASE_URL` and `QORGAN_TIMEOUT_SECS` override the defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_key: env::var("GEMINI_API_KEY").unwrap_or_default(),
            model: env::var("QORGAN_MODEL").unwrap_or(defaults.model),
            base_url: env::var("QORGAN_BASE_URL").unwrap_or(defaults.base_url),
            timeout_secs: env::var("QORGAN_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.timeout_secs),
        }
    }

    /// Configuration with an explicit credential and default everything else.
    pub fn with_api_key(key: &str) -> Self {
        Self {
            api_key: key.to_string(),
            ..Self::default()
        }
    }

    /// Whether a backend credential is present.
    pub fn has_api_key(&self) -> bool {
        !self.api_key.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_target_gemini() {
        let config = AnalyzerConfig::default();
        assert_eq!(config.model, "gemini-3.1-pro-preview");
        assert_eq!(config.base_url, "https://generativelanguage.googleapis.com");
        assert_eq!(config.timeout_secs, 120);
        assert!(!config.has_api_key());
    }

    #[test]
    fn blank_key_is_not_a_credential() {
        let mut config = AnalyzerConfig::default();
        config.api_key = "   ".into();
        assert!(!config.has_api_key());
    }

    #[test]
    fn with_api_key_sets_credential() {
        let config = AnalyzerConfig::with_api_key("test-key");
        assert!(config.has_api_key());
        assert_eq!(config.model, DEFAULT_MODEL);
    }
}
