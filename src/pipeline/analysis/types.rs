use serde::{Deserialize, Serialize};

/// Ordered severity scale for a single risk finding.
///
/// Closed enumeration: any other token from the backend is a decode failure,
/// never silently coerced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Critical => "Critical",
        }
    }
}

/// Overall risk classification asserted by the backend model and passed
/// through unchanged — never derived locally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    Safe,
    #[serde(rename = "Needs Review")]
    NeedsReview,
    Dangerous,
}

impl Verdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Safe => "Safe",
            Self::NeedsReview => "Needs Review",
            Self::Dangerous => "Dangerous",
        }
    }
}

/// One problematic clause identified by the model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskFinding {
    pub clause: String,
    #[serde(rename = "riskLevel")]
    pub risk_level: Severity,
    pub violation: String,
    pub recommendation: String,
}

/// Complete result of a document analysis. Findings keep source-document
/// order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub summary: String,
    pub risks: Vec<RiskFinding>,
    pub verdict: Verdict,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_is_ordered() {
        assert!(Severity::Low < Severity::Medium);
        assert!(Severity::Medium < Severity::High);
        assert!(Severity::High < Severity::Critical);
    }

    #[test]
    fn severity_tokens_round_trip() {
        for token in ["Low", "Medium", "High", "Critical"] {
            let severity: Severity = serde_json::from_str(&format!("\"{token}\"")).unwrap();
            assert_eq!(severity.as_str(), token);
        }
    }

    #[test]
    fn verdict_needs_review_uses_spaced_token() {
        let verdict: Verdict = serde_json::from_str("\"Needs Review\"").unwrap();
        assert_eq!(verdict, Verdict::NeedsReview);
        assert_eq!(serde_json::to_string(&verdict).unwrap(), "\"Needs Review\"");
    }

    #[test]
    fn out_of_set_severity_rejected() {
        assert!(serde_json::from_str::<Severity>("\"Severe\"").is_err());
    }

    #[test]
    fn out_of_set_verdict_rejected() {
        assert!(serde_json::from_str::<Verdict>("\"NeedsReview\"").is_err());
        assert!(serde_json::from_str::<Verdict>("\"Unknown\"").is_err());
    }
}
