//! Presentation adapter
//!
//! Derives display primitives from an `AnalysisResult` without
//! re-deriving domain decisions: percentage, risk tier, summary sentence
//! and the flag list shown on the result card.

use serde::Serialize;

use super::aggregate::{AnalysisResult, Verdict};

/// Placeholder entry shown when a result carries no flags.
pub const NO_DETAILS_PLACEHOLDER: &str = "No extra details.";

/// Coarse risk bucket derived from the score, for display only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskTier {
    Safe,
    Medium,
    High,
}

impl RiskTier {
    /// Band boundaries are inclusive on the lower side: exactly 40 is
    /// medium, exactly 70 is high.
    pub fn from_percent(pct: i64) -> Self {
        if pct < 40 {
            RiskTier::Safe
        } else if pct < 70 {
            RiskTier::Medium
        } else {
            RiskTier::High
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskTier::Safe => "safe",
            RiskTier::Medium => "medium",
            RiskTier::High => "high",
        }
    }
}

/// Rounded percentage for the meter, or `None` when the result has no
/// score.
pub fn score_percent(result: &AnalysisResult) -> Option<i64> {
    result.score.map(|s| (s * 100.0).round() as i64)
}

/// Fixed one-line summary for each verdict.
pub fn summary(label: Verdict) -> &'static str {
    match label {
        Verdict::Fake => "Looks FAKE / high risk.",
        Verdict::Real => "Looks REAL / low risk.",
        Verdict::Unknown => "Not sure. Be careful.",
    }
}

/// Flag chips for the result card: the flags themselves, or a single
/// placeholder when there are none.
pub fn flags_or_placeholder(flags: &[String]) -> Vec<String> {
    if flags.is_empty() {
        vec![NO_DETAILS_PLACEHOLDER.to_string()]
    } else {
        flags.to_vec()
    }
}

/// Renderable projection of an `AnalysisResult`. The widget script
/// renders this verbatim and makes no decisions of its own.
#[derive(Debug, Clone, Serialize)]
pub struct DisplayModel {
    /// Uppercase verdict for the label chip
    pub label: &'static str,
    /// Meter fill percentage; null renders as "--"
    pub score_percent: Option<i64>,
    /// Risk tier for chip/meter coloring; null renders neutral
    pub risk_tier: Option<RiskTier>,
    /// Summary sentence under the meter
    pub summary: &'static str,
    /// Flag chips (placeholder substituted when empty)
    pub flags: Vec<String>,
    /// Error line, shown only on the transport-failure path
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl DisplayModel {
    pub fn from_result(result: &AnalysisResult) -> Self {
        let pct = score_percent(result);
        Self {
            label: result.label.as_str(),
            score_percent: pct,
            risk_tier: pct.map(RiskTier::from_percent),
            summary: summary(result.label),
            flags: flags_or_placeholder(&result.flags),
            error: result.error.clone(),
        }
    }
}
