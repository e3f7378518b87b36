//! Result aggregator
//!
//! Reduces a raw classifier response to a single `AnalysisResult` with a
//! normalized verdict, a unit-scale score, and a bounded flag list. Pure
//! function of its input; both front ends call the same code instead of
//! carrying their own precedence chains.

use std::fmt;

use serde::Serialize;

use super::response::{ImageClassification, RawClassificationResponse, UrlClassification};

/// Maximum number of explanatory flags carried on a result.
pub const MAX_FLAGS: usize = 10;

/// Fixed error string for the terminal transport-failure result.
pub const BACKEND_UNREACHABLE: &str = "Backend not reachable.";

/// Normalized verdict. Backend strings outside the FAKE/REAL pair
/// (including its SUSPICIOUS middle band) map to Unknown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Verdict {
    Fake,
    Real,
    Unknown,
}

impl Verdict {
    /// Case-insensitive parse from a raw backend classification string.
    pub fn from_raw(raw: &str) -> Self {
        match raw.trim().to_ascii_uppercase().as_str() {
            "FAKE" => Verdict::Fake,
            "REAL" => Verdict::Real,
            _ => Verdict::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Fake => "FAKE",
            Verdict::Real => "REAL",
            Verdict::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Consolidated analysis result. Constructed once per analysis request
/// and immutable afterwards; the next request replaces it wholesale.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    /// Normalized verdict
    pub label: Verdict,

    /// Probability of being fake, unit scale. Absent when no numeric
    /// score was supplied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,

    /// Explanatory flags, at most `MAX_FLAGS` entries
    pub flags: Vec<String>,

    /// Human-readable failure description for the transport-failure path
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// Per-URL detail carried through for independent display
    pub urls: Vec<UrlClassification>,

    /// Image detail carried through for independent display
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageClassification>,
}

impl AnalysisResult {
    /// Terminal result for a failed or timed-out classification exchange.
    /// The aggregator is never invoked on this path.
    pub fn backend_unreachable() -> Self {
        Self {
            label: Verdict::Unknown,
            score: None,
            flags: Vec::new(),
            error: Some(BACKEND_UNREACHABLE.to_string()),
            urls: Vec::new(),
            image: None,
        }
    }
}

/// Aggregate a raw backend response into an `AnalysisResult`.
///
/// Precedence rules:
/// - label: `overall.classification`, else `tweet.classification`, else
///   `profile.classification`, else UNKNOWN; a blank string does not
///   claim its slot and falls through to the next source
/// - score: `tweet.probability`, else `overall.confidence`, else
///   `profile.probability`, else absent; divided by 100 to move from
///   percent to unit scale
/// - flags: top-level, then tweet, then profile, truncated to
///   `MAX_FLAGS`
///
/// An out-of-range backend percentage passes through unclamped; the
/// risk-tier bands treat anything past their edges as the nearest tier.
pub fn aggregate(response: &RawClassificationResponse) -> AnalysisResult {
    let label = [
        response.overall.as_ref().and_then(|o| o.classification.as_deref()),
        response.tweet.as_ref().and_then(|t| t.classification.as_deref()),
        response.profile.as_ref().and_then(|p| p.classification.as_deref()),
    ]
    .into_iter()
    .flatten()
    .find(|raw| !raw.trim().is_empty())
    .map(Verdict::from_raw)
    .unwrap_or(Verdict::Unknown);

    let score = response
        .tweet
        .as_ref()
        .and_then(|t| t.probability)
        .or_else(|| response.overall.as_ref().and_then(|o| o.confidence))
        .or_else(|| response.profile.as_ref().and_then(|p| p.probability))
        .map(|pct| pct / 100.0);

    let mut flags: Vec<String> = Vec::new();
    let sources = [
        response.flags.as_ref(),
        response.tweet.as_ref().and_then(|t| t.flags.as_ref()),
        response.profile.as_ref().and_then(|p| p.flags.as_ref()),
    ];
    for list in sources.into_iter().flatten() {
        flags.extend(list.iter().cloned());
    }
    flags.truncate(MAX_FLAGS);

    AnalysisResult {
        label,
        score,
        flags,
        error: None,
        urls: response.urls.clone(),
        image: response.image.clone(),
    }
}
