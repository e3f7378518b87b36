//! # FND Common Library
//!
//! Shared code for the FND (Fake News Detector) front ends including:
//! - Raw backend response model with lenient deserialization
//! - Result aggregation (verdict, score, flags)
//! - Presentation adapter (percent, risk tier, summary)
//! - Text capture contract
//!
//! Both front ends (browser-extension popup and standalone web widget)
//! render from the same `AnalysisResult`; the precedence and truncation
//! rules live here exactly once.

pub mod analysis;
pub mod capture;
pub mod error;

pub use analysis::aggregate::{aggregate, AnalysisResult, Verdict, MAX_FLAGS};
pub use analysis::present::{DisplayModel, RiskTier};
pub use analysis::response::RawClassificationResponse;
pub use error::{Error, Result};
