//! Raw classification backend response model
//!
//! The backend's `classify-all` endpoint returns untyped, partial JSON:
//! no field is guaranteed present, and any field may be null or carry an
//! unexpected type. Deserialization here never fails for the response as
//! a whole; a wrong-typed field simply degrades to its absent form.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

/// Lenient field deserializer: wrong-typed or null values become `None`
/// instead of failing the whole response. The value is buffered through
/// `serde_json::Value` so a type mismatch cannot leave the underlying
/// parser mid-token.
fn lenient<'de, D, T>(de: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(de)?;
    Ok(serde_json::from_value(value).ok())
}

/// Lenient list deserializer: anything that is not a well-formed list
/// becomes the empty list.
fn lenient_list<'de, D, T>(de: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(de)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

/// Top-level response from the classification backend.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct RawClassificationResponse {
    /// Fused verdict across all signals, when the backend provides one
    #[serde(deserialize_with = "lenient")]
    pub overall: Option<OverallClassification>,

    /// Classification of the primary submitted text
    #[serde(deserialize_with = "lenient")]
    pub tweet: Option<TextClassification>,

    /// Classification of an associated account/profile
    #[serde(deserialize_with = "lenient")]
    pub profile: Option<TextClassification>,

    /// Per-URL classifications, possibly empty
    #[serde(deserialize_with = "lenient_list")]
    pub urls: Vec<UrlClassification>,

    /// Image classification, when an image was submitted
    #[serde(deserialize_with = "lenient")]
    pub image: Option<ImageClassification>,

    /// Top-level explanatory flags
    #[serde(deserialize_with = "lenient")]
    pub flags: Option<Vec<String>>,
}

/// Backend's top-level fused verdict. Confidence is a percentage (0-100).
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct OverallClassification {
    #[serde(deserialize_with = "lenient")]
    pub classification: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub confidence: Option<f64>,
}

/// Text or profile classification. Probability is a percentage (0-100).
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct TextClassification {
    #[serde(deserialize_with = "lenient")]
    pub classification: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub probability: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    pub flags: Option<Vec<String>>,
}

/// Classification of a single URL found in the submission.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct UrlClassification {
    #[serde(deserialize_with = "lenient")]
    pub url: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub classification: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub probability: Option<f64>,
}

/// Image classification. The backend emits either `label` or
/// `classification` depending on which model path produced it.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ImageClassification {
    #[serde(deserialize_with = "lenient")]
    pub label: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub classification: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub score: Option<f64>,
}
