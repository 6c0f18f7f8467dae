//! Analysis service data model
//!
//! Wire types for `POST /analyze` and `POST /export`. The service answers
//! either `{ "error": "..." }` or `{ "metrics": {...}, "functions": [...] }`;
//! [`AnalysisBody::from_value`] decides which one it got, giving the `error`
//! field precedence over everything else.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};
use crate::types::ExportFormat;

/// Body of `POST /analyze`. The code is sent as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisRequest {
    pub code: String,
}

impl AnalysisRequest {
    pub fn new(code: impl Into<String>) -> Self {
        Self { code: code.into() }
    }
}

/// Body of `POST /export`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportRequest {
    pub code: String,
    pub format: ExportFormat,
}

/// A successful analysis: aggregate metrics plus one report per function,
/// in the order the service listed them.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AnalysisResponse {
    pub metrics: MetricsReport,
    pub functions: Vec<FunctionReport>,
}

/// Complexity aggregate and Halstead operator/operand counts.
///
/// Only `total_complexity` is required. Services that skip the Halstead
/// counts still produce a report; the missing counts stay `None`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct MetricsReport {
    pub total_complexity: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub h1: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub h2: Option<f64>,
    #[serde(rename = "N1", default, skip_serializing_if = "Option::is_none")]
    pub n1: Option<f64>,
    #[serde(rename = "N2", default, skip_serializing_if = "Option::is_none")]
    pub n2: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_lines: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub complexity_rank: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct FunctionReport {
    pub name: String,
    /// `None` when the service omitted the field entirely.
    #[serde(default)]
    pub suggestions: Option<Vec<Suggestion>>,
    #[serde(default)]
    pub edge_cases: Vec<EdgeCase>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub complexity: Option<i64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<FunctionArg>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub returns: Option<String>,
}

impl FunctionReport {
    /// Suggestions to display; empty when absent.
    pub fn suggestions(&self) -> &[Suggestion] {
        self.suggestions.as_deref().unwrap_or_default()
    }

    /// `name(a: int, b: str) -> float` when argument or return hints were sent.
    pub fn signature(&self) -> Option<String> {
        if self.args.is_empty() && self.returns.is_none() {
            return None;
        }
        let args = self
            .args
            .iter()
            .map(|a| format!("{}: {}", a.name, a.type_hint))
            .collect::<Vec<_>>()
            .join(", ");
        let mut sig = format!("{}({})", self.name, args);
        if let Some(ret) = &self.returns {
            sig.push_str(" -> ");
            sig.push_str(ret);
        }
        Some(sig)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct FunctionArg {
    pub name: String,
    #[serde(rename = "type", default = "default_type_hint")]
    pub type_hint: String,
}

fn default_type_hint() -> String {
    "Any".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Suggestion {
    /// Short label such as `documentation` or `type_hints`.
    #[serde(rename = "type")]
    pub kind: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct EdgeCase {
    pub description: String,
    pub category: String,
    pub code: String,
}

/// Parsed `/analyze` body: either the service-reported error or a report.
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisBody {
    Failed { error: String },
    Report(AnalysisResponse),
}

impl AnalysisBody {
    /// Interpret a decoded JSON body.
    ///
    /// A truthy `error` field wins even if report fields are present or
    /// malformed. Otherwise `metrics` and `functions` must both be present;
    /// nothing beyond presence and shape is validated.
    pub fn from_value(value: Value) -> Result<Self> {
        let Value::Object(mut map) = value else {
            return Err(Error::transport("malformed analysis response: not an object"));
        };

        if let Some(error) = map.get("error").filter(|e| is_truthy(e)) {
            let error = match error {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            return Ok(Self::Failed { error });
        }

        let metrics = map
            .remove("metrics")
            .filter(|v| !v.is_null())
            .ok_or_else(|| Error::transport("malformed analysis response: missing `metrics`"))?;
        let functions = map
            .remove("functions")
            .filter(|v| !v.is_null())
            .ok_or_else(|| Error::transport("malformed analysis response: missing `functions`"))?;

        let metrics: MetricsReport = serde_json::from_value(metrics)
            .map_err(|e| Error::transport(format!("malformed analysis response: {e}")))?;
        let functions: Vec<FunctionReport> = serde_json::from_value(functions)
            .map_err(|e| Error::transport(format!("malformed analysis response: {e}")))?;

        Ok(Self::Report(AnalysisResponse { metrics, functions }))
    }

    /// Collapse into the client contract: a service error becomes
    /// [`Error::Analysis`].
    pub fn into_result(self) -> Result<AnalysisResponse> {
        match self {
            Self::Failed { error } => Err(Error::analysis(error)),
            Self::Report(report) => Ok(report),
        }
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Downloaded export artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportBlob {
    pub bytes: Vec<u8>,
    pub filename: String,
}

impl ExportBlob {
    pub fn new(bytes: Vec<u8>, format: ExportFormat) -> Self {
        Self {
            bytes,
            filename: format.download_filename(),
        }
    }
}
