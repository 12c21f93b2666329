//! Error bodies returned by the inspection API on non-2xx responses

use serde::Deserialize;
use serde_json::Value;

/// Top-level error body: `{"detail": ...}`
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub detail: Option<ErrorDetail>,
}

/// `detail` is either a list of validation issues or a plain message
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ErrorDetail {
    Issues(Vec<ValidationIssue>),
    Message(String),
    Other(Value),
}

#[derive(Debug, Clone, Deserialize)]
pub struct ValidationIssue {
    #[serde(default)]
    pub msg: Option<String>,
}

impl ApiErrorBody {
    /// Human message carried by the body, if any
    pub fn message(&self) -> Option<&str> {
        match self.detail.as_ref()? {
            ErrorDetail::Issues(issues) => issues
                .first()
                .and_then(|issue| issue.msg.as_deref())
                .filter(|msg| !msg.is_empty()),
            ErrorDetail::Message(msg) => Some(msg.as_str()).filter(|msg| !msg.is_empty()),
            ErrorDetail::Other(_) => None,
        }
    }
}

/// Reduce a failed response to one human-readable message.
///
/// Priority: first validation issue's `msg`, then a string `detail`, then
/// `"Request failed with status N"`.
pub fn error_message(status: u16, body: &[u8]) -> String {
    serde_json::from_slice::<ApiErrorBody>(body)
        .ok()
        .as_ref()
        .and_then(ApiErrorBody::message)
        .map(str::to_string)
        .unwrap_or_else(|| format!("Request failed with status {}", status))
}
