//! Shared API Types for the Gaia object inspector
//!
//! Every type that crosses the HTTP boundary between the inspection API and
//! the egui front-end lives here.
//!
//! ```text
//! ┌──────────────────┐         ┌──────────────────┐
//! │  Gaia World API  │  JSON   │  WASM UI         │
//! │  (remote)        │ ◄─────► │  (egui)          │
//! └──────────────────┘         └──────────────────┘
//! ```
//!
//! ## Rules
//!
//! 1. Inspection results stay `serde_json::Value` - the API has no schema
//! 2. Recognised sub-shapes (affordances) deserialize leniently, never fail
//! 3. Error bodies are decoded into a single human message

pub mod affordance;
pub mod error_body;

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub use affordance::{Affordance, ConfidenceLevel};
pub use error_body::{error_message, ApiErrorBody, ErrorDetail, ValidationIssue};

// ============================================================================
// INSPECTION REQUEST
// ============================================================================

/// Parameters collected by the query form, one set per submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryParams {
    pub world: String,
    pub obj: String,
    pub perspective: String,
    pub context: String,
}

impl QueryParams {
    pub fn new(
        world: impl Into<String>,
        obj: impl Into<String>,
        perspective: impl Into<String>,
        context: impl Into<String>,
    ) -> Self {
        Self {
            world: world.into(),
            obj: obj.into(),
            perspective: perspective.into(),
            context: context.into(),
        }
    }

    /// The part of the request kept alongside the result.
    ///
    /// The world is intentionally not part of it.
    pub fn query(&self) -> InspectQuery {
        InspectQuery {
            obj: self.obj.clone(),
            perspective: self.perspective.clone(),
            context: self.context.clone(),
        }
    }
}

/// What was asked, as shown in the result header
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InspectQuery {
    pub obj: String,
    pub perspective: String,
    pub context: String,
}

// ============================================================================
// WORLDS
// ============================================================================

/// Entry of `GET /worlds`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct World {
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub inspection_presets: Option<Vec<String>>,
}

impl World {
    /// Perspective presets declared by this world, if it declares any
    pub fn perspectives(&self) -> Option<&[String]> {
        self.inspection_presets
            .as_deref()
            .filter(|presets| !presets.is_empty())
    }
}

// ============================================================================
// DISPLAY
// ============================================================================

/// String form of a JSON value for display.
///
/// Strings are shown verbatim, `null` as `"null"`, numbers and booleans in
/// their JSON text. Composite values fall back to compact JSON.
pub fn json_display(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}
