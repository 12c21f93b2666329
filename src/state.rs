//! Inspection state
//!
//! One value describes the whole lifecycle of the current inspection:
//!
//! ```text
//!   Idle ──begin──► Loading ──complete(Ok)──► Succeeded
//!    ▲                 │
//!    │                 └──complete(Err)─────► Failed
//!    └──────────────── reset ◄────────────── (any)
//! ```
//!
//! `data` and `error` can never both be present. A failure drops the query
//! while a success keeps it.

use inspector_types::{InspectQuery, QueryParams};
use serde_json::Value;

use crate::error::InspectError;

#[derive(Debug, Clone, Default, PartialEq)]
pub enum InspectState {
    #[default]
    Idle,
    Loading {
        query: InspectQuery,
    },
    Succeeded {
        /// `None` when the response arrived after a reset or a failed
        /// request cleared the query
        query: Option<InspectQuery>,
        data: Value,
    },
    Failed {
        error: String,
    },
}

impl InspectState {
    /// A request was issued: drop previous data and error, record the query
    pub fn begin(&mut self, params: &QueryParams) {
        *self = InspectState::Loading {
            query: params.query(),
        };
    }

    /// A request finished. The last one to finish wins.
    pub fn complete(&mut self, result: Result<Value, InspectError>) {
        *self = match result {
            Ok(data) => InspectState::Succeeded {
                query: self.query().cloned(),
                data,
            },
            Err(err) => InspectState::Failed {
                error: err.to_string(),
            },
        };
    }

    pub fn reset(&mut self) {
        *self = InspectState::Idle;
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, InspectState::Loading { .. })
    }

    pub fn data(&self) -> Option<&Value> {
        match self {
            InspectState::Succeeded { data, .. } => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            InspectState::Failed { error } => Some(error),
            _ => None,
        }
    }

    pub fn query(&self) -> Option<&InspectQuery> {
        match self {
            InspectState::Loading { query } => Some(query),
            InspectState::Succeeded { query, .. } => query.as_ref(),
            InspectState::Idle | InspectState::Failed { .. } => None,
        }
    }
}
