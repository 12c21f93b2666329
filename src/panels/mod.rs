//! UI Panels
//!
//! Panels render from data passed in and report user intent through return
//! values (`Option<QueryParams>`, `Option<ResultAction>`), never callbacks.

mod affordance_card;
mod inspect_form;
mod result;

pub use affordance_card::{affordance_card, CardResponse, CardStates};
pub use inspect_form::{InspectForm, CONTEXTS, DEFAULT_PERSPECTIVES};
pub use result::{ResultAction, ResultPanel};
