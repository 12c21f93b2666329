//! Result view model
//!
//! Turns an arbitrary JSON inspection result into a tree of labelled fields.
//! No schema is assumed beyond one recognised sub-shape: an `affordances`
//! array whose first element carries an `action` key.

use inspector_types::{json_display, Affordance, InspectQuery};
use serde_json::{Map, Value};

use crate::state::InspectState;

/// Field name that may hold affordance records
pub const AFFORDANCES_KEY: &str = "affordances";

/// What the result panel shows
#[derive(Debug, Clone, PartialEq)]
pub enum ResultView {
    Error(String),
    Idle,
    Result { query: InspectQuery, body: Body },
}

impl ResultView {
    pub fn from_state(state: &InspectState) -> Self {
        Self::from_parts(state.data(), state.error(), state.query())
    }

    /// An error wins over everything; without both data and query the panel
    /// stays idle.
    pub fn from_parts(
        data: Option<&Value>,
        error: Option<&str>,
        query: Option<&InspectQuery>,
    ) -> Self {
        if let Some(error) = error {
            return ResultView::Error(error.to_string());
        }

        match (data, query) {
            (Some(data), Some(query)) if !data.is_null() => ResultView::Result {
                query: query.clone(),
                body: Body::from_value(data),
            },
            _ => ResultView::Idle,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    Fields(Vec<Field>),
    Text(String),
}

impl Body {
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Object(map) => Body::Fields(object_fields(map)),
            Value::Array(items) => Body::Fields(array_fields(items)),
            scalar => Body::Text(json_display(scalar)),
        }
    }
}

/// One `key: value` entry
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub key: String,
    pub label: String,
    pub value: FieldValue,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Affordances(Vec<Affordance>),
    List(Vec<ListItem>),
    /// Nested mapping, rendered one level deeper
    Object(Vec<Field>),
    Text(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ListItem {
    /// Mapping (or sequence) item, rendered one level deeper
    Nested(Vec<Field>),
    Text(String),
}

impl Field {
    pub fn new(key: &str, value: &Value) -> Self {
        let value = match detect_affordances(key, value) {
            Some(affordances) => FieldValue::Affordances(affordances),
            None => match value {
                Value::Array(items) => FieldValue::List(items.iter().map(ListItem::new).collect()),
                Value::Object(map) => FieldValue::Object(object_fields(map)),
                scalar => FieldValue::Text(json_display(scalar)),
            },
        };

        Self {
            key: key.to_string(),
            label: humanize(key),
            value,
        }
    }
}

impl ListItem {
    pub fn new(value: &Value) -> Self {
        match value {
            Value::Object(map) => ListItem::Nested(object_fields(map)),
            Value::Array(items) => ListItem::Nested(array_fields(items)),
            scalar => ListItem::Text(json_display(scalar)),
        }
    }
}

/// Recognise an affordance list.
///
/// The key must be `affordances` and the value a non-empty array whose first
/// element is an object with an `action` key. An empty array is not an
/// affordance list and renders as an ordinary (empty) list.
pub fn detect_affordances(key: &str, value: &Value) -> Option<Vec<Affordance>> {
    if key != AFFORDANCES_KEY {
        return None;
    }

    let items = value.as_array()?;
    let first = items.first()?.as_object()?;
    if !first.contains_key("action") {
        return None;
    }

    Some(items.iter().map(Affordance::from_value).collect())
}

fn object_fields(map: &Map<String, Value>) -> Vec<Field> {
    map.iter().map(|(key, value)| Field::new(key, value)).collect()
}

/// Sequences nested in sequences are shown keyed by index
fn array_fields(items: &[Value]) -> Vec<Field> {
    items
        .iter()
        .enumerate()
        .map(|(index, value)| Field::new(&index.to_string(), value))
        .collect()
}

/// `possible_failure_modes` -> `possible failure modes`
pub fn humanize(key: &str) -> String {
    key.replace('_', " ")
}

/// Upper-case the first letter of every word
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;

    for c in text.chars() {
        if at_word_start && c.is_alphabetic() {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        at_word_start = c.is_whitespace();
    }

    out
}
