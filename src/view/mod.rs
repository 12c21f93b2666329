//! View Models
//!
//! Pure data derived from [`crate::state::InspectState`]. Painting lives in
//! `panels`; everything that decides *what* gets shown lives here.

mod result;

pub use result::{
    detect_affordances, humanize, title_case, Body, Field, FieldValue, ListItem, ResultView,
    AFFORDANCES_KEY,
};
