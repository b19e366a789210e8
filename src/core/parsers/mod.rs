//! Translation file parsers.
//!
//! - `json`: JSON translation files, with optional duplicate-key rejection

pub mod json;
