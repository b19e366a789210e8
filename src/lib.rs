//! Keycheck - missing translation key checker
//!
//! Keycheck scans source files for translation function calls, flattens the
//! project's JSON translation files into dotted keys, and reports every key
//! that is referenced in source but has no translation. It is meant to run
//! as a build step: invalid JSON, duplicate keys and (in strict mode)
//! missing keys fail the build.
//!
//! ## Module Structure
//!
//! - `build_step`: Syntax check plus key validation, as run once per build
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and validation
//! - `core`: Key normalization, flattening, extraction and reconciliation
//! - `error`: Error taxonomy
//! - `reporter`: Leveled diagnostics sink
//! - `validator`: Key validation orchestrator

pub mod build_step;
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod reporter;
pub mod validator;
