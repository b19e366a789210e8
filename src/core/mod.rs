//! Key extraction and reconciliation engine.
//!
//! The pieces here never log or touch global state; the orchestrator in
//! `validator` wires them to the file system and the reporting channel.
//!
//! ## Module Structure
//!
//! - `normalize`: separator convention conversion for keys
//! - `key_set`: insertion-ordered key set
//! - `flatten`: nested JSON → separator-joined key paths
//! - `extract`: regex-driven key extraction from source text
//! - `reconcile`: missing-key computation and `ValidationResult`
//! - `file_scanner`: glob/directory resolution of input files
//! - `parsers`: translation file reading and syntax checking

pub mod extract;
pub mod file_scanner;
pub mod flatten;
pub mod key_set;
pub mod normalize;
pub mod parsers;
pub mod reconcile;

pub use extract::*;
pub use flatten::*;
pub use key_set::*;
pub use normalize::*;
pub use reconcile::*;
