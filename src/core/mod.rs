//! Configuration vocabulary of the metagraph indexing workflow.
//!
//! - [`keys`]: key literals read from workflow config files, and the typed
//!   [`ConfigKey`](keys::ConfigKey) / [`RuleResourceKey`](keys::RuleResourceKey) sets
//! - [`annotation`]: annotation label sources and annotation matrix formats
//! - [`settings`]: serde record with one optional field per key
//! - [`error`]: errors for strings that name no known key or value
//!
//! ## Config layout
//!
//! ```text
//! max_threads: 16
//! max_memory_mb: 64000
//! rules:
//!   build_graph:
//!     threads: 8
//!     mem_mb: 16000
//! ```
//!
//! Every literal here is shared with config files and with the `metagraph`
//! command line, so none of them may be renamed.

pub mod annotation;
pub mod error;
pub mod keys;
pub mod settings;
