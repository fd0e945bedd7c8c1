//! # metagraph-workflow-config
//!
//! Configuration vocabulary for the metagraph indexing workflow.
//!
//! The workflow reads its parameters from a user-edited config file and passes
//! annotation options on to the `metagraph` command line. This crate names
//! every key such a file may contain and every annotation value the workflow
//! understands, so that callers never spell a literal by hand.
//!
//! ## Features
//!
//! - **Key constants**: every config key as a `&'static str`
//! - **Typed keys**: [`ConfigKey`] and [`RuleResourceKey`] with group and value kind
//! - **Label sources**: [`AnnotationLabelsSource`] mapped to `--anno-header` / `--anno-filename`
//! - **Annotation formats**: the nine supported [`AnnotationFormat`]s
//! - **Typed settings**: [`WorkflowSettings`], a serde record of the whole config
//!
//! ## Example
//!
//! ```rust
//! use metagraph_workflow_config::{AnnotationFormat, AnnotationLabelsSource, ConfigKey};
//!
//! let source: AnnotationLabelsSource = "sequence_headers".parse().unwrap();
//! assert_eq!(source.to_annotation_cmd_option(), "--anno-header");
//!
//! let format: AnnotationFormat = "relax.row_diff_brwt".parse().unwrap();
//! assert!(format.is_relaxed() && format.is_row_diff());
//!
//! assert_eq!(ConfigKey::MaxThreads.as_str(), "max_threads");
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Keys, annotation enumerations, typed settings and errors
//! - [`cli`]: Command-line interface implementation

pub mod cli;
pub mod core;

// Re-export commonly used types for convenience
pub use core::annotation::{AnnotationFormat, AnnotationFormats, AnnotationLabelsSource};
pub use core::error::WorkflowConfigError;
pub use core::keys::{ConfigKey, KeyGroup, RuleResourceKey, ValueKind};
pub use core::settings::{RuleResources, WorkflowSettings};
