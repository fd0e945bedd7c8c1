use thiserror::Error;

/// Errors raised when a string does not name a known key or enum value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WorkflowConfigError {
    #[error("Unknown workflow config key: {0}")]
    UnknownConfigKey(String),

    #[error("Unknown rule resource key: {0}")]
    UnknownRuleResourceKey(String),

    #[error("Invalid value of AnnotationLabelsSource: got {0}")]
    InvalidLabelsSource(String),

    #[error("Unknown annotation format: {0}")]
    UnknownAnnotationFormat(String),
}
