use thiserror::Error;

/// Reasons a batch naming pattern is rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    /// The pattern was empty or only whitespace
    #[error("name pattern is empty")]
    EmptyPattern,
    /// The pattern matched none of the template, range or increment formats
    #[error("name pattern not recognized: '{pattern}'")]
    PatternNotRecognized { pattern: String },
}
