pub mod errors;
pub mod namer;
pub mod pattern;

// Re-export commonly used types
pub use errors::PatternError;
pub use namer::apply_name_pattern;
pub use pattern::{NamePattern, INCREMENT_COLUMN_CEILING};
