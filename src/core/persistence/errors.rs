use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("storage I/O failed for key '{key}': {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid key '{0}': keys may only contain letters, digits, '-', '_' and '.'")]
    InvalidKey(String),
    #[error("failed to (de)serialize state: {0}")]
    Serialization(#[from] serde_json::Error),
}
