pub mod errors;
pub mod snapshot;
pub mod storage;

// Re-export commonly used types
pub use errors::PersistenceError;
pub use snapshot::PersistedState;
pub use storage::{DirStorage, MemoryStorage, StorageBackend};
