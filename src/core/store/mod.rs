pub mod errors;
pub mod filter;
pub mod port_store;

// Re-export commonly used types
pub use errors::StoreError;
pub use filter::{FilterOptions, FilterUpdate};
pub use port_store::PortStore;
