pub mod core;

// Re-export commonly used types
pub use crate::core::config::StoreConfig;
pub use crate::core::equipment::{Equipment, EquipmentUpdate, Layout, NewEquipment};
pub use crate::core::locale::Language;
pub use crate::core::naming::{apply_name_pattern, NamePattern, PatternError};
pub use crate::core::port::{Port, PortStatus, PortUpdate};
pub use crate::core::store::{PortStore, StoreError};
pub use crate::core::types::{EquipmentId, GridPosition, PortId};
