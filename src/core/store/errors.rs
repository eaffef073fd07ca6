use crate::core::equipment::LayoutError;
use crate::core::naming::PatternError;
use crate::core::persistence::PersistenceError;
use crate::core::types::{EquipmentId, PortId};
use thiserror::Error;

/// Errors returned by store operations
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("equipment '{0}' not found")]
    EquipmentNotFound(EquipmentId),
    #[error("port '{port}' not found on equipment '{equipment}'")]
    PortNotFound { equipment: EquipmentId, port: PortId },
    #[error(transparent)]
    InvalidLayout(#[from] LayoutError),
    #[error(transparent)]
    Pattern(#[from] PatternError),
    #[error(transparent)]
    Persistence(#[from] PersistenceError),
}
