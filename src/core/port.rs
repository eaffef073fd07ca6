use crate::core::types::{GridPosition, PortId};
use serde::{Deserialize, Serialize};

/// Operational status of a port
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PortStatus {
    Normal,
    #[default]
    Unused,
    NeedsCheck,
    Unspecified,
}

impl PortStatus {
    /// All statuses in display order
    pub const ALL: [PortStatus; 4] = [
        PortStatus::Normal,
        PortStatus::Unused,
        PortStatus::NeedsCheck,
        PortStatus::Unspecified,
    ];
}

/// One physical connector on a piece of equipment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Port {
    pub id: PortId,
    pub name: String,
    pub status: PortStatus,
    row: u32,
    col: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl Port {
    /// Create a port at a fixed grid cell. The position cannot change afterwards.
    pub fn new(id: PortId, name: impl Into<String>, position: GridPosition) -> Self {
        Self {
            id,
            name: name.into(),
            status: PortStatus::default(),
            row: position.row,
            col: position.col,
            note: None,
        }
    }

    pub fn row(&self) -> u32 {
        self.row
    }

    pub fn col(&self) -> u32 {
        self.col
    }

    pub fn position(&self) -> GridPosition {
        GridPosition::new(self.row, self.col)
    }

    /// Apply a partial update, following the edit dialog rules:
    /// a blank name keeps the current one, a blank note clears it.
    pub fn apply(&mut self, update: PortUpdate) {
        if let Some(name) = update.name {
            let trimmed = name.trim();
            if !trimmed.is_empty() {
                self.name = trimmed.to_string();
            }
        }
        if let Some(status) = update.status {
            self.status = status;
        }
        if let Some(note) = update.note {
            let trimmed = note.trim();
            self.note = if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            };
        }
    }
}

/// Partial update of a port's mutable fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PortUpdate {
    pub name: Option<String>,
    pub status: Option<PortStatus>,
    pub note: Option<String>,
}

impl PortUpdate {
    pub fn name(name: impl Into<String>) -> Self {
        Self { name: Some(name.into()), ..Self::default() }
    }

    pub fn status(status: PortStatus) -> Self {
        Self { status: Some(status), ..Self::default() }
    }

    pub fn note(note: impl Into<String>) -> Self {
        Self { note: Some(note.into()), ..Self::default() }
    }
}
