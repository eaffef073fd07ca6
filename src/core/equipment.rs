use crate::core::port::Port;
use crate::core::types::{EquipmentId, GridPosition, PortId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

/// Grid dimensions of a piece of equipment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawLayout")]
pub struct Layout {
    rows: u32,
    cols: u32,
}

#[derive(Deserialize)]
struct RawLayout {
    rows: u32,
    cols: u32,
}

impl TryFrom<RawLayout> for Layout {
    type Error = LayoutError;

    fn try_from(raw: RawLayout) -> Result<Self, Self::Error> {
        Layout::new(raw.rows, raw.cols)
    }
}

/// Rejected layout dimensions
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("layout must have at least one row and one column (got {rows}x{cols})")]
pub struct LayoutError {
    pub rows: u32,
    pub cols: u32,
}

impl Layout {
    pub fn new(rows: u32, cols: u32) -> Result<Self, LayoutError> {
        if rows == 0 || cols == 0 {
            return Err(LayoutError { rows, cols });
        }
        Ok(Self { rows, cols })
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn cols(&self) -> u32 {
        self.cols
    }

    pub fn port_count(&self) -> usize {
        self.rows as usize * self.cols as usize
    }

    pub fn contains(&self, position: GridPosition) -> bool {
        position.row < self.rows && position.col < self.cols
    }

    /// Every cell of the grid in row-major order
    pub fn positions(&self) -> impl Iterator<Item = GridPosition> + '_ {
        (0..self.rows).flat_map(move |row| (0..self.cols).map(move |col| GridPosition::new(row, col)))
    }
}

/// Input for creating a new piece of equipment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEquipment {
    pub name: String,
    pub layout: Layout,
    pub location: Option<String>,
    pub kind: Option<String>,
}

impl NewEquipment {
    pub fn new(name: impl Into<String>, layout: Layout) -> Self {
        Self {
            name: name.into(),
            layout,
            location: None,
            kind: None,
        }
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }
}

/// Partial update of an equipment's descriptive fields and layout.
///
/// `location` and `kind` use a nested option: `Some(None)` clears the field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EquipmentUpdate {
    pub name: Option<String>,
    pub location: Option<Option<String>>,
    pub kind: Option<Option<String>>,
    pub layout: Option<Layout>,
}

/// A device owning a rectangular grid of ports
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Equipment {
    pub id: EquipmentId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    layout: Layout,
    ports: Vec<Port>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

fn clean(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn default_port_name(port_label: &str, number: usize) -> String {
    format!("{} {}", port_label, number)
}

impl Equipment {
    /// Create equipment with one default port per grid cell.
    /// Ports are named `"<port_label> <n>"` in row-major order starting at 1.
    pub fn new(draft: NewEquipment, port_label: &str) -> Self {
        let now = Utc::now();
        let ports = draft
            .layout
            .positions()
            .enumerate()
            .map(|(index, position)| {
                Port::new(PortId::generate(), default_port_name(port_label, index + 1), position)
            })
            .collect();

        Self {
            id: EquipmentId::generate(),
            name: draft.name.trim().to_string(),
            location: clean(draft.location),
            kind: clean(draft.kind),
            layout: draft.layout,
            ports,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn ports(&self) -> &[Port] {
        &self.ports
    }

    pub fn port(&self, id: &PortId) -> Option<&Port> {
        self.ports.iter().find(|port| &port.id == id)
    }

    pub(crate) fn port_mut(&mut self, id: &PortId) -> Option<&mut Port> {
        self.ports.iter_mut().find(|port| &port.id == id)
    }

    /// Swap in a whole new port list at once
    pub(crate) fn replace_ports(&mut self, ports: Vec<Port>) {
        self.ports = ports;
    }

    pub(crate) fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// Apply a partial update. Returns `true` when the layout changed.
    pub(crate) fn apply(&mut self, update: EquipmentUpdate, port_label: &str) -> bool {
        if let Some(name) = update.name {
            self.name = name.trim().to_string();
        }
        if let Some(location) = update.location {
            self.location = clean(location);
        }
        if let Some(kind) = update.kind {
            self.kind = clean(kind);
        }
        let resized = match update.layout {
            Some(layout) if layout != self.layout => {
                self.reconcile_layout(layout, port_label);
                true
            }
            _ => false,
        };
        self.touch();
        resized
    }

    /// Move to a new layout, keeping every port whose cell is still in bounds.
    ///
    /// Preserved ports keep id, name, status and note. Cells that have no
    /// port yet get a fresh default port, numbered after the preserved count.
    pub fn reconcile_layout(&mut self, layout: Layout, port_label: &str) {
        let mut ports: Vec<Port> = std::mem::take(&mut self.ports)
            .into_iter()
            .filter(|port| layout.contains(port.position()))
            .collect();

        let occupied: HashSet<GridPosition> = ports.iter().map(Port::position).collect();
        let mut number = ports.len() + 1;
        for position in layout.positions() {
            if occupied.contains(&position) {
                continue;
            }
            ports.push(Port::new(
                PortId::generate(),
                default_port_name(port_label, number),
                position,
            ));
            number += 1;
        }

        ports.sort_by_key(Port::position);
        self.ports = ports;
        self.layout = layout;
    }

    /// Check that every cell holds exactly one port and nothing lies outside the grid
    pub fn validate_consistency(&self) -> Result<(), String> {
        if self.ports.len() != self.layout.port_count() {
            return Err(format!(
                "Equipment '{}' has {} ports for a {}x{} layout",
                self.id,
                self.ports.len(),
                self.layout.rows,
                self.layout.cols
            ));
        }

        let mut seen = HashSet::new();
        for port in &self.ports {
            if !self.layout.contains(port.position()) {
                return Err(format!(
                    "Port '{}' at ({}, {}) lies outside the layout of '{}'",
                    port.id,
                    port.row(),
                    port.col(),
                    self.id
                ));
            }
            if !seen.insert(port.position()) {
                return Err(format!(
                    "Equipment '{}' has more than one port at ({}, {})",
                    self.id,
                    port.row(),
                    port.col()
                ));
            }
        }
        Ok(())
    }
}
