use super::errors::StoreError;
use super::filter::{self, FilterUpdate};
use crate::core::config::StoreConfig;
use crate::core::equipment::{Equipment, EquipmentUpdate, NewEquipment};
use crate::core::locale::{Language, Messages};
use crate::core::naming;
use crate::core::persistence::{MemoryStorage, PersistedState, StorageBackend};
use crate::core::port::{Port, PortStatus, PortUpdate};
use crate::core::types::{EquipmentId, PortId};
use log::{debug, info, warn};

/// Owns all equipment and UI flags and is the only place they change.
///
/// Every successful mutation is written to the storage backend when
/// autosave is enabled. A change becomes visible only after it is saved, so
/// an operation that fails validation or persistence leaves the state untouched.
pub struct PortStore {
    config: StoreConfig,
    backend: Box<dyn StorageBackend>,
    state: PersistedState,
}

impl PortStore {
    /// Open a store, restoring the snapshot under the configured key if one exists
    pub fn open(config: StoreConfig, backend: Box<dyn StorageBackend>) -> Result<Self, StoreError> {
        let state = match PersistedState::load(&*backend, &config.storage_key)? {
            Some(state) => {
                info!(
                    "Restored {} equipment from '{}'",
                    state.equipments.len(),
                    config.storage_key
                );
                for equipment in &state.equipments {
                    if let Err(problem) = equipment.validate_consistency() {
                        warn!("{}", problem);
                    }
                }
                state
            }
            None => {
                info!("No saved state under '{}', starting empty", config.storage_key);
                PersistedState::with_language(config.default_language)
            }
        };

        Ok(Self {
            config,
            backend,
            state,
        })
    }

    /// A store backed by volatile memory with default configuration
    pub fn in_memory() -> Self {
        Self {
            config: StoreConfig::default(),
            backend: Box::new(MemoryStorage::new()),
            state: PersistedState::default(),
        }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn state(&self) -> &PersistedState {
        &self.state
    }

    pub fn equipments(&self) -> &[Equipment] {
        &self.state.equipments
    }

    pub fn equipment(&self, id: &EquipmentId) -> Option<&Equipment> {
        self.state.equipments.iter().find(|eq| &eq.id == id)
    }

    /// Write the current state to the backend
    pub fn save(&mut self) -> Result<(), StoreError> {
        self.state
            .save(&mut *self.backend, &self.config.storage_key)?;
        debug!("Saved state under '{}'", self.config.storage_key);
        Ok(())
    }

    /// Apply `change` to a copy of the state and keep it only once it is
    /// persisted. On any error `self.state` is left as it was.
    fn transact<T>(
        &mut self,
        change: impl FnOnce(&mut PersistedState) -> Result<T, StoreError>,
    ) -> Result<T, StoreError> {
        let mut candidate = self.state.clone();
        let value = change(&mut candidate)?;
        if self.config.autosave {
            candidate.save(&mut *self.backend, &self.config.storage_key)?;
            debug!("Saved state under '{}'", self.config.storage_key);
        }
        self.state = candidate;
        Ok(value)
    }

    // Equipment

    /// Add equipment with a default port for every cell and select it
    pub fn add_equipment(&mut self, draft: NewEquipment) -> Result<EquipmentId, StoreError> {
        let equipment = Equipment::new(draft, self.messages().port_label);
        let id = equipment.id.clone();
        let name = equipment.name.clone();
        let port_count = equipment.ports().len();

        self.transact(|state| {
            state.selected_equipment_id = Some(equipment.id.clone());
            state.equipments.push(equipment);
            Ok(())
        })?;
        info!("Added equipment '{}' ({}) with {} ports", name, id, port_count);
        Ok(id)
    }

    /// Update descriptive fields and, when the layout changes, reconcile the port grid
    pub fn update_equipment(&mut self, id: &EquipmentId, update: EquipmentUpdate) -> Result<(), StoreError> {
        let port_label = self.messages().port_label;
        let resized = self.transact(|state| {
            let equipment = find_equipment_mut(state, id)?;
            Ok(equipment.apply(update, port_label).then(|| equipment.layout()))
        })?;
        if let Some(layout) = resized {
            info!(
                "Equipment '{}' resized to {}x{}",
                id,
                layout.rows(),
                layout.cols()
            );
        }
        Ok(())
    }

    pub fn delete_equipment(&mut self, id: &EquipmentId) -> Result<(), StoreError> {
        if self.equipment(id).is_none() {
            return Err(StoreError::EquipmentNotFound(id.clone()));
        }
        self.transact(|state| {
            state.equipments.retain(|eq| &eq.id != id);
            if state.selected_equipment_id.as_ref() == Some(id) {
                state.selected_equipment_id = None;
            }
            Ok(())
        })?;
        info!("Deleted equipment '{}'", id);
        Ok(())
    }

    pub fn select_equipment(&mut self, id: Option<EquipmentId>) -> Result<(), StoreError> {
        if let Some(id) = &id {
            if self.equipment(id).is_none() {
                return Err(StoreError::EquipmentNotFound(id.clone()));
            }
        }
        self.transact(|state| {
            state.selected_equipment_id = id;
            Ok(())
        })
    }

    pub fn selected_equipment(&self) -> Option<&Equipment> {
        self.state
            .selected_equipment_id
            .as_ref()
            .and_then(|id| self.equipment(id))
    }

    // Ports

    pub fn update_port(
        &mut self,
        equipment_id: &EquipmentId,
        port_id: &PortId,
        update: PortUpdate,
    ) -> Result<(), StoreError> {
        self.transact(|state| {
            let equipment = find_equipment_mut(state, equipment_id)?;
            let port = equipment
                .port_mut(port_id)
                .ok_or_else(|| StoreError::PortNotFound {
                    equipment: equipment_id.clone(),
                    port: port_id.clone(),
                })?;
            port.apply(update);
            equipment.touch();
            Ok(())
        })?;
        debug!("Updated port '{}' on '{}'", port_id, equipment_id);
        Ok(())
    }

    pub fn update_port_name(
        &mut self,
        equipment_id: &EquipmentId,
        port_id: &PortId,
        name: impl Into<String>,
    ) -> Result<(), StoreError> {
        self.update_port(equipment_id, port_id, PortUpdate::name(name))
    }

    pub fn update_port_status(
        &mut self,
        equipment_id: &EquipmentId,
        port_id: &PortId,
        status: PortStatus,
    ) -> Result<(), StoreError> {
        self.update_port(equipment_id, port_id, PortUpdate::status(status))
    }

    pub fn update_port_note(
        &mut self,
        equipment_id: &EquipmentId,
        port_id: &PortId,
        note: impl Into<String>,
    ) -> Result<(), StoreError> {
        self.update_port(equipment_id, port_id, PortUpdate::note(note))
    }

    /// Rename ports of one equipment from a batch pattern.
    ///
    /// All renamed ports are swapped in together. Returns how many ports got a
    /// new name; a rejected pattern, or one that names no port, changes nothing.
    pub fn apply_name_pattern(&mut self, equipment_id: &EquipmentId, pattern: &str) -> Result<usize, StoreError> {
        let equipment = self
            .equipment(equipment_id)
            .ok_or_else(|| StoreError::EquipmentNotFound(equipment_id.clone()))?;
        let names = naming::apply_name_pattern(pattern, equipment.ports())?;
        if names.is_empty() {
            debug!("Pattern '{}' named no ports on '{}'", pattern, equipment_id);
            return Ok(0);
        }

        let renamed: Vec<Port> = equipment
            .ports()
            .iter()
            .map(|port| {
                let mut port = port.clone();
                if let Some(name) = names.get(&port.id) {
                    port.name = name.clone();
                }
                port
            })
            .collect();
        let total = renamed.len();

        self.transact(|state| {
            let equipment = find_equipment_mut(state, equipment_id)?;
            equipment.replace_ports(renamed);
            equipment.touch();
            Ok(())
        })?;
        info!(
            "Renamed {} of {} ports on '{}' with pattern '{}'",
            names.len(),
            total,
            equipment_id,
            pattern
        );
        Ok(names.len())
    }

    // Filter

    pub fn filter_options(&self) -> &filter::FilterOptions {
        &self.state.filter_options
    }

    pub fn set_filter_options(&mut self, update: FilterUpdate) -> Result<(), StoreError> {
        self.transact(|state| {
            state.filter_options.merge(update);
            Ok(())
        })
    }

    pub fn clear_filters(&mut self) -> Result<(), StoreError> {
        self.transact(|state| {
            state.filter_options = filter::FilterOptions::default();
            Ok(())
        })
    }

    pub fn filtered_equipments(&self) -> Vec<&Equipment> {
        self.state.filter_options.apply(&self.state.equipments)
    }

    /// Locations offered by the location filter, taken from the filtered list
    pub fn distinct_locations(&self) -> Vec<String> {
        filter::distinct_locations(self.filtered_equipments())
    }

    /// Types offered by the type filter, taken from the filtered list
    pub fn distinct_types(&self) -> Vec<String> {
        filter::distinct_types(self.filtered_equipments())
    }

    // Theme and language

    pub fn is_dark_mode(&self) -> bool {
        self.state.is_dark_mode
    }

    /// Flip dark mode and return the new value
    pub fn toggle_dark_mode(&mut self) -> Result<bool, StoreError> {
        self.transact(|state| {
            state.is_dark_mode = !state.is_dark_mode;
            Ok(state.is_dark_mode)
        })
    }

    pub fn language(&self) -> Language {
        self.state.language
    }

    pub fn set_language(&mut self, language: Language) -> Result<(), StoreError> {
        self.transact(|state| {
            state.language = language;
            Ok(())
        })
    }

    pub fn messages(&self) -> &'static Messages {
        self.state.language.messages()
    }
}

impl Default for PortStore {
    fn default() -> Self {
        Self::in_memory()
    }
}

fn find_equipment_mut<'a>(
    state: &'a mut PersistedState,
    id: &EquipmentId,
) -> Result<&'a mut Equipment, StoreError> {
    state
        .equipments
        .iter_mut()
        .find(|eq| &eq.id == id)
        .ok_or_else(|| StoreError::EquipmentNotFound(id.clone()))
}
