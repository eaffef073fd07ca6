use super::errors::PersistenceError;
use super::storage::StorageBackend;
use crate::core::equipment::Equipment;
use crate::core::locale::Language;
use crate::core::store::filter::FilterOptions;
use crate::core::types::EquipmentId;
use serde::{Deserialize, Serialize};

/// Everything the application persists, stored as one JSON value
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersistedState {
    pub equipments: Vec<Equipment>,
    pub selected_equipment_id: Option<EquipmentId>,
    pub filter_options: FilterOptions,
    pub is_dark_mode: bool,
    pub language: Language,
}

impl PersistedState {
    /// An empty state in the given language
    pub fn with_language(language: Language) -> Self {
        Self {
            language,
            ..Self::default()
        }
    }

    pub fn to_json(&self) -> Result<String, PersistenceError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, PersistenceError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load the snapshot stored under `key`, if any
    pub fn load(backend: &dyn StorageBackend, key: &str) -> Result<Option<Self>, PersistenceError> {
        backend.get(key)?.map(|json| Self::from_json(&json)).transpose()
    }

    pub fn save(&self, backend: &mut dyn StorageBackend, key: &str) -> Result<(), PersistenceError> {
        backend.set(key, &self.to_json()?)
    }
}
