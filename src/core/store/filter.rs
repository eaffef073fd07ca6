use crate::core::equipment::Equipment;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Equipment list filter
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterOptions {
    /// Case-insensitive substring matched against name, location and type
    pub search: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

/// Partial filter change; fields left `None` keep their value
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterUpdate {
    pub search: Option<String>,
    pub location: Option<Option<String>>,
    pub kind: Option<Option<String>>,
}

impl FilterOptions {
    pub fn is_active(&self) -> bool {
        !self.search.is_empty() || self.location.is_some() || self.kind.is_some()
    }

    pub fn merge(&mut self, update: FilterUpdate) {
        if let Some(search) = update.search {
            self.search = search;
        }
        if let Some(location) = update.location {
            self.location = location.filter(|l| !l.is_empty());
        }
        if let Some(kind) = update.kind {
            self.kind = kind.filter(|k| !k.is_empty());
        }
    }

    pub fn matches(&self, equipment: &Equipment) -> bool {
        if !self.search.is_empty() {
            let needle = self.search.to_lowercase();
            let hit = |field: Option<&str>| {
                field
                    .map(|value| value.to_lowercase().contains(&needle))
                    .unwrap_or(false)
            };
            if !(hit(Some(equipment.name.as_str()))
                || hit(equipment.location.as_deref())
                || hit(equipment.kind.as_deref()))
            {
                return false;
            }
        }
        if let Some(location) = &self.location {
            if equipment.location.as_ref() != Some(location) {
                return false;
            }
        }
        if let Some(kind) = &self.kind {
            if equipment.kind.as_ref() != Some(kind) {
                return false;
            }
        }
        true
    }

    pub fn apply<'a>(&self, equipments: &'a [Equipment]) -> Vec<&'a Equipment> {
        equipments.iter().filter(|eq| self.matches(eq)).collect()
    }
}

/// Distinct non-empty locations, sorted
pub fn distinct_locations<'a>(equipments: impl IntoIterator<Item = &'a Equipment>) -> Vec<String> {
    equipments
        .into_iter()
        .filter_map(|eq| eq.location.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Distinct non-empty types, sorted
pub fn distinct_types<'a>(equipments: impl IntoIterator<Item = &'a Equipment>) -> Vec<String> {
    equipments
        .into_iter()
        .filter_map(|eq| eq.kind.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::equipment::{Layout, NewEquipment};

    fn equipment(name: &str, location: Option<&str>, kind: Option<&str>) -> Equipment {
        let mut draft = NewEquipment::new(name, Layout::new(1, 1).unwrap());
        draft.location = location.map(str::to_string);
        draft.kind = kind.map(str::to_string);
        Equipment::new(draft, "Port")
    }

    fn fixtures() -> Vec<Equipment> {
        vec![
            equipment("Core-SW", Some("Server Room A"), Some("Switch")),
            equipment("Edge-RT", Some("Server Room B"), Some("Router")),
            equipment("Lab box", None, None),
        ]
    }

    fn names(list: Vec<&Equipment>) -> Vec<&str> {
        list.into_iter().map(|eq| eq.name.as_str()).collect()
    }

    #[test]
    fn test_empty_filter_matches_all() {
        let all = fixtures();
        let filter = FilterOptions::default();
        assert!(!filter.is_active());
        assert_eq!(filter.apply(&all).len(), 3);
    }

    #[test]
    fn test_search_is_case_insensitive_across_fields() {
        let all = fixtures();
        let mut filter = FilterOptions::default();

        filter.search = "ROUTER".to_string();
        assert_eq!(names(filter.apply(&all)), vec!["Edge-RT"]);

        filter.search = "room".to_string();
        assert_eq!(names(filter.apply(&all)), vec!["Core-SW", "Edge-RT"]);
    }

    #[test]
    fn test_location_and_type_are_exact() {
        let all = fixtures();
        let mut filter = FilterOptions::default();
        filter.merge(FilterUpdate {
            location: Some(Some("Server Room A".to_string())),
            ..FilterUpdate::default()
        });
        assert_eq!(names(filter.apply(&all)), vec!["Core-SW"]);

        filter.merge(FilterUpdate {
            kind: Some(Some("Router".to_string())),
            ..FilterUpdate::default()
        });
        assert!(filter.apply(&all).is_empty());
    }

    #[test]
    fn test_merge_clears_with_empty_value() {
        let mut filter = FilterOptions::default();
        filter.merge(FilterUpdate {
            location: Some(Some("A".to_string())),
            ..FilterUpdate::default()
        });
        filter.merge(FilterUpdate {
            location: Some(Some(String::new())),
            ..FilterUpdate::default()
        });
        assert_eq!(filter.location, None);
    }

    #[test]
    fn test_distinct_values() {
        let mut all = fixtures();
        all.push(equipment("Core-SW2", Some("Server Room A"), Some("Switch")));
        assert_eq!(distinct_locations(&all), vec!["Server Room A", "Server Room B"]);
        assert_eq!(distinct_types(&all), vec!["Router", "Switch"]);
    }
}
