//! Registry of named feature groups.

use std::collections::BTreeMap;

use crate::feature::{Feature, FeatureGroup};

/// Error from the group registry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("Group already registered: '{0}'")]
    AlreadyRegistered(String),
}

/// Registry of feature groups, keyed by group name.
///
/// Record fields are named after groups, so a registry is enough to resolve
/// a `field:key` pair to a concrete flag value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupRegistry {
    groups: BTreeMap<String, FeatureGroup>,
}

impl GroupRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a group. Returns an error if a group with the same name
    /// already exists.
    pub fn register(&mut self, group: FeatureGroup) -> Result<(), RegistryError> {
        if self.groups.contains_key(&group.name) {
            return Err(RegistryError::AlreadyRegistered(group.name.clone()));
        }
        self.groups.insert(group.name.clone(), group);
        Ok(())
    }

    /// Get a group by name.
    pub fn group(&self, name: &str) -> Option<&FeatureGroup> {
        self.groups.get(name)
    }

    /// Resolve a feature by group name and feature key.
    pub fn resolve(&self, group: &str, key: &str) -> Option<&Feature> {
        self.groups.get(group).and_then(|g| g.get(key))
    }

    /// Group names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    /// JSON index of every group: group name → feature key → label/bit.
    pub fn bit_index(&self) -> serde_json::Value {
        let mut map = serde_json::Map::new();
        for (name, group) in &self.groups {
            map.insert(name.clone(), group.bit_index());
        }
        serde_json::Value::Object(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> GroupRegistry {
        let mut registry = GroupRegistry::new();
        registry
            .register(
                FeatureGroup::new("skills1")
                    .define("double_crush", "Double Crush", 1)
                    .define("banish", "Banish", 3),
            )
            .unwrap();
        registry
            .register(FeatureGroup::new("skills2").define("buyback", "Buyback", 2))
            .unwrap();
        registry
    }

    #[test]
    fn register_and_lookup() {
        let registry = registry();
        assert!(registry.group("skills1").is_some());
        assert!(registry.group("skills3").is_none());
        assert_eq!(registry.resolve("skills2", "buyback").map(|f| f.bit), Some(4));
        assert!(registry.resolve("skills1", "buyback").is_none());
    }

    #[test]
    fn register_rejects_duplicate_name() {
        let mut registry = registry();
        assert_eq!(
            registry.register(FeatureGroup::new("skills1")),
            Err(RegistryError::AlreadyRegistered("skills1".to_string()))
        );
    }

    #[test]
    fn names_are_sorted() {
        let registry = registry();
        let names: Vec<&str> = registry.names().collect();
        assert_eq!(names, vec!["skills1", "skills2"]);
    }

    #[test]
    fn bit_index_nests_groups() {
        let index = registry().bit_index();
        assert_eq!(index["skills1"]["banish"]["b"], 8);
        assert_eq!(index["skills2"]["buyback"]["label"], "Buyback");
    }
}
