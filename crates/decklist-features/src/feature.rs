//! Core feature types and mask arithmetic.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// Combine a sequence of flag values into a single mask by bitwise OR.
///
/// An empty sequence yields 0, which every mask trivially contains.
pub fn combine(flags: impl IntoIterator<Item = u64>) -> u64 {
    flags.into_iter().fold(0, |mask, flag| mask | flag)
}

/// Containment test: true iff all bits of `mask` are set in `value`.
///
/// `mask_contains(x, 0)` is true for any `x`.
pub fn mask_contains(value: u64, mask: u64) -> bool {
    value & mask == mask
}

/// Error from feature group construction or validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeatureGroupError {
    #[error("Feature '{key}' has bit {bit:#b}, which is not a single bit")]
    NotSingleBit { key: String, bit: u64 },

    #[error("Features '{first}' and '{second}' share bit {bit:#b}")]
    DuplicateBit {
        first: String,
        second: String,
        bit: u64,
    },

    #[error("Duplicate feature key '{key}'")]
    DuplicateKey { key: String },

    #[error("Unknown feature '{key}' in group '{group}'")]
    UnknownFeature { group: String, key: String },
}

/// A named single-bit flag.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "native", derive(uniffi::Record))]
pub struct Feature {
    /// Machine name, e.g. `double_crush`.
    pub key: String,
    /// Display label for UI.
    pub label: String,
    /// The flag value: a single set bit.
    pub bit: u64,
}

impl Feature {
    pub fn new(key: impl Into<String>, label: impl Into<String>, bit: u64) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            bit,
        }
    }

    /// Create a feature occupying bit position `shift`.
    pub fn from_shift(key: impl Into<String>, label: impl Into<String>, shift: u32) -> Self {
        Self::new(key, label, 1 << shift)
    }
}

/// An ordered, named collection of features (one per bit position).
///
/// A record's mask for this group is the OR of the bits of the features it
/// carries. Bit positions are caller discipline; [`FeatureGroup::validate`]
/// checks them on demand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureGroup {
    pub name: String,
    features: Vec<Feature>,
}

impl FeatureGroup {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            features: Vec::new(),
        }
    }

    /// Append a feature, builder style.
    pub fn with(mut self, feature: Feature) -> Self {
        self.features.push(feature);
        self
    }

    /// Append a feature at bit position `shift`, builder style.
    pub fn define(self, key: &str, label: &str, shift: u32) -> Self {
        self.with(Feature::from_shift(key, label, shift))
    }

    pub fn push(&mut self, feature: Feature) {
        self.features.push(feature);
    }

    /// Look up a feature by key.
    pub fn get(&self, key: &str) -> Option<&Feature> {
        self.features.iter().find(|f| f.key == key)
    }

    /// Features in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Feature> {
        self.features.iter()
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// The combined mask of the named features.
    ///
    /// An empty key sequence yields mask 0.
    pub fn mask_of<'a>(
        &self,
        keys: impl IntoIterator<Item = &'a str>,
    ) -> Result<u64, FeatureGroupError> {
        let mut mask = 0;
        for key in keys {
            let feature = self.get(key).ok_or_else(|| FeatureGroupError::UnknownFeature {
                group: self.name.clone(),
                key: key.to_string(),
            })?;
            mask |= feature.bit;
        }
        Ok(mask)
    }

    /// The features of this group whose bit is contained in `mask`, in
    /// group order.
    pub fn decompose(&self, mask: u64) -> Vec<&Feature> {
        self.features
            .iter()
            .filter(|f| mask_contains(mask, f.bit))
            .collect()
    }

    /// Check that every feature occupies a distinct single bit and that
    /// keys are unique. The matcher never calls this; masks outside the
    /// validated domain still combine and test as plain integers.
    pub fn validate(&self) -> Result<(), FeatureGroupError> {
        let mut by_bit: HashMap<u64, &str> = HashMap::new();
        let mut seen_keys = std::collections::HashSet::new();
        for feature in &self.features {
            if !seen_keys.insert(feature.key.as_str()) {
                return Err(FeatureGroupError::DuplicateKey {
                    key: feature.key.clone(),
                });
            }
            if !feature.bit.is_power_of_two() {
                return Err(FeatureGroupError::NotSingleBit {
                    key: feature.key.clone(),
                    bit: feature.bit,
                });
            }
            if let Some(first) = by_bit.insert(feature.bit, &feature.key) {
                return Err(FeatureGroupError::DuplicateBit {
                    first: first.to_string(),
                    second: feature.key.clone(),
                    bit: feature.bit,
                });
            }
        }
        Ok(())
    }

    /// JSON index of the group: feature key → `{ "label": ..., "b": bit }`.
    ///
    /// The shape consumed by UI pickers.
    pub fn bit_index(&self) -> serde_json::Value {
        let mut map = serde_json::Map::new();
        for feature in &self.features {
            let mut entry = serde_json::Map::new();
            entry.insert(
                "label".to_string(),
                serde_json::Value::String(feature.label.clone()),
            );
            entry.insert(
                "b".to_string(),
                serde_json::Value::Number(feature.bit.into()),
            );
            map.insert(feature.key.clone(), serde_json::Value::Object(entry));
        }
        serde_json::Value::Object(map)
    }
}

// ===== FFI-friendly exports =====

/// Combine flag values into a mask (exposed for FFI).
#[cfg(feature = "native")]
#[uniffi::export]
pub fn combine_flags(flags: Vec<u64>) -> u64 {
    combine(flags)
}

/// Containment test (exposed for FFI).
#[cfg(feature = "native")]
#[uniffi::export]
pub fn mask_contains_all(value: u64, mask: u64) -> bool {
    mask_contains(value, mask)
}
