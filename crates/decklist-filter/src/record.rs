//! Card records carrying per-field feature masks.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A named record with one feature mask per field.
///
/// Records are immutable inputs to the matcher; field names line up with
/// feature group names (`skills1`, `skills2`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub name: String,
    /// Field name → mask. Fields absent from the map read as 0.
    pub masks: BTreeMap<String, u64>,
}

impl Record {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            masks: BTreeMap::new(),
        }
    }

    /// Set a field's mask, builder style.
    pub fn with_mask(mut self, field: impl Into<String>, mask: u64) -> Self {
        self.masks.insert(field.into(), mask);
        self
    }

    /// The stored mask for a field, or 0 when the field is absent.
    ///
    /// An absent field therefore fails any condition whose required mask
    /// is non-zero, and passes empty conditions.
    pub fn mask(&self, field: &str) -> u64 {
        self.masks.get(field).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_field_reads_as_zero() {
        let record = Record::new("taro").with_mask("skills1", 10);
        assert_eq!(record.mask("skills1"), 10);
        assert_eq!(record.mask("skills2"), 0);
    }

    #[test]
    fn record_serde_round_trip() {
        let record = Record::new("taro")
            .with_mask("skills1", 10)
            .with_mask("skills2", 5);
        let json = serde_json::to_string(&record).unwrap();
        let back: Record = serde_json::from_str(&json).unwrap();
        assert_eq!(record, back);
    }
}
