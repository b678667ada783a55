//! Per-field search conditions.

use decklist_features::combine;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Required flags for one record field.
///
/// Semantically a required set: a record passes iff its mask for the field
/// contains every listed flag. Order and duplicates are irrelevant since
/// the flags reduce by bitwise OR.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldCondition {
    pub flags: Vec<u64>,
}

impl FieldCondition {
    pub fn new(flags: impl IntoIterator<Item = u64>) -> Self {
        Self {
            flags: flags.into_iter().collect(),
        }
    }

    pub fn push(&mut self, flag: u64) {
        self.flags.push(flag);
    }

    /// The single mask this condition requires: the OR of all flags,
    /// starting from 0. An empty condition yields 0, which every record
    /// satisfies.
    pub fn required_mask(&self) -> u64 {
        combine(self.flags.iter().copied())
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }
}

/// Search conditions over an arbitrary number of independently-evaluated
/// fields.
///
/// Fields not named here impose no constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConditions {
    pub fields: BTreeMap<String, FieldCondition>,
}

impl SearchConditions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field's condition from a flag sequence, builder style.
    pub fn with_field(
        mut self,
        field: impl Into<String>,
        flags: impl IntoIterator<Item = u64>,
    ) -> Self {
        self.fields.insert(field.into(), FieldCondition::new(flags));
        self
    }

    /// Append one required flag to a field's condition.
    pub fn require(&mut self, field: impl Into<String>, flag: u64) {
        self.fields.entry(field.into()).or_default().push(flag);
    }

    /// No conditions at all: matches every record.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Reduce every field condition to its required mask.
    ///
    /// Computed once per search pass; the conditions are invariant while
    /// filtering.
    pub fn required_masks(&self) -> BTreeMap<&str, u64> {
        self.fields
            .iter()
            .map(|(field, condition)| (field.as_str(), condition.required_mask()))
            .collect()
    }
}
