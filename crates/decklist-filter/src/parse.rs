//! Condition expression parsing.
//!
//! Parses compact condition expressions into [`SearchConditions`], resolving
//! feature keys through a [`GroupRegistry`].
//!
//! # Syntax
//!
//! ```text
//! skills1:double_crush+banish skills2:buyback
//! ```
//!
//! Tokens are whitespace-separated; each token names a field and the
//! features it requires, joined by `+`. Repeating a field appends to its
//! condition. A token with no keys (`skills2:`) still names the field but
//! requires nothing.

use decklist_features::GroupRegistry;
use thiserror::Error;

use crate::condition::SearchConditions;

/// Error from condition expression parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConditionParseError {
    #[error("Malformed condition token: '{token}'")]
    Malformed { token: String },

    #[error("Unknown feature group: '{field}'")]
    UnknownGroup { field: String },

    #[error("Unknown feature '{key}' in group '{field}'")]
    UnknownFeature { field: String, key: String },
}

/// Parse a condition expression, resolving feature keys through the
/// registry group named like each field.
///
/// An empty input yields empty conditions, which match every record.
pub fn parse_conditions(
    input: &str,
    registry: &GroupRegistry,
) -> Result<SearchConditions, ConditionParseError> {
    let mut conditions = SearchConditions::new();

    for token in input.split_whitespace() {
        let Some((field, keys)) = token.split_once(':') else {
            return Err(ConditionParseError::Malformed {
                token: token.to_string(),
            });
        };
        if field.is_empty() {
            return Err(ConditionParseError::Malformed {
                token: token.to_string(),
            });
        }
        let group = registry
            .group(field)
            .ok_or_else(|| ConditionParseError::UnknownGroup {
                field: field.to_string(),
            })?;

        // Name the field even when no keys follow the colon.
        let condition = conditions.fields.entry(field.to_string()).or_default();

        for key in keys.split('+').filter(|key| !key.is_empty()) {
            let feature = group
                .get(key)
                .ok_or_else(|| ConditionParseError::UnknownFeature {
                    field: field.to_string(),
                    key: key.to_string(),
                })?;
            condition.push(feature.bit);
        }
    }

    Ok(conditions)
}
