//! The matcher: filter records by per-field mask containment.

use decklist_features::mask_contains;

use crate::condition::SearchConditions;
use crate::record::Record;

impl SearchConditions {
    /// Test whether a record satisfies every field condition.
    pub fn matches(&self, record: &Record) -> bool {
        self.fields
            .iter()
            .all(|(field, condition)| mask_contains(record.mask(field), condition.required_mask()))
    }
}

/// Keep the records whose mask contains every required flag, field by field.
///
/// Two passes: reduce each field's flags to a required mask once, then
/// filter. Pure and order-preserving; with no conditions the full input
/// comes back.
pub fn search(
    records: impl IntoIterator<Item = Record>,
    conditions: &SearchConditions,
) -> Vec<Record> {
    let required = conditions.required_masks();
    records
        .into_iter()
        .filter(|record| {
            required
                .iter()
                .all(|(field, mask)| mask_contains(record.mask(field), *mask))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster() -> Vec<Record> {
        vec![
            Record::new("taro").with_mask("skills1", 10).with_mask("skills2", 5),
            Record::new("jiro").with_mask("skills1", 11).with_mask("skills2", 2),
        ]
    }

    #[test]
    fn filters_by_both_fields() {
        let conditions = SearchConditions::new()
            .with_field("skills1", [2, 8])
            .with_field("skills2", [4]);
        let found = search(roster(), &conditions);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "taro");
    }

    #[test]
    fn no_conditions_returns_everything() {
        let records = roster();
        let found = search(records.clone(), &SearchConditions::new());
        assert_eq!(found, records);
    }

    #[test]
    fn matches_single_record() {
        let conditions = SearchConditions::new().with_field("skills1", [2, 8]);
        let records = roster();
        assert!(conditions.matches(&records[0]));
        assert!(conditions.matches(&records[1]));
        assert!(!SearchConditions::new()
            .with_field("skills2", [4])
            .matches(&records[1]));
    }

    #[test]
    fn unconditioned_fields_are_ignored() {
        let conditions = SearchConditions::new().with_field("skills2", [1]);
        let found = search(
            vec![Record::new("solo").with_mask("skills1", 0b1111).with_mask("skills2", 0b11)],
            &conditions,
        );
        assert_eq!(found.len(), 1);
    }

    #[test]
    fn absent_field_fails_nonzero_requirement() {
        let conditions = SearchConditions::new().with_field("skills2", [4]);
        let found = search(vec![Record::new("bare").with_mask("skills1", 10)], &conditions);
        assert!(found.is_empty());
    }
}
