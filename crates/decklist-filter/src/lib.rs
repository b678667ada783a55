//! decklist-filter: record model, search conditions, and the bit-flag matcher.
//!
//! Records carry one feature mask per field; a search keeps the records
//! whose mask contains every required flag, field by field.
//!
//! # Example
//!
//! ```
//! use decklist_filter::{Record, SearchConditions, search};
//!
//! let records = vec![
//!     Record::new("taro").with_mask("skills1", 10).with_mask("skills2", 5),
//!     Record::new("jiro").with_mask("skills1", 11).with_mask("skills2", 2),
//! ];
//! let conditions = SearchConditions::new()
//!     .with_field("skills1", [2, 8])
//!     .with_field("skills2", [4]);
//!
//! let found = search(records, &conditions);
//! assert_eq!(found.len(), 1);
//! assert_eq!(found[0].name, "taro");
//! ```

pub mod condition;
pub mod parse;
pub mod record;
pub mod search;

pub use condition::*;
pub use parse::*;
pub use record::*;
pub use search::*;
