//! decklist-features: card feature (bit flag) models, groups, and masks.
//!
//! A feature is a named single-bit flag within a group (`double_crush`,
//! `lancer`, `banish`, ...). A record stores one integer mask per group,
//! formed by OR-ing the bits of the features it carries.
//!
//! # Masks
//!
//! - `combine([2, 8])` → `10` — the required mask for a set of flags
//! - `mask_contains(10, 10)` → `true` — all bits of the mask are set
//! - `mask_contains(11, 4)` → `false`
//!
//! Groups are caller-defined; [`FeatureGroup::validate`] optionally checks
//! that every bit is a distinct power of two.

#[cfg(feature = "native")]
uniffi::setup_scaffolding!();

pub mod feature;
pub mod registry;

pub use feature::*;
pub use registry::*;
