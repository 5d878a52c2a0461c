//! tripsort-core: value types and immutable configuration for the
//! travel-expense analysis engine.

pub mod home;
pub mod patterns;
pub mod purpose;
pub mod rules;
pub mod transaction;
pub mod trip;

pub use home::HomeRegion;
pub use patterns::{PatternSet, PurposeKind, PurposePattern};
pub use purpose::{BusinessPurpose, DateRange, PurposeMetadata};
pub use rules::{CategoryRule, RuleSet, RuleSpec};
pub use transaction::{Category, RawRecord, Transaction, REVIEW_THRESHOLD};
pub use trip::Trip;
