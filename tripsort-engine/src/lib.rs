//! tripsort-engine: categorization, trip grouping, purpose inference, and
//! summary assembly for travel-expense records.
//!
//! Flow: raw records -> Categorizer -> group_trips -> PurposeInferencer ->
//! summary assembly (per trip, then overall in bulk mode).

pub mod categorizer;
pub mod grouper;
pub mod pipeline;
pub mod purpose;
pub mod report;
pub mod summary;

pub use categorizer::Categorizer;
pub use grouper::group_trips;
pub use pipeline::{analyze, analyze_bulk, ExpenseReport, BULK_DEFAULT_START};
pub use purpose::PurposeInferencer;
pub use report::render_report;
pub use summary::{process_bulk, summarize_trip, BulkReport, ProcessingStats, TripSummary};
