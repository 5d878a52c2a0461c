//! Per-trip and bulk summary assembly.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;
use tripsort_core::{
    BusinessPurpose, Category, DateRange, PatternSet, RawRecord, RuleSet, Transaction, Trip,
    REVIEW_THRESHOLD,
};

use crate::categorizer::Categorizer;
use crate::grouper::group_trips;
use crate::purpose::PurposeInferencer;

/// Default gap threshold for bulk trip grouping, in days
pub const BULK_MAX_GAP_DAYS: i64 = 7;
/// Sequential chunk size for bulk categorization
const BULK_BATCH_SIZE: usize = 100;

/// One trip's assembled summary
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TripSummary {
    pub trip_number: usize,
    pub transactions: Vec<Transaction>,
    pub business_purpose: BusinessPurpose,
    pub totals: HashMap<Category, f64>,
    pub total_amount: f64,
    pub date_range: DateRange,
    /// Transactions flagged for manual review
    pub needs_review: Vec<Transaction>,
    pub ready_to_submit: bool,
    /// Mean transaction confidence; 0 for an empty trip
    pub confidence_score: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProcessingStats {
    pub original_count: usize,
    pub filtered_count: usize,
    pub categorized_count: usize,
    pub confidence_avg: f64,
}

/// Bulk-mode output across all detected trips
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BulkReport {
    pub trips: Vec<TripSummary>,
    pub total_trips: usize,
    pub total_transactions: usize,
    pub overall_totals: HashMap<Category, f64>,
    pub grand_total: f64,
    pub date_range: DateRange,
    pub processing_stats: ProcessingStats,
}

/// Mean of transaction confidences, 0 when empty
pub(crate) fn mean_confidence(transactions: &[Transaction]) -> f64 {
    if transactions.is_empty() {
        return 0.0;
    }
    transactions.iter().map(|t| t.confidence).sum::<f64>() / transactions.len() as f64
}

/// Assemble one trip's summary from its categorized transactions and
/// inferred purpose.
pub fn summarize_trip(trip_number: usize, trip: &Trip, purpose: BusinessPurpose) -> TripSummary {
    let needs_review: Vec<Transaction> = trip
        .transactions
        .iter()
        .filter(|t| t.needs_review)
        .cloned()
        .collect();
    let ready_to_submit = needs_review.is_empty() && purpose.confidence > REVIEW_THRESHOLD;

    TripSummary {
        trip_number,
        totals: trip.category_totals(),
        total_amount: trip.total_amount(),
        date_range: DateRange {
            start: trip.start_date(),
            end: trip.end_date(),
            duration_days: trip.duration_days(),
        },
        confidence_score: mean_confidence(&trip.transactions),
        transactions: trip.transactions.clone(),
        business_purpose: purpose,
        needs_review,
        ready_to_submit,
    }
}

/// Bulk mode: optional inclusive date-string pre-filter, gap grouping, then
/// per-trip categorization, purpose inference, and aggregate statistics.
pub fn process_bulk(
    records: &[RawRecord],
    rules: &RuleSet,
    patterns: &PatternSet,
    start_date: Option<&str>,
    end_date: Option<&str>,
    max_gap_days: i64,
) -> BulkReport {
    let original_count = records.len();

    // Date strings are ISO-shaped, so lexicographic compare is date compare
    let filtered: Vec<&RawRecord> = records
        .iter()
        .filter(|r| start_date.is_none_or(|s| r.date.as_str() >= s))
        .filter(|r| end_date.is_none_or(|e| r.date.as_str() <= e))
        .collect();
    let filtered_count = filtered.len();
    debug!(original_count, filtered_count, "bulk date filter applied");

    let categorizer = Categorizer::new(rules);
    let inferencer = PurposeInferencer::new(patterns);

    let owned: Vec<RawRecord> = filtered.into_iter().cloned().collect();
    let annotated = categorizer.annotate_batch(&owned, BULK_BATCH_SIZE);
    let trips = group_trips(annotated, max_gap_days);
    debug!(trips = trips.len(), "bulk trip grouping complete");

    let mut summaries = Vec::with_capacity(trips.len());
    let mut all: Vec<Transaction> = Vec::new();
    for (i, trip) in trips.iter().enumerate() {
        let purpose = inferencer.infer(&trip.transactions);
        summaries.push(summarize_trip(i + 1, trip, purpose));
        all.extend(trip.transactions.iter().cloned());
    }

    let mut overall_totals: HashMap<Category, f64> = HashMap::new();
    for t in &all {
        *overall_totals.entry(t.category).or_insert(0.0) += t.amount;
    }
    let grand_total = overall_totals.values().sum();

    let start = all.iter().filter_map(|t| t.date).min();
    let end = all.iter().filter_map(|t| t.date).max();
    let duration_days = match (start, end) {
        (Some(s), Some(e)) => (e - s).num_days() + 1,
        _ => 0,
    };

    BulkReport {
        total_trips: summaries.len(),
        total_transactions: all.len(),
        grand_total,
        date_range: DateRange { start, end, duration_days },
        processing_stats: ProcessingStats {
            original_count,
            filtered_count,
            categorized_count: all.len(),
            confidence_avg: mean_confidence(&all),
        },
        overall_totals,
        trips: summaries,
    }
}
