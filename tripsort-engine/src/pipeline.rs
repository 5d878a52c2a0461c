//! One-shot pipeline entry points: single-trip and bulk analysis.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;
use tripsort_core::{
    BusinessPurpose, Category, PatternSet, RawRecord, RuleSet, Transaction, REVIEW_THRESHOLD,
};

use crate::categorizer::Categorizer;
use crate::purpose::PurposeInferencer;
use crate::summary::{mean_confidence, process_bulk, BulkReport, BULK_MAX_GAP_DAYS};

/// Default bulk-mode start date when no filter is given
pub const BULK_DEFAULT_START: &str = "2024-01-01";
const BATCH_SIZE: usize = 100;

/// Single-trip mode output: the full record set treated as one trip
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExpenseReport {
    pub transactions: Vec<Transaction>,
    pub business_purpose: BusinessPurpose,
    pub totals: HashMap<Category, f64>,
    pub needs_review: Vec<Transaction>,
    pub ready_to_submit: bool,
    pub confidence_score: f64,
}

/// Single-trip mode: categorize every record, infer one purpose over the
/// whole set, and assemble the report.
pub fn analyze(records: &[RawRecord], rules: &RuleSet, patterns: &PatternSet) -> ExpenseReport {
    let categorizer = Categorizer::new(rules);
    let transactions = categorizer.annotate_batch(records, BATCH_SIZE);
    debug!(count = transactions.len(), "categorization complete");

    let purpose = PurposeInferencer::new(patterns).infer(&transactions);

    let mut totals: HashMap<Category, f64> = HashMap::new();
    for t in &transactions {
        *totals.entry(t.category).or_insert(0.0) += t.amount;
    }

    let needs_review: Vec<Transaction> =
        transactions.iter().filter(|t| t.needs_review).cloned().collect();
    let ready_to_submit = needs_review.is_empty() && purpose.confidence > REVIEW_THRESHOLD;
    let confidence_score = mean_confidence(&transactions);

    ExpenseReport {
        transactions,
        business_purpose: purpose,
        totals,
        needs_review,
        ready_to_submit,
        confidence_score,
    }
}

/// Bulk mode: date-filter (defaulting the start when none given), group into
/// trips, and summarize each trip plus the aggregate.
pub fn analyze_bulk(
    records: &[RawRecord],
    rules: &RuleSet,
    patterns: &PatternSet,
    start_date: Option<&str>,
    end_date: Option<&str>,
    max_gap_days: Option<i64>,
) -> BulkReport {
    let start = start_date.unwrap_or(BULK_DEFAULT_START);
    process_bulk(
        records,
        rules,
        patterns,
        Some(start),
        end_date,
        max_gap_days.unwrap_or(BULK_MAX_GAP_DAYS),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(date: &str, desc: &str, amount: f64, location: &str) -> RawRecord {
        RawRecord {
            date: date.to_string(),
            description: desc.to_string(),
            amount,
            location: Some(location.to_string()),
        }
    }

    #[test]
    fn test_analyze_single_trip_report_shape() {
        let rules = RuleSet::standard();
        let patterns = PatternSet::standard();
        let records = vec![
            raw("2024-01-15", "UNITED AIRLINES", 523.40, "San Francisco, CA"),
            raw("2024-01-15", "MARRIOTT UNION SQUARE", 289.0, "New York, NY"),
            raw("2024-01-16", "STARBUCKS #4721", 8.45, "New York, NY"),
        ];
        let report = analyze(&records, &rules, &patterns);
        assert_eq!(report.transactions.len(), 3);
        assert_eq!(report.totals[&Category::Airfare], 523.40);
        assert_eq!(report.totals[&Category::Hotel], 289.0);
        assert!(report.confidence_score > 0.9);
        // Multi-city with > $500 airfare: purpose confidence 0.85 clears the gate
        assert_eq!(report.business_purpose.confidence, 0.85);
        assert!(report.ready_to_submit);
    }

    #[test]
    fn test_analyze_flags_unknown_merchants() {
        let rules = RuleSet::standard();
        let patterns = PatternSet::standard();
        let records = vec![
            raw("2024-01-15", "HILTON", 200.0, "Seattle, WA"),
            raw("2024-01-15", "ACME WIDGETS LLC", 75.0, "Seattle, WA"),
        ];
        let report = analyze(&records, &rules, &patterns);
        assert_eq!(report.needs_review.len(), 1);
        assert!(!report.ready_to_submit);
    }

    #[test]
    fn test_analyze_empty_input() {
        let rules = RuleSet::standard();
        let patterns = PatternSet::standard();
        let report = analyze(&[], &rules, &patterns);
        assert!(report.transactions.is_empty());
        assert_eq!(report.confidence_score, 0.0);
        assert!(report.totals.is_empty());
    }

    #[test]
    fn test_bulk_defaults_start_date() {
        let rules = RuleSet::standard();
        let patterns = PatternSet::standard();
        let records = vec![
            raw("2023-11-01", "HILTON", 200.0, "Seattle, WA"),
            raw("2024-03-01", "HILTON", 200.0, "Seattle, WA"),
        ];
        let report = analyze_bulk(&records, &rules, &patterns, None, None, None);
        // Pre-2024 record filtered out by the default start date
        assert_eq!(report.processing_stats.filtered_count, 1);
        assert_eq!(report.total_transactions, 1);
    }
}
