//! Trip: a contiguous cluster of away-from-home transactions

use crate::transaction::{Category, Transaction};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// An ordered, non-empty cluster of transactions produced by the grouper.
/// All derived attributes are computed from the member transactions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Trip {
    pub transactions: Vec<Transaction>,
}

impl Trip {
    pub fn new(transactions: Vec<Transaction>) -> Self {
        Self { transactions }
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Earliest parseable transaction date
    pub fn start_date(&self) -> Option<NaiveDate> {
        self.transactions.iter().filter_map(|t| t.date).min()
    }

    /// Latest parseable transaction date
    pub fn end_date(&self) -> Option<NaiveDate> {
        self.transactions.iter().filter_map(|t| t.date).max()
    }

    /// Inclusive duration in days; 0 when no dates parsed
    pub fn duration_days(&self) -> i64 {
        match (self.start_date(), self.end_date()) {
            (Some(start), Some(end)) => (end - start).num_days() + 1,
            _ => 0,
        }
    }

    /// Most frequent location string; ties go to the first one seen
    pub fn primary_location(&self) -> Option<&str> {
        let mut counts: Vec<(&str, usize)> = Vec::new();
        for loc in self.transactions.iter().filter_map(|t| t.location.as_deref()) {
            match counts.iter_mut().find(|(l, _)| *l == loc) {
                Some((_, n)) => *n += 1,
                None => counts.push((loc, 1)),
            }
        }
        // Strict comparison keeps the first-seen location on ties
        let mut best: Option<(&str, usize)> = None;
        for (loc, n) in counts {
            if best.is_none_or(|(_, bn)| n > bn) {
                best = Some((loc, n));
            }
        }
        best.map(|(loc, _)| loc)
    }

    /// Summed amounts grouped by category
    pub fn category_totals(&self) -> HashMap<Category, f64> {
        let mut totals: HashMap<Category, f64> = HashMap::new();
        for t in &self.transactions {
            *totals.entry(t.category).or_insert(0.0) += t.amount;
        }
        totals
    }

    pub fn total_amount(&self) -> f64 {
        self.transactions.iter().map(|t| t.amount).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn txn(date: &str, desc: &str, amount: f64, location: &str, category: Category) -> Transaction {
        Transaction {
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").ok(),
            date_raw: date.to_string(),
            description: desc.to_string(),
            amount,
            location: Some(location.to_string()),
            category,
            confidence: 0.9,
            needs_review: false,
        }
    }

    #[test]
    fn test_trip_date_span() {
        let trip = Trip::new(vec![
            txn("2024-01-15", "UNITED AIRLINES", 523.40, "San Francisco, CA", Category::Airfare),
            txn("2024-01-17", "MARRIOTT", 289.00, "San Francisco, CA", Category::Hotel),
        ]);
        assert_eq!(trip.start_date(), NaiveDate::from_ymd_opt(2024, 1, 15));
        assert_eq!(trip.end_date(), NaiveDate::from_ymd_opt(2024, 1, 17));
        assert_eq!(trip.duration_days(), 3);
    }

    #[test]
    fn test_primary_location_most_frequent() {
        let trip = Trip::new(vec![
            txn("2024-01-15", "A", 1.0, "Seattle, WA", Category::Other),
            txn("2024-01-15", "B", 1.0, "Portland, OR", Category::Other),
            txn("2024-01-16", "C", 1.0, "Seattle, WA", Category::Other),
        ]);
        assert_eq!(trip.primary_location(), Some("Seattle, WA"));
    }

    #[test]
    fn test_primary_location_tie_goes_to_first_seen() {
        let trip = Trip::new(vec![
            txn("2024-01-15", "A", 1.0, "Boston, MA", Category::Other),
            txn("2024-01-16", "B", 1.0, "Austin, TX", Category::Other),
        ]);
        assert_eq!(trip.primary_location(), Some("Boston, MA"));
    }

    #[test]
    fn test_category_totals_and_sum() {
        let trip = Trip::new(vec![
            txn("2024-01-15", "MARRIOTT", 289.00, "Seattle, WA", Category::Hotel),
            txn("2024-01-16", "MARRIOTT", 289.00, "Seattle, WA", Category::Hotel),
            txn("2024-01-16", "STARBUCKS", 8.45, "Seattle, WA", Category::Meals),
        ]);
        let totals = trip.category_totals();
        assert_eq!(totals[&Category::Hotel], 578.00);
        assert_eq!(totals[&Category::Meals], 8.45);
        assert!((trip.total_amount() - 586.45).abs() < 1e-9);
    }
}
