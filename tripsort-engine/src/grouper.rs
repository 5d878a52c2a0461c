//! Gap-threshold trip clustering.
//!
//! Input is the already filtered away-from-home transaction list, possibly
//! unsorted. Transactions whose dates sit within `max_gap_days` of the last
//! appended transaction share a trip; a larger gap closes the trip and opens
//! the next one.

use tracing::warn;
use tripsort_core::{Transaction, Trip};

/// Cluster transactions into chronological trips.
///
/// Unparseable dates never abort grouping: the offending transaction is
/// conservatively appended to the currently open trip with a warning. Trips
/// are returned in chronological order; every input transaction lands in
/// exactly one trip; no trip is empty.
pub fn group_trips(mut transactions: Vec<Transaction>, max_gap_days: i64) -> Vec<Trip> {
    if transactions.is_empty() {
        return Vec::new();
    }

    // None (unparseable) sorts before any real date
    transactions.sort_by_key(|t| t.date);

    let mut trips = Vec::new();
    let mut current: Vec<Transaction> = Vec::new();
    let mut last_date = None;

    for txn in transactions {
        if current.is_empty() {
            last_date = txn.date;
            current.push(txn);
            continue;
        }
        match (txn.date, last_date) {
            (Some(cur), Some(prev)) => {
                let gap = (cur - prev).num_days();
                if gap <= max_gap_days {
                    last_date = Some(cur);
                    current.push(txn);
                } else {
                    trips.push(Trip::new(std::mem::take(&mut current)));
                    last_date = Some(cur);
                    current.push(txn);
                }
            }
            _ => {
                // Conservative merge when either side has no usable date
                warn!(date = %txn.date_raw, "no usable date gap, appending to open trip");
                if txn.date.is_some() {
                    last_date = txn.date;
                }
                current.push(txn);
            }
        }
    }

    trips.push(Trip::new(current));
    trips
}
