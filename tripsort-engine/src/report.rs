//! Plain-text expense report rendering.

use std::fmt::Write;

use crate::summary::BulkReport;

fn fmt_date(d: Option<chrono::NaiveDate>) -> String {
    d.map(|d| d.format("%m/%d/%Y").to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

/// Render a bulk report as a plain-text summary, one block per trip.
pub fn render_report(report: &BulkReport) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "TRAVEL EXPENSE SUMMARY");
    let _ = writeln!(out, "{}", "=".repeat(50));
    let _ = writeln!(out);
    let _ = writeln!(out, "Total Travel Expenses: ${:.2}", report.grand_total);
    let _ = writeln!(out, "Number of Trips: {}", report.total_trips);
    let _ = writeln!(out);

    for trip in &report.trips {
        let _ = writeln!(out, "TRIP #{}", trip.trip_number);
        let _ = writeln!(out, "{}", "-".repeat(20));
        let _ = writeln!(
            out,
            "Dates: {} - {} ({} days)",
            fmt_date(trip.date_range.start),
            fmt_date(trip.date_range.end),
            trip.date_range.duration_days
        );
        let _ = writeln!(out, "Purpose: {}", trip.business_purpose.primary_purpose);
        let _ = writeln!(
            out,
            "Confidence: {:.0}%{}",
            trip.business_purpose.confidence * 100.0,
            if trip.ready_to_submit { " (ready to submit)" } else { " (needs review)" }
        );
        let _ = writeln!(out, "Total Amount: ${:.2}", trip.total_amount);
        let _ = writeln!(out);

        let _ = writeln!(out, "Expense Breakdown:");
        let mut totals: Vec<_> = trip.totals.iter().collect();
        totals.sort_by(|a, b| b.1.partial_cmp(a.1).unwrap_or(std::cmp::Ordering::Equal));
        for (category, amount) in totals {
            let _ = writeln!(out, "  {category}: ${amount:.2}");
        }
        let _ = writeln!(out);

        let _ = writeln!(out, "Transactions:");
        for t in &trip.transactions {
            let _ = writeln!(
                out,
                "  {} - ${:.2} - {}",
                t.date.map(|d| d.format("%m/%d/%Y").to_string()).unwrap_or_else(|| t.date_raw.clone()),
                t.amount,
                t.description
            );
        }
        let _ = writeln!(out);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::summary::process_bulk;
    use tripsort_core::{PatternSet, RawRecord, RuleSet};

    #[test]
    fn test_render_report_includes_trip_blocks() {
        let rules = RuleSet::standard();
        let patterns = PatternSet::standard();
        let records = vec![
            RawRecord {
                date: "2024-01-15".to_string(),
                description: "UNITED AIRLINES".to_string(),
                amount: 523.40,
                location: Some("San Francisco, CA".to_string()),
            },
            RawRecord {
                date: "2024-02-10".to_string(),
                description: "HILTON MIDTOWN".to_string(),
                amount: 359.0,
                location: Some("New York, NY".to_string()),
            },
        ];
        let report = process_bulk(&records, &rules, &patterns, None, None, 7);
        let text = render_report(&report);
        assert!(text.contains("Number of Trips: 2"));
        assert!(text.contains("TRIP #1"));
        assert!(text.contains("TRIP #2"));
        assert!(text.contains("AIRFARE: $523.40"));
        assert!(text.contains("01/15/2024"));
    }

    #[test]
    fn test_render_empty_report() {
        let rules = RuleSet::standard();
        let patterns = PatternSet::standard();
        let report = process_bulk(&[], &rules, &patterns, None, None, 7);
        let text = render_report(&report);
        assert!(text.contains("Number of Trips: 0"));
        assert!(text.contains("Total Travel Expenses: $0.00"));
    }
}
