//! Home-region filter: separates away-from-home transactions (trip
//! candidates) from local spend before grouping.

use crate::transaction::Transaction;
use serde::{Deserialize, Serialize};

/// Upper-cased indicators that mark a transaction as local
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HomeRegion {
    indicators: Vec<String>,
}

impl HomeRegion {
    pub fn new(indicators: Vec<String>) -> Self {
        Self {
            indicators: indicators.iter().map(|s| s.to_uppercase()).collect(),
        }
    }

    /// Default home region: Oregon cities and the state code
    pub fn oregon() -> Self {
        Self::new(
            [
                "OR", "OREGON", "PORTLAND", "SALEM", "EUGENE", "BEND", "CORVALLIS",
                "MEDFORD", "SPRINGFIELD", "GRESHAM", "HILLSBORO", "BEAVERTON",
                "TIGARD", "LAKE OSWEGO", "MILWAUKIE", "TUALATIN",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        )
    }

    /// True when neither description nor location mentions a home indicator
    pub fn is_away(&self, txn: &Transaction) -> bool {
        let text = format!(
            "{} {}",
            txn.description,
            txn.location.as_deref().unwrap_or("")
        )
        .to_uppercase();
        !self.indicators.iter().any(|ind| text.contains(ind))
    }

    /// Keep only away-from-home transactions
    pub fn filter_away(&self, txns: Vec<Transaction>) -> Vec<Transaction> {
        txns.into_iter().filter(|t| self.is_away(t)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transaction::Category;
    use chrono::NaiveDate;

    fn txn(desc: &str, location: Option<&str>) -> Transaction {
        Transaction {
            date: NaiveDate::from_ymd_opt(2024, 1, 15),
            date_raw: "2024-01-15".to_string(),
            description: desc.to_string(),
            amount: 10.0,
            location: location.map(|s| s.to_string()),
            category: Category::Other,
            confidence: 0.0,
            needs_review: true,
        }
    }

    #[test]
    fn test_home_location_is_not_away() {
        let home = HomeRegion::oregon();
        assert!(!home.is_away(&txn("STARBUCKS #12", Some("Portland, OR"))));
        assert!(home.is_away(&txn("STARBUCKS #12", Some("Seattle, WA"))));
    }

    #[test]
    fn test_description_indicator_counts_as_home() {
        let home = HomeRegion::oregon();
        assert!(!home.is_away(&txn("PORTLAND AIRPORT PARKING", None)));
    }

    #[test]
    fn test_filter_away_preserves_order() {
        let home = HomeRegion::oregon();
        let kept = home.filter_away(vec![
            txn("HILTON", Some("Seattle, WA")),
            txn("FRED MEYER", Some("Salem, OR")),
            txn("UBER", Some("Denver, CO")),
        ]);
        assert_eq!(kept.len(), 2);
        assert_eq!(kept[0].description, "HILTON");
        assert_eq!(kept[1].description, "UBER");
    }
}
