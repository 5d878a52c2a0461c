//! Rule-table categorization with confidence scoring.
//!
//! Each rule scores `base + min(0.1 * keyword_matches, 0.3)` capped at 1.0
//! when any keyword hits the upper-cased description, falls back to the bare
//! base confidence on a regex pattern hit, and scores 0 otherwise. The
//! highest-scoring rule wins; equal scores keep the earlier-declared rule.

use chrono::NaiveDate;
use tracing::warn;
use tripsort_core::{Category, CategoryRule, RawRecord, RuleSet, Transaction, REVIEW_THRESHOLD};

/// High-end dining keywords that push an expensive meal to entertainment
const UPSCALE_DINING: [&str; 3] = ["STEAKHOUSE", "FINE", "GRILL"];
/// Travel-venue keywords that boost meal confidence
const TRAVEL_VENUE: [&str; 2] = ["AIRPORT", "TERMINAL"];
/// Breakfast keywords that boost meal confidence
const BREAKFAST: [&str; 3] = ["BREAKFAST", "IHOP", "DENNYS"];

/// Scores transactions against an injected rule table. Pure and idempotent;
/// holds no mutable state.
pub struct Categorizer<'a> {
    rules: &'a RuleSet,
}

impl<'a> Categorizer<'a> {
    pub fn new(rules: &'a RuleSet) -> Self {
        Self { rules }
    }

    /// Categorize one record: best rule score, then the meals refinement
    /// pass. Returns (Other, 0.0) when nothing matches.
    pub fn categorize(&self, description: &str, amount: f64) -> (Category, f64) {
        let desc = description.to_uppercase();

        let mut best_category = Category::Other;
        let mut best_confidence = 0.0;

        for rule in self.rules.rules() {
            let score = score_rule(&desc, rule);
            if score > best_confidence {
                best_confidence = score;
                best_category = rule.category;
            }
        }

        if best_category == Category::Meals {
            return refine_meals(&desc, amount, best_confidence);
        }

        (best_category, best_confidence)
    }

    /// Annotate a raw record: parse the date, categorize, flag for review.
    pub fn annotate(&self, raw: &RawRecord) -> Transaction {
        let date = match NaiveDate::parse_from_str(&raw.date, "%Y-%m-%d") {
            Ok(d) => Some(d),
            Err(err) => {
                warn!(date = %raw.date, %err, "unparseable transaction date");
                None
            }
        };
        let (category, confidence) = self.categorize(&raw.description, raw.amount);
        Transaction {
            date,
            date_raw: raw.date.clone(),
            description: raw.description.clone(),
            amount: raw.amount,
            location: raw.location.clone(),
            category,
            confidence,
            needs_review: confidence < REVIEW_THRESHOLD,
        }
    }

    /// Annotate in sequential chunks. `batch_size` only bounds per-chunk
    /// work; chunks accumulate into a single result list.
    pub fn annotate_batch(&self, raws: &[RawRecord], batch_size: usize) -> Vec<Transaction> {
        let mut out = Vec::with_capacity(raws.len());
        for chunk in raws.chunks(batch_size.max(1)) {
            out.extend(chunk.iter().map(|r| self.annotate(r)));
        }
        out
    }
}

fn score_rule(desc: &str, rule: &CategoryRule) -> f64 {
    let keyword_matches = rule.keywords.iter().filter(|kw| desc.contains(kw.as_str())).count();
    if keyword_matches > 0 {
        let boost = (keyword_matches as f64 * 0.1).min(0.3);
        return (rule.base_confidence + boost).min(1.0);
    }

    if rule.patterns.iter().any(|re| re.is_match(desc)) {
        return rule.base_confidence;
    }

    0.0
}

/// Contextual second pass for meals. Expensive upscale dining becomes client
/// entertainment with a penalty; airport and breakfast venues get a boost.
fn refine_meals(desc: &str, amount: f64, confidence: f64) -> (Category, f64) {
    if amount > 100.0 && UPSCALE_DINING.iter().any(|kw| desc.contains(kw)) {
        return (Category::Entertainment, confidence * 0.9);
    }

    if TRAVEL_VENUE.iter().any(|kw| desc.contains(kw)) {
        return (Category::Meals, (confidence + 0.2).min(1.0));
    }

    if BREAKFAST.iter().any(|kw| desc.contains(kw)) {
        return (Category::Meals, (confidence + 0.15).min(1.0));
    }

    (Category::Meals, confidence)
}
