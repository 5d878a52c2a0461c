//! Business-purpose inference over one trip's categorized transactions.
//!
//! Patterns are evaluated in the pattern set's declared priority order; the
//! highest purpose-specific confidence wins and equal scores keep the
//! earlier-declared pattern. When nothing matches, a duration- and city-based
//! default purpose is produced at fixed 0.6 confidence.

use std::collections::HashMap;
use tripsort_core::{
    BusinessPurpose, Category, DateRange, PatternSet, PurposeKind, PurposeMetadata, PurposePattern,
    Transaction,
};

/// Fixed confidence for the default (no pattern matched) purpose
const DEFAULT_CONFIDENCE: f64 = 0.6;
/// Base confidence shared by all patterns without a boost condition
const BASE_CONFIDENCE: f64 = 0.7;

/// Evaluates an injected pattern table against a trip. Pure; no state beyond
/// the shared configuration reference.
pub struct PurposeInferencer<'a> {
    patterns: &'a PatternSet,
}

/// Evidence extracted once per trip and shared by all pattern checks
struct TripFacts {
    cities: Vec<String>,
    dates: DateRange,
    totals: HashMap<Category, f64>,
    total_amount: f64,
    hotel_count: usize,
    meals_count: usize,
}

impl TripFacts {
    fn gather(transactions: &[Transaction]) -> Self {
        let mut cities: Vec<String> = Vec::new();
        for t in transactions {
            if let Some(city) = t.city() {
                if !cities.iter().any(|c| c == city) {
                    cities.push(city.to_string());
                }
            }
        }

        let start = transactions.iter().filter_map(|t| t.date).min();
        let end = transactions.iter().filter_map(|t| t.date).max();
        let duration_days = match (start, end) {
            (Some(s), Some(e)) => (e - s).num_days() + 1,
            _ => 0,
        };

        let mut totals: HashMap<Category, f64> = HashMap::new();
        for t in transactions {
            *totals.entry(t.category).or_insert(0.0) += t.amount;
        }

        Self {
            cities,
            dates: DateRange { start, end, duration_days },
            total_amount: transactions.iter().map(|t| t.amount).sum(),
            hotel_count: transactions.iter().filter(|t| t.category == Category::Hotel).count(),
            meals_count: transactions.iter().filter(|t| t.category == Category::Meals).count(),
            totals,
        }
    }

    fn total(&self, category: Category) -> f64 {
        self.totals.get(&category).copied().unwrap_or(0.0)
    }

    /// Category with the largest spend; ties resolve by declaration order
    fn primary_category(&self) -> Category {
        let mut best = Category::Other;
        let mut best_total = f64::NEG_INFINITY;
        for cat in Category::ALL {
            if let Some(&total) = self.totals.get(&cat) {
                if total > best_total {
                    best_total = total;
                    best = cat;
                }
            }
        }
        if best_total == f64::NEG_INFINITY {
            Category::Other
        } else {
            best
        }
    }
}

impl<'a> PurposeInferencer<'a> {
    pub fn new(patterns: &'a PatternSet) -> Self {
        Self { patterns }
    }

    /// Infer the business purpose for one trip's transactions.
    pub fn infer(&self, transactions: &[Transaction]) -> BusinessPurpose {
        let facts = TripFacts::gather(transactions);

        let mut winner: Option<&PurposePattern> = None;
        let mut best_confidence = 0.0;

        for pattern in self.patterns.patterns() {
            if !matches(pattern, transactions, &facts) {
                continue;
            }
            let confidence = purpose_confidence(pattern.kind, transactions, &facts);
            if confidence > best_confidence {
                best_confidence = confidence;
                winner = Some(pattern);
            }
        }

        let alternatives = alternatives(&facts);
        let metadata = PurposeMetadata {
            cities: facts.cities.clone(),
            dates: facts.dates.clone(),
            total_amount: facts.total_amount,
            primary_category: facts.primary_category(),
        };

        match winner {
            Some(pattern) => BusinessPurpose::new(
                instantiate(pattern, &facts),
                alternatives,
                best_confidence,
                evidence(pattern.kind, transactions, &facts),
                metadata,
            ),
            None => BusinessPurpose::new(
                default_purpose(&facts),
                alternatives,
                DEFAULT_CONFIDENCE,
                vec!["Default pattern based on location and dates".to_string()],
                metadata,
            ),
        }
    }
}

fn matches(pattern: &PurposePattern, transactions: &[Transaction], facts: &TripFacts) -> bool {
    match pattern.kind {
        PurposeKind::Conference => {
            let keyword_hit = transactions.iter().any(|t| {
                let desc = t.description.to_lowercase();
                pattern.keywords.iter().any(|kw| desc.contains(kw))
            });
            // Multiple nights at one hotel plus a steady meal cadence reads
            // as a conference even without an explicit keyword
            keyword_hit || (facts.hotel_count >= 2 && facts.meals_count >= 4)
        }
        PurposeKind::ClientEntertainment => transactions.iter().any(|t| {
            t.category == Category::Entertainment
                || (t.category == Category::Meals && t.amount > 150.0)
        }),
        PurposeKind::MultiCityTrip => facts.cities.len() > 1,
        PurposeKind::SingleCityTrip => facts.cities.len() == 1,
        PurposeKind::Training => transactions.iter().any(|t| {
            let desc = t.description.to_lowercase();
            pattern.keywords.iter().any(|kw| desc.contains(kw))
        }),
    }
}

fn purpose_confidence(kind: PurposeKind, transactions: &[Transaction], facts: &TripFacts) -> f64 {
    match kind {
        PurposeKind::Conference => {
            let registration = transactions
                .iter()
                .any(|t| t.description.to_lowercase().contains("registration"));
            if facts.total(Category::Hotel) > 0.0 && registration {
                0.95
            } else {
                BASE_CONFIDENCE
            }
        }
        PurposeKind::ClientEntertainment => {
            if facts.total(Category::Entertainment) > 200.0 {
                0.90
            } else {
                BASE_CONFIDENCE
            }
        }
        PurposeKind::MultiCityTrip => {
            if facts.total(Category::Airfare) > 500.0 {
                0.85
            } else {
                BASE_CONFIDENCE
            }
        }
        PurposeKind::SingleCityTrip | PurposeKind::Training => BASE_CONFIDENCE,
    }
}

fn evidence(kind: PurposeKind, transactions: &[Transaction], facts: &TripFacts) -> Vec<String> {
    match kind {
        PurposeKind::Conference => vec![
            "Multiple hotel nights at same location".to_string(),
            "Regular meal pattern suggesting conference schedule".to_string(),
        ],
        PurposeKind::ClientEntertainment => {
            let high_meals: f64 = transactions
                .iter()
                .filter(|t| t.category == Category::Meals && t.amount > 100.0)
                .map(|t| t.amount)
                .sum();
            if high_meals > 0.0 {
                vec![format!(
                    "High-value meals suggesting client entertainment (${high_meals:.0})"
                )]
            } else {
                Vec::new()
            }
        }
        PurposeKind::MultiCityTrip => vec![
            format!("Travel across {} cities", facts.cities.len()),
            "Multiple transportation expenses between locations".to_string(),
        ],
        PurposeKind::SingleCityTrip | PurposeKind::Training => Vec::new(),
    }
}

/// Fill the winning template. Templates whose remaining placeholders cannot
/// be derived from trip data fall back to the first phrasing variation.
fn instantiate(pattern: &PurposePattern, facts: &TripFacts) -> String {
    let city = facts
        .cities
        .first()
        .cloned()
        .unwrap_or_else(|| "various locations".to_string());
    let cities = facts
        .cities
        .iter()
        .take(3)
        .cloned()
        .collect::<Vec<_>>()
        .join(", ");

    let fill = |text: &str| text.replace("{city}", &city).replace("{cities}", &cities);

    let filled = fill(&pattern.template);
    if !filled.contains('{') {
        return filled;
    }
    match pattern.variations.first() {
        Some(variation) => fill(variation),
        None => filled,
    }
}

fn alternatives(facts: &TripFacts) -> Vec<String> {
    let mut out = Vec::new();

    match facts.primary_category() {
        Category::Hotel => {
            let place = facts
                .cities
                .first()
                .cloned()
                .unwrap_or_else(|| "client location".to_string());
            out.push(format!("Extended business engagement in {place}"));
        }
        Category::Airfare => {
            out.push("Urgent client issue resolution requiring immediate travel".to_string());
        }
        _ => {}
    }

    if facts.total(Category::Meals) > 200.0 {
        out.push("Team building and strategy sessions with remote colleagues".to_string());
    }

    out.extend(
        [
            "Quarterly business review and planning meetings",
            "Client relationship management and account review",
            "Regional business development and market expansion",
        ]
        .map(String::from),
    );

    out.truncate(3);
    out
}

fn default_purpose(facts: &TripFacts) -> String {
    if let Some(first) = facts.cities.first() {
        let city_str = if facts.cities.len() == 1 {
            first.clone()
        } else {
            format!("{first} and other locations")
        };
        let duration = facts.dates.duration_days;
        if duration > 3 {
            format!("Extended business meetings and client engagement in {city_str}")
        } else if duration == 1 {
            format!("Day trip for business meetings in {city_str}")
        } else {
            format!("Business meetings and professional activities in {city_str}")
        }
    } else {
        "Business travel for client meetings and professional development".to_string()
    }
}
