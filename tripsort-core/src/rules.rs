//! Category rule tables: keyword lists plus optional regex patterns, each
//! carrying a base confidence. Declaration order is the tie-break order, so
//! the table is an ordered Vec rather than a map.

use crate::transaction::Category;
use anyhow::{Context, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Rule declaration before pattern compilation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleSpec {
    pub category: Category,
    pub keywords: Vec<String>,
    /// Case-insensitive regex sources
    pub patterns: Vec<String>,
    pub base_confidence: f64,
}

/// A compiled rule ready for scoring
#[derive(Debug, Clone)]
pub struct CategoryRule {
    pub category: Category,
    /// Upper-cased keywords matched by substring against the description
    pub keywords: Vec<String>,
    pub patterns: Vec<Regex>,
    pub base_confidence: f64,
}

/// Immutable ordered rule table, built once and shared by reference
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Vec<CategoryRule>,
}

impl RuleSet {
    /// Compile a rule table. A malformed regex is a configuration error and
    /// fails here, at construction, never during scoring.
    pub fn compile(specs: Vec<RuleSpec>) -> Result<Self> {
        let mut rules = Vec::with_capacity(specs.len());
        for spec in specs {
            let mut patterns = Vec::with_capacity(spec.patterns.len());
            for src in &spec.patterns {
                let re = Regex::new(&format!("(?i){src}"))
                    .with_context(|| format!("invalid pattern {src:?} for {}", spec.category))?;
                patterns.push(re);
            }
            rules.push(CategoryRule {
                category: spec.category,
                keywords: spec.keywords.iter().map(|k| k.to_uppercase()).collect(),
                patterns,
                base_confidence: spec.base_confidence,
            });
        }
        Ok(Self { rules })
    }

    pub fn rules(&self) -> &[CategoryRule] {
        &self.rules
    }

    /// The production rule table.
    pub fn standard() -> Self {
        let spec = |category, keywords: &[&str], patterns: &[&str], base_confidence| RuleSpec {
            category,
            keywords: keywords.iter().map(|s| s.to_string()).collect(),
            patterns: patterns.iter().map(|s| s.to_string()).collect(),
            base_confidence,
        };

        let specs = vec![
            spec(
                Category::Airfare,
                &[
                    "airline", "airways", "delta", "united", "american", "southwest",
                    "jetblue", "alaska", "spirit", "frontier", "flight",
                ],
                &[],
                0.95,
            ),
            spec(
                Category::Hotel,
                &[
                    "hotel", "motel", "inn", "resort", "lodging", "marriott", "hilton",
                    "hyatt", "sheraton", "westin", "holiday inn", "hampton", "courtyard",
                    "fairfield", "residence inn",
                ],
                &[],
                0.95,
            ),
            spec(
                Category::Meals,
                &[
                    "restaurant", "cafe", "coffee", "starbucks", "diner", "grill",
                    "kitchen", "food", "pizza", "sushi", "chipotle", "mcdonalds",
                    "subway", "panera", "dunkin",
                ],
                &[r"\b(breakfast|lunch|dinner)\b", r"\bsteakhouse\b"],
                0.85,
            ),
            spec(
                Category::Transportation,
                &[
                    "uber", "lyft", "taxi", "cab", "rental", "hertz", "avis",
                    "enterprise", "budget", "national", "parking", "toll",
                ],
                &[],
                0.90,
            ),
            spec(
                Category::Supplies,
                &[
                    "office depot", "staples", "best buy", "apple store", "microsoft",
                    "amazon", "supplies", "equipment",
                ],
                &[],
                0.80,
            ),
            spec(
                Category::Entertainment,
                &["theater", "cinema", "concert", "museum", "sports", "golf", "entertainment"],
                &[],
                0.75,
            ),
        ];

        // Built-in table is known good
        Self::compile(specs).expect("standard rule table compiles")
    }
}
