//! Purpose pattern configuration: templates, phrasing variations, and the
//! keyword lists each pattern matches on. Declaration order is the priority
//! order used to break confidence ties.

use serde::{Deserialize, Serialize};

/// Closed set of purpose pattern kinds
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum PurposeKind {
    Conference,
    ClientEntertainment,
    MultiCityTrip,
    SingleCityTrip,
    Training,
}

/// One purpose pattern's static configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurposePattern {
    pub kind: PurposeKind,
    /// Template with optional `{city}` / `{cities}` placeholders
    pub template: String,
    /// Placeholder-free phrasing variations; the first is the fallback when
    /// the template's placeholders cannot be filled from trip data
    pub variations: Vec<String>,
    /// Lower-cased description keywords that satisfy the pattern directly
    pub keywords: Vec<String>,
}

/// Immutable, ordered pattern table
#[derive(Debug, Clone)]
pub struct PatternSet {
    patterns: Vec<PurposePattern>,
}

impl PatternSet {
    pub fn new(patterns: Vec<PurposePattern>) -> Self {
        Self { patterns }
    }

    pub fn patterns(&self) -> &[PurposePattern] {
        &self.patterns
    }

    /// The production pattern table, highest priority first.
    pub fn standard() -> Self {
        let pattern = |kind, template: &str, variations: &[&str], keywords: &[&str]| PurposePattern {
            kind,
            template: template.to_string(),
            variations: variations.iter().map(|s| s.to_string()).collect(),
            keywords: keywords.iter().map(|s| s.to_string()).collect(),
        };

        Self::new(vec![
            pattern(
                PurposeKind::Conference,
                "Attendance at {conference_name} for professional development",
                &[
                    "Industry conference attendance and networking",
                    "Professional development conference and training",
                    "Annual industry summit participation",
                ],
                &[
                    "convention", "conference", "summit", "symposium", "expo",
                    "registration", "attendee", "badge",
                ],
            ),
            pattern(
                PurposeKind::ClientEntertainment,
                "Client relationship building and entertainment in {city}",
                &[
                    "Client appreciation and relationship development",
                    "Business development with key stakeholders",
                    "Partnership cultivation and client engagement",
                ],
                &[],
            ),
            pattern(
                PurposeKind::MultiCityTrip,
                "Multi-city business development tour: {cities}",
                &[
                    "Regional client visits across {cities}",
                    "Territory business review meetings in {cities}",
                    "Partnership development meetings across {cities}",
                ],
                &[],
            ),
            pattern(
                PurposeKind::SingleCityTrip,
                "Business meetings and client engagement in {city}",
                &[
                    "Client meetings and partnership discussions in {city}",
                    "Regional business development meetings in {city}",
                    "Quarterly business review meetings in {city}",
                    "Strategic planning sessions in {city}",
                ],
                &[],
            ),
            pattern(
                PurposeKind::Training,
                "Professional training and skill development: {topic}",
                &[
                    "Technical certification training",
                    "Leadership development workshop",
                    "Industry-specific skills training",
                ],
                &["training", "course", "workshop", "certification", "academy"],
            ),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_priority_order() {
        let set = PatternSet::standard();
        let kinds: Vec<PurposeKind> = set.patterns().iter().map(|p| p.kind).collect();
        assert_eq!(
            kinds,
            vec![
                PurposeKind::Conference,
                PurposeKind::ClientEntertainment,
                PurposeKind::MultiCityTrip,
                PurposeKind::SingleCityTrip,
                PurposeKind::Training,
            ]
        );
    }

    #[test]
    fn test_conference_keywords_present() {
        let set = PatternSet::standard();
        let conf = &set.patterns()[0];
        assert!(conf.keywords.contains(&"registration".to_string()));
        assert!(!conf.variations.is_empty());
    }
}
