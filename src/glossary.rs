//! Symptom reference: a small static glossary with search.
//!
//! Educational only. Entries are independent of the triage lexicon and the
//! knowledge base.

use serde::Serialize;

use crate::models::enums::{SeverityTier, SymptomCategory};
use crate::models::SeverityLevel;
use crate::triage::severity_for;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SymptomReference {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub severity: SeverityTier,
    pub category: SymptomCategory,
    pub common_causes: &'static [&'static str],
    /// "Seek immediate care if" list.
    pub red_flags: &'static [&'static str],
}

impl SymptomReference {
    pub fn severity_level(&self) -> &'static SeverityLevel {
        severity_for(self.severity)
    }

    fn matches(&self, query_lower: &str) -> bool {
        self.name.to_lowercase().contains(query_lower)
            || self.description.to_lowercase().contains(query_lower)
            || self.category.label().to_lowercase().contains(query_lower)
    }
}

pub static COMMON_SYMPTOMS: &[SymptomReference] = &[
    SymptomReference {
        id: "1",
        name: "Headache",
        description: "Pain or discomfort in the head or neck area",
        severity: SeverityTier::Low,
        category: SymptomCategory::Neurological,
        common_causes: &["Tension", "Dehydration", "Stress", "Lack of sleep"],
        red_flags: &["Sudden severe onset", "Fever", "Vision changes", "Neck stiffness"],
    },
    SymptomReference {
        id: "2",
        name: "Chest Pain",
        description: "Pain or discomfort in the chest area",
        severity: SeverityTier::Urgent,
        category: SymptomCategory::Cardiovascular,
        common_causes: &["Muscle strain", "Acid reflux", "Anxiety"],
        red_flags: &["Crushing pain", "Shortness of breath", "Sweating", "Nausea"],
    },
    SymptomReference {
        id: "3",
        name: "Fever",
        description: "Body temperature above normal range",
        severity: SeverityTier::Moderate,
        category: SymptomCategory::General,
        common_causes: &["Infection", "Inflammation", "Heat exhaustion"],
        red_flags: &[
            "Very high fever (>104°F)",
            "Severe headache",
            "Difficulty breathing",
        ],
    },
];

/// Entries whose name, description or category contains `query`
/// (case-insensitive). A blank query returns everything.
pub fn search(query: &str) -> Vec<&'static SymptomReference> {
    let query = query.trim();
    if query.is_empty() {
        return COMMON_SYMPTOMS.iter().collect();
    }
    let query_lower = query.to_lowercase();
    COMMON_SYMPTOMS
        .iter()
        .filter(|s| s.matches(&query_lower))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::enums::SeverityColor;

    fn names(found: &[&SymptomReference]) -> Vec<&'static str> {
        found.iter().map(|s| s.name).collect()
    }

    #[test]
    fn blank_query_returns_all() {
        assert_eq!(search("").len(), 3);
        assert_eq!(search("   ").len(), 3);
    }

    #[test]
    fn search_by_name_is_case_insensitive() {
        assert_eq!(names(&search("FEVER")), vec!["Fever"]);
    }

    #[test]
    fn search_by_description() {
        assert_eq!(names(&search("neck")), vec!["Headache"]);
        // "Pain or discomfort" appears in two descriptions
        assert_eq!(names(&search("discomfort")), vec!["Headache", "Chest Pain"]);
    }

    #[test]
    fn search_by_category() {
        assert_eq!(names(&search("cardio")), vec!["Chest Pain"]);
        assert_eq!(names(&search("general")), vec!["Fever"]);
    }

    #[test]
    fn red_flags_are_not_searched() {
        assert!(search("crushing").is_empty());
    }

    #[test]
    fn severity_level_uses_classifier() {
        let levels: Vec<SeverityColor> = COMMON_SYMPTOMS
            .iter()
            .map(|s| s.severity_level().level)
            .collect();
        assert_eq!(
            levels,
            vec![SeverityColor::Green, SeverityColor::Red, SeverityColor::Yellow]
        );
    }
}
