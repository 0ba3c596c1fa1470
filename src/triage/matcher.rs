//! Disease matcher: scores knowledge-base entries against a symptom set.
//!
//! Overlap is a bidirectional, case-insensitive substring test ("mild headache"
//! matches "headache" and vice versa). The leniency is intentional and tolerates
//! false positives.

use std::cmp::Reverse;

use serde::Serialize;

use super::knowledge::DISEASES;
use crate::models::enums::SeverityTier;
use crate::models::Disease;

/// Minimum overlap for a non-emergency condition to qualify.
pub const MIN_MATCH_COUNT: usize = 2;

/// A qualifying condition with its overlap count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiseaseMatch {
    pub disease: &'static Disease,
    pub match_count: usize,
}

/// Number of `disease` signature symptoms that overlap with `normalized`
/// (already lowercased and trimmed).
pub fn match_count(disease: &Disease, normalized: &[String]) -> usize {
    disease
        .symptoms
        .iter()
        .filter(|signature| {
            let signature = signature.to_lowercase();
            normalized
                .iter()
                .any(|user| user.contains(&signature) || signature.contains(user.as_str()))
        })
        .count()
}

fn qualifies(disease: &Disease, count: usize) -> bool {
    count >= MIN_MATCH_COUNT || (count >= 1 && disease.severity == SeverityTier::Emergency)
}

/// Score every condition and return the qualifying ones, most severe tier first.
/// Within a tier, knowledge-base declaration order is kept.
pub fn score_diseases<S: AsRef<str>>(symptoms: &[S]) -> Vec<DiseaseMatch> {
    let normalized: Vec<String> = symptoms
        .iter()
        .map(|s| s.as_ref().trim().to_lowercase())
        .collect();

    let mut matches: Vec<DiseaseMatch> = DISEASES
        .iter()
        .filter_map(|disease| {
            let count = match_count(disease, &normalized);
            qualifies(disease, count).then_some(DiseaseMatch {
                disease,
                match_count: count,
            })
        })
        .collect();

    // sort_by_key is stable
    matches.sort_by_key(|m| Reverse(m.disease.severity.rank()));

    tracing::debug!(
        symptoms = normalized.len(),
        candidates = matches.len(),
        best = matches.first().map(|m| m.disease.id),
        "Disease matching complete"
    );

    matches
}

/// Qualifying conditions, best first. Callers typically use only the head.
pub fn match_diseases<S: AsRef<str>>(symptoms: &[S]) -> Vec<&'static Disease> {
    score_diseases(symptoms)
        .into_iter()
        .map(|m| m.disease)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::triage::knowledge::find_disease;

    fn ids(diseases: &[&'static Disease]) -> Vec<&'static str> {
        diseases.iter().map(|d| d.id).collect()
    }

    #[test]
    fn heart_attack_ranks_first_for_cardiac_symptoms() {
        let matches = match_diseases(&["chest pain", "shortness of breath", "sweating", "nausea"]);
        assert_eq!(matches[0].id, "heart_attack");
        assert_eq!(matches[0].severity, SeverityTier::Emergency);
    }

    #[test]
    fn common_cold_qualifies_with_three_overlaps() {
        let scored = score_diseases(&["runny nose", "sneezing", "cough"]);
        let cold = scored
            .iter()
            .find(|m| m.disease.id == "common_cold")
            .unwrap();
        assert_eq!(cold.match_count, 3);
        assert_eq!(ids(&match_diseases(&["runny nose", "sneezing", "cough"])), vec!["common_cold"]);
    }

    #[test]
    fn single_non_emergency_overlap_does_not_qualify() {
        assert!(match_diseases(&["runny nose"]).is_empty());
    }

    #[test]
    fn single_overlap_qualifies_emergency_tier() {
        // only stroke declares "confusion" in its signature
        assert_eq!(ids(&match_diseases(&["confusion"])), vec!["stroke"]);
    }

    #[test]
    fn overlap_is_bidirectional() {
        let cold = find_disease("common_cold").unwrap();
        // user phrase contains signature
        assert_eq!(match_count(cold, &["really runny nose".to_string()]), 1);
        // signature contains user phrase: "mild headache" and "low fever"
        assert_eq!(
            match_count(cold, &["headache".to_string(), "fever".to_string()]),
            2
        );
    }

    #[test]
    fn input_is_normalized() {
        assert_eq!(
            ids(&match_diseases(&["  Runny Nose ", "SNEEZING"])),
            vec!["common_cold"]
        );
    }

    #[test]
    fn sort_is_by_tier_then_declaration_order() {
        let symptoms = [
            "nausea",
            "vomiting",
            "fever",
            "headache",
            "abdominal pain",
            "chest pain",
        ];
        let matched = match_diseases(&symptoms);
        let tiers: Vec<u8> = matched.iter().map(|d| d.severity.rank()).collect();
        let mut sorted = tiers.clone();
        sorted.sort_by(|a, b| b.cmp(a));
        assert_eq!(tiers, sorted);

        // heart_attack (emergency) leads; moderate entries keep declaration order
        assert_eq!(matched[0].id, "heart_attack");
        let moderate: Vec<&str> = matched
            .iter()
            .filter(|d| d.severity == SeverityTier::Moderate)
            .map(|d| d.id)
            .collect();
        assert_eq!(moderate, vec!["flu", "migraine", "food_poisoning"]);
    }

    #[test]
    fn empty_symptom_set_matches_nothing() {
        let empty: [&str; 0] = [];
        assert!(match_diseases(&empty).is_empty());
    }

    #[test]
    fn accepts_owned_strings() {
        let owned = vec!["wheezing".to_string(), "shortness of breath".to_string()];
        let matched = match_diseases(&owned);
        // heart_attack via "shortness of breath" (emergency, 1 overlap),
        // asthma_attack via both
        assert_eq!(ids(&matched), vec!["heart_attack", "asthma_attack"]);
    }
}
