//! Symptom lexicon and free-text extraction.
//!
//! Matching is case-insensitive substring containment over the lowercased
//! input, not tokenization. Negation is not detected: "no fever" still
//! yields "fever".

/// Recognizable symptom phrases. Extraction output follows this order.
pub static SYMPTOM_LEXICON: &[&str] = &[
    "headache",
    "fever",
    "cough",
    "sore throat",
    "runny nose",
    "sneezing",
    "nausea",
    "vomiting",
    "diarrhea",
    "stomach pain",
    "abdominal pain",
    "chest pain",
    "difficulty breathing",
    "shortness of breath",
    "wheezing",
    "dizziness",
    "fatigue",
    "weakness",
    "body aches",
    "chills",
    "burning urination",
    "frequent urination",
    "back pain",
    "joint pain",
    "rash",
    "itching",
    "swelling",
    "confusion",
    "vision problems",
];

/// Return every lexicon phrase contained in `text`, in lexicon order.
pub fn extract_symptoms(text: &str) -> Vec<&'static str> {
    let text_lower = text.to_lowercase();
    SYMPTOM_LEXICON
        .iter()
        .copied()
        .filter(|symptom| text_lower.contains(symptom))
        .collect()
}

/// Merge newly extracted symptoms into an accumulated set, keeping first-seen
/// order and dropping duplicates. Nothing is ever removed.
pub fn merge_symptoms(accumulated: &[String], detected: &[&str]) -> Vec<String> {
    let mut merged = accumulated.to_vec();
    for symptom in detected {
        if !merged.iter().any(|s| s == symptom) {
            merged.push((*symptom).to_string());
        }
    }
    merged
}
