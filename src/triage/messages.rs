use crate::models::Disease;

/// Fixed follow-up question pool, asked in this order.
pub static FOLLOW_UP_QUESTIONS: [&str; 3] = [
    "How long have you had these symptoms?",
    "On a scale of 1-10, how would you rate your discomfort?",
    "Are the symptoms getting better, worse, or staying the same?",
];

pub const DISCLAIMER_TITLE: &str = "Important Medical Disclaimer";

/// Message template builder for every reply the engine emits.
/// Assessment text is rendered verbatim by hosts, so its layout is fixed.
pub struct MessageTemplates;

impl MessageTemplates {
    /// Emergency short-circuit reply.
    pub fn emergency_detected(emergency_number: &str) -> String {
        format!(
            "🚨 EMERGENCY DETECTED: These symptoms require immediate medical attention. \
             Call {} now or go to the nearest emergency room immediately.",
            emergency_number,
        )
    }

    pub fn emergency_alert_title() -> &'static str {
        "🚨 MEDICAL EMERGENCY"
    }

    pub fn emergency_alert_body(emergency_number: &str) -> String {
        format!(
            "Call {} immediately. These symptoms require emergency medical attention.",
            emergency_number,
        )
    }

    /// Assessment for the best-matching condition.
    pub fn assessment(disease: &Disease) -> String {
        let mut content = format!(
            "Based on your symptoms, you may be experiencing **{}**.\n\n\
             **Description**: {}\n\n\
             **Recommendations**:\n{}",
            disease.name,
            disease.description,
            bullets(disease.recommendations),
        );

        let medicines = disease.medicines();
        if !medicines.is_empty() {
            content.push_str("\n\n**Suggested Medications** (consult pharmacist/doctor):\n");
            content.push_str(&bullets(medicines));
        }

        if !disease.emergency_symptoms.is_empty() {
            content.push_str("\n\n⚠️ **Seek immediate medical attention if you experience**:\n");
            content.push_str(&bullets(disease.emergency_symptoms));
        }

        content
    }

    /// Symptoms present but no condition inferred and no questions left.
    pub fn monitor() -> &'static str {
        "Thank you for the information. Based on your symptoms, I recommend monitoring \
         your condition and considering self-care measures. If symptoms persist or worsen, \
         please consult with a healthcare provider."
    }

    /// No recognizable symptoms in the episode.
    pub fn mild() -> &'static str {
        "Thank you for sharing that information. These symptoms appear to be mild. \
         Consider self-care measures and monitor your symptoms. If they worsen or persist, \
         consider consulting with a healthcare provider."
    }

    /// Greeting shown once the disclaimer is accepted.
    pub fn welcome(emergency_number: &str) -> String {
        format!(
            "Hello! I'm here to help you understand your symptoms. Please describe what \
             you're experiencing, and I'll ask follow-up questions to better assess your \
             situation.\n\nRemember: This is not a medical diagnosis. For emergencies, \
             call {} immediately.",
            emergency_number,
        )
    }

    pub fn disclaimer(emergency_number: &str) -> String {
        format!(
            "This app is for educational and informational purposes only. It does not \
             provide medical advice, diagnosis, or treatment. Always consult qualified \
             healthcare professionals for medical concerns.\n\n\
             🚨 EMERGENCY: If you're experiencing a medical emergency, call {} immediately.\n\n\
             This tool cannot replace professional medical judgment and should never be \
             used to make treatment decisions.",
            emergency_number,
        )
    }
}

fn bullets(items: &[&str]) -> String {
    items
        .iter()
        .map(|item| format!("• {}", item))
        .collect::<Vec<_>>()
        .join("\n")
}
