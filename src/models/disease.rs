use serde::Serialize;

use super::enums::SeverityTier;

/// A condition record from the compiled-in knowledge base. Never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Disease {
    pub id: &'static str,
    pub name: &'static str,
    /// Signature symptoms, in declaration order.
    pub symptoms: &'static [&'static str],
    pub severity: SeverityTier,
    pub description: &'static str,
    pub common_causes: &'static [&'static str],
    pub recommendations: &'static [&'static str],
    pub medicines: Option<&'static [&'static str]>,
    /// Escalation triggers specific to this condition.
    pub emergency_symptoms: &'static [&'static str],
}

impl Disease {
    /// Medicine suggestions, empty when the record declares none.
    pub fn medicines(&self) -> &'static [&'static str] {
        self.medicines.unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare_disease() -> Disease {
        Disease {
            id: "test",
            name: "Test Condition",
            symptoms: &["a", "b"],
            severity: SeverityTier::Low,
            description: "",
            common_causes: &[],
            recommendations: &[],
            medicines: None,
            emergency_symptoms: &[],
        }
    }

    #[test]
    fn medicines_defaults_to_empty() {
        assert!(bare_disease().medicines().is_empty());
    }

    #[test]
    fn medicines_returns_declared_list() {
        let disease = Disease {
            medicines: Some(&["Paracetamol 500mg"]),
            ..bare_disease()
        };
        assert_eq!(disease.medicines(), &["Paracetamol 500mg"]);
    }
}
