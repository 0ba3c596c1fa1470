use serde::Serialize;

use super::messages::MessageTemplates;
use crate::models::ChatMessage;

// ── Keyword set ─────────────────────────────────────────────

/// Phrases that short-circuit a turn into an emergency response.
/// Checked against the raw lowercased input, independently of the lexicon.
pub static EMERGENCY_KEYWORDS: &[&str] = &[
    "chest pain",
    "can't breathe",
    "difficulty breathing",
    "severe headache",
    "unconscious",
    "stroke",
    "heart attack",
    "choking",
    "severe bleeding",
    "overdose",
    "face drooping",
    "speech difficulty",
    "sudden weakness",
    "severe abdominal pain",
];

/// First emergency keyword (in list order) contained in `text`, if any.
pub fn detect_emergency_keyword(text: &str) -> Option<&'static str> {
    let text_lower = text.to_lowercase();
    EMERGENCY_KEYWORDS
        .iter()
        .copied()
        .find(|kw| text_lower.contains(kw))
}

/// Boolean gate run before extraction on every turn.
pub fn is_emergency(text: &str) -> bool {
    detect_emergency_keyword(text).is_some()
}

// ── Host alert ──────────────────────────────────────────────

/// Blocking prompt the host shows when a reply is black-tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmergencyAlert {
    pub title: String,
    pub body: String,
    /// Number the dial affordance should call.
    pub dial_number: String,
    pub actions: Vec<EmergencyAlertAction>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmergencyAlertAction {
    pub label: String,
    pub kind: EmergencyAlertActionKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EmergencyAlertActionKind {
    /// Start a call to `dial_number`.
    Dial,
    Acknowledge,
}

/// Emergency protocol handler for black-tier replies.
pub struct EmergencyProtocol;

impl EmergencyProtocol {
    /// Build the blocking alert for `reply`, or `None` when it is not an emergency.
    pub fn alert_for(reply: &ChatMessage, emergency_number: &str) -> Option<EmergencyAlert> {
        if !reply.is_emergency() {
            return None;
        }

        Some(EmergencyAlert {
            title: MessageTemplates::emergency_alert_title().to_string(),
            body: MessageTemplates::emergency_alert_body(emergency_number),
            dial_number: emergency_number.to_string(),
            actions: vec![
                EmergencyAlertAction {
                    label: format!("Call {}", emergency_number),
                    kind: EmergencyAlertActionKind::Dial,
                },
                EmergencyAlertAction {
                    label: "I Understand".to_string(),
                    kind: EmergencyAlertActionKind::Acknowledge,
                },
            ],
        })
    }
}
