//! Conversation state machine driving the analysis chat.
//!
//! A turn is a pure step `(state, text) -> (state, reply)`. The emergency gate
//! runs first and leaves the episode untouched. Otherwise symptoms are merged,
//! conditions are matched, and the engine either asks a follow-up question or
//! emits an assessment, after which the state returns to its initial defaults.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::emergency::detect_emergency_keyword;
use super::lexicon::{extract_symptoms, merge_symptoms};
use super::matcher::match_diseases;
use super::messages::{MessageTemplates, FOLLOW_UP_QUESTIONS};
use super::severity::{severity_for, BLACK, GREEN, YELLOW};
use crate::config::TriageConfig;
use crate::models::enums::{ConversationStage, MessageRole};
use crate::models::{ChatMessage, MessageStamp, MessageStamper, SeverityLevel, SystemStamper};

// ---------------------------------------------------------------------------
// ConversationState
// ---------------------------------------------------------------------------

/// Per-session episode state. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationState {
    pub stage: ConversationStage,
    /// Deduplicated accumulation of every symptom extracted this episode.
    pub user_symptoms: Vec<String>,
    /// Follow-up questions already posed, oldest first.
    pub asked_questions: Vec<String>,
    /// Reserved scratch space; not read by matching.
    pub additional_info: BTreeMap<String, String>,
}

impl Default for ConversationState {
    fn default() -> Self {
        Self {
            stage: ConversationStage::Initial,
            user_symptoms: Vec::new(),
            asked_questions: Vec::new(),
            additional_info: BTreeMap::new(),
        }
    }
}

impl ConversationState {
    pub fn is_initial(&self) -> bool {
        *self == Self::default()
    }
}

// ---------------------------------------------------------------------------
// Reply
// ---------------------------------------------------------------------------

/// Which branch of the turn algorithm produced a reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ReplyKind {
    Emergency { keyword: &'static str },
    Assessment { disease_id: &'static str },
    FollowUpQuestion,
    Monitor,
    MildAcknowledgment,
}

/// Unstamped reply; the host assigns id and timestamp.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Reply {
    pub kind: ReplyKind,
    pub role: MessageRole,
    pub content: String,
    pub severity: Option<&'static SeverityLevel>,
}

impl Reply {
    pub fn into_message(self, stamp: MessageStamp) -> ChatMessage {
        ChatMessage::new(stamp, self.role, self.content, self.severity)
    }
}

// ---------------------------------------------------------------------------
// TriageEngine
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default)]
pub struct TriageEngine {
    config: TriageConfig,
}

impl TriageEngine {
    pub fn new(config: TriageConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TriageConfig {
        &self.config
    }

    /// Run one turn without stamping the reply.
    pub fn evaluate(&self, state: &ConversationState, text: &str) -> (ConversationState, Reply) {
        if let Some(keyword) = detect_emergency_keyword(text) {
            tracing::warn!(keyword, "Emergency keyword detected, short-circuiting turn");
            return (
                state.clone(),
                Reply {
                    kind: ReplyKind::Emergency { keyword },
                    role: MessageRole::System,
                    content: MessageTemplates::emergency_detected(&self.config.emergency_number),
                    severity: Some(&BLACK),
                },
            );
        }

        let detected = extract_symptoms(text);
        let symptoms = merge_symptoms(&state.user_symptoms, &detected);
        let candidates = match_diseases(&symptoms);

        let max_questions = self.config.max_questions;
        let asked = state.asked_questions.len();
        let should_ask_more = asked < max_questions && !symptoms.is_empty();

        let stage = if !symptoms.is_empty() && should_ask_more {
            ConversationStage::GatheringInfo
        } else {
            ConversationStage::AnalysisComplete
        };

        tracing::debug!(
            detected = ?detected,
            symptoms = symptoms.len(),
            candidates = candidates.len(),
            asked,
            stage = stage.as_str(),
            "Turn evaluated"
        );

        let mut next = ConversationState {
            stage,
            user_symptoms: symptoms,
            asked_questions: state.asked_questions.clone(),
            additional_info: state.additional_info.clone(),
        };

        if let Some(best) = candidates.first() {
            if !should_ask_more || asked >= max_questions {
                let severity = severity_for(best.severity);
                tracing::info!(
                    disease_id = best.id,
                    tier = best.severity.as_str(),
                    level = severity.level.as_str(),
                    symptoms = ?next.user_symptoms,
                    "Assessment emitted, resetting episode"
                );
                return (
                    ConversationState::default(),
                    Reply {
                        kind: ReplyKind::Assessment {
                            disease_id: best.id,
                        },
                        role: MessageRole::Ai,
                        content: MessageTemplates::assessment(best),
                        severity: Some(severity),
                    },
                );
            }
        }

        if next.user_symptoms.is_empty() {
            return (
                next,
                Reply {
                    kind: ReplyKind::MildAcknowledgment,
                    role: MessageRole::Ai,
                    content: MessageTemplates::mild().to_string(),
                    severity: Some(&GREEN),
                },
            );
        }

        if should_ask_more {
            let unasked = FOLLOW_UP_QUESTIONS
                .iter()
                .find(|q| !next.asked_questions.iter().any(|a| a == *q));
            if let Some(question) = unasked {
                next.asked_questions.push((*question).to_string());
                tracing::info!(
                    asked = next.asked_questions.len(),
                    "Asking follow-up question"
                );
                return (
                    next,
                    Reply {
                        kind: ReplyKind::FollowUpQuestion,
                        role: MessageRole::Ai,
                        content: (*question).to_string(),
                        severity: None,
                    },
                );
            }
        }

        // Question budget or pool exhausted with no qualifying condition.
        tracing::info!(
            symptoms = ?next.user_symptoms,
            "No condition inferred, advising to monitor"
        );
        (
            next,
            Reply {
                kind: ReplyKind::Monitor,
                role: MessageRole::Ai,
                content: MessageTemplates::monitor().to_string(),
                severity: Some(&YELLOW),
            },
        )
    }

    /// Run one turn and stamp the reply with `stamper`.
    pub fn process_turn<S: MessageStamper + ?Sized>(
        &self,
        state: &ConversationState,
        text: &str,
        stamper: &mut S,
    ) -> (ConversationState, ChatMessage) {
        let (next, reply) = self.evaluate(state, text);
        (next, reply.into_message(stamper.next_stamp()))
    }
}

/// One turn with default configuration and system stamps.
pub fn process_turn(state: &ConversationState, text: &str) -> (ConversationState, ChatMessage) {
    TriageEngine::default().process_turn(state, text, &mut SystemStamper)
}
