//! Chat session for the symptom analysis screen.
//!
//! Wraps the triage engine with what the screen needs around it:
//! - disclaimer gate and welcome greeting
//! - append-only transcript of user and engine messages
//! - the blocking emergency alert for black-tier replies

use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

use crate::config::TriageConfig;
use crate::models::enums::MessageRole;
use crate::models::{ChatMessage, MessageStamper, SystemStamper};
use crate::triage::messages::MessageTemplates;
use crate::triage::{ConversationState, EmergencyAlert, EmergencyProtocol, TriageEngine};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChatError {
    #[error("Disclaimer must be accepted before sending messages")]
    DisclaimerNotAccepted,

    #[error("Message is empty")]
    EmptyInput,
}

/// Result of one `send`.
#[derive(Debug, Clone, Serialize)]
pub struct TurnOutcome {
    pub user_message: ChatMessage,
    pub reply: ChatMessage,
    /// Present exactly when `reply` is black-tier.
    pub emergency_alert: Option<EmergencyAlert>,
}

/// One analysis session. Owned by a single screen; not shared.
pub struct ChatSession<S: MessageStamper = SystemStamper> {
    id: Uuid,
    engine: TriageEngine,
    stamper: S,
    state: ConversationState,
    messages: Vec<ChatMessage>,
    disclaimer_accepted: bool,
}

impl ChatSession<SystemStamper> {
    pub fn new(config: TriageConfig) -> Self {
        Self::with_stamper(config, SystemStamper)
    }
}

impl<S: MessageStamper> ChatSession<S> {
    pub fn with_stamper(config: TriageConfig, stamper: S) -> Self {
        Self {
            id: Uuid::new_v4(),
            engine: TriageEngine::new(config),
            stamper,
            state: ConversationState::default(),
            messages: Vec::new(),
            disclaimer_accepted: false,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn disclaimer_accepted(&self) -> bool {
        self.disclaimer_accepted
    }

    pub fn disclaimer_text(&self) -> String {
        MessageTemplates::disclaimer(&self.engine.config().emergency_number)
    }

    /// Accept the disclaimer and post the greeting. Idempotent.
    pub fn accept_disclaimer(&mut self) -> &ChatMessage {
        if !self.disclaimer_accepted {
            self.disclaimer_accepted = true;
            let welcome = ChatMessage::new(
                self.stamper.next_stamp(),
                MessageRole::Ai,
                MessageTemplates::welcome(&self.engine.config().emergency_number),
                None,
            );
            tracing::debug!(session_id = %self.id, "Disclaimer accepted");
            self.messages.push(welcome);
        }
        &self.messages[0]
    }

    /// Process one user utterance.
    pub fn send(&mut self, text: &str) -> Result<TurnOutcome, ChatError> {
        if !self.disclaimer_accepted {
            return Err(ChatError::DisclaimerNotAccepted);
        }
        let text = text.trim();
        if text.is_empty() {
            return Err(ChatError::EmptyInput);
        }

        let user_message = ChatMessage::new(self.stamper.next_stamp(), MessageRole::User, text, None);
        let (next, reply) = self.engine.process_turn(&self.state, text, &mut self.stamper);
        self.state = next;

        let emergency_alert =
            EmergencyProtocol::alert_for(&reply, &self.engine.config().emergency_number);
        if emergency_alert.is_some() {
            tracing::warn!(
                session_id = %self.id,
                message_id = %reply.id,
                "Emergency alert raised"
            );
        }

        self.messages.push(user_message.clone());
        self.messages.push(reply.clone());

        Ok(TurnOutcome {
            user_message,
            reply,
            emergency_alert,
        })
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn state(&self) -> &ConversationState {
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime, TimeDelta};

    use super::*;
    use crate::models::enums::{ConversationStage, SeverityColor};
    use crate::models::MessageStamp;

    /// Sequential ids and one-second steps from a fixed start.
    struct SequenceStamper {
        next: u128,
        start: NaiveDateTime,
    }

    impl SequenceStamper {
        fn new() -> Self {
            Self {
                next: 1,
                start: NaiveDate::from_ymd_opt(2026, 3, 1)
                    .unwrap()
                    .and_hms_opt(8, 0, 0)
                    .unwrap(),
            }
        }
    }

    impl MessageStamper for SequenceStamper {
        fn next_stamp(&mut self) -> MessageStamp {
            let n = self.next;
            self.next += 1;
            MessageStamp {
                id: Uuid::from_u128(n),
                timestamp: self.start + TimeDelta::seconds(n as i64),
            }
        }
    }

    fn session() -> ChatSession<SequenceStamper> {
        let mut s = ChatSession::with_stamper(TriageConfig::default(), SequenceStamper::new());
        s.accept_disclaimer();
        s
    }

    #[test]
    fn send_requires_disclaimer() {
        let mut s = ChatSession::with_stamper(TriageConfig::default(), SequenceStamper::new());
        assert_eq!(s.send("headache").unwrap_err(), ChatError::DisclaimerNotAccepted);
        assert!(s.messages().is_empty());
    }

    #[test]
    fn accepting_disclaimer_posts_welcome_once() {
        let mut s = session();
        s.accept_disclaimer();
        assert_eq!(s.messages().len(), 1);
        assert_eq!(s.messages()[0].role, MessageRole::Ai);
        assert!(s.messages()[0].content.starts_with("Hello!"));
        assert!(s.disclaimer_text().contains("call 108 immediately"));
    }

    #[test]
    fn blank_input_is_rejected_without_side_effects() {
        let mut s = session();
        assert_eq!(s.send("   ").unwrap_err(), ChatError::EmptyInput);
        assert_eq!(s.messages().len(), 1);
        assert!(s.state().is_initial());
    }

    #[test]
    fn send_appends_user_and_reply() {
        let mut s = session();
        let outcome = s.send("  I have a rash  ").unwrap();
        assert_eq!(outcome.user_message.content, "I have a rash");
        assert_eq!(outcome.user_message.role, MessageRole::User);
        assert_eq!(outcome.reply.role, MessageRole::Ai);
        assert!(outcome.emergency_alert.is_none());
        assert_eq!(s.messages().len(), 3);
        assert_eq!(s.state().stage, ConversationStage::GatheringInfo);

        let ids: Vec<u128> = s.messages().iter().map(|m| m.id.as_u128()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn emergency_reply_raises_alert() {
        let mut s = session();
        s.send("I have a runny nose").unwrap();
        let before = s.state().clone();

        let outcome = s.send("my father had a stroke").unwrap();
        assert_eq!(outcome.reply.role, MessageRole::System);
        assert_eq!(outcome.reply.severity.unwrap().level, SeverityColor::Black);
        let alert = outcome.emergency_alert.unwrap();
        assert_eq!(alert.title, "🚨 MEDICAL EMERGENCY");
        assert_eq!(alert.dial_number, "108");
        assert_eq!(s.state(), &before);
    }

    #[test]
    fn black_assessment_also_raises_alert() {
        let mut s = session();
        s.send("shortness of breath").unwrap();
        s.send("ten minutes").unwrap();
        let outcome = s.send("worse").unwrap();
        assert!(outcome.reply.content.contains("**Heart Attack**"));
        assert!(outcome.emergency_alert.is_some());
        assert!(s.state().is_initial());
    }

    #[test]
    fn configured_emergency_number_flows_through() {
        let config = TriageConfig {
            emergency_number: "112".into(),
            ..TriageConfig::default()
        };
        let mut s = ChatSession::with_stamper(config, SequenceStamper::new());
        assert!(s.accept_disclaimer().content.contains("call 112 immediately"));
        let outcome = s.send("she is choking").unwrap();
        assert!(outcome.reply.content.contains("Call 112 now"));
        assert_eq!(outcome.emergency_alert.unwrap().actions[0].label, "Call 112");
    }
}
