use chrono::{Local, NaiveDateTime};
use serde::Serialize;
use uuid::Uuid;

use super::enums::{MessageRole, SeverityColor};
use super::severity::SeverityLevel;

/// One exchange unit in the transcript. Append-only: never mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatMessage {
    pub id: Uuid,
    pub role: MessageRole,
    pub content: String,
    pub timestamp: NaiveDateTime,
    pub severity: Option<&'static SeverityLevel>,
}

impl ChatMessage {
    pub fn new(
        stamp: MessageStamp,
        role: MessageRole,
        content: impl Into<String>,
        severity: Option<&'static SeverityLevel>,
    ) -> Self {
        Self {
            id: stamp.id,
            role,
            content: content.into(),
            timestamp: stamp.timestamp,
            severity,
        }
    }

    /// Black-tier messages must be surfaced with a blocking emergency prompt.
    pub fn is_emergency(&self) -> bool {
        self.severity
            .is_some_and(|s| s.level == SeverityColor::Black)
    }
}

/// Identity and time assigned to a message by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageStamp {
    pub id: Uuid,
    pub timestamp: NaiveDateTime,
}

/// Source of message identifiers and timestamps.
pub trait MessageStamper {
    fn next_stamp(&mut self) -> MessageStamp;
}

/// Random v4 ids with local wall-clock time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemStamper;

impl MessageStamper for SystemStamper {
    fn next_stamp(&mut self) -> MessageStamp {
        MessageStamp {
            id: Uuid::new_v4(),
            timestamp: Local::now().naive_local(),
        }
    }
}
