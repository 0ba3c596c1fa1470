//! Symptom triage engine: extraction, emergency gate, matching, severity
//! classification and the follow-up conversation.

pub mod conversation;
pub mod emergency;
pub mod knowledge;
pub mod lexicon;
pub mod matcher;
pub mod messages;
pub mod severity;

pub use conversation::{process_turn, ConversationState, Reply, ReplyKind, TriageEngine};
pub use emergency::{detect_emergency_keyword, is_emergency, EmergencyAlert, EmergencyProtocol};
pub use knowledge::{find_disease, DISEASES};
pub use lexicon::extract_symptoms;
pub use matcher::{match_diseases, score_diseases, DiseaseMatch};
pub use severity::severity_for;
