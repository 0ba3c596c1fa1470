use serde::Serialize;

use super::enums::SeverityColor;

/// User-facing severity signal attached to replies.
/// Values are compiled-in; the table lives in `triage::severity`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeverityLevel {
    pub level: SeverityColor,
    pub label: &'static str,
    pub description: &'static str,
    /// Recommended next step for the person.
    pub action: &'static str,
    /// Foreground color (hex).
    pub color: &'static str,
    pub background_color: &'static str,
}
