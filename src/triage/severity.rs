//! Severity classifier: abstract condition tier → user-facing severity level.

use crate::models::enums::{SeverityColor, SeverityTier};
use crate::models::SeverityLevel;

pub static GREEN: SeverityLevel = SeverityLevel {
    level: SeverityColor::Green,
    label: "Low Risk",
    description: "Minor symptoms that may resolve with self-care",
    action: "Consider self-care measures. Monitor symptoms.",
    color: "#059669",
    background_color: "#F0FDF4",
};

pub static YELLOW: SeverityLevel = SeverityLevel {
    level: SeverityColor::Yellow,
    label: "Moderate",
    description: "Symptoms that warrant medical attention",
    action: "Schedule appointment with healthcare provider within a few days",
    color: "#D97706",
    background_color: "#FFFBEB",
};

pub static ORANGE: SeverityLevel = SeverityLevel {
    level: SeverityColor::Orange,
    label: "Concerning",
    description: "Symptoms requiring prompt medical evaluation",
    action: "Seek medical attention within 24-48 hours",
    color: "#EA580C",
    background_color: "#FFF7ED",
};

pub static RED: SeverityLevel = SeverityLevel {
    level: SeverityColor::Red,
    label: "Urgent",
    description: "Serious symptoms requiring immediate attention",
    action: "Seek immediate medical care or visit emergency room",
    color: "#DC2626",
    background_color: "#FEF2F2",
};

pub static BLACK: SeverityLevel = SeverityLevel {
    level: SeverityColor::Black,
    label: "Emergency",
    description: "Life-threatening symptoms",
    action: "Call emergency services immediately (911)",
    color: "#1F2937",
    background_color: "#F9FAFB",
};

/// All levels, mildest first.
pub static SEVERITY_LEVELS: [&SeverityLevel; 5] = [&GREEN, &YELLOW, &ORANGE, &RED, &BLACK];

/// Look up the record for a color.
pub fn severity_level(color: SeverityColor) -> &'static SeverityLevel {
    match color {
        SeverityColor::Green => &GREEN,
        SeverityColor::Yellow => &YELLOW,
        SeverityColor::Orange => &ORANGE,
        SeverityColor::Red => &RED,
        SeverityColor::Black => &BLACK,
    }
}

/// Total mapping from a condition tier to its color.
pub fn color_for(tier: SeverityTier) -> SeverityColor {
    match tier {
        SeverityTier::Low => SeverityColor::Green,
        SeverityTier::Moderate => SeverityColor::Yellow,
        SeverityTier::Concerning => SeverityColor::Orange,
        SeverityTier::Urgent => SeverityColor::Red,
        SeverityTier::Emergency => SeverityColor::Black,
    }
}

pub fn severity_for(tier: SeverityTier) -> &'static SeverityLevel {
    severity_level(color_for(tier))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_mapping_is_one_to_one() {
        for (tier, color) in [
            (SeverityTier::Low, SeverityColor::Green),
            (SeverityTier::Moderate, SeverityColor::Yellow),
            (SeverityTier::Concerning, SeverityColor::Orange),
            (SeverityTier::Urgent, SeverityColor::Red),
            (SeverityTier::Emergency, SeverityColor::Black),
        ] {
            assert_eq!(severity_for(tier).level, color);
        }
    }

    #[test]
    fn severity_for_is_idempotent() {
        let a = severity_for(SeverityTier::Concerning);
        let b = severity_for(SeverityTier::Concerning);
        assert_eq!(a, b);
        assert!(std::ptr::eq(a, b));
    }

    #[test]
    fn table_values_are_fixed() {
        assert_eq!(GREEN.label, "Low Risk");
        assert_eq!(YELLOW.color, "#D97706");
        assert_eq!(ORANGE.action, "Seek medical attention within 24-48 hours");
        assert_eq!(RED.background_color, "#FEF2F2");
        assert_eq!(BLACK.description, "Life-threatening symptoms");
    }

    #[test]
    fn levels_table_is_ordered_mildest_first() {
        let colors: Vec<SeverityColor> = SEVERITY_LEVELS.iter().map(|l| l.level).collect();
        assert_eq!(
            colors,
            vec![
                SeverityColor::Green,
                SeverityColor::Yellow,
                SeverityColor::Orange,
                SeverityColor::Red,
                SeverityColor::Black,
            ]
        );
    }
}
