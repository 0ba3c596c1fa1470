use serde::{Deserialize, Serialize};

use super::ModelError;

/// Macro to generate enum with as_str + std::str::FromStr pattern
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = ModelError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(ModelError::InvalidEnum {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

str_enum!(SeverityTier {
    Low => "low",
    Moderate => "moderate",
    Concerning => "concerning",
    Urgent => "urgent",
    Emergency => "emergency",
});

impl SeverityTier {
    /// Fixed ranking used to order candidate conditions, most severe highest.
    pub fn rank(&self) -> u8 {
        match self {
            Self::Low => 1,
            Self::Moderate => 2,
            Self::Concerning => 3,
            Self::Urgent => 4,
            Self::Emergency => 5,
        }
    }
}

str_enum!(SeverityColor {
    Green => "green",
    Yellow => "yellow",
    Orange => "orange",
    Red => "red",
    Black => "black",
});

str_enum!(MessageRole {
    User => "user",
    Ai => "ai",
    System => "system",
});

str_enum!(ConversationStage {
    Initial => "initial",
    GatheringInfo => "gathering_info",
    AnalysisComplete => "analysis_complete",
});

str_enum!(SymptomCategory {
    Neurological => "neurological",
    Cardiovascular => "cardiovascular",
    General => "general",
});

impl SymptomCategory {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Neurological => "Neurological",
            Self::Cardiovascular => "Cardiovascular",
            Self::General => "General",
        }
    }
}
