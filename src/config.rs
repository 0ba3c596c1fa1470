/// Application-level constants
pub const APP_NAME: &str = "Symptom Checker";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Follow-up questions asked before an assessment is emitted.
pub const MAX_FOLLOW_UP_QUESTIONS: usize = 2;

/// Number quoted in emergency replies and dialed from the emergency prompt.
pub const DEFAULT_EMERGENCY_NUMBER: &str = "108";

pub const ENV_MAX_QUESTIONS: &str = "SYMPTOM_CHECKER_MAX_QUESTIONS";
pub const ENV_EMERGENCY_NUMBER: &str = "SYMPTOM_CHECKER_EMERGENCY_NUMBER";

/// Tracing filter used when `RUST_LOG` is not set.
pub fn default_log_filter() -> &'static str {
    "info,symptom_checker_lib=debug"
}

/// Tunables for the triage engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriageConfig {
    pub max_questions: usize,
    pub emergency_number: String,
}

impl Default for TriageConfig {
    fn default() -> Self {
        Self {
            max_questions: MAX_FOLLOW_UP_QUESTIONS,
            emergency_number: DEFAULT_EMERGENCY_NUMBER.to_string(),
        }
    }
}

impl TriageConfig {
    /// Defaults overridden by environment variables. Invalid values are
    /// logged and ignored.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`TriageConfig::from_env`] with an injectable variable source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_MAX_QUESTIONS) {
            match raw.trim().parse::<usize>() {
                Ok(n) => config.max_questions = n,
                Err(_) => tracing::warn!(
                    var = ENV_MAX_QUESTIONS,
                    value = %raw,
                    "Ignoring invalid question budget"
                ),
            }
        }

        if let Some(raw) = lookup(ENV_EMERGENCY_NUMBER) {
            let number = raw.trim();
            if !number.is_empty() && number.chars().all(|c| c.is_ascii_digit()) {
                config.emergency_number = number.to_string();
            } else {
                tracing::warn!(
                    var = ENV_EMERGENCY_NUMBER,
                    value = %raw,
                    "Ignoring invalid emergency number"
                );
            }
        }

        config
    }
}
