//! Console harness for the symptom analysis chat.
//!
//! Reads one utterance per line from stdin. `/quit` or EOF exits,
//! `/symptoms <query>` searches the symptom reference. With `--json` stdout
//! carries only JSON lines: one per turn outcome or glossary search. The
//! disclaimer, greeting and farewell are omitted in that mode.

use std::io::{self, BufRead, Write};

use symptom_checker_lib::chat::{ChatError, ChatSession, TurnOutcome};
use symptom_checker_lib::config::{self, TriageConfig};
use symptom_checker_lib::glossary;
use symptom_checker_lib::models::{ChatMessage, MessageStamper};
use symptom_checker_lib::triage::messages::DISCLAIMER_TITLE;

/// Renders session output for either the interactive or the JSON-lines mode.
struct Console {
    json_mode: bool,
}

impl Console {
    fn format_message(message: &ChatMessage) -> String {
        match message.severity {
            Some(level) => format!("\n[{}] {}\n{}\n", level.label, level.action, message.content),
            None => format!("\n{}\n", message.content),
        }
    }

    /// Disclaimer and greeting, accepting the disclaimer either way.
    fn intro<S: MessageStamper>(&self, session: &mut ChatSession<S>) -> Option<String> {
        let disclaimer = session.disclaimer_text();
        let welcome = session.accept_disclaimer();
        if self.json_mode {
            return None;
        }
        Some(format!(
            "{}\n\n{}\n{}",
            DISCLAIMER_TITLE,
            disclaimer,
            Self::format_message(welcome)
        ))
    }

    fn outcome(&self, outcome: &TurnOutcome) -> Result<String, serde_json::Error> {
        if self.json_mode {
            return serde_json::to_string(outcome);
        }
        let mut out = Self::format_message(&outcome.reply);
        if let Some(alert) = &outcome.emergency_alert {
            let actions: Vec<&str> = alert.actions.iter().map(|a| a.label.as_str()).collect();
            out.push_str(&format!(
                "*** {} ***\n{}\n[{}]\n",
                alert.title,
                alert.body,
                actions.join("] [")
            ));
        }
        Ok(out)
    }

    fn glossary(&self, query: &str) -> Result<String, serde_json::Error> {
        let found = glossary::search(query);
        if self.json_mode {
            return serde_json::to_string(&found);
        }
        Ok(found
            .iter()
            .map(|entry| {
                format!(
                    "- {} ({}, {}): {}",
                    entry.name,
                    entry.category.label(),
                    entry.severity_level().label,
                    entry.description
                )
            })
            .collect::<Vec<_>>()
            .join("\n"))
    }

    fn farewell(&self) -> Option<&'static str> {
        (!self.json_mode).then_some("Goodbye!")
    }
}

fn main() {
    symptom_checker_lib::init_tracing();
    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let console = Console {
        json_mode: std::env::args().skip(1).any(|a| a == "--json"),
    };
    let mut session = ChatSession::new(TriageConfig::from_env());

    if let Some(intro) = console.intro(&mut session) {
        println!("{}", intro);
    }

    let stdin = io::stdin();
    loop {
        if !console.json_mode {
            print!("You: ");
            io::stdout().flush().unwrap_or_default();
        }

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {
                let input = line.trim();
                if input == "/quit" || input == "/exit" {
                    break;
                }

                let rendered = if let Some(query) = input.strip_prefix("/symptoms") {
                    console.glossary(query)
                } else {
                    match session.send(input) {
                        Ok(outcome) => console.outcome(&outcome),
                        Err(ChatError::EmptyInput) => continue,
                        Err(e) => {
                            eprintln!("Error: {}", e);
                            break;
                        }
                    }
                };

                match rendered {
                    Ok(text) => println!("{}", text),
                    Err(e) => eprintln!("Serialization error: {}", e),
                }
            }
            Err(e) => {
                eprintln!("Read error: {}", e);
                break;
            }
        }
    }

    if let Some(farewell) = console.farewell() {
        println!("{}", farewell);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_json_line(text: &str) -> bool {
        !text.contains('\n') && serde_json::from_str::<serde_json::Value>(text).is_ok()
    }

    #[test]
    fn json_mode_emits_only_json_lines() {
        let console = Console { json_mode: true };
        let mut session = ChatSession::new(TriageConfig::default());

        assert!(console.intro(&mut session).is_none());
        assert!(session.disclaimer_accepted());
        assert_eq!(session.messages().len(), 1);

        let outcome = session.send("she is choking").unwrap();
        assert!(is_json_line(&console.outcome(&outcome).unwrap()));
        assert!(is_json_line(&console.glossary(" fever").unwrap()));
        assert!(console.farewell().is_none());
    }

    #[test]
    fn text_mode_prints_disclaimer_greeting_and_alert() {
        let console = Console { json_mode: false };
        let mut session = ChatSession::new(TriageConfig::default());

        let intro = console.intro(&mut session).unwrap();
        assert!(intro.starts_with(DISCLAIMER_TITLE));
        assert!(intro.contains("Hello!"));

        let outcome = session.send("he is unconscious").unwrap();
        let text = console.outcome(&outcome).unwrap();
        assert!(text.contains("*** 🚨 MEDICAL EMERGENCY ***"));
        assert!(text.contains("[Call 108]"));
        assert_eq!(console.farewell(), Some("Goodbye!"));
    }

    #[test]
    fn glossary_text_lists_matching_entries() {
        let console = Console { json_mode: false };
        assert_eq!(console.glossary("cardio").unwrap().lines().count(), 1);
    }
}
