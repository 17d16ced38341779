//! Prompt construction for the language-model advice paths.
//!
//! Both prompts are built here so the outbound adapter stays transport-only.
//! The creation-time snapshot is truncated to a fixed character budget to
//! bound the payload handed to the completion endpoint.

use serde_json::Value;

use crate::domain::DateRange;

/// Maximum number of characters of serialised weather snapshot sent with an
/// advice request.
pub const SNAPSHOT_CHAR_BUDGET: usize = 6000;

/// Instruction plus input for the one-shot creation-time advice completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdvicePrompt {
    /// Fixed persona and format instructions.
    pub instructions: String,
    /// Location, date range, and truncated weather snapshot.
    pub input: String,
}

/// System prompt and the two user turns of the interactive Q&A path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionPrompt {
    /// Persona instructions for the assistant.
    pub system: String,
    /// Serialised weather context, submitted as its own turn.
    pub context: String,
    /// The user's question, submitted as the final turn.
    pub question: String,
}

/// Build the creation-time advice prompt for a resolved location and its
/// weather snapshot.
pub fn advice_prompt(location_name: &str, range: &DateRange, snapshot: &Value) -> AdvicePrompt {
    let serialised = serde_json::to_string(snapshot).unwrap_or_default();
    let truncated: String = serialised.chars().take(SNAPSHOT_CHAR_BUDGET).collect();

    AdvicePrompt {
        instructions: "You are a concise travel weather assistant. \
                       Write 3-6 short bullet points of practical advice (what to wear/bring, risks, timing). \
                       Do not mention JSON. No fluff."
            .to_owned(),
        input: format!(
            "Location: {location_name}\nDate range: {start} to {end}\n\nWeather JSON (current snapshot):\n{truncated}",
            start = range.start(),
            end = range.end(),
        ),
    }
}

/// Build the interactive Q&A prompt from a free-text question and an
/// arbitrary JSON weather context.
pub fn question_prompt(question: &str, context: &Value) -> QuestionPrompt {
    QuestionPrompt {
        system: "You are a helpful travel weather assistant.\n\n\
                 Use the provided structured weather data to answer the user's question.\n\
                 Be concise but helpful.\n\
                 Explain reasoning when comparing days."
            .to_owned(),
        context: format!(
            "Weather context:\n{}",
            serde_json::to_string_pretty(context).unwrap_or_default()
        ),
        question: format!("Question: {question}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use serde_json::json;

    fn range() -> DateRange {
        let start: NaiveDate = "2026-02-16".parse().expect("valid date");
        let end: NaiveDate = "2026-02-20".parse().expect("valid date");
        DateRange::new(start, end).expect("valid range")
    }

    #[test]
    fn advice_input_names_location_and_range() {
        let prompt = advice_prompt("Tokyo, JP", &range(), &json!({ "main": { "temp": 8.2 } }));
        assert!(prompt.input.starts_with("Location: Tokyo, JP\n"));
        assert!(prompt.input.contains("Date range: 2026-02-16 to 2026-02-20"));
        assert!(prompt.input.contains("\"temp\":8.2"));
    }

    #[test]
    fn advice_instructions_forbid_json_output() {
        let prompt = advice_prompt("Tokyo, JP", &range(), &json!({}));
        assert!(prompt.instructions.contains("3-6 short bullet points"));
        assert!(prompt.instructions.contains("Do not mention JSON"));
    }

    #[test]
    fn oversized_snapshot_is_truncated_to_the_character_budget() {
        let snapshot = json!({ "blob": "x".repeat(SNAPSHOT_CHAR_BUDGET * 2) });
        let prompt = advice_prompt("Tokyo, JP", &range(), &snapshot);
        let snapshot_part = prompt
            .input
            .split("(current snapshot):\n")
            .nth(1)
            .expect("snapshot section present");
        assert_eq!(snapshot_part.chars().count(), SNAPSHOT_CHAR_BUDGET);
    }

    #[test]
    fn question_prompt_keeps_context_and_question_separate() {
        let context = json!({
            "current": { "temp": 20 },
            "forecast": [
                { "day": "2026-02-19", "max": 22 },
                { "day": "2026-02-20", "max": 15 },
            ],
        });
        let prompt = question_prompt("Which day is warmer?", &context);
        assert!(prompt.system.contains("Explain reasoning when comparing days"));
        assert!(prompt.context.starts_with("Weather context:\n"));
        assert!(prompt.context.contains("2026-02-19"));
        assert_eq!(prompt.question, "Question: Which day is warmer?");
    }
}
