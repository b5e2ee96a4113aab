use serde::Deserialize;

use crate::domain::menu::value_objects::DishPreferences;

/// Reply text used when a structured completion omits `bot_response`.
pub const DEFAULT_REPLY: &str = "Hmm, I'm thinking...";

/// Outcome of parsing one LLM completion. Malformed payloads degrade to
/// [`IntentExtraction::Unstructured`] instead of failing; transport-level
/// LLM errors never reach this type.
#[derive(Debug, Clone, PartialEq)]
pub enum IntentExtraction {
    Structured {
        reply: String,
        preferences: DishPreferences,
    },
    /// The completion was not a JSON object of the expected shape; the raw
    /// text is used as the reply verbatim.
    Unstructured(String),
}

#[derive(Debug, Deserialize)]
struct CompletionPayload {
    #[serde(default)]
    bot_response: Option<String>,
    #[serde(default)]
    preferences: Option<DishPreferences>,
}

pub fn parse_completion(raw: &str) -> IntentExtraction {
    match serde_json::from_str::<CompletionPayload>(raw) {
        Ok(payload) => IntentExtraction::Structured {
            reply: payload
                .bot_response
                .unwrap_or_else(|| DEFAULT_REPLY.to_string()),
            preferences: payload.preferences.unwrap_or_default(),
        },
        Err(_) => IntentExtraction::Unstructured(raw.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_reply_and_preferences() {
        let raw = r#"{"bot_response":"Spicy? You got it!","preferences":{"spice_level":"hot"}}"#;

        let extraction = parse_completion(raw);

        assert_eq!(
            extraction,
            IntentExtraction::Structured {
                reply: "Spicy? You got it!".to_string(),
                preferences: DishPreferences {
                    spice_level: Some("hot".to_string()),
                    ..DishPreferences::default()
                },
            }
        );
    }

    #[test]
    fn missing_preferences_field_means_empty_preferences() {
        let extraction = parse_completion(r#"{"bot_response":"Tell me more!"}"#);

        match extraction {
            IntentExtraction::Structured { preferences, .. } => {
                assert!(preferences.is_empty())
            }
            other => panic!("expected structured extraction, got {other:?}"),
        }
    }

    #[test]
    fn missing_bot_response_falls_back_to_the_placeholder() {
        let extraction = parse_completion(r#"{"preferences":{"dish_type":"Dessert"}}"#);

        match extraction {
            IntentExtraction::Structured { reply, .. } => assert_eq!(reply, DEFAULT_REPLY),
            other => panic!("expected structured extraction, got {other:?}"),
        }
    }

    #[test]
    fn unrecognized_preference_keys_are_dropped() {
        let raw = r#"{"bot_response":"ok","preferences":{"spice_level":"mild","mood":"happy"}}"#;

        match parse_completion(raw) {
            IntentExtraction::Structured { preferences, .. } => {
                assert_eq!(preferences.spice_level.as_deref(), Some("mild"));
            }
            other => panic!("expected structured extraction, got {other:?}"),
        }
    }

    #[test]
    fn non_json_text_passes_through_verbatim() {
        let extraction = parse_completion("Sure, tell me more!");

        assert_eq!(
            extraction,
            IntentExtraction::Unstructured("Sure, tell me more!".to_string())
        );
    }

    #[test]
    fn json_of_the_wrong_shape_passes_through_verbatim() {
        let raw = r#"["not", "an", "object"]"#;

        assert_eq!(
            parse_completion(raw),
            IntentExtraction::Unstructured(raw.to_string())
        );
    }
}
