//! Prompt composition — turns persona and history into a completion payload.
//!
//! Pure string templating: the same persona and history always produce the
//! same message list.

use crate::llm::{ChatMessage, Role};
use crate::persona::{Persona, ToneStyle};
use crate::session::{Author, Turn};

/// Behavioral directives appended to every system instruction.
const STAY_IN_CHARACTER: &str = "Stay in character at all times.";
const ANSWER_FROM_BIO: &str = "Answer questions based on your bio/occupation.";
const KEEP_CONCISE: &str = "Keep responses concise (under 3 sentences) unless asked to elaborate.";

/// Extra stylistic rule for tones that carry one. Friendly and Professional
/// rely on the base instruction alone.
fn tone_rule(tone: ToneStyle) -> Option<&'static str> {
    match tone {
        ToneStyle::Hologram => Some(
            "Be futuristic, use emoji like 🌌✨, and refer to yourself as a digital entity \
             or 'digital self'.",
        ),
        ToneStyle::Pirate => Some("Speak like a pirate."),
        ToneStyle::Sarcastic => Some("Be witty and slightly snarky."),
        ToneStyle::Friendly | ToneStyle::Professional => None,
    }
}

/// Build the system instruction for the given persona: identity fields
/// verbatim, then the behavioral directives with the active tone's rule
/// selected in.
pub fn system_instruction(persona: &Persona) -> String {
    let mut lines = vec![
        format!("You are {}, a {}.", persona.name, persona.occupation),
        format!("Your personality style is: {}.", persona.tone),
        format!("Bio/Context: {}.", persona.bio),
        String::new(),
        "Instructions:".to_string(),
        format!("- {}", STAY_IN_CHARACTER),
        format!("- {}", ANSWER_FROM_BIO),
    ];
    if let Some(rule) = tone_rule(persona.tone) {
        lines.push(format!("- {}", rule));
    }
    lines.push(format!("- {}", KEEP_CONCISE));
    lines.join("\n")
}

/// Compose the ordered message list for one completion call: one system
/// entry, every prior turn in order (agent turns become `assistant`, user
/// turns stay `user`), then the new message as the final user entry. Output
/// length is always `1 + history.len() + 1`.
pub fn compose(persona: &Persona, history: &[Turn], user_message: &str) -> Vec<ChatMessage> {
    let mut messages = Vec::with_capacity(history.len() + 2);
    messages.push(ChatMessage::system(system_instruction(persona)));
    for turn in history {
        let role = match turn.author {
            Author::Agent => Role::Assistant,
            Author::User => Role::User,
        };
        messages.push(ChatMessage::new(role, turn.text.clone()));
    }
    messages.push(ChatMessage::user(user_message));
    messages
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::ConversationLog;

    #[test]
    fn pirate_gets_only_the_pirate_rule() {
        let persona = Persona::default().with_tone(ToneStyle::Pirate);
        let instruction = system_instruction(&persona);

        assert!(instruction.contains("Speak like a pirate."));
        assert!(!instruction.contains("futuristic"));
        assert!(!instruction.contains("snarky"));
    }

    #[test]
    fn hologram_speaks_as_a_digital_self() {
        let instruction = system_instruction(&Persona::default());
        assert!(instruction.contains("digital self"));
        assert!(instruction.contains("🌌✨"));
    }

    #[test]
    fn professional_carries_no_tone_rule() {
        let persona = Persona::default().with_tone(ToneStyle::Professional);
        let instruction = system_instruction(&persona);

        assert!(!instruction.contains("Speak like a pirate."));
        assert!(!instruction.contains("futuristic"));
        assert!(!instruction.contains("snarky"));
        // The base directives are always present.
        assert!(instruction.contains("Stay in character at all times."));
        assert!(instruction.contains("Keep responses concise"));
    }

    #[test]
    fn instruction_states_the_identity_fields_verbatim() {
        let persona = Persona::default()
            .with_name("Aria")
            .with_occupation("Starship Navigator")
            .with_bio("Charted the Kuiper belt twice")
            .with_tone(ToneStyle::Sarcastic);
        let instruction = system_instruction(&persona);

        assert!(instruction.contains("You are Aria, a Starship Navigator."));
        assert!(instruction.contains("Your personality style is: Sarcastic."));
        assert!(instruction.contains("Bio/Context: Charted the Kuiper belt twice."));
    }

    #[test]
    fn instruction_is_deterministic() {
        let persona = Persona::default().with_tone(ToneStyle::Friendly);
        assert_eq!(system_instruction(&persona), system_instruction(&persona));
    }

    #[test]
    fn compose_brackets_history_between_system_and_new_message() {
        let persona = Persona::default();
        let mut log = ConversationLog::new();
        log.append(Author::User, "Hello there");
        log.append(Author::Agent, "Greetings, traveler.");
        log.append(Author::User, "What can you do?");

        let messages = compose(&persona, log.turns(), "Tell me more.");

        assert_eq!(messages.len(), 5);
        assert_eq!(messages[0].role, Role::System);
        assert_eq!(messages[1].role, Role::User);
        assert_eq!(messages[1].content, "Hello there");
        assert_eq!(messages[2].role, Role::Assistant);
        assert_eq!(messages[2].content, "Greetings, traveler.");
        assert_eq!(messages[3].role, Role::User);
        assert_eq!(messages[4].role, Role::User);
        assert_eq!(messages[4].content, "Tell me more.");
    }

    #[test]
    fn compose_with_no_history_is_system_plus_user() {
        let messages = compose(&Persona::default(), &[], "First contact.");
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, Role::System);
        assert_eq!(messages[1].role, Role::User);
        assert_eq!(messages[1].content, "First contact.");
    }
}
