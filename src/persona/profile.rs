//! Persona data model — the identity the companion presents to the user.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::avatar::{AvatarConfig, AvatarModel, AvatarShape, ColorValue};

/// Personality style. Always one of these values; the tone-keyed prompt
/// rules live in [`crate::prompt`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ToneStyle {
    #[default]
    Hologram,
    Friendly,
    Professional,
    Sarcastic,
    Pirate,
}

impl ToneStyle {
    /// All selectable styles, in presentation order.
    pub fn all() -> &'static [ToneStyle] {
        &[
            ToneStyle::Hologram,
            ToneStyle::Friendly,
            ToneStyle::Professional,
            ToneStyle::Sarcastic,
            ToneStyle::Pirate,
        ]
    }
}

impl fmt::Display for ToneStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ToneStyle::Hologram => "Hologram",
            ToneStyle::Friendly => "Friendly",
            ToneStyle::Professional => "Professional",
            ToneStyle::Sarcastic => "Sarcastic",
            ToneStyle::Pirate => "Pirate",
        };
        write!(f, "{}", name)
    }
}

/// The configurable identity: who the companion is, how it speaks, and how
/// its avatar looks. Replaced wholesale on any configuration edit; never
/// persisted across sessions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Persona {
    pub name: String,
    pub occupation: String,
    pub bio: String,
    pub tone: ToneStyle,
    pub avatar: AvatarConfig,
    /// Per-session OpenAI credential. Takes precedence over the
    /// environment fallback when present.
    pub api_key: Option<String>,
}

impl Default for Persona {
    fn default() -> Self {
        Self {
            name: "Hologram".to_string(),
            occupation: "Digital Companion".to_string(),
            bio: "I am your digital self, here to help you create, connect, and play in the \
                  virtual world."
                .to_string(),
            tone: ToneStyle::Hologram,
            avatar: AvatarConfig::default(),
            api_key: None,
        }
    }
}

impl Persona {
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_occupation(mut self, occupation: impl Into<String>) -> Self {
        self.occupation = occupation.into();
        self
    }

    pub fn with_bio(mut self, bio: impl Into<String>) -> Self {
        self.bio = bio.into();
        self
    }

    pub fn with_tone(mut self, tone: ToneStyle) -> Self {
        self.tone = tone;
        self
    }

    pub fn with_avatar_color(mut self, color: ColorValue) -> Self {
        self.avatar.color = color;
        self
    }

    pub fn with_avatar_shape(mut self, shape: AvatarShape) -> Self {
        self.avatar.shape = shape;
        self
    }

    pub fn with_avatar_model(mut self, model: AvatarModel) -> Self {
        self.avatar.model = model;
        self
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_persona_matches_session_start_values() {
        let persona = Persona::default();
        assert_eq!(persona.name, "Hologram");
        assert_eq!(persona.occupation, "Digital Companion");
        assert_eq!(
            persona.bio,
            "I am your digital self, here to help you create, connect, and play in the \
             virtual world."
        );
        assert_eq!(persona.tone, ToneStyle::Hologram);
        assert_eq!(persona.avatar.color.as_str(), "#00f2ff");
        assert!(persona.api_key.is_none());
    }

    #[test]
    fn builder_updates_leave_the_source_untouched() {
        let base = Persona::default();
        let updated = base
            .clone()
            .with_name("Aria")
            .with_tone(ToneStyle::Sarcastic)
            .with_avatar_color(ColorValue::from("#00ff00"));

        assert_eq!(base.name, "Hologram");
        assert_eq!(base.avatar.color.as_str(), "#00f2ff");
        assert_eq!(updated.name, "Aria");
        assert_eq!(updated.tone, ToneStyle::Sarcastic);
        assert_eq!(updated.avatar.color.as_str(), "#00ff00");
    }

    #[test]
    fn tone_serializes_as_its_display_name() {
        for tone in ToneStyle::all() {
            let json = serde_json::to_string(tone).unwrap();
            assert_eq!(json, format!("\"{}\"", tone));
        }
    }
}
