//! Persona Store: the companion's identity and avatar appearance.

pub mod avatar;
pub mod profile;

pub use avatar::{
    AvatarConfig, AvatarModel, AvatarShape, ColorValue, DEFAULT_AVATAR_COLOR, DEFAULT_MODEL_URL,
};
pub use profile::{Persona, ToneStyle};
