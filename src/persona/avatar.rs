//! Avatar appearance data consumed by a host renderer.
//!
//! The engine never renders anything itself; it only tracks which color,
//! geometry and model reference the host should display.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Default holo color (cyan).
pub const DEFAULT_AVATAR_COLOR: &str = "#00f2ff";

/// Reference to the bundled default model.
pub const DEFAULT_MODEL_URL: &str = "/avatar.glb";

// ── Color ──────────────────────────────────────────────

/// A color token exactly as the user supplied it: a named color word
/// ("teal") or `#` followed by 3-6 hex digits. Stored verbatim; resolving
/// names to actual color values is the renderer's job.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorValue(String);

impl ColorValue {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_hex(&self) -> bool {
        self.0.starts_with('#')
    }
}

impl fmt::Display for ColorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ColorValue {
    fn from(token: &str) -> Self {
        Self(token.to_string())
    }
}

impl Default for ColorValue {
    fn default() -> Self {
        Self(DEFAULT_AVATAR_COLOR.to_string())
    }
}

// ── Shape ──────────────────────────────────────────────

/// Which geometry the host renders: the loaded model or a primitive stand-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AvatarShape {
    #[default]
    Model,
    Sphere,
    Cube,
    Torus,
}

// ── Model Reference ────────────────────────────────────

/// Where the avatar model comes from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "lowercase")]
pub enum AvatarModel {
    /// The bundled default model.
    BuiltIn,
    /// A user-uploaded model file, referenced by a renderer-resolvable URL.
    Upload { url: String },
}

impl AvatarModel {
    /// Accept an uploaded model file. Only the extension is checked
    /// (`.glb` / `.gltf`, case-insensitive); content validation is out of
    /// scope at this layer.
    pub fn from_upload(path: &Path) -> Result<Self, String> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("glb") || ext.eq_ignore_ascii_case("gltf") => {
                Ok(AvatarModel::Upload {
                    url: format!("file://{}", path.display()),
                })
            }
            _ => Err(format!(
                "Unsupported avatar model '{}': expected a .glb or .gltf file",
                path.display()
            )),
        }
    }

    /// The renderer-resolvable reference for this model.
    pub fn url(&self) -> &str {
        match self {
            AvatarModel::BuiltIn => DEFAULT_MODEL_URL,
            AvatarModel::Upload { url } => url,
        }
    }

    pub fn is_default(&self) -> bool {
        matches!(self, AvatarModel::BuiltIn)
    }
}

impl Default for AvatarModel {
    fn default() -> Self {
        AvatarModel::BuiltIn
    }
}

// ── Combined Appearance ────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AvatarConfig {
    pub color: ColorValue,
    pub shape: AvatarShape,
    pub model: AvatarModel,
}
