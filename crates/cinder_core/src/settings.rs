//! Engine Settings
//!
//! Runtime configuration for the animation and editor subsystems.
//!
//! Every field has a sensible default, and every section is
//! `#[serde(default)]`, so a settings file only needs to mention the values
//! it overrides.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use cinder_core::settings::EngineSettings;
//!
//! // Defaults: 100 bone slots, unbounded undo history
//! let settings = EngineSettings::default();
//!
//! // Partial override from JSON
//! let settings = EngineSettings::from_json_str(r#"{ "editor": { "max_history": 64 } }"#)?;
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::MAX_BONES;

/// Ticks-per-second assumed when an animation does not specify one.
pub const DEFAULT_TICKS_PER_SECOND: f32 = 25.0;

// ---------------------------------------------------------------------------
// AnimationSettings
// ---------------------------------------------------------------------------

/// Skeletal animation configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationSettings {
    /// Number of matrix slots in every animator's bone palette.
    ///
    /// Also the upper bound on distinct bones a model's bone registry may
    /// hold, since registry indices address palette slots directly.
    pub palette_capacity: usize,

    /// Playback speed multiplier given to freshly created animators.
    pub default_speed: f32,

    /// Ticks-per-second used when a clip's source reports zero or less.
    pub fallback_ticks_per_second: f32,
}

impl Default for AnimationSettings {
    fn default() -> Self {
        Self {
            palette_capacity: MAX_BONES,
            default_speed: 1.0,
            fallback_ticks_per_second: DEFAULT_TICKS_PER_SECOND,
        }
    }
}

// ---------------------------------------------------------------------------
// EditorSettings
// ---------------------------------------------------------------------------

/// Editor configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorSettings {
    /// Maximum number of commands kept in the undo history.
    ///
    /// `None` keeps every command. When set, the oldest command is dropped
    /// once the limit is exceeded.
    pub max_history: Option<usize>,
}

// ---------------------------------------------------------------------------
// EngineSettings
// ---------------------------------------------------------------------------

/// Top-level engine configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    pub animation: AnimationSettings,
    pub editor: EditorSettings,
}

impl EngineSettings {
    /// Parses settings from a JSON document. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let settings = serde_json::from_str(json)?;
        Ok(settings)
    }

    /// Reads and parses a JSON settings file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let settings = Self::from_json_str(&raw)?;
        log::debug!("Loaded engine settings from {}", path.display());
        Ok(settings)
    }

    /// Serializes the settings as pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_engine_constants() {
        let settings = EngineSettings::default();
        assert_eq!(settings.animation.palette_capacity, MAX_BONES);
        assert!((settings.animation.default_speed - 1.0).abs() < f32::EPSILON);
        assert_eq!(settings.editor.max_history, None);
    }

    #[test]
    fn partial_json_keeps_other_defaults() {
        let settings =
            EngineSettings::from_json_str(r#"{ "animation": { "default_speed": 2.0 } }"#).unwrap();
        assert!((settings.animation.default_speed - 2.0).abs() < f32::EPSILON);
        assert_eq!(settings.animation.palette_capacity, MAX_BONES);
        assert_eq!(settings.editor, EditorSettings::default());
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(EngineSettings::from_json_str("{ not json").is_err());
    }
}
