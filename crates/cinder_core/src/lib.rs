//! # Cinder Core
//!
//! Foundational types shared by every Cinder crate:
//!
//! - [`errors`]: the engine-wide [`CinderError`] and [`Result`] alias
//! - [`settings`]: serde-backed engine configuration
//! - [`math`]: transform composition and decomposition helpers

pub mod errors;
pub mod math;
pub mod settings;

pub use errors::{CinderError, Result};
pub use settings::{AnimationSettings, EditorSettings, EngineSettings};

/// Maximum number of bone slots in a bone-matrix palette.
pub const MAX_BONES: usize = 100;

/// Maximum number of bones that may influence a single vertex.
pub const MAX_BONE_INFLUENCE: usize = 4;
