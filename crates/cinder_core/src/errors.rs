//! Error Types
//!
//! This module defines the error types used throughout the engine.
//!
//! # Overview
//!
//! The main error type [`CinderError`] covers the recoverable failure modes:
//! - Asset loading errors (malformed or missing animation data)
//! - Editor command errors (stale object indices or ids)
//! - Configuration and I/O errors
//!
//! Load-time errors are returned to the content loader, which is expected to
//! abort startup with the diagnostic. Sampling a bone outside its keyframe
//! range is a programmer error and panics instead.
//!
//! # Usage
//!
//! ```rust,ignore
//! use cinder_core::errors::{CinderError, Result};
//!
//! fn load_clip() -> Result<()> {
//!     Err(CinderError::NoAnimations)
//! }
//! ```

use thiserror::Error;

/// The main error type for the Cinder engine.
#[derive(Error, Debug)]
pub enum CinderError {
    // ========================================================================
    // Asset Loading Errors
    // ========================================================================
    /// The scene description contains no animations.
    #[error("Scene contains no animations")]
    NoAnimations,

    /// The scene description has no root node.
    #[error("Scene has no root node")]
    MissingRootNode,

    /// Requested animation index does not exist in the scene.
    #[error("Animation index out of bounds: {index} (scene has {count})")]
    AnimationIndexOutOfBounds {
        /// The invalid index
        index: usize,
        /// Number of animations available
        count: usize,
    },

    /// A keyframe track has no keys.
    #[error("Keyframe track for '{0}' is empty")]
    EmptyTrack(String),

    /// Keyframe timestamps are not strictly increasing.
    #[error("Keyframes for '{name}' are not strictly increasing at key {index}")]
    UnsortedKeyframes {
        /// Bone or channel name
        name: String,
        /// Index of the offending key
        index: usize,
    },

    /// Timestamp and value arrays differ in length.
    #[error("Keyframe track has {times} timestamps but {values} values")]
    TrackLengthMismatch {
        /// Number of timestamps
        times: usize,
        /// Number of values
        values: usize,
    },

    /// Clip duration is not a positive finite number.
    #[error("Invalid animation duration: {0}")]
    InvalidDuration(f32),

    /// Clip tick rate is not a positive finite number.
    #[error("Invalid animation tick rate: {0}")]
    InvalidTickRate(f32),

    /// A multi-key track ends before the clip does.
    #[error("Keyframe track '{name}' ends at {end} but the clip runs to {duration}")]
    TrackTooShort {
        /// Bone and channel name
        name: String,
        /// Timestamp of the track's last key
        end: f32,
        /// Clip duration in ticks
        duration: f32,
    },

    /// More distinct bones were registered than the palette can hold.
    #[error("Bone '{name}' exceeds the palette capacity of {capacity}")]
    BoneCapacityExceeded {
        /// Bone that did not fit
        name: String,
        /// Palette capacity
        capacity: usize,
    },

    /// A skin weight addresses a vertex that does not exist.
    #[error("Vertex index out of bounds: {index} (mesh has {count} vertices)")]
    VertexIndexOutOfBounds {
        /// The invalid vertex index
        index: usize,
        /// Number of vertices in the mesh
        count: usize,
    },

    // ========================================================================
    // Editor Errors
    // ========================================================================
    /// Object index out of bounds.
    #[error("Object index out of bounds: {context} (index: {index})")]
    ObjectIndexOutOfBounds {
        /// Description of what was being accessed
        context: String,
        /// The invalid index
        index: usize,
    },

    /// The object a command refers to is no longer in the scene.
    #[error("Object not found: {0}")]
    ObjectNotFound(String),

    // ========================================================================
    // I/O & Configuration Errors
    // ========================================================================
    /// File I/O error.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON parsing error.
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Alias for `Result<T, CinderError>`.
pub type Result<T> = std::result::Result<T, CinderError>;
