//! # Cinder
//!
//! Skeletal animation and undoable scene editing for a small real-time 3D
//! editor.
//!
//! The umbrella crate re-exports the engine crates:
//!
//! - [`errors`], [`settings`], [`math`]: shared foundations
//! - [`animation`]: keyframe tracks, bone hierarchy, clips and animators
//! - [`editor`]: scene objects, commands and the undo/redo history
//!
//! Most programs only need the [`prelude`].

pub use cinder_animation as animation;
pub use cinder_core::{MAX_BONE_INFLUENCE, MAX_BONES, errors, math, settings};
pub use cinder_editor as editor;
pub use glam;

pub use cinder_core::errors::{CinderError, Result};
pub use cinder_core::settings::EngineSettings;

pub mod prelude {
    pub use cinder_animation::{
        AnimationClip, Animator, Bone, BoneRegistry, KeyframeTrack, PlaybackState, SceneSource,
        SkeletonNode, VertexInfluence, extract_bone_weights,
    };
    pub use cinder_core::errors::{CinderError, Result};
    pub use cinder_core::settings::{AnimationSettings, EditorSettings, EngineSettings};
    pub use cinder_editor::{
        Command, CommandHistory, EditorCommands, EditorInput, EditorScene, ObjectId, SceneObject,
    };
}
