//! # Cinder Animation
//!
//! Skeletal animation for imported models.
//!
//! Data flows one way:
//!
//! 1. The content loader fills a [`SceneSource`] (node tree plus per-bone
//!    keyframe channels) and, per skinned mesh, a list of [`MeshBoneSource`]s.
//! 2. [`extract_bone_weights`] and [`AnimationClip::load`] resolve every bone
//!    name through one model-wide [`BoneRegistry`], so all clips agree on
//!    palette slots.
//! 3. Each frame an [`Animator`] advances its clip, walks the skeleton and
//!    writes the bone-matrix palette the renderer consumes.

pub mod animator;
pub mod bone;
pub mod clip;
pub mod hierarchy;
pub mod registry;
pub mod skinning;
pub mod source;
pub mod tracks;
pub mod values;

pub use animator::{Animator, PlaybackState};
pub use bone::{Bone, BonePose};
pub use clip::AnimationClip;
pub use hierarchy::SkeletonNode;
pub use registry::{BoneInfo, BoneRegistry};
pub use skinning::{VertexInfluence, extract_bone_weights};
pub use source::{
    AnimationSource, ChannelSource, Keyframe, MeshBoneSource, NodeSource, SceneSource,
    VertexWeight,
};
pub use tracks::KeyframeTrack;
pub use values::Interpolatable;
