//! Parsed scene description handed over by the content loader.
//!
//! These are plain data types. The loader fills them once at startup from
//! whatever file format it reads; [`AnimationClip`](crate::clip::AnimationClip)
//! and [`extract_bone_weights`](crate::skinning::extract_bone_weights) turn
//! them into runtime structures.

use glam::{Mat4, Quat, Vec3};

/// A single time-stamped value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Keyframe<T> {
    /// Timestamp in clip ticks.
    pub time: f32,
    pub value: T,
}

impl<T> Keyframe<T> {
    #[inline]
    pub fn new(time: f32, value: T) -> Self {
        Self { time, value }
    }
}

/// A node of the imported scene graph with its bind-pose local transform.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeSource {
    pub name: String,
    pub transform: Mat4,
    pub children: Vec<NodeSource>,
}

impl NodeSource {
    pub fn new(name: impl Into<String>, transform: Mat4) -> Self {
        Self {
            name: name.into(),
            transform,
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_child(mut self, child: NodeSource) -> Self {
        self.children.push(child);
        self
    }
}

/// Keyframes animating one bone. The three channels are independent and may
/// have different key counts and timestamps.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChannelSource {
    pub node_name: String,
    pub positions: Vec<Keyframe<Vec3>>,
    pub rotations: Vec<Keyframe<Quat>>,
    pub scales: Vec<Keyframe<Vec3>>,
}

impl ChannelSource {
    pub fn new(node_name: impl Into<String>) -> Self {
        Self {
            node_name: node_name.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_positions(mut self, keys: Vec<Keyframe<Vec3>>) -> Self {
        self.positions = keys;
        self
    }

    #[must_use]
    pub fn with_rotations(mut self, keys: Vec<Keyframe<Quat>>) -> Self {
        self.rotations = keys;
        self
    }

    #[must_use]
    pub fn with_scales(mut self, keys: Vec<Keyframe<Vec3>>) -> Self {
        self.scales = keys;
        self
    }
}

/// One imported animation.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationSource {
    pub name: String,
    /// Length in ticks.
    pub duration: f32,
    /// Zero or less means "unspecified".
    pub ticks_per_second: f32,
    pub channels: Vec<ChannelSource>,
}

/// A bone weight on a single vertex.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VertexWeight {
    pub vertex_id: usize,
    pub weight: f32,
}

/// A bone as referenced by a skinned mesh: its offset (inverse bind) matrix
/// and the vertices it influences.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshBoneSource {
    pub name: String,
    pub offset: Mat4,
    pub weights: Vec<VertexWeight>,
}

/// Everything the loader extracted from one animation file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SceneSource {
    pub root: Option<NodeSource>,
    pub animations: Vec<AnimationSource>,
}
