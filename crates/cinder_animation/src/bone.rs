use glam::{Mat4, Quat, Vec3};

use cinder_core::errors::Result;

use crate::source::ChannelSource;
use crate::tracks::KeyframeTrack;

/// Interpolated local TRS of a bone at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BonePose {
    pub translation: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Default for BonePose {
    fn default() -> Self {
        Self {
            translation: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }
}

impl BonePose {
    /// Local matrix, composed as `T * R * S`.
    #[inline]
    #[must_use]
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.translation)
    }
}

/// An animated joint: three independent keyframe tracks plus the last local
/// transform computed by [`update`](Self::update).
///
/// [`update`](Self::update) is the entry point for callers that own a bone
/// and poll [`pose`](Self::pose) / [`transform`](Self::transform), such as
/// tools previewing a single joint. The [`Animator`](crate::animator::Animator)
/// shares clips immutably and samples through the pure
/// [`local_transform_at`](Self::local_transform_at) instead; both paths
/// produce the same matrix.
///
/// `id` is the bone's slot in the palette, shared with every other clip of
/// the same model through the [`BoneRegistry`](crate::registry::BoneRegistry).
#[derive(Debug, Clone)]
pub struct Bone {
    name: String,
    id: usize,
    positions: KeyframeTrack<Vec3>,
    rotations: KeyframeTrack<Quat>,
    scales: KeyframeTrack<Vec3>,

    pose: BonePose,
    transform: Mat4,
}

impl Bone {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        id: usize,
        positions: KeyframeTrack<Vec3>,
        rotations: KeyframeTrack<Quat>,
        scales: KeyframeTrack<Vec3>,
    ) -> Self {
        Self {
            name: name.into(),
            id,
            positions,
            rotations,
            scales,
            pose: BonePose::default(),
            transform: Mat4::IDENTITY,
        }
    }

    /// Builds a bone from an imported channel. Every channel kind must carry
    /// at least one strictly increasing key sequence.
    pub fn from_channel(channel: &ChannelSource, id: usize) -> Result<Self> {
        let name = channel.node_name.as_str();
        Ok(Self::new(
            name,
            id,
            KeyframeTrack::from_keys(&format!("{name}.position"), &channel.positions)?,
            KeyframeTrack::from_keys(&format!("{name}.rotation"), &channel.rotations)?,
            KeyframeTrack::from_keys(&format!("{name}.scale"), &channel.scales)?,
        ))
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    #[must_use]
    pub fn id(&self) -> usize {
        self.id
    }

    #[inline]
    #[must_use]
    pub fn positions(&self) -> &KeyframeTrack<Vec3> {
        &self.positions
    }

    #[inline]
    #[must_use]
    pub fn rotations(&self) -> &KeyframeTrack<Quat> {
        &self.rotations
    }

    #[inline]
    #[must_use]
    pub fn scales(&self) -> &KeyframeTrack<Vec3> {
        &self.scales
    }

    /// Pose computed by the last [`update`](Self::update).
    #[inline]
    #[must_use]
    pub fn pose(&self) -> &BonePose {
        &self.pose
    }

    /// Local transform computed by the last [`update`](Self::update).
    #[inline]
    #[must_use]
    pub fn transform(&self) -> Mat4 {
        self.transform
    }

    /// Interpolates all three channels at `time` without touching `self`.
    ///
    /// The rotation is renormalized in both the single-key and the
    /// interpolated case.
    ///
    /// # Panics
    ///
    /// Panics if `time` is not less than the last timestamp of any
    /// multi-key channel.
    #[must_use]
    pub fn sample(&self, time: f32) -> BonePose {
        BonePose {
            translation: self.positions.sample(time),
            rotation: self.rotations.sample(time).normalize(),
            scale: self.scales.sample(time),
        }
    }

    /// Local `T * R * S` matrix at `time`.
    #[inline]
    #[must_use]
    pub fn local_transform_at(&self, time: f32) -> Mat4 {
        self.sample(time).to_matrix()
    }

    /// Recomputes and stores the local transform for `time`.
    pub fn update(&mut self, time: f32) {
        self.pose = self.sample(time);
        self.transform = self.pose.to_matrix();
    }
}
