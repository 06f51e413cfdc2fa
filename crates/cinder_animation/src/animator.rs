use std::sync::Arc;

use glam::Mat4;
use smallvec::SmallVec;

use cinder_core::settings::AnimationSettings;

use crate::clip::AnimationClip;
use crate::hierarchy::SkeletonNode;

/// Playback state of an [`Animator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    /// No active clip; the palette is left as it is.
    Stopped,
    /// A clip is active and time advances on every update.
    Playing,
}

/// Per-object skeletal playback.
///
/// Holds a shared reference to the playing clip, the elapsed time in clip
/// ticks, a speed multiplier and a fixed-size bone-matrix palette that the
/// renderer uploads as-is.
///
/// Call [`update_animation`](Self::update_animation) at most once per object
/// per frame.
#[derive(Debug, Clone)]
pub struct Animator {
    palette: Vec<Mat4>,
    clip: Option<Arc<AnimationClip>>,
    time: f32,
    pub speed: f32,
}

impl Default for Animator {
    fn default() -> Self {
        Self::new()
    }
}

impl Animator {
    /// A stopped animator with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::with_settings(&AnimationSettings::default())
    }

    #[must_use]
    pub fn with_settings(settings: &AnimationSettings) -> Self {
        Self {
            palette: vec![Mat4::IDENTITY; settings.palette_capacity],
            clip: None,
            time: 0.0,
            speed: settings.default_speed,
        }
    }

    /// An animator already playing `clip` from the start.
    #[must_use]
    pub fn with_clip(clip: Arc<AnimationClip>) -> Self {
        let mut animator = Self::new();
        animator.play_animation(clip);
        animator
    }

    /// Starts `clip` from time zero. Speed is left unchanged.
    ///
    /// Palette slots the new clip never writes keep their previous matrices;
    /// call [`stop_animation`](Self::stop_animation) first to start clean.
    pub fn play_animation(&mut self, clip: Arc<AnimationClip>) {
        log::debug!("Playing animation '{}'", clip.name);
        self.clip = Some(clip);
        self.time = 0.0;
    }

    /// Drops the active clip and resets every palette slot to identity.
    pub fn stop_animation(&mut self) {
        self.clip = None;
        self.palette.fill(Mat4::IDENTITY);
    }

    /// Advances playback by `dt` seconds and rebuilds the palette.
    ///
    /// Does nothing while stopped. Time advances by
    /// `ticks_per_second * dt * speed` and wraps into `[0, duration)`.
    pub fn update_animation(&mut self, dt: f32) {
        let Some(clip) = self.clip.as_ref() else {
            return;
        };

        let duration = clip.duration();
        let time = (self.time + clip.ticks_per_second() * dt * self.speed).rem_euclid(duration);
        // rem_euclid can round up to `duration` for tiny negative inputs.
        self.time = if time < duration { time } else { 0.0 };

        write_palette(clip, self.time, &mut self.palette);
    }

    #[inline]
    #[must_use]
    pub fn state(&self) -> PlaybackState {
        if self.clip.is_some() {
            PlaybackState::Playing
        } else {
            PlaybackState::Stopped
        }
    }

    /// Whether the renderer should take the skinned path for this object.
    #[inline]
    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.clip.is_some()
    }

    #[inline]
    #[must_use]
    pub fn clip(&self) -> Option<&Arc<AnimationClip>> {
        self.clip.as_ref()
    }

    /// Elapsed time in clip ticks.
    #[inline]
    #[must_use]
    pub fn time(&self) -> f32 {
        self.time
    }

    /// Fraction of the active clip already played, or `None` when stopped.
    #[must_use]
    pub fn progress(&self) -> Option<f32> {
        self.clip.as_ref().map(|clip| self.time / clip.duration())
    }

    #[inline]
    #[must_use]
    pub fn palette(&self) -> &[Mat4] {
        &self.palette
    }

    /// The palette as raw bytes, ready for a buffer upload.
    #[inline]
    #[must_use]
    pub fn palette_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.palette)
    }

    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.palette.len()
    }
}

/// Walks the clip's skeleton depth-first from the root and writes
/// `global * offset` into the palette slot of every registered node.
///
/// Nodes animated by the clip use the bone's interpolated transform, the
/// rest keep their bind pose. Slots of nodes not visited are left untouched.
fn write_palette(clip: &AnimationClip, time: f32, palette: &mut [Mat4]) {
    let mut stack: SmallVec<[(&SkeletonNode, Mat4); 32]> = SmallVec::new();
    stack.push((clip.root(), Mat4::IDENTITY));

    while let Some((node, parent)) = stack.pop() {
        let local = clip
            .find_bone(&node.name)
            .map_or(node.transform, |bone| bone.local_transform_at(time));
        let global = parent * local;

        if let Some(info) = clip.bone_info().get(&node.name) {
            if let Some(slot) = palette.get_mut(info.id) {
                *slot = global * info.offset;
            } else {
                log::warn!(
                    "Bone '{}' (slot {}) does not fit a palette of {}",
                    node.name,
                    info.id,
                    palette.len()
                );
            }
        }

        // Reverse push keeps children in import order.
        stack.extend(node.children.iter().rev().map(|child| (child, global)));
    }
}
