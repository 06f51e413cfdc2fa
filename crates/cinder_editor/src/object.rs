use std::fmt;
use std::sync::Arc;

use glam::{Mat4, Quat, Vec3};
use uuid::Uuid;

use cinder_animation::{AnimationClip, Animator};
use cinder_core::math::{compose_trs, decompose_uniform};
use cinder_core::settings::AnimationSettings;

/// Stable identity of a scene object.
///
/// Survives reordering, removal and re-insertion, unlike the object's index
/// in the scene list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObjectId(Uuid);

impl ObjectId {
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ObjectId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A placed instance in the level.
///
/// The editable transform is position, orientation and a single uniform
/// scale factor; `matrix` is derived from them by
/// [`update_matrix`](Self::update_matrix). Animated objects carry their clips
/// and an [`Animator`].
#[derive(Debug, Clone)]
pub struct SceneObject {
    id: ObjectId,
    pub name: String,

    pub position: Vec3,
    pub orientation: Quat,
    pub scale_factor: f32,
    matrix: Mat4,

    pub animations: Vec<Arc<AnimationClip>>,
    pub animator: Option<Animator>,
}

impl SceneObject {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_transform(name, Vec3::ZERO, Quat::IDENTITY, 1.0)
    }

    #[must_use]
    pub fn with_transform(
        name: impl Into<String>,
        position: Vec3,
        orientation: Quat,
        scale_factor: f32,
    ) -> Self {
        Self {
            id: ObjectId::new(),
            name: name.into(),
            position,
            orientation,
            scale_factor,
            matrix: compose_trs(position, orientation, scale_factor),
            animations: Vec::new(),
            animator: None,
        }
    }

    /// Makes the object animated with the given clips. Nothing plays until
    /// [`play_animation`](Self::play_animation) is called.
    #[must_use]
    pub fn with_animations(
        mut self,
        animations: Vec<Arc<AnimationClip>>,
        settings: &AnimationSettings,
    ) -> Self {
        self.animations = animations;
        self.animator = Some(Animator::with_settings(settings));
        self
    }

    #[inline]
    #[must_use]
    pub fn id(&self) -> ObjectId {
        self.id
    }

    pub(crate) fn set_id(&mut self, id: ObjectId) {
        self.id = id;
    }

    #[inline]
    #[must_use]
    pub fn matrix(&self) -> Mat4 {
        self.matrix
    }

    /// Overwrites the matrix without touching position/orientation/scale.
    ///
    /// Used by interactive manipulators while a drag is in progress; the
    /// resulting move command brings the fields back in sync.
    pub fn set_matrix(&mut self, matrix: Mat4) {
        self.matrix = matrix;
    }

    /// Rebuilds the matrix from position, orientation and scale.
    pub fn update_matrix(&mut self) {
        self.matrix = compose_trs(self.position, self.orientation, self.scale_factor);
    }

    /// Decomposes `matrix` into position, orientation and a uniform scale,
    /// stores them and rebuilds the matrix.
    ///
    /// A zero-scale matrix carries no rotation; the current orientation is
    /// kept in that case.
    pub fn apply_matrix(&mut self, matrix: Mat4) {
        let (position, orientation, scale_factor) = decompose_uniform(matrix);
        self.position = position;
        if orientation.is_finite() {
            self.orientation = orientation;
        }
        self.scale_factor = scale_factor;
        self.update_matrix();
    }

    /// Per-frame simulation step. Advances the animator once.
    pub fn update(&mut self, dt: f32) {
        if let Some(animator) = &mut self.animator {
            animator.update_animation(dt);
        }
    }

    /// Starts clip `index`. Returns `false` if the object is not animated or
    /// has no such clip.
    pub fn play_animation(&mut self, index: usize) -> bool {
        let (Some(animator), Some(clip)) = (&mut self.animator, self.animations.get(index)) else {
            return false;
        };
        animator.play_animation(Arc::clone(clip));
        true
    }

    pub fn stop_animation(&mut self) {
        if let Some(animator) = &mut self.animator {
            animator.stop_animation();
        }
    }

    /// Whether the object has skeletal animation at all.
    #[inline]
    #[must_use]
    pub fn is_animated(&self) -> bool {
        self.animator.is_some()
    }

    /// Whether a clip is playing this frame (selects the skinned render path).
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animator.as_ref().is_some_and(Animator::is_playing)
    }

    /// Bone palette for skinning, present while a clip is playing.
    #[must_use]
    pub fn bone_palette(&self) -> Option<&[Mat4]> {
        self.animator
            .as_ref()
            .filter(|animator| animator.is_playing())
            .map(Animator::palette)
    }
}
