use rustc_hash::FxHashMap;

use cinder_core::errors::{CinderError, Result};
use cinder_core::settings::AnimationSettings;

use crate::bone::Bone;
use crate::hierarchy::SkeletonNode;
use crate::registry::{BoneInfo, BoneRegistry};
use crate::source::{AnimationSource, SceneSource};

/// A loaded animation: per-bone keyframes, the skeleton they animate and
/// the bone-name → palette slot table in effect when it was loaded.
///
/// Clips are built once at load time and are read-only afterwards; animators
/// share them through `Arc`.
#[derive(Debug, Clone)]
pub struct AnimationClip {
    pub name: String,
    duration: f32,
    ticks_per_second: f32,
    bones: Vec<Bone>,
    bone_lookup: FxHashMap<String, usize>,
    root: SkeletonNode,
    bone_info: FxHashMap<String, BoneInfo>,
}

impl AnimationClip {
    /// Assembles a clip from already-built parts.
    ///
    /// `duration` (ticks) and `ticks_per_second` must be positive and finite,
    /// and every multi-key track must reach at least `duration`.
    pub fn new(
        name: impl Into<String>,
        duration: f32,
        ticks_per_second: f32,
        bones: Vec<Bone>,
        root: SkeletonNode,
        bone_info: FxHashMap<String, BoneInfo>,
    ) -> Result<Self> {
        if !(duration.is_finite() && duration > 0.0) {
            return Err(CinderError::InvalidDuration(duration));
        }
        if !(ticks_per_second.is_finite() && ticks_per_second > 0.0) {
            return Err(CinderError::InvalidTickRate(ticks_per_second));
        }

        for bone in &bones {
            check_coverage(bone, duration)?;
        }

        let mut bone_lookup = FxHashMap::default();
        for (index, bone) in bones.iter().enumerate() {
            // Duplicate channels: the first one animates the node.
            bone_lookup.entry(bone.name().to_string()).or_insert(index);
        }

        Ok(Self {
            name: name.into(),
            duration,
            ticks_per_second,
            bones,
            bone_lookup,
            root,
            bone_info,
        })
    }

    /// Loads the first animation of `scene` with default settings.
    pub fn from_scene(scene: &SceneSource, registry: &mut BoneRegistry) -> Result<Self> {
        Self::load(scene, 0, registry, &AnimationSettings::default())
    }

    /// Loads animation `index` of `scene`.
    ///
    /// Bones are resolved through `registry`: a channel whose bone is not yet
    /// registered gets the next free id, so all clips of one model agree on
    /// palette slots. The clip keeps a copy of the registry as it stands
    /// after its own bones were added.
    ///
    /// Fails with [`CinderError::BoneCapacityExceeded`] if the registry holds
    /// more bones than `settings.palette_capacity`.
    pub fn load(
        scene: &SceneSource,
        index: usize,
        registry: &mut BoneRegistry,
        settings: &AnimationSettings,
    ) -> Result<Self> {
        let root = scene.root.as_ref().ok_or(CinderError::MissingRootNode)?;
        if scene.animations.is_empty() {
            return Err(CinderError::NoAnimations);
        }
        let animation =
            scene
                .animations
                .get(index)
                .ok_or(CinderError::AnimationIndexOutOfBounds {
                    index,
                    count: scene.animations.len(),
                })?;

        let root = SkeletonNode::from_source(root);
        let bones = read_bones(animation, registry)?;
        check_palette_fit(registry, settings.palette_capacity)?;

        let ticks_per_second = if animation.ticks_per_second > 0.0 {
            animation.ticks_per_second
        } else {
            log::warn!(
                "Animation '{}' has no tick rate, using {}",
                animation.name,
                settings.fallback_ticks_per_second
            );
            settings.fallback_ticks_per_second
        };

        log::debug!(
            "Loaded animation '{}': {} bones, {} ticks at {} ticks/s",
            animation.name,
            bones.len(),
            animation.duration,
            ticks_per_second
        );

        Self::new(
            animation.name.clone(),
            animation.duration,
            ticks_per_second,
            bones,
            root,
            registry.snapshot(),
        )
    }

    /// Loads every animation of `scene`, in order, against one registry.
    pub fn load_all(
        scene: &SceneSource,
        registry: &mut BoneRegistry,
        settings: &AnimationSettings,
    ) -> Result<Vec<Self>> {
        if scene.animations.is_empty() {
            return Err(CinderError::NoAnimations);
        }
        (0..scene.animations.len())
            .map(|index| Self::load(scene, index, registry, settings))
            .collect()
    }

    /// Length in ticks.
    #[inline]
    #[must_use]
    pub fn duration(&self) -> f32 {
        self.duration
    }

    #[inline]
    #[must_use]
    pub fn ticks_per_second(&self) -> f32 {
        self.ticks_per_second
    }

    /// Length in seconds at normal speed.
    #[inline]
    #[must_use]
    pub fn duration_seconds(&self) -> f32 {
        self.duration / self.ticks_per_second
    }

    #[inline]
    #[must_use]
    pub fn bones(&self) -> &[Bone] {
        &self.bones
    }

    #[inline]
    #[must_use]
    pub fn root(&self) -> &SkeletonNode {
        &self.root
    }

    #[inline]
    #[must_use]
    pub fn bone_info(&self) -> &FxHashMap<String, BoneInfo> {
        &self.bone_info
    }

    /// Animated bone driving the node `name`, if the clip animates it.
    #[must_use]
    pub fn find_bone(&self, name: &str) -> Option<&Bone> {
        self.bone_lookup.get(name).map(|&i| &self.bones[i])
    }

    #[must_use]
    pub fn find_bone_mut(&mut self, name: &str) -> Option<&mut Bone> {
        self.bone_lookup.get(name).map(|&i| &mut self.bones[i])
    }
}

fn read_bones(animation: &AnimationSource, registry: &mut BoneRegistry) -> Result<Vec<Bone>> {
    animation
        .channels
        .iter()
        .map(|channel| {
            let id = registry.get_or_create(&channel.node_name)?;
            Bone::from_channel(channel, id)
        })
        .collect()
}

/// Every registered id must address a slot of the animator's palette.
fn check_palette_fit(registry: &BoneRegistry, capacity: usize) -> Result<()> {
    let overflow = registry
        .iter()
        .filter(|(_, info)| info.id >= capacity)
        .min_by_key(|(_, info)| info.id);
    match overflow {
        Some((name, _)) => Err(CinderError::BoneCapacityExceeded {
            name: name.to_string(),
            capacity,
        }),
        None => Ok(()),
    }
}

/// Playback samples `[0, duration)`; a multi-key track must not end earlier.
fn check_coverage(bone: &Bone, duration: f32) -> Result<()> {
    let channels = [
        ("position", bone.positions().is_constant(), bone.positions().end_time()),
        ("rotation", bone.rotations().is_constant(), bone.rotations().end_time()),
        ("scale", bone.scales().is_constant(), bone.scales().end_time()),
    ];
    for (channel, constant, end) in channels {
        if !constant && end < duration {
            return Err(CinderError::TrackTooShort {
                name: format!("{}.{channel}", bone.name()),
                end,
                duration,
            });
        }
    }
    Ok(())
}
