use glam::Mat4;
use rustc_hash::FxHashMap;

use cinder_core::MAX_BONES;
use cinder_core::errors::{CinderError, Result};
use cinder_core::settings::AnimationSettings;

/// Palette slot and offset matrix of a registered bone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoneInfo {
    /// Index into the bone-matrix palette.
    pub id: usize,
    /// Transforms a vertex from model space into the bone's local space.
    pub offset: Mat4,
}

/// Model-wide table mapping bone names to palette slots.
///
/// One registry is shared by a model's skinned meshes and every clip loaded
/// for that model. It only grows: ids are handed out sequentially, are never
/// reused, and a name is never given a second id. It is mutated during the
/// single-threaded load phase only; the mesh must be registered before its
/// clips so that offsets come from the mesh.
#[derive(Debug, Clone)]
pub struct BoneRegistry {
    infos: FxHashMap<String, BoneInfo>,
    capacity: usize,
}

impl Default for BoneRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl BoneRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::with_palette_capacity(MAX_BONES)
    }

    /// Registry whose ids must fit a palette of `capacity` slots.
    #[must_use]
    pub fn with_palette_capacity(capacity: usize) -> Self {
        Self {
            infos: FxHashMap::default(),
            capacity,
        }
    }

    /// Registry sized to the palette animators are built with.
    #[must_use]
    pub fn with_settings(settings: &AnimationSettings) -> Self {
        Self::with_palette_capacity(settings.palette_capacity)
    }

    /// Id of `name`, registering it with an identity offset if unseen.
    pub fn get_or_create(&mut self, name: &str) -> Result<usize> {
        self.register(name, Mat4::IDENTITY)
    }

    /// Id of `name`, registering it with `offset` if unseen.
    ///
    /// An already registered bone keeps its original id and offset.
    pub fn register(&mut self, name: &str, offset: Mat4) -> Result<usize> {
        if let Some(info) = self.infos.get(name) {
            return Ok(info.id);
        }

        // Ids are dense, so the next one is the current count.
        let id = self.infos.len();
        if id >= self.capacity {
            return Err(CinderError::BoneCapacityExceeded {
                name: name.to_string(),
                capacity: self.capacity,
            });
        }

        self.infos.insert(name.to_string(), BoneInfo { id, offset });
        log::debug!("Registered bone '{name}' as palette slot {id}");
        Ok(id)
    }

    #[inline]
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&BoneInfo> {
        self.infos.get(name)
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.infos.contains_key(name)
    }

    /// Number of registered bones, which is also the next id to be assigned.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.infos.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.infos.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &BoneInfo)> {
        self.infos.iter().map(|(name, info)| (name.as_str(), info))
    }

    /// Copy of the current table, taken by a clip once its bones are read.
    #[must_use]
    pub fn snapshot(&self) -> FxHashMap<String, BoneInfo> {
        self.infos.clone()
    }
}
