use bytemuck::{Pod, Zeroable};

use cinder_core::MAX_BONE_INFLUENCE;
use cinder_core::errors::{CinderError, Result};

use crate::registry::BoneRegistry;
use crate::source::MeshBoneSource;

/// Bone ids and weights influencing one vertex, laid out for direct upload.
///
/// An id of `-1` marks an unused slot.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct VertexInfluence {
    pub bone_ids: [i32; MAX_BONE_INFLUENCE],
    pub weights: [f32; MAX_BONE_INFLUENCE],
}

impl Default for VertexInfluence {
    fn default() -> Self {
        Self {
            bone_ids: [-1; MAX_BONE_INFLUENCE],
            weights: [0.0; MAX_BONE_INFLUENCE],
        }
    }
}

impl VertexInfluence {
    /// Stores `(bone_id, weight)` in the first free slot.
    ///
    /// Returns `false` when all slots are taken; the influence is dropped.
    pub fn set_bone_data(&mut self, bone_id: i32, weight: f32) -> bool {
        let Some(slot) = self.bone_ids.iter().position(|&id| id < 0) else {
            return false;
        };
        self.bone_ids[slot] = bone_id;
        self.weights[slot] = weight;
        true
    }

    #[must_use]
    pub fn influence_count(&self) -> usize {
        self.bone_ids.iter().filter(|&&id| id >= 0).count()
    }

    #[must_use]
    pub fn weight_sum(&self) -> f32 {
        self.bone_ids
            .iter()
            .zip(self.weights.iter())
            .filter(|&(&id, _)| id >= 0)
            .map(|(_, w)| w)
            .sum()
    }
}

/// Registers a mesh's bones and writes their weights into `vertices`.
///
/// Each bone is registered with its offset matrix (bones already known keep
/// their id and offset). Weights beyond [`MAX_BONE_INFLUENCE`] per vertex are
/// dropped.
pub fn extract_bone_weights(
    vertices: &mut [VertexInfluence],
    bones: &[MeshBoneSource],
    registry: &mut BoneRegistry,
) -> Result<()> {
    let mut dropped = 0_usize;

    for bone in bones {
        let id = registry.register(&bone.name, bone.offset)? as i32;

        for weight in &bone.weights {
            let count = vertices.len();
            let vertex =
                vertices
                    .get_mut(weight.vertex_id)
                    .ok_or(CinderError::VertexIndexOutOfBounds {
                        index: weight.vertex_id,
                        count,
                    })?;
            if !vertex.set_bone_data(id, weight.weight) {
                dropped += 1;
            }
        }
    }

    if dropped > 0 {
        log::warn!("Dropped {dropped} bone influences beyond {MAX_BONE_INFLUENCE} per vertex");
    }
    Ok(())
}
