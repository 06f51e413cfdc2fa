//! Skinning Tests
//!
//! Tests for:
//! - Per-vertex bone influence slots
//! - Mesh bone extraction into the shared registry
//! - Agreement between mesh-registered offsets and clip palettes

use std::sync::Arc;

use glam::{Mat4, Quat, Vec3};

use cinder::animation::{
    AnimationClip, AnimationSource, Animator, BoneRegistry, ChannelSource, Keyframe,
    MeshBoneSource, NodeSource, SceneSource, VertexInfluence, VertexWeight, extract_bone_weights,
};
use cinder::errors::CinderError;
use cinder::math::mat4_approx_eq;
use cinder::MAX_BONE_INFLUENCE;

fn mesh_bone(name: &str, offset: Mat4, weights: &[(usize, f32)]) -> MeshBoneSource {
    MeshBoneSource {
        name: name.to_string(),
        offset,
        weights: weights
            .iter()
            .map(|&(vertex_id, weight)| VertexWeight { vertex_id, weight })
            .collect(),
    }
}

// ============================================================================
// VertexInfluence
// ============================================================================

#[test]
fn default_influence_is_empty() {
    let influence = VertexInfluence::default();
    assert_eq!(influence.bone_ids, [-1; MAX_BONE_INFLUENCE]);
    assert_eq!(influence.influence_count(), 0);
    assert_eq!(influence.weight_sum(), 0.0);
}

#[test]
fn slots_fill_in_order_and_overflow_is_dropped() {
    let mut influence = VertexInfluence::default();
    for id in 0..MAX_BONE_INFLUENCE as i32 {
        assert!(influence.set_bone_data(id, 0.25));
    }
    assert!(!influence.set_bone_data(9, 1.0));

    assert_eq!(influence.bone_ids, [0, 1, 2, 3]);
    assert_eq!(influence.influence_count(), MAX_BONE_INFLUENCE);
    assert!((influence.weight_sum() - 1.0).abs() < 1e-6);
}

#[test]
fn influence_is_gpu_layout() {
    assert_eq!(
        std::mem::size_of::<VertexInfluence>(),
        MAX_BONE_INFLUENCE * (4 + 4)
    );
    let vertices = [VertexInfluence::default(); 3];
    let bytes: &[u8] = bytemuck::cast_slice(&vertices);
    assert_eq!(bytes.len(), 3 * 32);
}

// ============================================================================
// Extraction
// ============================================================================

#[test]
fn extraction_registers_bones_with_offsets() {
    let mut vertices = vec![VertexInfluence::default(); 3];
    let mut registry = BoneRegistry::new();
    let hip_offset = Mat4::from_translation(Vec3::NEG_Y);

    extract_bone_weights(
        &mut vertices,
        &[
            mesh_bone("hip", hip_offset, &[(0, 1.0), (1, 0.5)]),
            mesh_bone("knee", Mat4::IDENTITY, &[(1, 0.5), (2, 1.0)]),
        ],
        &mut registry,
    )
    .unwrap();

    assert_eq!(registry.len(), 2);
    assert_eq!(registry.get("hip").unwrap().id, 0);
    assert_eq!(registry.get("hip").unwrap().offset, hip_offset);
    assert_eq!(registry.get("knee").unwrap().id, 1);

    assert_eq!(vertices[0].bone_ids, [0, -1, -1, -1]);
    assert_eq!(vertices[1].bone_ids, [0, 1, -1, -1]);
    assert_eq!(vertices[1].weights[..2], [0.5, 0.5]);
    assert_eq!(vertices[2].bone_ids, [1, -1, -1, -1]);
}

#[test]
fn second_mesh_reuses_ids() {
    let mut registry = BoneRegistry::new();
    let mut body = vec![VertexInfluence::default(); 1];
    let mut armor = vec![VertexInfluence::default(); 1];

    extract_bone_weights(
        &mut body,
        &[
            mesh_bone("spine", Mat4::IDENTITY, &[(0, 1.0)]),
            mesh_bone("head", Mat4::IDENTITY, &[]),
        ],
        &mut registry,
    )
    .unwrap();
    extract_bone_weights(
        &mut armor,
        &[mesh_bone("head", Mat4::from_scale(Vec3::splat(2.0)), &[(0, 1.0)])],
        &mut registry,
    )
    .unwrap();

    assert_eq!(armor[0].bone_ids[0], 1);
    // First registration keeps its offset.
    assert_eq!(registry.get("head").unwrap().offset, Mat4::IDENTITY);
}

#[test]
fn vertex_out_of_range_is_an_error() {
    let mut vertices = vec![VertexInfluence::default(); 2];
    let err = extract_bone_weights(
        &mut vertices,
        &[mesh_bone("hip", Mat4::IDENTITY, &[(5, 1.0)])],
        &mut BoneRegistry::new(),
    )
    .unwrap_err();
    assert!(matches!(
        err,
        CinderError::VertexIndexOutOfBounds { index: 5, count: 2 }
    ));
}

#[test]
fn registry_capacity_is_enforced() {
    let mut registry = BoneRegistry::with_palette_capacity(1);
    let mut vertices = vec![VertexInfluence::default(); 1];
    let err = extract_bone_weights(
        &mut vertices,
        &[
            mesh_bone("a", Mat4::IDENTITY, &[]),
            mesh_bone("b", Mat4::IDENTITY, &[]),
        ],
        &mut registry,
    )
    .unwrap_err();
    assert!(matches!(
        err,
        CinderError::BoneCapacityExceeded { capacity: 1, .. }
    ));
}

// ============================================================================
// Mesh + clip
// ============================================================================

#[test]
fn offsets_cancel_bind_pose() {
    // A single bone whose bind pose is T(0,2,0). With the matching inverse
    // bind offset and a channel holding the bind pose, the palette entry is
    // identity: the mesh renders undeformed.
    let bind = Mat4::from_translation(Vec3::new(0.0, 2.0, 0.0));
    let mut registry = BoneRegistry::new();
    let mut vertices = vec![VertexInfluence::default(); 1];
    extract_bone_weights(
        &mut vertices,
        &[mesh_bone("bone", bind.inverse(), &[(0, 1.0)])],
        &mut registry,
    )
    .unwrap();

    let scene = SceneSource {
        root: Some(NodeSource::new("root", Mat4::IDENTITY).with_child(NodeSource::new("bone", bind))),
        animations: vec![AnimationSource {
            name: "idle".to_string(),
            duration: 4.0,
            ticks_per_second: 2.0,
            channels: vec![
                ChannelSource::new("bone")
                    .with_positions(vec![Keyframe::new(0.0, Vec3::new(0.0, 2.0, 0.0))])
                    .with_rotations(vec![Keyframe::new(0.0, Quat::IDENTITY)])
                    .with_scales(vec![Keyframe::new(0.0, Vec3::ONE)]),
            ],
        }],
    };
    let clip = Arc::new(AnimationClip::from_scene(&scene, &mut registry).unwrap());

    let mut animator = Animator::with_clip(clip);
    animator.update_animation(0.5);
    assert!(mat4_approx_eq(&animator.palette()[0], &Mat4::IDENTITY, 1e-5));
}
