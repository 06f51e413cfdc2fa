//! Transform helpers shared by the animation and editor crates.

use glam::{Mat4, Quat, Vec3};

/// Builds an object matrix from a position, orientation and uniform scale.
///
/// Composition order is `T * R * S`.
#[inline]
#[must_use]
pub fn compose_trs(position: Vec3, orientation: Quat, scale_factor: f32) -> Mat4 {
    Mat4::from_scale_rotation_translation(Vec3::splat(scale_factor), orientation, position)
}

/// Splits an affine matrix into translation, normalized rotation and a single
/// uniform scale factor.
///
/// The uniform factor is the X axis scale; any non-uniform scale or skew the
/// matrix carries is discarded. A degenerate (zero-scale) matrix has no
/// recoverable rotation and yields a non-finite quaternion; check it with
/// [`Quat::is_finite`] before use.
#[must_use]
pub fn decompose_uniform(matrix: Mat4) -> (Vec3, Quat, f32) {
    let (scale, rotation, translation) = matrix.to_scale_rotation_translation();
    (translation, rotation.normalize(), scale.x)
}

/// Componentwise approximate equality for matrices.
#[must_use]
pub fn mat4_approx_eq(a: &Mat4, b: &Mat4, epsilon: f32) -> bool {
    a.to_cols_array()
        .iter()
        .zip(b.to_cols_array().iter())
        .all(|(x, y)| (x - y).abs() <= epsilon)
}
