/// Pure matrix and direction functions shared by every camera kind.
///
/// Convention used throughout the crate:
/// - Right-handed world, +Y up, the eye looks down -Z in view space
/// - Column-major `Mat4` applied to column vectors, so the combined
///   transform is `projection * view`
/// - Clip space is WebGPU's: NDC x and y in [-1, 1] with +Y up, depth in
///   [0, 1]. `DepthRange::NegativeOneToOne` switches to the OpenGL/WebGL
///   depth interval. The framebuffer Y flip is left to the viewport.

use glam::{Mat4, Vec3};

/// World up axis used by every look-at.
pub const WORLD_UP: Vec3 = Vec3::Y;

/// Largest |pitch| a camera accepts.
///
/// Kept strictly below pi/2 so the look direction never becomes parallel
/// to `WORLD_UP`, where look-at degenerates.
pub const PITCH_LIMIT: f32 = std::f32::consts::FRAC_PI_2 - 0.01;

/// NDC depth interval the projection maps `[near, far]` onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DepthRange {
    /// near -> 0, far -> 1 (WebGPU, Vulkan, Metal, Direct3D)
    #[default]
    ZeroToOne,
    /// near -> -1, far -> 1 (OpenGL, WebGL)
    NegativeOneToOne,
}

/// Clamp a pitch angle into `[-PITCH_LIMIT, PITCH_LIMIT]`.
#[inline]
pub fn clamp_pitch(pitch: f32) -> f32 {
    pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT)
}

/// Unit direction for a yaw/pitch pair.
///
/// yaw = 0, pitch = 0 points along +X; yaw grows toward +Z;
/// positive pitch tilts toward +Y.
#[inline]
pub fn direction_from_angles(yaw: f32, pitch: f32) -> Vec3 {
    let (sin_yaw, cos_yaw) = yaw.sin_cos();
    let (sin_pitch, cos_pitch) = pitch.sin_cos();
    Vec3::new(cos_yaw * cos_pitch, sin_pitch, sin_yaw * cos_pitch)
}

/// Right and up axes of a camera looking along `forward`.
///
/// `right = normalize(forward x WORLD_UP)`, `up = normalize(right x forward)`.
/// When `forward` is parallel to `WORLD_UP` (a top-down view) the right axis
/// falls back to +X so the basis stays well defined.
pub fn orthonormal_basis(forward: Vec3) -> (Vec3, Vec3) {
    let right = forward
        .cross(WORLD_UP)
        .try_normalize()
        .unwrap_or(Vec3::X);
    let up = right.cross(forward).normalize();
    (right, up)
}

/// View matrix looking from `eye` toward `target`.
#[inline]
pub fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Mat4 {
    Mat4::look_at_rh(eye, target, up)
}

/// Symmetric perspective projection. `fov_y` is the vertical field of view
/// in radians.
pub fn perspective(fov_y: f32, aspect_ratio: f32, near: f32, far: f32, depth: DepthRange) -> Mat4 {
    match depth {
        DepthRange::ZeroToOne => Mat4::perspective_rh(fov_y, aspect_ratio, near, far),
        DepthRange::NegativeOneToOne => Mat4::perspective_rh_gl(fov_y, aspect_ratio, near, far),
    }
}

/// Orthographic projection of the box `[left, right] x [bottom, top]`
/// between `near` and `far`.
pub fn orthographic(
    left: f32,
    right: f32,
    bottom: f32,
    top: f32,
    near: f32,
    far: f32,
    depth: DepthRange,
) -> Mat4 {
    match depth {
        DepthRange::ZeroToOne => Mat4::orthographic_rh(left, right, bottom, top, near, far),
        DepthRange::NegativeOneToOne => Mat4::orthographic_rh_gl(left, right, bottom, top, near, far),
    }
}

#[cfg(test)]
#[path = "projection_tests.rs"]
mod tests;
