/// OrbitCamera: circles a target point on a sphere.
///
/// The eye sits at `target + distance * direction(yaw, pitch)` and always
/// looks at the target. Distance is clamped to `[min_distance,
/// max_distance]`, pitch to just inside (-pi/2, pi/2), yaw is unbounded.

use glam::{Mat4, Vec3};
use crate::error::Result;
use super::camera_base::{CameraBase, LensDesc};
use super::projection::{self, WORLD_UP};
use super::validation;

const SOURCE: &str = "webgpu_camera::OrbitCamera";

/// Creation parameters for an `OrbitCamera`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitCameraDesc {
    /// Point the camera orbits and looks at
    pub target: Vec3,
    /// Initial eye-to-target distance (clamped into the limits)
    pub distance: f32,
    /// Closest allowed distance (> 0)
    pub min_distance: f32,
    /// Farthest allowed distance (>= min_distance)
    pub max_distance: f32,
    /// Horizontal angle in radians, 0 = eye on +X of the target
    pub yaw: f32,
    /// Vertical angle in radians, positive = eye above the target
    pub pitch: f32,
    /// Vertical field of view in radians
    pub field_of_view: f32,
    /// Aspect ratio, clipping planes, depth range
    pub lens: LensDesc,
}

impl Default for OrbitCameraDesc {
    fn default() -> Self {
        Self {
            target: Vec3::ZERO,
            distance: 10.0,
            min_distance: 1.0,
            max_distance: 100.0,
            yaw: 0.0,
            pitch: 0.0,
            field_of_view: std::f32::consts::FRAC_PI_4,
            lens: LensDesc::default(),
        }
    }
}

/// Camera orbiting a target point.
#[derive(Debug, Clone)]
pub struct OrbitCamera {
    base: CameraBase,
    target: Vec3,
    distance: f32,
    min_distance: f32,
    max_distance: f32,
    yaw: f32,
    pitch: f32,
    field_of_view: f32,
}

impl OrbitCamera {
    /// Create an orbit camera. Distance and pitch are clamped, everything
    /// else is validated.
    pub fn new(desc: &OrbitCameraDesc) -> Result<Self> {
        let base = CameraBase::new(&desc.lens)?;
        let target = validation::finite_vec3(SOURCE, "target", desc.target)?;
        let min_distance = validation::positive(SOURCE, "min_distance", desc.min_distance)?;
        let max_distance = validation::positive(SOURCE, "max_distance", desc.max_distance)?;
        check_limits(min_distance, max_distance)?;
        let distance = validation::finite(SOURCE, "distance", desc.distance)?;
        let yaw = validation::finite(SOURCE, "yaw", desc.yaw)?;
        let pitch = validation::finite(SOURCE, "pitch", desc.pitch)?;
        let field_of_view = validation::field_of_view(SOURCE, desc.field_of_view)?;

        Ok(Self {
            base,
            target,
            distance: distance.clamp(min_distance, max_distance),
            min_distance,
            max_distance,
            yaw,
            pitch: projection::clamp_pitch(pitch),
            field_of_view,
        })
    }

    // ===== GETTERS =====

    /// Lens state and matrix cache.
    pub fn base(&self) -> &CameraBase {
        &self.base
    }

    /// Mutable lens state (aspect ratio, clipping planes, depth range).
    pub fn base_mut(&mut self) -> &mut CameraBase {
        &mut self.base
    }

    pub fn target(&self) -> Vec3 {
        self.target
    }

    pub fn distance(&self) -> f32 {
        self.distance
    }

    pub fn min_distance(&self) -> f32 {
        self.min_distance
    }

    pub fn max_distance(&self) -> f32 {
        self.max_distance
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Vertical field of view in radians.
    pub fn field_of_view(&self) -> f32 {
        self.field_of_view
    }

    /// Eye position derived from target, distance, yaw and pitch.
    pub fn position(&self) -> Vec3 {
        self.target + self.distance * projection::direction_from_angles(self.yaw, self.pitch)
    }

    /// Unit vector from the eye toward the target.
    pub fn forward(&self) -> Vec3 {
        -projection::direction_from_angles(self.yaw, self.pitch)
    }

    // ===== SETTERS =====

    pub fn set_target(&mut self, target: Vec3) -> Result<()> {
        let target = validation::finite_vec3(SOURCE, "target", target)?;
        if target != self.target {
            self.target = target;
            self.base.mark_view_dirty();
        }
        Ok(())
    }

    /// Set the distance. Always clamped into `[min_distance, max_distance]`.
    pub fn set_distance(&mut self, distance: f32) -> Result<()> {
        let distance = validation::finite(SOURCE, "distance", distance)?;
        self.apply_distance(distance);
        Ok(())
    }

    /// Change the distance limits and re-clamp the current distance.
    pub fn set_distance_limits(&mut self, min_distance: f32, max_distance: f32) -> Result<()> {
        let min_distance = validation::positive(SOURCE, "min_distance", min_distance)?;
        let max_distance = validation::positive(SOURCE, "max_distance", max_distance)?;
        check_limits(min_distance, max_distance)?;

        self.min_distance = min_distance;
        self.max_distance = max_distance;
        self.apply_distance(self.distance);
        Ok(())
    }

    pub fn set_yaw(&mut self, yaw: f32) -> Result<()> {
        let yaw = validation::finite(SOURCE, "yaw", yaw)?;
        if yaw != self.yaw {
            self.yaw = yaw;
            self.base.mark_view_dirty();
        }
        Ok(())
    }

    /// Set the pitch, clamped just inside (-pi/2, pi/2).
    pub fn set_pitch(&mut self, pitch: f32) -> Result<()> {
        let pitch = validation::finite(SOURCE, "pitch", pitch)?;
        self.apply_pitch(pitch);
        Ok(())
    }

    /// Set the vertical field of view in radians.
    pub fn set_field_of_view(&mut self, field_of_view: f32) -> Result<()> {
        let field_of_view = validation::field_of_view(SOURCE, field_of_view)?;
        if field_of_view != self.field_of_view {
            self.field_of_view = field_of_view;
            self.base.mark_projection_dirty();
        }
        Ok(())
    }

    // ===== MOTION =====

    /// Orbit by the given angles in radians.
    pub fn rotate(&mut self, delta_yaw: f32, delta_pitch: f32) -> Result<()> {
        let delta_yaw = validation::finite(SOURCE, "delta_yaw", delta_yaw)?;
        let delta_pitch = validation::finite(SOURCE, "delta_pitch", delta_pitch)?;

        if delta_yaw != 0.0 {
            self.yaw += delta_yaw;
            self.base.mark_view_dirty();
        }
        self.apply_pitch(self.pitch + delta_pitch);
        Ok(())
    }

    /// Move toward (negative) or away from (positive) the target.
    pub fn zoom(&mut self, delta_distance: f32) -> Result<()> {
        let delta_distance = validation::finite(SOURCE, "delta_distance", delta_distance)?;
        self.apply_distance(self.distance + delta_distance);
        Ok(())
    }

    // ===== MATRICES =====

    /// World -> view transform, cached.
    pub fn view_matrix(&self) -> Mat4 {
        self.base.view_matrix_with(|| projection::look_at(self.position(), self.target, WORLD_UP))
    }

    /// View -> clip transform, cached.
    pub fn projection_matrix(&self) -> Mat4 {
        let field_of_view = self.field_of_view;
        self.base.projection_matrix_with(|lens| {
            projection::perspective(
                field_of_view,
                lens.aspect_ratio(),
                lens.near_plane(),
                lens.far_plane(),
                lens.depth_range(),
            )
        })
    }

    /// `projection * view`.
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    // ===== INTERNAL =====

    fn apply_distance(&mut self, requested: f32) {
        let clamped = requested.clamp(self.min_distance, self.max_distance);
        if clamped != requested {
            crate::camera_debug!(SOURCE, "distance {} clamped to {}", requested, clamped);
        }
        if clamped != self.distance {
            self.distance = clamped;
            self.base.mark_view_dirty();
        }
    }

    fn apply_pitch(&mut self, requested: f32) {
        let clamped = projection::clamp_pitch(requested);
        if clamped != requested {
            crate::camera_debug!(SOURCE, "pitch {} clamped to {}", requested, clamped);
        }
        if clamped != self.pitch {
            self.pitch = clamped;
            self.base.mark_view_dirty();
        }
    }
}

fn check_limits(min_distance: f32, max_distance: f32) -> Result<()> {
    if min_distance <= max_distance {
        Ok(())
    } else {
        Err(validation::log_and_return_error(
            SOURCE,
            crate::error::Error::InvalidParameter(format!(
                "min_distance ({}) must not exceed max_distance ({})",
                min_distance, max_distance
            )),
        ))
    }
}

#[cfg(test)]
#[path = "orbit_camera_tests.rs"]
mod tests;
