/// FirstPersonCamera: free-look camera with walking movement.
///
/// Orientation is a yaw/pitch pair. `move_forward` walks along the ground
/// plane so looking up or down while walking never changes altitude;
/// `move_up` is the only vertical motion.

use glam::{Mat4, Vec3};
use crate::error::Result;
use super::camera_base::{CameraBase, LensDesc};
use super::projection::{self, WORLD_UP};
use super::validation;

const SOURCE: &str = "webgpu_camera::FirstPersonCamera";

/// Creation parameters for a `FirstPersonCamera`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FirstPersonCameraDesc {
    /// Eye position
    pub position: Vec3,
    /// Horizontal look angle in radians, 0 = looking along +X
    pub yaw: f32,
    /// Vertical look angle in radians, positive = looking up
    pub pitch: f32,
    /// Vertical field of view in radians
    pub field_of_view: f32,
    /// World units per second at `amount = 1`
    pub move_speed: f32,
    /// Radians per pointer unit
    pub mouse_sensitivity: f32,
    /// Aspect ratio, clipping planes, depth range
    pub lens: LensDesc,
}

impl Default for FirstPersonCameraDesc {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 1.7, 5.0),
            yaw: -std::f32::consts::FRAC_PI_2,
            pitch: 0.0,
            field_of_view: std::f32::consts::FRAC_PI_4,
            move_speed: 5.0,
            mouse_sensitivity: 0.002,
            lens: LensDesc::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct FirstPersonCamera {
    base: CameraBase,
    position: Vec3,
    yaw: f32,
    pitch: f32,
    field_of_view: f32,
    move_speed: f32,
    mouse_sensitivity: f32,
}

impl FirstPersonCamera {
    pub fn new(desc: &FirstPersonCameraDesc) -> Result<Self> {
        let base = CameraBase::new(&desc.lens)?;
        let position = validation::finite_vec3(SOURCE, "position", desc.position)?;
        let yaw = validation::finite(SOURCE, "yaw", desc.yaw)?;
        let pitch = validation::finite(SOURCE, "pitch", desc.pitch)?;
        let field_of_view = validation::field_of_view(SOURCE, desc.field_of_view)?;
        let move_speed = validation::non_negative(SOURCE, "move_speed", desc.move_speed)?;
        let mouse_sensitivity =
            validation::non_negative(SOURCE, "mouse_sensitivity", desc.mouse_sensitivity)?;

        Ok(Self {
            base,
            position,
            yaw,
            pitch: projection::clamp_pitch(pitch),
            field_of_view,
            move_speed,
            mouse_sensitivity,
        })
    }

    // ===== GETTERS =====

    pub fn base(&self) -> &CameraBase {
        &self.base
    }

    pub fn base_mut(&mut self) -> &mut CameraBase {
        &mut self.base
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    pub fn field_of_view(&self) -> f32 {
        self.field_of_view
    }

    pub fn move_speed(&self) -> f32 {
        self.move_speed
    }

    pub fn mouse_sensitivity(&self) -> f32 {
        self.mouse_sensitivity
    }

    /// Unit look direction.
    pub fn forward(&self) -> Vec3 {
        projection::direction_from_angles(self.yaw, self.pitch)
    }

    /// Unit vector to the camera's right, always horizontal.
    pub fn right(&self) -> Vec3 {
        projection::orthonormal_basis(self.forward()).0
    }

    /// Unit vector to the camera's top, perpendicular to forward and right.
    pub fn up(&self) -> Vec3 {
        projection::orthonormal_basis(self.forward()).1
    }

    // ===== SETTERS =====

    pub fn set_position(&mut self, position: Vec3) -> Result<()> {
        let position = validation::finite_vec3(SOURCE, "position", position)?;
        if position != self.position {
            self.position = position;
            self.base.mark_view_dirty();
        }
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

    pub fn set_field_of_view(&mut self, field_of_view: f32) -> Result<()> {
        let field_of_view = validation::field_of_view(SOURCE, field_of_view)?;
        if field_of_view != self.field_of_view {
            self.field_of_view = field_of_view;
            self.base.mark_projection_dirty();
        }
        Ok(())
    }

    /// Movement speed. Does not affect either matrix.
    pub fn set_move_speed(&mut self, move_speed: f32) -> Result<()> {
        self.move_speed = validation::non_negative(SOURCE, "move_speed", move_speed)?;
        Ok(())
    }

    /// Look sensitivity. Does not affect either matrix.
    pub fn set_mouse_sensitivity(&mut self, mouse_sensitivity: f32) -> Result<()> {
        self.mouse_sensitivity =
            validation::non_negative(SOURCE, "mouse_sensitivity", mouse_sensitivity)?;
        Ok(())
    }

    // ===== MOTION =====

    /// Turn by a pointer delta. Moving the pointer up (negative `delta_y`
    /// in screen coordinates) looks up.
    pub fn look(&mut self, delta_x: f32, delta_y: f32) -> Result<()> {
        let delta_x = validation::finite(SOURCE, "delta_x", delta_x)?;
        let delta_y = validation::finite(SOURCE, "delta_y", delta_y)?;

        let delta_yaw = delta_x * self.mouse_sensitivity;
        if delta_yaw != 0.0 {
            self.yaw += delta_yaw;
            self.base.mark_view_dirty();
        }
        self.apply_pitch(self.pitch - delta_y * self.mouse_sensitivity);
        Ok(())
    }

    /// Walk along the ground-plane projection of the look direction.
    pub fn move_forward(&mut self, amount: f32, delta_time: f32) -> Result<()> {
        let forward = self.forward();
        let planar = Vec3::new(forward.x, 0.0, forward.z).normalize_or_zero();
        self.translate("move_forward", planar, amount, delta_time)
    }

    /// Strafe along the right axis.
    pub fn move_right(&mut self, amount: f32, delta_time: f32) -> Result<()> {
        let right = self.right();
        self.translate("move_right", right, amount, delta_time)
    }

    /// Rise along world up.
    pub fn move_up(&mut self, amount: f32, delta_time: f32) -> Result<()> {
        self.translate("move_up", WORLD_UP, amount, delta_time)
    }

    // ===== MATRICES =====

    pub fn view_matrix(&self) -> Mat4 {
        self.base.view_matrix_with(|| {
            projection::look_at(self.position, self.position + self.forward(), WORLD_UP)
        })
    }

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

    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    // ===== INTERNAL =====

    fn translate(&mut self, operation: &str, direction: Vec3, amount: f32, delta_time: f32) -> Result<()> {
        let amount = validation::finite(SOURCE, "amount", amount)?;
        let delta_time = validation::finite(SOURCE, "delta_time", delta_time)?;

        let offset = direction * (self.move_speed * amount * delta_time);
        if offset != Vec3::ZERO {
            crate::camera_trace!(SOURCE, "{} by {}", operation, offset);
            self.position += offset;
            self.base.mark_view_dirty();
        }
        Ok(())
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

#[cfg(test)]
#[path = "first_person_camera_tests.rs"]
mod tests;
