/// OrthographicCamera: parallel projection with pan and zoom.
///
/// The view volume is the `[left, right] x [bottom, top]` box, shrunk by
/// `zoom` around its centre. Panning slides position and target together
/// so the view direction never changes.

use glam::{Mat4, Vec3};
use crate::error::Result;
use super::camera_base::{CameraBase, LensDesc};
use super::projection;
use super::validation;

const SOURCE: &str = "webgpu_camera::OrthographicCamera";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrthographicCameraDesc {
    /// Eye position
    pub position: Vec3,
    /// Point the camera looks at
    pub target: Vec3,
    pub left: f32,
    pub right: f32,
    pub bottom: f32,
    pub top: f32,
    /// Magnification, > 0. 2.0 shows half the extent.
    pub zoom: f32,
    /// Aspect ratio, clipping planes, depth range
    pub lens: LensDesc,
}

impl Default for OrthographicCameraDesc {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, 10.0),
            target: Vec3::ZERO,
            left: -10.0,
            right: 10.0,
            bottom: -10.0,
            top: 10.0,
            zoom: 1.0,
            lens: LensDesc::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct OrthographicCamera {
    base: CameraBase,
    position: Vec3,
    target: Vec3,
    left: f32,
    right: f32,
    bottom: f32,
    top: f32,
    zoom: f32,
}

impl OrthographicCamera {
    pub fn new(desc: &OrthographicCameraDesc) -> Result<Self> {
        let base = CameraBase::new(&desc.lens)?;
        let position = validation::finite_vec3(SOURCE, "position", desc.position)?;
        let target = validation::finite_vec3(SOURCE, "target", desc.target)?;
        check_extents(desc.left, desc.right, desc.bottom, desc.top)?;
        let zoom = validation::positive(SOURCE, "zoom", desc.zoom)?;

        Ok(Self {
            base,
            position,
            target,
            left: desc.left,
            right: desc.right,
            bottom: desc.bottom,
            top: desc.top,
            zoom,
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

    pub fn target(&self) -> Vec3 {
        self.target
    }

    pub fn left(&self) -> f32 {
        self.left
    }

    pub fn right(&self) -> f32 {
        self.right
    }

    pub fn bottom(&self) -> f32 {
        self.bottom
    }

    pub fn top(&self) -> f32 {
        self.top
    }

    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    /// Unit view direction, position toward target.
    pub fn forward(&self) -> Vec3 {
        (self.target - self.position).try_normalize().unwrap_or(Vec3::NEG_Z)
    }

    /// Screen-right and screen-up axes in world space.
    pub fn local_axes(&self) -> (Vec3, Vec3) {
        projection::orthonormal_basis(self.forward())
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

    pub fn set_target(&mut self, target: Vec3) -> Result<()> {
        let target = validation::finite_vec3(SOURCE, "target", target)?;
        if target != self.target {
            self.target = target;
            self.base.mark_view_dirty();
        }
        Ok(())
    }

    /// Centre a `width x height` box on the view axis.
    pub fn set_bounds(&mut self, width: f32, height: f32) -> Result<()> {
        let width = validation::positive(SOURCE, "width", width)?;
        let height = validation::positive(SOURCE, "height", height)?;
        self.apply_extents(-width / 2.0, width / 2.0, -height / 2.0, height / 2.0);
        Ok(())
    }

    /// `set_bounds` with the width taken from the aspect ratio.
    pub fn set_bounds_from_height(&mut self, height: f32) -> Result<()> {
        let height = validation::positive(SOURCE, "height", height)?;
        self.set_bounds(self.base.aspect_ratio() * height, height)
    }

    /// Set an arbitrary (possibly off-centre) box.
    pub fn set_extents(&mut self, left: f32, right: f32, bottom: f32, top: f32) -> Result<()> {
        check_extents(left, right, bottom, top)?;
        self.apply_extents(left, right, bottom, top);
        Ok(())
    }

    /// Set the magnification.
    ///
    /// Zero and negative values are ignored: the call succeeds and the zoom
    /// keeps its previous value. NaN and infinity are still rejected.
    pub fn set_zoom(&mut self, zoom: f32) -> Result<()> {
        let zoom = validation::finite(SOURCE, "zoom", zoom)?;
        if zoom <= 0.0 {
            crate::camera_debug!(SOURCE, "ignoring non-positive zoom {}, keeping {}", zoom, self.zoom);
            return Ok(());
        }
        if zoom != self.zoom {
            self.zoom = zoom;
            self.base.mark_projection_dirty();
        }
        Ok(())
    }

    // ===== MOTION =====

    /// Slide position and target along the screen axes.
    pub fn pan(&mut self, delta_x: f32, delta_y: f32) -> Result<()> {
        let delta_x = validation::finite(SOURCE, "delta_x", delta_x)?;
        let delta_y = validation::finite(SOURCE, "delta_y", delta_y)?;

        let (right, up) = self.local_axes();
        let offset = right * delta_x + up * delta_y;
        if offset != Vec3::ZERO {
            self.position += offset;
            self.target += offset;
            self.base.mark_view_dirty();
        }
        Ok(())
    }

    // ===== MATRICES =====

    pub fn view_matrix(&self) -> Mat4 {
        self.base.view_matrix_with(|| {
            let (_, up) = self.local_axes();
            projection::look_at(self.position, self.position + self.forward(), up)
        })
    }

    pub fn projection_matrix(&self) -> Mat4 {
        let half_width = (self.right - self.left) / self.zoom / 2.0;
        let half_height = (self.top - self.bottom) / self.zoom / 2.0;
        let center_x = (self.left + self.right) / 2.0;
        let center_y = (self.bottom + self.top) / 2.0;

        self.base.projection_matrix_with(|lens| {
            projection::orthographic(
                center_x - half_width,
                center_x + half_width,
                center_y - half_height,
                center_y + half_height,
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

    fn apply_extents(&mut self, left: f32, right: f32, bottom: f32, top: f32) {
        if (left, right, bottom, top) != (self.left, self.right, self.bottom, self.top) {
            self.left = left;
            self.right = right;
            self.bottom = bottom;
            self.top = top;
            self.base.mark_projection_dirty();
        }
    }
}

fn check_extents(left: f32, right: f32, bottom: f32, top: f32) -> Result<()> {
    let left = validation::finite(SOURCE, "left", left)?;
    let right = validation::finite(SOURCE, "right", right)?;
    let bottom = validation::finite(SOURCE, "bottom", bottom)?;
    let top = validation::finite(SOURCE, "top", top)?;
    validation::ordered(SOURCE, "left", left, "right", right)?;
    validation::ordered(SOURCE, "bottom", bottom, "top", top)
}

#[cfg(test)]
#[path = "orthographic_camera_tests.rs"]
mod tests;
