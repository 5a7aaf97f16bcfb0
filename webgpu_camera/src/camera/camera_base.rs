/// CameraBase: lens state and the matrix cache shared by every camera kind.
///
/// Holds aspect ratio, clipping planes and depth range, plus one cached
/// view matrix and one cached projection matrix, each guarded by its own
/// dirty flag. The concrete camera supplies the calculation; the base only
/// decides when to run it.
///
/// The caches live in `Cell`s so matrices can be read through `&self`.
/// A camera is therefore `Send` but not `Sync`: share it across threads
/// behind a `Mutex`.

use std::cell::Cell;
use glam::Mat4;
use crate::error::Result;
use super::projection::DepthRange;
use super::validation;

const SOURCE: &str = "webgpu_camera::CameraBase";

/// Lens parameters common to every camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LensDesc {
    /// Viewport width / height
    pub aspect_ratio: f32,
    /// Distance to the near clipping plane (> 0)
    pub near_plane: f32,
    /// Distance to the far clipping plane (> near_plane)
    pub far_plane: f32,
    /// Clip-space depth convention
    pub depth_range: DepthRange,
}

impl Default for LensDesc {
    fn default() -> Self {
        Self {
            aspect_ratio: 16.0 / 9.0,
            near_plane: 0.1,
            far_plane: 1000.0,
            depth_range: DepthRange::ZeroToOne,
        }
    }
}

/// Shared camera state: lens parameters and lazily rebuilt matrices.
#[derive(Debug, Clone)]
pub struct CameraBase {
    aspect_ratio: f32,
    near_plane: f32,
    far_plane: f32,
    depth_range: DepthRange,

    view_matrix: Cell<Mat4>,
    projection_matrix: Cell<Mat4>,
    view_dirty: Cell<bool>,
    projection_dirty: Cell<bool>,

    #[cfg(test)]
    view_rebuilds: Cell<u32>,
    #[cfg(test)]
    projection_rebuilds: Cell<u32>,
}

impl CameraBase {
    /// Validate `desc` and create a base with both matrices dirty.
    pub fn new(desc: &LensDesc) -> Result<Self> {
        let aspect_ratio = validation::positive(SOURCE, "aspect_ratio", desc.aspect_ratio)?;
        let near_plane = validation::positive(SOURCE, "near_plane", desc.near_plane)?;
        let far_plane = validation::positive(SOURCE, "far_plane", desc.far_plane)?;
        validation::ordered(SOURCE, "near_plane", near_plane, "far_plane", far_plane)?;

        Ok(Self {
            aspect_ratio,
            near_plane,
            far_plane,
            depth_range: desc.depth_range,
            view_matrix: Cell::new(Mat4::IDENTITY),
            projection_matrix: Cell::new(Mat4::IDENTITY),
            view_dirty: Cell::new(true),
            projection_dirty: Cell::new(true),
            #[cfg(test)]
            view_rebuilds: Cell::new(0),
            #[cfg(test)]
            projection_rebuilds: Cell::new(0),
        })
    }

    // ===== GETTERS =====

    /// Viewport width / height.
    pub fn aspect_ratio(&self) -> f32 {
        self.aspect_ratio
    }

    /// Near clipping plane distance.
    pub fn near_plane(&self) -> f32 {
        self.near_plane
    }

    /// Far clipping plane distance.
    pub fn far_plane(&self) -> f32 {
        self.far_plane
    }

    /// Clip-space depth convention.
    pub fn depth_range(&self) -> DepthRange {
        self.depth_range
    }

    /// True when the next view read will rebuild the matrix.
    pub fn is_view_dirty(&self) -> bool {
        self.view_dirty.get()
    }

    /// True when the next projection read will rebuild the matrix.
    pub fn is_projection_dirty(&self) -> bool {
        self.projection_dirty.get()
    }

    // ===== SETTERS (projection-affecting) =====

    /// Set the aspect ratio directly.
    pub fn set_aspect_ratio(&mut self, aspect_ratio: f32) -> Result<()> {
        let aspect_ratio = validation::positive(SOURCE, "aspect_ratio", aspect_ratio)?;
        if aspect_ratio != self.aspect_ratio {
            self.aspect_ratio = aspect_ratio;
            self.mark_projection_dirty();
        }
        Ok(())
    }

    /// Derive the aspect ratio from a framebuffer size in pixels.
    pub fn set_viewport_size(&mut self, width: u32, height: u32) -> Result<()> {
        if width == 0 || height == 0 {
            return Err(validation::log_and_return_error(
                SOURCE,
                crate::error::Error::InvalidParameter(format!(
                    "viewport size must be non-zero (got {}x{})",
                    width, height
                )),
            ));
        }
        self.set_aspect_ratio(width as f32 / height as f32)
    }

    /// Move the near plane. Must stay below the current far plane.
    pub fn set_near_plane(&mut self, near_plane: f32) -> Result<()> {
        self.set_clip_planes(near_plane, self.far_plane)
    }

    /// Move the far plane. Must stay above the current near plane.
    pub fn set_far_plane(&mut self, far_plane: f32) -> Result<()> {
        self.set_clip_planes(self.near_plane, far_plane)
    }

    /// Set both clipping planes at once.
    pub fn set_clip_planes(&mut self, near_plane: f32, far_plane: f32) -> Result<()> {
        let near_plane = validation::positive(SOURCE, "near_plane", near_plane)?;
        let far_plane = validation::positive(SOURCE, "far_plane", far_plane)?;
        validation::ordered(SOURCE, "near_plane", near_plane, "far_plane", far_plane)?;

        if near_plane != self.near_plane || far_plane != self.far_plane {
            self.near_plane = near_plane;
            self.far_plane = far_plane;
            self.mark_projection_dirty();
        }
        Ok(())
    }

    /// Switch the clip-space depth convention.
    pub fn set_depth_range(&mut self, depth_range: DepthRange) {
        if depth_range != self.depth_range {
            crate::camera_info!(SOURCE, "depth range switched to {:?}", depth_range);
            self.depth_range = depth_range;
            self.mark_projection_dirty();
        }
    }

    // ===== CACHE =====

    /// Invalidate the cached view matrix.
    pub fn mark_view_dirty(&self) {
        self.view_dirty.set(true);
    }

    /// Invalidate the cached projection matrix.
    pub fn mark_projection_dirty(&self) {
        self.projection_dirty.set(true);
    }

    /// Cached view matrix, rebuilt with `calculate` only when dirty.
    pub(crate) fn view_matrix_with(&self, calculate: impl FnOnce() -> Mat4) -> Mat4 {
        if self.view_dirty.get() {
            self.view_matrix.set(calculate());
            self.view_dirty.set(false);
            #[cfg(test)]
            self.view_rebuilds.set(self.view_rebuilds.get() + 1);
        }
        self.view_matrix.get()
    }

    /// Cached projection matrix, rebuilt with `calculate` only when dirty.
    pub(crate) fn projection_matrix_with(&self, calculate: impl FnOnce(&Self) -> Mat4) -> Mat4 {
        if self.projection_dirty.get() {
            self.projection_matrix.set(calculate(self));
            self.projection_dirty.set(false);
            #[cfg(test)]
            self.projection_rebuilds.set(self.projection_rebuilds.get() + 1);
        }
        self.projection_matrix.get()
    }

    #[cfg(test)]
    pub(crate) fn view_rebuilds(&self) -> u32 {
        self.view_rebuilds.get()
    }

    #[cfg(test)]
    pub(crate) fn projection_rebuilds(&self) -> u32 {
        self.projection_rebuilds.get()
    }
}

#[cfg(test)]
#[path = "camera_base_tests.rs"]
mod tests;
