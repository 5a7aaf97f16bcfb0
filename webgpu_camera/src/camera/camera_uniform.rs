//! GPU-side camera block, written into a uniform buffer once per frame.
//!
//! Layout (208 bytes, every member 16-byte aligned):
//!
//! ```wgsl
//! struct Camera {
//!     view: mat4x4<f32>,
//!     projection: mat4x4<f32>,
//!     view_projection: mat4x4<f32>,
//!     position: vec4<f32>,
//! }
//! ```
//!
//! Matrices are stored column-major, matching WGSL.

use bytemuck::{Pod, Zeroable};
use super::camera::Camera;

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct CameraUniform {
    /// World -> view
    pub view: [[f32; 4]; 4],
    /// View -> clip
    pub projection: [[f32; 4]; 4],
    /// World -> clip
    pub view_projection: [[f32; 4]; 4],
    /// Eye position, w = 1
    pub position: [f32; 4],
}

impl CameraUniform {
    /// Snapshot the camera's current matrices (rebuilding stale caches).
    pub fn from_camera(camera: &Camera) -> Self {
        let view = camera.view_matrix();
        let projection = camera.projection_matrix();
        Self {
            view: view.to_cols_array_2d(),
            projection: projection.to_cols_array_2d(),
            view_projection: (projection * view).to_cols_array_2d(),
            position: camera.position().extend(1.0).to_array(),
        }
    }

    /// Raw bytes for a buffer upload.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

#[cfg(test)]
#[path = "camera_uniform_tests.rs"]
mod tests;
