/// Camera: the closed set of camera kinds a render loop can hold.
///
/// Each variant owns its own parameters and matrix cache; this enum only
/// dispatches. Every dispatch is an exhaustive `match`, so adding a kind
/// is a compile error everywhere it has to be handled.

use glam::{Mat4, Vec3};
use crate::error::Result;
use super::camera_base::CameraBase;
use super::camera_uniform::CameraUniform;
use super::first_person_camera::FirstPersonCamera;
use super::frustum::Frustum;
use super::orbit_camera::OrbitCamera;
use super::orthographic_camera::OrthographicCamera;

/// Tag of a `Camera` variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CameraKind {
    Orbit,
    FirstPerson,
    Orthographic,
}

#[derive(Debug, Clone)]
pub enum Camera {
    Orbit(OrbitCamera),
    FirstPerson(FirstPersonCamera),
    Orthographic(OrthographicCamera),
}

impl Camera {
    pub fn kind(&self) -> CameraKind {
        match self {
            Camera::Orbit(_) => CameraKind::Orbit,
            Camera::FirstPerson(_) => CameraKind::FirstPerson,
            Camera::Orthographic(_) => CameraKind::Orthographic,
        }
    }

    /// Lens state and matrix cache of the active variant.
    pub fn base(&self) -> &CameraBase {
        match self {
            Camera::Orbit(camera) => camera.base(),
            Camera::FirstPerson(camera) => camera.base(),
            Camera::Orthographic(camera) => camera.base(),
        }
    }

    pub fn base_mut(&mut self) -> &mut CameraBase {
        match self {
            Camera::Orbit(camera) => camera.base_mut(),
            Camera::FirstPerson(camera) => camera.base_mut(),
            Camera::Orthographic(camera) => camera.base_mut(),
        }
    }

    // ===== MATRICES =====

    /// World -> view transform, cached.
    pub fn view_matrix(&self) -> Mat4 {
        match self {
            Camera::Orbit(camera) => camera.view_matrix(),
            Camera::FirstPerson(camera) => camera.view_matrix(),
            Camera::Orthographic(camera) => camera.view_matrix(),
        }
    }

    /// View -> clip transform, cached.
    pub fn projection_matrix(&self) -> Mat4 {
        match self {
            Camera::Orbit(camera) => camera.projection_matrix(),
            Camera::FirstPerson(camera) => camera.projection_matrix(),
            Camera::Orthographic(camera) => camera.projection_matrix(),
        }
    }

    /// Combined view-projection matrix (projection * view).
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Eye position in world space.
    pub fn position(&self) -> Vec3 {
        match self {
            Camera::Orbit(camera) => camera.position(),
            Camera::FirstPerson(camera) => camera.position(),
            Camera::Orthographic(camera) => camera.position(),
        }
    }

    /// Culling planes for the current view-projection.
    pub fn frustum(&self) -> Frustum {
        Frustum::from_view_projection(&self.view_projection_matrix(), self.base().depth_range())
    }

    /// GPU block for this frame.
    pub fn uniform(&self) -> CameraUniform {
        CameraUniform::from_camera(self)
    }

    /// Follow a framebuffer resize.
    pub fn set_viewport_size(&mut self, width: u32, height: u32) -> Result<()> {
        self.base_mut().set_viewport_size(width, height)
    }

    // ===== VARIANT ACCESS =====

    pub fn as_orbit(&self) -> Option<&OrbitCamera> {
        match self {
            Camera::Orbit(camera) => Some(camera),
            _ => None,
        }
    }

    pub fn as_orbit_mut(&mut self) -> Option<&mut OrbitCamera> {
        match self {
            Camera::Orbit(camera) => Some(camera),
            _ => None,
        }
    }

    pub fn as_first_person(&self) -> Option<&FirstPersonCamera> {
        match self {
            Camera::FirstPerson(camera) => Some(camera),
            _ => None,
        }
    }

    pub fn as_first_person_mut(&mut self) -> Option<&mut FirstPersonCamera> {
        match self {
            Camera::FirstPerson(camera) => Some(camera),
            _ => None,
        }
    }

    pub fn as_orthographic(&self) -> Option<&OrthographicCamera> {
        match self {
            Camera::Orthographic(camera) => Some(camera),
            _ => None,
        }
    }

    pub fn as_orthographic_mut(&mut self) -> Option<&mut OrthographicCamera> {
        match self {
            Camera::Orthographic(camera) => Some(camera),
            _ => None,
        }
    }
}

impl From<OrbitCamera> for Camera {
    fn from(camera: OrbitCamera) -> Self {
        Camera::Orbit(camera)
    }
}

impl From<FirstPersonCamera> for Camera {
    fn from(camera: FirstPersonCamera) -> Self {
        Camera::FirstPerson(camera)
    }
}

impl From<OrthographicCamera> for Camera {
    fn from(camera: OrthographicCamera) -> Self {
        Camera::Orthographic(camera)
    }
}

#[cfg(test)]
#[path = "camera_tests.rs"]
mod tests;
