//! Camera module: view/projection matrix producers for a WebGPU renderer.
//!
//! Cameras are plain values owned and driven by the caller. Each one
//! caches its view and projection matrices and rebuilds them lazily on
//! the next read after a parameter change.

mod camera;
mod camera_base;
mod camera_uniform;
mod first_person_camera;
mod frustum;
mod orbit_camera;
mod orthographic_camera;
mod validation;
pub mod projection;

pub use camera::{Camera, CameraKind};
pub use camera_base::{CameraBase, LensDesc};
pub use camera_uniform::CameraUniform;
pub use first_person_camera::{FirstPersonCamera, FirstPersonCameraDesc};
pub use frustum::{
    AABB, Frustum, FrustumTest,
    PLANE_LEFT, PLANE_RIGHT, PLANE_BOTTOM, PLANE_TOP, PLANE_NEAR, PLANE_FAR,
};
pub use orbit_camera::{OrbitCamera, OrbitCameraDesc};
pub use orthographic_camera::{OrthographicCamera, OrthographicCameraDesc};
pub use projection::{DepthRange, PITCH_LIMIT, WORLD_UP};
