use glam::{Mat4, Vec3};
use super::*;
use crate::camera::orbit_camera::{OrbitCamera, OrbitCameraDesc};
use crate::camera::orthographic_camera::{OrthographicCamera, OrthographicCameraDesc};

fn create_test_camera() -> Camera {
    Camera::from(OrbitCamera::new(&OrbitCameraDesc::default()).unwrap())
}

// ============================================================================
// Layout
// ============================================================================

#[test]
fn test_uniform_size_matches_wgsl_layout() {
    assert_eq!(std::mem::size_of::<CameraUniform>(), 208);
    assert_eq!(std::mem::align_of::<CameraUniform>(), 4);
}

#[test]
fn test_as_bytes_length() {
    let uniform = create_test_camera().uniform();
    assert_eq!(uniform.as_bytes().len(), 208);
}

#[test]
fn test_zeroed_uniform() {
    let uniform: CameraUniform = bytemuck::Zeroable::zeroed();
    assert!(uniform.as_bytes().iter().all(|&b| b == 0));
}

// ============================================================================
// Contents
// ============================================================================

#[test]
fn test_from_camera_copies_matrices() {
    let camera = create_test_camera();
    let uniform = CameraUniform::from_camera(&camera);

    assert_eq!(Mat4::from_cols_array_2d(&uniform.view), camera.view_matrix());
    assert_eq!(Mat4::from_cols_array_2d(&uniform.projection), camera.projection_matrix());
    assert_eq!(
        Mat4::from_cols_array_2d(&uniform.view_projection),
        camera.view_projection_matrix()
    );
}

#[test]
fn test_position_has_unit_w() {
    let camera = create_test_camera();
    let uniform = CameraUniform::from_camera(&camera);

    assert!(Vec3::from_slice(&uniform.position[..3]).abs_diff_eq(camera.position(), 1e-5));
    assert_eq!(uniform.position[3], 1.0);
}

#[test]
fn test_first_bytes_are_first_view_column() {
    let camera = Camera::from(OrthographicCamera::new(&OrthographicCameraDesc::default()).unwrap());
    let uniform = camera.uniform();

    let first_column: [f32; 4] = bytemuck::pod_read_unaligned(&uniform.as_bytes()[..16]);
    assert_eq!(first_column, camera.view_matrix().x_axis.to_array());
}
