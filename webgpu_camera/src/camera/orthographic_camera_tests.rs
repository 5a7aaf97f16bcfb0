use glam::{Mat4, Vec3};
use crate::error::Error;
use super::*;

fn create_test_camera() -> OrthographicCamera {
    OrthographicCamera::new(&OrthographicCameraDesc::default()).unwrap()
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_new_with_defaults() {
    let camera = create_test_camera();
    assert_eq!(camera.left(), -10.0);
    assert_eq!(camera.right(), 10.0);
    assert_eq!(camera.zoom(), 1.0);
    assert!(camera.forward().abs_diff_eq(Vec3::NEG_Z, 1e-6));
    assert_ne!(camera.view_projection_matrix(), Mat4::IDENTITY);
}

#[test]
fn test_new_rejects_inverted_extents() {
    let desc = OrthographicCameraDesc { left: 5.0, right: -5.0, ..OrthographicCameraDesc::default() };
    assert!(matches!(OrthographicCamera::new(&desc), Err(Error::InvalidParameter(_))));
}

// ============================================================================
// Bounds
// ============================================================================

#[test]
fn test_set_bounds_is_symmetric() {
    let mut camera = create_test_camera();
    camera.set_bounds(8.0, 6.0).unwrap();
    assert_eq!(camera.left(), -4.0);
    assert_eq!(camera.right(), 4.0);
    assert_eq!(camera.bottom(), -3.0);
    assert_eq!(camera.top(), 3.0);
}

#[test]
fn test_set_bounds_from_height_uses_aspect_ratio() {
    let mut camera = create_test_camera();
    camera.base_mut().set_aspect_ratio(2.0).unwrap();

    camera.set_bounds_from_height(10.0).unwrap();

    assert_eq!(camera.bottom(), -5.0);
    assert_eq!(camera.top(), 5.0);
    assert_eq!(camera.left(), -10.0);
    assert_eq!(camera.right(), 10.0);
}

#[test]
fn test_set_bounds_rejects_non_positive_size() {
    let mut camera = create_test_camera();
    assert!(matches!(camera.set_bounds(0.0, 4.0), Err(Error::InvalidParameter(_))));
    assert!(matches!(camera.set_bounds_from_height(f32::NAN), Err(Error::NonFiniteInput(_))));
    assert_eq!(camera.left(), -10.0);
}

#[test]
fn test_set_extents_off_centre() {
    let mut camera = create_test_camera();
    camera.set_extents(0.0, 4.0, 0.0, 2.0).unwrap();

    let proj = camera.projection_matrix();
    let corner = proj.project_point3(Vec3::new(4.0, 2.0, -1.0));
    assert!((corner.x - 1.0).abs() < 1e-6);
    assert!((corner.y - 1.0).abs() < 1e-6);

    assert!(camera.set_extents(0.0, 4.0, 2.0, 2.0).is_err());
}

#[test]
fn test_bounds_change_invalidates_projection_only() {
    let mut camera = create_test_camera();
    camera.view_matrix();
    let before = camera.projection_matrix();

    camera.set_bounds(4.0, 4.0).unwrap();
    assert!(camera.base().is_projection_dirty());
    assert!(!camera.base().is_view_dirty());
    assert_ne!(camera.projection_matrix(), before);
}

// ============================================================================
// Zoom
// ============================================================================

#[test]
fn test_set_zoom_non_positive_is_noop() {
    let mut camera = create_test_camera();
    camera.set_zoom(2.0).unwrap();
    camera.projection_matrix();

    camera.set_zoom(-1.0).unwrap();
    assert_eq!(camera.zoom(), 2.0);

    camera.set_zoom(0.0).unwrap();
    assert_eq!(camera.zoom(), 2.0);
    assert!(!camera.base().is_projection_dirty());
}

#[test]
fn test_set_zoom_non_finite_is_rejected() {
    let mut camera = create_test_camera();
    assert!(matches!(camera.set_zoom(f32::INFINITY), Err(Error::NonFiniteInput(_))));
    assert_eq!(camera.zoom(), 1.0);
}

#[test]
fn test_zoom_shrinks_visible_volume() {
    let mut camera = create_test_camera();
    camera.set_zoom(2.0).unwrap();

    // With zoom 2 the visible half-width is 5, so x = 5 lands on the edge
    let edge = camera.projection_matrix().project_point3(Vec3::new(5.0, 0.0, -1.0));
    assert!((edge.x - 1.0).abs() < 1e-6);
}

// ============================================================================
// Pan
// ============================================================================

#[test]
fn test_pan_moves_position_and_target_together() {
    let mut camera = create_test_camera();
    let direction_before = camera.forward();

    camera.pan(3.0, -2.0).unwrap();

    assert!(camera.position().abs_diff_eq(Vec3::new(3.0, -2.0, 10.0), 1e-5));
    assert!(camera.target().abs_diff_eq(Vec3::new(3.0, -2.0, 0.0), 1e-5));
    assert!(camera.forward().abs_diff_eq(direction_before, 1e-6));
}

#[test]
fn test_pan_invalidates_view_only() {
    let mut camera = create_test_camera();
    let view_before = camera.view_matrix();
    camera.projection_matrix();

    camera.pan(1.0, 0.0).unwrap();
    assert!(camera.base().is_view_dirty());
    assert!(!camera.base().is_projection_dirty());
    assert_ne!(camera.view_matrix(), view_before);
    assert_eq!(camera.base().view_rebuilds(), 2);
}

#[test]
fn test_pan_in_top_down_view() {
    let mut camera = OrthographicCamera::new(&OrthographicCameraDesc {
        position: Vec3::new(0.0, 20.0, 0.0),
        target: Vec3::ZERO,
        ..OrthographicCameraDesc::default()
    })
    .unwrap();

    camera.pan(2.0, 0.0).unwrap();
    assert!(camera.position().abs_diff_eq(Vec3::new(2.0, 20.0, 0.0), 1e-5));

    let view = camera.view_matrix();
    assert!(view.is_finite());
    let target_in_view = view.transform_point3(camera.target());
    assert!(target_in_view.abs_diff_eq(Vec3::new(0.0, 0.0, -20.0), 1e-4));
}
