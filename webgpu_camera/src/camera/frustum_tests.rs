use glam::{Mat4, Vec3};
use std::f32::consts::FRAC_PI_2;
use super::*;

/// 90° perspective at (0, 0, 5) looking at the origin, near 0.1, far 10.
fn create_test_view_projection(depth: DepthRange) -> Mat4 {
    let projection = match depth {
        DepthRange::ZeroToOne => Mat4::perspective_rh(FRAC_PI_2, 1.0, 0.1, 10.0),
        DepthRange::NegativeOneToOne => Mat4::perspective_rh_gl(FRAC_PI_2, 1.0, 0.1, 10.0),
    };
    let view = Mat4::look_at_rh(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, Vec3::Y);
    projection * view
}

// ============================================================================
// Frustum::from_view_projection
// ============================================================================

#[test]
fn test_planes_are_normalized() {
    for depth in [DepthRange::ZeroToOne, DepthRange::NegativeOneToOne] {
        let frustum = Frustum::from_view_projection(&create_test_view_projection(depth), depth);
        for plane in &frustum.planes {
            assert!((plane.truncate().length() - 1.0).abs() < 1e-4);
        }
    }
}

#[test]
fn test_near_and_far_planes_match_clip_distances() {
    for depth in [DepthRange::ZeroToOne, DepthRange::NegativeOneToOne] {
        let frustum = Frustum::from_view_projection(&create_test_view_projection(depth), depth);

        // Eye at z = 5: near plane at z = 4.9, far plane at z = -5
        let near = frustum.signed_distance(PLANE_NEAR, Vec3::new(0.0, 0.0, 4.9));
        let far = frustum.signed_distance(PLANE_FAR, Vec3::new(0.0, 0.0, -5.0));
        assert!(near.abs() < 1e-3, "{:?}: near distance {}", depth, near);
        assert!(far.abs() < 1e-3, "{:?}: far distance {}", depth, far);
    }
}

// ============================================================================
// Points and spheres
// ============================================================================

#[test]
fn test_contains_point() {
    let frustum = Frustum::from_view_projection(&create_test_view_projection(DepthRange::ZeroToOne), DepthRange::ZeroToOne);

    assert!(frustum.contains_point(Vec3::ZERO));
    assert!(!frustum.contains_point(Vec3::new(0.0, 0.0, 6.0)));
    assert!(!frustum.contains_point(Vec3::new(0.0, 0.0, -6.0)));
    assert!(!frustum.contains_point(Vec3::new(50.0, 0.0, 0.0)));
}

#[test]
fn test_intersects_sphere() {
    let frustum = Frustum::from_view_projection(&create_test_view_projection(DepthRange::ZeroToOne), DepthRange::ZeroToOne);

    assert!(frustum.intersects_sphere(Vec3::ZERO, 0.5));
    // Centre just beyond the far plane, radius reaching back in
    assert!(frustum.intersects_sphere(Vec3::new(0.0, 0.0, -5.5), 1.0));
    assert!(!frustum.intersects_sphere(Vec3::new(0.0, 0.0, -8.0), 1.0));
}

// ============================================================================
// AABB tests
// ============================================================================

#[test]
fn test_aabb_inside_frustum() {
    let frustum = Frustum::from_view_projection(&create_test_view_projection(DepthRange::ZeroToOne), DepthRange::ZeroToOne);
    let aabb = AABB::from_center(Vec3::ZERO, Vec3::splat(1.0));

    assert!(frustum.intersects_aabb(&aabb));
    assert_eq!(frustum.classify_aabb(&aabb), FrustumTest::Inside);
}

#[test]
fn test_aabb_behind_camera() {
    let frustum = Frustum::from_view_projection(&create_test_view_projection(DepthRange::ZeroToOne), DepthRange::ZeroToOne);
    let aabb = AABB::new(Vec3::new(-1.0, -1.0, 10.0), Vec3::new(1.0, 1.0, 12.0));

    assert!(!frustum.intersects_aabb(&aabb));
    assert_eq!(frustum.classify_aabb(&aabb), FrustumTest::Outside);
}

#[test]
fn test_aabb_beyond_far_plane() {
    let frustum = Frustum::from_view_projection(&create_test_view_projection(DepthRange::ZeroToOne), DepthRange::ZeroToOne);
    let aabb = AABB::new(Vec3::new(-1.0, -1.0, -20.0), Vec3::new(1.0, 1.0, -18.0));

    assert!(!frustum.intersects_aabb(&aabb));
}

#[test]
fn test_aabb_straddling_orthographic_edge() {
    let vp = Mat4::orthographic_rh(-5.0, 5.0, -5.0, 5.0, 0.1, 100.0);
    let frustum = Frustum::from_view_projection(&vp, DepthRange::ZeroToOne);

    let aabb = AABB::new(Vec3::new(4.0, 0.0, -10.0), Vec3::new(6.0, 1.0, -5.0));

    assert!(frustum.intersects_aabb(&aabb));
    assert_eq!(frustum.classify_aabb(&aabb), FrustumTest::Partial);
}

// ============================================================================
// Plane constants
// ============================================================================

#[test]
fn test_plane_constants() {
    assert_eq!(PLANE_LEFT, 0);
    assert_eq!(PLANE_RIGHT, 1);
    assert_eq!(PLANE_BOTTOM, 2);
    assert_eq!(PLANE_TOP, 3);
    assert_eq!(PLANE_NEAR, 4);
    assert_eq!(PLANE_FAR, 5);
}
