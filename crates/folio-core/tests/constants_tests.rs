// Tests for tuning constants and their mathematical relationships.

use folio_core::constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_are_within_reasonable_bounds() {
    assert!(MOBILE_BREAKPOINT_PX > 0.0);
    assert!(GRID_SCALE >= 1.0);

    // Easing fraction must be a proper fraction for convergence
    assert!(HOVER_EASE_ALPHA > 0.0 && HOVER_EASE_ALPHA < 1.0);
    // The cutoff must be reachable by the decay
    assert!(HOVER_EPSILON > 0.0 && HOVER_EPSILON < 1.0);

    assert!(WAVE_FREQ > 0.0);
    assert!(WAVE_AMP > 0.0);

    assert!(POINTER_WORLD_SCALE > 0.0 && POINTER_WORLD_SCALE <= 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_have_logical_relationships() {
    // Desktop runs a denser grid and a wider, stronger warp than mobile
    assert!(DESKTOP_SEGMENTS.0 > MOBILE_SEGMENTS.0);
    assert!(DESKTOP_SEGMENTS.1 > MOBILE_SEGMENTS.1);
    assert!(DESKTOP_WARP_RADIUS > MOBILE_WARP_RADIUS);
    assert!(DESKTOP_WARP_STRENGTH > MOBILE_WARP_STRENGTH);

    // Even segment counts guarantee a vertex exactly at the grid center
    assert_eq!(MOBILE_SEGMENTS.0 % 2, 0);
    assert_eq!(MOBILE_SEGMENTS.1 % 2, 0);
    assert_eq!(DESKTOP_SEGMENTS.0 % 2, 0);
    assert_eq!(DESKTOP_SEGMENTS.1 % 2, 0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn camera_constants_are_sane() {
    assert!(CAMERA_Z > 0.0);
    assert!(CAMERA_FOV_DEG > 0.0 && CAMERA_FOV_DEG < 180.0);
    assert!(CAMERA_ZNEAR > 0.0);
    assert!(CAMERA_ZFAR > CAMERA_Z);
    // Plane tilt stays subtle
    assert!(MESH_TILT_X.abs() < 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn wireframe_color_is_translucent() {
    for ch in MESH_COLOR {
        assert!((0.0..=1.0).contains(&ch));
    }
    assert!(MESH_COLOR[3] < 0.5, "hero wireframe should stay subtle");
}
