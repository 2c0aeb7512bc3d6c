// Tests for the fixed hero camera and its viewport math.

use folio_core::{Camera, CAMERA_FOV_DEG, CAMERA_Z};
use glam::Vec4;

#[test]
fn viewport_size_matches_frustum_geometry() {
    let cam = Camera::hero(16.0 / 9.0);
    let (w, h) = cam.viewport_size(CAMERA_Z);
    let expected_h = 2.0 * CAMERA_Z * (CAMERA_FOV_DEG.to_radians() * 0.5).tan();
    assert!((h - expected_h).abs() < 1e-4);
    assert!((w - h * 16.0 / 9.0).abs() < 1e-4);
}

#[test]
fn viewport_size_scales_linearly_with_distance() {
    let cam = Camera::hero(1.5);
    let (w1, h1) = cam.viewport_size(5.0);
    let (w2, h2) = cam.viewport_size(10.0);
    assert!((w2 / w1 - 2.0).abs() < 1e-4);
    assert!((h2 / h1 - 2.0).abs() < 1e-4);
}

#[test]
fn origin_projects_to_screen_center() {
    let cam = Camera::hero(1.78);
    let clip = cam.hero_mvp() * Vec4::new(0.0, 0.0, 0.0, 1.0);
    let ndc = clip / clip.w;
    // The tilt pivots around the origin, so the grid center stays centered
    assert!(ndc.x.abs() < 1e-5);
    assert!(ndc.y.abs() < 1e-5);
    assert!(ndc.z > 0.0 && ndc.z < 1.0);
}

#[test]
fn viewport_corners_are_inside_clip_volume() {
    let cam = Camera::hero(1.6);
    let (w, h) = cam.viewport_size(CAMERA_Z);
    // Corners of the un-tilted visible rect at the mesh plane
    let proj_view = cam.projection_matrix() * cam.view_matrix();
    for (sx, sy) in [(-0.5, -0.5), (0.5, -0.5), (-0.5, 0.5), (0.5, 0.5)] {
        let clip = proj_view * Vec4::new(w * sx, h * sy, 0.0, 1.0);
        let ndc = clip / clip.w;
        assert!(ndc.x.abs() <= 1.0 + 1e-3);
        assert!(ndc.y.abs() <= 1.0 + 1e-3);
    }
}
