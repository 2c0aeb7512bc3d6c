// Behavioral tests for the hero mesh deformation engine.

use folio_core::{DeviceClass, HeroMesh, PointerState, Vertex, HOVER_EASE_ALPHA, WAVE_AMP, WAVE_FREQ};

const VIEW_W: f32 = 12.0;
const VIEW_H: f32 = 9.0;

fn desktop_mesh() -> HeroMesh {
    HeroMesh::new(VIEW_W, VIEW_H, DeviceClass::Desktop)
}

fn idle_z(x: f32, y: f32, t: f32) -> f32 {
    (x * WAVE_FREQ + t).sin() * WAVE_AMP + (y * WAVE_FREQ + t).cos() * WAVE_AMP
}

fn center_index(device: DeviceClass) -> usize {
    let (cols, rows) = device.segments();
    ((rows / 2) * (cols + 1) + cols / 2) as usize
}

fn pointer(x: f32, y: f32, active: bool) -> PointerState {
    PointerState { x, y, active }
}

#[test]
fn device_class_from_width_uses_breakpoint() {
    assert_eq!(DeviceClass::from_viewport_width(320.0), DeviceClass::Mobile);
    assert_eq!(DeviceClass::from_viewport_width(767.9), DeviceClass::Mobile);
    assert_eq!(DeviceClass::from_viewport_width(768.0), DeviceClass::Desktop);
    assert_eq!(DeviceClass::from_viewport_width(1920.0), DeviceClass::Desktop);
}

#[test]
fn device_class_controls_grid_density() {
    let mobile = HeroMesh::new(VIEW_W, VIEW_H, DeviceClass::Mobile);
    let desktop = desktop_mesh();
    assert_eq!(mobile.vertex_count(), 81 * 51);
    assert_eq!(desktop.vertex_count(), 121 * 81);
    assert!(desktop.vertex_count() > mobile.vertex_count());
}

#[test]
fn construction_is_deterministic() {
    let a = desktop_mesh();
    let b = desktop_mesh();
    assert_eq!(a.rest_positions(), b.rest_positions());
    assert_eq!(a.vertices(), b.vertices());
}

#[test]
fn grid_is_centered_with_overscan() {
    let mesh = desktop_mesh();
    let rest = mesh.rest_positions();
    // Corners of a grid spanning 1.5x the viewport, centered at the origin
    let first = rest.first().unwrap().position;
    let last = rest.last().unwrap().position;
    assert!((first[0] + VIEW_W * 1.5 * 0.5).abs() < 1e-4);
    assert!((first[1] - VIEW_H * 1.5 * 0.5).abs() < 1e-4);
    assert!((last[0] - VIEW_W * 1.5 * 0.5).abs() < 1e-4);
    assert!((last[1] + VIEW_H * 1.5 * 0.5).abs() < 1e-4);
    // Center vertex sits exactly at the origin (segment counts are even)
    let center = rest[center_index(DeviceClass::Desktop)].position;
    assert!(center[0].abs() < 1e-6 && center[1].abs() < 1e-6 && center[2] == 0.0);
}

#[test]
fn hover_strength_ramps_as_geometric_series() {
    let mut mesh = desktop_mesh();
    assert_eq!(mesh.hover_strength(), 0.0);
    for n in 1..=60u32 {
        mesh.step_hover(true);
        let expected = 1.0 - (1.0 - HOVER_EASE_ALPHA).powi(n as i32);
        assert!(
            (mesh.hover_strength() - expected).abs() < 1e-4,
            "frame {n}: {} vs {}",
            mesh.hover_strength(),
            expected
        );
    }
}

#[test]
fn hover_strength_decays_back_toward_zero() {
    let mut mesh = desktop_mesh();
    for _ in 0..300 {
        mesh.step_hover(true);
    }
    assert!(mesh.hover_strength() > 0.99);
    for _ in 0..200 {
        mesh.step_hover(false);
    }
    assert!(mesh.hover_strength() < 0.01);
}

#[test]
fn decayed_hover_leaves_pure_idle_ripple() {
    let mut mesh = desktop_mesh();
    for _ in 0..300 {
        mesh.step_hover(true);
    }
    for _ in 0..200 {
        mesh.step_hover(false);
    }
    let t = 1.3;
    mesh.deform(t, pointer(0.0, 0.0, false));
    for (cur, rest) in mesh.vertices().iter().zip(mesh.rest_positions()) {
        let [x, y, _] = rest.position;
        let expected = idle_z(x, y, t);
        assert!(
            (cur.position[2] - expected).abs() < 1e-6,
            "vertex at ({x},{y}) carries a bulge term"
        );
    }
}

#[test]
fn centered_pointer_applies_full_gaussian_at_center() {
    let mut mesh = desktop_mesh();
    let strength = mesh.step_hover(true);
    assert!((strength - 0.05).abs() < 1e-7);

    // At t = 3pi/4 the sin and cos idle terms cancel at the origin, so the
    // center depth is exactly influence(0) * warp_strength.
    let t = 3.0 * std::f32::consts::FRAC_PI_4;
    mesh.deform(t, pointer(0.0, 0.0, true));
    let center = mesh.vertices()[center_index(DeviceClass::Desktop)].position[2];
    let expected = idle_z(0.0, 0.0, t) + strength * 1.2;
    assert!((idle_z(0.0, 0.0, t)).abs() < 1e-6);
    assert!(
        (center - expected).abs() < 1e-6,
        "center depth {center} vs {expected}"
    );
}

#[test]
fn centered_pointer_at_t_zero_keeps_cosine_term() {
    let mut mesh = desktop_mesh();
    let strength = mesh.step_hover(true);
    mesh.deform(0.0, pointer(0.0, 0.0, true));
    let center = mesh.vertices()[center_index(DeviceClass::Desktop)].position[2];
    // sin(0) vanishes but cos(0) does not
    let expected = WAVE_AMP + strength * 1.2;
    assert!((center - expected).abs() < 1e-6);
}

#[test]
fn vertices_beyond_warp_radius_get_no_bulge() {
    let mut mesh = desktop_mesh();
    for _ in 0..300 {
        mesh.step_hover(true);
    }
    let t = 0.7;
    mesh.deform(t, pointer(0.0, 0.0, true));
    let radius = DeviceClass::Desktop.warp_radius();
    for (cur, rest) in mesh.vertices().iter().zip(mesh.rest_positions()) {
        let [x, y, _] = rest.position;
        if (x * x + y * y).sqrt() >= radius {
            let expected = idle_z(x, y, t);
            assert!(
                (cur.position[2] - expected).abs() < 1e-6,
                "vertex at ({x},{y}) outside radius was warped"
            );
        }
    }
}

#[test]
fn bulge_tracks_projected_pointer_position() {
    let mut mesh = desktop_mesh();
    for _ in 0..300 {
        mesh.step_hover(true);
    }
    let t = 2.1;
    mesh.deform(t, pointer(0.5, 0.0, true));

    // The vertex with the largest bulge should sit within one cell of the
    // pointer projected into the mesh plane (0.5 * W * 0.75).
    let mx = 0.5 * VIEW_W * 0.75;
    let (cols, rows) = DeviceClass::Desktop.segments();
    let dx = VIEW_W * 1.5 / cols as f32;
    let dy = VIEW_H * 1.5 / rows as f32;

    let mut best = (0.0f32, [0.0f32; 3]);
    for (cur, rest) in mesh.vertices().iter().zip(mesh.rest_positions()) {
        let [x, y, _] = rest.position;
        let bulge = cur.position[2] - idle_z(x, y, t);
        if bulge > best.0 {
            best = (bulge, rest.position);
        }
    }
    assert!(best.0 > 1.0, "no substantial bulge found");
    assert!((best.1[0] - mx).abs() <= dx + 1e-4);
    assert!(best.1[1].abs() <= dy + 1e-4);
}

#[test]
fn deform_is_idempotent_for_fixed_inputs() {
    let mut mesh = desktop_mesh();
    for _ in 0..20 {
        mesh.step_hover(true);
    }
    let p = pointer(-0.3, 0.4, true);
    mesh.deform(5.0, p);
    let first: Vec<Vertex> = mesh.vertices().to_vec();
    mesh.deform(5.0, p);
    assert_eq!(first.as_slice(), mesh.vertices());
}

#[test]
fn only_depth_is_deformed() {
    let mut mesh = desktop_mesh();
    mesh.update(3.0, pointer(0.2, -0.6, true));
    for (cur, rest) in mesh.vertices().iter().zip(mesh.rest_positions()) {
        assert_eq!(cur.position[0], rest.position[0]);
        assert_eq!(cur.position[1], rest.position[1]);
    }
}

#[test]
fn update_marks_buffer_dirty_once_per_pass() {
    let mut mesh = desktop_mesh();
    assert!(mesh.take_dirty(), "fresh mesh should need an initial upload");
    assert!(!mesh.take_dirty());
    mesh.update(0.1, pointer(0.0, 0.0, false));
    assert!(mesh.take_dirty());
    assert!(!mesh.take_dirty());
}

#[test]
fn wireframe_indices_cover_every_edge() {
    let mesh = HeroMesh::new(VIEW_W, VIEW_H, DeviceClass::Mobile);
    let (cols, rows) = DeviceClass::Mobile.segments();
    let indices = mesh.wireframe_indices();
    let expected_lines = (rows + 1) * cols + rows * (cols + 1);
    assert_eq!(indices.len(), (expected_lines * 2) as usize);
    let n = mesh.vertex_count() as u32;
    for pair in indices.chunks_exact(2) {
        assert!(pair[0] < n && pair[1] < n);
        assert_ne!(pair[0], pair[1]);
    }
}
