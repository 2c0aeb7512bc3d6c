//! Hero background mesh: a planar wireframe grid whose depth is recomputed
//! every frame from an idle ripple plus a Gaussian bulge under the pointer.
//!
//! The engine is pure and platform-agnostic: hosts feed it elapsed seconds
//! and the latest pointer snapshot, then upload the vertex buffer when it is
//! marked dirty. Depth is always recomputed from the immutable rest-position
//! snapshot, never accumulated.

use crate::constants::*;

/// Latest pointer snapshot, pushed by the host shell.
///
/// `x`/`y` are NDC in \[-1, 1\]; `active` is false once the pointer leaves
/// the hero area (coordinates retain their last value).
#[derive(Clone, Copy, Debug, Default)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
    pub active: bool,
}

/// Grid density / warp tuning class, decided once per mount from the host
/// window width. Changing class requires a full mesh rebuild.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeviceClass {
    Mobile,
    Desktop,
}

impl DeviceClass {
    #[inline]
    pub fn from_viewport_width(css_px: f32) -> Self {
        if css_px < MOBILE_BREAKPOINT_PX {
            DeviceClass::Mobile
        } else {
            DeviceClass::Desktop
        }
    }

    /// Grid subdivisions as (columns, rows).
    #[inline]
    pub fn segments(self) -> (u32, u32) {
        match self {
            DeviceClass::Mobile => MOBILE_SEGMENTS,
            DeviceClass::Desktop => DESKTOP_SEGMENTS,
        }
    }

    #[inline]
    pub fn warp_radius(self) -> f32 {
        match self {
            DeviceClass::Mobile => MOBILE_WARP_RADIUS,
            DeviceClass::Desktop => DESKTOP_WARP_RADIUS,
        }
    }

    /// Peak bulge height at full hover strength.
    #[inline]
    pub fn warp_strength_max(self) -> f32 {
        match self {
            DeviceClass::Mobile => MOBILE_WARP_STRENGTH,
            DeviceClass::Desktop => DESKTOP_WARP_STRENGTH,
        }
    }
}

/// A single grid vertex, laid out for direct GPU upload.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
}

pub struct HeroMesh {
    device: DeviceClass,
    // Visible viewport extents in world units at the mesh plane. The grid
    // itself spans GRID_SCALE times these.
    viewport_w: f32,
    viewport_h: f32,
    cols: u32,
    rows: u32,
    rest: Vec<Vertex>,
    current: Vec<Vertex>,
    hover_strength: f32,
    dirty: bool,
}

impl HeroMesh {
    /// Build the grid and snapshot rest positions. Construction is
    /// deterministic: the same inputs always yield the same snapshot.
    pub fn new(viewport_w: f32, viewport_h: f32, device: DeviceClass) -> Self {
        let (cols, rows) = device.segments();
        let grid_w = viewport_w * GRID_SCALE;
        let grid_h = viewport_h * GRID_SCALE;
        let dx = grid_w / cols as f32;
        let dy = grid_h / rows as f32;
        let half_w = grid_w * 0.5;
        let half_h = grid_h * 0.5;

        let mut rest = Vec::with_capacity(((cols + 1) * (rows + 1)) as usize);
        for r in 0..=rows {
            // Row 0 is the top edge; y decreases downward
            let y = half_h - r as f32 * dy;
            for c in 0..=cols {
                let x = -half_w + c as f32 * dx;
                rest.push(Vertex {
                    position: [x, y, 0.0],
                });
            }
        }
        let current = rest.clone();
        log::debug!(
            "hero mesh: {}x{} segments, {} vertices",
            cols,
            rows,
            rest.len()
        );
        Self {
            device,
            viewport_w,
            viewport_h,
            cols,
            rows,
            rest,
            current,
            hover_strength: 0.0,
            dirty: true,
        }
    }

    #[inline]
    pub fn device(&self) -> DeviceClass {
        self.device
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.current.len()
    }

    #[inline]
    pub fn vertices(&self) -> &[Vertex] {
        &self.current
    }

    #[inline]
    pub fn rest_positions(&self) -> &[Vertex] {
        &self.rest
    }

    #[inline]
    pub fn hover_strength(&self) -> f32 {
        self.hover_strength
    }

    /// Returns and clears the dirty flag. Hosts re-upload the vertex buffer
    /// when this reports true.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::replace(&mut self.dirty, false)
    }

    /// Per-frame entry point: ease hover strength toward the active flag,
    /// then recompute every depth value.
    pub fn update(&mut self, t: f32, pointer: PointerState) {
        self.step_hover(pointer.active);
        self.deform(t, pointer);
    }

    /// Exponential ease of hover strength toward 0/1. One step per rendered
    /// frame; the ramp shape after n frames from zero is `1 - 0.95^n`.
    pub fn step_hover(&mut self, active: bool) -> f32 {
        let target = if active { 1.0 } else { 0.0 };
        self.hover_strength += (target - self.hover_strength) * HOVER_EASE_ALPHA;
        self.hover_strength
    }

    /// Recompute all current depths from the rest snapshot. Pure in
    /// `(t, pointer, hover_strength)`: calling it twice with the same inputs
    /// writes the same output.
    pub fn deform(&mut self, t: f32, pointer: PointerState) {
        let warp_radius = self.device.warp_radius();
        let warp_strength = self.hover_strength * self.device.warp_strength_max();
        let hovering = self.hover_strength > HOVER_EPSILON;

        // Project pointer NDC onto the mesh plane
        let mx = pointer.x * self.viewport_w * POINTER_WORLD_SCALE;
        let my = pointer.y * self.viewport_h * POINTER_WORLD_SCALE;
        let radius_sq = warp_radius * warp_radius;
        let falloff = 2.0 * radius_sq / 9.0;

        for (cur, rest) in self.current.iter_mut().zip(self.rest.iter()) {
            let [x, y, z] = rest.position;
            let mut new_z = z
                + (x * WAVE_FREQ + t).sin() * WAVE_AMP
                + (y * WAVE_FREQ + t).cos() * WAVE_AMP;
            if hovering {
                let dx = x - mx;
                let dy = y - my;
                let dist_sq = dx * dx + dy * dy;
                if dist_sq < radius_sq {
                    new_z += (-dist_sq / falloff).exp() * warp_strength;
                }
            }
            cur.position[2] = new_z;
        }
        self.dirty = true;
    }

    /// Line-list indices over every grid edge, for wireframe rendering.
    pub fn wireframe_indices(&self) -> Vec<u32> {
        let cols = self.cols;
        let rows = self.rows;
        let stride = cols + 1;
        let lines = ((rows + 1) * cols + rows * stride) as usize;
        let mut indices = Vec::with_capacity(lines * 2);
        // Horizontal edges
        for r in 0..=rows {
            for c in 0..cols {
                let i = r * stride + c;
                indices.push(i);
                indices.push(i + 1);
            }
        }
        // Vertical edges
        for r in 0..rows {
            for c in 0..=cols {
                let i = r * stride + c;
                indices.push(i);
                indices.push(i + stride);
            }
        }
        indices
    }
}
