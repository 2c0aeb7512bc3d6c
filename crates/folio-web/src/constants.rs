// Element ids the Rust side creates and looks up.
pub const CANVAS_ID: &str = "hero-canvas";
pub const HERO_ID: &str = "hero";

// Surface clear color: the soft off-white the page sits on.
pub const CLEAR_COLOR: wgpu::Color = wgpu::Color {
    r: 0.984,
    g: 0.976,
    b: 0.965,
    a: 1.0,
};
