/// Hero mesh tuning constants.
///
/// These constants express intended behavior (grid density, easing rates,
/// falloff radii) and keep magic numbers out of the code.
// Viewport width (CSS px) below which the mobile grid density is used
pub const MOBILE_BREAKPOINT_PX: f32 = 768.0;

// Grid subdivisions (columns, rows) per device class
pub const MOBILE_SEGMENTS: (u32, u32) = (80, 50);
pub const DESKTOP_SEGMENTS: (u32, u32) = (120, 80);

// The grid overscans the visible viewport so deformation never exposes edges
pub const GRID_SCALE: f32 = 1.5;

// Idle ripple (applied to every vertex at all times)
pub const WAVE_FREQ: f32 = 0.5; // spatial frequency (per world unit)
pub const WAVE_AMP: f32 = 0.15; // depth amplitude per sin/cos term

// Hover easing: fraction of the remaining distance covered per frame.
// Deliberately frame-count based rather than dt-normalized.
pub const HOVER_EASE_ALPHA: f32 = 0.05;
// Below this strength the warp term is skipped entirely
pub const HOVER_EPSILON: f32 = 0.01;

// Interactive warp falloff radius and peak strength per device class
pub const MOBILE_WARP_RADIUS: f32 = 2.5;
pub const DESKTOP_WARP_RADIUS: f32 = 4.0;
pub const MOBILE_WARP_STRENGTH: f32 = 0.6;
pub const DESKTOP_WARP_STRENGTH: f32 = 1.2;

// Maps pointer NDC into the mesh plane's world coordinates. Calibrated to
// the fixed camera below; recalibrate if the camera moves.
pub const POINTER_WORLD_SCALE: f32 = 0.75;

// Camera
pub const CAMERA_Z: f32 = 10.0;
pub const CAMERA_FOV_DEG: f32 = 50.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 100.0;

// The mesh is tilted slightly away from the viewer
pub const MESH_TILT_X: f32 = -0.2;

// Wireframe color: violet (#8B5CF6) at low opacity
pub const MESH_COLOR: [f32; 4] = [0.545, 0.361, 0.965, 0.08];
