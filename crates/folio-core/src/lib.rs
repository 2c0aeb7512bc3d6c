pub mod constants;
pub mod mesh;
pub mod site;
pub mod state;
pub static HERO_WGSL: &str = include_str!("../shaders/hero.wgsl");

pub use constants::*;
pub use mesh::*;
pub use site::*;
pub use state::*;
