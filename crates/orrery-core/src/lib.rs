pub mod bodies;
pub mod camera;
pub mod constants;
pub mod mesh;
pub mod picking;
pub mod sim;
pub mod starfield;
pub mod texture;

pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");
pub static STARS_WGSL: &str = include_str!("../shaders/stars.wgsl");

pub use bodies::*;
pub use camera::*;
pub use constants::*;
pub use picking::*;
pub use sim::*;
