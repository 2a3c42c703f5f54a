// Shared scene/interaction tuning constants used by both frontends.

// Orbital motion
pub const ORBIT_RATE: f32 = 0.1; // orbit advance per second = speed * ORBIT_RATE
pub const PLANET_SPIN_RATE: f32 = 2.0; // radians per second of self-rotation
pub const SUN_SPIN_RATE: f32 = 0.5;

// Camera
pub const CAMERA_FOV_Y: f32 = 1.308_997; // 75 degrees
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 10_000.0;
pub const CAMERA_MIN_DISTANCE: f32 = 20.0;
pub const CAMERA_MAX_DISTANCE: f32 = 200.0;
pub const CAMERA_DEFAULT_DISTANCE: f32 = 80.0;
pub const CAMERA_DEFAULT_YAW: f32 = std::f32::consts::FRAC_PI_2;
pub const CAMERA_DEFAULT_PITCH: f32 = 0.384_397; // asin(30 / 80)
pub const PITCH_LIMIT: f32 = std::f32::consts::FRAC_PI_2;
pub const DRAG_SENSITIVITY: f32 = 0.01; // radians per pixel of pointer motion
pub const ZOOM_SENSITIVITY: f32 = 0.1; // world units per wheel delta unit

// Speed sliders
pub const SPEED_MIN: f32 = 0.0;
pub const SPEED_MAX: f32 = 10.0;
pub const SPEED_STEP: f32 = 0.1;

// Starfield
pub const STAR_COUNT: usize = 10_000;
pub const STAR_FIELD_EXTENT: f32 = 1_000.0; // stars fill [-extent, extent]^3
pub const STAR_SIZE_PX: f32 = 2.0;
pub const STAR_OPACITY_DARK: f32 = 1.0;
pub const STAR_OPACITY_LIGHT: f32 = 0.9;
pub const STAR_SEED: u64 = 0x5741_52F1_E1D5;

// Procedural surface textures
pub const TEXTURE_WIDTH: u32 = 512;
pub const TEXTURE_HEIGHT: u32 = 256;
pub const BLOTCH_COUNT: usize = 50;
pub const TEXTURE_SEED: u64 = 0x0B0D_1E5;

// Saturn's ring
pub const RING_INNER_RADIUS: f32 = 2.5;
pub const RING_OUTER_RADIUS: f32 = 4.0;
pub const RING_SEGMENTS: u32 = 32;
pub const RING_COLOR: u32 = 0xaaaaaa;
pub const RING_OPACITY: f32 = 0.7;

// Sphere tessellation
pub const SPHERE_STACKS: u32 = 32;
pub const SPHERE_SLICES: u32 = 32;

// Renderer clear colors per theme (r, g, b)
pub const CLEAR_DARK: [f64; 3] = [0.0, 0.0, 0.0];
pub const CLEAR_LIGHT: [f64; 3] = [0.529, 0.808, 0.922]; // sky blue

// Ambient floor applied under the lambert term
pub const AMBIENT_LIGHT: f32 = 0.15;
