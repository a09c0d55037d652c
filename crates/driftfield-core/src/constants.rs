// Default tuning for the particle field shared by the web and native frontends.

// Population
pub const DEFAULT_PARTICLE_COUNT: usize = 100_000;
pub const POPULATION_BATCH: usize = 10_000; // grow/shrink step

// Direction field grid
pub const DEFAULT_GRID_ROWS: usize = 10;
pub const DEFAULT_GRID_COLS: usize = 10;

// Flow field motion
pub const MAX_ANGULAR_VELOCITY: f32 = 0.02; // radians per advection
pub const ANGULAR_VELOCITY_NOISE: f32 = 0.001;
pub const FRAME_INTERVAL: u64 = 10; // frames between advections
pub const MAX_SPEED: f32 = 5.0; // canvas px per frame

// Alignment: (k * max_speed)^2
pub const ALIGNMENT_K: f32 = 0.028;

// Pointer influence
pub const POINTER_RADIUS: f32 = 100.0;
pub const POINTER_STRENGTH: f32 = 0.11;
pub const POINTER_DECAY: f32 = 0.9; // per frame once the pointer rests
pub const POINTER_GRACE_MS: f64 = 10.0;
pub const POINTER_SAMPLE_MIN_MS: f64 = 8.0; // ~125 Hz
pub const POINTER_REST_EPSILON_SQ: f32 = 1e-4;
pub const POINTER_KICK_CEILING: f32 = 1.2; // relaxed |v|^2 ceiling multiplier

// Trail length (points); shorter at very large counts to cut segment tests
pub const TRAIL_LEN: usize = 5;
pub const TRAIL_LEN_DENSE: usize = 3;
pub const TRAIL_DENSE_THRESHOLD: usize = 200_000;

// Pointer bucketing grid, independent of the direction grid
pub const DEFAULT_POINTER_GRID_ROWS: usize = 25;
pub const DEFAULT_POINTER_GRID_COLS: usize = 40;
pub const BUCKET_INTERVAL_MS: f64 = 50.0; // 20 Hz

// Upper bound on rows or cols of either grid
pub const MAX_GRID_DIM: usize = 1024;

// Color easing
pub const COLOR_BLEND: f32 = 0.05;
pub const OPACITY_POWER: f32 = 1.0;

// Renderer
pub const MAX_GRADIENT_STOPS: usize = 16;
pub const FLOATS_PER_PARTICLE: usize = 4;
