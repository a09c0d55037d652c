pub mod bucket;
pub mod color;
pub mod config;
pub mod constants;
pub mod controls;
pub mod error;
pub mod field;
pub mod grid;
pub mod mode;
pub mod pointer;
pub mod pool;
pub mod render;
pub mod scheduler;
pub mod sim;

pub static PARTICLES_WGSL: &str = include_str!("../shaders/particles.wgsl");

pub use bucket::SpatialBuckets;
pub use color::{ColorState, Gradient, Rgb};
pub use config::SimConfig;
pub use controls::{action_for_key, apply_to_sim, Action};
pub use error::ConfigError;
pub use field::DirectionField;
pub use grid::GridGeometry;
pub use mode::Mode;
pub use pointer::{PointerPhase, PointerTracker};
pub use pool::ParticlePool;
pub use render::GpuState;
pub use scheduler::Scheduler;
pub use sim::{PointerPass, Simulation, StepReport};
