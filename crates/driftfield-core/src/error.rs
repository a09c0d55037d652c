use thiserror::Error;

/// Rejected [`SimConfig`](crate::SimConfig) values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{name} grid needs at least one row and column (got {rows}x{cols})")]
    EmptyGrid {
        name: &'static str,
        rows: usize,
        cols: usize,
    },
    #[error("{name} grid is limited to {max}x{max} (got {rows}x{cols})")]
    GridTooLarge {
        name: &'static str,
        rows: usize,
        cols: usize,
        max: usize,
    },
    #[error("{name} must be finite and positive (got {value})")]
    NonPositive { name: &'static str, value: f64 },
    #[error("{name} must lie in the open interval (0, 1) (got {value})")]
    OutOfUnitRange { name: &'static str, value: f64 },
    #[error("frame interval must be at least 1")]
    ZeroFrameInterval,
    #[error("population batch must be at least 1")]
    ZeroBatch,
}
