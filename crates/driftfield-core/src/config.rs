//! Simulation tunables.
//!
//! Frontends start from [`SimConfig::default`] and may layer overrides on top
//! (a `window.DRIFTFIELD` object on the web, `DRIFTFIELD_*` variables natively).
//! Override keys use the camelCase names listed in [`SimConfig::KEYS`].

use crate::constants::*;
use crate::error::ConfigError;

#[derive(Clone, Debug, PartialEq)]
pub struct SimConfig {
    pub num_particles: usize,
    pub grid_rows: usize,
    pub grid_cols: usize,
    pub max_angular_velocity: f32,
    pub angular_velocity_noise: f32,
    pub frame_interval: u64,
    pub max_speed: f32,
    pub pointer_radius: f32,
    pub pointer_strength: f32,
    pub pointer_decay: f32,
    pub pointer_grid_rows: usize,
    pub pointer_grid_cols: usize,
    pub bucket_interval_ms: f64,
    pub population_batch: usize,
    pub color_blend: f32,
    pub opacity_power: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_particles: DEFAULT_PARTICLE_COUNT,
            grid_rows: DEFAULT_GRID_ROWS,
            grid_cols: DEFAULT_GRID_COLS,
            max_angular_velocity: MAX_ANGULAR_VELOCITY,
            angular_velocity_noise: ANGULAR_VELOCITY_NOISE,
            frame_interval: FRAME_INTERVAL,
            max_speed: MAX_SPEED,
            pointer_radius: POINTER_RADIUS,
            pointer_strength: POINTER_STRENGTH,
            pointer_decay: POINTER_DECAY,
            pointer_grid_rows: DEFAULT_POINTER_GRID_ROWS,
            pointer_grid_cols: DEFAULT_POINTER_GRID_COLS,
            bucket_interval_ms: BUCKET_INTERVAL_MS,
            population_batch: POPULATION_BATCH,
            color_blend: COLOR_BLEND,
            opacity_power: OPACITY_POWER,
        }
    }
}

impl SimConfig {
    /// Override keys accepted by [`SimConfig::set`].
    pub const KEYS: &'static [&'static str] = &[
        "numParticles",
        "gridRows",
        "gridCols",
        "maxAngularVelocity",
        "angularVelocityChangeFactor",
        "frameInterval",
        "maxVelocity",
        "mouseInfluenceRadius",
        "mouseInfluenceStrength",
        "decayFactor",
        "pointerGridRows",
        "pointerGridCols",
        "bucketIntervalMs",
        "populationBatch",
        "colorBlend",
        "opacityPower",
    ];

    /// Alignment blend coefficient derived from max speed.
    #[inline]
    pub fn alignment_factor(&self) -> f32 {
        let k = ALIGNMENT_K * self.max_speed;
        k * k
    }

    /// Set one field by its override key. Returns `false` for unknown keys.
    ///
    /// Counts are truncated toward zero; validation happens in [`validate`](Self::validate).
    pub fn set(&mut self, key: &str, value: f64) -> bool {
        let count = || if value.is_finite() && value > 0.0 { value as usize } else { 0 };
        match key {
            "numParticles" => self.num_particles = count(),
            "gridRows" => self.grid_rows = count(),
            "gridCols" => self.grid_cols = count(),
            "maxAngularVelocity" => self.max_angular_velocity = value as f32,
            "angularVelocityChangeFactor" => self.angular_velocity_noise = value as f32,
            "frameInterval" => self.frame_interval = count() as u64,
            "maxVelocity" => self.max_speed = value as f32,
            "mouseInfluenceRadius" => self.pointer_radius = value as f32,
            "mouseInfluenceStrength" => self.pointer_strength = value as f32,
            "decayFactor" => self.pointer_decay = value as f32,
            "pointerGridRows" => self.pointer_grid_rows = count(),
            "pointerGridCols" => self.pointer_grid_cols = count(),
            "bucketIntervalMs" => self.bucket_interval_ms = value,
            "populationBatch" => self.population_batch = count(),
            "colorBlend" => self.color_blend = value as f32,
            "opacityPower" => self.opacity_power = value as f32,
            _ => return false,
        }
        true
    }

    /// Apply a set of overrides, falling back to `self` unchanged if the
    /// result does not validate.
    pub fn with_overrides<'k>(
        &self,
        overrides: impl IntoIterator<Item = (&'k str, f64)>,
    ) -> Result<SimConfig, ConfigError> {
        let mut cfg = self.clone();
        for (key, value) in overrides {
            if !cfg.set(key, value) {
                log::warn!("[config] ignoring unknown key {key}");
            }
        }
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_rows == 0 || self.grid_cols == 0 {
            return Err(ConfigError::EmptyGrid {
                name: "direction",
                rows: self.grid_rows,
                cols: self.grid_cols,
            });
        }
        if self.pointer_grid_rows == 0 || self.pointer_grid_cols == 0 {
            return Err(ConfigError::EmptyGrid {
                name: "pointer",
                rows: self.pointer_grid_rows,
                cols: self.pointer_grid_cols,
            });
        }
        grid_within_limit("direction", self.grid_rows, self.grid_cols)?;
        grid_within_limit("pointer", self.pointer_grid_rows, self.pointer_grid_cols)?;
        positive("maxVelocity", self.max_speed as f64)?;
        positive("mouseInfluenceRadius", self.pointer_radius as f64)?;
        positive("bucketIntervalMs", self.bucket_interval_ms)?;
        positive("opacityPower", self.opacity_power as f64)?;
        non_negative("maxAngularVelocity", self.max_angular_velocity as f64)?;
        non_negative("angularVelocityChangeFactor", self.angular_velocity_noise as f64)?;
        non_negative("mouseInfluenceStrength", self.pointer_strength as f64)?;
        unit_open("decayFactor", self.pointer_decay as f64)?;
        unit_open("colorBlend", self.color_blend as f64)?;
        if self.frame_interval == 0 {
            return Err(ConfigError::ZeroFrameInterval);
        }
        if self.population_batch == 0 {
            return Err(ConfigError::ZeroBatch);
        }
        Ok(())
    }
}

fn grid_within_limit(name: &'static str, rows: usize, cols: usize) -> Result<(), ConfigError> {
    if rows <= MAX_GRID_DIM && cols <= MAX_GRID_DIM {
        Ok(())
    } else {
        Err(ConfigError::GridTooLarge {
            name,
            rows,
            cols,
            max: MAX_GRID_DIM,
        })
    }
}

fn positive(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { name, value })
    }
}

fn non_negative(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { name, value })
    }
}

fn unit_open(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value > 0.0 && value < 1.0 {
        Ok(())
    } else {
        Err(ConfigError::OutOfUnitRange { name, value })
    }
}
