use driftfield_core::SimConfig;

const PREFIX: &str = "DRIFTFIELD_";

/// `numParticles` -> `DRIFTFIELD_NUM_PARTICLES`.
pub fn env_name(key: &str) -> String {
    let mut out = String::from(PREFIX);
    for ch in key.chars() {
        if ch.is_ascii_uppercase() {
            out.push('_');
        }
        out.push(ch.to_ascii_uppercase());
    }
    out
}

/// Defaults merged with any `DRIFTFIELD_*` variables `lookup` yields.
pub fn load(lookup: impl Fn(&str) -> Option<String>) -> SimConfig {
    let defaults = SimConfig::default();
    let mut overrides = Vec::new();
    for key in SimConfig::KEYS {
        let name = env_name(key);
        let Some(raw) = lookup(&name) else {
            continue;
        };
        match raw.trim().parse::<f64>() {
            Ok(v) => overrides.push((*key, v)),
            Err(_) => log::warn!("[config] {name}={raw:?} is not a number; ignored"),
        }
    }
    if overrides.is_empty() {
        return defaults;
    }
    let n = overrides.len();
    match defaults.with_overrides(overrides) {
        Ok(cfg) => {
            log::info!("[config] applied {n} override(s)");
            cfg
        }
        Err(e) => {
            log::warn!("[config] {e}; using defaults");
            defaults
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn camel_case_keys_become_screaming_snake() {
        assert_eq!(env_name("numParticles"), "DRIFTFIELD_NUM_PARTICLES");
        assert_eq!(env_name("maxVelocity"), "DRIFTFIELD_MAX_VELOCITY");
        assert_eq!(env_name("decayFactor"), "DRIFTFIELD_DECAY_FACTOR");
    }

    #[test]
    fn numeric_variables_override_defaults() {
        let cfg = load(|name| match name {
            "DRIFTFIELD_NUM_PARTICLES" => Some("2500".into()),
            "DRIFTFIELD_MAX_VELOCITY" => Some(" 3.5 ".into()),
            "DRIFTFIELD_DECAY_FACTOR" => Some("fast".into()),
            _ => None,
        });
        assert_eq!(cfg.num_particles, 2500);
        assert_eq!(cfg.max_speed, 3.5);
        assert_eq!(cfg.pointer_decay, SimConfig::default().pointer_decay);
    }

    #[test]
    fn invalid_set_falls_back_to_defaults() {
        let cfg = load(|name| (name == "DRIFTFIELD_GRID_ROWS").then(|| "0".to_string()));
        assert_eq!(cfg.grid_rows, SimConfig::default().grid_rows);
    }
}
