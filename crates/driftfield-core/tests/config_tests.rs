// Overrides as the frontends feed them.

use driftfield_core::{ConfigError, SimConfig};

#[test]
fn overrides_apply_camel_case_keys() {
    let cfg = SimConfig::default()
        .with_overrides([
            ("numParticles", 2_500.0),
            ("pointerGridRows", 12.0),
            ("pointerGridCols", 16.0),
            ("maxVelocity", 3.0),
        ])
        .expect("valid overrides");
    assert_eq!(cfg.num_particles, 2_500);
    assert_eq!((cfg.pointer_grid_rows, cfg.pointer_grid_cols), (12, 16));
    assert_eq!(cfg.max_speed, 3.0);
    // untouched keys keep their defaults
    assert_eq!(cfg.grid_rows, SimConfig::default().grid_rows);
}

#[test]
fn unknown_keys_are_skipped() {
    let cfg = SimConfig::default()
        .with_overrides([("sparkle", 1.0), ("gridRows", 4.0)])
        .expect("unknown keys are not fatal");
    assert_eq!(cfg.grid_rows, 4);
}

#[test]
fn bad_values_surface_typed_errors() {
    let base = SimConfig::default();
    assert!(matches!(
        base.with_overrides([("maxVelocity", -1.0)]),
        Err(ConfigError::NonPositive { name: "maxVelocity", .. })
    ));
    assert!(matches!(
        base.with_overrides([("gridCols", 0.0)]),
        Err(ConfigError::EmptyGrid { name: "direction", .. })
    ));
    assert!(matches!(
        base.with_overrides([("frameInterval", 0.0)]),
        Err(ConfigError::ZeroFrameInterval)
    ));
    assert!(matches!(
        base.with_overrides([("populationBatch", f64::NAN)]),
        Err(ConfigError::ZeroBatch)
    ));
}

#[test]
fn errors_render_readably() {
    let err = SimConfig::default()
        .with_overrides([("colorBlend", 2.0)])
        .unwrap_err();
    let text = err.to_string();
    assert!(text.contains("colorBlend"), "{text}");
}

#[test]
fn oversized_grids_are_rejected() {
    let err = SimConfig::default()
        .with_overrides([("pointerGridCols", 1e9)])
        .unwrap_err();
    assert!(matches!(
        err,
        ConfigError::GridTooLarge { name: "pointer", cols: 1_000_000_000, .. }
    ));
}
