// Direction field presets and advection.

use driftfield_core::{DirectionField, GridGeometry, Mode};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::f32::consts::TAU;

const MAX_SPEED: f32 = 5.0;

fn magnitude(t: [f32; 2]) -> f32 {
    (t[0] * t[0] + t[1] * t[1]).sqrt()
}

#[test]
fn initialize_targets_have_full_speed() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut field = DirectionField::new(10, 10);
    field.initialize(MAX_SPEED, 0.02, &mut rng);
    for i in 0..field.cell_count() {
        assert!((magnitude(field.target(i)) - MAX_SPEED).abs() < 1e-4);
        assert!((0.0..TAU).contains(&field.angle(i)));
        assert!(field.angular_velocity(i).abs() <= 0.02);
    }
}

#[test]
fn advection_keeps_speed_angle_range_and_spin_bound() {
    let mut rng = StdRng::seed_from_u64(2);
    let mut field = DirectionField::new(6, 8);
    field.initialize(MAX_SPEED, 0.02, &mut rng);
    let before: Vec<f32> = (0..field.cell_count()).map(|i| field.angle(i)).collect();
    for _ in 0..500 {
        field.advect(MAX_SPEED, 0.02, 0.001, &mut rng);
    }
    let mut moved = 0;
    for (i, angle) in before.iter().enumerate() {
        assert!((magnitude(field.target(i)) - MAX_SPEED).abs() < 1e-4);
        assert!((0.0..TAU).contains(&field.angle(i)));
        assert!(field.angular_velocity(i).abs() <= 0.02 + 1e-7);
        if (field.angle(i) - angle).abs() > 1e-3 {
            moved += 1;
        }
    }
    assert!(moved > 0);
}

#[test]
fn zero_spin_limit_freezes_the_field() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut field = DirectionField::new(3, 3);
    field.initialize(MAX_SPEED, 0.0, &mut rng);
    let before = field.target(4);
    field.advect(MAX_SPEED, 0.0, 0.001, &mut rng);
    assert_eq!(field.angular_velocity(4), 0.0);
    assert!((field.target(4)[0] - before[0]).abs() < 1e-5);
}

#[test]
fn straight_preset_points_left_everywhere() {
    let mut rng = StdRng::seed_from_u64(4);
    let geom = GridGeometry::new(10, 10, 800.0, 600.0);
    let mut field = DirectionField::new(10, 10);
    Mode::Straight.shape_field(&mut field, &geom, [800.0, 600.0], MAX_SPEED, 0.02, &mut rng);
    for i in 0..field.cell_count() {
        assert_eq!(field.target(i), [-MAX_SPEED, 0.0]);
        assert_eq!(field.angular_velocity(i), 0.0);
    }
}

#[test]
fn rotation_is_tangent_with_full_speed() {
    let mut rng = StdRng::seed_from_u64(5);
    let (w, h) = (800.0, 600.0);
    let geom = GridGeometry::new(10, 10, w, h);
    let mut field = DirectionField::new(10, 10);
    Mode::Rotate.shape_field(&mut field, &geom, [w, h], MAX_SPEED, 0.02, &mut rng);
    for row in 0..10 {
        for col in 0..10 {
            let t = field.target(row * 10 + col);
            assert!((magnitude(t) - MAX_SPEED).abs() < 1e-4);
            let (x, y) = geom.cell_center(col, row);
            let radial = [x - w * 0.5, y - h * 0.5];
            let dot = radial[0] * t[0] + radial[1] * t[1];
            assert!(dot.abs() < 1e-2, "cell ({col}, {row}) not tangent");
        }
    }
}

#[test]
fn wave_rows_share_a_phase_and_stretch_vertically() {
    let mut rng = StdRng::seed_from_u64(6);
    let geom = GridGeometry::new(10, 10, 1000.0, 500.0);
    let mut field = DirectionField::new(10, 10);
    let mode = Mode::Wave { phase_seed: 77 };
    mode.shape_field(&mut field, &geom, [1000.0, 500.0], MAX_SPEED, 0.02, &mut rng);

    let phases = Mode::wave_phases(77, 10);
    assert!(phases.iter().all(|p| (0.0..std::f32::consts::PI).contains(p)));
    let frequency = 3.0 * TAU / 1000.0;
    for row in 0..10 {
        for col in 0..10 {
            let (x, _) = geom.cell_center(col, row);
            let angle = (frequency * x + phases[row]).sin();
            let t = field.target(row * 10 + col);
            assert!((t[0] - angle.cos() * MAX_SPEED).abs() < 1e-4);
            assert!((t[1] - angle.sin() * MAX_SPEED * 1.5).abs() < 1e-4);
            assert!(magnitude(t) >= MAX_SPEED - 1e-4);
        }
    }
}

#[test]
fn wave_phases_are_reproducible_per_seed() {
    assert_eq!(Mode::wave_phases(5, 12), Mode::wave_phases(5, 12));
    assert_ne!(Mode::wave_phases(5, 12), Mode::wave_phases(6, 12));
}
