// Keyboard shortcut mapping.

use driftfield_core::{action_for_key, Action};

#[test]
fn digits_select_modes() {
    assert_eq!(action_for_key("1"), Some(Action::FlowMode));
    assert_eq!(action_for_key("2"), Some(Action::BlueFlowMode));
    assert_eq!(action_for_key("3"), Some(Action::StraightMode));
    assert_eq!(action_for_key("4"), Some(Action::RotateMode));
    assert_eq!(action_for_key("5"), Some(Action::WaveMode));
    assert_eq!(action_for_key("6"), None);
}

#[test]
fn population_keys_accept_shifted_and_unshifted() {
    for key in ["+", "="] {
        assert_eq!(action_for_key(key), Some(Action::Grow));
    }
    for key in ["-", "_"] {
        assert_eq!(action_for_key(key), Some(Action::Shrink));
    }
    assert!(Action::Grow.changes_population());
    assert!(Action::Shrink.changes_population());
    assert!(!Action::WaveMode.changes_population());
}

#[test]
fn space_and_b_toggle() {
    assert_eq!(action_for_key(" "), Some(Action::ToggleAnimation));
    assert_eq!(action_for_key("b"), Some(Action::TogglePointerPass));
    assert_eq!(action_for_key("B"), Some(Action::TogglePointerPass));
}

#[test]
fn unknown_keys_are_ignored() {
    for key in ["", "a", "Enter", "Escape", "ArrowUp", "11"] {
        assert_eq!(action_for_key(key), None, "{key:?}");
    }
}

#[test]
fn actions_drive_the_simulation() {
    use driftfield_core::{apply_to_sim, Mode, PointerPass, SimConfig, Simulation};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    let config = SimConfig {
        num_particles: 20_000,
        ..SimConfig::default()
    };
    let mut sim = Simulation::with_rng(config, 640.0, 480.0, StdRng::seed_from_u64(1));

    assert!(apply_to_sim(&mut sim, Action::RotateMode));
    assert_eq!(sim.mode(), Mode::Rotate);
    assert!(apply_to_sim(&mut sim, Action::BlueFlowMode));
    assert_eq!(sim.mode(), Mode::BlueFlow);

    assert!(apply_to_sim(&mut sim, Action::Grow));
    assert_eq!(sim.particle_count(), 30_000);
    assert!(apply_to_sim(&mut sim, Action::Shrink));
    assert_eq!(sim.particle_count(), 20_000);

    assert!(apply_to_sim(&mut sim, Action::TogglePointerPass));
    assert_eq!(sim.pointer_pass(), PointerPass::BruteForce);

    assert!(!apply_to_sim(&mut sim, Action::ToggleAnimation));
}
