//! Keyboard shortcuts shared by the web page and the native window.

use crate::sim::Simulation;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    FlowMode,
    BlueFlowMode,
    StraightMode,
    RotateMode,
    WaveMode,
    Grow,
    Shrink,
    ToggleAnimation,
    TogglePointerPass,
}

/// Map a DOM-style `key` string to an action.
#[inline]
pub fn action_for_key(key: &str) -> Option<Action> {
    match key {
        "1" => Some(Action::FlowMode),
        "2" => Some(Action::BlueFlowMode),
        "3" => Some(Action::StraightMode),
        "4" => Some(Action::RotateMode),
        "5" => Some(Action::WaveMode),
        "+" | "=" => Some(Action::Grow),
        "-" | "_" => Some(Action::Shrink),
        " " | "Space" => Some(Action::ToggleAnimation),
        "b" | "B" => Some(Action::TogglePointerPass),
        _ => None,
    }
}

impl Action {
    /// Whether the action changes the population and so the count readout.
    #[inline]
    pub fn changes_population(self) -> bool {
        matches!(self, Action::Grow | Action::Shrink)
    }
}

/// Apply everything except animation toggling, which belongs to the loop
/// host. Returns `false` for actions left to the caller.
pub fn apply_to_sim(sim: &mut Simulation, action: Action) -> bool {
    match action {
        Action::FlowMode => sim.set_flow_mode(),
        Action::BlueFlowMode => sim.set_blue_flow_mode(),
        Action::StraightMode => sim.set_straight_mode(),
        Action::RotateMode => sim.set_rotate_mode(),
        Action::WaveMode => sim.set_wave_mode(),
        Action::Grow => {
            sim.grow();
        }
        Action::Shrink => {
            sim.shrink();
        }
        Action::TogglePointerPass => {
            sim.toggle_pointer_pass();
        }
        Action::ToggleAnimation => return false,
    }
    true
}
