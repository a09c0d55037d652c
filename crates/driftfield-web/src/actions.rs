use crate::dom;
use crate::frame::FrameLoop;
use driftfield_core::{apply_to_sim, Action};

/// Run one control action against the live page state.
pub fn apply(frame_loop: &FrameLoop, action: Action) {
    let count = {
        let mut c = frame_loop.ctx.borrow_mut();
        if !apply_to_sim(&mut c.sim, action) {
            None
        } else {
            Some(c.sim.particle_count())
        }
    };
    match count {
        Some(n) if action.changes_population() => dom::show_particle_count(n),
        Some(_) => {}
        None => frame_loop.toggle(),
    }
}
