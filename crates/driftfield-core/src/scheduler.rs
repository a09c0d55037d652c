//! Start/stop bookkeeping for a display-refresh driven loop.
//!
//! The loop host owns the actual callback. This only decides whether one more
//! frame should be requested, so that stop is honored at the end of the
//! in-flight frame and start never double-arms.

#[derive(Clone, Copy, Debug)]
pub struct Scheduler {
    enabled: bool,
    hidden: bool,
    armed: bool,
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler {
    pub fn new() -> Self {
        Self {
            enabled: true,
            hidden: false,
            armed: false,
        }
    }

    /// User start. Returns true when the caller must request a frame.
    pub fn start(&mut self) -> bool {
        self.enabled = true;
        self.arm()
    }

    /// User stop. The frame in flight still completes.
    pub fn stop(&mut self) {
        self.enabled = false;
    }

    /// Returns true when the caller must request a frame.
    pub fn toggle(&mut self) -> bool {
        if self.enabled {
            self.stop();
            false
        } else {
            self.start()
        }
    }

    /// Page visibility. Hiding pauses without touching the user's choice;
    /// showing resumes only if the user had not stopped the loop.
    pub fn set_hidden(&mut self, hidden: bool) -> bool {
        self.hidden = hidden;
        if hidden {
            false
        } else {
            self.arm()
        }
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.enabled && !self.hidden
    }

    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    #[inline]
    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Called at the end of every frame callback; true to request the next.
    pub fn end_of_frame(&mut self) -> bool {
        if self.is_running() {
            true
        } else {
            self.armed = false;
            false
        }
    }

    fn arm(&mut self) -> bool {
        if self.is_running() && !self.armed {
            self.armed = true;
            true
        } else {
            false
        }
    }
}
