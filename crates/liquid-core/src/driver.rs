//! Step cadence for one button.
//!
//! The host owns the actual timer (requestAnimationFrame in the browser) and
//! calls [`Driver::step`] once per scheduled callback. The driver only keeps
//! the lifecycle state: a stopped driver refuses to step, so a callback that
//! was already queued when the button was torn down does nothing.

use crate::compositor::{Compositor, Frame};
use crate::contact::SharedContacts;

/// Receives each finished frame.
pub trait FrameSink {
    fn present(&mut self, frame: &Frame);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DriverState {
    Idle,
    Running,
    Stopped,
}

pub struct Driver {
    compositor: Compositor,
    contacts: SharedContacts,
    state: DriverState,
    frames: u64,
}

impl Driver {
    pub fn new(compositor: Compositor, contacts: SharedContacts) -> Self {
        Self {
            compositor,
            contacts,
            state: DriverState::Idle,
            frames: 0,
        }
    }

    /// `Idle -> Running`. Returns whether the driver is now running; a
    /// stopped driver cannot be restarted.
    pub fn start(&mut self) -> bool {
        if self.state == DriverState::Idle {
            self.state = DriverState::Running;
            log::debug!("[driver] running");
        }
        self.state == DriverState::Running
    }

    /// Integrate, smooth and present one frame. Returns whether the host
    /// should schedule another step.
    pub fn step<S: FrameSink + ?Sized>(&mut self, sink: &mut S) -> bool {
        if self.state != DriverState::Running {
            return false;
        }
        let contacts = self.contacts.snapshot();
        self.compositor.integrate(&contacts);
        self.compositor.smooth();
        let frame = self.compositor.frame(&contacts);
        sink.present(&frame);
        self.frames += 1;
        true
    }

    /// Stop for good. Safe to call in any state, any number of times.
    pub fn stop(&mut self) {
        if self.state != DriverState::Stopped {
            log::debug!("[driver] stopped after {} frames", self.frames);
            self.state = DriverState::Stopped;
        }
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn contacts(&self) -> &SharedContacts {
        &self.contacts
    }

    pub fn compositor(&self) -> &Compositor {
        &self.compositor
    }

    pub fn compositor_mut(&mut self) -> &mut Compositor {
        &mut self.compositor
    }
}

impl<F: FnMut(&Frame)> FrameSink for F {
    fn present(&mut self, frame: &Frame) {
        self(frame)
    }
}
