//! Decorative effects.
//!
//! None of these touch view state. Each is a small clock-driven state
//! machine advanced by the front-end's frame loop; the loop itself runs
//! only while its [`ListenerHandle`] is attached.

pub mod counter;
pub mod particles;
pub mod reveal;
pub mod typing;

pub use counter::CounterAnimation;
pub use particles::{Link, Particle, ParticleSystem};
pub use reveal::RevealTracker;
pub use typing::{RoleRotation, TypingAnimation};

use std::time::{Duration, Instant};

use crate::bindings::ListenerHandle;

/// Repeating frame callback bound to a listener handle.
#[derive(Debug)]
pub struct FrameLoop {
    handle: ListenerHandle,
    started: Instant,
    last: Instant,
    frames: u64,
}

impl FrameLoop {
    pub fn new(handle: ListenerHandle, now: Instant) -> Self {
        Self {
            handle,
            started: now,
            last: now,
            frames: 0,
        }
    }

    /// Advance one frame. `None` once the handle has been detached, in
    /// which case the caller must stop scheduling frames.
    pub fn tick(&mut self, now: Instant) -> Option<Duration> {
        if !self.handle.is_active() {
            return None;
        }
        let dt = now.saturating_duration_since(self.last);
        self.last = now;
        self.frames += 1;
        Some(dt)
    }

    pub fn is_running(&self) -> bool {
        self.handle.is_active()
    }

    pub fn stop(&self) {
        self.handle.detach();
    }

    /// Time since the loop started.
    pub fn elapsed(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.started)
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}
