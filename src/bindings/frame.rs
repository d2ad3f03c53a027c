/// Coalesces scroll samples so scroll-dependent work runs at most once
/// per animation frame, on the latest position.
#[derive(Debug, Default, Clone)]
pub struct FrameThrottle {
    pending: Option<f32>,
    dropped: u64,
}

impl FrameThrottle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a sample. Replaces any sample not yet taken.
    pub fn push(&mut self, scroll_y: f32) {
        if self.pending.replace(scroll_y).is_some() {
            self.dropped += 1;
        }
    }

    /// Release the latest sample at a frame boundary.
    pub fn take(&mut self) -> Option<f32> {
        self.pending.take()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Samples superseded before a frame consumed them.
    pub fn dropped(&self) -> u64 {
        self.dropped
    }
}
