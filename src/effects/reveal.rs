use std::collections::BTreeMap;
use std::time::Duration;

/// Stagger between consecutive elements.
pub const STAGGER: Duration = Duration::from_millis(100);
pub const FADE: Duration = Duration::from_millis(600);

/// One-shot "animate in" tracking. An element is revealed the first time
/// it becomes visible and never hidden again; its fade starts
/// `index * STAGGER` after that.
#[derive(Debug, Default, Clone)]
pub struct RevealTracker {
    revealed: BTreeMap<usize, Duration>,
    clock: Duration,
}

impl RevealTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&mut self, dt: Duration) {
        self.clock += dt;
    }

    /// Report element `index` as on screen. Returns `true` the first time.
    pub fn observe(&mut self, index: usize) -> bool {
        if self.revealed.contains_key(&index) {
            return false;
        }
        let start = self.clock + STAGGER * index as u32;
        self.revealed.insert(index, start);
        true
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.contains_key(&index)
    }

    /// Opacity in `0.0..=1.0`.
    pub fn opacity(&self, index: usize) -> f32 {
        let Some(start) = self.revealed.get(&index) else {
            return 0.0;
        };
        match self.clock.checked_sub(*start) {
            Some(t) => (t.as_secs_f32() / FADE.as_secs_f32()).min(1.0),
            None => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveal_once_with_stagger() {
        let mut r = RevealTracker::new();
        assert!(r.observe(0));
        assert!(r.observe(3));
        assert!(!r.observe(0));

        r.advance(Duration::from_millis(300));
        assert!((r.opacity(0) - 0.5).abs() < 1e-4);
        assert_eq!(r.opacity(3), 0.0);

        r.advance(Duration::from_millis(600));
        assert_eq!(r.opacity(0), 1.0);
        assert!((r.opacity(3) - 1.0).abs() < 1e-4);
        assert_eq!(r.opacity(7), 0.0);
        assert!(!r.is_revealed(7));
    }
}
