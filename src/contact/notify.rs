use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Info,
}

impl NotificationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
            NotificationKind::Info => "info",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            NotificationKind::Success => "fas fa-check-circle",
            NotificationKind::Error => "fas fa-exclamation-circle",
            NotificationKind::Info => "fas fa-info-circle",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
    pub shown_at: Instant,
}

/// At most one visible notification. A new one replaces the old; each
/// expires after `ttl` or when dismissed.
#[derive(Debug)]
pub struct NotificationCenter {
    current: Option<Notification>,
    ttl: Duration,
}

impl NotificationCenter {
    pub fn new(ttl: Duration) -> Self {
        Self { current: None, ttl }
    }

    pub fn show(&mut self, kind: NotificationKind, message: impl Into<String>, now: Instant) {
        let message = message.into();
        log::debug!("notification [{}] {}", kind.as_str(), message);
        self.current = Some(Notification {
            kind,
            message,
            shown_at: now,
        });
    }

    pub fn success(&mut self, message: impl Into<String>, now: Instant) {
        self.show(NotificationKind::Success, message, now);
    }

    pub fn error(&mut self, message: impl Into<String>, now: Instant) {
        self.show(NotificationKind::Error, message, now);
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }

    /// Drop the notification once its time is up. Returns `true` if one
    /// was removed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let expired = self
            .current
            .as_ref()
            .is_some_and(|n| now.saturating_duration_since(n.shown_at) >= self.ttl);
        if expired {
            self.current = None;
        }
        expired
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    /// Time left on the visible notification.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.current
            .as_ref()
            .map(|n| self.ttl.saturating_sub(now.saturating_duration_since(n.shown_at)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newest_replaces_previous() {
        let t0 = Instant::now();
        let mut center = NotificationCenter::new(Duration::from_secs(5));
        center.error("first", t0);
        center.success("second", t0);
        let n = center.current().unwrap();
        assert_eq!(n.message, "second");
        assert_eq!(n.kind, NotificationKind::Success);
    }

    #[test]
    fn expires_after_ttl() {
        let t0 = Instant::now();
        let mut center = NotificationCenter::new(Duration::from_millis(5000));
        center.error("Please fill in: name", t0);

        assert!(!center.tick(t0 + Duration::from_millis(4999)));
        assert_eq!(center.remaining(t0 + Duration::from_millis(4000)), Some(Duration::from_millis(1000)));
        assert!(center.tick(t0 + Duration::from_millis(5000)));
        assert!(center.current().is_none());
        assert!(!center.tick(t0 + Duration::from_secs(60)));
    }

    #[test]
    fn dismiss_clears() {
        let mut center = NotificationCenter::new(Duration::from_secs(5));
        center.show(NotificationKind::Info, "hi", Instant::now());
        center.dismiss();
        assert!(center.current().is_none());
    }
}
