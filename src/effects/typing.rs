use std::time::Duration;

/// Linear character reveal that starts after a delay and runs once.
#[derive(Debug, Clone)]
pub struct TypingAnimation {
    text: &'static str,
    interval: Duration,
    delay: Duration,
    elapsed: Duration,
}

impl TypingAnimation {
    pub fn new(text: &'static str, interval: Duration, delay: Duration) -> Self {
        Self {
            text,
            interval,
            delay,
            elapsed: Duration::ZERO,
        }
    }

    pub fn advance(&mut self, dt: Duration) {
        if !self.is_done() {
            self.elapsed += dt;
        }
    }

    /// Characters revealed so far.
    pub fn shown_chars(&self) -> usize {
        let total = self.text.chars().count();
        let Some(typing) = self.elapsed.checked_sub(self.delay) else {
            return 0;
        };
        if self.interval.is_zero() {
            return total;
        }
        // First character appears as soon as the delay expires.
        let n = (typing.as_millis() / self.interval.as_millis()) as usize + 1;
        n.min(total)
    }

    pub fn visible(&self) -> &'static str {
        let n = self.shown_chars();
        match self.text.char_indices().nth(n) {
            Some((end, _)) => &self.text[..end],
            None => self.text,
        }
    }

    pub fn is_done(&self) -> bool {
        self.shown_chars() == self.text.chars().count()
    }
}

/// Cycles through hero roles, one step per period.
#[derive(Debug, Clone)]
pub struct RoleRotation {
    roles: &'static [&'static str],
    period: Duration,
    elapsed: Duration,
}

impl RoleRotation {
    pub fn new(roles: &'static [&'static str], period: Duration) -> Self {
        Self {
            roles,
            period,
            elapsed: Duration::ZERO,
        }
    }

    pub fn advance(&mut self, dt: Duration) {
        self.elapsed += dt;
    }

    pub fn active_index(&self) -> usize {
        if self.roles.is_empty() || self.period.is_zero() {
            return 0;
        }
        let steps = self.elapsed.as_millis() / self.period.as_millis();
        (steps % self.roles.len() as u128) as usize
    }

    pub fn active(&self) -> Option<&'static str> {
        self.roles.get(self.active_index()).copied()
    }
}
