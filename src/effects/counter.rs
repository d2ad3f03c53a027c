/// Counts a stat label such as `"50+"` up from zero in a fixed number of
/// frames. The suffix is kept throughout and the final frame shows the
/// original label exactly.
#[derive(Debug, Clone)]
pub struct CounterAnimation {
    label: &'static str,
    target: u64,
    suffix: String,
    steps: u32,
    step: u32,
}

impl CounterAnimation {
    pub fn new(label: &'static str, steps: u32) -> Self {
        let digits: String = label.chars().filter(char::is_ascii_digit).collect();
        let target = digits.parse().unwrap_or(0);
        let suffix = label
            .trim_start_matches(|c: char| c.is_ascii_digit() || c.is_whitespace())
            .to_string();
        Self {
            label,
            target,
            suffix,
            steps: steps.max(1),
            step: 0,
        }
    }

    pub fn target(&self) -> u64 {
        self.target
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// One frame. Returns `false` once finished.
    pub fn tick(&mut self) -> bool {
        if self.is_done() {
            return false;
        }
        self.step += 1;
        true
    }

    pub fn is_done(&self) -> bool {
        self.step >= self.steps
    }

    pub fn current(&self) -> u64 {
        let n = self.target * u64::from(self.step);
        n.div_ceil(u64::from(self.steps))
    }

    pub fn text(&self) -> String {
        if self.is_done() {
            self.label.to_string()
        } else {
            format!("{}{}", self.current(), self.suffix)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_target_and_suffix() {
        let c = CounterAnimation::new("100%", 50);
        assert_eq!(c.target(), 100);
        assert_eq!(c.suffix(), "%");
        assert_eq!(c.text(), "0%");

        let c = CounterAnimation::new("Free", 50);
        assert_eq!(c.target(), 0);
        assert_eq!(c.suffix(), "Free");
    }

    #[test]
    fn ends_on_label() {
        let mut c = CounterAnimation::new("50+", 50);
        let mut frames = 0;
        while c.tick() {
            frames += 1;
            assert!(c.current() <= 50);
        }
        assert_eq!(frames, 50);
        assert_eq!(c.text(), "50+");
        assert!(!c.tick());
    }

    #[test]
    fn rounds_up_like_a_ceiling() {
        let mut c = CounterAnimation::new("3+", 50);
        c.tick();
        assert_eq!(c.text(), "1+");
    }
}
