use super::color::Rgba;

/// Overall completion as a whole percentage in `0..=100`.
/// An empty catalog is 0%.
pub fn percent(completed: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let p = (100.0 * completed as f64 / total as f64).round();
    p.clamp(0.0, 100.0) as u8
}

/// Filled arc of the progress ring, in degrees.
#[inline]
pub fn ring_degrees(percent: u8) -> f32 {
    // Tenths of a degree keep the CSS value free of float noise.
    (percent.min(100) as u32 * 36) as f32 / 10.0
}

/// CSS background for the progress ring.
pub fn conic_gradient(percent: u8) -> String {
    let deg = ring_degrees(percent);
    format!(
        "conic-gradient({} 0deg {}deg, {} {}deg 360deg)",
        Rgba::ACCENT.to_hex(),
        deg,
        Rgba::TRACK.to_hex(),
        deg
    )
}

/// `done / total` label for a phase header.
pub fn phase_label(done: usize, total: usize) -> String {
    format!("{} / {}", done, total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_rounds() {
        assert_eq!(percent(0, 18), 0);
        assert_eq!(percent(1, 3), 33);
        assert_eq!(percent(2, 3), 67);
        assert_eq!(percent(1, 200), 1);
        assert_eq!(percent(18, 18), 100);
    }

    #[test]
    fn empty_catalog_is_zero() {
        assert_eq!(percent(0, 0), 0);
        assert_eq!(percent(5, 0), 0);
    }

    #[test]
    fn never_exceeds_hundred() {
        assert_eq!(percent(25, 20), 100);
    }

    #[test]
    fn conic_fill() {
        assert_eq!(
            conic_gradient(50),
            "conic-gradient(#667eea 0deg 180deg, #e0e0e0 180deg 360deg)"
        );
        assert_eq!(ring_degrees(33), 118.8);
        assert_eq!(
            conic_gradient(0),
            "conic-gradient(#667eea 0deg 0deg, #e0e0e0 0deg 360deg)"
        );
    }
}
