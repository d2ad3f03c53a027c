//! Navigation state and scroll geometry.
//!
//! - Header turns "scrolled" once the page is scrolled past a threshold
//! - Scroll-spy: the active section is the one enclosing `scroll_y + offset`
//! - Nav clicks scroll so the section top lands just below the fixed header

/// Ephemeral navigation state. Reset on every launch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    pub active_section: &'static str,
    pub menu_open: bool,
    pub scrolled: bool,
}

impl NavigationState {
    pub fn new(first_section: &'static str) -> Self {
        Self {
            active_section: first_section,
            menu_open: false,
            scrolled: false,
        }
    }
}

/// Scroll thresholds, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollConfig {
    pub header_threshold: f32,
    pub spy_offset: f32,
    pub header_height: f32,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            header_threshold: 100.0,
            spy_offset: 100.0,
            header_height: 80.0,
        }
    }
}

/// Measured vertical extent of one page section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionLayout {
    pub id: &'static str,
    pub top: f32,
    pub height: f32,
}

impl SectionLayout {
    #[inline]
    fn encloses(&self, y: f32) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

/// Section whose extent contains `scroll_y + offset`.
/// When sections overlap the last one in document order wins.
pub fn section_at(layout: &[SectionLayout], scroll_y: f32, offset: f32) -> Option<&'static str> {
    let mark = scroll_y + offset;
    layout.iter().rev().find(|s| s.encloses(mark)).map(|s| s.id)
}

/// Scroll position that brings `id` just below the fixed header.
pub fn scroll_target(layout: &[SectionLayout], id: &str, header_height: f32) -> Option<f32> {
    layout
        .iter()
        .find(|s| s.id == id)
        .map(|s| (s.top - header_height).max(0.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> Vec<SectionLayout> {
        vec![
            SectionLayout { id: "home", top: 0.0, height: 800.0 },
            SectionLayout { id: "learning", top: 800.0, height: 1200.0 },
            SectionLayout { id: "contact", top: 2000.0, height: 600.0 },
        ]
    }

    #[test]
    fn spy_uses_offset() {
        let l = layout();
        assert_eq!(section_at(&l, 0.0, 100.0), Some("home"));
        assert_eq!(section_at(&l, 699.0, 100.0), Some("home"));
        assert_eq!(section_at(&l, 700.0, 100.0), Some("learning"));
        assert_eq!(section_at(&l, 1950.0, 100.0), Some("contact"));
    }

    #[test]
    fn spy_outside_all_sections() {
        let l = layout();
        assert_eq!(section_at(&l, 5000.0, 100.0), None);
        assert_eq!(section_at(&[], 0.0, 100.0), None);
    }

    #[test]
    fn target_clamps_at_top() {
        let l = layout();
        assert_eq!(scroll_target(&l, "home", 80.0), Some(0.0));
        assert_eq!(scroll_target(&l, "learning", 80.0), Some(720.0));
        assert_eq!(scroll_target(&l, "blog", 80.0), None);
    }
}
