//! Stale-view mask.
//!
//! Every `ViewState` mutator returns a `Stale` value naming the derived
//! views its change invalidated. The reconciliation pass patches only
//! those, so a single toggle never re-renders the page.

use std::fmt;
use std::ops::{BitOr, BitOrAssign};

#[derive(Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Stale(u16);

impl Stale {
    pub const NONE: Self = Self(0);
    /// Complete/bookmark buttons of an item.
    pub const ITEM_STATUS: Self = Self(1 << 0);
    /// Completed and bookmarked counters.
    pub const COUNTERS: Self = Self(1 << 1);
    /// Overall percentage, progress ring and per-phase counters.
    pub const PROGRESS: Self = Self(1 << 2);
    /// Per-item filtered visibility.
    pub const VISIBILITY: Self = Self(1 << 3);
    /// Active filter button and search box value.
    pub const FILTER_CONTROLS: Self = Self(1 << 4);
    /// Active navigation link.
    pub const NAV: Self = Self(1 << 5);
    /// Mobile menu open/closed.
    pub const MENU: Self = Self(1 << 6);
    /// Header "scrolled" styling.
    pub const HEADER: Self = Self(1 << 7);
    pub const THEME: Self = Self(1 << 8);
    pub const PROFILE: Self = Self(1 << 9);
    /// Project card visibility and category filter buttons.
    pub const PROJECTS: Self = Self(1 << 10);

    pub const ALL: Self = Self((1 << 11) - 1);

    const NAMES: [(Stale, &'static str); 11] = [
        (Self::ITEM_STATUS, "item-status"),
        (Self::COUNTERS, "counters"),
        (Self::PROGRESS, "progress"),
        (Self::VISIBILITY, "visibility"),
        (Self::FILTER_CONTROLS, "filter-controls"),
        (Self::NAV, "nav"),
        (Self::MENU, "menu"),
        (Self::HEADER, "header"),
        (Self::THEME, "theme"),
        (Self::PROFILE, "profile"),
        (Self::PROJECTS, "projects"),
    ];

    #[inline]
    pub fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0 && other.0 != 0
    }

    #[inline]
    pub fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub fn count(self) -> u32 {
        self.0.count_ones()
    }

    /// `flag` when `cond` holds, otherwise `NONE`.
    #[inline]
    pub fn when(cond: bool, flag: Self) -> Self {
        Self(flag.0 * cond as u16)
    }
}

impl BitOr for Stale {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for Stale {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl fmt::Debug for Stale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = Self::NAMES
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, name)| *name)
            .collect();
        write!(f, "Stale[{}]", names.join("|"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn union_and_contains() {
        let s = Stale::ITEM_STATUS | Stale::COUNTERS;
        assert!(s.contains(Stale::ITEM_STATUS));
        assert!(!s.contains(Stale::THEME));
        assert!(!s.contains(Stale::NONE));
        assert_eq!(s.count(), 2);
    }

    #[test]
    fn when_is_branchless_select() {
        assert_eq!(Stale::when(true, Stale::NAV), Stale::NAV);
        assert!(Stale::when(false, Stale::NAV).is_empty());
    }

    #[test]
    fn all_covers_every_named_flag() {
        for (flag, _) in Stale::NAMES {
            assert!(Stale::ALL.contains(flag));
        }
        assert_eq!(Stale::ALL.count(), 11);
    }

    #[test]
    fn debug_lists_names() {
        let s = Stale::THEME | Stale::MENU;
        assert_eq!(format!("{:?}", s), "Stale[menu|theme]");
    }
}
