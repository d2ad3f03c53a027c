use std::collections::BTreeSet;

use crate::catalog::{Catalog, ItemId, Phase};
use crate::store::StoredProgress;

/// Completed and bookmarked item sets.
///
/// Both sets only ever hold identifiers present in the catalog the state
/// was loaded against: `from_stored` drops unknown ids and `ViewState`
/// refuses to toggle them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemProgressState {
    completed: BTreeSet<ItemId>,
    bookmarked: BTreeSet<ItemId>,
}

impl ItemProgressState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild from storage, discarding ids the catalog no longer has.
    /// Returns the cleaned state and how many ids were dropped.
    pub fn from_stored(stored: StoredProgress, catalog: &Catalog) -> (Self, usize) {
        let total = stored.completed.len() + stored.bookmarked.len();
        let completed: BTreeSet<ItemId> = stored
            .completed
            .into_iter()
            .filter(|id| catalog.contains(id))
            .collect();
        let bookmarked: BTreeSet<ItemId> = stored
            .bookmarked
            .into_iter()
            .filter(|id| catalog.contains(id))
            .collect();

        // Duplicates in storage also count as dropped.
        let dropped = total - completed.len() - bookmarked.len();
        (Self { completed, bookmarked }, dropped)
    }

    pub fn to_stored(&self) -> StoredProgress {
        StoredProgress {
            completed: self.completed.iter().cloned().collect(),
            bookmarked: self.bookmarked.iter().cloned().collect(),
        }
    }

    pub fn is_completed(&self, id: &ItemId) -> bool {
        self.completed.contains(id)
    }

    pub fn is_bookmarked(&self, id: &ItemId) -> bool {
        self.bookmarked.contains(id)
    }

    /// Flip completion; returns the new membership.
    pub fn toggle_completed(&mut self, id: &ItemId) -> bool {
        toggle(&mut self.completed, id)
    }

    /// Flip bookmark; returns the new membership.
    pub fn toggle_bookmarked(&mut self, id: &ItemId) -> bool {
        toggle(&mut self.bookmarked, id)
    }

    pub fn completed_count(&self) -> usize {
        self.completed.len()
    }

    pub fn bookmarked_count(&self) -> usize {
        self.bookmarked.len()
    }

    pub fn completed_in(&self, phase: &Phase) -> usize {
        phase.items.iter().filter(|i| self.completed.contains(&i.id)).count()
    }

    pub fn completed(&self) -> impl Iterator<Item = &ItemId> {
        self.completed.iter()
    }

    pub fn bookmarked(&self) -> impl Iterator<Item = &ItemId> {
        self.bookmarked.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.completed.is_empty() && self.bookmarked.is_empty()
    }

    pub fn clear(&mut self) {
        self.completed.clear();
        self.bookmarked.clear();
    }
}

fn toggle(set: &mut BTreeSet<ItemId>, id: &ItemId) -> bool {
    if set.remove(id) {
        false
    } else {
        set.insert(id.clone());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures;

    fn id(s: &str) -> ItemId {
        ItemId::from_raw(s)
    }

    #[test]
    fn toggle_twice_is_identity() {
        let mut p = ItemProgressState::new();
        p.toggle_bookmarked(&id("2-0"));
        let before = p.clone();
        assert!(p.toggle_completed(&id("1-0")));
        assert!(!p.toggle_completed(&id("1-0")));
        assert_eq!(p, before);
    }

    #[test]
    fn stale_ids_are_dropped_on_load() {
        let catalog = fixtures::small();
        let stored = StoredProgress {
            completed: vec![id("1-0"), id("7-3"), id("1-0")],
            bookmarked: vec![id("gone")],
        };
        let (p, dropped) = ItemProgressState::from_stored(stored, &catalog);
        assert_eq!(dropped, 3);
        assert_eq!(p.completed_count(), 1);
        assert_eq!(p.bookmarked_count(), 0);
        assert!(p.completed().all(|i| catalog.contains(i)));
    }

    #[test]
    fn per_phase_counts() {
        let catalog = fixtures::small();
        let mut p = ItemProgressState::new();
        p.toggle_completed(&id("2-1"));
        p.toggle_completed(&id("2-3"));
        p.toggle_completed(&id("1-1"));
        let phase2 = catalog.phase(2).unwrap();
        assert_eq!(p.completed_in(phase2), 2);
    }

    #[test]
    fn stored_order_is_stable() {
        let mut p = ItemProgressState::new();
        p.toggle_completed(&id("2-0"));
        p.toggle_completed(&id("1-0"));
        let stored = p.to_stored();
        assert_eq!(stored.completed, vec![id("1-0"), id("2-0")]);
    }
}
