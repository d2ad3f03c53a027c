//! Live DOM copy of the rendered page.
//!
//! Rendered once, then kept current by applying reconciliation patches.
//! This is what "Export HTML" writes out.

use std::io;
use std::path::Path;

use super::notify::render_notifications;
use super::{ids, patches, render_page};
use crate::catalog::ItemId;
use crate::contact::Notification;
use crate::dom::parser::parse_fragment;
use crate::dom::{parse_html, DomTree};
use crate::state::{Stale, ViewState};

pub struct PageMirror {
    tree: DomTree,
}

impl PageMirror {
    pub fn new(state: &ViewState, notification: Option<&Notification>) -> Self {
        Self {
            tree: parse_html(&render_page(state, notification)),
        }
    }

    /// Patch the views named by `stale`. Returns the number of patches
    /// applied.
    pub fn sync(&mut self, state: &ViewState, stale: Stale, touched: Option<&ItemId>) -> usize {
        if stale.is_empty() {
            return 0;
        }
        let list = patches(state, stale, touched);
        let applied = self.tree.apply_all(&list);
        log::debug!("{:?}: {}/{} patches applied", stale, applied, list.len());
        applied
    }

    /// Swap the notification region for a freshly rendered one.
    pub fn set_notification(&mut self, notification: Option<&Notification>) -> bool {
        let fragment = parse_fragment(&render_notifications(notification));
        let Some(region) = fragment.children.into_iter().next() else {
            return false;
        };
        match self.tree.find_by_id_mut(ids::NOTIFICATIONS) {
            Some(node) => {
                *node = region;
                true
            }
            None => {
                log::warn!("page has no #{} region", ids::NOTIFICATIONS);
                false
            }
        }
    }

    pub fn tree(&self) -> &DomTree {
        &self.tree
    }

    pub fn to_html(&self) -> String {
        self.tree.to_html()
    }

    pub fn export(&self, path: &Path) -> io::Result<()> {
        std::fs::write(path, self.to_html())?;
        log::info!("Exported page to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures;
    use crate::contact::NotificationCenter;
    use crate::store::MemoryStore;
    use std::time::{Duration, Instant};

    fn state() -> ViewState {
        ViewState::load(fixtures::small(), Box::new(MemoryStore::new()))
    }

    #[test]
    fn sync_matches_fresh_render() {
        let mut vs = state();
        let mut mirror = PageMirror::new(&vs, None);

        let id = ItemId::from_raw("2-1");
        let stale = vs.toggle_completion(&id);
        assert!(mirror.sync(&vs, stale, Some(&id)) > 0);
        let stale = vs.toggle_theme();
        mirror.sync(&vs, stale, None);

        assert_eq!(mirror.tree(), &parse_html(&render_page(&vs, None)));
    }

    #[test]
    fn notification_region_replaced() {
        let vs = state();
        let mut mirror = PageMirror::new(&vs, None);
        let mut center = NotificationCenter::new(Duration::from_secs(5));
        center.success("Message sent!", Instant::now());

        assert!(mirror.set_notification(center.current()));
        assert_eq!(mirror.tree(), &parse_html(&render_page(&vs, center.current())));

        assert!(mirror.set_notification(None));
        assert_eq!(mirror.tree(), &parse_html(&render_page(&vs, None)));
    }

    #[test]
    fn export_writes_document() {
        let vs = state();
        let mirror = PageMirror::new(&vs, None);
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("page.html");
        mirror.export(&path).unwrap();
        let html = std::fs::read_to_string(&path).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("learning-search"));
    }
}
