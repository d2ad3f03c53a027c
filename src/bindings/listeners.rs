//! Detachable repeating callbacks.
//!
//! Every repeating source (animation frame loop, scroll, resize, timers)
//! is registered in a [`ListenerSet`] and checks its [`ListenerHandle`]
//! before each run. Tearing the view down calls `detach_all`, after which
//! no handle reports active, including clones held by worker threads.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListenerKind {
    Scroll,
    Resize,
    AnimationFrame,
    Timer,
}

#[derive(Debug, Clone)]
pub struct ListenerHandle {
    kind: ListenerKind,
    active: Arc<AtomicBool>,
}

impl ListenerHandle {
    pub fn kind(&self) -> ListenerKind {
        self.kind
    }

    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::Acquire)
    }

    pub fn detach(&self) {
        self.active.store(false, Ordering::Release);
    }
}

#[derive(Debug, Default)]
pub struct ListenerSet {
    handles: Vec<ListenerHandle>,
}

impl ListenerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attach(&mut self, kind: ListenerKind) -> ListenerHandle {
        let handle = ListenerHandle {
            kind,
            active: Arc::new(AtomicBool::new(true)),
        };
        self.handles.retain(|h| h.is_active());
        self.handles.push(handle.clone());
        log::debug!("listener attached: {:?}", kind);
        handle
    }

    pub fn is_attached(&self, kind: ListenerKind) -> bool {
        self.handles.iter().any(|h| h.kind == kind && h.is_active())
    }

    pub fn active_count(&self) -> usize {
        self.handles.iter().filter(|h| h.is_active()).count()
    }

    /// Cancel every listener. Returns how many were still active.
    pub fn detach_all(&mut self) -> usize {
        let active = self.active_count();
        for h in self.handles.drain(..) {
            h.detach();
        }
        if active > 0 {
            log::info!("Detached {} listeners", active);
        }
        active
    }
}

impl Drop for ListenerSet {
    fn drop(&mut self) {
        self.detach_all();
    }
}
