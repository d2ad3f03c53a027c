//! View State Model.
//!
//! `ViewState` is the single source of truth for everything the page shows
//! that is not static content:
//!
//! - theme and profile picture (durable)
//! - completed / bookmarked items (durable)
//! - active section, mobile menu, header scroll styling (ephemeral)
//! - difficulty filter, search term and project category (ephemeral)
//!
//! Each mutator validates its input, updates memory, writes durable fields
//! through the injected preference store, and returns the [`Stale`] mask
//! of derived views that changed. The in-memory copy stays authoritative
//! even when a store write fails.

pub mod filter;
pub mod nav;
pub mod progress;
pub mod stale;
pub mod theme;

pub use filter::{CategoryFilter, DifficultyFilter, FilterState};
pub use nav::{NavigationState, ScrollConfig, SectionLayout};
pub use progress::ItemProgressState;
pub use stale::Stale;
pub use theme::Theme;

use crate::catalog::builtin::{SectionSpec, PROJECTS, SECTIONS};
use crate::catalog::{Catalog, ItemId, ProjectSpec};
use crate::profile::{self, ProfileImageError};
use crate::store::prefs::{LEARNING_PROGRESS, PROFILE_IMAGE, THEME};
use crate::store::{PreferenceStore, Preferences};

pub struct ViewState {
    catalog: Catalog,
    sections: &'static [SectionSpec],
    projects: &'static [ProjectSpec],
    prefs: Preferences<Box<dyn PreferenceStore>>,
    scroll: ScrollConfig,
    theme: Theme,
    profile_image: Option<String>,
    progress: ItemProgressState,
    nav: NavigationState,
    filter: FilterState,
}

impl ViewState {
    /// Restore durable state from `store` against `catalog`.
    ///
    /// Persisted ids the catalog no longer contains are dropped and the
    /// cleaned progress is written back, so counts always match the live
    /// catalog.
    pub fn load(catalog: Catalog, store: Box<dyn PreferenceStore>) -> Self {
        let mut prefs = Preferences::new(store);

        let theme = prefs.get(&THEME);
        let profile_image = prefs.get(&PROFILE_IMAGE);
        let (progress, dropped) = ItemProgressState::from_stored(prefs.get(&LEARNING_PROGRESS), &catalog);

        if dropped > 0 {
            log::warn!("Dropped {} stale learning-progress ids", dropped);
            if let Err(e) = prefs.set(&LEARNING_PROGRESS, &progress.to_stored()) {
                log::warn!("{}", e);
            }
        }

        log::info!(
            "View state loaded: theme={} completed={} bookmarked={}",
            theme.as_str(),
            progress.completed_count(),
            progress.bookmarked_count()
        );

        Self {
            catalog,
            sections: SECTIONS,
            projects: PROJECTS,
            prefs,
            scroll: ScrollConfig::default(),
            theme,
            profile_image,
            progress,
            nav: NavigationState::new(SECTIONS[0].id),
            filter: FilterState::default(),
        }
    }

    pub fn with_scroll_config(mut self, scroll: ScrollConfig) -> Self {
        self.scroll = scroll;
        self
    }

    // ── Read access ─────────────────────────────────────────────────────────

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn sections(&self) -> &'static [SectionSpec] {
        self.sections
    }

    pub fn projects(&self) -> &'static [ProjectSpec] {
        self.projects
    }

    pub fn scroll_config(&self) -> ScrollConfig {
        self.scroll
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn profile_image(&self) -> Option<&str> {
        self.profile_image.as_deref()
    }

    pub fn progress(&self) -> &ItemProgressState {
        &self.progress
    }

    pub fn nav(&self) -> &NavigationState {
        &self.nav
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn preferences(&self) -> &Preferences<Box<dyn PreferenceStore>> {
        &self.prefs
    }

    // ── Learning progress ───────────────────────────────────────────────────

    /// Unknown ids are ignored: stale references must not crash the page.
    pub fn toggle_completion(&mut self, id: &ItemId) -> Stale {
        if !self.catalog.contains(id) {
            log::warn!("toggle_completion: unknown item {}", id);
            return Stale::NONE;
        }
        let done = self.progress.toggle_completed(id);
        log::debug!("item {} completed={}", id, done);
        self.save_progress();
        Stale::ITEM_STATUS | Stale::COUNTERS | Stale::PROGRESS
    }

    pub fn toggle_bookmark(&mut self, id: &ItemId) -> Stale {
        if !self.catalog.contains(id) {
            log::warn!("toggle_bookmark: unknown item {}", id);
            return Stale::NONE;
        }
        let marked = self.progress.toggle_bookmarked(id);
        log::debug!("item {} bookmarked={}", id, marked);
        self.save_progress();
        Stale::ITEM_STATUS | Stale::COUNTERS
    }

    pub fn clear_progress(&mut self) -> Stale {
        if self.progress.is_empty() {
            return Stale::NONE;
        }
        self.progress.clear();
        self.save_progress();
        Stale::ITEM_STATUS | Stale::COUNTERS | Stale::PROGRESS
    }

    fn save_progress(&mut self) {
        if let Err(e) = self.prefs.set(&LEARNING_PROGRESS, &self.progress.to_stored()) {
            log::warn!("{}; progress kept in memory only", e);
        }
    }

    // ── Theme & profile ─────────────────────────────────────────────────────

    pub fn set_theme(&mut self, theme: Theme) -> Stale {
        if self.theme == theme {
            return Stale::NONE;
        }
        self.theme = theme;
        if let Err(e) = self.prefs.set(&THEME, &theme) {
            log::warn!("{}; theme kept in memory only", e);
        }
        Stale::THEME
    }

    pub fn toggle_theme(&mut self) -> Stale {
        self.set_theme(self.theme.toggled())
    }

    /// Validate and store an uploaded picture.
    pub fn set_profile_image(&mut self, bytes: &[u8]) -> Result<Stale, ProfileImageError> {
        let url = profile::to_data_url(bytes)?;
        if self.profile_image.as_deref() == Some(url.as_str()) {
            return Ok(Stale::NONE);
        }
        self.profile_image = Some(url);
        if let Err(e) = self.prefs.set(&PROFILE_IMAGE, &self.profile_image) {
            log::warn!("{}; profile image kept in memory only", e);
        }
        Ok(Stale::PROFILE)
    }

    // ── Filtering ───────────────────────────────────────────────────────────

    pub fn set_filter(&mut self, difficulty: DifficultyFilter) -> Stale {
        if self.filter.difficulty == difficulty {
            return Stale::NONE;
        }
        self.filter.difficulty = difficulty;
        Stale::VISIBILITY | Stale::FILTER_CONTROLS
    }

    pub fn set_search_term(&mut self, text: &str) -> Stale {
        if self.filter.search == text {
            return Stale::NONE;
        }
        let was = self.filter.search.to_lowercase();
        self.filter.search = text.to_string();
        // Case edits do not change which items match.
        Stale::FILTER_CONTROLS | Stale::when(was != text.to_lowercase(), Stale::VISIBILITY)
    }

    pub fn set_project_filter(&mut self, category: CategoryFilter) -> Stale {
        Stale::when(
            std::mem::replace(&mut self.filter.category, category) != category,
            Stale::PROJECTS,
        )
    }

    // ── Navigation ──────────────────────────────────────────────────────────

    /// Unknown section ids are ignored.
    pub fn set_active_section(&mut self, id: &str) -> Stale {
        let Some(section) = self.sections.iter().find(|s| s.id == id) else {
            log::debug!("set_active_section: unknown section {}", id);
            return Stale::NONE;
        };
        if self.nav.active_section == section.id {
            return Stale::NONE;
        }
        self.nav.active_section = section.id;
        Stale::NAV
    }

    pub fn toggle_mobile_menu(&mut self) -> Stale {
        self.nav.menu_open = !self.nav.menu_open;
        Stale::MENU
    }

    pub fn close_mobile_menu(&mut self) -> Stale {
        Stale::when(std::mem::replace(&mut self.nav.menu_open, false), Stale::MENU)
    }

    /// Navigation link click: highlight the section and close the menu.
    pub fn navigate_to(&mut self, id: &str) -> Stale {
        self.set_active_section(id) | self.close_mobile_menu()
    }

    /// Apply one scroll sample: header styling and scroll-spy.
    pub fn on_scroll(&mut self, scroll_y: f32, layout: &[SectionLayout]) -> Stale {
        let scrolled = scroll_y > self.scroll.header_threshold;
        let mut stale = Stale::when(scrolled != self.nav.scrolled, Stale::HEADER);
        self.nav.scrolled = scrolled;

        if let Some(id) = nav::section_at(layout, scroll_y, self.scroll.spy_offset) {
            stale |= self.set_active_section(id);
        }
        stale
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{fixtures, Difficulty};
    use crate::store::{MemoryStore, StoredProgress};

    fn fresh() -> ViewState {
        ViewState::load(fixtures::small(), Box::new(MemoryStore::new()))
    }

    fn id(s: &str) -> ItemId {
        ItemId::from_raw(s)
    }

    #[test]
    fn toggle_completion_twice_restores_state() {
        let mut vs = fresh();
        vs.toggle_bookmark(&id("2-2"));
        let before = vs.progress().clone();
        vs.toggle_completion(&id("1-0"));
        vs.toggle_completion(&id("1-0"));
        assert_eq!(vs.progress(), &before);
    }

    #[test]
    fn unknown_id_is_inert_and_not_persisted() {
        let mut vs = fresh();
        assert_eq!(vs.toggle_completion(&id("nonexistent-id")), Stale::NONE);
        assert_eq!(vs.toggle_bookmark(&id("nonexistent-id")), Stale::NONE);
        assert_eq!(vs.progress().completed_count(), 0);
        let stored = vs.preferences().get(&LEARNING_PROGRESS);
        assert_eq!(stored, StoredProgress::default());
    }

    #[test]
    fn completion_persists_synchronously() {
        let mut vs = fresh();
        let stale = vs.toggle_completion(&id("2-1"));
        assert!(stale.contains(Stale::ITEM_STATUS | Stale::COUNTERS | Stale::PROGRESS));
        let stored = vs.preferences().get(&LEARNING_PROGRESS);
        assert_eq!(stored.completed, vec![id("2-1")]);
    }

    #[test]
    fn bookmark_does_not_touch_progress_ring() {
        let mut vs = fresh();
        let stale = vs.toggle_bookmark(&id("1-1"));
        assert!(!stale.intersects(Stale::PROGRESS));
        assert_eq!(vs.progress().bookmarked_count(), 1);
    }

    #[test]
    fn stale_ids_dropped_and_written_back() {
        let mut prefs = Preferences::new(MemoryStore::new());
        prefs
            .set(
                &LEARNING_PROGRESS,
                &StoredProgress {
                    completed: vec![id("1-0"), id("99-0")],
                    bookmarked: vec![id("42-1")],
                },
            )
            .unwrap();

        let vs = ViewState::load(fixtures::small(), Box::new(prefs.into_store()));
        assert_eq!(vs.progress().completed_count(), 1);
        assert_eq!(vs.progress().bookmarked_count(), 0);
        let stored = vs.preferences().get(&LEARNING_PROGRESS);
        assert_eq!(stored.completed, vec![id("1-0")]);
        assert!(stored.bookmarked.is_empty());
    }

    #[test]
    fn theme_change_reports_once() {
        let mut vs = fresh();
        assert_eq!(vs.set_theme(Theme::Light), Stale::THEME);
        assert_eq!(vs.set_theme(Theme::Light), Stale::NONE);
        assert_eq!(vs.preferences().get(&THEME), Theme::Light);
        vs.toggle_theme();
        assert_eq!(vs.theme(), Theme::Dark);
    }

    #[test]
    fn filter_and_search_staleness() {
        let mut vs = fresh();
        let s = vs.set_filter(DifficultyFilter::Only(Difficulty::Advanced));
        assert!(s.contains(Stale::VISIBILITY | Stale::FILTER_CONTROLS));
        assert_eq!(vs.set_filter(DifficultyFilter::Only(Difficulty::Advanced)), Stale::NONE);

        assert_eq!(vs.set_search_term("Py"), Stale::VISIBILITY | Stale::FILTER_CONTROLS);
        assert_eq!(vs.set_search_term("py"), Stale::FILTER_CONTROLS);
        assert_eq!(vs.set_search_term("py"), Stale::NONE);
        assert_eq!(vs.set_search_term("py "), Stale::VISIBILITY | Stale::FILTER_CONTROLS);
        assert_eq!(vs.filter().search, "py ");

        let web = CategoryFilter::parse("web").unwrap();
        assert_eq!(vs.set_project_filter(web), Stale::PROJECTS);
        assert_eq!(vs.set_project_filter(web), Stale::NONE);
        assert_eq!(vs.filter().difficulty, DifficultyFilter::Only(Difficulty::Advanced));
    }

    #[test]
    fn navigation_closes_menu() {
        let mut vs = fresh();
        vs.toggle_mobile_menu();
        assert!(vs.nav().menu_open);
        let s = vs.navigate_to("contact");
        assert_eq!(s, Stale::NAV | Stale::MENU);
        assert!(!vs.nav().menu_open);
        assert_eq!(vs.nav().active_section, "contact");
        assert_eq!(vs.navigate_to("nowhere"), Stale::NONE);
    }

    #[test]
    fn scroll_crosses_header_threshold_once() {
        let mut vs = fresh();
        let layout = [
            SectionLayout { id: "home", top: 0.0, height: 600.0 },
            SectionLayout { id: "learning", top: 600.0, height: 900.0 },
        ];
        assert_eq!(vs.on_scroll(50.0, &layout), Stale::NONE);
        assert_eq!(vs.on_scroll(150.0, &layout), Stale::HEADER);
        assert_eq!(vs.on_scroll(160.0, &layout), Stale::NONE);
        assert_eq!(vs.on_scroll(550.0, &layout), Stale::NAV);
        assert_eq!(vs.nav().active_section, "learning");
        assert_eq!(vs.on_scroll(0.0, &layout), Stale::HEADER | Stale::NAV);
    }

    #[test]
    fn profile_image_rejects_garbage() {
        let mut vs = fresh();
        assert!(vs.set_profile_image(b"GIF? no").is_err());
        assert!(vs.profile_image().is_none());

        let stale = vs.set_profile_image(&crate::profile::tiny_png(2, 2)).unwrap();
        assert_eq!(stale, Stale::PROFILE);
        assert!(vs.preferences().get(&PROFILE_IMAGE).is_some());
    }

    #[test]
    fn clear_progress_empties_store() {
        let mut vs = fresh();
        vs.toggle_completion(&id("1-0"));
        vs.toggle_bookmark(&id("2-0"));
        assert!(!vs.clear_progress().is_empty());
        assert_eq!(vs.clear_progress(), Stale::NONE);
        assert_eq!(vs.preferences().get(&LEARNING_PROGRESS), StoredProgress::default());
    }
}
