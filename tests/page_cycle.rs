//! End-to-end checks: preferences -> view state -> rendered page ->
//! dispatched events -> patches, compared against a fresh render.

use folio::bindings::{ControlId, Dispatcher, UiEvent};
use folio::catalog::{Catalog, Difficulty, ItemId, ProjectCategory};
use folio::dom::parse_html;
use folio::render::{render_page, PageMirror};
use folio::state::{CategoryFilter, DifficultyFilter, SectionLayout, Stale, Theme, ViewState};
use folio::store::prefs::{LEARNING_PROGRESS, THEME};
use folio::store::{FileStore, MemoryStore, Preferences, StoredProgress};
use tempfile::TempDir;

fn fresh_state() -> ViewState {
    ViewState::load(Catalog::builtin(), Box::new(MemoryStore::new()))
}

/// Mirror must equal a full re-render after every event.
fn assert_in_sync(mirror: &PageMirror, state: &ViewState) {
    let expected = parse_html(&render_page(state, None));
    assert_eq!(mirror.tree(), &expected);
}

#[test]
fn every_event_keeps_patched_page_equal_to_fresh_render() {
    let mut state = fresh_state();
    let mut dispatcher = Dispatcher::new();
    dispatcher.set_layout(vec![
        SectionLayout { id: "home", top: 0.0, height: 700.0 },
        SectionLayout { id: "learning", top: 700.0, height: 2400.0 },
        SectionLayout { id: "contact", top: 3100.0, height: 600.0 },
    ]);
    let mut mirror = PageMirror::new(&state, None);

    let events = vec![
        UiEvent::Click(ControlId::ToggleComplete(ItemId::new(1, 0))),
        UiEvent::Click(ControlId::ToggleComplete(ItemId::new(2, 1))),
        UiEvent::Click(ControlId::ToggleBookmark(ItemId::new(1, 0))),
        UiEvent::Click(ControlId::Filter(DifficultyFilter::Only(Difficulty::Beginner))),
        UiEvent::Input(ControlId::Search, "Python".into()),
        UiEvent::Input(ControlId::Search, "Python ".into()),
        UiEvent::Click(ControlId::Filter(DifficultyFilter::All)),
        UiEvent::Input(ControlId::Search, String::new()),
        UiEvent::Click(ControlId::ProjectFilter(CategoryFilter::Only(ProjectCategory::Cv))),
        UiEvent::Click(ControlId::ProjectFilter(CategoryFilter::Only(ProjectCategory::Cv))),
        UiEvent::Click(ControlId::ProjectFilter(CategoryFilter::Only(ProjectCategory::Web))),
        UiEvent::Click(ControlId::ProjectFilter(CategoryFilter::All)),
        UiEvent::Click(ControlId::ThemeToggle),
        UiEvent::Click(ControlId::MobileToggle),
        UiEvent::Click(ControlId::Nav("contact".into())),
        UiEvent::Scroll(150.0),
        UiEvent::Scroll(900.0),
        UiEvent::Frame,
        UiEvent::Scroll(0.0),
        UiEvent::Frame,
        UiEvent::Click(ControlId::ToggleComplete(ItemId::new(1, 0))),
        UiEvent::Click(ControlId::ClearProgress),
    ];

    for event in events {
        let label = format!("{:?}", event);
        let update = dispatcher.dispatch(&mut state, event);
        mirror.sync(&state, update.stale, update.touched.as_ref());
        let expected = parse_html(&render_page(&state, None));
        assert_eq!(mirror.tree(), &expected, "diverged after {}", label);
    }
}

#[test]
fn project_filter_clicks_hide_cards_without_touching_learning_items() {
    let mut state = fresh_state();
    let mut dispatcher = Dispatcher::new();
    let mut mirror = PageMirror::new(&state, None);

    let update = dispatcher.click_str(&mut state, "filter:advanced");
    mirror.sync(&state, update.stale, update.touched.as_ref());
    fn hidden_items(state: &ViewState, mirror: &PageMirror) -> usize {
        state
            .catalog()
            .items()
            .filter(|i| {
                let id = format!("item-{}", i.id);
                mirror.tree().find_by_id(&id).and_then(|n| n.attr("style")) == Some("display: none")
            })
            .count()
    }
    let before = hidden_items(&state, &mirror);
    assert!(before > 0);

    let update = dispatcher.click_str(&mut state, "project-filter:nlp");
    assert_eq!(update.stale, Stale::PROJECTS);
    mirror.sync(&state, update.stale, update.touched.as_ref());
    assert_eq!(hidden_items(&state, &mirror), before);

    let tree = mirror.tree();
    for (index, project) in state.projects().iter().enumerate() {
        let card = tree.find_by_id(&format!("project-{}", index)).unwrap();
        let hidden = card.attr("style") == Some("display: none");
        assert_eq!(hidden, project.category != ProjectCategory::Nlp, "{}", project.title);
    }
    assert!(tree.find_by_id("project-filter-nlp").unwrap().has_class("active"));
    assert!(!tree.find_by_id("project-filter-all").unwrap().has_class("active"));
    assert_in_sync(&mirror, &state);

    // Same category again is a no-op.
    assert!(dispatcher.click_str(&mut state, "project-filter:nlp").is_noop());
}

#[test]
fn scenario_progress_counts() {
    let mut state = fresh_state();
    let mut dispatcher = Dispatcher::new();
    let mut mirror = PageMirror::new(&state, None);
    let total = state.catalog().total_items();

    for control in ["toggle-complete:1-0", "toggle-complete:1-1", "toggle-bookmark:2-0"] {
        let update = dispatcher.click_str(&mut state, control);
        mirror.sync(&state, update.stale, update.touched.as_ref());
    }

    let tree = mirror.tree();
    let text = |id: &str| tree.find_by_id(id).map(|n| n.collect_text()).unwrap_or_default();
    assert_eq!(text("completed-count"), "2");
    assert_eq!(text("bookmarked-count"), "1");
    let expected = format!("{}%", (200.0 / total as f64).round() as u32);
    assert_eq!(text("progress-text"), expected);
    assert_in_sync(&mirror, &state);
}

#[test]
fn unknown_ids_are_ignored_end_to_end() {
    let mut state = fresh_state();
    let mut dispatcher = Dispatcher::new();
    let mirror = PageMirror::new(&state, None);

    let update = dispatcher.click_str(&mut state, "toggle-complete:99-99");
    assert!(update.stale.is_empty());
    assert!(update.patches(&state).is_empty());
    assert_eq!(state.progress().completed_count(), 0);
    assert!(state
        .preferences()
        .try_get(&LEARNING_PROGRESS)
        .unwrap()
        .map_or(true, |p| p.completed.is_empty()));
    assert_in_sync(&mirror, &state);
}

#[test]
fn file_store_survives_restart() {
    let dir = TempDir::new().unwrap();

    {
        let store = FileStore::open(dir.path()).unwrap();
        let mut state = ViewState::load(Catalog::builtin(), Box::new(store));
        let mut dispatcher = Dispatcher::new();
        dispatcher.click_str(&mut state, "toggle-complete:3-0");
        dispatcher.click_str(&mut state, "toggle-bookmark:4-1");
        dispatcher.click_str(&mut state, "theme-toggle");
    }

    let store = FileStore::open(dir.path()).unwrap();
    let state = ViewState::load(Catalog::builtin(), Box::new(store));
    assert!(state.progress().is_completed(&ItemId::new(3, 0)));
    assert!(state.progress().is_bookmarked(&ItemId::new(4, 1)));
    assert_eq!(state.theme(), Theme::Light);

    // The restored page is what a user would see after reload.
    let page = parse_html(&render_page(&state, None));
    let body = page.find_by_id("page").unwrap();
    assert_eq!(body.attr("data-theme"), Some("light"));
}

#[test]
fn stale_ids_dropped_on_load_and_written_back() {
    let dir = TempDir::new().unwrap();
    {
        let mut prefs = Preferences::new(FileStore::open(dir.path()).unwrap());
        let stored = StoredProgress {
            completed: vec![ItemId::new(1, 0), ItemId::from_raw("42-7")],
            bookmarked: vec![ItemId::from_raw("legacy-item")],
        };
        prefs.set(&LEARNING_PROGRESS, &stored).unwrap();
        prefs.set(&THEME, &Theme::Dark).unwrap();
    }

    let state = ViewState::load(Catalog::builtin(), Box::new(FileStore::open(dir.path()).unwrap()));
    assert_eq!(state.progress().completed_count(), 1);
    assert_eq!(state.progress().bookmarked_count(), 0);

    let prefs = Preferences::new(FileStore::open(dir.path()).unwrap());
    let cleaned = prefs.get(&LEARNING_PROGRESS);
    assert_eq!(cleaned.completed, vec![ItemId::new(1, 0)]);
    assert!(cleaned.bookmarked.is_empty());
}

#[test]
fn corrupt_store_entry_falls_back_to_defaults() {
    let store = MemoryStore::new()
        .with_raw("theme", "{not json")
        .with_raw("learningProgress", "[1, 2, 3]");
    let state = ViewState::load(Catalog::builtin(), Box::new(store));
    assert_eq!(state.theme(), Theme::Dark);
    assert!(state.progress().is_empty());
}
