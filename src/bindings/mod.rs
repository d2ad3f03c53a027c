//! Interaction Bindings.
//!
//! Widgets never touch view state. They emit [`UiEvent`]s naming a
//! [`ControlId`]; the [`Dispatcher`] maps each to exactly one `ViewState`
//! mutator and returns an [`Update`]: what became stale, plus any side
//! effect the front-end must perform (scrolling, opening a link, ...).

pub mod frame;
pub mod listeners;

pub use frame::FrameThrottle;
pub use listeners::{ListenerHandle, ListenerKind, ListenerSet};

use std::fmt;
use std::str::FromStr;

use crate::catalog::ItemId;
use crate::profile::ProfileImageError;
use crate::render::{self, Patch};
use crate::state::{nav, CategoryFilter, DifficultyFilter, SectionLayout, Stale, ViewState};

/// Identifier of an interactive element. Its string form is what the
/// rendered markup carries in `data-control`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ControlId {
    ToggleComplete(ItemId),
    ToggleBookmark(ItemId),
    Filter(DifficultyFilter),
    Search,
    ProjectFilter(CategoryFilter),
    ThemeToggle,
    MobileToggle,
    Nav(String),
    /// Outbound resource link `n` of an item.
    Link(ItemId, usize),
    ClearProgress,
    ProfileUpload,
    ContactSubmit,
    DismissNotification,
}

impl fmt::Display for ControlId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ControlId::ToggleComplete(id) => write!(f, "toggle-complete:{}", id),
            ControlId::ToggleBookmark(id) => write!(f, "toggle-bookmark:{}", id),
            ControlId::Filter(d) => write!(f, "filter:{}", d.as_str()),
            ControlId::Search => f.write_str("search"),
            ControlId::ProjectFilter(c) => write!(f, "project-filter:{}", c.as_str()),
            ControlId::ThemeToggle => f.write_str("theme-toggle"),
            ControlId::MobileToggle => f.write_str("mobile-toggle"),
            ControlId::Nav(section) => write!(f, "nav:{}", section),
            ControlId::Link(id, n) => write!(f, "link:{}:{}", id, n),
            ControlId::ClearProgress => f.write_str("clear-progress"),
            ControlId::ProfileUpload => f.write_str("profile-upload"),
            ControlId::ContactSubmit => f.write_str("contact-submit"),
            ControlId::DismissNotification => f.write_str("notification-close"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownControl(pub String);

impl fmt::Display for UnknownControl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown control {:?}", self.0)
    }
}

impl std::error::Error for UnknownControl {}

impl FromStr for ControlId {
    type Err = UnknownControl;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unknown = || UnknownControl(s.to_string());
        let non_empty = |v: &str| (!v.is_empty()).then(|| v.to_string()).ok_or_else(unknown);

        let control = match s.split_once(':') {
            None => match s {
                "search" => ControlId::Search,
                "theme-toggle" => ControlId::ThemeToggle,
                "mobile-toggle" => ControlId::MobileToggle,
                "clear-progress" => ControlId::ClearProgress,
                "profile-upload" => ControlId::ProfileUpload,
                "contact-submit" => ControlId::ContactSubmit,
                "notification-close" => ControlId::DismissNotification,
                _ => return Err(unknown()),
            },
            Some(("toggle-complete", id)) => ControlId::ToggleComplete(ItemId::from_raw(non_empty(id)?)),
            Some(("toggle-bookmark", id)) => ControlId::ToggleBookmark(ItemId::from_raw(non_empty(id)?)),
            Some(("filter", d)) => ControlId::Filter(DifficultyFilter::parse(d).ok_or_else(unknown)?),
            Some(("project-filter", c)) => ControlId::ProjectFilter(CategoryFilter::parse(c).ok_or_else(unknown)?),
            Some(("nav", section)) => ControlId::Nav(non_empty(section)?),
            Some(("link", rest)) => {
                let (id, n) = rest.rsplit_once(':').ok_or_else(unknown)?;
                let n = n.parse().map_err(|_| unknown())?;
                ControlId::Link(ItemId::from_raw(non_empty(id)?), n)
            }
            Some(_) => return Err(unknown()),
        };
        Ok(control)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    Click(ControlId),
    Input(ControlId, String),
    Scroll(f32),
    Resize(f32, f32),
    /// Animation frame boundary.
    Frame,
}

/// Work the front-end performs after a dispatch.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    ScrollTo(f32),
    OpenUrl(String),
    Resized { width: f32, height: f32 },
    PickProfileImage,
    SubmitContact,
    DismissNotification,
}

/// Outcome of one dispatched event.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Update {
    pub stale: Stale,
    /// Item whose buttons changed, when only one did.
    pub touched: Option<ItemId>,
    pub effect: Option<Effect>,
}

impl Update {
    fn stale(stale: Stale) -> Self {
        Self {
            stale,
            ..Self::default()
        }
    }

    fn effect(effect: Effect) -> Self {
        Self {
            effect: Some(effect),
            ..Self::default()
        }
    }

    pub fn is_noop(&self) -> bool {
        self.stale.is_empty() && self.effect.is_none()
    }

    /// Patches bringing an already rendered page up to date.
    pub fn patches(&self, state: &ViewState) -> Vec<Patch> {
        render::patches(state, self.stale, self.touched.as_ref())
    }
}

/// The single path from widget events to view-state mutations. The
/// state is passed in by the caller rather than owned here.
#[derive(Debug, Default)]
pub struct Dispatcher {
    throttle: FrameThrottle,
    layout: Vec<SectionLayout>,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Section geometry measured by the front-end, used by scroll-spy
    /// and nav scrolling.
    pub fn set_layout(&mut self, layout: Vec<SectionLayout>) {
        self.layout = layout;
    }

    pub fn layout(&self) -> &[SectionLayout] {
        &self.layout
    }

    pub fn dispatch(&mut self, state: &mut ViewState, event: UiEvent) -> Update {
        match event {
            UiEvent::Click(control) => self.click(state, control),
            UiEvent::Input(ControlId::Search, text) => Update::stale(state.set_search_term(&text)),
            UiEvent::Input(control, _) => {
                log::debug!("input on {} ignored", control);
                Update::default()
            }
            UiEvent::Scroll(y) => {
                self.throttle.push(y);
                Update::default()
            }
            UiEvent::Frame => match self.throttle.take() {
                Some(y) => Update::stale(state.on_scroll(y, &self.layout)),
                None => Update::default(),
            },
            UiEvent::Resize(width, height) => Update::effect(Effect::Resized { width, height }),
        }
    }

    /// Parse a `data-control` value and dispatch it as a click.
    pub fn click_str(&mut self, state: &mut ViewState, control: &str) -> Update {
        match control.parse::<ControlId>() {
            Ok(control) => self.click(state, control),
            Err(e) => {
                log::warn!("{}", e);
                Update::default()
            }
        }
    }

    /// Bytes picked (or dropped) after a `PickProfileImage` effect.
    pub fn upload_profile_image(&mut self, state: &mut ViewState, bytes: &[u8]) -> Result<Update, ProfileImageError> {
        state.set_profile_image(bytes).map(Update::stale)
    }

    fn click(&mut self, state: &mut ViewState, control: ControlId) -> Update {
        match control {
            ControlId::ToggleComplete(id) => {
                let stale = state.toggle_completion(&id);
                Update {
                    stale,
                    touched: Some(id),
                    effect: None,
                }
            }
            ControlId::ToggleBookmark(id) => {
                let stale = state.toggle_bookmark(&id);
                Update {
                    stale,
                    touched: Some(id),
                    effect: None,
                }
            }
            ControlId::Filter(f) => Update::stale(state.set_filter(f)),
            ControlId::ProjectFilter(c) => Update::stale(state.set_project_filter(c)),
            ControlId::ThemeToggle => Update::stale(state.toggle_theme()),
            ControlId::MobileToggle => Update::stale(state.toggle_mobile_menu()),
            ControlId::ClearProgress => Update::stale(state.clear_progress()),
            ControlId::Nav(section) => {
                let stale = state.navigate_to(&section);
                let target = nav::scroll_target(&self.layout, &section, state.scroll_config().header_height);
                Update {
                    stale,
                    touched: None,
                    effect: target.map(Effect::ScrollTo),
                }
            }
            ControlId::Link(id, n) => {
                let link = state.catalog().item(&id).and_then(|item| item.links.get(n));
                match link.and_then(|l| l.parsed().map(|url| (l.title, url))) {
                    Some((title, url)) => {
                        log::info!("Link clicked: {} for item {}", title, id);
                        Update::effect(Effect::OpenUrl(url.to_string()))
                    }
                    None => {
                        log::warn!("link {} of item {} not found", n, id);
                        Update::default()
                    }
                }
            }
            ControlId::ProfileUpload => Update::effect(Effect::PickProfileImage),
            ControlId::ContactSubmit => Update::effect(Effect::SubmitContact),
            ControlId::DismissNotification => Update::effect(Effect::DismissNotification),
            ControlId::Search => Update::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{fixtures, Difficulty};
    use crate::store::MemoryStore;

    fn state() -> ViewState {
        ViewState::load(fixtures::small(), Box::new(MemoryStore::new()))
    }

    #[test]
    fn control_ids_round_trip() {
        let controls = [
            ControlId::ToggleComplete(ItemId::from_raw("3-1")),
            ControlId::ToggleBookmark(ItemId::from_raw("1-0")),
            ControlId::Filter(DifficultyFilter::Only(Difficulty::Expert)),
            ControlId::Filter(DifficultyFilter::All),
            ControlId::Search,
            ControlId::ProjectFilter(CategoryFilter::All),
            ControlId::ProjectFilter(CategoryFilter::parse("cv").unwrap()),
            ControlId::ThemeToggle,
            ControlId::MobileToggle,
            ControlId::Nav("contact".into()),
            ControlId::Link(ItemId::from_raw("6-2"), 1),
            ControlId::ClearProgress,
            ControlId::ProfileUpload,
            ControlId::ContactSubmit,
            ControlId::DismissNotification,
        ];
        for c in controls {
            assert_eq!(c.to_string().parse::<ControlId>(), Ok(c.clone()), "{}", c);
        }
    }

    #[test]
    fn malformed_controls_rejected() {
        for s in ["", "toggle-complete:", "filter:legendary", "link:1-0", "link:1-0:x", "nav:", "bogus", "bogus:1", "project-filter:", "project-filter:robotics"] {
            assert!(s.parse::<ControlId>().is_err(), "{}", s);
        }
    }

    #[test]
    fn click_toggle_reports_touched_item() {
        let mut vs = state();
        let mut d = Dispatcher::new();
        let up = d.click_str(&mut vs, "toggle-complete:1-0");
        assert_eq!(up.touched, Some(ItemId::from_raw("1-0")));
        assert!(up.stale.contains(Stale::PROGRESS));
        assert!(vs.progress().is_completed(&ItemId::from_raw("1-0")));
    }

    #[test]
    fn unknown_item_click_is_noop() {
        let mut vs = state();
        let mut d = Dispatcher::new();
        let up = d.click_str(&mut vs, "toggle-bookmark:9-9");
        assert!(up.stale.is_empty());
        assert!(up.patches(&vs).is_empty());
    }

    #[test]
    fn scroll_applies_on_frame_only() {
        let mut vs = state();
        let mut d = Dispatcher::new();
        d.set_layout(vec![
            SectionLayout { id: "home", top: 0.0, height: 500.0 },
            SectionLayout { id: "learning", top: 500.0, height: 500.0 },
        ]);
        assert!(d.dispatch(&mut vs, UiEvent::Scroll(120.0)).is_noop());
        assert!(d.dispatch(&mut vs, UiEvent::Scroll(450.0)).is_noop());
        assert!(!vs.nav().scrolled);

        let up = d.dispatch(&mut vs, UiEvent::Frame);
        assert_eq!(up.stale, Stale::HEADER | Stale::NAV);
        assert_eq!(vs.nav().active_section, "learning");
        assert!(d.dispatch(&mut vs, UiEvent::Frame).is_noop());
    }

    #[test]
    fn nav_click_scrolls_below_header() {
        let mut vs = state();
        let mut d = Dispatcher::new();
        d.set_layout(vec![
            SectionLayout { id: "home", top: 0.0, height: 500.0 },
            SectionLayout { id: "contact", top: 900.0, height: 400.0 },
        ]);
        vs.toggle_mobile_menu();
        let up = d.dispatch(&mut vs, UiEvent::Click(ControlId::Nav("contact".into())));
        assert_eq!(up.effect, Some(Effect::ScrollTo(820.0)));
        assert!(up.stale.contains(Stale::NAV | Stale::MENU));
    }

    #[test]
    fn link_click_opens_url() {
        let mut vs = state();
        let mut d = Dispatcher::new();
        let up = d.click_str(&mut vs, "link:1-0:0");
        assert!(matches!(up.effect, Some(Effect::OpenUrl(ref u)) if u.starts_with("https://")));
        assert!(d.click_str(&mut vs, "link:1-0:99").is_noop());
    }

    #[test]
    fn search_input_updates_filter() {
        let mut vs = state();
        let mut d = Dispatcher::new();
        let up = d.dispatch(&mut vs, UiEvent::Input(ControlId::Search, "python".into()));
        assert!(up.stale.contains(Stale::VISIBILITY));
        assert_eq!(vs.filter().search, "python");
    }

    #[test]
    fn profile_upload_goes_through_picker() {
        let mut vs = state();
        let mut d = Dispatcher::new();
        let up = d.click_str(&mut vs, "profile-upload");
        assert_eq!(up.effect, Some(Effect::PickProfileImage));
        assert!(up.stale.is_empty());

        assert!(d.upload_profile_image(&mut vs, b"not an image").is_err());
        let up = d.upload_profile_image(&mut vs, &crate::profile::tiny_png(2, 2)).unwrap();
        assert_eq!(up.stale, Stale::PROFILE);
        assert!(vs.profile_image().is_some());
    }
}
