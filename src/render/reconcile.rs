//! Targeted DOM updates.
//!
//! `patches` maps a [`Stale`] mask to the smallest set of element-level
//! edits that bring a previously rendered page up to date. Values come from
//! the same helpers the renderers use.

use super::header::{avatar_src, BRAND_LOGO_SIZE, PROFILE_IMAGE_SIZE};
use super::learning::{
    bookmark_class, bookmark_title, complete_class, complete_title, overall_percent, phase_count_label,
};
use super::progress::conic_gradient;
use super::ids;
use crate::catalog::{ItemId, LearningItem};
use crate::state::{CategoryFilter, DifficultyFilter, Stale, Theme, ViewState};

/// One element-level edit, addressed by element id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Patch {
    /// Replace all children with a single text node.
    SetText { id: String, text: String },
    SetAttr { id: String, name: &'static str, value: String },
    ToggleClass { id: String, class: &'static str, on: bool },
    /// Set one inline style property, keeping the others.
    SetStyle { id: String, property: &'static str, value: String },
    /// Hidden elements carry `display: none`.
    SetHidden { id: String, hidden: bool },
}

impl Patch {
    pub fn target(&self) -> &str {
        match self {
            Patch::SetText { id, .. }
            | Patch::SetAttr { id, .. }
            | Patch::ToggleClass { id, .. }
            | Patch::SetStyle { id, .. }
            | Patch::SetHidden { id, .. } => id,
        }
    }
}

fn text(id: impl Into<String>, text: impl Into<String>) -> Patch {
    Patch::SetText {
        id: id.into(),
        text: text.into(),
    }
}

fn attr(id: impl Into<String>, name: &'static str, value: impl Into<String>) -> Patch {
    Patch::SetAttr {
        id: id.into(),
        name,
        value: value.into(),
    }
}

fn class(id: impl Into<String>, class: &'static str, on: bool) -> Patch {
    Patch::ToggleClass {
        id: id.into(),
        class,
        on,
    }
}

/// Patches for everything `stale` names.
///
/// `touched` narrows `ITEM_STATUS` to one item; `None` refreshes every
/// item's buttons.
pub fn patches(state: &ViewState, stale: Stale, touched: Option<&ItemId>) -> Vec<Patch> {
    let mut out = Vec::new();
    if stale.is_empty() {
        return out;
    }

    if stale.contains(Stale::ITEM_STATUS) {
        match touched {
            Some(id) => item_status(state, id, &mut out),
            None => {
                for item in state.catalog().items() {
                    item_status(state, &item.id, &mut out);
                }
            }
        }
    }

    if stale.contains(Stale::COUNTERS) {
        let p = state.progress();
        out.push(text(ids::COMPLETED_COUNT, p.completed_count().to_string()));
        out.push(text(ids::BOOKMARKED_COUNT, p.bookmarked_count().to_string()));
    }

    if stale.contains(Stale::PROGRESS) {
        let pct = overall_percent(state);
        out.push(text(ids::PROGRESS_TEXT, format!("{}%", pct)));
        out.push(attr(ids::PROGRESS_CIRCLE, "data-progress", pct.to_string()));
        out.push(Patch::SetStyle {
            id: ids::PROGRESS_CIRCLE.to_string(),
            property: "background",
            value: conic_gradient(pct),
        });
        for phase in state.catalog().phases() {
            out.push(text(ids::phase_count(phase.id), phase_count_label(state, phase)));
        }
    }

    if stale.contains(Stale::VISIBILITY) {
        for item in state.catalog().items() {
            out.push(visibility(state, item));
        }
    }

    if stale.contains(Stale::FILTER_CONTROLS) {
        for option in DifficultyFilter::options() {
            let on = state.filter().difficulty == option;
            out.push(class(ids::filter(option), "active", on));
        }
        out.push(attr(ids::SEARCH, "value", state.filter().search.clone()));
    }

    if stale.contains(Stale::PROJECTS) {
        for option in CategoryFilter::options() {
            let on = state.filter().category == option;
            out.push(class(ids::project_filter(option), "active", on));
        }
        for (index, project) in state.projects().iter().enumerate() {
            out.push(Patch::SetHidden {
                id: ids::project(index),
                hidden: !state.filter().is_project_visible(project),
            });
        }
    }

    if stale.contains(Stale::NAV) {
        for section in state.sections() {
            let on = state.nav().active_section == section.id;
            out.push(class(ids::nav(section.id), "active", on));
        }
    }

    if stale.contains(Stale::MENU) {
        let open = state.nav().menu_open;
        out.push(class(ids::NAV_MENU, "active", open));
        out.push(class(ids::MOBILE_TOGGLE, "active", open));
    }

    if stale.contains(Stale::HEADER) {
        out.push(class(ids::HEADER, "scrolled", state.nav().scrolled));
    }

    if stale.contains(Stale::THEME) {
        let theme = state.theme();
        out.push(attr(ids::PAGE, "data-theme", theme.as_str()));
        out.push(class(ids::PAGE, "light-theme", theme == Theme::Light));
        out.push(attr(ids::THEME_ICON, "class", theme.toggle_icon()));
    }

    if stale.contains(Stale::PROFILE) {
        out.push(attr(ids::PROFILE_IMAGE, "src", avatar_src(state, PROFILE_IMAGE_SIZE)));
        out.push(attr(ids::BRAND_LOGO, "src", avatar_src(state, BRAND_LOGO_SIZE)));
    }

    log::debug!("{:?} -> {} patches", stale, out.len());
    out
}

fn item_status(state: &ViewState, id: &ItemId, out: &mut Vec<Patch>) {
    if !state.catalog().contains(id) {
        return;
    }
    let done = state.progress().is_completed(id);
    let marked = state.progress().is_bookmarked(id);
    out.push(attr(ids::complete(id), "class", complete_class(done)));
    out.push(attr(ids::complete(id), "title", complete_title(done)));
    out.push(attr(ids::bookmark(id), "class", bookmark_class(marked)));
    out.push(attr(ids::bookmark(id), "title", bookmark_title(marked)));
}

fn visibility(state: &ViewState, item: &LearningItem) -> Patch {
    Patch::SetHidden {
        id: ids::item(&item.id),
        hidden: !state.filter().is_visible(item),
    }
}
