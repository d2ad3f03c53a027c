//! Learning path markup: search and difficulty controls, the progress
//! overview, and one card per phase.
//!
//! Attribute values that can change at runtime come from the small helper
//! functions below, which the reconciler reuses, so a patched page and a
//! freshly rendered one never disagree.

use super::color::phase_gradient;
use super::progress::{conic_gradient, percent, phase_label};
use super::{class_list, ids, Markup};
use crate::bindings::ControlId;
use crate::catalog::{ItemId, LearningItem, Phase};
use crate::state::{DifficultyFilter, ViewState};

pub fn complete_class(done: bool) -> String {
    class_list("status-btn", &[("completed", done)])
}

pub fn complete_title(done: bool) -> &'static str {
    if done {
        "Mark as incomplete"
    } else {
        "Mark as complete"
    }
}

pub fn bookmark_class(marked: bool) -> String {
    class_list("bookmark-btn", &[("bookmarked", marked)])
}

pub fn bookmark_title(marked: bool) -> &'static str {
    if marked {
        "Remove bookmark"
    } else {
        "Add bookmark"
    }
}

pub fn filter_class(state: &ViewState, option: DifficultyFilter) -> String {
    class_list("filter-btn", &[("active", state.filter().difficulty == option)])
}

/// Inline style of an item card: hidden items get `display: none`.
pub fn item_style(visible: bool) -> &'static str {
    if visible {
        ""
    } else {
        "display: none"
    }
}

pub fn overall_percent(state: &ViewState) -> u8 {
    percent(state.progress().completed_count(), state.catalog().total_items())
}

pub fn progress_background(state: &ViewState) -> String {
    format!("background: {}", conic_gradient(overall_percent(state)))
}

pub fn phase_count_label(state: &ViewState, phase: &Phase) -> String {
    phase_label(state.progress().completed_in(phase), phase.items.len())
}

pub fn render_learning(state: &ViewState) -> String {
    let mut m = Markup::new();
    m.el("section", &[("id", "learning"), ("class", "learning-path")], |m| {
        m.el("div", &[("class", "container")], |m| {
            m.el("div", &[("class", "section-header")], |m| {
                m.text_el("h2", &[("class", "section-title")], "Complete AI Learning Journey");
                m.text_el(
                    "p",
                    &[("class", "section-subtitle")],
                    "From Zero to AI Expert - A structured path designed from 3+ years of experience",
                );
                render_controls(m, state);
            });
            render_overview(m, state);
            m.el("div", &[("id", "learning-content"), ("class", "learning-content")], |m| {
                for phase in state.catalog().phases() {
                    render_phase(m, state, phase);
                }
            });
        });
    });
    m.into_string()
}

fn render_controls(m: &mut Markup, state: &ViewState) {
    let search_control = ControlId::Search.to_string();
    let clear_control = ControlId::ClearProgress.to_string();

    m.el("div", &[("class", "learning-controls")], |m| {
        m.el("div", &[("class", "search-box")], |m| {
            m.icon("fas fa-search");
            m.void(
                "input",
                &[
                    ("id", ids::SEARCH),
                    ("type", "text"),
                    ("placeholder", "Search learning resources..."),
                    ("value", state.filter().search.as_str()),
                    ("data-control", search_control.as_str()),
                ],
            );
        });
        m.el("div", &[("class", "filter-buttons")], |m| {
            for option in DifficultyFilter::options() {
                let id = ids::filter(option);
                let class = filter_class(state, option);
                let control = ControlId::Filter(option).to_string();
                m.text_el(
                    "button",
                    &[
                        ("id", id.as_str()),
                        ("class", class.as_str()),
                        ("data-difficulty", option.as_str()),
                        ("data-control", control.as_str()),
                    ],
                    option.label(),
                );
            }
        });
        m.text_el(
            "button",
            &[("class", "btn btn-outline"), ("data-control", clear_control.as_str())],
            "Reset Progress",
        );
    });
}

fn render_overview(m: &mut Markup, state: &ViewState) {
    let pct = overall_percent(state);
    let pct_attr = pct.to_string();
    let pct_text = format!("{}%", pct);
    let background = progress_background(state);
    let completed = state.progress().completed_count().to_string();
    let bookmarked = state.progress().bookmarked_count().to_string();

    m.el("div", &[("class", "progress-overview")], |m| {
        m.el("div", &[("class", "progress-stats")], |m| {
            m.el("div", &[("class", "progress-item")], |m| {
                m.el(
                    "div",
                    &[
                        ("id", ids::PROGRESS_CIRCLE),
                        ("class", "progress-circle"),
                        ("data-progress", pct_attr.as_str()),
                        ("style", background.as_str()),
                    ],
                    |m| {
                        m.text_el("span", &[("id", ids::PROGRESS_TEXT), ("class", "progress-text")], &pct_text);
                    },
                );
                m.text_el("span", &[("class", "progress-label")], "Overall Progress");
            });
            m.el("div", &[("class", "progress-item")], |m| {
                m.text_el("div", &[("id", ids::COMPLETED_COUNT), ("class", "progress-number")], &completed);
                m.text_el("span", &[("class", "progress-label")], "Completed Resources");
            });
            m.el("div", &[("class", "progress-item")], |m| {
                m.text_el("div", &[("id", ids::BOOKMARKED_COUNT), ("class", "progress-number")], &bookmarked);
                m.text_el("span", &[("class", "progress-label")], "Bookmarked");
            });
        });
    });
}

fn render_phase(m: &mut Markup, state: &ViewState, phase: &Phase) {
    let phase_id = phase.id.to_string();
    let header_style = format!("background: {}", phase_gradient(phase.color));
    let number = format!("{:02}", phase.id);
    let count_id = ids::phase_count(phase.id);
    let count = phase_count_label(state, phase);

    m.el("div", &[("class", "phase-card"), ("data-phase", phase_id.as_str())], |m| {
        m.el("div", &[("class", "phase-header"), ("style", header_style.as_str())], |m| {
            m.el("div", &[("class", "phase-icon")], |m| {
                m.icon(phase.icon);
            });
            m.el("div", &[("class", "phase-info")], |m| {
                m.text_el("h3", &[("class", "phase-title")], phase.title);
                m.text_el("p", &[("class", "phase-description")], phase.description);
            });
            m.text_el("span", &[("id", count_id.as_str()), ("class", "phase-progress")], &count);
            m.text_el("div", &[("class", "phase-number")], &number);
        });
        m.el("div", &[("class", "phase-content")], |m| {
            for item in &phase.items {
                render_item(m, state, item);
            }
        });
    });
}

fn render_item(m: &mut Markup, state: &ViewState, item: &LearningItem) {
    let id: &ItemId = &item.id;
    let done = state.progress().is_completed(id);
    let marked = state.progress().is_bookmarked(id);
    let visible = state.filter().is_visible(item);

    let card_id = ids::item(id);
    let complete_id = ids::complete(id);
    let bookmark_id = ids::bookmark(id);
    let complete_cls = complete_class(done);
    let bookmark_cls = bookmark_class(marked);
    let complete_control = ControlId::ToggleComplete(id.clone()).to_string();
    let bookmark_control = ControlId::ToggleBookmark(id.clone()).to_string();
    let badge = format!("difficulty-badge {}", item.difficulty.as_str());

    m.el(
        "div",
        &[
            ("id", card_id.as_str()),
            ("class", "learning-item"),
            ("data-difficulty", item.difficulty.as_str()),
            ("data-item-id", id.as_str()),
            ("style", item_style(visible)),
        ],
        |m| {
            m.el("div", &[("class", "item-header")], |m| {
                m.el("div", &[("class", "item-status")], |m| {
                    m.el(
                        "button",
                        &[
                            ("id", complete_id.as_str()),
                            ("class", complete_cls.as_str()),
                            ("title", complete_title(done)),
                            ("data-control", complete_control.as_str()),
                        ],
                        |m| {
                            m.icon("fas fa-check");
                        },
                    );
                    m.el(
                        "button",
                        &[
                            ("id", bookmark_id.as_str()),
                            ("class", bookmark_cls.as_str()),
                            ("title", bookmark_title(marked)),
                            ("data-control", bookmark_control.as_str()),
                        ],
                        |m| {
                            m.icon("fas fa-bookmark");
                        },
                    );
                });
                m.el("div", &[("class", "item-info")], |m| {
                    m.text_el("h4", &[("class", "item-title")], item.title);
                    m.text_el("p", &[("class", "item-description")], item.description);
                    m.el("div", &[("class", "item-meta")], |m| {
                        m.text_el("span", &[("class", badge.as_str())], item.difficulty.as_str());
                        m.el("span", &[("class", "time-estimate")], |m| {
                            m.icon("fas fa-clock");
                            m.text(item.estimated_time);
                        });
                    });
                });
            });
            m.el("div", &[("class", "item-links")], |m| {
                for (n, link) in item.links.iter().enumerate() {
                    let control = ControlId::Link(id.clone(), n).to_string();
                    m.el(
                        "a",
                        &[
                            ("class", "resource-link"),
                            ("href", link.url),
                            ("target", "_blank"),
                            ("rel", "noopener noreferrer"),
                            ("data-control", control.as_str()),
                        ],
                        |m| {
                            m.icon(link.icon);
                            m.text_el("span", &[], link.title);
                            m.icon("fas fa-external-link-alt");
                        },
                    );
                }
            });
        },
    );
}
