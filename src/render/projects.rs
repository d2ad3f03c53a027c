//! Projects section: category filter bar and one card per project.

use super::learning::item_style;
use super::{class_list, ids, Markup};
use crate::bindings::ControlId;
use crate::catalog::ProjectSpec;
use crate::state::{CategoryFilter, ViewState};

pub fn project_filter_class(state: &ViewState, option: CategoryFilter) -> String {
    class_list("filter-btn", &[("active", state.filter().category == option)])
}

pub fn render_projects(state: &ViewState) -> String {
    let mut m = Markup::new();
    m.el("section", &[("id", "projects"), ("class", "section projects")], |m| {
        m.el("div", &[("class", "container")], |m| {
            m.el("h2", &[("class", "section-title")], |m| {
                m.icon("fas fa-code");
                m.text("Featured Projects");
            });
            m.el("div", &[("class", "project-filters")], |m| {
                for option in CategoryFilter::options() {
                    let id = ids::project_filter(option);
                    let class = project_filter_class(state, option);
                    let control = ControlId::ProjectFilter(option).to_string();
                    m.text_el(
                        "button",
                        &[
                            ("id", id.as_str()),
                            ("class", class.as_str()),
                            ("data-filter", option.as_str()),
                            ("data-control", control.as_str()),
                        ],
                        option.label(),
                    );
                }
            });
            m.el("div", &[("class", "projects-grid")], |m| {
                for (index, project) in state.projects().iter().enumerate() {
                    render_card(m, state, index, project);
                }
            });
        });
    });
    m.into_string()
}

fn render_card(m: &mut Markup, state: &ViewState, index: usize, project: &ProjectSpec) {
    let card_id = ids::project(index);
    let visible = state.filter().is_project_visible(project);
    let status = project.status.as_str();
    let status_class = format!("project-status {}", status);

    m.el(
        "div",
        &[
            ("id", card_id.as_str()),
            ("class", "project-card"),
            ("data-category", project.category.as_str()),
            ("style", item_style(visible)),
        ],
        |m| {
            m.el("div", &[("class", "project-header")], |m| {
                m.text_el("div", &[("class", status_class.as_str())], status);
            });
            m.el("div", &[("class", "project-content")], |m| {
                m.text_el("h3", &[("class", "project-title")], project.title);
                m.text_el("p", &[("class", "project-description")], project.description);
                m.el("div", &[("class", "project-metrics")], |m| {
                    for (label, value) in project.metrics {
                        m.el("div", &[("class", "metric")], |m| {
                            m.text_el("span", &[("class", "metric-value")], value);
                            m.text_el("span", &[("class", "metric-label")], label);
                        });
                    }
                });
                m.el("div", &[("class", "project-technologies")], |m| {
                    for tech in project.technologies {
                        m.text_el("span", &[("class", "tech-tag")], tech);
                    }
                });
            });
        },
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{fixtures, ProjectCategory};
    use crate::store::MemoryStore;
    use scraper::{Html, Selector};

    fn state() -> ViewState {
        ViewState::load(fixtures::small(), Box::new(MemoryStore::new()))
    }

    #[test]
    fn all_cards_shown_by_default() {
        let vs = state();
        let doc = Html::parse_fragment(&render_projects(&vs));
        let cards = Selector::parse(".project-card").unwrap();
        assert_eq!(doc.select(&cards).count(), vs.projects().len());
        assert!(doc.select(&cards).all(|c| c.value().attr("style").is_none()));

        let active = Selector::parse("#project-filter-all.active").unwrap();
        assert_eq!(doc.select(&active).count(), 1);
    }

    #[test]
    fn category_hides_other_cards() {
        let mut vs = state();
        vs.set_project_filter(CategoryFilter::Only(ProjectCategory::Nlp));
        let doc = Html::parse_fragment(&render_projects(&vs));

        let shown = Selector::parse(r#".project-card[data-category="nlp"]"#).unwrap();
        assert!(doc.select(&shown).all(|c| c.value().attr("style").is_none()));
        let hidden = Selector::parse(r#".project-card[style="display: none"]"#).unwrap();
        let expected = vs
            .projects()
            .iter()
            .filter(|p| p.category != ProjectCategory::Nlp)
            .count();
        assert_eq!(doc.select(&hidden).count(), expected);
        assert_eq!(doc.select(&Selector::parse("#project-filter-nlp.active").unwrap()).count(), 1);
    }
}
