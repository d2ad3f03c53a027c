//! Whole-page composition for static export.

use super::header::render_header;
use super::learning::render_learning;
use super::notify::render_notifications;
use super::projects::render_projects;
use super::{class_list, ids, Markup};
use crate::bindings::ControlId;
use crate::catalog::builtin::{BRAND_NAME, HERO_DESCRIPTION, HERO_ROLES, HERO_STATS, SECTIONS, TYPING_TEXT};
use crate::contact::{Field, Notification};
use crate::state::{Theme, ViewState};

pub fn body_class(theme: Theme) -> String {
    class_list("", &[("light-theme", theme == Theme::Light)])
}

pub fn render_page(state: &ViewState, notification: Option<&Notification>) -> String {
    let body_class = body_class(state.theme());
    let mut m = Markup::new();
    m.raw("<!DOCTYPE html>");
    m.el("html", &[("lang", "en")], |m| {
        m.el("head", &[], |m| {
            m.void("meta", &[("charset", "utf-8")]);
            m.void("meta", &[("name", "viewport"), ("content", "width=device-width, initial-scale=1.0")]);
            m.text_el("title", &[], BRAND_NAME);
            m.void("link", &[("rel", "stylesheet"), ("href", "styles.css")]);
        });
        m.el(
            "body",
            &[
                ("id", ids::PAGE),
                ("class", body_class.as_str()),
                ("data-theme", state.theme().as_str()),
            ],
            |m| {
                m.raw(&render_header(state));
                m.el("main", &[], |m| {
                    render_hero(m);
                    m.raw(&render_learning(state));
                    for section in SECTIONS.iter().filter(|s| !matches!(s.id, "home" | "learning" | "contact")) {
                        if section.id == "projects" {
                            m.raw(&render_projects(state));
                            continue;
                        }
                        m.el("section", &[("id", section.id), ("class", "section")], |m| {
                            m.el("h2", &[("class", "section-title")], |m| {
                                m.icon(section.icon);
                                m.text(section.label);
                            });
                        });
                    }
                    render_contact(m);
                });
                m.raw(&render_notifications(notification));
            },
        );
    });
    m.into_string()
}

fn render_hero(m: &mut Markup) {
    m.el("section", &[("id", "home"), ("class", "hero")], |m| {
        m.el("canvas", &[("id", "particles-canvas"), ("class", "particles-canvas")], |_| {});
        m.el("div", &[("class", "hero-content")], |m| {
            m.el("div", &[("class", "typing-container")], |m| {
                m.text_el("span", &[("id", "typing-text"), ("class", "typing-text")], TYPING_TEXT);
            });
            m.text_el("h1", &[("class", "hero-name")], BRAND_NAME);
            m.el("div", &[("class", "hero-roles")], |m| {
                for (i, role) in HERO_ROLES.iter().enumerate() {
                    let class = class_list("role", &[("active", i == 0)]);
                    m.text_el("span", &[("class", class.as_str())], role);
                }
            });
            m.text_el("p", &[("class", "hero-description")], HERO_DESCRIPTION);
            m.el("div", &[("class", "hero-stats")], |m| {
                for (value, label) in HERO_STATS {
                    m.el("div", &[("class", "stat-card")], |m| {
                        m.text_el("div", &[("class", "stat-number")], value);
                        m.text_el("div", &[("class", "stat-label")], label);
                    });
                }
            });
        });
    });
}

fn render_contact(m: &mut Markup) {
    let submit_control = ControlId::ContactSubmit.to_string();
    m.el("section", &[("id", "contact"), ("class", "contact")], |m| {
        m.text_el("h2", &[("class", "section-title")], "Get In Touch");
        m.el("form", &[("id", "contact-form"), ("class", "contact-form")], |m| {
            for field in [Field::Name, Field::Email, Field::Subject] {
                let kind = if field == Field::Email { "email" } else { "text" };
                m.void(
                    "input",
                    &[
                        ("name", field.as_str()),
                        ("type", kind),
                        ("placeholder", placeholder(field)),
                    ],
                );
            }
            m.el(
                "textarea",
                &[("name", Field::Message.as_str()), ("placeholder", placeholder(Field::Message))],
                |_| {},
            );
            m.el(
                "button",
                &[("type", "submit"), ("class", "btn btn-primary"), ("data-control", submit_control.as_str())],
                |m| {
                    m.icon("fas fa-paper-plane");
                    m.text_el("span", &[], "Send Message");
                },
            );
        });
    });
}

pub fn placeholder(field: Field) -> &'static str {
    match field {
        Field::Name => "Your Name",
        Field::Email => "Your Email",
        Field::Subject => "Subject",
        Field::Message => "Your Message",
    }
}
