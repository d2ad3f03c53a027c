use super::{class_list, ids, Markup};
use crate::bindings::ControlId;
use crate::catalog::builtin::{BRAND_INITIALS, BRAND_NAME};
use crate::state::ViewState;

/// Placeholder avatar shown until a profile picture is uploaded.
pub fn placeholder_avatar(size: u32) -> String {
    format!(
        "https://via.placeholder.com/{0}x{0}/667eea/ffffff?text={1}",
        size, BRAND_INITIALS
    )
}

pub const BRAND_LOGO_SIZE: u32 = 40;
pub const PROFILE_IMAGE_SIZE: u32 = 45;

/// `src` for a profile image slot of the given size.
pub fn avatar_src(state: &ViewState, size: u32) -> String {
    state
        .profile_image()
        .map(str::to_string)
        .unwrap_or_else(|| placeholder_avatar(size))
}

pub fn header_class(state: &ViewState) -> String {
    class_list("header", &[("scrolled", state.nav().scrolled)])
}

pub fn nav_menu_class(state: &ViewState) -> String {
    class_list("nav-menu", &[("active", state.nav().menu_open)])
}

pub fn mobile_toggle_class(state: &ViewState) -> String {
    class_list("mobile-toggle", &[("active", state.nav().menu_open)])
}

pub fn nav_link_class(state: &ViewState, section: &str) -> String {
    class_list("nav-link", &[("active", state.nav().active_section == section)])
}

/// Fixed header: brand, section links, theme toggle, profile picture,
/// mobile menu button.
pub fn render_header(state: &ViewState) -> String {
    let mut m = Markup::new();
    let brand_src = avatar_src(state, BRAND_LOGO_SIZE);
    let profile_src = avatar_src(state, PROFILE_IMAGE_SIZE);
    let header_class = header_class(state);
    let menu_class = nav_menu_class(state);
    let toggle_class = mobile_toggle_class(state);
    let theme_control = ControlId::ThemeToggle.to_string();
    let upload_control = ControlId::ProfileUpload.to_string();
    let mobile_control = ControlId::MobileToggle.to_string();

    m.el("header", &[("id", ids::HEADER), ("class", header_class.as_str())], |m| {
        m.el("nav", &[("class", "navbar")], |m| {
            m.el("div", &[("class", "nav-container")], |m| {
                m.el("div", &[("class", "nav-brand")], |m| {
                    m.void(
                        "img",
                        &[
                            ("id", ids::BRAND_LOGO),
                            ("class", "brand-logo"),
                            ("alt", BRAND_NAME),
                            ("src", brand_src.as_str()),
                        ],
                    );
                    m.text_el("span", &[("class", "brand-text")], BRAND_NAME);
                });

                m.el("ul", &[("id", ids::NAV_MENU), ("class", menu_class.as_str())], |m| {
                    for section in state.sections() {
                        let href = format!("#{}", section.id);
                        let control = ControlId::Nav(section.id.to_string()).to_string();
                        let link_id = ids::nav(section.id);
                        let link_class = nav_link_class(state, section.id);
                        m.el("li", &[("class", "nav-item")], |m| {
                            m.el(
                                "a",
                                &[
                                    ("id", link_id.as_str()),
                                    ("href", href.as_str()),
                                    ("class", link_class.as_str()),
                                    ("data-control", control.as_str()),
                                ],
                                |m| {
                                    m.icon(section.icon);
                                    m.text_el("span", &[], section.label);
                                },
                            );
                        });
                    }
                });

                m.el("div", &[("class", "nav-actions")], |m| {
                    m.el(
                        "button",
                        &[
                            ("class", "theme-toggle"),
                            ("aria-label", "Toggle theme"),
                            ("data-control", theme_control.as_str()),
                        ],
                        |m| {
                            m.el(
                                "i",
                                &[("id", ids::THEME_ICON), ("class", state.theme().toggle_icon())],
                                |_| {},
                            );
                        },
                    );
                    m.el("div", &[("class", "profile-upload")], |m| {
                        m.void(
                            "img",
                            &[
                                ("id", ids::PROFILE_IMAGE),
                                ("class", "profile-image"),
                                ("alt", "Profile"),
                                ("src", profile_src.as_str()),
                            ],
                        );
                        m.el(
                            "button",
                            &[
                                ("class", "upload-btn"),
                                ("data-control", upload_control.as_str()),
                            ],
                            |m| {
                                m.icon("fas fa-camera");
                            },
                        );
                    });
                });

                m.el(
                    "button",
                    &[
                        ("id", ids::MOBILE_TOGGLE),
                        ("class", toggle_class.as_str()),
                        ("data-control", mobile_control.as_str()),
                    ],
                    |m| {
                        for _ in 0..3 {
                            m.el("span", &[("class", "hamburger-line")], |_| {});
                        }
                    },
                );
            });
        });
    });

    m.into_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures;
    use crate::state::Theme;
    use crate::store::MemoryStore;
    use scraper::{Html, Selector};

    fn state() -> ViewState {
        ViewState::load(fixtures::small(), Box::new(MemoryStore::new()))
    }

    fn select<'a>(doc: &'a Html, css: &str) -> Vec<scraper::ElementRef<'a>> {
        let sel = Selector::parse(css).unwrap();
        doc.select(&sel).collect()
    }

    #[test]
    fn one_active_nav_link() {
        let mut vs = state();
        vs.navigate_to("learning");
        let doc = Html::parse_fragment(&render_header(&vs));
        let active = select(&doc, "a.nav-link.active");
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].value().attr("href"), Some("#learning"));
        assert_eq!(select(&doc, "a.nav-link").len(), vs.sections().len());
    }

    #[test]
    fn theme_icon_follows_theme() {
        let mut vs = state();
        let doc = Html::parse_fragment(&render_header(&vs));
        assert_eq!(select(&doc, "#theme-icon.fa-moon").len(), 1);

        vs.set_theme(Theme::Light);
        let doc = Html::parse_fragment(&render_header(&vs));
        assert_eq!(select(&doc, "#theme-icon.fa-sun").len(), 1);
    }

    #[test]
    fn placeholder_until_uploaded() {
        let mut vs = state();
        let doc = Html::parse_fragment(&render_header(&vs));
        let src = select(&doc, "#profile-image")[0].value().attr("src").unwrap().to_string();
        assert!(src.contains("45x45"));

        vs.set_profile_image(&crate::profile::tiny_png(1, 1)).unwrap();
        let doc = Html::parse_fragment(&render_header(&vs));
        for id in ["#profile-image", "#brand-logo"] {
            let src = select(&doc, id)[0].value().attr("src").unwrap();
            assert!(src.starts_with("data:image/png;base64,"));
        }
    }

    #[test]
    fn menu_classes() {
        let mut vs = state();
        vs.toggle_mobile_menu();
        let doc = Html::parse_fragment(&render_header(&vs));
        assert_eq!(select(&doc, "#nav-menu.active").len(), 1);
        assert_eq!(select(&doc, "#mobile-toggle.active").len(), 1);
        assert_eq!(select(&doc, "#header.scrolled").len(), 0);
    }
}
