//! Render/Reconciliation Layer.
//!
//! Pure functions from `ViewState` to HTML. Every element that a later
//! state change can affect carries a stable `id`; [`reconcile`] turns a
//! [`Stale`](crate::state::Stale) mask into targeted patches against
//! those ids instead of re-rendering the page.

pub mod color;
pub mod header;
pub mod learning;
pub mod mirror;
pub mod notify;
pub mod page;
pub mod progress;
pub mod projects;
pub mod reconcile;

pub use mirror::PageMirror;
pub use page::render_page;
pub use reconcile::{patches, Patch};

/// Element ids shared by the renderers and the reconciler.
pub mod ids {
    use crate::catalog::ItemId;
    use crate::state::{CategoryFilter, DifficultyFilter};

    pub const PAGE: &str = "page";
    pub const HEADER: &str = "header";
    pub const NAV_MENU: &str = "nav-menu";
    pub const MOBILE_TOGGLE: &str = "mobile-toggle";
    pub const THEME_ICON: &str = "theme-icon";
    pub const BRAND_LOGO: &str = "brand-logo";
    pub const PROFILE_IMAGE: &str = "profile-image";
    pub const SEARCH: &str = "learning-search";
    pub const PROGRESS_CIRCLE: &str = "progress-circle";
    pub const PROGRESS_TEXT: &str = "progress-text";
    pub const COMPLETED_COUNT: &str = "completed-count";
    pub const BOOKMARKED_COUNT: &str = "bookmarked-count";
    pub const NOTIFICATIONS: &str = "notifications";

    pub fn nav(section: &str) -> String {
        format!("nav-{}", section)
    }

    pub fn item(id: &ItemId) -> String {
        format!("item-{}", id)
    }

    pub fn complete(id: &ItemId) -> String {
        format!("complete-{}", id)
    }

    pub fn bookmark(id: &ItemId) -> String {
        format!("bookmark-{}", id)
    }

    pub fn filter(f: DifficultyFilter) -> String {
        format!("filter-{}", f.as_str())
    }

    pub fn project(index: usize) -> String {
        format!("project-{}", index)
    }

    pub fn project_filter(f: CategoryFilter) -> String {
        format!("project-filter-{}", f.as_str())
    }

    pub fn phase_count(phase: u32) -> String {
        format!("phase-{}-count", phase)
    }
}

/// Escape text content.
pub fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape a double-quoted attribute value.
pub fn escape_attr(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// Elements that never have children or a closing tag.
pub const VOID_ELEMENTS: &[&str] = &["area", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "wbr"];

/// Join a base class with conditional modifiers, in order.
pub fn class_list(base: &str, modifiers: &[(&str, bool)]) -> String {
    let mut out = base.to_string();
    for (class, on) in modifiers {
        if *on {
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str(class);
        }
    }
    out
}

/// Minimal HTML writer. Attribute values and text are escaped; empty
/// `class`/`style` attributes are omitted so rendered and patched trees
/// serialise identically.
#[derive(Debug, Default)]
pub struct Markup {
    buf: String,
}

impl Markup {
    pub fn new() -> Self {
        Self::default()
    }

    /// `<tag attrs>body</tag>`
    pub fn el(&mut self, tag: &str, attrs: &[(&str, &str)], body: impl FnOnce(&mut Self)) -> &mut Self {
        self.open(tag, attrs);
        body(self);
        self.buf.push_str("</");
        self.buf.push_str(tag);
        self.buf.push('>');
        self
    }

    /// Element whose only child is `text`.
    pub fn text_el(&mut self, tag: &str, attrs: &[(&str, &str)], text: &str) -> &mut Self {
        self.el(tag, attrs, |m| {
            m.text(text);
        })
    }

    pub fn void(&mut self, tag: &str, attrs: &[(&str, &str)]) -> &mut Self {
        self.open(tag, attrs);
        self
    }

    pub fn text(&mut self, text: &str) -> &mut Self {
        self.buf.push_str(&escape_text(text));
        self
    }

    /// Icon font glyph: `<i class="..."></i>`.
    pub fn icon(&mut self, class: &str) -> &mut Self {
        self.el("i", &[("class", class)], |_| {})
    }

    /// Pre-rendered, trusted markup.
    pub fn raw(&mut self, html: &str) -> &mut Self {
        self.buf.push_str(html);
        self
    }

    pub fn into_string(self) -> String {
        self.buf
    }

    fn open(&mut self, tag: &str, attrs: &[(&str, &str)]) {
        self.buf.push('<');
        self.buf.push_str(tag);
        for (name, value) in attrs {
            if value.is_empty() && matches!(*name, "class" | "style") {
                continue;
            }
            self.buf.push(' ');
            self.buf.push_str(name);
            self.buf.push_str("=\"");
            self.buf.push_str(&escape_attr(value));
            self.buf.push('"');
        }
        self.buf.push('>');
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_text_and_attrs() {
        assert_eq!(escape_text("a < b & c"), "a &lt; b &amp; c");
        assert_eq!(escape_attr(r#"say "hi""#), "say &quot;hi&quot;");
    }

    #[test]
    fn nested_elements() {
        let mut m = Markup::new();
        m.el("div", &[("id", "x"), ("class", "")], |m| {
            m.text_el("span", &[], "1 < 2");
            m.void("img", &[("src", "a.png")]);
        });
        assert_eq!(m.into_string(), r#"<div id="x"><span>1 &lt; 2</span><img src="a.png"></div>"#);
    }

    #[test]
    fn class_modifiers_in_order() {
        assert_eq!(class_list("btn", &[("completed", true), ("x", false)]), "btn completed");
        assert_eq!(class_list("", &[("light-theme", false)]), "");
        assert_eq!(class_list("", &[("light-theme", true)]), "light-theme");
    }
}
