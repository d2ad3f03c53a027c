use std::fmt;

use super::css::{remove_property, set_property};
use super::{DomNode, DomTree};
use crate::render::Patch;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatchError {
    /// No element carries the patch's target id.
    MissingTarget(String),
}

impl fmt::Display for PatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatchError::MissingTarget(id) => write!(f, "no element with id {:?}", id),
        }
    }
}

impl std::error::Error for PatchError {}

fn set_style(node: &mut DomNode, property: &str, value: Option<&str>) {
    let current = node.attr("style").unwrap_or("");
    let style = match value {
        Some(v) => set_property(current, property, v),
        None => remove_property(current, property),
    };
    if style.is_empty() {
        node.remove_attr("style");
    } else {
        node.set_attr("style", style);
    }
}

impl DomTree {
    pub fn apply(&mut self, patch: &Patch) -> Result<(), PatchError> {
        let node = self
            .find_by_id_mut(patch.target())
            .ok_or_else(|| PatchError::MissingTarget(patch.target().to_string()))?;

        match patch {
            Patch::SetText { text, .. } => node.set_text(text.as_str()),
            Patch::SetAttr { name, value, .. } => node.set_attr(name, value.as_str()),
            Patch::ToggleClass { class, on, .. } => node.set_class(class, *on),
            Patch::SetStyle { property, value, .. } => set_style(node, property, Some(value.as_str())),
            Patch::SetHidden { hidden, .. } => {
                set_style(node, "display", hidden.then_some("none"));
            }
        }
        Ok(())
    }

    /// Apply every patch. A missing target is logged and skipped so one
    /// stale id cannot stall the rest of the update; the count of applied
    /// patches is returned.
    pub fn apply_all(&mut self, patches: &[Patch]) -> usize {
        let mut applied = 0;
        for patch in patches {
            match self.apply(patch) {
                Ok(()) => applied += 1,
                Err(e) => log::warn!("Patch skipped: {}", e),
            }
        }
        applied
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::parse_html;

    fn tree() -> DomTree {
        parse_html(
            r#"<html><body id="page"><span id="n">0</span><div id="c" class="progress-circle" style="background: red"></div><div id="i" class="learning-item"></div></body></html>"#,
        )
    }

    #[test]
    fn text_attr_and_class() {
        let mut t = tree();
        t.apply(&Patch::SetText { id: "n".into(), text: "3".into() }).unwrap();
        t.apply(&Patch::SetAttr { id: "page".into(), name: "data-theme", value: "light".into() })
            .unwrap();
        t.apply(&Patch::ToggleClass { id: "page".into(), class: "light-theme", on: true })
            .unwrap();

        assert_eq!(t.find_by_id("n").unwrap().collect_text(), "3");
        let body = t.find_by_id("page").unwrap();
        assert_eq!(body.attr("data-theme"), Some("light"));
        assert!(body.has_class("light-theme"));
    }

    #[test]
    fn style_and_hidden() {
        let mut t = tree();
        t.apply(&Patch::SetStyle { id: "c".into(), property: "background", value: "blue".into() })
            .unwrap();
        assert_eq!(t.find_by_id("c").unwrap().attr("style"), Some("background: blue"));

        t.apply(&Patch::SetHidden { id: "i".into(), hidden: true }).unwrap();
        assert_eq!(t.find_by_id("i").unwrap().attr("style"), Some("display: none"));
        t.apply(&Patch::SetHidden { id: "i".into(), hidden: false }).unwrap();
        assert_eq!(t.find_by_id("i").unwrap().attr("style"), None);
    }

    #[test]
    fn missing_target_skipped() {
        let mut t = tree();
        let patches = vec![
            Patch::SetText { id: "gone".into(), text: "x".into() },
            Patch::SetText { id: "n".into(), text: "1".into() },
        ];
        assert_eq!(
            t.apply(&patches[0]),
            Err(PatchError::MissingTarget("gone".into()))
        );
        assert_eq!(t.apply_all(&patches), 1);
        assert_eq!(t.find_by_id("n").unwrap().collect_text(), "1");
    }
}
