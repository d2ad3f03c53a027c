use crate::dom::{DomNode, DomTree};
use scraper::{ElementRef, Html, Node};
use std::collections::BTreeMap;

/// Parse a full HTML document into a DomTree rooted at `<html>`.
///
/// Comments and whitespace-only text are dropped; everything else is kept
/// so the tree can be patched and serialised back out.
pub fn parse_html(html: &str) -> DomTree {
    let document = Html::parse_document(html);

    let title = scraper::Selector::parse("title")
        .ok()
        .and_then(|sel| document.select(&sel).next())
        .map(|el| el.text().collect::<String>())
        .unwrap_or_default();

    let root = convert_element(document.root_element());

    DomTree {
        root,
        title: title.trim().to_string(),
    }
}

/// Parse a fragment (no `<html>`/`<body>` wrapper) into a document node
/// holding the top-level elements.
pub fn parse_fragment(html: &str) -> DomNode {
    let fragment = Html::parse_fragment(html);
    // html5ever wraps fragments in a synthetic <html> element.
    let wrapper = convert_element(fragment.root_element());
    DomNode::document(wrapper.children)
}

fn convert_element(el: ElementRef<'_>) -> DomNode {
    let tag = el.value().name.local.as_ref().to_string();
    let attributes: BTreeMap<String, String> = el
        .value()
        .attrs()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

    let mut children = Vec::new();

    for child_ref in el.children() {
        match child_ref.value() {
            Node::Element(_) => {
                if let Some(child_el) = ElementRef::wrap(child_ref) {
                    children.push(convert_element(child_el));
                }
            }
            Node::Text(t) => {
                let s = t.text.to_string();
                if !s.trim().is_empty() {
                    children.push(DomNode::text(s));
                }
            }
            _ => {}
        }
    }

    DomNode::element(tag, attributes, children)
}
