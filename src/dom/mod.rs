//! Virtual DOM used as the reconciliation target.
//!
//! Rendered markup is parsed into a [`DomTree`] once; afterwards
//! [`Patch`](crate::render::Patch) lists are applied in place. Attributes
//! are kept sorted so two trees with the same content compare equal and
//! serialise identically regardless of edit order.

pub mod css;
pub mod parser;
pub mod patch;

pub use parser::parse_html;
pub use patch::PatchError;

use std::collections::BTreeMap;

use crate::render::{escape_attr, escape_text, VOID_ELEMENTS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeType {
    Document,
    Element,
    Text,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomNode {
    pub tag: String,
    pub attributes: BTreeMap<String, String>,
    pub text: String,
    pub children: Vec<DomNode>,
    pub node_type: NodeType,
}

impl DomNode {
    pub fn document(children: Vec<DomNode>) -> Self {
        Self {
            tag: "#document".into(),
            attributes: BTreeMap::new(),
            text: String::new(),
            children,
            node_type: NodeType::Document,
        }
    }

    pub fn element(
        tag: impl Into<String>,
        attrs: BTreeMap<String, String>,
        children: Vec<DomNode>,
    ) -> Self {
        Self {
            tag: tag.into(),
            attributes: attrs,
            text: String::new(),
            children,
            node_type: NodeType::Element,
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self {
            tag: String::new(),
            attributes: BTreeMap::new(),
            text: content.into(),
            children: Vec::new(),
            node_type: NodeType::Text,
        }
    }

    /// Recursively count all nodes in this subtree
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(|c| c.node_count()).sum::<usize>()
    }

    /// Collect all text content recursively
    pub fn collect_text(&self) -> String {
        let mut buf = String::new();
        self.collect_text_inner(&mut buf);
        buf
    }

    fn collect_text_inner(&self, buf: &mut String) {
        if !self.text.is_empty() {
            if !buf.is_empty() {
                buf.push(' ');
            }
            buf.push_str(self.text.trim());
        }
        for child in &self.children {
            child.collect_text_inner(buf);
        }
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(|s| s.as_str())
    }

    pub fn set_attr(&mut self, name: &str, value: impl Into<String>) {
        self.attributes.insert(name.to_string(), value.into());
    }

    pub fn remove_attr(&mut self, name: &str) {
        self.attributes.remove(name);
    }

    pub fn id(&self) -> Option<&str> {
        self.attr("id")
    }

    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.attr("class").unwrap_or("").split_whitespace()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes().any(|c| c == class)
    }

    /// Add or remove one class. New classes go last; removing the final
    /// class drops the attribute.
    pub fn set_class(&mut self, class: &str, on: bool) {
        if self.has_class(class) == on {
            return;
        }
        let mut list: Vec<String> = self.classes().map(str::to_string).collect();
        if on {
            list.push(class.to_string());
        } else {
            list.retain(|c| c != class);
        }
        if list.is_empty() {
            self.remove_attr("class");
        } else {
            self.set_attr("class", list.join(" "));
        }
    }

    /// Replace all children with one text node.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.children = vec![DomNode::text(text)];
    }

    pub fn find_by_id(&self, id: &str) -> Option<&DomNode> {
        if self.id() == Some(id) {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find_by_id(id))
    }

    pub fn find_by_id_mut(&mut self, id: &str) -> Option<&mut DomNode> {
        if self.id() == Some(id) {
            return Some(self);
        }
        self.children.iter_mut().find_map(|c| c.find_by_id_mut(id))
    }

    /// Every element in the subtree, depth first, that satisfies `pred`.
    pub fn find_all<'a>(&'a self, pred: &dyn Fn(&DomNode) -> bool, out: &mut Vec<&'a DomNode>) {
        if self.node_type == NodeType::Element && pred(self) {
            out.push(self);
        }
        for child in &self.children {
            child.find_all(pred, out);
        }
    }

    pub fn write_html(&self, buf: &mut String) {
        match self.node_type {
            NodeType::Text => buf.push_str(&escape_text(&self.text)),
            NodeType::Document => {
                for child in &self.children {
                    child.write_html(buf);
                }
            }
            NodeType::Element => {
                buf.push('<');
                buf.push_str(&self.tag);
                for (name, value) in &self.attributes {
                    buf.push(' ');
                    buf.push_str(name);
                    buf.push_str("=\"");
                    buf.push_str(&escape_attr(value));
                    buf.push('"');
                }
                buf.push('>');
                if VOID_ELEMENTS.contains(&self.tag.as_str()) {
                    return;
                }
                for child in &self.children {
                    child.write_html(buf);
                }
                buf.push_str("</");
                buf.push_str(&self.tag);
                buf.push('>');
            }
        }
    }

    pub fn to_html(&self) -> String {
        let mut buf = String::new();
        self.write_html(&mut buf);
        buf
    }
}

/// Parsed page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomTree {
    pub root: DomNode,
    pub title: String,
}

impl DomTree {
    pub fn find_by_id(&self, id: &str) -> Option<&DomNode> {
        self.root.find_by_id(id)
    }

    pub fn find_by_id_mut(&mut self, id: &str) -> Option<&mut DomNode> {
        self.root.find_by_id_mut(id)
    }

    /// Serialise as a complete HTML5 document.
    pub fn to_html(&self) -> String {
        let mut buf = String::from("<!DOCTYPE html>");
        self.root.write_html(&mut buf);
        buf
    }
}
