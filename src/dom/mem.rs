//! In-memory element tree implementing [`Dom`].
//!
//! Nodes live in an arena indexed by [`NodeId`]; detached nodes stay in the
//! arena but are unreachable from the root. The document starts as
//! `<html><body></body></html>` and is built up with [`MemDocument::element`]
//! and [`MemDocument::text`].

#[cfg(test)]
#[path = "mem_test.rs"]
mod mem_test;

use super::Dom;
use crate::error::Result;

/// Index of a node in a [`MemDocument`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

#[derive(Clone, Debug)]
enum NodeData {
    Element { tag: String, attrs: Vec<(String, String)>, children: Vec<NodeId> },
    Text(String),
}

/// Arena-backed document.
#[derive(Clone, Debug)]
pub struct MemDocument {
    nodes: Vec<NodeData>,
    root: NodeId,
    body: NodeId,
}

impl Default for MemDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl MemDocument {
    /// Empty `<html><body></body></html>` document.
    #[must_use]
    pub fn new() -> Self {
        let mut doc = Self { nodes: Vec::new(), root: NodeId(0), body: NodeId(0) };
        doc.root = doc.push(NodeData::Element { tag: "html".into(), attrs: Vec::new(), children: Vec::new() });
        doc.body = doc.element(doc.root, "body", &[]);
        doc
    }

    #[must_use]
    pub fn body(&self) -> NodeId {
        self.body
    }

    /// Append a new element under `parent` and return it.
    pub fn element(&mut self, parent: NodeId, tag: &str, attrs: &[(&str, &str)]) -> NodeId {
        let attrs = attrs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
        let id = self.push(NodeData::Element { tag: tag.to_ascii_lowercase(), attrs, children: Vec::new() });
        self.attach(parent, id);
        id
    }

    /// Append a text node under `parent`.
    pub fn text(&mut self, parent: NodeId, text: &str) -> NodeId {
        let id = self.push(NodeData::Text(text.to_owned()));
        self.attach(parent, id);
        id
    }

    /// Lowercase tag name, `None` for text nodes.
    #[must_use]
    pub fn tag(&self, node: NodeId) -> Option<&str> {
        match self.nodes.get(node.0)? {
            NodeData::Element { tag, .. } => Some(tag),
            NodeData::Text(_) => None,
        }
    }

    /// Serialize `node` and its subtree. Attributes keep insertion order.
    #[must_use]
    pub fn to_markup(&self, node: NodeId) -> String {
        let mut out = String::new();
        self.write_markup(node, &mut out);
        out
    }

    fn write_markup(&self, node: NodeId, out: &mut String) {
        let Some(data) = self.nodes.get(node.0) else {
            return;
        };
        match data {
            NodeData::Text(text) => out.push_str(&escape(text)),
            NodeData::Element { tag, attrs, children } => {
                out.push('<');
                out.push_str(tag);
                for (name, value) in attrs {
                    out.push_str(&format!(" {name}=\"{}\"", escape(value)));
                }
                out.push('>');
                for child in children {
                    self.write_markup(*child, out);
                }
                out.push_str(&format!("</{tag}>"));
            }
        }
    }

    fn push(&mut self, data: NodeData) -> NodeId {
        self.nodes.push(data);
        NodeId(self.nodes.len() - 1)
    }

    fn attach(&mut self, parent: NodeId, child: NodeId) {
        if let Some(NodeData::Element { children, .. }) = self.nodes.get_mut(parent.0) {
            children.push(child);
        }
    }

    fn children(&self, node: NodeId) -> &[NodeId] {
        match self.nodes.get(node.0) {
            Some(NodeData::Element { children, .. }) => children,
            _ => &[],
        }
    }

    fn attrs(&self, node: NodeId) -> &[(String, String)] {
        match self.nodes.get(node.0) {
            Some(NodeData::Element { attrs, .. }) => attrs,
            _ => &[],
        }
    }

    fn is_element(&self, node: NodeId) -> bool {
        matches!(self.nodes.get(node.0), Some(NodeData::Element { .. }))
    }

    /// Elements under `from` (inclusive) in document order.
    fn elements_from(&self, from: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack = vec![from];
        while let Some(node) = stack.pop() {
            if !self.is_element(node) {
                continue;
            }
            out.push(node);
            stack.extend(self.children(node).iter().rev().copied());
        }
        out
    }

    fn classes(&self, node: NodeId) -> Vec<String> {
        self.attribute(&node, "class")
            .map(|raw| raw.split_whitespace().map(str::to_owned).collect())
            .unwrap_or_default()
    }
}

fn escape(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

impl Dom for MemDocument {
    type Node = NodeId;

    fn root(&self) -> Option<NodeId> {
        Some(self.root)
    }

    fn by_id(&self, id: &str) -> Option<NodeId> {
        self.elements_from(self.root)
            .into_iter()
            .find(|node| self.attribute(node, "id").as_deref() == Some(id))
    }

    fn all_by_class(&self, class: &str) -> Vec<NodeId> {
        self.elements_from(self.root)
            .into_iter()
            .filter(|node| self.has_class(node, class))
            .collect()
    }

    fn find_in(&self, scope: &NodeId, class: &str) -> Option<NodeId> {
        self.elements_from(*scope)
            .into_iter()
            .skip(1)
            .find(|node| self.has_class(node, class))
    }

    fn all_with_attributes(&self, names: &[&str]) -> Vec<NodeId> {
        self.elements_from(self.root)
            .into_iter()
            .filter(|node| names.iter().all(|name| self.has_attribute(node, name)))
            .collect()
    }

    fn attribute(&self, node: &NodeId, name: &str) -> Option<String> {
        self.attrs(*node)
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.clone())
    }

    fn set_attribute(&mut self, node: &NodeId, name: &str, value: &str) -> Result<()> {
        if let Some(NodeData::Element { attrs, .. }) = self.nodes.get_mut(node.0) {
            match attrs.iter_mut().find(|(k, _)| k == name) {
                Some((_, existing)) => value.clone_into(existing),
                None => attrs.push((name.to_owned(), value.to_owned())),
            }
        }
        Ok(())
    }

    fn child_elements(&self, node: &NodeId) -> Vec<NodeId> {
        self.children(*node)
            .iter()
            .copied()
            .filter(|child| self.is_element(*child))
            .collect()
    }

    fn text_content(&self, node: &NodeId) -> String {
        match self.nodes.get(node.0) {
            Some(NodeData::Text(text)) => text.clone(),
            Some(NodeData::Element { children, .. }) => {
                children.iter().map(|child| self.text_content(child)).collect()
            }
            None => String::new(),
        }
    }

    fn set_text_content(&mut self, node: &NodeId, text: &str) {
        if !self.is_element(*node) {
            if let Some(NodeData::Text(existing)) = self.nodes.get_mut(node.0) {
                text.clone_into(existing);
            }
            return;
        }
        let replacement = if text.is_empty() { None } else { Some(self.push(NodeData::Text(text.to_owned()))) };
        if let Some(NodeData::Element { children, .. }) = self.nodes.get_mut(node.0) {
            children.clear();
            children.extend(replacement);
        }
    }

    fn remove_own_text(&mut self, node: &NodeId) -> Result<()> {
        let keep: Vec<NodeId> = self
            .children(*node)
            .iter()
            .copied()
            .filter(|child| self.is_element(*child))
            .collect();
        if let Some(NodeData::Element { children, .. }) = self.nodes.get_mut(node.0) {
            *children = keep;
        }
        Ok(())
    }

    fn has_class(&self, node: &NodeId, class: &str) -> bool {
        self.classes(*node).iter().any(|c| c == class)
    }

    fn set_class(&mut self, node: &NodeId, class: &str, present: bool) -> Result<()> {
        let mut classes = self.classes(*node);
        let had = classes.iter().any(|c| c == class);
        if present == had {
            return Ok(());
        }
        if present {
            classes.push(class.to_owned());
        } else {
            classes.retain(|c| c != class);
        }
        self.set_attribute(node, "class", &classes.join(" "))
    }
}
