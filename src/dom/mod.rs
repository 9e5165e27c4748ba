//! Document seam used by the controllers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Controllers only need a handful of lookups and mutations: find by id or
//! class, find every element carrying a set of attributes, read and write
//! attributes, classes and text. `Dom` names exactly that surface so the
//! translation and theme logic can run against the browser (`web::WebDom`)
//! or against [`mem::MemDocument`] in native tests.
//!
//! Lookups return `Option`/empty `Vec` for absent elements; callers treat
//! those as "nothing to do". Mutations return `Result` because the browser
//! can reject them.

pub mod mem;

#[cfg(feature = "hydrate")]
pub mod web;

use crate::error::Result;
use crate::prefs::Language;

/// Minimal element-tree interface.
pub trait Dom {
    /// Handle to an element. Cheap to clone.
    type Node: Clone;

    /// The document element (`<html>`).
    fn root(&self) -> Option<Self::Node>;

    fn by_id(&self, id: &str) -> Option<Self::Node>;

    /// Every element with `class` in its class list, in document order.
    fn all_by_class(&self, class: &str) -> Vec<Self::Node>;

    fn first_by_class(&self, class: &str) -> Option<Self::Node> {
        self.all_by_class(class).into_iter().next()
    }

    /// First descendant of `scope` with `class` in its class list.
    fn find_in(&self, scope: &Self::Node, class: &str) -> Option<Self::Node>;

    /// Every element carrying all of `names`, in document order.
    fn all_with_attributes(&self, names: &[&str]) -> Vec<Self::Node>;

    fn attribute(&self, node: &Self::Node, name: &str) -> Option<String>;

    fn has_attribute(&self, node: &Self::Node, name: &str) -> bool {
        self.attribute(node, name).is_some()
    }

    fn set_attribute(&mut self, node: &Self::Node, name: &str, value: &str) -> Result<()>;

    /// Immediate element children, skipping text nodes.
    fn child_elements(&self, node: &Self::Node) -> Vec<Self::Node>;

    /// Concatenated text of all descendants.
    fn text_content(&self, node: &Self::Node) -> String;

    /// Replace every child of `node` with a single text node.
    fn set_text_content(&mut self, node: &Self::Node, text: &str);

    /// Detach the text nodes directly under `node`, keeping element children.
    fn remove_own_text(&mut self, node: &Self::Node) -> Result<()>;

    fn has_class(&self, node: &Self::Node, class: &str) -> bool;

    /// Add (`present = true`) or remove `class`.
    fn set_class(&mut self, node: &Self::Node, class: &str, present: bool) -> Result<()>;
}

/// Whether `node` carries the text attribute of every language.
pub fn is_translatable<D: Dom>(dom: &D, node: &D::Node) -> bool {
    Language::ATTRIBUTES.iter().all(|name| dom.has_attribute(node, name))
}
