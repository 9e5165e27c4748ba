//! Browser implementation of [`Dom`] over `web_sys::Document`.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlCollection, Node};

use super::Dom;
use crate::error::{FolioError, Result};

/// Live page document.
#[derive(Clone)]
pub struct WebDom {
    document: Document,
}

impl WebDom {
    #[must_use]
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    /// The window's document, if there is one.
    #[must_use]
    pub fn current() -> Option<Self> {
        web_sys::window().and_then(|w| w.document()).map(Self::new)
    }

    #[must_use]
    pub fn document(&self) -> &Document {
        &self.document
    }
}

fn collection_to_vec(collection: &HtmlCollection) -> Vec<Element> {
    (0..collection.length()).filter_map(|i| collection.item(i)).collect()
}

impl Dom for WebDom {
    type Node = Element;

    fn root(&self) -> Option<Element> {
        self.document.document_element()
    }

    fn by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn all_by_class(&self, class: &str) -> Vec<Element> {
        collection_to_vec(&self.document.get_elements_by_class_name(class))
    }

    fn find_in(&self, scope: &Element, class: &str) -> Option<Element> {
        scope.get_elements_by_class_name(class).item(0)
    }

    fn all_with_attributes(&self, names: &[&str]) -> Vec<Element> {
        let selector: String = names.iter().map(|name| format!("[{name}]")).collect();
        let list = match self.document.query_selector_all(&selector) {
            Ok(list) => list,
            Err(err) => {
                log::warn!("query {selector} failed: {err:?}");
                return Vec::new();
            }
        };
        // Selector matches are always elements.
        (0..list.length())
            .filter_map(|i| list.get(i))
            .map(JsCast::unchecked_into::<Element>)
            .collect()
    }

    fn attribute(&self, node: &Element, name: &str) -> Option<String> {
        node.get_attribute(name)
    }

    fn has_attribute(&self, node: &Element, name: &str) -> bool {
        node.has_attribute(name)
    }

    fn set_attribute(&mut self, node: &Element, name: &str, value: &str) -> Result<()> {
        node.set_attribute(name, value)
            .map_err(|err| FolioError::dom(&format!("set {name}"), &err))
    }

    fn child_elements(&self, node: &Element) -> Vec<Element> {
        collection_to_vec(&node.children())
    }

    fn text_content(&self, node: &Element) -> String {
        node.text_content().unwrap_or_default()
    }

    fn set_text_content(&mut self, node: &Element, text: &str) {
        node.set_text_content(Some(text));
    }

    fn remove_own_text(&mut self, node: &Element) -> Result<()> {
        let children = node.child_nodes();
        // `childNodes` is live; collect before detaching.
        let text_nodes: Vec<Node> = (0..children.length())
            .filter_map(|i| children.get(i))
            .filter(|child| child.node_type() == Node::TEXT_NODE)
            .collect();
        for text in text_nodes {
            node.remove_child(&text)
                .map_err(|err| FolioError::dom("remove text node", &err))?;
        }
        Ok(())
    }

    fn has_class(&self, node: &Element, class: &str) -> bool {
        node.class_list().contains(class)
    }

    fn set_class(&mut self, node: &Element, class: &str, present: bool) -> Result<()> {
        let list = node.class_list();
        let outcome = if present { list.add_1(class) } else { list.remove_1(class) };
        outcome.map_err(|err| FolioError::dom(&format!("class {class}"), &err))
    }
}
