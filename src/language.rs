//! Language initialization, toggle and the translation pass.
//!
//! Translatable elements carry their full text in both `data-es` and
//! `data-en`. A pass visits every such element in document order and decides,
//! once per element, how to write the target text:
//!
//! - [`Translation::Leaf`]: no element children, the text is replaced.
//! - [`Translation::Opaque`]: element children, none translatable; the whole
//!   content is replaced and the children are discarded.
//! - [`Translation::Nested`]: some immediate child is itself translatable.
//!   Only the element's own text nodes are removed; the translatable
//!   children get their text from the same pass.
//!
//! Each write touches disjoint text, so the pass is order independent and
//! running it twice with the same language changes nothing.

#[cfg(test)]
#[path = "language_test.rs"]
mod language_test;

use crate::config::PageConfig;
use crate::dom::{Dom, is_translatable};
use crate::error::Result;
use crate::prefs::store::{PreferenceStore, load_or};
use crate::prefs::Language;

/// Root attribute carrying the document language.
pub const LANG_ATTRIBUTE: &str = "lang";

/// How a translatable element receives its target-language text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Translation {
    Leaf,
    Opaque,
    Nested,
}

impl Translation {
    /// Classify `node` by the shape of its immediate children.
    pub fn classify<D: Dom>(dom: &D, node: &D::Node) -> Self {
        let children = dom.child_elements(node);
        if children.is_empty() {
            Self::Leaf
        } else if children.iter().any(|child| is_translatable(dom, child)) {
            Self::Nested
        } else {
            Self::Opaque
        }
    }
}

/// Holds the active language and applies it to the page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LanguageController {
    key: String,
    current: Language,
    toggle_id: String,
    label_class: String,
}

impl LanguageController {
    #[must_use]
    pub fn from_config(config: &PageConfig) -> Self {
        Self {
            key: config.language_key.clone(),
            current: config.default_language,
            toggle_id: config.language_toggle_id.clone(),
            label_class: config.language_label_class.clone(),
        }
    }

    #[must_use]
    pub fn current(&self) -> Language {
        self.current
    }

    /// Read the stored language (or the default) and apply it.
    pub fn init<D: Dom>(&mut self, dom: &mut D, store: &impl PreferenceStore) -> Result<Language> {
        self.current = load_or(store, &self.key, self.current)?;
        self.update(dom, self.current)?;
        Ok(self.current)
    }

    /// Flip the active language, persist it and re-render the page text.
    pub fn toggle<D: Dom>(&mut self, dom: &mut D, store: &mut impl PreferenceStore) -> Result<Language> {
        let next = self.current.toggled();
        store.set(&self.key, next.as_str())?;
        self.current = next;
        self.update(dom, next)?;
        log::info!("language switched to {}", self.current);
        Ok(self.current)
    }

    /// Render `lang` onto the page: toggle label, root `lang`, every
    /// translatable element.
    ///
    /// Returns the number of elements rewritten.
    pub fn update<D: Dom>(&self, dom: &mut D, lang: Language) -> Result<usize> {
        if let Some(label) = dom
            .by_id(&self.toggle_id)
            .and_then(|toggle| dom.find_in(&toggle, &self.label_class))
        {
            dom.set_text_content(&label, lang.toggled().label());
        }
        if let Some(root) = dom.root() {
            dom.set_attribute(&root, LANG_ATTRIBUTE, lang.as_str())?;
        }

        let mut rewritten = 0;
        for node in dom.all_with_attributes(&Language::ATTRIBUTES) {
            if translate(dom, &node, lang)? {
                rewritten += 1;
            }
        }
        log::debug!("language {lang} applied to {rewritten} elements");
        Ok(rewritten)
    }
}

/// Write `lang`'s text into one translatable element.
///
/// Returns `false` when the element lacks the target attribute.
pub fn translate<D: Dom>(dom: &mut D, node: &D::Node, lang: Language) -> Result<bool> {
    let Some(text) = dom.attribute(node, lang.attribute()) else {
        return Ok(false);
    };
    match Translation::classify(dom, node) {
        Translation::Leaf | Translation::Opaque => dom.set_text_content(node, &text),
        Translation::Nested => dom.remove_own_text(node)?,
    }
    Ok(true)
}
