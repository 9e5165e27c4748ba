use super::*;
use crate::dom::mem::{MemDocument, NodeId};
use crate::error::FolioError;
use crate::prefs::MemoryStore;

struct Page {
    doc: MemDocument,
    label: NodeId,
    title: NodeId,
    intro: NodeId,
    accent: NodeId,
    only_es: NodeId,
}

/// Toggle control, a leaf heading, a paragraph wrapping a translatable span,
/// and an element carrying only the Spanish attribute.
fn page() -> Page {
    let mut doc = MemDocument::new();
    let body = doc.body();
    let toggle = doc.element(body, "button", &[("id", "langToggle")]);
    let label = doc.element(toggle, "span", &[("class", "lang-text")]);
    doc.text(label, "EN");

    let title = doc.element(body, "h2", &[("data-es", "Experiencia"), ("data-en", "Experience")]);
    doc.text(title, "Experiencia");

    let intro = doc.element(body, "p", &[("data-es", "Hola soy Ana"), ("data-en", "Hi I am Ana")]);
    doc.text(intro, "Hola ");
    let accent = doc.element(intro, "span", &[("data-es", "soy Ana"), ("data-en", "I am Ana")]);
    doc.text(accent, "soy Ana");
    doc.text(intro, "!");

    let only_es = doc.element(body, "p", &[("data-es", "Solo español")]);
    doc.text(only_es, "Original");

    Page { doc, label, title, intro, accent, only_es }
}

fn controller() -> LanguageController {
    LanguageController::from_config(&PageConfig::default())
}

fn lang_attr(doc: &MemDocument) -> Option<String> {
    doc.attribute(&doc.root().unwrap(), LANG_ATTRIBUTE)
}

// =============================================================
// Translation::classify
// =============================================================

#[test]
fn classify_element_without_children_is_leaf() {
    let p = page();
    assert_eq!(Translation::classify(&p.doc, &p.title), Translation::Leaf);
    assert_eq!(Translation::classify(&p.doc, &p.accent), Translation::Leaf);
}

#[test]
fn classify_element_with_translatable_child_is_nested() {
    let p = page();
    assert_eq!(Translation::classify(&p.doc, &p.intro), Translation::Nested);
}

#[test]
fn classify_element_with_plain_children_is_opaque() {
    let mut doc = MemDocument::new();
    let body = doc.body();
    let link = doc.element(body, "a", &[("data-es", "Ver"), ("data-en", "View")]);
    doc.element(link, "i", &[("class", "icon")]);
    assert_eq!(Translation::classify(&doc, &link), Translation::Opaque);
}

#[test]
fn classify_ignores_tag_name() {
    let mut doc = MemDocument::new();
    let body = doc.body();
    for tag in ["p", "li", "div", "h3"] {
        let parent = doc.element(body, tag, &[("data-es", "a"), ("data-en", "b")]);
        doc.element(parent, "span", &[("data-es", "c"), ("data-en", "d")]);
        assert_eq!(Translation::classify(&doc, &parent), Translation::Nested, "{tag}");
    }
}

// =============================================================
// update
// =============================================================

#[test]
fn update_to_english_rewrites_leaf_text() {
    let mut p = page();
    controller().update(&mut p.doc, Language::En).unwrap();
    assert_eq!(p.doc.text_content(&p.title), "Experience");
}

#[test]
fn update_sets_label_to_other_language_and_root_lang() {
    let mut p = page();
    controller().update(&mut p.doc, Language::En).unwrap();
    assert_eq!(p.doc.text_content(&p.label), "ES");
    assert_eq!(lang_attr(&p.doc).as_deref(), Some("en"));

    controller().update(&mut p.doc, Language::Es).unwrap();
    assert_eq!(p.doc.text_content(&p.label), "EN");
    assert_eq!(lang_attr(&p.doc).as_deref(), Some("es"));
}

#[test]
fn update_nested_parent_drops_own_text_and_child_translates() {
    let mut p = page();
    controller().update(&mut p.doc, Language::En).unwrap();
    assert_eq!(p.doc.text_content(&p.accent), "I am Ana");
    assert_eq!(p.doc.text_content(&p.intro), "I am Ana");
    assert_eq!(p.doc.child_elements(&p.intro), vec![p.accent]);
}

#[test]
fn update_never_touches_single_attribute_elements() {
    let mut p = page();
    let before = p.doc.to_markup(p.only_es);
    controller().update(&mut p.doc, Language::En).unwrap();
    assert_eq!(p.doc.to_markup(p.only_es), before);
    controller().update(&mut p.doc, Language::Es).unwrap();
    assert_eq!(p.doc.to_markup(p.only_es), before);
}

#[test]
fn update_is_idempotent() {
    let mut once = page();
    controller().update(&mut once.doc, Language::En).unwrap();

    let mut twice = page();
    controller().update(&mut twice.doc, Language::En).unwrap();
    controller().update(&mut twice.doc, Language::En).unwrap();

    let body = once.doc.body();
    assert_eq!(once.doc.to_markup(body), twice.doc.to_markup(twice.doc.body()));
}

#[test]
fn update_counts_rewritten_elements() {
    let mut p = page();
    assert_eq!(controller().update(&mut p.doc, Language::En).unwrap(), 3);
}

#[test]
fn update_without_toggle_control_still_translates() {
    let mut doc = MemDocument::new();
    let body = doc.body();
    let h1 = doc.element(body, "h1", &[("data-es", "Hola"), ("data-en", "Hello")]);
    controller().update(&mut doc, Language::En).unwrap();
    assert_eq!(doc.text_content(&h1), "Hello");
}

#[test]
fn update_round_trip_restores_spanish() {
    let mut p = page();
    controller().update(&mut p.doc, Language::En).unwrap();
    controller().update(&mut p.doc, Language::Es).unwrap();
    assert_eq!(p.doc.text_content(&p.title), "Experiencia");
    assert_eq!(p.doc.text_content(&p.accent), "soy Ana");
}

// =============================================================
// init / toggle
// =============================================================

#[test]
fn init_without_entry_uses_spanish() {
    let mut p = page();
    let mut c = controller();
    assert_eq!(c.init(&mut p.doc, &MemoryStore::new()).unwrap(), Language::Es);
    assert_eq!(p.doc.text_content(&p.label), "EN");
    assert_eq!(lang_attr(&p.doc).as_deref(), Some("es"));
}

#[test]
fn init_with_stored_english_translates() {
    let mut p = page();
    let mut c = controller();
    let store = MemoryStore::with_entries([("language", "en")]);
    assert_eq!(c.init(&mut p.doc, &store).unwrap(), Language::En);
    assert_eq!(c.current(), Language::En);
    assert_eq!(p.doc.text_content(&p.title), "Experience");
}

#[test]
fn toggle_flips_persists_and_renders() {
    let mut p = page();
    let mut c = controller();
    let mut store = MemoryStore::new();
    c.init(&mut p.doc, &store).unwrap();

    assert_eq!(c.toggle(&mut p.doc, &mut store).unwrap(), Language::En);
    assert_eq!(store.get("language").unwrap().as_deref(), Some("en"));
    assert_eq!(p.doc.text_content(&p.title), "Experience");

    assert_eq!(c.toggle(&mut p.doc, &mut store).unwrap(), Language::Es);
    assert_eq!(store.get("language").unwrap().as_deref(), Some("es"));
    assert_eq!(p.doc.text_content(&p.title), "Experiencia");
}

#[test]
fn toggle_keeps_current_when_store_rejects_write() {
    struct Rejecting;
    impl PreferenceStore for Rejecting {
        fn get(&self, _key: &str) -> Result<Option<String>> {
            Ok(None)
        }
        fn set(&mut self, _key: &str, _value: &str) -> Result<()> {
            Err(FolioError::Storage("full".into()))
        }
    }

    let mut p = page();
    let mut c = controller();
    let mut store = Rejecting;
    c.init(&mut p.doc, &store).unwrap();
    assert!(c.toggle(&mut p.doc, &mut store).is_err());
    assert_eq!(c.current(), Language::Es);
    assert_eq!(p.doc.text_content(&p.title), "Experiencia");
}

#[test]
fn translate_skips_element_missing_target_attribute() {
    let mut doc = MemDocument::new();
    let body = doc.body();
    let el = doc.element(body, "p", &[("data-es", "Hola")]);
    doc.text(el, "Hola");
    assert!(!translate(&mut doc, &el, Language::En).unwrap());
    assert_eq!(doc.text_content(&el), "Hola");
}
