//! Browser wiring for the decorative motion.
//!
//! Everything here is fire-and-forget: observers, timers and the scroll
//! listener live for the page session and report nothing back.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::{JsCast, JsValue, closure::Closure};
use web_sys::{Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::controls::listen;
use crate::config::MotionConfig;
use crate::dom::Dom;
use crate::dom::web::WebDom;
use crate::motion::reveal::{RevealSet, RevealTrigger};
use crate::motion::schedule::{Typewriter, card_delay, parallax_transform, stagger_ms};
use crate::motion::{
    PROGRESS_COLLAPSED, SECTION_HIDDEN, SECTION_VISIBLE, StyleDecl, TAG_HIDDEN, TAG_VISIBLE,
};

pub(super) fn install(dom: &WebDom, motion: &MotionConfig) {
    reveal_sections(dom, motion);
    delay_cards(dom, motion);
    stagger_skill_tags(dom, motion);
    replay_progress_bars(dom, motion);
    parallax_header(dom, motion);
    mark_loaded(dom, motion);
    if motion.typewriter {
        type_name(dom, motion);
    }
}

fn set_style(el: &Element, property: &str, value: &str) {
    let Some(html) = el.dyn_ref::<HtmlElement>() else {
        return;
    };
    if let Err(err) = html.style().set_property(property, value) {
        log::warn!("style {property}: {err:?}");
    }
}

fn set_styles(el: &Element, decls: &[StyleDecl]) {
    for (property, value) in decls {
        set_style(el, property, value);
    }
}

/// Intersection observer calling `on_visible` for every entry that enters
/// the viewport. `None` when the browser lacks `IntersectionObserver`.
fn observer(motion: &MotionConfig, mut on_visible: impl FnMut(Element) + 'static) -> Option<IntersectionObserver> {
    let cb = Closure::wrap(Box::new(move |entries: js_sys::Array, _observer: IntersectionObserver| {
        for entry in entries.iter() {
            let entry: IntersectionObserverEntry = entry.unchecked_into();
            if entry.is_intersecting() {
                on_visible(entry.target());
            }
        }
    }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(motion.reveal_threshold));
    options.set_root_margin(&motion.reveal_root_margin);
    match IntersectionObserver::new_with_options(cb.as_ref().unchecked_ref(), &options) {
        Ok(observer) => {
            cb.forget();
            Some(observer)
        }
        Err(err) => {
            log::warn!("IntersectionObserver unavailable: {err:?}");
            None
        }
    }
}

/// Hide every section, then reveal through the observer and the fallback
/// timer, whichever reaches each section first.
fn reveal_sections(dom: &WebDom, motion: &MotionConfig) {
    let sections = Rc::new(dom.all_by_class(&motion.section_class));
    if sections.is_empty() {
        return;
    }
    for section in sections.iter() {
        set_styles(section, &SECTION_HIDDEN);
    }
    let state = Rc::new(RefCell::new(RevealSet::new(sections.len())));

    let observed = {
        let sections = Rc::clone(&sections);
        let state = Rc::clone(&state);
        observer(motion, move |target| {
            let node: &web_sys::Node = &target;
            let Some(index) = sections.iter().position(|s| s.is_same_node(Some(node))) else {
                return;
            };
            set_styles(&target, &SECTION_VISIBLE);
            if state.borrow_mut().reveal(index, RevealTrigger::Observer) {
                log::debug!("section {index} revealed on scroll");
            }
        })
    };
    if let Some(observer) = observed {
        for section in sections.iter() {
            observer.observe(section);
        }
    }

    Timeout::new(motion.reveal_fallback_ms, move || {
        for section in sections.iter() {
            set_styles(section, &SECTION_VISIBLE);
        }
        let late = state.borrow_mut().reveal_all(RevealTrigger::Fallback);
        if late > 0 {
            log::debug!("fallback revealed {late} sections");
        }
    })
    .forget();
}

fn delay_cards(dom: &WebDom, motion: &MotionConfig) {
    for (index, card) in dom.all_by_class(&motion.card_class).iter().enumerate() {
        set_style(card, "animation-delay", &card_delay(index, motion.card_delay_step_ms));
    }
}

fn stagger_skill_tags(dom: &WebDom, motion: &MotionConfig) {
    for (index, tag) in dom.all_by_class(&motion.skill_tag_class).into_iter().enumerate() {
        set_styles(&tag, &TAG_HIDDEN);
        Timeout::new(stagger_ms(index, motion.skill_tag_step_ms), move || {
            set_styles(&tag, &TAG_VISIBLE);
        })
        .forget();
    }
}

/// Collapse each language progress bar when it scrolls into view and let it
/// grow back to its inline width.
fn replay_progress_bars(dom: &WebDom, motion: &MotionConfig) {
    let items = dom.all_by_class(&motion.language_item_class);
    if items.is_empty() {
        return;
    }
    let fill_class = motion.progress_fill_class.clone();
    let restart_ms = motion.progress_restart_ms;
    let Some(observer) = observer(motion, move |item| {
        let Some(fill) = item.get_elements_by_class_name(&fill_class).item(0) else {
            return;
        };
        let Some(html) = fill.dyn_ref::<HtmlElement>() else {
            return;
        };
        let width = match html.style().get_property_value("width") {
            Ok(width) => width,
            Err(err) => {
                log::warn!("progress width: {err:?}");
                return;
            }
        };
        set_style(&fill, "width", PROGRESS_COLLAPSED);
        Timeout::new(restart_ms, move || set_style(&fill, "width", &width)).forget();
    }) else {
        return;
    };
    for item in &items {
        observer.observe(item);
    }
}

fn parallax_header(dom: &WebDom, motion: &MotionConfig) {
    let (Some(window), Some(header)) = (web_sys::window(), dom.first_by_class(&motion.header_class)) else {
        return;
    };
    let factor = motion.parallax_factor;
    let scroller = window.clone();
    listen(&window, "scroll", move |_event| match scroller.scroll_y() {
        Ok(scrolled) => set_style(&header, "transform", &parallax_transform(scrolled, factor)),
        Err(err) => log::warn!("scroll position: {err:?}"),
    });
}

fn mark_loaded(dom: &WebDom, motion: &MotionConfig) {
    let Some(body) = dom.document().body() else {
        return;
    };
    let class = motion.loaded_class.clone();
    Timeout::new(motion.loaded_delay_ms, move || {
        if let Err(err) = body.class_list().add_1(&class) {
            log::warn!("add {class}: {err:?}");
        }
    })
    .forget();
}

/// Retype the name heading one character per frame.
fn type_name(dom: &WebDom, motion: &MotionConfig) {
    let Some(name) = dom.first_by_class(&motion.name_class) else {
        return;
    };
    let text = name.text_content().unwrap_or_default();
    name.set_text_content(Some(""));
    for (index, frame) in Typewriter::new(&text).enumerate() {
        let name = name.clone();
        Timeout::new(stagger_ms(index, motion.typewriter_step_ms), move || {
            name.set_text_content(Some(&frame));
        })
        .forget();
    }
}
