//! Click wiring for the toggle controls, the print button and in-page anchors.
//!
//! Each handler borrows the shared page for its whole run. A failing handler
//! logs and returns; the other listeners stay registered.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{JsCast, closure::Closure};
use web_sys::{Element, Event, EventTarget, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use crate::dom::Dom;
use crate::dom::web::WebDom;
use crate::page::PageCore;
use crate::prefs::PreferenceStore;

type SharedPage<S> = Rc<RefCell<PageCore<WebDom, S>>>;

/// Register `handler` for `event` on `target` for the lifetime of the page.
pub(super) fn listen(target: &EventTarget, event: &str, handler: impl FnMut(Event) + 'static) {
    let cb = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    match target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref()) {
        Ok(()) => cb.forget(),
        Err(err) => log::warn!("cannot listen for {event}: {err:?}"),
    }
}

pub(super) fn install<S: PreferenceStore + 'static>(page: &SharedPage<S>) {
    let (dom, theme_id, language_id, download_class) = {
        let page = page.borrow();
        let config = page.config();
        (
            page.dom.clone(),
            config.theme_toggle_id.clone(),
            config.language_toggle_id.clone(),
            config.motion.download_class.clone(),
        )
    };

    if let Some(toggle) = dom.by_id(&theme_id) {
        let page = Rc::clone(page);
        listen(&toggle, "click", move |_event| {
            if let Err(err) = page.borrow_mut().on_theme_click() {
                log::error!("theme toggle failed: {err}");
            }
        });
    }

    if let Some(toggle) = dom.by_id(&language_id) {
        let page = Rc::clone(page);
        listen(&toggle, "click", move |_event| {
            if let Err(err) = page.borrow_mut().on_language_click() {
                log::error!("language toggle failed: {err}");
            }
        });
    }

    if let Some(button) = dom.first_by_class(&download_class) {
        listen(&button, "click", |_event| super::download_pdf());
    }

    smooth_anchors(&dom);
}

/// Scroll in-page `#fragment` links smoothly instead of jumping.
fn smooth_anchors(dom: &WebDom) {
    let document = dom.document().clone();
    let anchors = match document.query_selector_all("a[href^=\"#\"]") {
        Ok(list) => list,
        Err(err) => {
            log::warn!("anchor query failed: {err:?}");
            return;
        }
    };
    for anchor in (0..anchors.length()).filter_map(|i| anchors.get(i)) {
        let anchor: Element = anchor.unchecked_into();
        let document = document.clone();
        let link = anchor.clone();
        listen(&anchor, "click", move |event| {
            event.prevent_default();
            let Some(href) = link.get_attribute("href") else {
                return;
            };
            // A bare "#" is not a valid selector; there is nothing to scroll to.
            let Ok(Some(target)) = document.query_selector(&href) else {
                return;
            };
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            options.set_block(ScrollLogicalPosition::Start);
            target.scroll_into_view_with_scroll_into_view_options(&options);
        });
    }
}
