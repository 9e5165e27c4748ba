//! Browser entry point.
//!
//! SYSTEM CONTEXT
//! ==============
//! The WASM module starts before or after the document becomes interactive
//! depending on how it is loaded, so [`start`] defers mounting to
//! `DOMContentLoaded` only while the document is still loading. Mounting
//! reads the optional JSON config, opens `localStorage` (falling back to an
//! in-memory store when the browser denies it), initializes the
//! presentation controller and installs the click handlers and effects.

mod controls;
mod effects;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::HtmlImageElement;

use crate::config::{CONFIG_ELEMENT_ID, PageConfig};
use crate::dom::web::WebDom;
use crate::page::PageCore;
use crate::prefs::{LocalStorage, MemoryStore, PreferenceStore};

/// WASM start hook.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        log::debug!("logger already installed");
    }

    let Some(dom) = WebDom::current() else {
        return;
    };
    let document = dom.document().clone();
    if document.ready_state() == "loading" {
        controls::listen(&document, "DOMContentLoaded", move |_event| mount(dom.clone()));
    } else {
        mount(dom);
    }
}

/// Point the profile picture (`.profile-img img`) at `url`. No-op when the
/// page has no profile picture.
#[wasm_bindgen]
pub fn set_profile_image(url: &str) {
    let Some(dom) = WebDom::current() else {
        return;
    };
    let selector = format!(".{} img", load_config(&dom).motion.profile_image_class);
    match dom.document().query_selector(&selector) {
        Ok(Some(img)) => match img.dyn_into::<HtmlImageElement>() {
            Ok(img) => img.set_src(url),
            Err(_) => log::warn!("{selector} is not an image"),
        },
        Ok(None) => {}
        Err(err) => log::warn!("query {selector} failed: {err:?}"),
    }
}

/// Open the browser's print dialog, which doubles as "save as PDF".
#[wasm_bindgen]
pub fn download_pdf() {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(err) = window.print() {
        log::warn!("print failed: {err:?}");
    }
}

fn mount(dom: WebDom) {
    let config = load_config(&dom);
    match LocalStorage::open() {
        Ok(store) => mount_with(dom, store, config),
        Err(err) => {
            log::warn!("{err}; preferences will not persist");
            mount_with(dom, MemoryStore::new(), config);
        }
    }
}

fn load_config(dom: &WebDom) -> PageConfig {
    let Some(raw) = dom
        .document()
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content())
    else {
        return PageConfig::default();
    };
    PageConfig::from_json(&raw).unwrap_or_else(|err| {
        log::warn!("{err}; using default config");
        PageConfig::default()
    })
}

fn mount_with<S: PreferenceStore + 'static>(dom: WebDom, store: S, config: PageConfig) {
    let motion = config.motion.clone();
    let page = Rc::new(RefCell::new(PageCore::new(dom.clone(), store, config)));
    if let Err(err) = page.borrow_mut().init() {
        log::error!("preference init failed: {err}");
    }
    controls::install(&page);
    effects::install(&dom, &motion);

    log::info!("¡Hola! 👋");
    log::info!("¿Interesado en mi trabajo? ¡Contáctame!");
}
