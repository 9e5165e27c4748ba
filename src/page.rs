//! Presentation controller tying the document, the store and both
//! preference controllers together.
//!
//! Separated from the browser wiring so it can be tested without WASM: the
//! `web` module wraps a `PageCore<WebDom, LocalStorage>` in `Rc<RefCell<_>>`
//! and forwards click events to [`PageCore::on_theme_click`] and
//! [`PageCore::on_language_click`].

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

use crate::config::PageConfig;
use crate::dom::Dom;
use crate::error::Result;
use crate::language::LanguageController;
use crate::prefs::{Language, PreferenceStore, Theme};
use crate::theme::ThemeController;

/// Page state for one document session.
pub struct PageCore<D: Dom, S: PreferenceStore> {
    pub dom: D,
    pub store: S,
    config: PageConfig,
    theme: ThemeController,
    language: LanguageController,
}

impl<D: Dom, S: PreferenceStore> PageCore<D, S> {
    pub fn new(dom: D, store: S, config: PageConfig) -> Self {
        let theme = ThemeController::from_config(&config);
        let language = LanguageController::from_config(&config);
        Self { dom, store, config, theme, language }
    }

    #[must_use]
    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    /// Apply the stored (or default) theme, then the stored (or default)
    /// language.
    pub fn init(&mut self) -> Result<(Theme, Language)> {
        let theme = self.theme.init(&mut self.dom, &self.store)?;
        let language = self.language.init(&mut self.dom, &self.store)?;
        log::info!("page initialized: theme={theme} language={language}");
        Ok((theme, language))
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme.current(&self.dom)
    }

    #[must_use]
    pub fn language(&self) -> Language {
        self.language.current()
    }

    /// Theme toggle click.
    pub fn on_theme_click(&mut self) -> Result<Theme> {
        self.theme.toggle(&mut self.dom, &mut self.store)
    }

    /// Language toggle click.
    pub fn on_language_click(&mut self) -> Result<Language> {
        self.language.toggle(&mut self.dom, &mut self.store)
    }

    /// Re-render `lang` without changing the active language or the store.
    pub fn update_language(&mut self, lang: Language) -> Result<usize> {
        self.language.update(&mut self.dom, lang)
    }
}
