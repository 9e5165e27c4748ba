//! Theme initialization and toggle.
//!
//! The active theme lives in two places: the `data-theme` attribute on the
//! document root and the preference store. Every mutation writes both, so
//! toggling reads the root attribute as the source of truth. The toggle icon
//! shows the action on offer: a sun while dark is active, a moon while light
//! is active.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::config::PageConfig;
use crate::dom::Dom;
use crate::error::Result;
use crate::prefs::store::{PreferenceStore, load_or};
use crate::prefs::Theme;

/// Root attribute carrying the active theme.
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Applies and flips the persisted theme.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThemeController {
    key: String,
    default: Theme,
    toggle_id: String,
    icon_class: String,
    icon_when_dark: String,
    icon_when_light: String,
}

impl ThemeController {
    #[must_use]
    pub fn from_config(config: &PageConfig) -> Self {
        Self {
            key: config.theme_key.clone(),
            default: config.default_theme,
            toggle_id: config.theme_toggle_id.clone(),
            icon_class: config.theme_icon_class.clone(),
            icon_when_dark: config.icon_class_when_dark.clone(),
            icon_when_light: config.icon_class_when_light.clone(),
        }
    }

    /// Read the stored theme (or the default) and apply it.
    pub fn init<D: Dom>(&self, dom: &mut D, store: &impl PreferenceStore) -> Result<Theme> {
        let theme = load_or(store, &self.key, self.default)?;
        self.apply_root(dom, theme)?;
        self.update_icon(dom, theme)?;
        log::debug!("theme initialized: {theme}");
        Ok(theme)
    }

    /// Theme currently reflected on the document root.
    ///
    /// A missing or foreign attribute value reads as the default.
    pub fn current<D: Dom>(&self, dom: &D) -> Theme {
        let Some(raw) = dom.root().and_then(|root| dom.attribute(&root, THEME_ATTRIBUTE)) else {
            return self.default;
        };
        raw.parse().unwrap_or(self.default)
    }

    /// Flip the theme shown on the root, persist it and refresh the icon.
    pub fn toggle<D: Dom>(&self, dom: &mut D, store: &mut impl PreferenceStore) -> Result<Theme> {
        let next = self.current(dom).toggled();
        self.apply_root(dom, next)?;
        store.set(&self.key, next.as_str())?;
        self.update_icon(dom, next)?;
        log::info!("theme switched to {next}");
        Ok(next)
    }

    fn apply_root<D: Dom>(&self, dom: &mut D, theme: Theme) -> Result<()> {
        match dom.root() {
            Some(root) => dom.set_attribute(&root, THEME_ATTRIBUTE, theme.as_str()),
            None => Ok(()),
        }
    }

    fn update_icon<D: Dom>(&self, dom: &mut D, theme: Theme) -> Result<()> {
        let Some(icon) = dom.by_id(&self.toggle_id).and_then(|toggle| dom.find_in(&toggle, &self.icon_class))
        else {
            return Ok(());
        };
        let dark = theme == Theme::Dark;
        dom.set_class(&icon, &self.icon_when_dark, dark)?;
        dom.set_class(&icon, &self.icon_when_light, !dark)
    }
}
