//! Page configuration: storage keys, element identifiers, motion timings.
//!
//! Every field has a default matching the shipped markup. A page can override
//! any subset by embedding JSON in
//! `<script type="application/json" id="folio-config">`; absent fields keep
//! their defaults.

use serde::{Deserialize, Serialize};

use crate::error::{FolioError, Result};
use crate::prefs::{Language, Theme};

pub const DEFAULT_THEME_KEY: &str = "theme";
pub const DEFAULT_LANGUAGE_KEY: &str = "language";
pub const DEFAULT_REVEAL_THRESHOLD: f64 = 0.15;
pub const DEFAULT_REVEAL_ROOT_MARGIN: &str = "0px 0px -40px 0px";
pub const DEFAULT_REVEAL_FALLBACK_MS: u32 = 800;
pub const DEFAULT_CARD_DELAY_STEP_MS: u32 = 100;
pub const DEFAULT_SKILL_TAG_STEP_MS: u32 = 50;
pub const DEFAULT_PROGRESS_RESTART_MS: u32 = 100;
pub const DEFAULT_LOADED_DELAY_MS: u32 = 100;
pub const DEFAULT_PARALLAX_FACTOR: f64 = 0.3;
pub const DEFAULT_TYPEWRITER_STEP_MS: u32 = 100;

/// Id of the element holding the JSON overrides.
pub const CONFIG_ELEMENT_ID: &str = "folio-config";

/// Preference and toggle-control settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub theme_key: String,
    pub language_key: String,
    pub default_theme: Theme,
    pub default_language: Language,
    pub theme_toggle_id: String,
    pub theme_icon_class: String,
    /// Icon class while dark is active (offers the switch to light).
    pub icon_class_when_dark: String,
    /// Icon class while light is active (offers the switch to dark).
    pub icon_class_when_light: String,
    pub language_toggle_id: String,
    pub language_label_class: String,
    pub motion: MotionConfig,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            theme_key: DEFAULT_THEME_KEY.to_owned(),
            language_key: DEFAULT_LANGUAGE_KEY.to_owned(),
            default_theme: Theme::Light,
            default_language: Language::Es,
            theme_toggle_id: "themeToggle".to_owned(),
            theme_icon_class: "theme-icon".to_owned(),
            icon_class_when_dark: "fa-sun".to_owned(),
            icon_class_when_light: "fa-moon".to_owned(),
            language_toggle_id: "langToggle".to_owned(),
            language_label_class: "lang-text".to_owned(),
            motion: MotionConfig::default(),
        }
    }
}

/// Class names and timings for the decorative effects.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    pub section_class: String,
    pub card_class: String,
    pub skill_tag_class: String,
    pub language_item_class: String,
    pub progress_fill_class: String,
    pub header_class: String,
    pub name_class: String,
    pub download_class: String,
    pub profile_image_class: String,
    pub loaded_class: String,
    pub reveal_threshold: f64,
    pub reveal_root_margin: String,
    pub reveal_fallback_ms: u32,
    pub card_delay_step_ms: u32,
    pub skill_tag_step_ms: u32,
    pub progress_restart_ms: u32,
    pub loaded_delay_ms: u32,
    pub parallax_factor: f64,
    pub typewriter: bool,
    pub typewriter_step_ms: u32,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            section_class: "section".to_owned(),
            card_class: "project-card".to_owned(),
            skill_tag_class: "skill-tag".to_owned(),
            language_item_class: "language-item".to_owned(),
            progress_fill_class: "progress-fill".to_owned(),
            header_class: "header".to_owned(),
            name_class: "name".to_owned(),
            download_class: "download-btn".to_owned(),
            profile_image_class: "profile-img".to_owned(),
            loaded_class: "loaded".to_owned(),
            reveal_threshold: DEFAULT_REVEAL_THRESHOLD,
            reveal_root_margin: DEFAULT_REVEAL_ROOT_MARGIN.to_owned(),
            reveal_fallback_ms: DEFAULT_REVEAL_FALLBACK_MS,
            card_delay_step_ms: DEFAULT_CARD_DELAY_STEP_MS,
            skill_tag_step_ms: DEFAULT_SKILL_TAG_STEP_MS,
            progress_restart_ms: DEFAULT_PROGRESS_RESTART_MS,
            loaded_delay_ms: DEFAULT_LOADED_DELAY_MS,
            parallax_factor: DEFAULT_PARALLAX_FACTOR,
            typewriter: false,
            typewriter_step_ms: DEFAULT_TYPEWRITER_STEP_MS,
        }
    }
}

impl PageConfig {
    /// Parse JSON overrides on top of the defaults and validate the result.
    pub fn from_json(raw: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(raw).map_err(|err| FolioError::Config(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings the controllers cannot work with.
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("theme_key", &self.theme_key),
            ("language_key", &self.language_key),
            ("theme_toggle_id", &self.theme_toggle_id),
            ("language_toggle_id", &self.language_toggle_id),
            ("language_label_class", &self.language_label_class),
        ];
        for (name, value) in required {
            if value.trim().is_empty() {
                return Err(FolioError::Config(format!("{name} must not be empty")));
            }
        }
        if self.theme_key == self.language_key {
            return Err(FolioError::Config(format!(
                "theme_key and language_key share the key {:?}",
                self.theme_key
            )));
        }

        let threshold = self.motion.reveal_threshold;
        if !(0.0..=1.0).contains(&threshold) {
            return Err(FolioError::Config(format!(
                "reveal_threshold {threshold} is outside 0..=1"
            )));
        }
        if !self.motion.parallax_factor.is_finite() {
            return Err(FolioError::Config("parallax_factor must be finite".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
