//! Theme and language preference values.

#[cfg(test)]
#[path = "preference_test.rs"]
mod preference_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FolioError;

/// Visual theme applied to the document root as `data-theme`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Persisted and attribute form.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = FolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(FolioError::UnknownTheme(other.to_owned())),
        }
    }
}

/// Active page language.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Es,
    En,
}

impl Language {
    /// Persisted form, also written to the root `lang` attribute.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Es => "es",
            Self::En => "en",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Es => Self::En,
            Self::En => Self::Es,
        }
    }

    /// Short uppercase code shown on the language toggle.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Es => "ES",
            Self::En => "EN",
        }
    }

    /// Markup attribute carrying this language's text.
    #[must_use]
    pub fn attribute(self) -> &'static str {
        match self {
            Self::Es => "data-es",
            Self::En => "data-en",
        }
    }

    /// Both text attributes; an element is translatable only when it has all of them.
    pub const ATTRIBUTES: [&'static str; 2] = ["data-es", "data-en"];
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = FolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "es" => Ok(Self::Es),
            "en" => Ok(Self::En),
            other => Err(FolioError::UnknownLanguage(other.to_owned())),
        }
    }
}
