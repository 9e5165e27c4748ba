//! # folio
//!
//! Presentation layer for a bilingual portfolio page, compiled to WebAssembly
//! and attached to static markup. It persists a dark/light theme and a
//! Spanish/English language preference, swaps translated text in place, and
//! drives the page's decorative motion.
//!
//! The preference and translation logic is written against two seams, the
//! [`dom::Dom`] trait and the [`prefs::store::PreferenceStore`] trait, so the
//! same code runs against the browser (`hydrate` feature) and against the
//! in-memory document used by the native tests.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`page`] | [`page::PageCore`], the presentation controller |
//! | [`theme`] | Theme init/toggle and icon state |
//! | [`language`] | Language init/toggle and the translation pass |
//! | [`prefs`] | Preference enums and the store adapter |
//! | [`dom`] | DOM seam and the in-memory document |
//! | [`motion`] | Reveal bookkeeping and animation schedules |
//! | [`config`] | Page configuration (identifiers, keys, timings) |
//! | [`error`] | Crate error type |
//! | `web` | Browser entry point and event wiring (`hydrate` only) |
//!
//! ## Markup contract
//!
//! Translatable text carries both `data-es` and `data-en`. The theme toggle
//! (`#themeToggle`) holds a `.theme-icon` child and the language toggle
//! (`#langToggle`) holds a `.lang-text` child. Identifiers are configurable
//! through [`config::PageConfig`].

pub mod config;
pub mod dom;
pub mod error;
pub mod language;
pub mod motion;
pub mod page;
pub mod prefs;
pub mod theme;

#[cfg(feature = "hydrate")]
pub mod web;

pub use error::{FolioError, Result};
