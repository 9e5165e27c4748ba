//! User preferences and where they are kept.
//!
//! SYSTEM CONTEXT
//! ==============
//! Both preferences are two-valued and survive reloads through an
//! origin-scoped key-value store. The enums here are the only place the
//! persisted string forms are spelled out.

pub mod preference;
pub mod store;

pub use preference::{Language, Theme};
pub use store::{MemoryStore, PreferenceStore};

#[cfg(feature = "hydrate")]
pub use store::LocalStorage;
