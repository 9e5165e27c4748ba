//! Decorative motion: section reveal, staggered entrances, parallax.
//!
//! SYSTEM CONTEXT
//! ==============
//! Nothing here feeds back into preferences or translation. The browser
//! wiring in `web::effects` owns timers and observers; this module keeps the
//! parts that can be stated without a browser (style values, delays, reveal
//! bookkeeping) so they are testable natively.

pub mod reveal;
pub mod schedule;

/// One inline style declaration, `(property, value)`.
pub type StyleDecl = (&'static str, &'static str);

/// Section resting state before it scrolls into view.
pub const SECTION_HIDDEN: [StyleDecl; 3] = [
    ("opacity", "0"),
    ("transform", "translateY(20px)"),
    ("transition", "opacity 0.6s ease, transform 0.6s ease"),
];

pub const SECTION_VISIBLE: [StyleDecl; 2] = [("opacity", "1"), ("transform", "translateY(0)")];

/// Skill tag resting state before its staggered entrance.
pub const TAG_HIDDEN: [StyleDecl; 3] = [
    ("opacity", "0"),
    ("transform", "scale(0.8)"),
    ("transition", "opacity 0.3s ease, transform 0.3s ease"),
];

pub const TAG_VISIBLE: [StyleDecl; 2] = [("opacity", "1"), ("transform", "scale(1)")];

/// Width a progress fill collapses to before replaying its fill.
pub const PROGRESS_COLLAPSED: &str = "0%";
