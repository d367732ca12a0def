//! Safe-area inset resolution for views inside a mobile GUI framework.
//!
//! Android never grew a single API that says "this is how far content
//! must stay from each screen edge". The answer is spread across the
//! window insets API, the display cutout API, per-vendor resource
//! tables, undocumented OEM settings keys, and raw display geometry,
//! with every OEM skin disagreeing on the details. This crate folds
//! those signals into one normalized [`EdgeInsets`] value per view.
//!
//! The host framework is reached only through the read-only traits in
//! [`host`]; [`SafeArea`] is the entry point. Every query is
//! best-effort: probes that fail degrade to the next strategy, and the
//! two public queries return `None` rather than ever erroring past the
//! crate boundary.

pub mod classify;
pub mod error;
pub mod host;
pub mod navbar;
pub mod notch;
mod resolver;
pub mod tutils;
pub mod vendor;

pub use error::{Error, Result};
pub use host::{CutoutInfo, Host, Probe, View, Window, WindowInsets};
pub use resolver::SafeArea;

pub use geom;
// Export commonly used geometry types at the root
pub use geom::{EdgeInsets, Expanse, Point, Rect};
