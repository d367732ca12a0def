//! Floating-point geometry primitives used across eave.
//!
//! All values are device pixels. Screen coordinates are small enough
//! that `f32` carries them exactly, and float arithmetic avoids
//! rounding loss through the inset clipping math.

/// Edge inset helpers.
mod edges;
/// Error types for geometry operations.
mod error;
/// Width/height size type.
mod expanse;
/// Point helpers.
mod point;
/// Rectangle operations.
mod rect;

pub use edges::EdgeInsets;
pub use error::{Error, Result};
pub use expanse::Expanse;
pub use point::Point;
pub use rect::Rect;
