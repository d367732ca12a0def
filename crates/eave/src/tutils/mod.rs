//! Test utilities: configurable fakes for the host seam.

/// Fake host, window and view implementations.
pub mod host;

pub use host::{FakeHost, FakeView, FakeWindow};
