//! Terminal capability detection.

mod capabilities;

pub use capabilities::{Capabilities, ColorSupport};
