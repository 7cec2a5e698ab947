//! Input event model.
//!
//! Backends translate raw terminal input into [`Event`] values. Keyboard
//! input maps onto the flat [`EventType`] enumeration; mouse input is first
//! run through a [`MouseClassifier`] to detect double clicks.

mod event;
mod mouse;

pub use event::{Event, EventType};
pub use mouse::{DOUBLE_CLICK_DURATION, MouseClassifier, MouseEvent};
