//! Mouse events and click classification.

use crate::input::event::EventType;
use std::time::{Duration, Instant};

/// Maximum gap between two presses on the same row for a double click.
pub const DOUBLE_CLICK_DURATION: Duration = Duration::from_millis(500);

/// A mouse event in screen coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct MouseEvent {
    /// Row.
    pub y: usize,
    /// Column.
    pub x: usize,
    /// Scroll amount: positive for up, negative for down, zero otherwise.
    pub scroll: i32,
    /// Left button (otherwise right).
    pub left: bool,
    /// Button pressed (otherwise released).
    pub down: bool,
    /// Second press of a double click.
    pub double: bool,
    /// A modifier key was held.
    pub modifier: bool,
}

impl MouseEvent {
    /// A button press.
    #[must_use]
    pub const fn click(y: usize, x: usize, left: bool) -> Self {
        Self {
            y,
            x,
            scroll: 0,
            left,
            down: true,
            double: false,
            modifier: false,
        }
    }

    /// A button release.
    #[must_use]
    pub const fn release(y: usize, x: usize, left: bool) -> Self {
        Self {
            down: false,
            ..Self::click(y, x, left)
        }
    }

    /// A wheel movement.
    #[must_use]
    pub const fn scroll(y: usize, x: usize, amount: i32) -> Self {
        Self {
            y,
            x,
            scroll: amount,
            left: false,
            down: false,
            double: false,
            modifier: false,
        }
    }

    /// Return a copy with the modifier flag set.
    #[must_use]
    pub const fn with_modifier(self, modifier: bool) -> Self {
        Self { modifier, ..self }
    }

    /// Event kind a key binding table should look this event up under.
    #[must_use]
    pub const fn binding_type(&self) -> EventType {
        if self.scroll > 0 {
            return if self.modifier {
                EventType::ShiftScrollUp
            } else {
                EventType::ScrollUp
            };
        }
        if self.scroll < 0 {
            return if self.modifier {
                EventType::ShiftScrollDown
            } else {
                EventType::ScrollDown
            };
        }
        if !self.down {
            return EventType::Mouse;
        }
        if self.double {
            return EventType::DoubleClick;
        }
        match (self.left, self.modifier) {
            (true, false) => EventType::LeftClick,
            (true, true) => EventType::ShiftLeftClick,
            (false, false) => EventType::RightClick,
            (false, true) => EventType::ShiftRightClick,
        }
    }
}

/// Detects double clicks from a stream of mouse presses.
///
/// Owned by one renderer and fed only from its input path.
#[derive(Clone, Debug, Default)]
pub struct MouseClassifier {
    prev_down: Option<Instant>,
    click_rows: Vec<usize>,
}

impl MouseClassifier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Classify `event` as of now.
    pub fn classify(&mut self, event: MouseEvent) -> MouseEvent {
        self.classify_at(Instant::now(), event)
    }

    /// Classify `event` as if it arrived at `now`.
    ///
    /// Scrolls and releases pass through untouched. A right press breaks any
    /// pending sequence. A left press within [`DOUBLE_CLICK_DURATION`] of the
    /// previous press on the same row is flagged `double`, after which the
    /// sequence starts over.
    pub fn classify_at(&mut self, now: Instant, mut event: MouseEvent) -> MouseEvent {
        event.double = false;
        if event.scroll != 0 || !event.down {
            return event;
        }
        if !event.left {
            self.reset();
            return event;
        }

        let within = self
            .prev_down
            .is_some_and(|prev| now.saturating_duration_since(prev) <= DOUBLE_CLICK_DURATION);
        if within {
            self.click_rows.push(event.y);
            if self.click_rows.len() > 2 {
                self.click_rows.remove(0);
            }
        } else {
            self.click_rows.clear();
            self.click_rows.push(event.y);
        }
        self.prev_down = Some(now);

        if let &[first, second] = self.click_rows.as_slice() {
            if first == second {
                event.double = true;
                self.reset();
            }
        }
        event
    }

    /// Forget any pending click sequence.
    pub fn reset(&mut self) {
        self.prev_down = None;
        self.click_rows.clear();
    }
}
