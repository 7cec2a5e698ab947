//! The rendering contract a terminal backend implements.
//!
//! A [`Renderer`] owns the screen: its lifecycle, geometry, blocking input
//! and the windows drawn on it. A [`Window`] is a rectangular region with
//! its own cursor that text is printed or filled into.
//!
//! Only [`Renderer::init`] can fail. Every other operation is best-effort;
//! a backend that cannot complete a draw call drops it.
//!
//! # Fill protocol
//!
//! [`Window::fill`] writes text starting at the window cursor, wrapping at
//! the right edge. Its [`FillReturn`] drives the caller's layout loop:
//!
//! ```
//! use finder_tui::renderer::{FillReturn, HeadlessRenderer, Renderer, RendererOptions};
//! use finder_tui::theme::{DARK_256, resolve_palette};
//! use finder_tui::{BorderStyle, ColorTheme};
//!
//! let palette = resolve_palette(&ColorTheme::EMPTY, &DARK_256, false);
//! let (mut renderer, _input) = HeadlessRenderer::new(10, 3, RendererOptions::default(), palette);
//! renderer.init()?;
//!
//! let mut window = renderer.new_window(0, 0, 4, 2, false, BorderStyle::default());
//! assert_eq!(window.fill("ab"), FillReturn::Continue);
//! assert_eq!(window.fill("cd"), FillReturn::NextLine);
//! assert_eq!(window.fill("efghij"), FillReturn::Suspend);
//! # Ok::<(), finder_tui::Error>(())
//! ```

mod headless;

pub use headless::{HeadlessRenderer, HeadlessWindow, RawInput};

use crate::border::BorderStyle;
use crate::color::Color;
use crate::error::Result;
use crate::input::Event;
use crate::style::{Attr, ColorPair};

/// Renderer configuration options.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RendererOptions {
    /// Enable mouse tracking.
    pub mouse: bool,
    /// Tab stop width in columns.
    pub tabstop: usize,
    /// Terminal can draw unicode glyphs.
    pub unicode: bool,
}

impl Default for RendererOptions {
    fn default() -> Self {
        Self {
            mouse: true,
            tabstop: 8,
            unicode: true,
        }
    }
}

/// Outcome of a [`Window::fill`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FillReturn {
    /// Room remains on the current line.
    Continue,
    /// The current line is full; the caller should move to the next one.
    NextLine,
    /// The window has no rows left. The caller must stop emitting.
    Suspend,
}

/// Screen dimensions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct TermSize {
    pub lines: usize,
    pub columns: usize,
    /// Pixel width, zero when unknown.
    pub px_width: usize,
    /// Pixel height, zero when unknown.
    pub px_height: usize,
}

/// A screen that windows are drawn on.
///
/// Used from a single thread. [`get_char`](Self::get_char) is the only
/// blocking call.
pub trait Renderer {
    /// Prepare the screen for drawing.
    fn init(&mut self) -> Result<()>;

    /// Stop drawing, optionally clearing the screen.
    fn pause(&mut self, clear: bool);

    /// Resume after [`pause`](Self::pause). `sigcont` is set when the
    /// process was stopped in between and terminal state must be restored.
    fn resume(&mut self, clear: bool, sigcont: bool);

    fn clear(&mut self);

    /// Flush `windows` to the screen, in order.
    fn refresh_windows(&mut self, windows: &mut [&mut dyn Window]);

    fn refresh(&mut self);

    fn close(&mut self);

    /// Block until the next input event.
    ///
    /// Returns an event of kind [`EventType::Fatal`](crate::EventType::Fatal)
    /// when input can no longer be read.
    fn get_char(&mut self) -> Event;

    /// Width in columns.
    fn max_x(&self) -> usize;

    /// Height in lines.
    fn max_y(&self) -> usize;

    fn size(&self) -> TermSize;

    /// Create a window. `preview` selects the preview colors.
    fn new_window(
        &mut self,
        top: usize,
        left: usize,
        width: usize,
        height: usize,
        preview: bool,
        border: BorderStyle,
    ) -> Box<dyn Window>;
}

/// A rectangular drawing region with its own cursor.
///
/// Coordinates passed to a window are relative to its top-left corner.
pub trait Window {
    fn top(&self) -> usize;
    fn left(&self) -> usize;
    fn width(&self) -> usize;
    fn height(&self) -> usize;

    /// Cursor column.
    fn x(&self) -> usize;

    /// Cursor row.
    fn y(&self) -> usize;

    /// Check if absolute screen position (`y`, `x`) lies inside the window.
    fn enclose(&self, y: usize, x: usize) -> bool {
        y >= self.top()
            && y < self.top() + self.height()
            && x >= self.left()
            && x < self.left() + self.width()
    }

    fn move_to(&mut self, y: usize, x: usize);

    /// Move the cursor and clear from there to the end of the row.
    fn move_and_clear(&mut self, y: usize, x: usize);

    /// Print `text` in the window colors without wrapping.
    fn print(&mut self, text: &str);

    /// Print `text` in `pair` without wrapping.
    fn cprint(&mut self, pair: ColorPair, text: &str);

    /// Write `text` with wrapping in the window colors.
    fn fill(&mut self, text: &str) -> FillReturn;

    /// Write `text` with wrapping. A [`Color::DEFAULT`] `fg` or `bg` is
    /// replaced by the window color.
    fn cfill(&mut self, fg: Color, bg: Color, attr: Attr, text: &str) -> FillReturn;

    /// Clear the rest of the current row after a fill.
    fn finish_fill(&mut self);

    fn draw_border(&mut self);

    fn refresh(&mut self);

    /// Blank the window and home the cursor.
    fn erase(&mut self);

    fn close(&mut self);
}
