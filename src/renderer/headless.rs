//! In-memory backend.
//!
//! [`HeadlessRenderer`] draws into a character grid instead of a terminal
//! and reads input from a channel. Windows share the grid with their
//! renderer, so the whole backend stays on one thread.

use crate::border::{BorderShape, BorderStyle};
use crate::color::Color;
use crate::error::{Error, Result};
use crate::input::{Event, EventType, MouseClassifier, MouseEvent};
use crate::log::{LogLevel, emit_log};
use crate::renderer::{FillReturn, Renderer, RendererOptions, TermSize, Window};
use crate::style::{Attr, ColorPair};
use crate::theme::{Palette, PaletteSlot};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::mpsc::{self, Receiver, Sender};
use std::time::Instant;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Raw input fed to a [`HeadlessRenderer`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RawInput {
    /// An already decoded key event.
    Key(Event),
    /// A mouse event and its arrival time, before click classification.
    Mouse(MouseEvent, Instant),
    /// The screen changed size.
    Resize { width: usize, height: usize },
}

impl RawInput {
    /// A mouse event arriving now.
    #[must_use]
    pub fn mouse(event: MouseEvent) -> Self {
        Self::Mouse(event, Instant::now())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct Cell {
    /// Empty for the trailing columns of a wide grapheme.
    grapheme: String,
    pair: ColorPair,
}

impl Cell {
    fn blank(pair: ColorPair) -> Self {
        Self {
            grapheme: " ".to_string(),
            pair,
        }
    }
}

#[derive(Debug)]
struct Screen {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
    /// Writes are dropped while paused.
    paused: bool,
    refreshes: usize,
}

impl Screen {
    fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::blank(ColorPair::default()); width * height],
            paused: false,
            refreshes: 0,
        }
    }

    fn resize(&mut self, width: usize, height: usize) {
        let mut cells = vec![Cell::blank(ColorPair::default()); width * height];
        for y in 0..height.min(self.height) {
            for x in 0..width.min(self.width) {
                cells[y * width + x] = self.cells[y * self.width + x].clone();
            }
        }
        self.width = width;
        self.height = height;
        self.cells = cells;
    }

    fn cell(&self, y: usize, x: usize) -> Option<&Cell> {
        if y < self.height && x < self.width {
            self.cells.get(y * self.width + x)
        } else {
            None
        }
    }

    /// Place a grapheme occupying `width` columns at (`y`, `x`).
    fn put(&mut self, y: usize, x: usize, grapheme: &str, width: usize, pair: ColorPair) {
        if self.paused || y >= self.height || x >= self.width {
            return;
        }
        let row = y * self.width;
        self.cells[row + x] = Cell {
            grapheme: grapheme.to_string(),
            pair,
        };
        for col in (x + 1)..(x + width).min(self.width) {
            self.cells[row + col] = Cell {
                grapheme: String::new(),
                pair,
            };
        }
    }

    fn fill_rect(&mut self, top: usize, left: usize, width: usize, height: usize, pair: ColorPair) {
        for y in top..top + height {
            for x in left..left + width {
                self.put(y, x, " ", 1, pair);
            }
        }
    }

    fn row_text(&self, y: usize) -> String {
        let start = y * self.width;
        let row: String = self.cells[start..start + self.width]
            .iter()
            .map(|cell| cell.grapheme.as_str())
            .collect();
        row.trim_end().to_string()
    }

    fn text(&self) -> String {
        (0..self.height)
            .map(|y| self.row_text(y))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Columns `grapheme` takes when it starts at column `posx`.
fn grapheme_width(grapheme: &str, posx: usize, tabstop: usize) -> usize {
    if grapheme == "\t" {
        let tabstop = tabstop.max(1);
        tabstop - posx % tabstop
    } else {
        UnicodeWidthStr::width(grapheme)
    }
}

/// Byte length of the longest prefix of `line` that fits between `posx`
/// and `width`.
fn fit(line: &str, posx: usize, width: usize, tabstop: usize) -> usize {
    let mut col = posx;
    for (offset, grapheme) in line.grapheme_indices(true) {
        let w = grapheme_width(grapheme, col, tabstop);
        if col + w > width {
            return offset;
        }
        col += w;
    }
    line.len()
}

/// A renderer that draws into memory.
///
/// Create one with [`HeadlessRenderer::new`], which also returns the sender
/// its input is read from. Dropping every sender makes
/// [`get_char`](Renderer::get_char) report [`EventType::Fatal`].
#[derive(Debug)]
pub struct HeadlessRenderer {
    screen: Rc<RefCell<Screen>>,
    options: RendererOptions,
    palette: Palette,
    input: Receiver<RawInput>,
    classifier: MouseClassifier,
    initialized: bool,
    closed: bool,
}

impl HeadlessRenderer {
    /// Create a `width` x `height` renderer and the sender feeding its input.
    #[must_use]
    pub fn new(
        width: usize,
        height: usize,
        options: RendererOptions,
        palette: Palette,
    ) -> (Self, Sender<RawInput>) {
        let (tx, rx) = mpsc::channel();
        let renderer = Self {
            screen: Rc::new(RefCell::new(Screen::new(width, height))),
            options,
            palette,
            input: rx,
            classifier: MouseClassifier::new(),
            initialized: false,
            closed: false,
        };
        (renderer, tx)
    }

    #[must_use]
    pub const fn options(&self) -> &RendererOptions {
        &self.options
    }

    #[must_use]
    pub const fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Border glyphs for `shape` given this renderer's unicode support.
    #[must_use]
    pub const fn border_style(&self, shape: BorderShape) -> BorderStyle {
        BorderStyle::new(shape, self.options.unicode)
    }

    /// Check if [`init`](Renderer::init) succeeded and the renderer is open.
    #[must_use]
    pub const fn is_initialized(&self) -> bool {
        self.initialized
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.screen.borrow().paused
    }

    #[must_use]
    pub const fn is_closed(&self) -> bool {
        self.closed
    }

    /// Number of refreshes so far.
    #[must_use]
    pub fn refreshes(&self) -> usize {
        self.screen.borrow().refreshes
    }

    /// Screen contents, one line per row with trailing blanks trimmed.
    #[must_use]
    pub fn text(&self) -> String {
        self.screen.borrow().text()
    }

    /// Grapheme at (`y`, `x`), empty for the tail of a wide grapheme.
    #[must_use]
    pub fn grapheme_at(&self, y: usize, x: usize) -> Option<String> {
        self.screen.borrow().cell(y, x).map(|cell| cell.grapheme.clone())
    }

    /// Colors at (`y`, `x`).
    #[must_use]
    pub fn pair_at(&self, y: usize, x: usize) -> Option<ColorPair> {
        self.screen.borrow().cell(y, x).map(|cell| cell.pair)
    }

    fn blank_screen(&self) {
        let pair = self.palette[PaletteSlot::Normal];
        let mut screen = self.screen.borrow_mut();
        let (width, height) = (screen.width, screen.height);
        screen.fill_rect(0, 0, width, height, pair);
    }
}

impl Renderer for HeadlessRenderer {
    fn init(&mut self) -> Result<()> {
        if self.closed {
            return Err(Error::Capability("renderer is closed".to_string()));
        }
        let (width, height) = (self.max_x(), self.max_y());
        if width == 0 || height == 0 {
            return Err(Error::Capability(format!(
                "screen has no drawable area ({width}x{height})"
            )));
        }
        self.screen.borrow_mut().paused = false;
        self.blank_screen();
        self.initialized = true;
        emit_log(
            LogLevel::Debug,
            &format!("headless renderer initialized ({width}x{height})"),
        );
        Ok(())
    }

    fn pause(&mut self, clear: bool) {
        if clear {
            self.blank_screen();
        }
        self.screen.borrow_mut().paused = true;
        emit_log(LogLevel::Debug, &format!("renderer paused (clear: {clear})"));
    }

    fn resume(&mut self, clear: bool, sigcont: bool) {
        self.screen.borrow_mut().paused = false;
        if sigcont {
            self.classifier.reset();
        }
        if clear {
            self.blank_screen();
        }
        emit_log(
            LogLevel::Debug,
            &format!("renderer resumed (clear: {clear}, sigcont: {sigcont})"),
        );
    }

    fn clear(&mut self) {
        self.blank_screen();
    }

    fn refresh_windows(&mut self, windows: &mut [&mut dyn Window]) {
        for window in windows.iter_mut() {
            window.refresh();
        }
        self.refresh();
    }

    fn refresh(&mut self) {
        let mut screen = self.screen.borrow_mut();
        if !screen.paused {
            screen.refreshes += 1;
        }
    }

    fn close(&mut self) {
        if self.closed {
            return;
        }
        self.closed = true;
        self.initialized = false;
        emit_log(LogLevel::Debug, "headless renderer closed");
    }

    fn get_char(&mut self) -> Event {
        if self.closed {
            return EventType::Fatal.as_event();
        }
        loop {
            match self.input.recv() {
                Ok(RawInput::Key(event)) => return event,
                Ok(RawInput::Mouse(event, at)) => {
                    if self.options.mouse {
                        return Event::mouse(self.classifier.classify_at(at, event));
                    }
                }
                Ok(RawInput::Resize { width, height }) => {
                    self.screen.borrow_mut().resize(width, height);
                    emit_log(
                        LogLevel::Debug,
                        &format!("screen resized to {width}x{height}"),
                    );
                    return EventType::Resize.as_event();
                }
                Err(_) => {
                    emit_log(LogLevel::Warn, "input channel disconnected");
                    return EventType::Fatal.as_event();
                }
            }
        }
    }

    fn max_x(&self) -> usize {
        self.screen.borrow().width
    }

    fn max_y(&self) -> usize {
        self.screen.borrow().height
    }

    fn size(&self) -> TermSize {
        let screen = self.screen.borrow();
        TermSize {
            lines: screen.height,
            columns: screen.width,
            px_width: 0,
            px_height: 0,
        }
    }

    fn new_window(
        &mut self,
        top: usize,
        left: usize,
        width: usize,
        height: usize,
        preview: bool,
        border: BorderStyle,
    ) -> Box<dyn Window> {
        let (color, border_color) = if preview {
            (
                self.palette[PaletteSlot::Preview],
                self.palette[PaletteSlot::PreviewBorder],
            )
        } else {
            (
                self.palette[PaletteSlot::Normal],
                self.palette[PaletteSlot::Border],
            )
        };
        let mut window = HeadlessWindow {
            screen: Rc::clone(&self.screen),
            top,
            left,
            width,
            height,
            border,
            color,
            border_color,
            tabstop: self.options.tabstop,
            posx: 0,
            posy: 0,
            closed: false,
        };
        window.draw_border();
        Box::new(window)
    }
}

/// A window of a [`HeadlessRenderer`].
#[derive(Debug)]
pub struct HeadlessWindow {
    screen: Rc<RefCell<Screen>>,
    top: usize,
    left: usize,
    width: usize,
    height: usize,
    border: BorderStyle,
    color: ColorPair,
    border_color: ColorPair,
    tabstop: usize,
    posx: usize,
    posy: usize,
    closed: bool,
}

impl HeadlessWindow {
    /// Write `text` at the cursor, clipped to the window, and advance.
    fn write(&mut self, pair: ColorPair, text: &str) {
        if self.closed {
            return;
        }
        let mut screen = self.screen.borrow_mut();
        for grapheme in text.graphemes(true) {
            if grapheme == "\n" || grapheme == "\r" || grapheme == "\r\n" {
                continue;
            }
            let width = grapheme_width(grapheme, self.posx, self.tabstop);
            if self.posy < self.height && self.posx + width <= self.width {
                let (y, x) = (self.top + self.posy, self.left + self.posx);
                if grapheme == "\t" {
                    for col in 0..width {
                        screen.put(y, x + col, " ", 1, pair);
                    }
                } else {
                    screen.put(y, x, grapheme, width, pair);
                }
            }
            self.posx += width;
        }
    }

    fn put_glyph(&self, screen: &mut Screen, y: usize, x: usize, glyph: char) {
        let mut buf = [0u8; 4];
        let glyph = glyph.encode_utf8(&mut buf);
        let width = UnicodeWidthStr::width(&*glyph).max(1);
        screen.put(self.top + y, self.left + x, glyph, width, self.border_color);
    }

    fn fill_with(&mut self, pair: ColorPair, text: &str) -> FillReturn {
        if self.posy >= self.height {
            return FillReturn::Suspend;
        }
        let mut lines = text.split('\n').peekable();
        while let Some(line) = lines.next() {
            let mut rest = line;
            loop {
                let mut len = fit(rest, self.posx, self.width, self.tabstop);
                if len == 0 && self.posx == 0 {
                    // Nothing fits in an empty row; emit one grapheme anyway.
                    len = rest.graphemes(true).next().map_or(0, str::len);
                }
                self.write(pair, &rest[..len]);
                if len == rest.len() {
                    break;
                }
                rest = &rest[len..];
                if self.posy + 1 >= self.height {
                    return FillReturn::Suspend;
                }
                self.move_and_clear(self.posy + 1, 0);
            }
            if lines.peek().is_some() {
                if self.posy + 1 >= self.height {
                    return FillReturn::Suspend;
                }
                self.move_and_clear(self.posy + 1, 0);
            }
        }
        if self.posx < self.width {
            FillReturn::Continue
        } else if self.posy + 1 >= self.height {
            FillReturn::Suspend
        } else {
            FillReturn::NextLine
        }
    }
}

impl Window for HeadlessWindow {
    fn top(&self) -> usize {
        self.top
    }

    fn left(&self) -> usize {
        self.left
    }

    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn x(&self) -> usize {
        self.posx
    }

    fn y(&self) -> usize {
        self.posy
    }

    fn move_to(&mut self, y: usize, x: usize) {
        self.posy = y;
        self.posx = x;
    }

    fn move_and_clear(&mut self, y: usize, x: usize) {
        self.move_to(y, x);
        if self.closed || y >= self.height || x >= self.width {
            return;
        }
        self.screen.borrow_mut().fill_rect(
            self.top + y,
            self.left + x,
            self.width - x,
            1,
            self.color,
        );
    }

    fn print(&mut self, text: &str) {
        self.cprint(self.color, text);
    }

    fn cprint(&mut self, pair: ColorPair, text: &str) {
        let len = fit(text, self.posx, self.width, self.tabstop);
        self.write(pair, &text[..len]);
    }

    fn fill(&mut self, text: &str) -> FillReturn {
        self.fill_with(self.color, text)
    }

    fn cfill(&mut self, fg: Color, bg: Color, attr: Attr, text: &str) -> FillReturn {
        let fg = if fg.is_default() { self.color.fg() } else { fg };
        let bg = if bg.is_default() { self.color.bg() } else { bg };
        self.fill_with(ColorPair::new(fg, bg, attr), text)
    }

    fn finish_fill(&mut self) {
        if self.posy < self.height {
            self.move_and_clear(self.posy, self.posx);
        }
    }

    fn draw_border(&mut self) {
        let shape = self.border.shape();
        if self.closed || self.width == 0 || self.height == 0 {
            return;
        }
        let (right, bottom) = (self.width - 1, self.height - 1);
        let (has_top, has_bottom) = (shape.has_top(), shape.has_bottom() && bottom > 0);
        let (has_left, has_right) = (shape.has_left(), shape.has_right() && right > 0);
        let style = self.border;
        let mut screen = self.screen.borrow_mut();

        let mut horizontal = |y: usize, edge: char, first: char, last: char| {
            for x in 0..=right {
                let glyph = match x {
                    0 if has_left => first,
                    x if x == right && has_right => last,
                    _ => edge,
                };
                self.put_glyph(&mut screen, y, x, glyph);
            }
        };
        if has_top {
            horizontal(0, style.top(), style.top_left(), style.top_right());
        }
        if has_bottom {
            horizontal(bottom, style.bottom(), style.bottom_left(), style.bottom_right());
        }

        let first_row = usize::from(has_top);
        let last_row = if has_bottom { bottom } else { bottom + 1 };
        for y in first_row..last_row {
            if has_left {
                self.put_glyph(&mut screen, y, 0, style.left());
            }
            if has_right {
                self.put_glyph(&mut screen, y, right, style.right());
            }
        }
    }

    fn refresh(&mut self) {}

    fn erase(&mut self) {
        if self.closed {
            return;
        }
        self.screen.borrow_mut().fill_rect(
            self.top,
            self.left,
            self.width,
            self.height,
            self.color,
        );
        self.draw_border();
        self.move_to(0, 0);
    }

    fn close(&mut self) {
        self.closed = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{ColorTheme, DARK_256, resolve_palette};
    use std::time::Duration;

    fn setup(width: usize, height: usize) -> (HeadlessRenderer, Sender<RawInput>) {
        let palette = resolve_palette(&ColorTheme::EMPTY, &DARK_256, false);
        let (mut renderer, tx) =
            HeadlessRenderer::new(width, height, RendererOptions::default(), palette);
        renderer.init().unwrap();
        (renderer, tx)
    }

    fn plain() -> BorderStyle {
        BorderStyle::new(BorderShape::None, true)
    }

    #[test]
    fn test_fit_respects_wide_graphemes_and_tabs() {
        assert_eq!(fit("abc", 0, 2, 8), 2);
        assert_eq!(fit("日本", 0, 3, 8), "日".len());
        assert_eq!(fit("\tx", 0, 8, 8), 1);
        assert_eq!(fit("\tx", 0, 9, 8), 2);
        assert_eq!(fit("a\tb", 3, 8, 4), 2);
    }

    #[test]
    fn test_init_rejects_empty_screen() {
        let palette = Palette::derive(&ColorTheme::EMPTY);
        let (mut renderer, _tx) = HeadlessRenderer::new(0, 5, RendererOptions::default(), palette);
        assert!(matches!(renderer.init(), Err(Error::Capability(_))));
        assert!(!renderer.is_initialized());
    }

    #[test]
    fn test_init_rejects_closed_renderer() {
        let (mut renderer, _tx) = setup(4, 4);
        renderer.close();
        assert!(matches!(renderer.init(), Err(Error::Capability(_))));
        assert!(renderer.is_closed());
        assert!(!renderer.is_initialized());
    }

    #[test]
    fn test_fill_returns_next_line_when_row_is_exactly_full() {
        let (mut renderer, _tx) = setup(10, 3);
        let mut window = renderer.new_window(0, 0, 5, 3, false, plain());
        assert_eq!(window.fill("hello"), FillReturn::NextLine);
        assert_eq!(window.y(), 0);
        assert_eq!(window.x(), 5);
    }

    #[test]
    fn test_fill_wraps_and_suspends() {
        let (mut renderer, _tx) = setup(10, 3);
        let mut window = renderer.new_window(0, 0, 4, 2, false, plain());
        assert_eq!(window.fill("abcdefghij"), FillReturn::Suspend);
        assert_eq!(renderer.text(), "abcd\nefgh\n");
    }

    #[test]
    fn test_fill_suspends_when_last_row_is_exactly_full() {
        let (mut renderer, _tx) = setup(6, 2);
        let mut window = renderer.new_window(0, 0, 3, 1, false, plain());
        assert_eq!(window.fill("abc"), FillReturn::Suspend);
        assert_eq!((window.y(), window.x()), (0, 3));
        assert_eq!(renderer.text(), "abc\n");
    }

    #[test]
    fn test_fill_below_window_suspends() {
        let (mut renderer, _tx) = setup(6, 2);
        let mut window = renderer.new_window(0, 0, 3, 1, false, plain());
        window.move_to(1, 0);
        for text in ["def", "ghi", "x", ""] {
            assert_eq!(window.fill(text), FillReturn::Suspend, "{text:?}");
        }
        assert_eq!(renderer.text(), "\n");
    }

    #[test]
    fn test_fill_newlines_move_down() {
        let (mut renderer, _tx) = setup(6, 3);
        let mut window = renderer.new_window(0, 0, 6, 3, false, plain());
        assert_eq!(window.fill("ab\ncd"), FillReturn::Continue);
        assert_eq!((window.y(), window.x()), (1, 2));
        assert_eq!(window.fill("\n\n"), FillReturn::Suspend);
        assert_eq!(renderer.text(), "ab\ncd\n");
    }

    #[test]
    fn test_wide_grapheme_never_splits() {
        let (mut renderer, _tx) = setup(5, 2);
        let mut window = renderer.new_window(0, 0, 3, 2, false, plain());
        assert_eq!(window.fill("a日本"), FillReturn::Continue);
        assert_eq!(renderer.text(), "a日\n本");
        assert_eq!(renderer.grapheme_at(0, 2).as_deref(), Some(""));
    }

    #[test]
    fn test_tabs_expand_to_tabstop() {
        let palette = Palette::derive(&ColorTheme::EMPTY);
        let options = RendererOptions {
            tabstop: 4,
            ..RendererOptions::default()
        };
        let (mut renderer, _tx) = HeadlessRenderer::new(12, 1, options, palette);
        renderer.init().unwrap();
        let mut window = renderer.new_window(0, 0, 12, 1, false, plain());
        window.fill("a\tb");
        assert_eq!(window.x(), 5);
        assert_eq!(renderer.text(), "a   b");
    }

    #[test]
    fn test_cfill_substitutes_window_colors() {
        let (mut renderer, _tx) = setup(6, 2);
        let mut window = renderer.new_window(0, 0, 6, 2, true, plain());
        window.cfill(Color::RED, Color::DEFAULT, Attr::BOLD, "x");
        let preview = renderer.palette()[PaletteSlot::Preview];
        let pair = renderer.pair_at(0, 0).unwrap();
        assert_eq!(pair.fg(), Color::RED);
        assert_eq!(pair.bg(), preview.bg());
        assert_eq!(pair.attr(), Attr::BOLD);
    }

    #[test]
    fn test_cprint_truncates_at_edge() {
        let (mut renderer, _tx) = setup(8, 1);
        let mut window = renderer.new_window(0, 2, 4, 1, false, plain());
        window.cprint(ColorPair::default(), "abcdef");
        assert_eq!(renderer.text(), "  abcd");
        assert_eq!(window.x(), 4);
    }

    #[test]
    fn test_finish_fill_clears_rest_of_row() {
        let (mut renderer, _tx) = setup(6, 1);
        let mut window = renderer.new_window(0, 0, 6, 1, false, plain());
        window.print("abcdef");
        window.move_to(0, 2);
        window.finish_fill();
        assert_eq!(renderer.text(), "ab");
    }

    #[test]
    fn test_paused_screen_ignores_writes() {
        let (mut renderer, _tx) = setup(6, 1);
        let mut window = renderer.new_window(0, 0, 6, 1, false, plain());
        renderer.pause(false);
        assert!(renderer.is_paused());
        window.print("hidden");
        renderer.refresh();
        assert_eq!(renderer.text(), "");
        assert_eq!(renderer.refreshes(), 0);

        renderer.resume(false, false);
        window.move_to(0, 0);
        window.print("shown");
        renderer.refresh_windows(&mut [window.as_mut()]);
        assert_eq!(renderer.text(), "shown");
        assert_eq!(renderer.refreshes(), 1);
    }

    #[test]
    fn test_closed_window_ignores_writes() {
        let (mut renderer, _tx) = setup(6, 1);
        let mut window = renderer.new_window(0, 0, 6, 1, false, plain());
        window.close();
        window.print("gone");
        window.erase();
        assert_eq!(renderer.text(), "");
    }

    #[test]
    fn test_border_edges_follow_shape() {
        let (mut renderer, _tx) = setup(4, 3);
        let _top = renderer.new_window(0, 0, 4, 3, false, BorderStyle::new(BorderShape::Top, true));
        assert_eq!(renderer.text(), "────\n\n");

        let (mut renderer, _tx) = setup(4, 3);
        let _left = renderer.new_window(0, 0, 4, 3, false, BorderStyle::new(BorderShape::Left, true));
        assert_eq!(renderer.text(), "│\n│\n│");
    }

    #[test]
    fn test_border_uses_border_colors() {
        let (mut renderer, _tx) = setup(3, 3);
        let _window = renderer.new_window(0, 0, 3, 3, true, BorderStyle::default());
        let expected = renderer.palette()[PaletteSlot::PreviewBorder];
        assert_eq!(renderer.pair_at(0, 0), Some(expected));
        assert_eq!(renderer.pair_at(1, 1), Some(renderer.palette()[PaletteSlot::Normal]));
    }

    #[test]
    fn test_get_char_passes_keys() {
        let (mut renderer, tx) = setup(4, 4);
        tx.send(RawInput::Key(Event::key('q'))).unwrap();
        tx.send(RawInput::Key(EventType::CtrlC.as_event())).unwrap();
        assert_eq!(renderer.get_char(), Event::key('q'));
        assert_eq!(renderer.get_char().kind, EventType::CtrlC);
    }

    #[test]
    fn test_get_char_classifies_mouse() {
        let (mut renderer, tx) = setup(4, 4);
        let t0 = Instant::now();
        let click = MouseEvent::click(1, 1, true);
        tx.send(RawInput::Mouse(click, t0)).unwrap();
        tx.send(RawInput::Mouse(click, t0 + Duration::from_millis(100)))
            .unwrap();
        let first = renderer.get_char();
        assert_eq!(first.kind, EventType::Mouse);
        assert!(!first.mouse.unwrap().double);
        assert!(renderer.get_char().mouse.unwrap().double);
    }

    #[test]
    fn test_get_char_skips_mouse_when_disabled() {
        let palette = Palette::derive(&ColorTheme::EMPTY);
        let options = RendererOptions {
            mouse: false,
            ..RendererOptions::default()
        };
        let (mut renderer, tx) = HeadlessRenderer::new(4, 4, options, palette);
        tx.send(RawInput::mouse(MouseEvent::click(0, 0, true))).unwrap();
        tx.send(RawInput::Key(Event::key('x'))).unwrap();
        assert_eq!(renderer.get_char(), Event::key('x'));
    }

    #[test]
    fn test_get_char_resize() {
        let (mut renderer, tx) = setup(4, 4);
        tx.send(RawInput::Resize { width: 7, height: 2 }).unwrap();
        assert_eq!(renderer.get_char().kind, EventType::Resize);
        assert_eq!(
            renderer.size(),
            TermSize {
                lines: 2,
                columns: 7,
                px_width: 0,
                px_height: 0
            }
        );
    }

    #[test]
    fn test_get_char_reports_fatal_on_disconnect() {
        let (mut renderer, tx) = setup(4, 4);
        drop(tx);
        assert_eq!(renderer.get_char().kind, EventType::Fatal);
    }

    #[test]
    fn test_border_style_follows_unicode_option() {
        let palette = Palette::derive(&ColorTheme::EMPTY);
        let options = RendererOptions {
            unicode: false,
            ..RendererOptions::default()
        };
        let (renderer, _tx) = HeadlessRenderer::new(4, 4, options, palette);
        assert_eq!(renderer.border_style(BorderShape::Double).top_left(), '+');
    }
}
