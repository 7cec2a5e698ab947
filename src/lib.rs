//! `finder-tui` - terminal presentation core for an interactive fuzzy finder
//!
//! The crate defines what a finder draws with and reacts to, independent of
//! any concrete terminal driver:
//!
//! - [`Color`], [`Attr`], [`ColorAttr`] and [`ColorPair`]: the color and
//!   attribute model, with sentinel-aware merging.
//! - [`theme`]: base themes, the slot cascade that resolves a user overlay
//!   over them, and the [`Palette`] of draw-ready pairs derived from it.
//! - [`BorderShape`] and [`BorderStyle`]: the border glyph catalog.
//! - [`Event`], [`EventType`] and [`MouseClassifier`]: the input model.
//! - [`Renderer`] and [`Window`]: the contract a backend implements, with
//!   an in-memory [`HeadlessRenderer`].
//!
//! # Examples
//!
//! ```
//! use finder_tui::theme::{BaseTheme, PaletteSlot, parse_theme_options};
//! use finder_tui::{Color, Palette};
//!
//! let options = parse_theme_options(BaseTheme::Dark256, "hl:#ff8700,bg+:235")?;
//! let palette = Palette::derive(&options.resolve(false));
//!
//! assert_eq!(palette[PaletteSlot::Match].fg(), Color::rgb(0xff, 0x87, 0x00));
//! assert_eq!(palette[PaletteSlot::Current].bg(), Color::indexed(235));
//! # Ok::<(), finder_tui::Error>(())
//! ```

// Crate-level lint configuration
#![warn(unsafe_code)]
#![allow(clippy::module_name_repetitions)] // Allow ColorTheme in theme, etc
#![allow(clippy::struct_excessive_bools)] // Mouse events carry several flags
#![allow(clippy::missing_errors_doc)] // Docs WIP
#![allow(clippy::missing_panics_doc)] // Docs WIP
#![allow(clippy::doc_markdown)] // Allow technical names without backticks
#![allow(clippy::use_self)] // Allow explicit type names in impl blocks
#![allow(clippy::too_many_arguments)] // Window factory mirrors the backend contract
#![allow(clippy::fn_params_excessive_bools)] // pause/resume flags
#![allow(clippy::collapsible_if)] // Sometimes nested ifs are clearer
#![allow(clippy::items_after_statements)] // Common pattern in tests

pub mod border;
pub mod color;
pub mod error;
pub mod input;
pub mod log;
pub mod renderer;
pub mod style;
pub mod terminal;
pub mod theme;

// Re-export core types at crate root
pub use border::{BorderShape, BorderStyle};
pub use color::Color;
pub use error::{Error, Result};
pub use log::{LogLevel, clear_log_callback, emit_log, set_log_callback};
pub use style::{Attr, ColorAttr, ColorPair};

// Re-export theme types
pub use theme::{ColorTheme, Palette, ThemeSlot};

// Re-export input types
pub use input::{Event, EventType, MouseClassifier, MouseEvent};

// Re-export the rendering contract
pub use renderer::{FillReturn, HeadlessRenderer, Renderer, RendererOptions, TermSize, Window};
pub use terminal::{Capabilities, ColorSupport};
