//! Color themes and their resolution into a palette.
//!
//! A [`ColorTheme`] maps every [`ThemeSlot`] to a [`ColorAttr`]. Users
//! supply a sparse overlay (most slots unset); [`resolve_theme`] cascades it
//! over one of the built-in base themes and [`Palette::derive`] turns the
//! result into the [`ColorPair`](crate::ColorPair)s draw calls use.
//!
//! # Slots
//!
//! *Primitive* slots resolve directly against the base theme. *Compound*
//! slots have a fallback slot ([`ThemeSlot::fallback`]) and resolve on top
//! of the fallback's already-resolved value, so overlaying only `fg`
//! recolors `selected-fg` and `preview-fg` as well.
//!
//! ```
//! use finder_tui::theme::{DARK_256, ThemeSlot, resolve_theme};
//! use finder_tui::{Color, ColorAttr, ColorTheme};
//!
//! let overlay = ColorTheme::EMPTY.with(ThemeSlot::Fg, ColorAttr::new(Color::indexed(252)));
//! let theme = resolve_theme(&overlay, &DARK_256, false);
//!
//! assert_eq!(theme[ThemeSlot::SelectedFg].color, Some(Color::indexed(252)));
//! assert_eq!(theme[ThemeSlot::Prompt].color, Some(Color::indexed(110)));
//! ```

mod palette;
mod parse;
mod presets;

pub use palette::{Palette, PaletteSlot};
pub use parse::{ThemeOptions, parse_theme_options};
pub use presets::{BaseTheme, DARK_256, DEFAULT_16, LIGHT_256, NO_COLOR};

use crate::color::Color;
use crate::error::{Error, Result};
use crate::log::{LogLevel, emit_log};
use crate::style::ColorAttr;
use std::fmt;
use std::ops::Index;
use std::str::FromStr;

/// A named semantic color role.
///
/// Primitive slots come first. Compound slots follow in an order where
/// every fallback precedes the slots that depend on it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ThemeSlot {
    /// Query text.
    Input,
    Fg,
    Bg,
    /// Background of the current row.
    DarkBg,
    Prompt,
    /// Highlighted matched substring.
    Match,
    /// Text of the current row.
    Current,
    /// Highlighted matched substring on the current row.
    CurrentMatch,
    Spinner,
    Info,
    /// Pointer on the current row.
    Cursor,
    /// Multi-select marker.
    Marker,
    Header,
    Border,
    BorderLabel,

    /// Query text when input is disabled.
    Disabled,
    SelectedFg,
    SelectedBg,
    SelectedMatch,
    PreviewFg,
    PreviewBg,
    /// Pointer and marker column.
    Gutter,
    Separator,
    Scrollbar,
    PreviewBorder,
    PreviewScrollbar,
    PreviewLabel,
}

impl ThemeSlot {
    pub const COUNT: usize = 27;

    /// Every slot, primitives first.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Input,
        Self::Fg,
        Self::Bg,
        Self::DarkBg,
        Self::Prompt,
        Self::Match,
        Self::Current,
        Self::CurrentMatch,
        Self::Spinner,
        Self::Info,
        Self::Cursor,
        Self::Marker,
        Self::Header,
        Self::Border,
        Self::BorderLabel,
        Self::Disabled,
        Self::SelectedFg,
        Self::SelectedBg,
        Self::SelectedMatch,
        Self::PreviewFg,
        Self::PreviewBg,
        Self::Gutter,
        Self::Separator,
        Self::Scrollbar,
        Self::PreviewBorder,
        Self::PreviewScrollbar,
        Self::PreviewLabel,
    ];

    #[must_use]
    pub const fn as_usize(self) -> usize {
        self as usize
    }

    /// Option name used by `--color`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Input => "query",
            Self::Fg => "fg",
            Self::Bg => "bg",
            Self::DarkBg => "bg+",
            Self::Prompt => "prompt",
            Self::Match => "hl",
            Self::Current => "fg+",
            Self::CurrentMatch => "hl+",
            Self::Spinner => "spinner",
            Self::Info => "info",
            Self::Cursor => "pointer",
            Self::Marker => "marker",
            Self::Header => "header",
            Self::Border => "border",
            Self::BorderLabel => "label",
            Self::Disabled => "disabled",
            Self::SelectedFg => "selected-fg",
            Self::SelectedBg => "selected-bg",
            Self::SelectedMatch => "selected-hl",
            Self::PreviewFg => "preview-fg",
            Self::PreviewBg => "preview-bg",
            Self::Gutter => "gutter",
            Self::Separator => "separator",
            Self::Scrollbar => "scrollbar",
            Self::PreviewBorder => "preview-border",
            Self::PreviewScrollbar => "preview-scrollbar",
            Self::PreviewLabel => "preview-label",
        }
    }

    /// Slot a compound slot inherits from; `None` for primitive slots.
    #[must_use]
    pub const fn fallback(self) -> Option<Self> {
        match self {
            Self::Disabled => Some(Self::Input),
            Self::SelectedFg | Self::PreviewFg => Some(Self::Fg),
            Self::SelectedBg | Self::PreviewBg => Some(Self::Bg),
            Self::SelectedMatch => Some(Self::Match),
            Self::Gutter => Some(Self::DarkBg),
            Self::Separator | Self::Scrollbar | Self::PreviewBorder => Some(Self::Border),
            Self::PreviewScrollbar => Some(Self::PreviewBorder),
            Self::PreviewLabel => Some(Self::BorderLabel),
            Self::Input
            | Self::Fg
            | Self::Bg
            | Self::DarkBg
            | Self::Prompt
            | Self::Match
            | Self::Current
            | Self::CurrentMatch
            | Self::Spinner
            | Self::Info
            | Self::Cursor
            | Self::Marker
            | Self::Header
            | Self::Border
            | Self::BorderLabel => None,
        }
    }

    #[must_use]
    pub const fn is_compound(self) -> bool {
        self.fallback().is_some()
    }
}

impl fmt::Display for ThemeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ThemeSlot {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let lower = s.trim().to_ascii_lowercase();
        let alias = match lower.as_str() {
            "input" => Some(Self::Input),
            "current-fg" => Some(Self::Current),
            "current-bg" => Some(Self::DarkBg),
            "current-hl" => Some(Self::CurrentMatch),
            "border-label" => Some(Self::BorderLabel),
            _ => None,
        };
        alias
            .or_else(|| Self::ALL.into_iter().find(|slot| slot.name() == lower))
            .ok_or_else(|| Error::InvalidColorSpec(format!("unknown color slot: {s}")))
    }
}

/// A full set of slot values.
///
/// Overlays leave most slots [`ColorAttr::UNDEFINED`]; resolved themes are
/// produced by [`resolve_theme`] and never mutated afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorTheme {
    colored: bool,
    slots: [ColorAttr; ThemeSlot::COUNT],
}

impl Default for ColorTheme {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl ColorTheme {
    /// A colored theme with every slot unset.
    pub const EMPTY: Self = Self {
        colored: true,
        slots: [ColorAttr::UNDEFINED; ThemeSlot::COUNT],
    };

    /// Return a copy with `slot` set to `value`.
    #[must_use]
    pub const fn with(mut self, slot: ThemeSlot, value: ColorAttr) -> Self {
        self.slots[slot.as_usize()] = value;
        self
    }

    /// Return a copy with the colored flag set.
    #[must_use]
    pub const fn with_colored(mut self, colored: bool) -> Self {
        self.colored = colored;
        self
    }

    /// Check if the theme uses colors at all.
    #[must_use]
    pub const fn is_colored(&self) -> bool {
        self.colored
    }

    #[must_use]
    pub const fn get(&self, slot: ThemeSlot) -> ColorAttr {
        self.slots[slot.as_usize()]
    }

    pub fn set(&mut self, slot: ThemeSlot, value: ColorAttr) {
        self.slots[slot.as_usize()] = value;
    }

    /// Iterate over `(slot, value)` in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (ThemeSlot, ColorAttr)> + '_ {
        ThemeSlot::ALL.into_iter().map(|slot| (slot, self.get(slot)))
    }
}

impl Index<ThemeSlot> for ColorTheme {
    type Output = ColorAttr;

    fn index(&self, slot: ThemeSlot) -> &ColorAttr {
        &self.slots[slot.as_usize()]
    }
}

/// Cascade `overlay` over `base`.
///
/// With `force_black`, the background slot is black regardless of either
/// theme. Primitive slots are resolved first; compound slots are then
/// resolved on top of their fallback's resolved value. The result is colored
/// only if both inputs are.
#[must_use]
pub fn resolve_theme(overlay: &ColorTheme, base: &ColorTheme, force_black: bool) -> ColorTheme {
    let mut overlay = *overlay;
    if force_black {
        overlay.set(ThemeSlot::Bg, ColorAttr::new(Color::BLACK));
    }

    let mut resolved = ColorTheme::EMPTY.with_colored(overlay.colored && base.colored);
    for slot in ThemeSlot::ALL.into_iter().filter(|slot| !slot.is_compound()) {
        resolved.set(slot, base[slot].merge(overlay[slot]));
    }
    for slot in ThemeSlot::ALL {
        if let Some(fallback) = slot.fallback() {
            let own = base[slot].merge(overlay[slot]);
            resolved.set(slot, resolved[fallback].merge(own));
        }
    }

    emit_log(
        LogLevel::Debug,
        &format!(
            "resolved theme (colored: {}, force_black: {force_black})",
            resolved.colored
        ),
    );
    resolved
}

/// Resolve a theme and derive its palette in one step.
#[must_use]
pub fn resolve_palette(overlay: &ColorTheme, base: &ColorTheme, force_black: bool) -> Palette {
    Palette::derive(&resolve_theme(overlay, base, force_black))
}
