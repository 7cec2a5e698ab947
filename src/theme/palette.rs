//! Deriving draw-ready color pairs from a resolved theme.

use crate::color::Color;
use crate::style::{Attr, ColorAttr, ColorPair};
use crate::theme::{ColorTheme, ThemeSlot};
use std::ops::Index;

/// A color pair used by the finder's drawing code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PaletteSlot {
    Prompt,
    Normal,
    Selected,
    Input,
    Disabled,
    Match,
    SelectedMatch,
    Cursor,
    /// Pointer column of a row without the pointer.
    CursorEmpty,
    Marker,
    Current,
    CurrentMatch,
    CurrentCursor,
    CurrentCursorEmpty,
    CurrentMarker,
    CurrentSelectedEmpty,
    Spinner,
    Info,
    Header,
    Separator,
    Scrollbar,
    Border,
    BorderLabel,
    Preview,
    PreviewBorder,
    PreviewScrollbar,
    PreviewLabel,
    PreviewSpinner,
}

/// Foreground side of a pairing.
#[derive(Clone, Copy)]
enum Source {
    Slot(ThemeSlot),
    /// The `Fg` slot with its attributes reset to regular.
    Blank,
}

impl PaletteSlot {
    pub const COUNT: usize = 28;

    pub const ALL: [Self; Self::COUNT] = [
        Self::Prompt,
        Self::Normal,
        Self::Selected,
        Self::Input,
        Self::Disabled,
        Self::Match,
        Self::SelectedMatch,
        Self::Cursor,
        Self::CursorEmpty,
        Self::Marker,
        Self::Current,
        Self::CurrentMatch,
        Self::CurrentCursor,
        Self::CurrentCursorEmpty,
        Self::CurrentMarker,
        Self::CurrentSelectedEmpty,
        Self::Spinner,
        Self::Info,
        Self::Header,
        Self::Separator,
        Self::Scrollbar,
        Self::Border,
        Self::BorderLabel,
        Self::Preview,
        Self::PreviewBorder,
        Self::PreviewScrollbar,
        Self::PreviewLabel,
        Self::PreviewSpinner,
    ];

    #[must_use]
    pub const fn as_usize(self) -> usize {
        self as usize
    }

    /// Foreground source and background slot for this pair.
    fn pairing(self, theme: &ColorTheme) -> (Source, ThemeSlot) {
        use Source::{Blank, Slot};
        use ThemeSlot as T;

        match self {
            Self::Prompt => (Slot(T::Prompt), T::Bg),
            Self::Normal => (Slot(T::Fg), T::Bg),
            Self::Selected => (Slot(T::SelectedFg), T::SelectedBg),
            Self::Input => (Slot(T::Input), T::Bg),
            Self::Disabled => (Slot(T::Disabled), T::Bg),
            Self::Match => (Slot(T::Match), T::Bg),
            Self::SelectedMatch => (Slot(T::SelectedMatch), T::SelectedBg),
            Self::Cursor => (Slot(T::Cursor), T::Gutter),
            Self::CursorEmpty => (Blank, T::Gutter),
            // A distinct selection background extends under the marker.
            Self::Marker => {
                if theme[T::SelectedBg].color == theme[T::Bg].color {
                    (Slot(T::Marker), T::Gutter)
                } else {
                    (Slot(T::Marker), T::SelectedBg)
                }
            }
            Self::Current => (Slot(T::Current), T::DarkBg),
            Self::CurrentMatch => (Slot(T::CurrentMatch), T::DarkBg),
            Self::CurrentCursor => (Slot(T::Cursor), T::DarkBg),
            Self::CurrentCursorEmpty => (Blank, T::DarkBg),
            Self::CurrentMarker => (Slot(T::Marker), T::DarkBg),
            Self::CurrentSelectedEmpty => (Blank, T::DarkBg),
            Self::Spinner => (Slot(T::Spinner), T::Bg),
            Self::Info => (Slot(T::Info), T::Bg),
            Self::Header => (Slot(T::Header), T::Bg),
            Self::Separator => (Slot(T::Separator), T::Bg),
            Self::Scrollbar => (Slot(T::Scrollbar), T::Bg),
            Self::Border => (Slot(T::Border), T::Bg),
            Self::BorderLabel => (Slot(T::BorderLabel), T::Bg),
            Self::Preview => (Slot(T::PreviewFg), T::PreviewBg),
            Self::PreviewBorder => (Slot(T::PreviewBorder), T::PreviewBg),
            Self::PreviewScrollbar => (Slot(T::PreviewScrollbar), T::PreviewBg),
            Self::PreviewLabel => (Slot(T::PreviewLabel), T::PreviewBg),
            Self::PreviewSpinner => (Slot(T::Spinner), T::PreviewBg),
        }
    }
}

/// Pair a foreground slot with a background slot.
///
/// Unset values read as the terminal default. A default-colored reversed
/// foreground keeps the default background, since the terminal already
/// swaps the two. A foreground's own background override replaces the
/// paired background.
fn pair(fg: ColorAttr, bg: ColorAttr) -> ColorPair {
    let fg_color = fg.color.unwrap_or(Color::DEFAULT);
    let attr = fg.attr.unwrap_or(Attr::empty());
    let mut bg_color = bg.color.unwrap_or(Color::DEFAULT);

    if fg_color.is_default() && attr.is_reverse() {
        bg_color = Color::DEFAULT;
    }
    if let Some(background) = fg.background.filter(|c| !c.is_default()) {
        bg_color = background;
    }
    ColorPair::new(fg_color, bg_color, attr)
}

/// Every color pair derived from one resolved theme.
///
/// Immutable once built. A theme reload builds a new palette.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pairs: [ColorPair; PaletteSlot::COUNT],
}

impl Palette {
    /// Derive all pairs from a resolved theme.
    #[must_use]
    pub fn derive(theme: &ColorTheme) -> Self {
        let blank = theme[ThemeSlot::Fg].with_attr(Attr::REGULAR);
        let mut pairs = [ColorPair::default(); PaletteSlot::COUNT];
        for slot in PaletteSlot::ALL {
            let (source, background) = slot.pairing(theme);
            let fg = match source {
                Source::Slot(fg_slot) => theme[fg_slot],
                Source::Blank => blank,
            };
            pairs[slot.as_usize()] = pair(fg, theme[background]);
        }
        Self { pairs }
    }

    #[must_use]
    pub const fn get(&self, slot: PaletteSlot) -> ColorPair {
        self.pairs[slot.as_usize()]
    }
}

impl Index<PaletteSlot> for Palette {
    type Output = ColorPair;

    fn index(&self, slot: PaletteSlot) -> &ColorPair {
        &self.pairs[slot.as_usize()]
    }
}
