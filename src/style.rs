//! Text attributes, theme slot values and resolved color pairs.
//!
//! This module provides the value types a theme is built from:
//!
//! - [`Attr`]: Bitflags for bold, underline, reverse, etc.
//! - [`ColorAttr`]: One theme slot before pairing; every field may be unset
//! - [`ColorPair`]: A fully resolved fg/bg/attr triple passed to draw calls
//!
//! # Merge policies
//!
//! Overlays are applied with one of two policies:
//!
//! - `merge`: a field overrides unless it is unset. An explicit
//!   [`Color::DEFAULT`] in the overlay wins.
//! - `merge_non_default`: a field overrides unless it is unset *or*
//!   [`Color::DEFAULT`]. Used to lay uninformative colors (e.g. ANSI text
//!   with no SGR color) over a meaningful base.
//!
//! ```
//! use finder_tui::{Attr, Color, ColorAttr};
//!
//! let base = ColorAttr::new(Color::BLUE).with_attr(Attr::BOLD);
//! let overlay = ColorAttr::new(Color::DEFAULT);
//!
//! assert_eq!(base.merge(overlay).color, Some(Color::DEFAULT));
//! assert_eq!(base.merge_non_default(overlay).color, Some(Color::BLUE));
//! assert_eq!(base.merge(overlay).attr, Some(Attr::BOLD));
//! ```

use crate::color::Color;
use crate::error::{Error, Result};
use bitflags::bitflags;
use std::str::FromStr;

bitflags! {
    /// Text rendering attributes.
    ///
    /// [`Attr::REGULAR`] marks an explicit "no attribute" choice. It is kept
    /// distinct from the empty set so that merging can tell "reset
    /// everything" apart from "add nothing".
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
    pub struct Attr: u16 {
        const BOLD          = 1;
        const DIM           = 1 << 1;
        const ITALIC        = 1 << 2;
        const UNDERLINE     = 1 << 3;
        const BLINK         = 1 << 4;
        /// Swapped foreground/background.
        const REVERSE       = 1 << 5;
        const STRIKETHROUGH = 1 << 6;
        /// Explicitly regular text; overwrites instead of accumulating.
        const REGULAR       = 1 << 7;
    }
}

impl Attr {
    /// Merge attributes.
    ///
    /// If `other` carries [`Attr::REGULAR`] it replaces `self` outright
    /// (minus the marker bit). Otherwise the flags accumulate.
    #[must_use]
    pub const fn merge(self, other: Self) -> Self {
        if other.contains(Self::REGULAR) {
            return other.difference(Self::REGULAR);
        }
        self.difference(Self::REGULAR).union(other)
    }

    /// Check if reverse video is active.
    #[must_use]
    pub const fn is_reverse(self) -> bool {
        self.contains(Self::REVERSE)
    }
}

impl FromStr for Attr {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "regular" => Ok(Self::REGULAR),
            "bold" | "strong" => Ok(Self::BOLD),
            "dim" => Ok(Self::DIM),
            "italic" => Ok(Self::ITALIC),
            "underline" => Ok(Self::UNDERLINE),
            "blink" => Ok(Self::BLINK),
            "reverse" => Ok(Self::REVERSE),
            "strikethrough" => Ok(Self::STRIKETHROUGH),
            _ => Err(Error::InvalidColorSpec(s.to_string())),
        }
    }
}

/// A semantic theme slot value before it is paired with a background.
///
/// `None` in any field means "not set, inherit".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ColorAttr {
    /// Foreground color.
    pub color: Option<Color>,
    /// Text attributes.
    pub attr: Option<Attr>,
    /// Background override applied when the slot is paired.
    pub background: Option<Color>,
}

impl ColorAttr {
    /// A slot with nothing set.
    pub const UNDEFINED: Self = Self {
        color: None,
        attr: None,
        background: None,
    };

    /// A slot with only its color set.
    #[must_use]
    pub const fn new(color: Color) -> Self {
        Self {
            color: Some(color),
            attr: None,
            background: None,
        }
    }

    /// Return a copy with the attributes set.
    #[must_use]
    pub const fn with_attr(self, attr: Attr) -> Self {
        Self {
            attr: Some(attr),
            ..self
        }
    }

    /// Return a copy with the background override set.
    #[must_use]
    pub const fn with_background(self, background: Color) -> Self {
        Self {
            background: Some(background),
            ..self
        }
    }

    /// Check if no field is set.
    #[must_use]
    pub const fn is_undefined(&self) -> bool {
        self.color.is_none() && self.attr.is_none() && self.background.is_none()
    }

    /// Overlay `other` onto `self`; unset fields of `other` are no-ops.
    #[must_use]
    pub const fn merge(self, other: Self) -> Self {
        Self {
            color: or_else(other.color, self.color),
            attr: match other.attr {
                Some(attr) => Some(attr),
                None => self.attr,
            },
            background: or_else(other.background, self.background),
        }
    }

    /// Overlay `other` onto `self`; unset and default colors of `other`
    /// are no-ops.
    #[must_use]
    pub const fn merge_non_default(self, other: Self) -> Self {
        Self {
            color: or_else(non_default(other.color), self.color),
            attr: match other.attr {
                Some(attr) => Some(attr),
                None => self.attr,
            },
            background: or_else(non_default(other.background), self.background),
        }
    }
}

const fn or_else(preferred: Option<Color>, fallback: Option<Color>) -> Option<Color> {
    match preferred {
        Some(color) => Some(color),
        None => fallback,
    }
}

const fn non_default(color: Option<Color>) -> Option<Color> {
    match color {
        Some(c) if !c.is_default() => Some(c),
        _ => None,
    }
}

/// A fully resolved foreground/background/attribute triple.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ColorPair {
    fg: Color,
    bg: Color,
    attr: Attr,
}

impl Default for ColorPair {
    fn default() -> Self {
        Self::new(Color::DEFAULT, Color::DEFAULT, Attr::empty())
    }
}

impl ColorPair {
    #[must_use]
    pub const fn new(fg: Color, bg: Color, attr: Attr) -> Self {
        Self { fg, bg, attr }
    }

    #[must_use]
    pub const fn fg(self) -> Color {
        self.fg
    }

    #[must_use]
    pub const fn bg(self) -> Color {
        self.bg
    }

    #[must_use]
    pub const fn attr(self) -> Attr {
        self.attr
    }

    /// Check if drawing this pair paints a visible background.
    ///
    /// Under reverse video the terminal swaps the roles of fg and bg, so the
    /// foreground color is the one that ends up filling the cell.
    #[must_use]
    pub const fn has_bg(self) -> bool {
        if self.attr.is_reverse() {
            !self.fg.is_default()
        } else {
            !self.bg.is_default()
        }
    }

    /// Take `other`'s colors and merge its attributes into ours.
    #[must_use]
    pub const fn merge(self, other: Self) -> Self {
        Self {
            fg: other.fg,
            bg: other.bg,
            attr: self.attr.merge(other.attr),
        }
    }

    /// Like [`merge`](Self::merge), but default colors in `other` keep ours.
    #[must_use]
    pub const fn merge_non_default(self, other: Self) -> Self {
        Self {
            fg: if other.fg.is_default() { self.fg } else { other.fg },
            bg: if other.bg.is_default() { self.bg } else { other.bg },
            attr: self.attr.merge(other.attr),
        }
    }

    /// Return a copy with `attr` merged in.
    #[must_use]
    pub const fn with_attr(self, attr: Attr) -> Self {
        Self {
            attr: self.attr.merge(attr),
            ..self
        }
    }

    /// Return a copy with `other`'s attributes merged in, keeping our colors.
    #[must_use]
    pub const fn merge_attr(self, other: Self) -> Self {
        self.with_attr(other.attr)
    }
}
