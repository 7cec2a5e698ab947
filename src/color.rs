//! Terminal color values.
//!
//! A [`Color`] is a signed integer that covers three spaces at once:
//!
//! - **Default**: [`Color::DEFAULT`] (`-1`) asks the terminal for its own
//!   foreground/background. It is a real choice and survives theme merges.
//! - **Palette**: `0..=255` index the 256-color palette (`0..=15` are the
//!   basic ANSI colors).
//! - **Truecolor**: bit 24 flags a packed `R<<16 | G<<8 | B` value.
//!
//! "Not set" is never a `Color`; optional theme fields use `Option<Color>`.
//!
//! # Examples
//!
//! ```
//! use finder_tui::Color;
//!
//! let accent = Color::from_hex("#5f87af").unwrap();
//! assert!(accent.is_24bit());
//! assert_eq!(accent.to_rgb(), Some((0x5f, 0x87, 0xaf)));
//!
//! assert!(Color::DEFAULT.is_default());
//! assert_eq!("bright-red".parse::<Color>().unwrap(), Color::BRIGHT_RED);
//! ```

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Flag bit marking a packed 24-bit color.
const TRUECOLOR_FLAG: i32 = 1 << 24;

/// A terminal color: default, palette index, or packed truecolor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Color(i32);

impl Color {
    /// The terminal's own default color.
    pub const DEFAULT: Self = Self(-1);

    pub const BLACK: Self = Self(0);
    pub const RED: Self = Self(1);
    pub const GREEN: Self = Self(2);
    pub const YELLOW: Self = Self(3);
    pub const BLUE: Self = Self(4);
    pub const MAGENTA: Self = Self(5);
    pub const CYAN: Self = Self(6);
    pub const WHITE: Self = Self(7);

    pub const BRIGHT_BLACK: Self = Self(8);
    pub const BRIGHT_RED: Self = Self(9);
    pub const BRIGHT_GREEN: Self = Self(10);
    pub const BRIGHT_YELLOW: Self = Self(11);
    pub const BRIGHT_BLUE: Self = Self(12);
    pub const BRIGHT_MAGENTA: Self = Self(13);
    pub const BRIGHT_CYAN: Self = Self(14);
    pub const BRIGHT_WHITE: Self = Self(15);

    /// Names accepted by [`FromStr`], in palette order.
    const NAMES: [(&'static str, Self); 16] = [
        ("black", Self::BLACK),
        ("red", Self::RED),
        ("green", Self::GREEN),
        ("yellow", Self::YELLOW),
        ("blue", Self::BLUE),
        ("magenta", Self::MAGENTA),
        ("cyan", Self::CYAN),
        ("white", Self::WHITE),
        ("bright-black", Self::BRIGHT_BLACK),
        ("bright-red", Self::BRIGHT_RED),
        ("bright-green", Self::BRIGHT_GREEN),
        ("bright-yellow", Self::BRIGHT_YELLOW),
        ("bright-blue", Self::BRIGHT_BLUE),
        ("bright-magenta", Self::BRIGHT_MAGENTA),
        ("bright-cyan", Self::BRIGHT_CYAN),
        ("bright-white", Self::BRIGHT_WHITE),
    ];

    /// Create a 256-color palette entry.
    #[must_use]
    pub const fn indexed(index: u8) -> Self {
        Self(index as i32)
    }

    /// Create a packed 24-bit color.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self(TRUECOLOR_FLAG | ((r as i32) << 16) | ((g as i32) << 8) | (b as i32))
    }

    /// Raw integer representation.
    #[must_use]
    pub const fn raw(self) -> i32 {
        self.0
    }

    /// Check if this is the terminal default color.
    #[must_use]
    pub const fn is_default(self) -> bool {
        self.0 == Self::DEFAULT.0
    }

    /// Check if this is a packed 24-bit color.
    #[must_use]
    pub const fn is_24bit(self) -> bool {
        self.0 > 0 && (self.0 & TRUECOLOR_FLAG) != 0
    }

    /// Palette index, if this is a palette color.
    #[must_use]
    pub const fn index(self) -> Option<u8> {
        if self.0 >= 0 && self.0 <= 255 {
            Some(self.0 as u8)
        } else {
            None
        }
    }

    /// RGB components, if this is a 24-bit color.
    #[must_use]
    pub const fn to_rgb(self) -> Option<(u8, u8, u8)> {
        if !self.is_24bit() {
            return None;
        }
        Some((
            ((self.0 >> 16) & 0xff) as u8,
            ((self.0 >> 8) & 0xff) as u8,
            (self.0 & 0xff) as u8,
        ))
    }

    /// Parse a `#RRGGBB` literal into a packed 24-bit color.
    ///
    /// Anything other than `#` followed by exactly six hex digits is
    /// rejected with [`Error::InvalidColorSpec`].
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex
            .strip_prefix('#')
            .filter(|d| d.len() == 6 && d.bytes().all(|b| b.is_ascii_hexdigit()))
            .ok_or_else(|| Error::InvalidColorSpec(hex.to_string()))?;

        let component = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|_| Error::InvalidColorSpec(hex.to_string()))
        };
        Ok(Self::rgb(component(0..2)?, component(2..4)?, component(4..6)?))
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_rgb() {
            Some((r, g, b)) => write!(f, "#{r:02x}{g:02x}{b:02x}"),
            None => write!(f, "{}", self.0),
        }
    }
}

impl FromStr for Color {
    type Err = Error;

    /// Parse a color option value: `-1`/`default`, a palette index
    /// `0..=255`, a `#rrggbb` literal, or a basic color name.
    fn from_str(s: &str) -> Result<Self> {
        let lower = s.trim().to_ascii_lowercase();
        if lower == "-1" || lower == "default" {
            return Ok(Self::DEFAULT);
        }
        if lower.starts_with('#') {
            return Self::from_hex(&lower);
        }
        if let Some((_, color)) = Self::NAMES.iter().find(|(name, _)| *name == lower) {
            return Ok(*color);
        }
        lower
            .parse::<u8>()
            .map(Self::indexed)
            .map_err(|_| Error::InvalidColorSpec(s.to_string()))
    }
}
