//! Built-in base themes.

use crate::color::Color;
use crate::error::{Error, Result};
use crate::style::{Attr, ColorAttr};
use crate::theme::{ColorTheme, ThemeSlot};
use std::str::FromStr;

const fn c(color: Color) -> ColorAttr {
    ColorAttr::new(color)
}

const fn idx(index: u8) -> ColorAttr {
    ColorAttr::new(Color::indexed(index))
}

/// Basic 16-color theme using named colors only.
pub const DEFAULT_16: ColorTheme = ColorTheme::EMPTY
    .with(ThemeSlot::Input, c(Color::DEFAULT))
    .with(ThemeSlot::Fg, c(Color::DEFAULT))
    .with(ThemeSlot::Bg, c(Color::DEFAULT))
    .with(ThemeSlot::DarkBg, c(Color::BLACK))
    .with(ThemeSlot::Prompt, c(Color::BLUE))
    .with(ThemeSlot::Match, c(Color::GREEN))
    .with(ThemeSlot::Current, c(Color::YELLOW))
    .with(ThemeSlot::CurrentMatch, c(Color::GREEN))
    .with(ThemeSlot::Spinner, c(Color::GREEN))
    .with(ThemeSlot::Info, c(Color::WHITE))
    .with(ThemeSlot::Cursor, c(Color::RED))
    .with(ThemeSlot::Marker, c(Color::MAGENTA))
    .with(ThemeSlot::Header, c(Color::CYAN))
    .with(ThemeSlot::Border, c(Color::BLACK))
    .with(ThemeSlot::BorderLabel, c(Color::WHITE));

/// 256-color theme for dark terminal backgrounds.
pub const DARK_256: ColorTheme = ColorTheme::EMPTY
    .with(ThemeSlot::Input, c(Color::DEFAULT))
    .with(ThemeSlot::Fg, c(Color::DEFAULT))
    .with(ThemeSlot::Bg, c(Color::DEFAULT))
    .with(ThemeSlot::DarkBg, idx(236))
    .with(ThemeSlot::Prompt, idx(110))
    .with(ThemeSlot::Match, idx(108))
    .with(ThemeSlot::Current, idx(254))
    .with(ThemeSlot::CurrentMatch, idx(151))
    .with(ThemeSlot::Spinner, idx(148))
    .with(ThemeSlot::Info, idx(144))
    .with(ThemeSlot::Cursor, idx(161))
    .with(ThemeSlot::Marker, idx(168))
    .with(ThemeSlot::Header, idx(109))
    .with(ThemeSlot::Border, idx(59))
    .with(ThemeSlot::BorderLabel, idx(145));

/// 256-color theme for light terminal backgrounds.
pub const LIGHT_256: ColorTheme = ColorTheme::EMPTY
    .with(ThemeSlot::Input, c(Color::DEFAULT))
    .with(ThemeSlot::Fg, c(Color::DEFAULT))
    .with(ThemeSlot::Bg, c(Color::DEFAULT))
    .with(ThemeSlot::DarkBg, idx(251))
    .with(ThemeSlot::Prompt, idx(25))
    .with(ThemeSlot::Match, idx(66))
    .with(ThemeSlot::Current, idx(237))
    .with(ThemeSlot::CurrentMatch, idx(23))
    .with(ThemeSlot::Spinner, idx(65))
    .with(ThemeSlot::Info, idx(101))
    .with(ThemeSlot::Cursor, idx(161))
    .with(ThemeSlot::Marker, idx(168))
    .with(ThemeSlot::Header, idx(31))
    .with(ThemeSlot::Border, idx(145))
    .with(ThemeSlot::BorderLabel, idx(59));

const fn plain() -> ColorAttr {
    ColorAttr::new(Color::DEFAULT).with_attr(Attr::REGULAR)
}

const fn no_color() -> ColorTheme {
    let mut theme = ColorTheme::EMPTY.with_colored(false);
    let mut i = 0;
    while i < ThemeSlot::COUNT {
        theme = theme.with(ThemeSlot::ALL[i], plain());
        i += 1;
    }
    theme
        .with(
            ThemeSlot::Match,
            ColorAttr::new(Color::DEFAULT).with_attr(Attr::UNDERLINE),
        )
        .with(
            ThemeSlot::Current,
            ColorAttr::new(Color::DEFAULT).with_attr(Attr::REVERSE),
        )
        .with(
            ThemeSlot::CurrentMatch,
            ColorAttr::new(Color::DEFAULT).with_attr(Attr::REVERSE.union(Attr::UNDERLINE)),
        )
}

/// Monochrome theme: terminal default colors, emphasis by attributes only.
pub const NO_COLOR: ColorTheme = no_color();

/// Selector for a built-in base theme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BaseTheme {
    Default16,
    #[default]
    Dark256,
    Light256,
    NoColor,
}

impl BaseTheme {
    /// The constant theme this selector names.
    #[must_use]
    pub const fn theme(self) -> ColorTheme {
        match self {
            Self::Default16 => DEFAULT_16,
            Self::Dark256 => DARK_256,
            Self::Light256 => LIGHT_256,
            Self::NoColor => NO_COLOR,
        }
    }
}

impl FromStr for BaseTheme {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "16" => Ok(Self::Default16),
            "dark" => Ok(Self::Dark256),
            "light" => Ok(Self::Light256),
            "bw" | "no" => Ok(Self::NoColor),
            _ => Err(Error::InvalidColorSpec(format!("unknown base theme: {s}"))),
        }
    }
}
