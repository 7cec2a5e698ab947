//! Terminal capability detection.

use crate::theme::BaseTheme;
use std::env;

/// Color support level.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum ColorSupport {
    /// No color support.
    #[default]
    None,
    /// 16 colors (basic ANSI).
    Basic,
    /// 256 colors.
    Extended,
    /// True color (16 million colors).
    TrueColor,
}

/// Detected terminal capabilities.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Capabilities {
    /// Color support level.
    pub color: ColorSupport,
    /// Terminal supports Unicode.
    pub unicode: bool,
    /// Terminal name if known.
    pub term_name: Option<String>,
}

impl Default for Capabilities {
    fn default() -> Self {
        Self {
            color: ColorSupport::Extended,
            unicode: true,
            term_name: None,
        }
    }
}

impl Capabilities {
    /// Detect terminal capabilities from environment.
    #[must_use]
    pub fn detect() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Detect capabilities through an arbitrary variable lookup.
    ///
    /// Reads `TERM`, `COLORTERM`, `NO_COLOR`, `LC_ALL`, `LC_CTYPE` and `LANG`.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).unwrap_or_default();
        let term = var("TERM");

        let color = if var("NO_COLOR").is_empty() {
            Self::detect_color(&term, &var("COLORTERM"))
        } else {
            ColorSupport::None
        };
        let unicode = Self::detect_unicode(&var("LC_ALL"), &var("LC_CTYPE"), &var("LANG"));

        Self {
            color,
            unicode,
            term_name: (!term.is_empty()).then_some(term),
        }
    }

    fn detect_color(term: &str, colorterm: &str) -> ColorSupport {
        if term == "dumb" {
            return ColorSupport::None;
        }

        if colorterm.eq_ignore_ascii_case("truecolor") || colorterm.eq_ignore_ascii_case("24bit") {
            return ColorSupport::TrueColor;
        }

        if term.contains("24bit") || term.contains("truecolor") || term.contains("direct") {
            return ColorSupport::TrueColor;
        }

        if term.contains("256") {
            return ColorSupport::Extended;
        }

        // Assume basic color if TERM is set
        if !term.is_empty() {
            return ColorSupport::Basic;
        }

        ColorSupport::None
    }

    /// The first non-empty locale variable decides, in POSIX precedence.
    fn detect_unicode(lc_all: &str, lc_ctype: &str, lang: &str) -> bool {
        [lc_all, lc_ctype, lang]
            .into_iter()
            .find(|value| !value.is_empty())
            .is_some_and(|locale| {
                let lower = locale.to_ascii_lowercase();
                lower.contains("utf-8") || lower.contains("utf8")
            })
    }

    /// Check if 256 colors are supported.
    #[must_use]
    pub fn has_256_colors(&self) -> bool {
        self.color >= ColorSupport::Extended
    }

    /// Base theme suited to the detected color support.
    #[must_use]
    pub const fn base_theme(&self) -> BaseTheme {
        match self.color {
            ColorSupport::TrueColor | ColorSupport::Extended => BaseTheme::Dark256,
            ColorSupport::Basic => BaseTheme::Default16,
            ColorSupport::None => BaseTheme::NoColor,
        }
    }
}
