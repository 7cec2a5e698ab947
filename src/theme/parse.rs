//! The `--color` option grammar.
//!
//! A comma-separated list of tokens. A bare token names the base theme
//! (`dark`, `light`, `16`, `bw`); every other token is
//! `SLOT:COMPONENT[:COMPONENT...]` where each component is a color or an
//! attribute name.

use crate::color::Color;
use crate::error::{Error, Result};
use crate::log::{LogLevel, emit_log};
use crate::style::Attr;
use crate::theme::{BaseTheme, ColorTheme, ThemeSlot, resolve_theme};

/// A parsed `--color` option.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemeOptions {
    /// Base theme the overlay cascades over.
    pub base: BaseTheme,
    /// Sparse user overlay.
    pub overlay: ColorTheme,
}

impl ThemeOptions {
    #[must_use]
    pub const fn new(base: BaseTheme) -> Self {
        Self {
            base,
            overlay: ColorTheme::EMPTY,
        }
    }

    /// Cascade the overlay over the selected base theme.
    #[must_use]
    pub fn resolve(&self, force_black: bool) -> ColorTheme {
        resolve_theme(&self.overlay, &self.base.theme(), force_black)
    }
}

impl Default for ThemeOptions {
    fn default() -> Self {
        Self::new(BaseTheme::default())
    }
}

/// Parse `spec` on top of `base`.
///
/// Later tokens win over earlier ones for the same slot.
///
/// # Examples
///
/// ```
/// use finder_tui::theme::{BaseTheme, ThemeSlot, parse_theme_options};
/// use finder_tui::{Attr, Color};
///
/// let opts = parse_theme_options(BaseTheme::Default16, "dark,fg:#ffffff:bold,hl:108")?;
/// assert_eq!(opts.base, BaseTheme::Dark256);
/// assert_eq!(opts.overlay[ThemeSlot::Fg].color, Some(Color::rgb(255, 255, 255)));
/// assert_eq!(opts.overlay[ThemeSlot::Fg].attr, Some(Attr::BOLD));
/// assert_eq!(opts.overlay[ThemeSlot::Match].color, Some(Color::indexed(108)));
/// # Ok::<(), finder_tui::Error>(())
/// ```
pub fn parse_theme_options(base: BaseTheme, spec: &str) -> Result<ThemeOptions> {
    let mut options = ThemeOptions::new(base);
    for token in spec.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        if let Err(err) = apply_token(&mut options, token) {
            emit_log(LogLevel::Warn, &format!("rejected color option {token:?}: {err}"));
            return Err(err);
        }
    }
    Ok(options)
}

fn apply_token(options: &mut ThemeOptions, token: &str) -> Result<()> {
    let Some((slot_name, components)) = token.split_once(':') else {
        let base: BaseTheme = token
            .parse()
            .map_err(|_| Error::InvalidColorSpec(format!("missing slot in {token}")))?;
        options.base = base;
        options.overlay = options.overlay.with_colored(base != BaseTheme::NoColor);
        return Ok(());
    };

    let slot: ThemeSlot = slot_name.parse()?;
    let mut value = options.overlay[slot];
    let mut attr: Option<Attr> = None;
    for component in components.split(':').map(str::trim) {
        if component.is_empty() {
            return Err(Error::InvalidColorSpec(format!("empty component in {token}")));
        }
        if let Ok(flag) = component.parse::<Attr>() {
            attr = Some(if flag == Attr::REGULAR {
                flag
            } else {
                attr.unwrap_or(Attr::empty()) | flag
            });
            continue;
        }
        value.color = Some(component.parse::<Color>()?);
    }
    if attr.is_some() {
        value.attr = attr;
    }
    options.overlay.set(slot, value);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(spec: &str) -> Result<ThemeOptions> {
        parse_theme_options(BaseTheme::Dark256, spec)
    }

    #[test]
    fn test_empty_spec_keeps_base() {
        let opts = parse("").unwrap();
        assert_eq!(opts, ThemeOptions::new(BaseTheme::Dark256));
        assert_eq!(parse(" , ,").unwrap(), opts);
    }

    #[test]
    fn test_base_names() {
        assert_eq!(parse("light").unwrap().base, BaseTheme::Light256);
        assert_eq!(parse("16").unwrap().base, BaseTheme::Default16);
        let bw = parse("bw").unwrap();
        assert_eq!(bw.base, BaseTheme::NoColor);
        assert!(!bw.overlay.is_colored());
        assert!(!bw.resolve(false).is_colored());

        let dark = parse("bw,dark").unwrap();
        assert_eq!(dark.base, BaseTheme::Dark256);
        assert!(dark.overlay.is_colored());
        assert!(dark.resolve(false).is_colored());
    }

    #[test]
    fn test_slot_names_round_trip() {
        for slot in ThemeSlot::ALL {
            let opts = parse(&format!("{}:42", slot.name())).unwrap();
            assert_eq!(opts.overlay[slot].color, Some(Color::indexed(42)), "{slot}");
            let set = opts.overlay.iter().filter(|(_, v)| !v.is_undefined()).count();
            assert_eq!(set, 1, "{slot}");
        }
    }

    #[test]
    fn test_color_forms() {
        let opts = parse("fg:-1,bg:default,hl:#0a0b0c,info:bright-red,prompt:blue").unwrap();
        assert_eq!(opts.overlay[ThemeSlot::Fg].color, Some(Color::DEFAULT));
        assert_eq!(opts.overlay[ThemeSlot::Bg].color, Some(Color::DEFAULT));
        assert_eq!(
            opts.overlay[ThemeSlot::Match].color,
            Some(Color::rgb(0x0a, 0x0b, 0x0c))
        );
        assert_eq!(opts.overlay[ThemeSlot::Info].color, Some(Color::BRIGHT_RED));
        assert_eq!(opts.overlay[ThemeSlot::Prompt].color, Some(Color::BLUE));
    }

    #[test]
    fn test_attributes_accumulate() {
        let opts = parse("header:italic:underline").unwrap();
        let header = opts.overlay[ThemeSlot::Header];
        assert_eq!(header.color, None);
        assert_eq!(header.attr, Some(Attr::ITALIC | Attr::UNDERLINE));

        let opts = parse("fg+:bold:regular").unwrap();
        assert_eq!(opts.overlay[ThemeSlot::Current].attr, Some(Attr::REGULAR));

        let opts = parse("fg+:regular:bold").unwrap();
        assert_eq!(
            opts.overlay[ThemeSlot::Current].attr,
            Some(Attr::REGULAR | Attr::BOLD)
        );
    }

    #[test]
    fn test_later_tokens_update_slot() {
        let opts = parse("fg:1:bold,fg:2").unwrap();
        let fg = opts.overlay[ThemeSlot::Fg];
        assert_eq!(fg.color, Some(Color::GREEN));
        assert_eq!(fg.attr, Some(Attr::BOLD));
    }

    #[test]
    fn test_rejects_malformed_tokens() {
        for bad in [
            "sepia",
            "fg",
            "nope:1",
            "fg:256",
            "fg:#12345",
            "fg:#gggggg",
            "fg:",
            "fg:1::bold",
            "fg:shiny",
        ] {
            assert!(
                matches!(parse(bad), Err(Error::InvalidColorSpec(_))),
                "{bad}"
            );
        }
    }

    #[test]
    fn test_resolve_applies_overlay() {
        let opts = parse("light,border:1").unwrap();
        let theme = opts.resolve(false);
        assert_eq!(theme[ThemeSlot::Separator].color, Some(Color::RED));
        assert_eq!(theme[ThemeSlot::DarkBg].color, Some(Color::indexed(251)));
    }
}
