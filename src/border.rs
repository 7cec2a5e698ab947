//! Border shapes and their glyph sets.
//!
//! A [`BorderStyle`] is looked up once from a fixed table keyed by
//! `(shape, unicode)` and never modified. Shapes that omit edges still carry
//! a full set of eight glyphs; [`BorderShape::has_left`] and friends tell the
//! layout code which edges to draw.

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Border shape.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BorderShape {
    /// No border.
    None,
    /// Light lines with rounded corners.
    #[default]
    Rounded,
    /// Light lines with square corners.
    Sharp,
    /// Heavy lines.
    Bold,
    /// Half-block characters.
    Block,
    /// One-eighth block characters.
    ThinBlock,
    /// Double lines.
    Double,
    /// Top and bottom edges only.
    Horizontal,
    /// Left and right edges only.
    Vertical,
    Top,
    Bottom,
    Left,
    Right,
}

impl BorderShape {
    /// Every shape, in declaration order.
    pub const ALL: [Self; 13] = [
        Self::None,
        Self::Rounded,
        Self::Sharp,
        Self::Bold,
        Self::Block,
        Self::ThinBlock,
        Self::Double,
        Self::Horizontal,
        Self::Vertical,
        Self::Top,
        Self::Bottom,
        Self::Left,
        Self::Right,
    ];

    /// Option name of this shape.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Rounded => "rounded",
            Self::Sharp => "sharp",
            Self::Bold => "bold",
            Self::Block => "block",
            Self::ThinBlock => "thinblock",
            Self::Double => "double",
            Self::Horizontal => "horizontal",
            Self::Vertical => "vertical",
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Left => "left",
            Self::Right => "right",
        }
    }

    #[must_use]
    pub const fn has_left(self) -> bool {
        !matches!(
            self,
            Self::None | Self::Right | Self::Top | Self::Bottom | Self::Horizontal
        )
    }

    #[must_use]
    pub const fn has_right(self) -> bool {
        !matches!(
            self,
            Self::None | Self::Left | Self::Top | Self::Bottom | Self::Horizontal
        )
    }

    #[must_use]
    pub const fn has_top(self) -> bool {
        !matches!(
            self,
            Self::None | Self::Left | Self::Right | Self::Bottom | Self::Vertical
        )
    }

    #[must_use]
    pub const fn has_bottom(self) -> bool {
        !matches!(
            self,
            Self::None | Self::Left | Self::Right | Self::Top | Self::Vertical
        )
    }
}

impl fmt::Display for BorderShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BorderShape {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let lower = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|shape| shape.name() == lower)
            .ok_or_else(|| Error::InvalidBorderShape(s.to_string()))
    }
}

/// Glyphs used to draw one border shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BorderStyle {
    shape: BorderShape,
    top: char,
    bottom: char,
    left: char,
    right: char,
    top_left: char,
    top_right: char,
    bottom_left: char,
    bottom_right: char,
}

impl BorderStyle {
    const fn glyphs(shape: BorderShape, g: [char; 8]) -> Self {
        Self {
            shape,
            top: g[0],
            bottom: g[1],
            left: g[2],
            right: g[3],
            top_left: g[4],
            top_right: g[5],
            bottom_left: g[6],
            bottom_right: g[7],
        }
    }

    /// Look up the glyph set for `shape`.
    ///
    /// Without unicode support every shape degrades to the same ASCII set.
    #[must_use]
    pub const fn new(shape: BorderShape, unicode: bool) -> Self {
        if !unicode {
            return Self::glyphs(shape, ['-', '-', '|', '|', '+', '+', '+', '+']);
        }
        let set = match shape {
            BorderShape::Sharp => ['─', '─', '│', '│', '┌', '┐', '└', '┘'],
            BorderShape::Bold => ['━', '━', '┃', '┃', '┏', '┓', '┗', '┛'],
            // ▛▀▀▀▜
            // ▌   ▐
            // ▙▄▄▄▟
            BorderShape::Block => ['▀', '▄', '▌', '▐', '▛', '▜', '▙', '▟'],
            // 🭽▔▔▔🭾
            // ▏   ▕
            // 🭼▁▁▁🭿
            BorderShape::ThinBlock => ['▔', '▁', '▏', '▕', '🭽', '🭾', '🭼', '🭿'],
            BorderShape::Double => ['═', '═', '║', '║', '╔', '╗', '╚', '╝'],
            BorderShape::None
            | BorderShape::Rounded
            | BorderShape::Horizontal
            | BorderShape::Vertical
            | BorderShape::Top
            | BorderShape::Bottom
            | BorderShape::Left
            | BorderShape::Right => ['─', '─', '│', '│', '╭', '╮', '╰', '╯'],
        };
        Self::glyphs(shape, set)
    }

    /// A rounded border whose glyphs are all spaces.
    ///
    /// Reserves the border's width and height without drawing marks.
    #[must_use]
    pub const fn transparent() -> Self {
        Self::glyphs(BorderShape::Rounded, [' '; 8])
    }

    #[must_use]
    pub const fn shape(&self) -> BorderShape {
        self.shape
    }

    #[must_use]
    pub const fn top(&self) -> char {
        self.top
    }

    #[must_use]
    pub const fn bottom(&self) -> char {
        self.bottom
    }

    #[must_use]
    pub const fn left(&self) -> char {
        self.left
    }

    #[must_use]
    pub const fn right(&self) -> char {
        self.right
    }

    #[must_use]
    pub const fn top_left(&self) -> char {
        self.top_left
    }

    #[must_use]
    pub const fn top_right(&self) -> char {
        self.top_right
    }

    #[must_use]
    pub const fn bottom_left(&self) -> char {
        self.bottom_left
    }

    #[must_use]
    pub const fn bottom_right(&self) -> char {
        self.bottom_right
    }

    /// All eight glyphs: top, bottom, left, right, then the four corners
    /// clockwise from top-left.
    #[must_use]
    pub const fn chars(&self) -> [char; 8] {
        [
            self.top,
            self.bottom,
            self.left,
            self.right,
            self.top_left,
            self.top_right,
            self.bottom_right,
            self.bottom_left,
        ]
    }
}

impl Default for BorderStyle {
    fn default() -> Self {
        Self::new(BorderShape::Rounded, true)
    }
}
