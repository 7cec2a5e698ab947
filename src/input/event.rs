//! Event kinds and key binding names.

use crate::input::mouse::MouseEvent;
use std::hash::{Hash, Hasher};

macro_rules! event_types {
    ($($(#[$meta:meta])* $name:ident),+ $(,)?) => {
        /// Kind of user action or application signal.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum EventType {
            $($(#[$meta])* $name,)+
        }

        impl EventType {
            /// Every kind, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$name),+];

            /// Symbolic name of the variant.
            #[must_use]
            pub const fn symbol(self) -> &'static str {
                match self {
                    $(Self::$name => stringify!($name),)+
                }
            }
        }
    };
}

event_types! {
    /// Printable character; the payload is in [`Event::ch`].
    Rune,

    CtrlA,
    CtrlB,
    CtrlC,
    CtrlD,
    CtrlE,
    CtrlF,
    CtrlG,
    CtrlH,
    Tab,
    CtrlJ,
    CtrlK,
    CtrlL,
    Enter,
    CtrlN,
    CtrlO,
    CtrlP,
    CtrlQ,
    CtrlR,
    CtrlS,
    CtrlT,
    CtrlU,
    CtrlV,
    CtrlW,
    CtrlX,
    CtrlY,
    CtrlZ,
    Esc,
    CtrlSpace,
    CtrlDelete,

    CtrlBackSlash,
    CtrlRightBracket,
    CtrlCaret,
    CtrlSlash,

    ShiftTab,
    Backspace,

    Delete,
    PageUp,
    PageDown,

    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    Insert,

    ShiftUp,
    ShiftDown,
    ShiftLeft,
    ShiftRight,
    ShiftDelete,

    F1,
    F2,
    F3,
    F4,
    F5,
    F6,
    F7,
    F8,
    F9,
    F10,
    F11,
    F12,

    AltBackspace,

    AltUp,
    AltDown,
    AltLeft,
    AltRight,

    AltShiftUp,
    AltShiftDown,
    AltShiftLeft,
    AltShiftRight,

    /// Alt plus a character in [`Event::ch`].
    Alt,
    /// Ctrl+Alt plus a character in [`Event::ch`].
    CtrlAlt,

    Invalid,
    /// Input could not be read any more.
    Fatal,

    /// Raw mouse event; the payload is in [`Event::mouse`].
    Mouse,
    DoubleClick,
    LeftClick,
    RightClick,
    ShiftLeftClick,
    ShiftRightClick,
    ScrollUp,
    ScrollDown,
    ShiftScrollUp,
    ShiftScrollDown,
    PreviewScrollUp,
    PreviewScrollDown,

    Resize,
    Change,
    BackwardEof,
    Start,
    Load,
    Focus,
    One,
    Zero,
    Result,
    Jump,
    JumpCancel,
    ClickHeader,
}

impl EventType {
    /// An event of this kind with no payload.
    #[must_use]
    pub const fn as_event(self) -> Event {
        Event {
            kind: self,
            ch: '\0',
            mouse: None,
        }
    }

    /// Kinds whose binding name depends on the character payload.
    const fn has_char_payload(self) -> bool {
        matches!(self, Self::Rune | Self::Alt | Self::CtrlAlt)
    }
}

/// `CtrlRightBracket` -> `ctrl-right-bracket`, `F12` -> `f12`.
fn kebab_case(symbol: &str) -> String {
    let mut name = String::with_capacity(symbol.len() + 4);
    for (i, c) in symbol.chars().enumerate() {
        if i > 0 && c.is_ascii_uppercase() {
            name.push('-');
        }
        name.push(c.to_ascii_lowercase());
    }
    name
}

/// A canonical input event.
///
/// Equality and hashing consider only [`kind`](Self::kind) and
/// [`ch`](Self::ch); the mouse payload never takes part in dispatch.
#[derive(Clone, Copy, Debug)]
pub struct Event {
    pub kind: EventType,
    /// Character payload for [`EventType::Rune`], [`EventType::Alt`] and
    /// [`EventType::CtrlAlt`]; `'\0'` otherwise.
    pub ch: char,
    pub mouse: Option<MouseEvent>,
}

impl PartialEq for Event {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.ch == other.ch
    }
}

impl Eq for Event {}

impl Hash for Event {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.kind.hash(state);
        self.ch.hash(state);
    }
}

impl Event {
    /// A printable character.
    #[must_use]
    pub const fn key(ch: char) -> Self {
        Self {
            kind: EventType::Rune,
            ch,
            mouse: None,
        }
    }

    /// Alt plus a character.
    #[must_use]
    pub const fn alt_key(ch: char) -> Self {
        Self {
            kind: EventType::Alt,
            ch,
            mouse: None,
        }
    }

    /// Ctrl+Alt plus a character.
    #[must_use]
    pub const fn ctrl_alt_key(ch: char) -> Self {
        Self {
            kind: EventType::CtrlAlt,
            ch,
            mouse: None,
        }
    }

    /// A mouse event carrying its classified payload.
    #[must_use]
    pub const fn mouse(mouse: MouseEvent) -> Self {
        Self {
            kind: EventType::Mouse,
            ch: '\0',
            mouse: Some(mouse),
        }
    }

    /// Copy of this event with the mouse payload stripped.
    #[must_use]
    pub const fn comparable(&self) -> Self {
        Self {
            kind: self.kind,
            ch: self.ch,
            mouse: None,
        }
    }

    /// Canonical key binding name.
    ///
    /// These strings are matched by key binding configuration and must
    /// stay stable.
    #[must_use]
    pub fn key_name(&self) -> String {
        match self.kind {
            EventType::Rune => self.ch.to_string(),
            EventType::Alt => format!("alt-{}", self.ch),
            EventType::CtrlAlt => format!("ctrl-alt-{}", self.ch),
            EventType::CtrlBackSlash => "ctrl-\\".to_string(),
            EventType::CtrlRightBracket => "ctrl-]".to_string(),
            EventType::CtrlCaret => "ctrl-^".to_string(),
            EventType::CtrlSlash => "ctrl-/".to_string(),
            kind => kebab_case(kind.symbol()),
        }
    }

    /// Parse a key binding name back into an event.
    ///
    /// Accepts every name produced by [`key_name`](Self::key_name) plus a
    /// few common aliases (`space`, `return`, `bspace`, `btab`, `pgup`...).
    #[must_use]
    pub fn from_key_name(name: &str) -> Option<Self> {
        let single = |s: &str| {
            let mut chars = s.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Some(c),
                _ => None,
            }
        };

        if let Some(c) = single(name) {
            return Some(Self::key(c));
        }
        if let Some(c) = name.strip_prefix("ctrl-alt-").and_then(single) {
            return Some(Self::ctrl_alt_key(c));
        }
        if let Some(c) = name.strip_prefix("alt-").and_then(single) {
            return Some(Self::alt_key(c));
        }

        let lower = name.to_ascii_lowercase();
        let alias = match lower.as_str() {
            "space" => Some(Self::key(' ')),
            "return" | "ctrl-m" => Some(EventType::Enter.as_event()),
            "ctrl-i" => Some(EventType::Tab.as_event()),
            "bspace" | "bs" => Some(EventType::Backspace.as_event()),
            "alt-bspace" | "alt-bs" => Some(EventType::AltBackspace.as_event()),
            "btab" => Some(EventType::ShiftTab.as_event()),
            "del" => Some(EventType::Delete.as_event()),
            "pgup" => Some(EventType::PageUp.as_event()),
            "pgdn" => Some(EventType::PageDown.as_event()),
            "escape" => Some(EventType::Esc.as_event()),
            _ => None,
        };
        if alias.is_some() {
            return alias;
        }

        EventType::ALL
            .iter()
            .filter(|kind| !kind.has_char_payload())
            .map(|kind| kind.as_event())
            .find(|event| event.key_name() == lower)
    }
}
