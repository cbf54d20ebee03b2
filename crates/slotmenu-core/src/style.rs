//! Visual styling of display items: [`Color`], [`AttrMask`], and [`Style`].

use std::ops::BitOr;

// ---------------------------------------------------------------------------
// Color
// ---------------------------------------------------------------------------

/// An RGB colour packed into a `u32` (0x00RRGGBB).
///
/// `Color::DEFAULT` (0) means "let the host decide"; hosts with a black
/// default render legacy code `0` and the default identically.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color(pub u32);

impl Color {
    /// The default / unset colour (0).
    pub const DEFAULT: Self = Self(0);

    #[inline]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u32) << 16) | ((g as u32) << 8) | (b as u32))
    }

    /// The `(r, g, b)` components.
    pub const fn rgb(self) -> (u8, u8, u8) {
        ((self.0 >> 16) as u8, (self.0 >> 8) as u8, self.0 as u8)
    }

    /// The colour of a legacy colour code (`0`-`9`, `a`-`f`), case-insensitive.
    pub fn from_code(code: char) -> Option<Self> {
        let rgb = match code.to_ascii_lowercase() {
            '0' => 0x000000,
            '1' => 0x0000AA,
            '2' => 0x00AA00,
            '3' => 0x00AAAA,
            '4' => 0xAA0000,
            '5' => 0xAA00AA,
            '6' => 0xFFAA00,
            '7' => 0xAAAAAA,
            '8' => 0x555555,
            '9' => 0x5555FF,
            'a' => 0x55FF55,
            'b' => 0x55FFFF,
            'c' => 0xFF5555,
            'd' => 0xFF55FF,
            'e' => 0xFFFF55,
            'f' => 0xFFFFFF,
            _ => return None,
        };
        Some(Self(rgb))
    }
}

// ---------------------------------------------------------------------------
// AttrMask
// ---------------------------------------------------------------------------

/// Text attributes selected by legacy format codes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttrMask(pub u32);

impl AttrMask {
    pub const NONE: Self = Self(0);
    pub const BOLD: Self = Self(1 << 0);
    pub const ITALIC: Self = Self(1 << 1);
    pub const UNDERLINE: Self = Self(1 << 2);
    pub const BLINK: Self = Self(1 << 3);
    pub const STRIKETHROUGH: Self = Self(1 << 4);

    pub const fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }

    /// The attribute selected by a legacy format code (`k`-`o`).
    pub fn from_code(code: char) -> Option<Self> {
        match code.to_ascii_lowercase() {
            'k' => Some(Self::BLINK),
            'l' => Some(Self::BOLD),
            'm' => Some(Self::STRIKETHROUGH),
            'n' => Some(Self::UNDERLINE),
            'o' => Some(Self::ITALIC),
            _ => None,
        }
    }
}

impl BitOr for AttrMask {
    type Output = Self;
    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

// ---------------------------------------------------------------------------
// Style
// ---------------------------------------------------------------------------

/// How a slot's glyph or a run of title text is drawn. `bg` stays at the
/// default unless a host sets it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Style {
    pub fg: Color,
    pub bg: Color,
    pub attrs: AttrMask,
}

impl Style {
    pub const fn with_fg(mut self, fg: Color) -> Self {
        self.fg = fg;
        self
    }

    /// Replace the attribute mask.
    pub const fn with_attrs(mut self, attrs: AttrMask) -> Self {
        self.attrs = attrs;
        self
    }
}
