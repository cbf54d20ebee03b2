//! The [`Item`] type, what a slot displays.

use crate::style::Style;

/// A display item placed into a slot.
///
/// `name` may carry `&`-prefixed colour codes; hosts translate them with
/// [`translate_color_codes`](crate::text::translate_color_codes).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    pub glyph: char,
    pub style: Style,
    pub name: String,
    pub amount: u16,
}

impl Item {
    /// A single item with the given glyph and no name.
    pub fn new(glyph: char) -> Self {
        Self {
            glyph,
            ..Self::default()
        }
    }

    /// Set the glyph (builder).
    #[inline]
    pub fn with_glyph(mut self, glyph: char) -> Self {
        self.glyph = glyph;
        self
    }

    /// Set the style (builder).
    #[inline]
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Set the display name (builder).
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the stack amount (builder). Zero is stored as one.
    #[inline]
    pub fn with_amount(mut self, amount: u16) -> Self {
        self.amount = amount.max(1);
        self
    }
}

impl Default for Item {
    #[inline]
    fn default() -> Self {
        Self {
            glyph: '#',
            style: Style::default(),
            name: String::new(),
            amount: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Color;

    #[test]
    fn builder_sets_fields() {
        let it = Item::new('*')
            .with_name("&eStar")
            .with_amount(3)
            .with_style(Style::default().with_fg(Color::from_rgb(1, 2, 3)));
        assert_eq!(it.glyph, '*');
        assert_eq!(it.name, "&eStar");
        assert_eq!(it.amount, 3);
        assert_eq!(it.style.fg, Color::from_rgb(1, 2, 3));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn loads_from_json() {
        let json = r#"{
            "glyph": "$",
            "style": { "fg": 16755200, "bg": 0, "attrs": 1 },
            "name": "&6Gold",
            "amount": 64
        }"#;
        let it: Item = serde_json::from_str(json).unwrap();
        assert_eq!(it.glyph, '$');
        assert_eq!(it.style.fg, Color::from_rgb(0xFF, 0xAA, 0x00));
        assert_eq!(it.amount, 64);
    }

    #[test]
    fn zero_amount_is_one() {
        assert_eq!(Item::default().with_amount(0).amount, 1);
    }
}
