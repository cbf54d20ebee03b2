//! Colour-coded text.
//!
//! Hosts mark colour and format changes with a section sign followed by a
//! code character (`§c` red, `§l` bold, `§r` reset). Authors write the same
//! codes with a friendlier prefix, usually `&`, and translate them once.

use crate::style::{AttrMask, Color, Style};

/// The host's native colour marker.
pub const COLOR_CHAR: char = '§';

/// Whether `c` is a valid colour/format code character.
#[inline]
pub fn is_code(c: char) -> bool {
    matches!(c.to_ascii_lowercase(), '0'..='9' | 'a'..='f' | 'k'..='o' | 'r')
}

/// Replace every `alt` followed by a valid code character with
/// [`COLOR_CHAR`] and the lowercased code. Other occurrences of `alt` are
/// kept as-is.
pub fn translate_color_codes(alt: char, text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == alt {
            if let Some(&next) = chars.peek() {
                if is_code(next) {
                    out.push(COLOR_CHAR);
                    out.push(next.to_ascii_lowercase());
                    chars.next();
                    continue;
                }
            }
        }
        out.push(ch);
    }
    out
}

/// Remove every native colour code from `text`.
pub fn strip_color_codes(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == COLOR_CHAR && chars.peek().is_some_and(|&c| is_code(c)) {
            chars.next();
            continue;
        }
        out.push(ch);
    }
    out
}

/// A run of characters sharing one style.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub style: Style,
}

/// Split natively coded text into styled segments, starting from `base`.
///
/// A colour code resets attributes (as hosts do); `§r` resets to `base`.
pub fn parse_colored(text: &str, base: Style) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut current = Segment {
        text: String::new(),
        style: base,
    };
    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == COLOR_CHAR {
            if let Some(&code) = chars.peek().filter(|&&c| is_code(c)) {
                chars.next();
                let style = next_style(current.style, base, code);
                if style != current.style {
                    if !current.text.is_empty() {
                        segments.push(Segment {
                            text: std::mem::take(&mut current.text),
                            style: current.style,
                        });
                    }
                    current.style = style;
                }
                continue;
            }
        }
        current.text.push(ch);
    }
    if !current.text.is_empty() {
        segments.push(current);
    }
    segments
}

fn next_style(style: Style, base: Style, code: char) -> Style {
    if let Some(color) = Color::from_code(code) {
        return style.with_fg(color).with_attrs(AttrMask::NONE);
    }
    if let Some(attr) = AttrMask::from_code(code) {
        return style.with_attrs(style.attrs | attr);
    }
    base
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translates_valid_codes_only() {
        assert_eq!(translate_color_codes('&', "&cRed &Lbold"), "§cRed §lbold");
        assert_eq!(translate_color_codes('&', "Fish & Chips"), "Fish & Chips");
        assert_eq!(translate_color_codes('&', "trailing&"), "trailing&");
        assert_eq!(translate_color_codes('&', "&&a"), "&§a");
    }

    #[test]
    fn strip_removes_codes() {
        assert_eq!(strip_color_codes("§eBorder §lX"), "Border X");
        assert_eq!(strip_color_codes("§zkeep"), "§zkeep");
    }

    #[test]
    fn parse_into_segments() {
        let base = Style::default();
        let segs = parse_colored("Shop §cSale§r!", base);
        assert_eq!(segs.len(), 3);
        assert_eq!(segs[0].text, "Shop ");
        assert_eq!(segs[0].style, base);
        assert_eq!(segs[1].text, "Sale");
        assert_eq!(segs[1].style.fg, Color::from_rgb(0xFF, 0x55, 0x55));
        assert_eq!(segs[2].text, "!");
        assert_eq!(segs[2].style, base);
    }

    #[test]
    fn format_codes_accumulate_until_color() {
        let segs = parse_colored("§l§oA§9B", Style::default());
        assert_eq!(segs[0].text, "A");
        assert!(segs[0].style.attrs.contains(AttrMask::BOLD | AttrMask::ITALIC));
        assert_eq!(segs[1].style.attrs, AttrMask::NONE);
    }
}
