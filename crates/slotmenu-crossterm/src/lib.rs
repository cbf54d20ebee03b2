//! Crossterm terminal driver for slotmenu.
//!
//! Provides a [`TerminalDriver`] that draws a slot grid into the terminal
//! (three columns per slot) and turns mouse presses on slots into
//! [`RawClick`]s, so a menu can be driven without a game server.

use std::io::{self, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEventKind},
    execute, queue,
    style::{self, Attribute, Color as CtColor, SetBackgroundColor, SetForegroundColor},
    terminal::{self, ClearType},
};

use slotmenu_core::{
    AttrMask, ClickKind, Color, Item, RawClick, SlotPos, Style, compute_changes,
    geom::rows_of,
    text::parse_colored,
};

/// Terminal columns used by one slot.
const SLOT_WIDTH: u16 = 3;
/// Terminal row of the first slot row (the title sits above it).
const GRID_TOP: u16 = 2;

/// Maps a slotmenu [`Color`] to a [`crossterm::style::Color`].
fn to_ct_color(c: Color) -> CtColor {
    if c == Color::DEFAULT {
        CtColor::Reset
    } else {
        let (r, g, b) = c.rgb();
        CtColor::Rgb { r, g, b }
    }
}

/// Maps a mouse button and modifiers to a [`ClickKind`].
fn to_click_kind(button: MouseButton, mods: KeyModifiers) -> ClickKind {
    let shift = mods.contains(KeyModifiers::SHIFT);
    match button {
        MouseButton::Left if shift => ClickKind::ShiftLeft,
        MouseButton::Left => ClickKind::Left,
        MouseButton::Right if shift => ClickKind::ShiftRight,
        MouseButton::Right => ClickKind::Right,
        MouseButton::Middle => ClickKind::Middle,
    }
}

/// The slot under terminal cell `(column, row)` for a grid of `size` slots.
pub fn slot_at(column: u16, row: u16, size: usize) -> Option<usize> {
    let row = row.checked_sub(GRID_TOP)? as usize;
    let pos = SlotPos::new(row, (column / SLOT_WIDTH) as usize);
    pos.slot().filter(|&s| s < size)
}

/// What the user did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// A mouse press, already mapped to a slot (or `-1` off the grid).
    Click(RawClick),
    /// A number key pressed while the pointer rests on a slot.
    Hotkey(RawClick),
    /// `q` or Escape.
    Quit,
}

/// A terminal back-end for slot grids using crossterm.
pub struct TerminalDriver {
    mouse_enabled: bool,
    title: String,
    shown: Vec<Option<Item>>,
    hover: Option<usize>,
}

impl TerminalDriver {
    /// Create a new driver.
    pub fn new() -> Self {
        Self {
            mouse_enabled: true,
            title: String::new(),
            shown: Vec::new(),
            hover: None,
        }
    }

    /// Configure whether mouse events are captured.
    pub fn with_mouse(mut self, enabled: bool) -> Self {
        self.mouse_enabled = enabled;
        self
    }

    /// Switch the terminal to raw mode on the alternate screen.
    pub fn init(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(
            stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::Clear(ClearType::All)
        )?;
        if self.mouse_enabled {
            execute!(stdout, event::EnableMouseCapture)?;
        }
        Ok(())
    }

    /// Draw `slots` under `title`. Only slots that changed since the last
    /// call are written, unless the title or grid size changed.
    pub fn draw(&mut self, title: &str, slots: &[Option<Item>]) -> io::Result<()> {
        let mut stdout = io::stdout();

        if title != self.title || slots.len() != self.shown.len() {
            queue!(stdout, terminal::Clear(ClearType::All), cursor::MoveTo(0, 0))?;
            for seg in parse_colored(title, Style::default()) {
                write_styled(&mut stdout, seg.style, &seg.text)?;
            }
            let footer = GRID_TOP + rows_of(slots.len()) as u16 + 1;
            queue!(stdout, cursor::MoveTo(0, footer))?;
            write!(stdout, "click a slot, q to quit")?;
            self.title = title.to_string();
            self.shown.clear();
        }

        for change in compute_changes(&self.shown, slots) {
            let pos = SlotPos::from_slot(change.slot);
            let x = pos.column as u16 * SLOT_WIDTH;
            let y = GRID_TOP + pos.row as u16;
            queue!(stdout, cursor::MoveTo(x, y))?;
            match &change.item {
                Some(item) => {
                    let text = format!(" {} ", item.glyph);
                    write_styled(&mut stdout, item.style, &text)?;
                }
                None => write!(stdout, " · ")?,
            }
        }

        self.shown = slots.to_vec();
        stdout.flush()
    }

    /// Wait up to `timeout` for input.
    pub fn poll(&mut self, timeout: Duration) -> io::Result<Option<Input>> {
        if !event::poll(timeout)? {
            return Ok(None);
        }
        let size = self.shown.len();
        let input = match event::read()? {
            Event::Key(KeyEvent { code, .. }) => match code {
                KeyCode::Char('q') | KeyCode::Esc => Some(Input::Quit),
                KeyCode::Char(c @ '1'..='9') => self.hover.map(|slot| {
                    let key = c as u8 - b'1';
                    Input::Hotkey(self.click(slot as i32, ClickKind::NumberKey(key)))
                }),
                _ => None,
            },
            Event::Mouse(me) => {
                let slot = slot_at(me.column, me.row, size);
                match me.kind {
                    MouseEventKind::Down(button) => {
                        let raw_slot = slot.map_or(-1, |s| s as i32);
                        let kind = to_click_kind(button, me.modifiers);
                        Some(Input::Click(self.click(raw_slot, kind)))
                    }
                    MouseEventKind::Moved => {
                        self.hover = slot;
                        None
                    }
                    _ => None,
                }
            }
            _ => None,
        };
        Ok(input)
    }

    /// Restore the terminal.
    pub fn close(&mut self) {
        let mut stdout = io::stdout();
        if self.mouse_enabled {
            let _ = execute!(stdout, event::DisableMouseCapture);
        }
        let _ = execute!(stdout, cursor::Show, terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }

    fn click(&self, raw_slot: i32, kind: ClickKind) -> RawClick {
        let current_item = usize::try_from(raw_slot)
            .ok()
            .and_then(|s| self.shown.get(s).cloned().flatten());
        RawClick {
            raw_slot,
            current_item,
            kind,
        }
    }
}

impl Default for TerminalDriver {
    fn default() -> Self {
        Self::new()
    }
}

fn write_styled(out: &mut impl Write, st: Style, text: &str) -> io::Result<()> {
    queue!(
        out,
        SetForegroundColor(to_ct_color(st.fg)),
        SetBackgroundColor(to_ct_color(st.bg))
    )?;
    let attrs = st.attrs;
    if attrs.contains(AttrMask::BOLD) {
        queue!(out, style::SetAttribute(Attribute::Bold))?;
    }
    if attrs.contains(AttrMask::ITALIC) {
        queue!(out, style::SetAttribute(Attribute::Italic))?;
    }
    if attrs.contains(AttrMask::UNDERLINE) {
        queue!(out, style::SetAttribute(Attribute::Underlined))?;
    }
    if attrs.contains(AttrMask::STRIKETHROUGH) {
        queue!(out, style::SetAttribute(Attribute::CrossedOut))?;
    }
    if attrs.contains(AttrMask::BLINK) {
        queue!(out, style::SetAttribute(Attribute::SlowBlink))?;
    }
    write!(out, "{text}")?;
    queue!(out, style::SetAttribute(Attribute::Reset), style::ResetColor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_under_cursor() {
        assert_eq!(slot_at(0, 0, 27), None);
        assert_eq!(slot_at(0, GRID_TOP, 27), Some(0));
        assert_eq!(slot_at(4, GRID_TOP, 27), Some(1));
        assert_eq!(slot_at(26, GRID_TOP + 1, 27), Some(17));
        // right of the grid
        assert_eq!(slot_at(27, GRID_TOP, 27), None);
        // below the grid
        assert_eq!(slot_at(0, GRID_TOP + 3, 27), None);
    }

    #[test]
    fn click_kinds() {
        assert_eq!(to_click_kind(MouseButton::Left, KeyModifiers::NONE), ClickKind::Left);
        assert_eq!(to_click_kind(MouseButton::Right, KeyModifiers::SHIFT), ClickKind::ShiftRight);
        assert_eq!(to_click_kind(MouseButton::Middle, KeyModifiers::SHIFT), ClickKind::Middle);
    }

    #[test]
    fn default_color_resets() {
        assert_eq!(to_ct_color(Color::DEFAULT), CtColor::Reset);
        assert_eq!(
            to_ct_color(Color::from_rgb(1, 2, 3)),
            CtColor::Rgb { r: 1, g: 2, b: 3 }
        );
    }

    #[test]
    fn click_carries_shown_item() {
        let mut driver = TerminalDriver::new();
        driver.shown = vec![None, Some(Item::new('A'))];
        let click = driver.click(1, ClickKind::Left);
        assert_eq!(click.current_item.map(|i| i.glyph), Some('A'));
        assert_eq!(driver.click(-1, ClickKind::Left).current_item, None);
    }
}
