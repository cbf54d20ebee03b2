//! Shared pieces of the terminal demos: the event loop, random border
//! glass, and a small shop catalogue.

use std::cell::{Cell, RefCell};
use std::io;
use std::rc::Rc;
use std::time::Duration;

use rand::{Rng, RngExt};
use slotmenu::{MenuBuilder, MenuItem, Properties};
use slotmenu_core::{
    Color, GridHandle, Item, MemoryHost, Style,
    text::translate_color_codes,
};
use slotmenu_crossterm::{Input, TerminalDriver};

/// A status line handlers write to and the event loop prints.
pub type Status = Rc<RefCell<String>>;

/// Property key of the shop wallet (`Rc<Cell<u32>>`).
pub const WALLET: &str = "wallet";

/// A pane of glass in one of the sixteen legacy colours.
pub fn random_glass(rng: &mut impl Rng) -> Item {
    let code = char::from_digit(rng.random_range(0..16), 16).unwrap_or('f');
    let fg = Color::from_code(code).unwrap_or_default();
    Item::new('▒')
        .with_style(Style::default().with_fg(fg))
        .with_name("&eBorder")
}

/// Run `menu` in the terminal until the user quits.
pub fn run<T: MenuItem + 'static>(
    menu: &mut MenuBuilder<MemoryHost, T>,
    status: &Status,
) -> io::Result<()> {
    let mut driver = TerminalDriver::new();
    driver.init()?;
    let result = event_loop(&mut driver, menu, status);
    driver.close();
    result
}

fn event_loop<T: MenuItem + 'static>(
    driver: &mut TerminalDriver,
    menu: &mut MenuBuilder<MemoryHost, T>,
    status: &Status,
) -> io::Result<()> {
    loop {
        let title = format!(
            "{}  {}",
            menu.grid().title(),
            translate_color_codes('&', &status.borrow())
        );
        driver.draw(&title, &menu.grid().snapshot())?;
        match driver.poll(Duration::from_millis(250))? {
            Some(Input::Quit) => return Ok(()),
            Some(Input::Click(raw)) | Some(Input::Hotkey(raw)) => {
                let dispatch = menu.on_click(&raw);
                log::debug!("{:?} -> {dispatch:?}", raw.kind);
            }
            None => {}
        }
    }
}

// ---------------------------------------------------------------------------
// Shop
// ---------------------------------------------------------------------------

/// Something for sale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub name: String,
    pub glyph: char,
    pub price: u32,
}

impl Product {
    pub fn new(name: &str, glyph: char, price: u32) -> Self {
        Self {
            name: name.to_string(),
            glyph,
            price,
        }
    }
}

impl MenuItem for Product {
    fn display<G: GridHandle>(&self, _grid: &G, properties: &Properties) -> Item {
        let coins = properties
            .get::<Rc<Cell<u32>>>(WALLET)
            .map_or(0, |w| w.get());
        let code = if coins >= self.price { 'a' } else { 'c' };
        Item::new(self.glyph)
            .with_style(Style::default().with_fg(Color::from_code(code).unwrap_or_default()))
            .with_name(format!("&{code}{} &7({} coins)", self.name, self.price))
    }
}

/// The demo shop's stock.
pub fn catalogue() -> Vec<Product> {
    let stock = [
        ("Apple", 'a', 2),
        ("Bread", 'b', 3),
        ("Carrot", 'c', 2),
        ("Diamond", 'D', 120),
        ("Emerald", 'E', 90),
        ("Feather", 'f', 1),
        ("Gold ingot", 'G', 40),
        ("Hoe", 'h', 8),
        ("Iron ingot", 'I', 15),
        ("Jukebox", 'J', 60),
        ("Kelp", 'k', 1),
        ("Lantern", 'L', 12),
        ("Map", 'm', 10),
        ("Name tag", 'n', 25),
        ("Obsidian", 'O', 30),
        ("Pickaxe", 'p', 20),
        ("Quartz", 'q', 6),
        ("Rail", 'r', 4),
        ("Saddle", 's', 35),
        ("Torch", 't', 1),
        ("Umbrella", 'u', 9),
        ("Vine", 'v', 2),
        ("Wool", 'w', 3),
        ("Xylophone", 'x', 55),
        ("Yarn", 'y', 2),
        ("Zombie head", 'Z', 75),
    ];
    stock
        .into_iter()
        .map(|(name, glyph, price)| Product::new(name, glyph, price))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use slotmenu_core::MemoryGrid;

    #[test]
    fn product_colour_follows_wallet() {
        let grid = MemoryGrid::new(9, "t");
        let wallet = Rc::new(Cell::new(10u32));
        let props = Properties::new().with(WALLET, Rc::clone(&wallet));
        let hoe = Product::new("Hoe", 'h', 8);
        let green = Color::from_code('a').unwrap_or_default();
        let red = Color::from_code('c').unwrap_or_default();
        assert_eq!(hoe.display(&grid, &props).style.fg, green);
        wallet.set(5);
        assert_eq!(hoe.display(&grid, &props).style.fg, red);
        assert_eq!(hoe.display(&grid, &Properties::new()).style.fg, red);
    }

    #[test]
    fn glass_uses_a_legacy_colour() {
        let mut rng = rand::rng();
        for _ in 0..32 {
            let glass = random_glass(&mut rng);
            assert_eq!(glass.glyph, '▒');
            assert!("0123456789abcdef".chars().any(|c| Color::from_code(c) == Some(glass.style.fg)));
        }
    }

    #[test]
    fn catalogue_is_stocked() {
        assert!(catalogue().len() > 14);
    }
}
