//! A paginated shop. Products turn red once the wallet cannot cover them;
//! buying one re-renders the page.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use slotmenu::{ButtonKind, ClickEvent, MenuBuilder, PageRequest, SkipPredicate};
use slotmenu_core::{Color, Item, MemoryHost, MemoryViewer, Style};
use slotmenu_demos::{Product, Status, WALLET, catalogue, run};

const ROWS: usize = 4;
const STARTING_COINS: u32 = 150;

fn main() {
    env_logger::init();
    if let Err(e) = run_demo() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn arrow(glyph: char, name: &str) -> Item {
    Item::new(glyph)
        .with_style(Style::default().with_fg(Color::from_code('e').unwrap_or_default()))
        .with_name(name)
}

fn run_demo() -> Result<(), Box<dyn std::error::Error>> {
    let status: Status = Rc::new(RefCell::new(format!("&6{STARTING_COINS} coins")));
    let wallet = Rc::new(Cell::new(STARTING_COINS));

    let buy = {
        let status = Rc::clone(&status);
        move |event: &ClickEvent<'_, Product>| {
            let (Some(product), Some(wallet)) = (
                event.entry(),
                event.properties().get::<Rc<Cell<u32>>>(WALLET),
            ) else {
                return;
            };
            let coins = wallet.get();
            let message = if coins >= product.price {
                wallet.set(coins - product.price);
                log::info!("sold {} for {}", product.name, product.price);
                format!("&aBought {}. &6{} coins left", product.name, wallet.get())
            } else {
                format!("&cCannot afford {}. &6{coins} coins", product.name)
            };
            *status.borrow_mut() = message;
            event.request(PageRequest::Refresh);
        }
    };

    let page_size = (ROWS - 2) * 7;
    let mut menu = MenuBuilder::create(MemoryHost::new(), "&2General &aStore", ROWS as i32)?
        .with_skip_predicate(SkipPredicate::border(ROWS))
        .with_page_size(page_size)
        .with_property(WALLET, Rc::clone(&wallet))
        .with_objects(catalogue(), buy)
        .with_button(ButtonKind::PreviousPage, 27, arrow('<', "&ePrevious page"))
        .with_button(ButtonKind::NextPage, 35, arrow('>', "&eNext page"));

    menu.open(&MemoryViewer::new("terminal"));
    run(&mut menu, &status)?;
    Ok(())
}
