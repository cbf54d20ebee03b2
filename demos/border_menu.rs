//! A six-row menu framed by randomly coloured glass. Clicking the frame
//! updates the status line.

use std::cell::RefCell;
use std::rc::Rc;

use slotmenu::{ClickEvent, MenuBuilder, SkipPredicate, border_slot_count};
use slotmenu_core::{Item, MemoryHost, MemoryViewer, geom::COLUMNS};
use slotmenu_demos::{Status, random_glass, run};

const ROWS: usize = 6;

fn main() {
    env_logger::init();
    if let Err(e) = run_demo() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run_demo() -> Result<(), Box<dyn std::error::Error>> {
    let status: Status = Rc::new(RefCell::new(String::new()));
    let on_border = {
        let status = Rc::clone(&status);
        move |event: &ClickEvent<'_, Item>| {
            log::info!("border clicked at slot {}", event.slot());
            *status.borrow_mut() = "&cYou clicked a border!".to_string();
        }
    };

    let mut rng = rand::rng();
    let glass: Vec<Item> = (0..border_slot_count(ROWS))
        .map(|_| random_glass(&mut rng))
        .collect();
    let last = ROWS * COLUMNS - 1;

    let mut menu = MenuBuilder::new(MemoryHost::new(), "&8Border &7menu", ROWS as i32)?
        .with_skip_predicate(SkipPredicate::interior(ROWS))
        .with_exit(ROWS * COLUMNS)
        .with_items(glass, on_border.clone())
        // the exit slot is exclusive, so the last corner is pinned
        .with_item(last, random_glass(&mut rng), on_border);

    menu.open(&MemoryViewer::new("terminal"));
    run(&mut menu, &status)?;
    Ok(())
}
