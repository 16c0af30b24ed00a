//! Interactive menu loop.
//!
//! One long catalog session: hydrate once, mutate through the prompts,
//! save once on the way out — on the Exit choice as well as on any
//! propagated fatal error. Recoverable errors (bad number, unknown ID)
//! abort only the current operation and return to the menu.

use std::path::Path;

use dialoguer::{Input, Select};

use crate::app::api;
use crate::domain::validation::{parse_id, parse_price};
use crate::domain::{AppError, Catalog};

const MENU_CHOICES: [&str; 5] =
    ["Add menu item", "View menu", "Update menu item", "Delete menu item", "Exit"];

pub fn run_menu(file: Option<&Path>) -> Result<(), AppError> {
    let ctx = api::context(file)?;
    let currency = ctx.config().currency().to_string();
    api::with_catalog(&ctx, |catalog| menu_loop(catalog, &currency))
}

fn menu_loop(catalog: &mut Catalog, currency: &str) -> Result<(), AppError> {
    loop {
        let choice = Select::new()
            .with_prompt("Menu options")
            .items(&MENU_CHOICES)
            .default(0)
            .interact()
            .map_err(|e| AppError::Prompt(e.to_string()))?;

        let outcome = match choice {
            0 => add_flow(catalog),
            1 => {
                view(catalog, currency);
                Ok(())
            }
            2 => update_flow(catalog),
            3 => delete_flow(catalog),
            _ => break,
        };

        if let Err(err) = outcome {
            if err.is_recoverable() {
                println!("{}", err);
            } else {
                return Err(err);
            }
        }
    }

    println!("Exiting...");
    Ok(())
}

fn prompt(label: &str) -> Result<String, AppError> {
    Input::<String>::new()
        .with_prompt(label)
        .allow_empty(true)
        .interact_text()
        .map_err(|e| AppError::Prompt(e.to_string()))
}

fn add_flow(catalog: &mut Catalog) -> Result<(), AppError> {
    let name = prompt("Enter name of the item")?;
    let price = parse_price(&prompt("Enter price of the item")?)?;

    let item = catalog.add(name, price);
    println!("✅ Added '{}' with ID {}", item.name, item.id);
    Ok(())
}

fn view(catalog: &Catalog, currency: &str) {
    if catalog.is_empty() {
        println!("No items in the menu.");
        return;
    }
    for item in catalog.items() {
        println!("{}", item.display_line(currency));
    }
}

fn update_flow(catalog: &mut Catalog) -> Result<(), AppError> {
    let id = parse_id(&prompt("Enter ID of the item to update")?)?;
    // Check existence before prompting for the replacement values.
    if catalog.find_index(id).is_none() {
        return Err(AppError::ItemNotFound(id));
    }

    let name = prompt("Enter new name of the item")?;
    let price = parse_price(&prompt("Enter new price of the item")?)?;

    let item = catalog.update(id, name, price)?;
    println!("✅ Updated '{}' (ID {})", item.name, item.id);
    Ok(())
}

fn delete_flow(catalog: &mut Catalog) -> Result<(), AppError> {
    let id = parse_id(&prompt("Enter ID of the item to delete")?)?;

    let item = catalog.remove(id)?;
    println!("✅ Deleted '{}' (ID {})", item.name, item.id);
    Ok(())
}
