//! CLI adapter.

mod menu;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::app::api;
use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "carta")]
#[command(version)]
#[command(
    about = "Manage a priced menu catalog persisted as a local JSON file",
    long_about = None
)]
struct Cli {
    /// Path to the menu file (overrides carta.toml and CARTA_FILE)
    #[arg(short, long, global = true)]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a menu item
    #[clap(visible_alias = "a")]
    Add {
        /// Item name
        name: String,
        /// Item price
        price: String,
    },
    /// List all menu items
    #[clap(visible_aliases = ["ls", "l"])]
    List,
    /// Update a menu item by ID
    #[clap(visible_alias = "u")]
    Update {
        /// ID of the item to update
        id: String,
        /// New name
        name: String,
        /// New price
        price: String,
    },
    /// Delete a menu item by ID
    #[clap(visible_aliases = ["rm", "d"])]
    Delete {
        /// ID of the item to delete
        id: String,
    },
    /// Interactive menu loop (the default when no subcommand is given)
    #[clap(visible_alias = "m")]
    Menu,
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    let file = cli.file;

    let result: Result<(), AppError> = match cli.command {
        Some(Commands::Add { name, price }) => run_add(file.as_deref(), &name, &price),
        Some(Commands::List) => run_list(file.as_deref()),
        Some(Commands::Update { id, name, price }) => {
            run_update(file.as_deref(), &id, &name, &price)
        }
        Some(Commands::Delete { id }) => run_delete(file.as_deref(), &id),
        Some(Commands::Menu) | None => menu::run_menu(file.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_add(file: Option<&Path>, name: &str, price: &str) -> Result<(), AppError> {
    let item = api::add_item(file, name, price)?;
    println!("✅ Added '{}' with ID {}", item.name, item.id);
    Ok(())
}

fn run_list(file: Option<&Path>) -> Result<(), AppError> {
    let ctx = api::context(file)?;
    let currency = ctx.config().currency().to_string();
    let items = api::with_catalog(&ctx, |catalog| {
        Ok(crate::app::commands::list::execute(catalog))
    })?;

    if items.is_empty() {
        println!("No items in the menu.");
        return Ok(());
    }
    for item in &items {
        println!("{}", item.display_line(&currency));
    }
    Ok(())
}

fn run_update(file: Option<&Path>, id: &str, name: &str, price: &str) -> Result<(), AppError> {
    let item = api::update_item(file, id, name, price)?;
    println!("✅ Updated '{}' (ID {})", item.name, item.id);
    Ok(())
}

fn run_delete(file: Option<&Path>, id: &str) -> Result<(), AppError> {
    let item = api::delete_item(file, id)?;
    println!("✅ Deleted '{}' (ID {})", item.name, item.id);
    Ok(())
}
