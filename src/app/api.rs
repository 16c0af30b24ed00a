//! Application facade: one entry point per catalog operation.
//!
//! Every entry point runs a full catalog session against the resolved
//! store: hydrate, apply the operation, save. Subcommand invocations are
//! therefore one lifecycle each; the interactive menu runs a single long
//! session through `with_catalog`.

use std::path::{Path, PathBuf};

use crate::adapters::FilesystemCatalogStore;
use crate::app::AppContext;
use crate::app::commands::{add, delete, list, update};
use crate::domain::config::{DATA_FILE_ENV, DEFAULT_DATA_FILE};
use crate::domain::{AppError, Catalog, Config, MenuItem};
use crate::ports::CatalogStore;

/// Run one catalog session: hydrate from the store, apply `op`, then
/// attempt to save on every exit path.
///
/// An absent or unreadable store hydrates as an empty catalog with a
/// warning. A failed save is fatal and takes precedence over the
/// operation's own error; the operation error is still reported first so
/// it is not swallowed.
pub fn with_catalog<S, T>(
    ctx: &AppContext<S>,
    op: impl FnOnce(&mut Catalog) -> Result<T, AppError>,
) -> Result<T, AppError>
where
    S: CatalogStore,
{
    let mut catalog = load_or_empty(ctx.store());
    let outcome = op(&mut catalog);
    match ctx.store().save(catalog.items()) {
        Ok(()) => outcome,
        Err(save_err) => {
            if let Err(op_err) = outcome {
                eprintln!("Error: {}", op_err);
            }
            Err(save_err)
        }
    }
}

/// Hydrate a catalog, treating an absent or unreadable store as empty.
pub fn load_or_empty(store: &impl CatalogStore) -> Catalog {
    match store.load() {
        Ok(Some(items)) => Catalog::from_items(items),
        Ok(None) => {
            println!("⚠️  No menu file at {}; starting with an empty menu.", store.location());
            Catalog::new()
        }
        Err(err) => {
            println!("⚠️  {}; starting with an empty menu.", err);
            Catalog::new()
        }
    }
}

/// Resolve the catalog file: `--file` flag, then `CARTA_FILE`, then
/// `data-file` from `carta.toml`, then `menu.json`.
pub fn resolve_data_file(flag: Option<&Path>, config: &Config) -> PathBuf {
    if let Some(path) = flag {
        return path.to_path_buf();
    }
    if let Some(path) = std::env::var_os(DATA_FILE_ENV) {
        return PathBuf::from(path);
    }
    config.data_file.clone().unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE))
}

/// Build the context for a CLI invocation in the current directory.
pub fn context(file: Option<&Path>) -> Result<AppContext<FilesystemCatalogStore>, AppError> {
    let cwd = std::env::current_dir()?;
    let config = Config::load_from_dir(&cwd)?;
    let store = FilesystemCatalogStore::new(resolve_data_file(file, &config));
    Ok(AppContext::new(store, config))
}

/// Add an item to the menu. The price arrives as raw user text.
pub fn add_item(file: Option<&Path>, name: &str, price: &str) -> Result<MenuItem, AppError> {
    let ctx = context(file)?;
    with_catalog(&ctx, |catalog| add::execute(catalog, name, price))
}

/// Current menu items in insertion order.
pub fn menu_items(file: Option<&Path>) -> Result<Vec<MenuItem>, AppError> {
    let ctx = context(file)?;
    with_catalog(&ctx, |catalog| Ok(list::execute(catalog)))
}

/// Update an existing item. ID and price arrive as raw user text.
pub fn update_item(
    file: Option<&Path>,
    id: &str,
    name: &str,
    price: &str,
) -> Result<MenuItem, AppError> {
    let ctx = context(file)?;
    with_catalog(&ctx, |catalog| update::execute(catalog, id, name, price))
}

/// Delete an item by ID, returning the removed item.
pub fn delete_item(file: Option<&Path>, id: &str) -> Result<MenuItem, AppError> {
    let ctx = context(file)?;
    with_catalog(&ctx, |catalog| delete::execute(catalog, id))
}
