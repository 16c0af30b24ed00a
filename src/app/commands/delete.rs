use crate::domain::validation::parse_id;
use crate::domain::{AppError, Catalog, MenuItem};

/// Remove an item by ID, returning the removed item.
pub fn execute(catalog: &mut Catalog, id: &str) -> Result<MenuItem, AppError> {
    let id = parse_id(id)?;
    catalog.remove(id)
}
