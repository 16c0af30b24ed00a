use crate::domain::validation::parse_price;
use crate::domain::{AppError, Catalog, MenuItem};

/// Append a new item; the catalog assigns the ID.
pub fn execute(catalog: &mut Catalog, name: &str, price: &str) -> Result<MenuItem, AppError> {
    let price = parse_price(price)?;
    Ok(catalog.add(name, price))
}
