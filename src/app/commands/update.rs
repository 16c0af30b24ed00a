use crate::domain::validation::{parse_id, parse_price};
use crate::domain::{AppError, Catalog, MenuItem};

/// Overwrite an existing item's name and price in place.
pub fn execute(
    catalog: &mut Catalog,
    id: &str,
    name: &str,
    price: &str,
) -> Result<MenuItem, AppError> {
    let id = parse_id(id)?;
    let price = parse_price(price)?;
    catalog.update(id, name, price)
}
