use crate::domain::{Catalog, MenuItem};

/// Current items in insertion order. An empty menu is a valid state,
/// reported by the caller, not an error.
pub fn execute(catalog: &Catalog) -> Vec<MenuItem> {
    catalog.items().to_vec()
}
