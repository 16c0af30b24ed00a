//! The menu catalog: an ordered item sequence plus a monotonic ID allocator.

use serde::{Deserialize, Serialize};

use crate::domain::AppError;

/// One priced entry in the menu catalog.
///
/// Field names are renamed on the wire to stay readable by files written
/// by earlier versions of the tool (`[{"ID":1,"Name":"Coffee","Price":3.5}]`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    #[serde(rename = "ID")]
    pub id: u64,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Price")]
    pub price: f64,
}

impl MenuItem {
    /// One-line listing form, e.g. `ID: 1, Name: Coffee, Price: $3.50`.
    pub fn display_line(&self, currency: &str) -> String {
        format!("ID: {}, Name: {}, Price: {}{:.2}", self.id, self.name, currency, self.price)
    }
}

/// In-memory menu catalog.
///
/// Items keep insertion order; removal shifts later items left and never
/// reorders the remainder. `next_id` is strictly greater than every ID
/// ever handed out during this catalog's lifetime, so deleted IDs are not
/// reallocated within a run.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    items: Vec<MenuItem>,
    next_id: u64,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog {
    /// Empty catalog; the first allocated ID is 1.
    pub fn new() -> Self {
        Self { items: Vec::new(), next_id: 1 }
    }

    /// Hydrate from a persisted item sequence.
    ///
    /// `next_id` is not persisted; it is rederived as one past the highest
    /// ID present, or 1 for an empty sequence.
    pub fn from_items(items: Vec<MenuItem>) -> Self {
        let next_id = items.iter().map(|item| item.id + 1).max().unwrap_or(1);
        Self { items, next_id }
    }

    /// Append a new item with the next allocated ID.
    pub fn add(&mut self, name: impl Into<String>, price: f64) -> MenuItem {
        let item = MenuItem { id: self.next_id, name: name.into(), price };
        self.next_id += 1;
        self.items.push(item.clone());
        item
    }

    /// Current items in insertion order. Empty is a valid state.
    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// The ID the next `add` will assign.
    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    /// Position of the item with the given ID. Linear scan; IDs are
    /// unique, so the first match is the only one.
    pub fn find_index(&self, id: u64) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    pub fn get(&self, id: u64) -> Option<&MenuItem> {
        self.find_index(id).map(|index| &self.items[index])
    }

    /// Overwrite the name and price of an existing item in place. The ID
    /// and the item's position are preserved.
    pub fn update(
        &mut self,
        id: u64,
        name: impl Into<String>,
        price: f64,
    ) -> Result<MenuItem, AppError> {
        let index = self.find_index(id).ok_or(AppError::ItemNotFound(id))?;
        let item = &mut self.items[index];
        item.name = name.into();
        item.price = price;
        Ok(item.clone())
    }

    /// Remove the item with the given ID, returning it. `next_id` is
    /// unaffected; the freed ID is not reused this run.
    pub fn remove(&mut self, id: u64) -> Result<MenuItem, AppError> {
        let index = self.find_index(id).ok_or(AppError::ItemNotFound(id))?;
        Ok(self.items.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn first_add_assigns_id_one() {
        let mut catalog = Catalog::new();
        let item = catalog.add("Coffee", 3.5);

        assert_eq!(item.id, 1);
        assert_eq!(item.name, "Coffee");
        assert_eq!(item.price, 3.5);
        assert_eq!(catalog.items(), &[item]);
        assert_eq!(catalog.next_id(), 2);
    }

    #[test]
    fn add_then_find_locates_item() {
        let mut catalog = Catalog::new();
        catalog.add("Tea", 2.0);
        let item = catalog.add("Cake", 4.0);

        assert_eq!(catalog.find_index(item.id), Some(1));
        assert_eq!(catalog.get(item.id), Some(&item));
    }

    #[test]
    fn remove_shifts_later_items_left() {
        let mut catalog = Catalog::new();
        catalog.add("Tea", 2.0);
        catalog.add("Cake", 4.0);
        catalog.add("Pie", 5.0);

        let removed = catalog.remove(2).unwrap();

        assert_eq!(removed.name, "Cake");
        assert_eq!(catalog.find_index(2), None);
        let names: Vec<&str> = catalog.items().iter().map(|item| item.name.as_str()).collect();
        assert_eq!(names, ["Tea", "Pie"]);
        let ids: Vec<u64> = catalog.items().iter().map(|item| item.id).collect();
        assert_eq!(ids, [1, 3]);
    }

    #[test]
    fn removed_id_is_not_reallocated() {
        let mut catalog = Catalog::new();
        catalog.add("Tea", 2.0);
        catalog.add("Cake", 4.0);
        catalog.remove(2).unwrap();

        let item = catalog.add("Pie", 5.0);
        assert_eq!(item.id, 3);
    }

    #[test]
    fn update_changes_only_the_target_in_place() {
        let mut catalog = Catalog::new();
        catalog.add("Tea", 2.0);
        catalog.add("Cake", 4.0);

        let updated = catalog.update(2, "Pie", 5.25).unwrap();

        assert_eq!(updated, MenuItem { id: 2, name: "Pie".to_string(), price: 5.25 });
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.find_index(2), Some(1));
        assert_eq!(catalog.get(1).unwrap().name, "Tea");
        assert_eq!(catalog.next_id(), 3);
    }

    #[test]
    fn update_missing_id_changes_nothing() {
        let mut catalog = Catalog::new();
        catalog.add("Tea", 2.0);
        let before = catalog.clone();

        let err = catalog.update(9, "Pie", 5.0).unwrap_err();

        assert!(matches!(err, AppError::ItemNotFound(9)));
        assert_eq!(catalog, before);
    }

    #[test]
    fn remove_missing_id_changes_nothing() {
        let mut catalog = Catalog::new();
        catalog.add("Tea", 2.0);
        let before = catalog.clone();

        let err = catalog.remove(9).unwrap_err();

        assert!(matches!(err, AppError::ItemNotFound(9)));
        assert_eq!(catalog, before);
    }

    #[test]
    fn from_items_rederives_next_id_from_max() {
        let items = vec![
            MenuItem { id: 4, name: "Tea".to_string(), price: 2.0 },
            MenuItem { id: 2, name: "Cake".to_string(), price: 4.0 },
        ];
        let catalog = Catalog::from_items(items.clone());

        assert_eq!(catalog.items(), items.as_slice());
        assert_eq!(catalog.next_id(), 5);
    }

    #[test]
    fn from_items_empty_starts_at_one() {
        let catalog = Catalog::from_items(Vec::new());
        assert!(catalog.is_empty());
        assert_eq!(catalog.next_id(), 1);
    }

    #[test]
    fn display_line_formats_two_decimals() {
        let item = MenuItem { id: 1, name: "Coffee".to_string(), price: 3.5 };
        assert_eq!(item.display_line("$"), "ID: 1, Name: Coffee, Price: $3.50");
    }

    proptest! {
        #[test]
        fn ids_are_strictly_increasing_and_unique(
            names in proptest::collection::vec("[a-z]{1,8}", 1..40),
        ) {
            let mut catalog = Catalog::new();
            let ids: Vec<u64> =
                names.iter().map(|name| catalog.add(name.clone(), 1.0).id).collect();

            prop_assert!(ids.windows(2).all(|pair| pair[0] < pair[1]));
            prop_assert_eq!(catalog.next_id(), ids.len() as u64 + 1);
        }

        #[test]
        fn removals_preserve_relative_order(
            removals in proptest::collection::vec(1u64..=20, 0..12),
        ) {
            let mut catalog = Catalog::new();
            for index in 0..20 {
                catalog.add(format!("item-{index}"), 1.0);
            }

            let mut removed = Vec::new();
            for id in &removals {
                if catalog.remove(*id).is_ok() {
                    removed.push(*id);
                }
            }

            let ids: Vec<u64> = catalog.items().iter().map(|item| item.id).collect();
            prop_assert!(ids.windows(2).all(|pair| pair[0] < pair[1]));

            // Freed IDs stay retired for the rest of the run.
            let fresh = catalog.add("fresh", 1.0);
            prop_assert_eq!(fresh.id, 21);
            for id in removed {
                prop_assert!(catalog.find_index(id).is_none());
            }
        }
    }
}
