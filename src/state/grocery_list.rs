//! In-memory grocery list
//!
//! `GroceryList` owns the ordered item collection. It is the only place items
//! are created, changed, or dropped; every grouped view is computed from it on
//! demand so nothing derived can drift from the collection.

use tracing::debug;

use crate::{
    error::{GroceryError, Result},
    models::{
        item::{normalize_name, normalize_unit, validate_quantity},
        CategorySection, FoodCategory, GroceryItem, ItemUpdate, ListSummary,
    },
    services::{IdSource, UuidSource},
};

/// Ordered collection of grocery items
#[derive(Debug)]
pub struct GroceryList {
    items: Vec<GroceryItem>,
    ids: Box<dyn IdSource>,
}

impl GroceryList {
    /// Create an empty list that assigns UUIDs to new items
    pub fn new() -> Self {
        Self::with_id_source(Box::new(UuidSource))
    }

    /// Create an empty list drawing ids from `ids`
    pub fn with_id_source(ids: Box<dyn IdSource>) -> Self {
        Self {
            items: Vec::new(),
            ids,
        }
    }

    /// Append a new unchecked item.
    ///
    /// `name` and `unit` are trimmed; a blank unit is stored as no unit.
    pub fn add(
        &mut self,
        name: &str,
        category: FoodCategory,
        quantity: f64,
        unit: Option<&str>,
    ) -> Result<GroceryItem> {
        let name = normalize_name(name)?;
        validate_quantity(quantity)?;

        let id = self.ids.next_id();
        if self.position(&id).is_some() {
            return Err(GroceryError::DuplicateId(id));
        }

        let item = GroceryItem {
            id,
            name,
            category,
            quantity,
            unit: normalize_unit(unit),
            is_checked: false,
        };
        self.items.push(item.clone());
        Ok(item)
    }

    /// Remove the item with `id`, returning it. Absent ids are ignored.
    pub fn remove(&mut self, id: &str) -> Option<GroceryItem> {
        match self.position(id) {
            Some(index) => Some(self.items.remove(index)),
            None => {
                debug!("remove: no item with id {}", id);
                None
            }
        }
    }

    /// Flip the checked flag of the item with `id` and return the new value
    pub fn toggle(&mut self, id: &str) -> Option<GroceryItem> {
        let Some(item) = self.get_mut(id) else {
            debug!("toggle: no item with id {}", id);
            return None;
        };
        item.is_checked = !item.is_checked;
        Some(item.clone())
    }

    /// Merge `update` into the item with `id`.
    ///
    /// Supplied fields are validated before anything is touched, so a rejected
    /// update leaves the list unchanged. Returns `Ok(None)` for absent ids.
    pub fn update(&mut self, id: &str, update: ItemUpdate) -> Result<Option<GroceryItem>> {
        let update = update.normalized()?;
        let Some(item) = self.get_mut(id) else {
            debug!("update: no item with id {}", id);
            return Ok(None);
        };
        update.apply_to(item);
        Ok(Some(item.clone()))
    }

    /// Items in `category`, in insertion order
    pub fn items_by_category(&self, category: FoodCategory) -> Vec<GroceryItem> {
        self.items
            .iter()
            .filter(|item| item.category == category)
            .cloned()
            .collect()
    }

    /// All categories in display order, including empty ones
    pub fn categories(&self) -> &'static [FoodCategory] {
        &FoodCategory::ALL
    }

    /// Non-empty category sections in display order
    pub fn sections(&self) -> Vec<CategorySection> {
        self.categories()
            .iter()
            .map(|&category| CategorySection {
                category,
                label: category.label().to_string(),
                items: self.items_by_category(category),
            })
            .filter(|section| !section.items.is_empty())
            .collect()
    }

    pub fn summary(&self) -> ListSummary {
        ListSummary::from_items(&self.items)
    }

    /// Read-only view of the collection in insertion order
    pub fn items(&self) -> &[GroceryItem] {
        &self.items
    }

    pub fn get(&self, id: &str) -> Option<&GroceryItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn get_mut(&mut self, id: &str) -> Option<&mut GroceryItem> {
        self.items.iter_mut().find(|item| item.id == id)
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }
}

impl Default for GroceryList {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::SequentialIds;

    fn list() -> GroceryList {
        GroceryList::with_id_source(Box::new(SequentialIds::default()))
    }

    /// Always hands out the same id
    #[derive(Debug)]
    struct StuckIds;

    impl IdSource for StuckIds {
        fn next_id(&mut self) -> String {
            "same".to_string()
        }
    }

    #[test]
    fn test_add_appends_unchecked_item() {
        let mut list = list();
        let item = list.add("Milk", FoodCategory::Dairy, 1.0, Some("gal")).unwrap();

        assert_eq!(item.id, "item-1");
        assert_eq!(item.name, "Milk");
        assert_eq!(item.unit.as_deref(), Some("gal"));
        assert!(!item.is_checked);
        assert_eq!(list.items(), &[item]);
    }

    #[test]
    fn test_add_trims_name_and_blank_unit() {
        let mut list = list();
        let item = list.add("  Rice ", FoodCategory::Grains, 2.0, Some("   ")).unwrap();
        assert_eq!(item.name, "Rice");
        assert_eq!(item.unit, None);
    }

    #[test]
    fn test_add_rejects_invalid_input() {
        let mut list = list();
        assert_eq!(
            list.add("  ", FoodCategory::Other, 1.0, None),
            Err(GroceryError::EmptyName)
        );
        assert_eq!(
            list.add("Salt", FoodCategory::Other, 0.0, None),
            Err(GroceryError::InvalidQuantity(0.0))
        );
        assert!(list.is_empty());
    }

    #[test]
    fn test_add_rejects_duplicate_id() {
        let mut list = GroceryList::with_id_source(Box::new(StuckIds));
        list.add("Tea", FoodCategory::Beverages, 1.0, None).unwrap();
        assert_eq!(
            list.add("Coffee", FoodCategory::Beverages, 1.0, None),
            Err(GroceryError::DuplicateId("same".to_string()))
        );
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_add_keeps_same_names_separate() {
        let mut list = list();
        list.add("Milk", FoodCategory::Dairy, 1.0, None).unwrap();
        list.add("Milk", FoodCategory::Dairy, 1.0, None).unwrap();
        assert_eq!(list.items_by_category(FoodCategory::Dairy).len(), 2);
    }

    #[test]
    fn test_milk_and_bread_scenario() {
        let mut list = list();
        list.add("Milk", FoodCategory::Dairy, 1.0, Some("gal")).unwrap();
        list.add("Bread", FoodCategory::Grains, 2.0, None).unwrap();

        let dairy = list.items_by_category(FoodCategory::Dairy);
        let grains = list.items_by_category(FoodCategory::Grains);
        assert_eq!(dairy.len(), 1);
        assert_eq!(dairy[0].name, "Milk");
        assert_eq!(grains.len(), 1);
        assert_eq!(grains[0].name, "Bread");
        assert!(dairy.iter().chain(grains.iter()).all(|item| !item.is_checked));
    }

    #[test]
    fn test_toggle_checks_item() {
        let mut list = list();
        let apples = list.add("Apples", FoodCategory::Fruits, 6.0, None).unwrap();
        list.toggle(&apples.id);

        let fruits = list.items_by_category(FoodCategory::Fruits);
        assert_eq!(fruits.len(), 1);
        assert!(fruits[0].is_checked);
    }

    #[test]
    fn test_toggle_twice_restores_state() {
        let mut list = list();
        let item = list.add("Apples", FoodCategory::Fruits, 6.0, None).unwrap();
        assert!(list.toggle(&item.id).unwrap().is_checked);
        assert!(!list.toggle(&item.id).unwrap().is_checked);
        assert_eq!(list.get(&item.id), Some(&item));
    }

    #[test]
    fn test_remove_scenario() {
        let mut list = list();
        let eggs = list.add("Eggs", FoodCategory::Dairy, 12.0, None).unwrap();
        assert_eq!(list.remove(&eggs.id), Some(eggs.clone()));
        assert!(list.items_by_category(FoodCategory::Dairy).is_empty());
        assert_eq!(list.remove(&eggs.id), None);
    }

    #[test]
    fn test_remove_keeps_order_of_others() {
        let mut list = list();
        let a = list.add("A", FoodCategory::Snacks, 1.0, None).unwrap();
        let b = list.add("B", FoodCategory::Snacks, 1.0, None).unwrap();
        let c = list.add("C", FoodCategory::Snacks, 1.0, None).unwrap();

        list.remove(&b.id);
        assert_eq!(list.items(), &[a, c]);
    }

    #[test]
    fn test_update_quantity_only() {
        let mut list = list();
        let milk = list.add("Milk", FoodCategory::Dairy, 1.0, Some("gal")).unwrap();
        let bread = list.add("Bread", FoodCategory::Grains, 2.0, None).unwrap();

        let updated = list.update(&milk.id, ItemUpdate::quantity(3.0)).unwrap().unwrap();
        assert_eq!(updated, GroceryItem { quantity: 3.0, ..milk });
        assert_eq!(list.get(&bread.id), Some(&bread));
    }

    #[test]
    fn test_update_can_move_category() {
        let mut list = list();
        let peas = list.add("Peas", FoodCategory::Vegetables, 1.0, None).unwrap();
        list.update(&peas.id, ItemUpdate::category(FoodCategory::Frozen)).unwrap();

        assert!(list.items_by_category(FoodCategory::Vegetables).is_empty());
        assert_eq!(list.items_by_category(FoodCategory::Frozen)[0].id, peas.id);
    }

    #[test]
    fn test_rejected_update_changes_nothing() {
        let mut list = list();
        let milk = list.add("Milk", FoodCategory::Dairy, 1.0, None).unwrap();
        let update = ItemUpdate {
            name: Some("Oat milk".to_string()),
            quantity: Some(-2.0),
            ..ItemUpdate::default()
        };
        assert_eq!(list.update(&milk.id, update), Err(GroceryError::InvalidQuantity(-2.0)));
        assert_eq!(list.get(&milk.id), Some(&milk));
    }

    #[test]
    fn test_absent_id_is_noop() {
        let mut list = list();
        list.add("Milk", FoodCategory::Dairy, 1.0, Some("gal")).unwrap();
        let before = list.items().to_vec();

        assert_eq!(list.remove("missing"), None);
        assert_eq!(list.toggle("missing"), None);
        assert_eq!(list.update("missing", ItemUpdate::quantity(5.0)), Ok(None));
        assert_eq!(list.items(), before.as_slice());
    }

    #[test]
    fn test_empty_list_queries() {
        let list = list();
        assert_eq!(list.categories().len(), 11);
        for &category in list.categories() {
            assert!(list.items_by_category(category).is_empty());
        }
        assert!(list.sections().is_empty());
        assert_eq!(list.summary(), ListSummary::default());
    }

    #[test]
    fn test_category_partition_rebuilds_collection() {
        let mut list = list();
        list.add("Milk", FoodCategory::Dairy, 1.0, None).unwrap();
        list.add("Chips", FoodCategory::Snacks, 1.0, None).unwrap();
        list.add("Cheese", FoodCategory::Dairy, 1.0, None).unwrap();
        list.add("Soda", FoodCategory::Beverages, 6.0, None).unwrap();
        list.add("Yogurt", FoodCategory::Dairy, 4.0, None).unwrap();

        let mut regrouped: Vec<GroceryItem> = list
            .categories()
            .iter()
            .flat_map(|&category| list.items_by_category(category))
            .collect();
        assert_eq!(regrouped.len(), list.len());

        let dairy_items = list.items_by_category(FoodCategory::Dairy);
        let dairy: Vec<&str> = dairy_items
            .iter()
            .map(|item| item.name.as_str())
            .collect();
        assert_eq!(dairy, vec!["Milk", "Cheese", "Yogurt"]);

        regrouped.sort_by(|a, b| a.id.cmp(&b.id));
        let mut original = list.items().to_vec();
        original.sort_by(|a, b| a.id.cmp(&b.id));
        assert_eq!(regrouped, original);
    }

    #[test]
    fn test_sections_skip_empty_categories() {
        let mut list = list();
        list.add("Soda", FoodCategory::Beverages, 1.0, None).unwrap();
        list.add("Kale", FoodCategory::Vegetables, 1.0, None).unwrap();

        let sections = list.sections();
        let labels: Vec<&str> = sections.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec!["Vegetables", "Beverages"]);
    }

    #[test]
    fn test_summary_counts_checked() {
        let mut list = list();
        let a = list.add("A", FoodCategory::Other, 1.0, None).unwrap();
        list.add("B", FoodCategory::Other, 1.0, None).unwrap();
        list.toggle(&a.id);

        assert_eq!(
            list.summary(),
            ListSummary { total: 2, checked: 1, remaining: 1 }
        );
    }
}
