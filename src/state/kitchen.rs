//! Pantry, food diary and scan history

use chrono::{NaiveDate, Utc};

use crate::{
    catalog::foods::starting_pantry,
    error::{FitError, FitResult},
    models::{FoodLogEntry, PantryItem, ScanResult, ScannedFood},
};

pub const SCANNED_CATEGORY: &str = "Scanned Items";
pub const SCANNED_QUANTITY: &str = "1 unit";

#[derive(Debug, Default)]
pub struct Kitchen {
    pantry: Vec<PantryItem>,
    next_pantry_id: u64,
    diary: Vec<FoodLogEntry>,
    next_entry_id: u64,
    scans: Vec<ScanResult>,
}

impl Kitchen {
    pub fn new() -> Self {
        let pantry = starting_pantry();
        let next_pantry_id = pantry.iter().map(|i| i.id).max().unwrap_or(0) + 1;
        Self {
            pantry,
            next_pantry_id,
            diary: Vec::new(),
            next_entry_id: 1,
            scans: Vec::new(),
        }
    }

    pub fn pantry(&self) -> &[PantryItem] {
        &self.pantry
    }

    /// Case-insensitive membership check on pantry item names
    pub fn has_ingredient(&self, name: &str) -> bool {
        let name = name.to_lowercase();
        self.pantry.iter().any(|i| i.name.to_lowercase() == name)
    }

    pub fn add_to_pantry(&mut self, name: &str, today: NaiveDate) -> FitResult<PantryItem> {
        let name = name.trim();
        if name.is_empty() {
            return Err(FitError::bad_request("Item name must not be empty"));
        }

        let item = PantryItem {
            id: self.next_pantry_id,
            name: name.to_string(),
            category: SCANNED_CATEGORY.to_string(),
            quantity: SCANNED_QUANTITY.to_string(),
            expiry: None,
            added_date: today,
        };
        self.next_pantry_id += 1;
        self.pantry.push(item.clone());
        Ok(item)
    }

    pub fn remove_from_pantry(&mut self, id: u64) -> FitResult<PantryItem> {
        let index = self
            .pantry
            .iter()
            .position(|i| i.id == id)
            .ok_or_else(|| FitError::not_found("Pantry item not found"))?;
        Ok(self.pantry.remove(index))
    }

    pub fn log_food(&mut self, food: &ScannedFood) -> FoodLogEntry {
        let entry = FoodLogEntry {
            id: self.next_entry_id,
            food_name: food.name.clone(),
            calories: food.calories,
            logged_at: Utc::now(),
        };
        self.next_entry_id += 1;
        self.diary.push(entry.clone());
        entry
    }

    pub fn diary(&self) -> &[FoodLogEntry] {
        &self.diary
    }

    pub fn record_scan(&mut self, result: ScanResult) {
        self.scans.push(result);
    }

    pub fn scans(&self) -> &[ScanResult] {
        &self.scans
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::foods::recognizable_foods;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 7, 12).unwrap()
    }

    #[test]
    fn scanned_items_get_default_category_and_quantity() {
        let mut kitchen = Kitchen::new();
        let item = kitchen.add_to_pantry("Fresh Apple", today()).unwrap();

        assert_eq!(item.id, 11);
        assert_eq!(item.category, SCANNED_CATEGORY);
        assert_eq!(item.quantity, SCANNED_QUANTITY);
        assert_eq!(item.added_date, today());
        assert!(kitchen.has_ingredient("fresh apple"));
    }

    #[test]
    fn ingredient_match_ignores_unicode_case() {
        let mut kitchen = Kitchen::new();
        kitchen.add_to_pantry("JALAPEÑO", today()).unwrap();
        assert!(kitchen.has_ingredient("jalapeño"));
        assert!(kitchen.has_ingredient("Jalapeño"));
        assert!(!kitchen.has_ingredient("jalapeno"));
    }

    #[test]
    fn removing_unknown_item_fails() {
        let mut kitchen = Kitchen::new();
        assert!(matches!(
            kitchen.remove_from_pantry(404),
            Err(FitError::NotFound(_))
        ));
        let removed = kitchen.remove_from_pantry(3).unwrap();
        assert_eq!(removed.name, "Rice");
        assert!(!kitchen.has_ingredient("rice"));
    }

    #[test]
    fn diary_entries_are_numbered() {
        let mut kitchen = Kitchen::new();
        let foods = recognizable_foods();
        let first = kitchen.log_food(&foods[0]);
        let second = kitchen.log_food(&foods[2]);

        assert_eq!((first.id, second.id), (1, 2));
        assert_eq!(second.calories, 95);
        assert_eq!(kitchen.diary().len(), 2);
    }
}
