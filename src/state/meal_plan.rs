//! Today's planned meals

use crate::{
    catalog::meals::sample_meals,
    models::{Meal, NutritionGoals},
};

#[derive(Debug, Default)]
pub struct MealPlan {
    pub meals: Vec<Meal>,
    pub goals: NutritionGoals,
}

impl MealPlan {
    /// The day starts with the breakfast smoothie already planned.
    pub fn new() -> Self {
        Self {
            meals: sample_meals().into_iter().take(1).collect(),
            goals: NutritionGoals::default(),
        }
    }

    /// Append a meal; the same meal may be planned more than once
    pub fn add(&mut self, meal: Meal) {
        self.meals.push(meal);
    }

    /// Drop every planned entry with this id, returning how many were removed
    pub fn remove(&mut self, meal_id: &str) -> usize {
        let before = self.meals.len();
        self.meals.retain(|m| m.id != meal_id);
        before - self.meals.len()
    }

    pub fn len(&self) -> usize {
        self.meals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meals.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_and_remove_by_id() {
        let mut plan = MealPlan::new();
        assert_eq!(plan.len(), 1);

        let smoothie = plan.meals[0].clone();
        plan.add(smoothie);
        assert_eq!(plan.len(), 2);

        assert_eq!(plan.remove("1"), 2);
        assert!(plan.is_empty());
        assert_eq!(plan.remove("1"), 0);
    }
}
