//! Nutrition totals and pantry-based suggestions

use crate::{
    catalog::{
        foods::pantry_recipes,
        meals::{stir_fry, STIR_FRY_INGREDIENTS},
    },
    models::{Meal, NutritionGoals, NutritionProgress, NutritionTotals, PantryRecipe},
};

pub fn totals(meals: &[Meal]) -> NutritionTotals {
    meals.iter().fold(NutritionTotals::default(), |acc, m| NutritionTotals {
        calories: acc.calories + m.calories,
        protein: acc.protein + m.protein,
        carbs: acc.carbs + m.carbs,
        fat: acc.fat + m.fat,
    })
}

fn percent(value: f64, goal: f64) -> f64 {
    if goal <= 0.0 {
        0.0
    } else {
        value / goal * 100.0
    }
}

pub fn progress(totals: &NutritionTotals, goals: &NutritionGoals) -> NutritionProgress {
    NutritionProgress {
        calories: percent(f64::from(totals.calories), f64::from(goals.calories)),
        protein: percent(totals.protein, goals.protein),
        carbs: percent(totals.carbs, goals.carbs),
        fat: percent(totals.fat, goals.fat),
    }
}

/// Stir fry suggestion listing only the ingredients `in_pantry` accepts
pub fn stir_fry_suggestion(in_pantry: impl Fn(&str) -> bool) -> Meal {
    let available = STIR_FRY_INGREDIENTS
        .iter()
        .filter(|name| in_pantry(name))
        .map(|name| name.to_string())
        .collect();
    stir_fry(available)
}

/// Recipe ideas whose every ingredient is on hand
pub fn cookable_recipes(in_pantry: impl Fn(&str) -> bool) -> Vec<PantryRecipe> {
    pantry_recipes()
        .into_iter()
        .filter(|r| r.ingredients.iter().all(|i| in_pantry(i)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::meals::sample_meals;

    #[test]
    fn totals_sum_every_planned_meal() {
        let meals = sample_meals();
        let sum = totals(&meals[..2]);
        assert_eq!(sum.calories, 320 + 485);
        assert_eq!(sum.protein, 43.0);
        assert_eq!(sum.carbs, 90.0);
        assert_eq!(sum.fat, 30.0);
        assert_eq!(totals(&[]), NutritionTotals::default());
    }

    #[test]
    fn progress_is_percent_of_goal() {
        let goals = NutritionGoals::default();
        let sum = NutritionTotals {
            calories: 1100,
            protein: 165.0,
            carbs: 0.0,
            fat: 146.0,
        };
        let p = progress(&sum, &goals);
        assert_eq!(p.calories, 50.0);
        assert_eq!(p.protein, 100.0);
        assert_eq!(p.carbs, 0.0);
        assert_eq!(p.fat, 200.0);
    }

    #[test]
    fn stir_fry_uses_only_available_ingredients() {
        let meal = stir_fry_suggestion(|name| name != "Garlic");
        assert_eq!(meal.ingredients, vec!["Chicken breast", "Broccoli", "Olive oil"]);
        assert!(meal.ai_generated);
    }

    #[test]
    fn recipes_need_all_ingredients() {
        let names: Vec<&str> = cookable_recipes(|name| name != "Broccoli")
            .iter()
            .map(|r| r.name)
            .collect();
        assert_eq!(names, vec!["Chicken Fried Rice"]);
    }
}
