//! Recognition results, starting pantry and pantry recipe ideas

use chrono::NaiveDate;

use crate::models::{FoodAlternative, NutritionGrade, PantryItem, PantryRecipe, ScannedFood};

fn alt(name: &str, calories: u32, health_score: u8) -> FoodAlternative {
    FoodAlternative {
        name: name.to_string(),
        calories,
        health_score,
    }
}

fn tags(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// The only foods the scanner ever "recognizes".
pub fn recognizable_foods() -> Vec<ScannedFood> {
    vec![
        ScannedFood {
            id: "1".into(),
            name: "Grilled Chicken Breast".into(),
            confidence: 0.94,
            calories: 165,
            protein: 31.0,
            carbs: 0.0,
            fat: 3.6,
            fiber: 0.0,
            serving_size: "100g".into(),
            nutrition_grade: NutritionGrade::A,
            tags: tags(&["High Protein", "Low Carb", "Lean"]),
            alternatives: vec![alt("Grilled Turkey Breast", 135, 95), alt("Baked Cod", 105, 90)],
        },
        ScannedFood {
            id: "2".into(),
            name: "Cheese Pizza Slice".into(),
            confidence: 0.89,
            calories: 285,
            protein: 12.0,
            carbs: 36.0,
            fat: 10.0,
            fiber: 2.0,
            serving_size: "1 slice (107g)".into(),
            nutrition_grade: NutritionGrade::C,
            tags: tags(&["High Carb", "Processed"]),
            alternatives: vec![
                alt("Cauliflower Crust Pizza", 180, 75),
                alt("Greek Salad", 150, 85),
            ],
        },
        ScannedFood {
            id: "3".into(),
            name: "Fresh Apple".into(),
            confidence: 0.96,
            calories: 95,
            protein: 0.5,
            carbs: 25.0,
            fat: 0.3,
            fiber: 4.0,
            serving_size: "1 medium (182g)".into(),
            nutrition_grade: NutritionGrade::A,
            tags: tags(&["Natural", "High Fiber", "Antioxidants"]),
            alternatives: vec![alt("Fresh Pear", 85, 90), alt("Orange", 80, 88)],
        },
    ]
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn staple(id: u64, name: &str, category: &str, quantity: &str, added: NaiveDate) -> PantryItem {
    PantryItem {
        id,
        name: name.to_string(),
        category: category.to_string(),
        quantity: quantity.to_string(),
        expiry: None,
        added_date: added,
    }
}

pub fn starting_pantry() -> Vec<PantryItem> {
    let stocked = date(2025, 7, 1);
    vec![
        PantryItem {
            expiry: Some(date(2025, 7, 10)),
            ..staple(1, "Chicken Breast", "Protein", "2 lbs", date(2025, 7, 5))
        },
        PantryItem {
            expiry: Some(date(2025, 7, 8)),
            ..staple(2, "Broccoli", "Vegetables", "1 bunch", date(2025, 7, 6))
        },
        staple(3, "Rice", "Grains", "5 lbs bag", stocked),
        staple(4, "Eggs", "Protein", "1 dozen", stocked),
        staple(5, "Spinach", "Vegetables", "1 bag", stocked),
        staple(6, "Avocado", "Produce", "2", stocked),
        staple(7, "Tomatoes", "Produce", "4", stocked),
        staple(8, "Onions", "Produce", "3", stocked),
        staple(9, "Garlic", "Produce", "1 bulb", stocked),
        staple(10, "Olive oil", "Pantry", "1 bottle", stocked),
    ]
}

pub fn pantry_recipes() -> Vec<PantryRecipe> {
    vec![
        PantryRecipe {
            name: "Chicken & Broccoli Stir Fry",
            ingredients: vec!["Chicken Breast", "Broccoli", "Rice"],
            prep_time: 20,
            calories: 420,
            difficulty: "Easy",
        },
        PantryRecipe {
            name: "Chicken Fried Rice",
            ingredients: vec!["Chicken Breast", "Rice"],
            prep_time: 15,
            calories: 380,
            difficulty: "Easy",
        },
    ]
}
