//! Sample meals and the pantry-driven stir fry suggestion

use crate::models::{CookingDifficulty, Meal, MealType};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Ingredients the stir fry suggestion draws on, when the pantry has them.
pub const STIR_FRY_INGREDIENTS: [&str; 4] = ["Chicken breast", "Broccoli", "Garlic", "Olive oil"];

pub const STIR_FRY_ID: &str = "ai-1";

pub fn sample_meals() -> Vec<Meal> {
    vec![
        Meal {
            id: "1".into(),
            name: "Protein Power Smoothie".into(),
            description: "Creamy blend of banana, protein powder, and almond butter".into(),
            calories: 320,
            protein: 25.0,
            carbs: 28.0,
            fat: 12.0,
            prep_time: 5,
            servings: 1,
            difficulty: CookingDifficulty::Easy,
            dietary_tags: strings(&["High Protein", "Gluten-Free", "Vegetarian"]),
            ingredients: strings(&[
                "1 banana",
                "1 scoop vanilla protein powder",
                "1 tbsp almond butter",
                "1 cup almond milk",
                "1 tsp honey",
                "Ice cubes",
            ]),
            instructions: strings(&[
                "Add all ingredients to blender",
                "Blend until smooth and creamy",
                "Pour into glass and enjoy immediately",
            ]),
            meal_type: MealType::Breakfast,
            ai_generated: true,
        },
        Meal {
            id: "2".into(),
            name: "Quinoa Power Bowl".into(),
            description: "Nutrient-dense bowl with quinoa, roasted vegetables, and tahini dressing"
                .into(),
            calories: 485,
            protein: 18.0,
            carbs: 62.0,
            fat: 18.0,
            prep_time: 25,
            servings: 2,
            difficulty: CookingDifficulty::Medium,
            dietary_tags: strings(&["Vegan", "High Fiber", "Gluten-Free"]),
            ingredients: strings(&[
                "1 cup quinoa",
                "1 bell pepper, diced",
                "1 zucchini, sliced",
                "1 cup cherry tomatoes",
                "2 tbsp olive oil",
                "3 tbsp tahini",
                "2 tbsp lemon juice",
                "Fresh herbs",
            ]),
            instructions: strings(&[
                "Cook quinoa according to package directions",
                "Roast vegetables at 400°F for 20 minutes",
                "Mix tahini with lemon juice for dressing",
                "Combine quinoa and vegetables",
                "Drizzle with dressing and garnish with herbs",
            ]),
            meal_type: MealType::Lunch,
            ai_generated: false,
        },
        Meal {
            id: "3".into(),
            name: "Grilled Salmon with Sweet Potato".into(),
            description: "Omega-3 rich salmon with roasted sweet potato and asparagus".into(),
            calories: 520,
            protein: 35.0,
            carbs: 35.0,
            fat: 22.0,
            prep_time: 30,
            servings: 1,
            difficulty: CookingDifficulty::Medium,
            dietary_tags: strings(&["High Protein", "Omega-3", "Gluten-Free"]),
            ingredients: strings(&[
                "6 oz salmon fillet",
                "1 medium sweet potato",
                "1 bunch asparagus",
                "2 tbsp olive oil",
                "Lemon slices",
                "Salt and pepper",
                "Fresh dill",
            ]),
            instructions: strings(&[
                "Preheat grill to medium-high heat",
                "Cut sweet potato into wedges and roast",
                "Season salmon with salt, pepper, and dill",
                "Grill salmon 4-5 minutes per side",
                "Grill asparagus for 3-4 minutes",
                "Serve with lemon slices",
            ]),
            meal_type: MealType::Dinner,
            ai_generated: false,
        },
        Meal {
            id: "4".into(),
            name: "Greek Yogurt Berry Bowl".into(),
            description: "Probiotic-rich yogurt with fresh berries and granola".into(),
            calories: 285,
            protein: 20.0,
            carbs: 35.0,
            fat: 8.0,
            prep_time: 3,
            servings: 1,
            difficulty: CookingDifficulty::Easy,
            dietary_tags: strings(&["High Protein", "Probiotic", "Vegetarian"]),
            ingredients: strings(&[
                "1 cup Greek yogurt",
                "1/2 cup mixed berries",
                "2 tbsp granola",
                "1 tbsp honey",
                "1 tbsp chia seeds",
            ]),
            instructions: strings(&[
                "Place yogurt in bowl",
                "Top with berries and granola",
                "Drizzle with honey",
                "Sprinkle chia seeds on top",
            ]),
            meal_type: MealType::Snack,
            ai_generated: false,
        },
    ]
}

/// Stir fry built from whatever subset of [`STIR_FRY_INGREDIENTS`] is on hand.
pub fn stir_fry(available: Vec<String>) -> Meal {
    Meal {
        id: STIR_FRY_ID.into(),
        name: "AI Chicken & Broccoli Stir Fry".into(),
        description: "Quick stir fry using your available chicken and broccoli".into(),
        calories: 380,
        protein: 32.0,
        carbs: 18.0,
        fat: 14.0,
        prep_time: 15,
        servings: 1,
        difficulty: CookingDifficulty::Easy,
        dietary_tags: strings(&["High Protein", "Low Carb"]),
        ingredients: available,
        instructions: strings(&[
            "Heat olive oil in pan",
            "Cook chicken until golden",
            "Add broccoli and garlic",
            "Stir fry for 5-7 minutes",
        ]),
        meal_type: MealType::Dinner,
        ai_generated: true,
    }
}
