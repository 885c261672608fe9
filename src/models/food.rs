//! Food scanner, pantry and diary records

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NutritionGrade {
    A,
    B,
    C,
    D,
    F,
}

impl NutritionGrade {
    pub fn advice(self) -> &'static str {
        match self {
            Self::A => "Excellent choice! This food is nutritionally dense and fits well in a healthy diet.",
            Self::B => "Good choice! This food provides solid nutrition with minor considerations.",
            Self::C => "Moderate choice. Consider balancing with nutrient-dense foods.",
            Self::D => "Limit consumption. This food is high in calories or low in nutrients.",
            Self::F => "Avoid if possible. This food offers poor nutritional value.",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodAlternative {
    pub name: String,
    pub calories: u32,
    pub health_score: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScannedFood {
    pub id: String,
    pub name: String,
    pub confidence: f64,
    pub calories: u32,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub fiber: f64,
    pub serving_size: String,
    pub nutrition_grade: NutritionGrade,
    pub tags: Vec<String>,
    pub alternatives: Vec<FoodAlternative>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScanSource {
    Camera,
    Upload,
}

/// One recognition as returned to the client and kept in the scan history.
#[derive(Debug, Clone, Serialize)]
pub struct ScanResult {
    pub source: ScanSource,
    pub food: ScannedFood,
    pub advice: &'static str,
    pub scanned_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PantryItem {
    pub id: u64,
    pub name: String,
    pub category: String,
    pub quantity: String,
    pub expiry: Option<NaiveDate>,
    pub added_date: NaiveDate,
}

#[derive(Debug, Clone, Serialize)]
pub struct PantryRecipe {
    pub name: &'static str,
    pub ingredients: Vec<&'static str>,
    pub prep_time: u32,
    pub calories: u32,
    pub difficulty: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct FoodLogEntry {
    pub id: u64,
    pub food_name: String,
    pub calories: u32,
    pub logged_at: DateTime<Utc>,
}
