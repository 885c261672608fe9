//! Mock food recognition

use rand::seq::SliceRandom;

use crate::{catalog::foods::recognizable_foods, models::ScannedFood};

/// Turns an image into a recognized food.
pub trait FoodRecognizer: Send + Sync {
    fn recognize(&self, image: &[u8]) -> anyhow::Result<ScannedFood>;
}

/// Ignores the image and picks one of the known foods uniformly at random
#[derive(Debug, Clone)]
pub struct RandomRecognizer {
    foods: Vec<ScannedFood>,
}

impl RandomRecognizer {
    pub fn new() -> Self {
        Self::with_foods(recognizable_foods())
    }

    pub fn with_foods(foods: Vec<ScannedFood>) -> Self {
        Self { foods }
    }
}

impl Default for RandomRecognizer {
    fn default() -> Self {
        Self::new()
    }
}

impl FoodRecognizer for RandomRecognizer {
    fn recognize(&self, image: &[u8]) -> anyhow::Result<ScannedFood> {
        tracing::debug!(bytes = image.len(), "discarding image after simulated recognition");
        self.foods
            .choose(&mut rand::thread_rng())
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("no recognizable foods configured"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn always_returns_a_known_food() {
        let recognizer = RandomRecognizer::new();
        let known: Vec<String> = recognizable_foods().into_iter().map(|f| f.name).collect();
        for _ in 0..50 {
            let food = recognizer.recognize(b"jpeg").unwrap();
            assert!(known.contains(&food.name));
        }
    }

    #[test]
    fn empty_catalog_is_an_error() {
        let recognizer = RandomRecognizer::with_foods(Vec::new());
        assert!(recognizer.recognize(b"jpeg").is_err());
    }
}
