use crate::models::{Meal, MealType, TasteProfile};

const CUISINE_LIMIT: usize = 5;
const FLAVOR_LIMIT: usize = 5;
const INGREDIENT_LIMIT: usize = 10;

/// Builds the taste profile for the current meal collection.
///
/// Pure and total: any well-formed slice (empty included) produces a
/// profile, and the input is never mutated. Frequency lists are ordered by
/// descending count; ties keep the order in which the value was first seen
/// while scanning the collection, so repeated calls over the same collection
/// are byte-for-byte reproducible.
pub fn build_profile(meals: &[Meal]) -> TasteProfile {
    if meals.is_empty() {
        return TasteProfile {
            favorite_cuisines: Vec::new(),
            preferred_flavors: Vec::new(),
            common_ingredients: Vec::new(),
            home_vs_outside_ratio: 0.5,
            meal_count: 0,
        };
    }

    let mut cuisines = FrequencyTable::new();
    let mut flavors = FrequencyTable::new();
    let mut ingredients = FrequencyTable::new();
    let mut home_count = 0usize;

    for meal in meals {
        cuisines.bump(&meal.cuisine);
        for flavor in &meal.flavors {
            flavors.bump(flavor);
        }
        for ingredient in &meal.ingredients {
            ingredients.bump(ingredient);
        }
        if meal.meal_type == MealType::Home {
            home_count += 1;
        }
    }

    TasteProfile {
        favorite_cuisines: cuisines.top(CUISINE_LIMIT),
        preferred_flavors: flavors.top(FLAVOR_LIMIT),
        common_ingredients: ingredients.top(INGREDIENT_LIMIT),
        home_vs_outside_ratio: home_count as f64 / meals.len() as f64,
        meal_count: meals.len(),
    }
}

/// Counter keyed by first-seen order. The collections involved hold a
/// handful of distinct values, so a linear scan beats a map here and keeps
/// insertion order for free.
struct FrequencyTable {
    entries: Vec<(String, usize)>,
}

impl FrequencyTable {
    fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    fn bump(&mut self, value: &str) {
        match self.entries.iter_mut().find(|(key, _)| key == value) {
            Some((_, count)) => *count += 1,
            None => self.entries.push((value.to_string(), 1)),
        }
    }

    /// Top `limit` values by count. The sort must stay stable: equal counts
    /// keep first-seen order.
    fn top(mut self, limit: usize) -> Vec<String> {
        self.entries
            .sort_by(|(_, left), (_, right)| right.cmp(left));
        self.entries
            .into_iter()
            .take(limit)
            .map(|(value, _)| value)
            .collect()
    }
}
