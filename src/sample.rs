use crate::models::{MealInput, MealType};

fn entry(
    name: &str,
    cuisine: &str,
    ingredients: &[&str],
    flavors: &[&str],
    meal_type: MealType,
    restaurant_name: Option<&str>,
    notes: Option<&str>,
) -> MealInput {
    MealInput {
        name: name.to_string(),
        cuisine: cuisine.to_string(),
        ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
        flavors: flavors.iter().map(|s| s.to_string()).collect(),
        meal_type,
        restaurant_name: restaurant_name.map(str::to_string),
        notes: notes.map(str::to_string),
    }
}

/// Demonstration set seeded by `POST /load-sample-data`.
pub fn demo_meals() -> Vec<MealInput> {
    vec![
        entry(
            "Butter Chicken",
            "Indian",
            &["chicken", "butter", "tomatoes", "cream", "garam masala"],
            &["creamy", "spicy", "rich"],
            MealType::Home,
            None,
            Some("Mom's recipe"),
        ),
        entry(
            "Margherita Pizza",
            "Italian",
            &["dough", "tomatoes", "mozzarella", "basil"],
            &["savory", "cheesy", "herby"],
            MealType::Outside,
            Some("Domino's"),
            None,
        ),
        entry(
            "Pad Thai",
            "Thai",
            &["rice noodles", "shrimp", "peanuts", "tamarind", "bean sprouts"],
            &["sweet", "sour", "savory", "nutty"],
            MealType::Outside,
            Some("Thai Express"),
            None,
        ),
        entry(
            "Dal Makhani",
            "Indian",
            &["black lentils", "butter", "cream", "tomatoes", "spices"],
            &["creamy", "smoky", "rich"],
            MealType::Home,
            None,
            None,
        ),
        entry(
            "Sushi Roll",
            "Japanese",
            &["rice", "nori", "salmon", "avocado", "cucumber"],
            &["fresh", "umami", "light"],
            MealType::Outside,
            Some("Sushi House"),
            None,
        ),
        entry(
            "Tacos Al Pastor",
            "Mexican",
            &["pork", "pineapple", "onions", "cilantro", "tortillas"],
            &["spicy", "sweet", "tangy"],
            MealType::Outside,
            Some("Taco Bell"),
            None,
        ),
        entry(
            "Palak Paneer",
            "Indian",
            &["spinach", "paneer", "onions", "garlic", "cream"],
            &["creamy", "mild", "healthy"],
            MealType::Home,
            None,
            None,
        ),
        entry(
            "Kung Pao Chicken",
            "Chinese",
            &["chicken", "peanuts", "dried chilies", "soy sauce", "vegetables"],
            &["spicy", "sweet", "crunchy"],
            MealType::Outside,
            Some("Wok Express"),
            None,
        ),
    ]
}

/// Smaller offline set: one meal per cuisine, used by the client when the
/// remote seed call fails.
pub fn local_fallback_meals() -> Vec<MealInput> {
    demo_meals()
        .into_iter()
        .filter(|meal| !matches!(meal.name.as_str(), "Dal Makhani" | "Palak Paneer"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn local_fallback_is_six_meals_across_six_cuisines() {
        let meals = local_fallback_meals();
        assert_eq!(meals.len(), 6);
        let cuisines: BTreeSet<&str> =
            meals.iter().map(|m| m.cuisine.as_str()).collect();
        assert_eq!(cuisines.len(), 6);
    }

    #[test]
    fn outside_demo_meals_carry_restaurant_names() {
        for meal in demo_meals() {
            match meal.meal_type {
                crate::models::MealType::Outside => {
                    assert!(meal.restaurant_name.is_some(), "{}", meal.name);
                }
                crate::models::MealType::Home => {
                    assert!(meal.restaurant_name.is_none(), "{}", meal.name);
                }
            }
        }
    }
}
