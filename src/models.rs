use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Home,
    Outside,
}

/// One logged eating event. `restaurant_name` only carries meaning when
/// `meal_type` is `Outside`; absence is `None`, never an empty string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Meal {
    pub name: String,
    pub cuisine: String,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub flavors: Vec<String>,
    pub meal_type: MealType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restaurant_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealInput {
    pub name: String,
    pub cuisine: String,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub flavors: Vec<String>,
    pub meal_type: MealType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restaurant_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl MealInput {
    /// Stamps the input into a stored record. Ingredient and flavor tokens
    /// are trimmed and empties discarded on the way in.
    pub fn into_meal(self, timestamp: DateTime<Utc>) -> Meal {
        Meal {
            name: self.name,
            cuisine: self.cuisine,
            ingredients: clean_tokens(self.ingredients),
            flavors: clean_tokens(self.flavors),
            meal_type: self.meal_type,
            restaurant_name: self.restaurant_name,
            notes: self.notes,
            timestamp,
        }
    }
}

fn clean_tokens(tokens: Vec<String>) -> Vec<String> {
    tokens
        .into_iter()
        .map(|token| token.trim().to_string())
        .filter(|token| !token.is_empty())
        .collect()
}

/// Derived summary statistics over the meal collection. Recomputed on every
/// request, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TasteProfile {
    pub favorite_cuisines: Vec<String>,
    pub preferred_flavors: Vec<String>,
    pub common_ingredients: Vec<String>,
    pub home_vs_outside_ratio: f64,
    pub meal_count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FusionRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fusion_style: Option<String>,
    #[serde(default)]
    pub dietary_restrictions: Vec<String>,
    #[serde(default)]
    pub difficulty: Difficulty,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cooking_time: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FusionRecipe {
    pub name: String,
    pub description: String,
    pub fusion_of: Vec<String>,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub prep_time: u32,
    pub cook_time: u32,
    pub difficulty: Difficulty,
    pub flavor_profile: Vec<String>,
    pub why_youll_love_it: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MealListResponse {
    pub meals: Vec<Meal>,
    pub count: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MealMutationResponse {
    pub success: bool,
    pub message: String,
    pub meal_count: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub success: bool,
    pub recipe: FusionRecipe,
    pub taste_profile_used: TasteProfile,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct WeeklyMenuEntry {
    pub day: String,
    pub recipe: FusionRecipe,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct WeeklyMenuResponse {
    pub success: bool,
    pub weekly_menu: Vec<WeeklyMenuEntry>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
}
