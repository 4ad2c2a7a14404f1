use crate::models::{FusionRecipe, FusionRequest, Meal, MealType, TasteProfile};
use serde::Deserialize;
use serde_json::json;
use std::env;
use std::fmt;
use tracing::info;

const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";
const DEFAULT_MODEL: &str = "google/gemini-2.0-flash-exp:free";

const SYSTEM_PROMPT: &str = "You are TasteFusion Chef, an expert culinary AI that creates personalized fusion recipes.

Your role:
1. Analyze the user's taste profile from their meal history
2. Understand their preferences (home cooking vs restaurant, flavor profiles, favorite cuisines)
3. Create innovative fusion recipes that combine elements from their favorite cuisines
4. Ensure recipes are practical and match their skill level

Guidelines:
- Be creative but practical: recipes should be actually cookable
- Respect dietary restrictions strictly
- Explain WHY the user will love this recipe based on their preferences
- Provide clear, step-by-step instructions
- Include prep and cooking times
- Balance familiar flavors with exciting new combinations

Reply with a single JSON object and nothing else, using exactly these keys:
{\"name\": string, \"description\": string, \"fusion_of\": [string], \"ingredients\": [string], \"instructions\": [string], \"prep_time\": integer minutes, \"cook_time\": integer minutes, \"difficulty\": \"easy\"|\"medium\"|\"hard\", \"flavor_profile\": [string], \"why_youll_love_it\": string}";

#[derive(Debug)]
pub enum AgentError {
    MissingApiKey,
    Transport(reqwest::Error),
    Status(u16, String),
    Malformed(String),
}

impl fmt::Display for AgentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AgentError::MissingApiKey => {
                write!(f, "OPENROUTER_API_KEY is not set")
            }
            AgentError::Transport(err) => write!(f, "model request failed: {err}"),
            AgentError::Status(code, body) => {
                write!(f, "model returned status {code}: {body}")
            }
            AgentError::Malformed(detail) => {
                write!(f, "model returned an unusable recipe: {detail}")
            }
        }
    }
}

impl std::error::Error for AgentError {}

impl From<reqwest::Error> for AgentError {
    fn from(err: reqwest::Error) -> Self {
        AgentError::Transport(err)
    }
}

/// Client for the OpenRouter-compatible chat completions endpoint that turns
/// a taste profile into a fusion recipe. Configured entirely from env vars.
pub struct RecipeAgent {
    http: reqwest::Client,
    base_url: String,
    model: String,
    api_key: Option<String>,
}

impl RecipeAgent {
    pub fn from_env() -> Self {
        let base_url = env::var("OPENROUTER_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let model =
            env::var("TASTEFUSION_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        Self {
            http: reqwest::Client::new(),
            base_url,
            model,
            api_key: env::var("OPENROUTER_API_KEY").ok().filter(|k| !k.is_empty()),
        }
    }

    pub async fn generate(
        &self,
        request: &FusionRequest,
        meals: &[Meal],
        profile: &TasteProfile,
    ) -> Result<FusionRecipe, AgentError> {
        self.complete(build_prompt(request), meals, profile).await
    }

    /// One recipe for a named day of the week, used by the weekly menu.
    pub async fn generate_for_day(
        &self,
        day: &str,
        meals: &[Meal],
        profile: &TasteProfile,
    ) -> Result<FusionRecipe, AgentError> {
        self.complete(day_prompt(day), meals, profile).await
    }

    async fn complete(
        &self,
        prompt: String,
        meals: &[Meal],
        profile: &TasteProfile,
    ) -> Result<FusionRecipe, AgentError> {
        let api_key = self.api_key.as_ref().ok_or(AgentError::MissingApiKey)?;

        let body = json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": SYSTEM_PROMPT },
                { "role": "system", "content": user_context(meals, profile) },
                { "role": "user", "content": prompt },
            ],
        });

        let response = self
            .http
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AgentError::Status(status.as_u16(), body));
        }

        let completion: ChatCompletion = response.json().await?;
        let content = completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| AgentError::Malformed("no choices in response".to_string()))?;

        let recipe: FusionRecipe = serde_json::from_str(strip_json_fence(&content))
            .map_err(|err| AgentError::Malformed(err.to_string()))?;

        info!(recipe = %recipe.name, "generated fusion recipe");
        Ok(recipe)
    }
}

#[derive(Debug, Deserialize)]
struct ChatCompletion {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: String,
}

/// Assembles the user prompt from the request constraints.
fn build_prompt(request: &FusionRequest) -> String {
    let mut parts = vec!["Create a unique fusion recipe for me.".to_string()];

    if let Some(style) = &request.fusion_style {
        parts.push(format!("Fusion style: {style}"));
    }
    if !request.dietary_restrictions.is_empty() {
        parts.push(format!(
            "Dietary restrictions: {}",
            request.dietary_restrictions.join(", ")
        ));
    }
    parts.push(format!("Difficulty level: {}", request.difficulty.as_str()));
    if let Some(minutes) = request.cooking_time {
        parts.push(format!("Maximum cooking time: {minutes} minutes"));
    }

    parts.join(" ")
}

fn day_prompt(day: &str) -> String {
    format!(
        "Create a unique fusion recipe for {day}. Make it different from \
         typical weekday meals if it's a weekend."
    )
}

/// Renders the taste-profile context block injected as a second system
/// message, mirroring what the UI shows the user.
fn user_context(meals: &[Meal], profile: &TasteProfile) -> String {
    if meals.is_empty() {
        return "Note: This user is new and hasn't logged any meals yet. \
                Create a universally appealing fusion recipe that showcases \
                interesting flavor combinations."
            .to_string();
    }

    let home = recent_lines(meals, MealType::Home);
    let outside = recent_lines(meals, MealType::Outside);

    format!(
        "User's Taste Profile Analysis:\n\
         - Total meals logged: {}\n\
         - Favorite cuisines: {}\n\
         - Preferred flavors: {}\n\
         - Common ingredients: {}\n\
         - Home cooking ratio: {:.0}%\n\n\
         Recent Home Meals:\n{}\n\n\
         Recent Restaurant/Outside Meals:\n{}\n\n\
         Create a fusion recipe that combines elements from their favorite \
         cuisines and matches their flavor preferences.",
        profile.meal_count,
        join_or(&profile.favorite_cuisines, "Not enough data"),
        join_or(&profile.preferred_flavors, "Not enough data"),
        join_or(&profile.common_ingredients, "Not enough data"),
        profile.home_vs_outside_ratio * 100.0,
        home,
        outside,
    )
}

fn join_or(values: &[String], fallback: &str) -> String {
    if values.is_empty() {
        fallback.to_string()
    } else {
        values.join(", ")
    }
}

/// Last five meals of the given type, one line each.
fn recent_lines(meals: &[Meal], meal_type: MealType) -> String {
    let selected: Vec<&Meal> = meals
        .iter()
        .filter(|meal| meal.meal_type == meal_type)
        .collect();
    if selected.is_empty() {
        return "None logged".to_string();
    }

    selected
        .iter()
        .rev()
        .take(5)
        .rev()
        .map(|meal| match (&meal.meal_type, &meal.restaurant_name) {
            (MealType::Outside, name) => format!(
                "- {} ({}) at {}: {}",
                meal.name,
                meal.cuisine,
                name.as_deref().unwrap_or("unknown"),
                meal.flavors.join(", ")
            ),
            _ => format!(
                "- {} ({}): {}",
                meal.name,
                meal.cuisine,
                meal.flavors.join(", ")
            ),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Models sometimes wrap the JSON body in a markdown fence despite being
/// told not to.
fn strip_json_fence(content: &str) -> &str {
    let trimmed = content.trim();
    let without_open = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .unwrap_or(trimmed);
    without_open.strip_suffix("```").unwrap_or(without_open).trim()
}
