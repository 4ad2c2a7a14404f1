use crate::errors::AppError;
use crate::models::{
    FusionRequest, GenerateResponse, HealthResponse, MealInput, MealListResponse,
    MealMutationResponse, TasteProfile, WeeklyMenuEntry, WeeklyMenuResponse,
};
use crate::profile::build_profile;
use crate::sample::demo_meals;
use crate::state::AppState;
use crate::ui::render_index;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Html,
    Json,
};
use chrono::Utc;
use tracing::{error, info};

pub async fn index() -> Html<&'static str> {
    Html(render_index())
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: "TasteFusion API".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

pub async fn add_meal(
    State(state): State<AppState>,
    Json(input): Json<MealInput>,
) -> Result<(StatusCode, Json<MealMutationResponse>), AppError> {
    if input.name.trim().is_empty() {
        return Err(AppError::bad_request("meal name must not be empty"));
    }
    if input.cuisine.trim().is_empty() {
        return Err(AppError::bad_request("cuisine must not be empty"));
    }

    let meal = input.into_meal(Utc::now());
    let mut meals = state.meals.lock().await;
    info!(name = %meal.name, cuisine = %meal.cuisine, "adding meal");
    let message = format!("Added '{}' to your meal history", meal.name);
    meals.push(meal);

    Ok((
        StatusCode::CREATED,
        Json(MealMutationResponse {
            success: true,
            message,
            meal_count: meals.len(),
        }),
    ))
}

pub async fn list_meals(State(state): State<AppState>) -> Json<MealListResponse> {
    let meals = state.meals.lock().await;
    Json(MealListResponse {
        meals: meals.clone(),
        count: meals.len(),
    })
}

pub async fn delete_meal(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> Result<Json<MealMutationResponse>, AppError> {
    let mut meals = state.meals.lock().await;
    if index >= meals.len() {
        return Err(AppError::not_found("Meal not found"));
    }

    let removed = meals.remove(index);
    info!(name = %removed.name, index, "removed meal");

    Ok(Json(MealMutationResponse {
        success: true,
        message: format!("Removed '{}' from history", removed.name),
        meal_count: meals.len(),
    }))
}

pub async fn get_profile(State(state): State<AppState>) -> Json<TasteProfile> {
    let meals = state.meals.lock().await;
    Json(build_profile(&meals))
}

pub async fn generate_recipe(
    State(state): State<AppState>,
    Json(request): Json<FusionRequest>,
) -> Result<Json<GenerateResponse>, AppError> {
    // Snapshot the collection so the agent call runs without holding the
    // lock across the network round trip.
    let meals = state.meals.lock().await.clone();
    let profile = build_profile(&meals);

    match state.agent.generate(&request, &meals, &profile).await {
        Ok(recipe) => Ok(Json(GenerateResponse {
            success: true,
            recipe,
            taste_profile_used: profile,
        })),
        Err(err) => {
            error!("recipe generation failed: {err}");
            Err(AppError::bad_gateway(format!(
                "Failed to generate recipe: {err}"
            )))
        }
    }
}

const WEEKDAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

pub async fn generate_weekly_menu(
    State(state): State<AppState>,
) -> Result<Json<WeeklyMenuResponse>, AppError> {
    let meals = state.meals.lock().await.clone();
    let profile = build_profile(&meals);

    let mut weekly_menu = Vec::with_capacity(WEEKDAYS.len());
    for day in WEEKDAYS {
        match state.agent.generate_for_day(day, &meals, &profile).await {
            Ok(recipe) => {
                info!(day, recipe = %recipe.name, "generated weekly menu entry");
                weekly_menu.push(WeeklyMenuEntry {
                    day: day.to_string(),
                    recipe,
                });
            }
            Err(err) => {
                error!("weekly menu generation failed on {day}: {err}");
                return Err(AppError::bad_gateway(format!(
                    "Failed to generate weekly menu: {err}"
                )));
            }
        }
    }

    Ok(Json(WeeklyMenuResponse {
        success: true,
        weekly_menu,
    }))
}

pub async fn load_sample_data(
    State(state): State<AppState>,
) -> Json<MealMutationResponse> {
    let samples = demo_meals();
    let loaded = samples.len();
    let mut meals = state.meals.lock().await;
    let now = Utc::now();
    meals.extend(samples.into_iter().map(|input| input.into_meal(now)));
    info!(loaded, total = meals.len(), "loaded sample meals");

    Json(MealMutationResponse {
        success: true,
        message: format!("Loaded {loaded} sample meals"),
        meal_count: meals.len(),
    })
}
