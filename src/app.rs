use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{delete, get, post},
    Router,
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/health", get(handlers::health))
        .route("/meals", get(handlers::list_meals).post(handlers::add_meal))
        .route("/meals/:index", delete(handlers::delete_meal))
        .route("/profile", get(handlers::get_profile))
        .route("/generate-recipe", post(handlers::generate_recipe))
        .route(
            "/generate-weekly-menu",
            post(handlers::generate_weekly_menu),
        )
        .route("/load-sample-data", post(handlers::load_sample_data))
        .with_state(state)
}
