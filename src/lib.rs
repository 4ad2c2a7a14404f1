pub mod agent;
pub mod app;
pub mod client;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod profile;
pub mod sample;
pub mod state;
pub mod ui;

pub use app::router;
pub use client::{MealLog, Served};
pub use profile::build_profile;
pub use state::AppState;
