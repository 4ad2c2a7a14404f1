use crate::agent::RecipeAgent;
use crate::models::Meal;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub meals: Arc<Mutex<Vec<Meal>>>,
    pub agent: Arc<RecipeAgent>,
}

impl AppState {
    pub fn new(agent: RecipeAgent) -> Self {
        Self {
            meals: Arc::new(Mutex::new(Vec::new())),
            agent: Arc::new(agent),
        }
    }
}
