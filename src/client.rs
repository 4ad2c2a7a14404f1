use crate::models::{
    FusionRecipe, FusionRequest, GenerateResponse, Meal, MealInput, MealListResponse,
    TasteProfile,
};
use crate::profile::build_profile;
use crate::sample::local_fallback_meals;
use chrono::Utc;
use std::fmt;
use tracing::warn;

/// Where an operation's result came from: the remote collaborator, or the
/// local mirror after the remote call failed. Callers and tests can tell
/// "online" from "offline mode" apart instead of exception-style control
/// flow hiding the difference.
#[derive(Debug, Clone, PartialEq)]
pub enum Served<T> {
    Remote(T),
    Local(T),
}

impl<T> Served<T> {
    pub fn into_inner(self) -> T {
        match self {
            Served::Remote(value) | Served::Local(value) => value,
        }
    }

    pub fn is_local(&self) -> bool {
        matches!(self, Served::Local(_))
    }
}

#[derive(Debug)]
pub enum ClientError {
    Transport(reqwest::Error),
    Status(u16, String),
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::Transport(err) => write!(f, "request failed: {err}"),
            ClientError::Status(code, body) => {
                write!(f, "server returned status {code}: {body}")
            }
        }
    }
}

impl std::error::Error for ClientError {}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        ClientError::Transport(err)
    }
}

/// Meal-log client that degrades to an in-memory mirror when the backend is
/// unreachable. Every call makes exactly one attempt; a failure flips that
/// one operation to the mirror, and the next call tries the backend again.
pub struct MealLog {
    http: reqwest::Client,
    base_url: String,
    mirror: Vec<Meal>,
}

impl MealLog {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            mirror: Vec::new(),
        }
    }

    /// Current local mirror, in rendered order.
    pub fn meals(&self) -> &[Meal] {
        &self.mirror
    }

    /// Fetches the full collection; on failure the last known mirror is
    /// retained and returned.
    pub async fn list_meals(&mut self) -> Served<Vec<Meal>> {
        match self.fetch_list().await {
            Ok(meals) => {
                self.mirror = meals.clone();
                Served::Remote(meals)
            }
            Err(err) => {
                warn!("list_meals fell back to local mirror: {err}");
                Served::Local(self.mirror.clone())
            }
        }
    }

    /// Appends a meal. On failure the record lands in the mirror instead,
    /// so the user's input survives the outage. Returns the resulting count.
    pub async fn add_meal(&mut self, input: MealInput) -> Served<usize> {
        let result = self
            .request(self.http.post(self.url("/meals")).json(&input))
            .await;
        match result {
            Ok(_) => {
                self.mirror.push(input.into_meal(Utc::now()));
                Served::Remote(self.mirror.len())
            }
            Err(err) => {
                warn!("add_meal fell back to local mirror: {err}");
                self.mirror.push(input.into_meal(Utc::now()));
                Served::Local(self.mirror.len())
            }
        }
    }

    /// Removes the meal at `index` (zero-based, rendered order). On failure
    /// the mirror is edited at the same position; out-of-range on the local
    /// path is a no-op. Returns the resulting count.
    pub async fn delete_meal(&mut self, index: usize) -> Served<usize> {
        let result = self
            .request(self.http.delete(self.url(&format!("/meals/{index}"))))
            .await;
        match result {
            Ok(_) => {
                if index < self.mirror.len() {
                    self.mirror.remove(index);
                }
                Served::Remote(self.mirror.len())
            }
            Err(err) => {
                warn!("delete_meal fell back to local mirror: {err}");
                if index < self.mirror.len() {
                    self.mirror.remove(index);
                }
                Served::Local(self.mirror.len())
            }
        }
    }

    /// Seeds the demonstration data. On failure an equivalent fixed local
    /// set (six meals, six cuisines) is appended to the mirror.
    pub async fn load_sample_data(&mut self) -> Served<usize> {
        let result = self
            .request(self.http.post(self.url("/load-sample-data")))
            .await;
        match result {
            Ok(_) => {
                // Pull the authoritative list so the mirror matches what the
                // server seeded.
                self.list_meals().await;
                Served::Remote(self.mirror.len())
            }
            Err(err) => {
                warn!("load_sample_data fell back to local mirror: {err}");
                let now = Utc::now();
                self.mirror.extend(
                    local_fallback_meals()
                        .into_iter()
                        .map(|input| input.into_meal(now)),
                );
                Served::Local(self.mirror.len())
            }
        }
    }

    /// Fetches the remote taste profile; on failure the profile is computed
    /// locally over the mirror with the same aggregation.
    pub async fn profile(&mut self) -> Served<TasteProfile> {
        let result: Result<TasteProfile, ClientError> = async {
            let response = self.request(self.http.get(self.url("/profile"))).await?;
            Ok(response.json().await?)
        }
        .await;

        match result {
            Ok(profile) => Served::Remote(profile),
            Err(err) => {
                warn!("profile fell back to local aggregation: {err}");
                Served::Local(build_profile(&self.mirror))
            }
        }
    }

    /// Recipe generation has no offline equivalent; failures surface to the
    /// caller as errors.
    pub async fn generate_recipe(
        &self,
        request: &FusionRequest,
    ) -> Result<FusionRecipe, ClientError> {
        let response = self
            .request(self.http.post(self.url("/generate-recipe")).json(request))
            .await?;
        let body: GenerateResponse = response.json().await?;
        Ok(body.recipe)
    }

    async fn fetch_list(&self) -> Result<Vec<Meal>, ClientError> {
        let response = self.request(self.http.get(self.url("/meals"))).await?;
        let body: MealListResponse = response.json().await?;
        Ok(body.meals)
    }

    async fn request(
        &self,
        builder: reqwest::RequestBuilder,
    ) -> Result<reqwest::Response, ClientError> {
        let response = builder.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Status(status.as_u16(), body));
        }
        Ok(response)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}
