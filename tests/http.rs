use once_cell::sync::Lazy;
use reqwest::Client;
use std::net::TcpListener;
use std::process::{Child, Command, Stdio};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tastefusion::models::{MealListResponse, MealMutationResponse, TasteProfile};
use tastefusion::{MealLog, Served};
use tokio::sync::Mutex;
use tokio::time::sleep;

struct TestServer {
    base_url: String,
    child: Child,
}

impl Drop for TestServer {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

static TEST_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));
static SERVER: Lazy<Mutex<Option<Arc<TestServer>>>> = Lazy::new(|| Mutex::new(None));

#[cfg(unix)]
mod cleanup {
    use std::sync::atomic::{AtomicI32, Ordering};
    use std::sync::Once;

    static REGISTER: Once = Once::new();
    static PID: AtomicI32 = AtomicI32::new(0);

    pub fn register(pid: u32) {
        REGISTER.call_once(|| {
            PID.store(pid as i32, Ordering::SeqCst);
            unsafe {
                libc::atexit(on_exit);
            }
        });
    }

    extern "C" fn on_exit() {
        let pid = PID.load(Ordering::SeqCst);
        if pid > 0 {
            unsafe {
                libc::kill(pid, libc::SIGTERM);
            }
        }
    }
}

fn pick_free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind random port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    port
}

async fn wait_until_ready(base_url: &str) {
    let client = Client::new();
    let deadline = Instant::now() + Duration::from_secs(3);
    loop {
        if let Ok(resp) = client.get(format!("{base_url}/health")).send().await {
            if resp.status().is_success() {
                return;
            }
        }
        if Instant::now() > deadline {
            panic!("server did not become ready");
        }
        sleep(Duration::from_millis(100)).await;
    }
}

async fn spawn_server() -> TestServer {
    let port = pick_free_port();
    let child = Command::new(env!("CARGO_BIN_EXE_tastefusion"))
        .env("PORT", port.to_string())
        .env("RUST_LOG", "info")
        // Recipe generation must fail deterministically in tests.
        .env_remove("OPENROUTER_API_KEY")
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .expect("failed to spawn server");

    #[cfg(unix)]
    cleanup::register(child.id());

    let base_url = format!("http://127.0.0.1:{port}");
    wait_until_ready(&base_url).await;

    TestServer { base_url, child }
}

async fn shared_server() -> Arc<TestServer> {
    let mut guard = SERVER.lock().await;
    if let Some(server) = guard.as_ref() {
        return Arc::clone(server);
    }
    let server = Arc::new(spawn_server().await);
    *guard = Some(Arc::clone(&server));
    server
}

fn meal_body(name: &str, cuisine: &str, meal_type: &str) -> serde_json::Value {
    serde_json::json!({
        "name": name,
        "cuisine": cuisine,
        "meal_type": meal_type,
        "ingredients": ["rice", "salt"],
        "flavors": ["savory"],
    })
}

async fn list(client: &Client, base_url: &str) -> MealListResponse {
    client
        .get(format!("{base_url}/meals"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap()
}

#[tokio::test]
async fn http_add_meal_appends_to_the_collection() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let before = list(&client, &server.base_url).await;

    let response = client
        .post(format!("{}/meals", server.base_url))
        .json(&meal_body("Test Biryani", "Indian", "home"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 201);
    let body: MealMutationResponse = response.json().await.unwrap();
    assert!(body.success);
    assert_eq!(body.meal_count, before.count + 1);

    let after = list(&client, &server.base_url).await;
    assert_eq!(after.count, before.count + 1);
    assert_eq!(after.meals.last().unwrap().name, "Test Biryani");
}

#[tokio::test]
async fn http_add_meal_rejects_empty_name() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let response = client
        .post(format!("{}/meals", server.base_url))
        .json(&meal_body("   ", "Indian", "home"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 400);
}

#[tokio::test]
async fn http_delete_preserves_relative_order() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    for name in ["Order First", "Order Second", "Order Third"] {
        client
            .post(format!("{}/meals", server.base_url))
            .json(&meal_body(name, "Thai", "outside"))
            .send()
            .await
            .unwrap();
    }

    let listing = list(&client, &server.base_url).await;
    let middle = listing
        .meals
        .iter()
        .position(|meal| meal.name == "Order Second")
        .expect("middle meal present");

    let response = client
        .delete(format!("{}/meals/{middle}", server.base_url))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());

    let after = list(&client, &server.base_url).await;
    let first = after
        .meals
        .iter()
        .position(|meal| meal.name == "Order First")
        .unwrap();
    let third = after
        .meals
        .iter()
        .position(|meal| meal.name == "Order Third")
        .unwrap();
    assert!(after.meals.iter().all(|meal| meal.name != "Order Second"));
    assert!(first < third);
}

#[tokio::test]
async fn http_delete_out_of_range_is_not_found() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let listing = list(&client, &server.base_url).await;
    let response = client
        .delete(format!("{}/meals/{}", server.base_url, listing.count + 100))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 404);
}

#[tokio::test]
async fn http_profile_tracks_the_collection() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    client
        .post(format!("{}/meals", server.base_url))
        .json(&meal_body("Profile Curry", "Profile-Cuisine", "home"))
        .send()
        .await
        .unwrap();

    let listing = list(&client, &server.base_url).await;
    let profile: TasteProfile = client
        .get(format!("{}/profile", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(profile.meal_count, listing.count);
    assert!((0.0..=1.0).contains(&profile.home_vs_outside_ratio));
    assert!(profile.favorite_cuisines.len() <= 5);
    assert!(profile.preferred_flavors.len() <= 5);
    assert!(profile.common_ingredients.len() <= 10);
    assert!(profile
        .favorite_cuisines
        .iter()
        .any(|cuisine| cuisine == "Profile-Cuisine"));
}

#[tokio::test]
async fn http_sample_data_seeds_eight_meals() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let before = list(&client, &server.base_url).await;
    let body: MealMutationResponse = client
        .post(format!("{}/load-sample-data", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(body.success);
    assert_eq!(body.meal_count, before.count + 8);
}

#[tokio::test]
async fn http_generate_recipe_without_key_reports_the_error() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let response = client
        .post(format!("{}/generate-recipe", server.base_url))
        .json(&serde_json::json!({ "difficulty": "easy" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 502);
    let message = response.text().await.unwrap();
    assert!(message.contains("Failed to generate recipe"));
}

#[tokio::test]
async fn http_generate_weekly_menu_without_key_reports_the_error() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let response = client
        .post(format!("{}/generate-weekly-menu", server.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 502);
    let message = response.text().await.unwrap();
    assert!(message.contains("Failed to generate weekly menu"));
}

#[tokio::test]
async fn http_add_meal_cleans_ingredient_and_flavor_tokens() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let response = client
        .post(format!("{}/meals", server.base_url))
        .json(&serde_json::json!({
            "name": "Messy Tokens Bowl",
            "cuisine": "Korean",
            "meal_type": "home",
            "ingredients": [" rice ", "", "  ", "gochujang "],
            "flavors": ["  spicy", ""],
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 201);

    let listing = list(&client, &server.base_url).await;
    let meal = listing
        .meals
        .iter()
        .find(|meal| meal.name == "Messy Tokens Bowl")
        .expect("meal present");
    assert_eq!(meal.ingredients, vec!["rice", "gochujang"]);
    assert_eq!(meal.flavors, vec!["spicy"]);
}

#[tokio::test]
async fn client_mirror_follows_a_live_server() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;

    let mut log = MealLog::new(server.base_url.clone());
    let served = log.list_meals().await;
    assert!(matches!(served, Served::Remote(_)));

    let before = log.meals().len();
    let served = log
        .add_meal(tastefusion::models::MealInput {
            name: "Client Khachapuri".to_string(),
            cuisine: "Georgian".to_string(),
            ingredients: vec!["dough".to_string(), "cheese".to_string()],
            flavors: vec!["cheesy".to_string()],
            meal_type: tastefusion::models::MealType::Home,
            restaurant_name: None,
            notes: None,
        })
        .await;
    assert!(!served.is_local());
    assert_eq!(log.meals().len(), before + 1);

    // The server saw the same append.
    let served = log.list_meals().await;
    let meals = served.into_inner();
    assert!(meals.iter().any(|meal| meal.name == "Client Khachapuri"));
}
