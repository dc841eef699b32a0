//! HTTP integration tests: the real router bound to a random port, driven with reqwest.

use portfolio_api::build_app;
use portfolio_api::config::Config;
use portfolio_api::state::AppState;
use serde_json::{json, Value};
use tokio::net::TcpListener;

async fn spawn_server(config: Config) -> String {
    let app = build_app(AppState::new(config));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{addr}")
}

fn project_body(title: &str) -> Value {
    json!({
        "title": title,
        "description": "A thing I built",
        "image": "https://example.com/x.png",
        "tech": ["Rust", "axum"]
    })
}

#[tokio::test]
async fn health_reports_ok() {
    let base = spawn_server(Config::default()).await;
    let body: Value = reqwest::get(format!("{base}/health"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn project_lifecycle_roundtrip() {
    let base = spawn_server(Config::default()).await;
    let client = reqwest::Client::new();
    let url = format!("{base}/api/projects");

    // 1. Seed holds two projects
    let projects: Vec<Value> = client.get(&url).send().await.unwrap().json().await.unwrap();
    assert_eq!(projects.len(), 2);

    // 2. Create gets a fresh id
    let resp = client.post(&url).json(&project_body("X")).send().await.unwrap();
    assert_eq!(resp.status(), 201);
    let created: Value = resp.json().await.unwrap();
    assert_eq!(created["id"], 3);
    assert_eq!(created["title"], "X");

    // 3. Update replaces fields, keeps id
    let resp = client
        .put(format!("{url}/3"))
        .json(&project_body("Y"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let updated: Value = resp.json().await.unwrap();
    assert_eq!(updated["id"], 3);
    assert_eq!(updated["title"], "Y");

    // 4. Delete acknowledges, second delete is 404
    let resp = client.delete(format!("{url}/3")).send().await.unwrap();
    assert_eq!(resp.status(), 204);
    let resp = client.delete(format!("{url}/3")).send().await.unwrap();
    assert_eq!(resp.status(), 404);

    // 5. A new create does not reuse id 3
    let created: Value = client
        .post(&url)
        .json(&project_body("Z"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(created["id"], 4);
}

#[tokio::test]
async fn update_unknown_project_is_404_with_error_envelope() {
    let base = spawn_server(Config::default()).await;
    let client = reqwest::Client::new();

    let resp = client
        .put(format!("{base}/api/projects/77"))
        .json(&project_body("Y"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"]["code"], "NOT_FOUND");

    let projects: Vec<Value> = client
        .get(format!("{base}/api/projects"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(projects.iter().all(|p| p["id"] != 77));
}

#[tokio::test]
async fn invalid_project_payloads_are_400() {
    let base = spawn_server(Config::default()).await;
    let client = reqwest::Client::new();
    let url = format!("{base}/api/projects");

    // Empty tech list
    let mut body = project_body("X");
    body["tech"] = json!([]);
    let resp = client.post(&url).json(&body).send().await.unwrap();
    assert_eq!(resp.status(), 400);
    let err: Value = resp.json().await.unwrap();
    assert_eq!(err["error"]["code"], "VALIDATION_ERROR");

    // Missing field
    let resp = client
        .post(&url)
        .json(&json!({ "title": "X" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);

    // Non-numeric id
    let resp = client
        .put(format!("{url}/abc"))
        .json(&project_body("X"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);

    let projects: Vec<Value> = client.get(&url).send().await.unwrap().json().await.unwrap();
    assert_eq!(projects.len(), 2);
}

#[tokio::test]
async fn profile_replace_has_no_merge_semantics() {
    let base = spawn_server(Config::default()).await;
    let client = reqwest::Client::new();
    let url = format!("{base}/api/profile");

    let mut profile: Value = client.get(&url).send().await.unwrap().json().await.unwrap();
    assert!(profile["skills"]
        .as_array()
        .unwrap()
        .contains(&json!("TypeScript")));

    profile["skills"] = json!(["Rust", "Go"]);
    let resp = client.put(&url).json(&profile).send().await.unwrap();
    assert_eq!(resp.status(), 200);

    let after: Value = client.get(&url).send().await.unwrap().json().await.unwrap();
    assert_eq!(after["skills"], json!(["Rust", "Go"]));
}

#[tokio::test]
async fn profile_with_bad_email_is_rejected() {
    let base = spawn_server(Config::default()).await;
    let client = reqwest::Client::new();
    let url = format!("{base}/api/profile");

    let before: Value = client.get(&url).send().await.unwrap().json().await.unwrap();
    let mut profile = before.clone();
    profile["email"] = json!("nope");
    let resp = client.put(&url).json(&profile).send().await.unwrap();
    assert_eq!(resp.status(), 400);

    let after: Value = client.get(&url).send().await.unwrap().json().await.unwrap();
    assert_eq!(after, before);
}

#[tokio::test]
async fn generate_bio_roundtrip() {
    let base = spawn_server(Config::default()).await;
    let client = reqwest::Client::new();
    let url = format!("{base}/api/generate-bio");

    let resp = client
        .post(&url)
        .json(&json!({ "skills": ["Rust", "SQL"], "title": "Data Engineer" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    let bio = body["bio"].as_str().unwrap();
    assert!(bio.contains("Data Engineer"));

    let resp = client
        .post(&url)
        .json(&json!({ "skills": [], "title": "Data Engineer" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
}

#[tokio::test]
async fn unseeded_server_starts_empty() {
    let base = spawn_server(Config {
        seed_data: false,
        ..Config::default()
    })
    .await;
    let projects: Vec<Value> = reqwest::get(format!("{base}/api/projects"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(projects.is_empty());
}
