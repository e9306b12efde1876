//! Shared test helpers for API integration tests.
#![allow(dead_code)]

use std::path::Path;
use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tempfile::TempDir;
use tower::ServiceExt;

use tendertale_api::app::build_app;
use tendertale_api::cors::OriginPolicy;
use tendertale_api::state::AppState;
use tendertale_content::FsSceneRepository;
use tendertale_progress::FsProgressRepository;

/// A scene root and a saves root, both removed when dropped.
pub struct TestDirs {
    pub scenes: TempDir,
    pub saves: TempDir,
}

impl TestDirs {
    pub fn new() -> Self {
        Self {
            scenes: TempDir::new().unwrap(),
            saves: TempDir::new().unwrap(),
        }
    }

    /// Writes `scene` as `<scenes>/<id>.json`.
    pub fn write_scene(&self, id: &str, scene: &serde_json::Value) {
        write_json(&self.scenes.path().join(format!("{id}.json")), scene);
    }

    /// Builds the full app over these directories, the same way `main.rs` does.
    pub fn app(&self) -> Router {
        build_test_app(self.scenes.path(), self.saves.path())
    }
}

pub fn write_json(path: &Path, value: &serde_json::Value) {
    std::fs::write(path, serde_json::to_vec_pretty(value).unwrap()).unwrap();
}

/// Build the full app router with filesystem stores and the default origins.
pub fn build_test_app(scenes_dir: &Path, saves_dir: &Path) -> Router {
    let app_state = AppState::new(
        Arc::new(FsSceneRepository::new(scenes_dir)),
        Arc::new(FsProgressRepository::new(saves_dir)),
    );
    build_app(
        app_state,
        OriginPolicy::new(["http://localhost:5173", "https://*.vercel.app"]),
    )
}

/// The two-scene story most tests play through.
pub fn write_intro_story(dirs: &TestDirs) {
    dirs.write_scene(
        "intro",
        &serde_json::json!({
            "id": "intro",
            "background": "bg/classroom.png",
            "characters": [
                { "name": "Mia", "sprite": "mia_smile.png", "position": "left" }
            ],
            "dialogue": [
                { "speaker": "Mia", "text": "Hi there!" },
                { "command": "change_sprite", "character": "Mia", "sprite": "mia_wave.png" },
                { "text": "The bell rings." }
            ],
            "choices": [
                { "text": "Say hello", "next_scene": "chapter1" },
                { "text": "Walk away", "next_scene": "missing_scene" }
            ]
        }),
    );
    dirs.write_scene(
        "chapter1",
        &serde_json::json!({
            "id": "chapter1",
            "background": "bg/hallway.png",
            "characters": [],
            "dialogue": [{ "speaker": "Mia", "text": "Let's go." }],
            "choices": []
        }),
    );
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

/// Send a POST request with a JSON body and return the response.
pub async fn post_json(
    app: Router,
    uri: &str,
    body: &serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    post_raw(app, uri, serde_json::to_vec(body).unwrap()).await
}

/// Send a POST request with an arbitrary body and return the response.
pub async fn post_raw(
    app: Router,
    uri: &str,
    body: impl Into<Body>,
) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap();

    send(app, request).await
}

/// Send a GET request and return the response.
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    send(app, request).await
}

/// Send a DELETE request and return the response.
pub async fn delete_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    send(app, request).await
}
