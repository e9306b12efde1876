//! Integration tests for serving scene content.

mod common;

use axum::http::StatusCode;

#[tokio::test]
async fn test_get_scene_returns_document_as_authored() {
    let dirs = common::TestDirs::new();
    common::write_intro_story(&dirs);

    let (status, json) = common::get_json(dirs.app(), "/api/scene/intro").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["id"], "intro");
    assert_eq!(json["background"], "bg/classroom.png");
    assert_eq!(json["characters"][0]["name"], "Mia");
    assert_eq!(json["dialogue"][0]["speaker"], "Mia");
    assert_eq!(json["dialogue"][1]["command"], "change_sprite");
    assert_eq!(json["dialogue"][1]["character"], "Mia");
    assert_eq!(json["dialogue"][2]["text"], "The bell rings.");
    assert_eq!(json["choices"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_get_missing_scene_returns_404() {
    let dirs = common::TestDirs::new();

    let (status, json) = common::get_json(dirs.app(), "/api/scene/prologue").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "scene_not_found");
}

#[tokio::test]
async fn test_get_malformed_scene_returns_500() {
    let dirs = common::TestDirs::new();
    std::fs::write(dirs.scenes.path().join("broken.json"), b"{ \"id\": ").unwrap();

    let (status, json) = common::get_json(dirs.app(), "/api/scene/broken").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"], "malformed_content");
}

#[tokio::test]
async fn test_encoded_traversal_never_leaves_content_root() {
    // Arrange: a valid scene document one level above the content root.
    let outer = tempfile::TempDir::new().unwrap();
    let scenes = outer.path().join("scenes");
    std::fs::create_dir(&scenes).unwrap();
    common::write_json(
        &outer.path().join("secret.json"),
        &serde_json::json!({
            "id": "secret", "background": "", "characters": [], "dialogue": [], "choices": []
        }),
    );
    let app = common::build_test_app(&scenes, outer.path());

    // Act
    let (status, json) = common::get_json(app, "/api/scene/..%2Fsecret").await;

    // Assert
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "scene_not_found");
}

#[tokio::test]
async fn test_edited_scene_is_served_without_restart() {
    let dirs = common::TestDirs::new();
    common::write_intro_story(&dirs);
    let app = dirs.app();

    dirs.write_scene(
        "chapter1",
        &serde_json::json!({
            "id": "chapter1", "background": "bg/rooftop.png",
            "characters": [], "dialogue": [], "choices": []
        }),
    );
    let (status, json) = common::get_json(app, "/api/scene/chapter1").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["background"], "bg/rooftop.png");
}

#[tokio::test]
async fn test_loosely_authored_dialogue_is_served_as_written() {
    let dirs = common::TestDirs::new();
    let dialogue = serde_json::json!([
        { "speaker": "Mia" },
        { "command": "narrate", "speaker": "Mia", "text": "hello" },
        { "command": "shake", "character": 3 }
    ]);
    dirs.write_scene(
        "loose",
        &serde_json::json!({
            "id": "loose", "background": "bg/park.png",
            "characters": [], "dialogue": dialogue, "choices": []
        }),
    );

    let (status, json) = common::get_json(dirs.app(), "/api/scene/loose").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["dialogue"], dialogue);
}
