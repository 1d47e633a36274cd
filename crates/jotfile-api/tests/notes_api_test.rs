//! End-to-end tests for the notes HTTP API.
//!
//! Each test spins up a server on an ephemeral port with a temp-dir backing
//! file and drives it with a real HTTP client.

use std::sync::Arc;

use jotfile_api::router;
use jotfile_store::{JsonFileStore, NoteService};
use tempfile::TempDir;

async fn spawn_test_server() -> (String, TempDir) {
    let dir = TempDir::new().unwrap();
    let service = Arc::new(NoteService::new(JsonFileStore::new(
        dir.path().join("notes.json"),
    )));
    let app = router(service);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let base_url = format!("http://{}", addr);

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (base_url, dir)
}

#[tokio::test]
async fn test_list_on_fresh_store_returns_empty() {
    let (base_url, _dir) = spawn_test_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .get(format!("{base_url}/api/notes"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["data"], serde_json::json!([]));
}

#[tokio::test]
async fn test_create_returns_note_and_lists_first() {
    let (base_url, _dir) = spawn_test_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{base_url}/api/notes"))
        .json(&serde_json::json!({ "title": "  Title  ", "content": "  body  " }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["title"], "Title");
    assert_eq!(body["data"]["content"], "body");
    assert!(body["data"]["id"].is_string());
    assert_eq!(body["data"]["createdAt"], body["data"]["updatedAt"]);

    let list: serde_json::Value = client
        .get(format!("{base_url}/api/notes"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(list["data"][0]["id"], body["data"]["id"]);
}

#[tokio::test]
async fn test_create_blank_or_missing_title_is_400() {
    let (base_url, _dir) = spawn_test_server().await;
    let client = reqwest::Client::new();

    for payload in [
        serde_json::json!({ "title": "", "content": "x" }),
        serde_json::json!({ "title": "   ", "content": "x" }),
        serde_json::json!({ "content": "x" }),
    ] {
        let resp = client
            .post(format!("{base_url}/api/notes"))
            .json(&payload)
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 400);

        let body: serde_json::Value = resp.json().await.unwrap();
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "title required");
    }

    // Nothing was persisted
    let list: serde_json::Value = client
        .get(format!("{base_url}/api/notes"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(list["data"], serde_json::json!([]));
}

#[tokio::test]
async fn test_delete_existing_note() {
    let (base_url, _dir) = spawn_test_server().await;
    let client = reqwest::Client::new();

    let created: serde_json::Value = client
        .post(format!("{base_url}/api/notes"))
        .json(&serde_json::json!({ "title": "doomed", "content": "" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let id = created["data"]["id"].as_str().unwrap().to_string();

    let resp = client
        .delete(format!("{base_url}/api/notes/{id}"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body, serde_json::json!({ "success": true }));

    let list: serde_json::Value = client
        .get(format!("{base_url}/api/notes"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(list["data"], serde_json::json!([]));
}

#[tokio::test]
async fn test_delete_unknown_id_is_404() {
    let (base_url, _dir) = spawn_test_server().await;
    let client = reqwest::Client::new();

    let unknown = uuid::Uuid::now_v7();
    let resp = client
        .delete(format!("{base_url}/api/notes/{unknown}"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "not found");
}

#[tokio::test]
async fn test_create_list_delete_round_trip() {
    let (base_url, _dir) = spawn_test_server().await;
    let client = reqwest::Client::new();

    client
        .post(format!("{base_url}/api/notes"))
        .json(&serde_json::json!({ "title": "existing", "content": "stays" }))
        .send()
        .await
        .unwrap();

    let before: serde_json::Value = client
        .get(format!("{base_url}/api/notes"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let created: serde_json::Value = client
        .post(format!("{base_url}/api/notes"))
        .json(&serde_json::json!({ "title": "ephemeral", "content": "" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let id = created["data"]["id"].as_str().unwrap().to_string();

    client
        .delete(format!("{base_url}/api/notes/{id}"))
        .send()
        .await
        .unwrap();

    let after: serde_json::Value = client
        .get(format!("{base_url}/api/notes"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(after["data"], before["data"]);
}

#[tokio::test]
async fn test_malformed_body_keeps_error_envelope() {
    let (base_url, _dir) = spawn_test_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{base_url}/api/notes"))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_malformed_id_is_404_with_envelope() {
    let (base_url, _dir) = spawn_test_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .delete(format!("{base_url}/api/notes/not-a-uuid"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(
        body,
        serde_json::json!({ "success": false, "error": "not found" })
    );
}

#[tokio::test]
async fn test_health_endpoint() {
    let (base_url, _dir) = spawn_test_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .get(format!("{base_url}/api/health"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["status"], "ok");
    assert!(body["data"]["version"].is_string());
}
