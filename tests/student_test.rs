mod common;

use axum::http::StatusCode;
use serde_json::{json, Value};

use common::{Factory, TestApp};

#[tokio::test]
async fn test_create_requires_first_and_last_name() {
    let app = TestApp::new().await;

    let response = app
        .server
        .post("/api/students")
        .json(&json!({ "Firstname": "Ada" }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let body: Value = response.json();
    assert!(body["details"].as_str().unwrap().contains("Lastname"));
}

#[tokio::test]
async fn test_create_and_list_students() {
    let app = TestApp::new().await;

    let response = app
        .server
        .post("/api/students")
        .json(&json!({
            "Firstname": "Ada",
            "Lastname": "Lovelace",
            "Email": "ada@example.com",
            "Class": "B3"
        }))
        .await;
    response.assert_status(StatusCode::OK);

    let body: Value = response.json();
    assert_eq!(body["Firstname"].as_str().unwrap(), "Ada");
    assert_eq!(body["Class"].as_str().unwrap(), "B3");

    let response = app.server.get("/api/students").await;
    response.assert_status(StatusCode::OK);

    let body: Value = response.json();
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["Email"].as_str().unwrap(), "ada@example.com");
}

#[tokio::test]
async fn test_update_rewrites_optional_fields() {
    let app = TestApp::new().await;
    let factory = Factory::new(&app.store);
    let id = factory.create_student("Ada", "Lovelace");

    // Email omitted from the update: it is rewritten to ""
    let response = app
        .server
        .put("/api/students")
        .json(&json!({ "id": id, "Firstname": "Ada", "Lastname": "King" }))
        .await;
    response.assert_status(StatusCode::OK);

    let body: Value = response.json();
    assert_eq!(body["Lastname"].as_str().unwrap(), "King");
    assert_eq!(body["Email"].as_str().unwrap(), "");
}

#[tokio::test]
async fn test_delete_student() {
    let app = TestApp::new().await;
    let factory = Factory::new(&app.store);
    let id = factory.create_student("Ada", "Lovelace");

    let response = app
        .server
        .delete("/api/students")
        .json(&json!({ "id": id }))
        .await;
    response.assert_status(StatusCode::OK);

    assert!(app.store.record("Students", &id).is_none());
}
