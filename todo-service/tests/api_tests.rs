mod common;

use common::TestApp;
use reqwest::StatusCode;
use serde_json::json;
use serde_json::Value;

async fn list_tasks(app: &TestApp, token: &str) -> Vec<Value> {
    let response = app
        .get_authenticated("/tasks", token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);

    response.json().await.expect("Failed to parse response")
}

async fn create_task(app: &TestApp, token: &str, description: &str) {
    let response = app
        .post_authenticated("/tasks", token)
        .json(&json!({ "description": description }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_healthcheck() {
    let app = TestApp::spawn().await;

    let response = app
        .get("/healthcheck")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body, json!({ "status": "ok" }));
}

#[tokio::test]
async fn test_register_success_and_duplicate() {
    let app = TestApp::spawn().await;
    let payload = json!({ "name": "test", "email": "test@test.com", "password": "test" });

    let response = app
        .post("/auth/register")
        .json(&payload)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::CREATED);
    let body: Value = response.json().await.expect("Failed to parse response");
    let token = body["token"].as_str().unwrap();
    assert_eq!(
        app.authenticator.verify_token(token).unwrap().email,
        "test@test.com"
    );

    let response = app
        .post("/auth/register")
        .json(&payload)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body, json!({ "message": "User exists" }));
}

#[tokio::test]
async fn test_register_invalid_email() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/auth/register")
        .json(&json!({ "name": "test", "email": "test", "password": "test" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_login_success() {
    let app = TestApp::spawn().await;
    let registered = app.register("test", "test@test.com", "test").await;

    let response = app
        .post("/auth/login")
        .json(&json!({ "email": "test@test.com", "password": "test" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.expect("Failed to parse response");
    let token = body["token"].as_str().unwrap();

    // Same claims and secret, so the same token.
    assert_eq!(token, registered);
}

#[tokio::test]
async fn test_login_failures_are_indistinguishable() {
    let app = TestApp::spawn().await;
    app.register("test", "test@test.com", "test").await;

    for payload in [
        json!({ "email": "test@test.com", "password": "wrong" }),
        json!({ "email": "nobody@test.com", "password": "test" }),
        json!({ "email": "TEST@test.com", "password": "test" }),
    ] {
        let response = app
            .post("/auth/login")
            .json(&payload)
            .send()
            .await
            .expect("Failed to execute request");

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: Value = response.json().await.expect("Failed to parse response");
        assert_eq!(body, json!({ "message": "Wrong email or password" }));
    }
}

#[tokio::test]
async fn test_get_profile() {
    let app = TestApp::spawn().await;
    let token = app.register("test", "test@test.com", "test").await;

    let response = app
        .get_authenticated("/profile", &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["name"], "test");
    assert_eq!(body["email"], "test@test.com");
    assert!(body["id"].is_string());
    assert!(body.get("password_hash").is_none());
}

#[tokio::test]
async fn test_protected_routes_reject_bad_credentials() {
    let app = TestApp::spawn().await;
    let token = app.register("test", "test@test.com", "test").await;
    let tampered = format!("{}x", token);

    let requests = [
        app.get("/profile"),
        app.get("/tasks").header("Authorization", "Basic xyz"),
        app.get_authenticated("/tasks", &tampered),
        app.get_authenticated("/tasks", "not.a.token"),
    ];

    for request in requests {
        let response = request.send().await.expect("Failed to execute request");

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let body: Value = response.json().await.expect("Failed to parse response");
        assert_eq!(body, json!({ "message": "Unauthorized" }));
    }
}

#[tokio::test]
async fn test_task_lifecycle() {
    let app = TestApp::spawn().await;
    let token = app.register("test", "test@test.com", "test").await;

    assert!(list_tasks(&app, &token).await.is_empty());

    create_task(&app, &token, "Buy milk").await;
    create_task(&app, &token, "Walk the dog").await;

    let tasks = list_tasks(&app, &token).await;
    assert_eq!(tasks.len(), 2);
    assert_eq!(tasks[0]["description"], "Walk the dog");
    assert_eq!(tasks[1]["description"], "Buy milk");
    assert_eq!(tasks[1]["is_completed"], false);
    assert!(tasks[1]["created_at"].is_string());

    let id = tasks[1]["id"].as_str().unwrap().to_string();

    let response = app
        .patch_authenticated(&format!("/tasks/{}", id), &token)
        .json(&json!({ "description": "Buy oat milk" }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app
        .patch_authenticated(&format!("/tasks/{}/complete", id), &token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let tasks = list_tasks(&app, &token).await;
    assert_eq!(tasks[1]["description"], "Buy oat milk");
    assert_eq!(tasks[1]["is_completed"], true);

    let response = app
        .patch_authenticated(&format!("/tasks/{}/incomplete", id), &token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert_eq!(list_tasks(&app, &token).await[1]["is_completed"], false);

    let response = app
        .delete_authenticated(&format!("/tasks/{}", id), &token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let tasks = list_tasks(&app, &token).await;
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0]["description"], "Walk the dog");

    let response = app
        .delete_authenticated(&format!("/tasks/{}", id), &token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_task_validation_and_unknown_ids() {
    let app = TestApp::spawn().await;
    let token = app.register("test", "test@test.com", "test").await;

    let response = app
        .post_authenticated("/tasks", &token)
        .json(&json!({ "description": "" }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let response = app
        .post_authenticated("/tasks", &token)
        .json(&json!({}))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    for path in [
        "/tasks/not-a-uuid/complete".to_string(),
        format!("/tasks/{}/complete", uuid::Uuid::new_v4()),
    ] {
        let response = app
            .patch_authenticated(&path, &token)
            .send()
            .await
            .expect("Failed to execute request");

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body: Value = response.json().await.expect("Failed to parse response");
        assert_eq!(body, json!({ "message": "Task not found" }));
    }
}

#[tokio::test]
async fn test_tasks_are_isolated_between_users() {
    let app = TestApp::spawn().await;
    let alice = app.register("alice", "alice@test.com", "secret").await;
    let bob = app.register("bob", "bob@test.com", "secret").await;

    create_task(&app, &alice, "Alice's task").await;
    let id = list_tasks(&app, &alice).await[0]["id"]
        .as_str()
        .unwrap()
        .to_string();

    assert!(list_tasks(&app, &bob).await.is_empty());

    let response = app
        .patch_authenticated(&format!("/tasks/{}", id), &bob)
        .json(&json!({ "description": "Bob was here" }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app
        .delete_authenticated(&format!("/tasks/{}", id), &bob)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let tasks = list_tasks(&app, &alice).await;
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0]["description"], "Alice's task");
}
