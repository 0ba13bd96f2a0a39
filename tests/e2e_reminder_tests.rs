//! End-to-end tests for medication reminders

mod common;

use common::{TestClient, TestServer, SEEDED_REMINDERS};
use reqwest::StatusCode;
use serde_json::{json, Value};

#[tokio::test]
async fn test_seeded_reminders_have_day_labels() {
    let server = TestServer::spawn().await;
    let client = TestClient::new(server.base_url.clone());

    let response = client.list_reminders().await;
    assert_eq!(response.status(), StatusCode::OK);

    let reminders: Vec<Value> = response.json().await.unwrap();
    assert_eq!(reminders.len(), SEEDED_REMINDERS);
    assert_eq!(reminders[0]["days_label"], "5 days");
    assert_eq!(reminders[1]["days_label"], "Monday, Wednesday, Friday");
    assert_eq!(reminders[2]["days_label"], "Everyday");
    assert_eq!(reminders[2]["active"], false);
}

#[tokio::test]
async fn test_add_reminder_gets_next_id() {
    let server = TestServer::spawn().await;
    let client = TestClient::new(server.base_url.clone());

    let response = client
        .add_reminder(json!({
            "medicine_name": " Telma 40 ",
            "time": "21:15",
            "days": ["Saturday", "Sunday"]
        }))
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Reminder added for Telma 40");
    assert_eq!(body["reminder"]["id"], 4);
    assert_eq!(body["reminder"]["medicine_name"], "Telma 40");
    assert_eq!(body["reminder"]["active"], true);
    assert_eq!(body["reminder"]["days_label"], "Saturday, Sunday");

    let response = client.get_reminder(4).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_add_reminder_defaults_to_everyday() {
    let server = TestServer::spawn().await;
    let client = TestClient::new(server.base_url.clone());

    let response = client
        .add_reminder(json!({ "medicine_name": "Pantop 40", "time": "7:05" }))
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["reminder"]["days"], json!(["Everyday"]));
    assert_eq!(body["reminder"]["time"], "07:05");
}

#[tokio::test]
async fn test_add_reminder_validation() {
    let server = TestServer::spawn().await;
    let client = TestClient::new(server.base_url.clone());

    let response = client
        .add_reminder(json!({ "medicine_name": "", "time": "08:00" }))
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Medicine name is required");

    let response = client
        .add_reminder(json!({ "medicine_name": "Dolo", "time": "25:00" }))
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = client
        .add_reminder(json!({ "medicine_name": "Dolo", "time": "08:00", "days": [] }))
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let reminders: Vec<Value> = client.list_reminders().await.json().await.unwrap();
    assert_eq!(reminders.len(), SEEDED_REMINDERS);
}

#[tokio::test]
async fn test_update_reminder() {
    let server = TestServer::spawn().await;
    let client = TestClient::new(server.base_url.clone());

    let response = client
        .update_reminder(
            2,
            json!({
                "medicine_name": "Vitamin D3",
                "time": "10:00",
                "days": ["Tuesday"],
                "active": false
            }),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Reminder updated for Vitamin D3");
    assert_eq!(body["reminder"]["id"], 2);
    assert_eq!(body["reminder"]["time"], "10:00");
    assert_eq!(body["reminder"]["active"], false);

    let response = client
        .update_reminder(42, json!({ "medicine_name": "X", "time": "10:00" }))
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_toggle_reminder() {
    let server = TestServer::spawn().await;
    let client = TestClient::new(server.base_url.clone());

    let body: Value = client.toggle_reminder(3).await.json().await.unwrap();
    assert_eq!(body["active"], true);

    let body: Value = client.toggle_reminder(3).await.json().await.unwrap();
    assert_eq!(body["active"], false);

    let response = client.toggle_reminder(42).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_reminder() {
    let server = TestServer::spawn().await;
    let client = TestClient::new(server.base_url.clone());

    let response = client.delete_reminder(1).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Reminder deleted");

    let response = client.get_reminder(1).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = client.delete_reminder(1).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let reminders: Vec<Value> = client.list_reminders().await.json().await.unwrap();
    assert_eq!(reminders.len(), SEEDED_REMINDERS - 1);
}
