//! HTTP client for end-to-end tests
//!
//! Wraps reqwest with one method per server endpoint.
//! When API routes or request formats change, update only this file.

#![allow(dead_code)]

use super::constants::*;
use reqwest::Response;
use serde_json::{json, Value};
use std::time::Duration;

pub struct TestClient {
    /// The underlying reqwest client (public for custom requests in tests)
    pub client: reqwest::Client,
    /// The base URL of the test server
    pub base_url: String,
}

impl TestClient {
    pub fn new(base_url: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .expect("Failed to build reqwest client");

        Self { client, base_url }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get(&self, path: &str) -> Response {
        self.client
            .get(self.url(path))
            .send()
            .await
            .expect("GET request failed")
    }

    async fn post(&self, path: &str, body: Value) -> Response {
        self.client
            .post(self.url(path))
            .json(&body)
            .send()
            .await
            .expect("POST request failed")
    }

    async fn post_empty(&self, path: &str) -> Response {
        self.client
            .post(self.url(path))
            .send()
            .await
            .expect("POST request failed")
    }

    async fn put(&self, path: &str, body: Value) -> Response {
        self.client
            .put(self.url(path))
            .json(&body)
            .send()
            .await
            .expect("PUT request failed")
    }

    async fn delete(&self, path: &str) -> Response {
        self.client
            .delete(self.url(path))
            .send()
            .await
            .expect("DELETE request failed")
    }

    // ========================================================================
    // Home
    // ========================================================================

    pub async fn get_home(&self) -> Response {
        self.get("/").await
    }

    // ========================================================================
    // Catalog Endpoints
    // ========================================================================

    pub async fn list_medicines(&self) -> Response {
        self.get("/v1/catalog/medicines").await
    }

    pub async fn get_medicine(&self, id: &str) -> Response {
        self.get(&format!("/v1/catalog/medicines/{}", id)).await
    }

    pub async fn get_popular(&self, limit: usize) -> Response {
        self.get(&format!("/v1/catalog/medicines/popular?limit={}", limit))
            .await
    }

    pub async fn recommend(&self, query: &str, limit: usize) -> Response {
        self.client
            .get(self.url("/v1/catalog/medicines/recommend"))
            .query(&[("q", query.to_string()), ("limit", limit.to_string())])
            .send()
            .await
            .expect("GET request failed")
    }

    pub async fn get_alternatives(&self, id: &str) -> Response {
        self.get(&format!("/v1/catalog/medicines/{}/alternatives", id))
            .await
    }

    pub async fn list_pharmacies(&self, query: &str, pharmacy_type: &str) -> Response {
        self.client
            .get(self.url("/v1/catalog/pharmacies"))
            .query(&[("q", query), ("type", pharmacy_type)])
            .send()
            .await
            .expect("GET request failed")
    }

    pub async fn get_pharmacy(&self, id: &str) -> Response {
        self.get(&format!("/v1/catalog/pharmacies/{}", id)).await
    }

    pub async fn get_pharmacy_stock(&self, id: &str) -> Response {
        self.get(&format!("/v1/catalog/pharmacies/{}/stock", id))
            .await
    }

    // ========================================================================
    // Search
    // ========================================================================

    pub async fn search(&self, query: &str, resolve: bool) -> Response {
        self.post("/v1/search", json!({ "query": query, "resolve": resolve }))
            .await
    }

    pub async fn search_filtered(&self, query: &str, filters: &[&str]) -> Response {
        self.post("/v1/search", json!({ "query": query, "filters": filters }))
            .await
    }

    // ========================================================================
    // Notifications
    // ========================================================================

    pub async fn list_notifications(&self) -> Response {
        self.get("/v1/notifications").await
    }

    pub async fn get_unread_count(&self) -> Response {
        self.get("/v1/notifications/unread_count").await
    }

    pub async fn add_notification(&self, title: &str, message: &str, category: &str) -> Response {
        self.post(
            "/v1/notifications",
            json!({ "title": title, "message": message, "category": category }),
        )
        .await
    }

    pub async fn mark_notification_read(&self, id: &str) -> Response {
        self.post_empty(&format!("/v1/notifications/{}/read", id))
            .await
    }

    pub async fn mark_all_notifications_read(&self) -> Response {
        self.post_empty("/v1/notifications/read_all").await
    }

    pub async fn clear_notifications(&self) -> Response {
        self.delete("/v1/notifications").await
    }

    // ========================================================================
    // Reminders
    // ========================================================================

    pub async fn list_reminders(&self) -> Response {
        self.get("/v1/reminders").await
    }

    pub async fn get_reminder(&self, id: u32) -> Response {
        self.get(&format!("/v1/reminders/{}", id)).await
    }

    pub async fn add_reminder(&self, body: Value) -> Response {
        self.post("/v1/reminders", body).await
    }

    pub async fn update_reminder(&self, id: u32, body: Value) -> Response {
        self.put(&format!("/v1/reminders/{}", id), body).await
    }

    pub async fn delete_reminder(&self, id: u32) -> Response {
        self.delete(&format!("/v1/reminders/{}", id)).await
    }

    pub async fn toggle_reminder(&self, id: u32) -> Response {
        self.post_empty(&format!("/v1/reminders/{}/toggle", id))
            .await
    }

    // ========================================================================
    // Booking
    // ========================================================================

    pub async fn list_physicians(&self) -> Response {
        self.get("/v1/booking/physicians").await
    }

    pub async fn get_physician(&self, id: u32) -> Response {
        self.get(&format!("/v1/booking/physicians/{}", id)).await
    }

    pub async fn list_time_slots(&self) -> Response {
        self.get("/v1/booking/slots").await
    }

    pub async fn list_appointments(&self) -> Response {
        self.get("/v1/booking/appointments").await
    }

    pub async fn book_appointment(&self, body: Value) -> Response {
        self.post("/v1/booking/appointments", body).await
    }

    // ========================================================================
    // Plans
    // ========================================================================

    pub async fn list_plans(&self) -> Response {
        self.get("/v1/plans").await
    }

    pub async fn select_plan(&self, name: &str) -> Response {
        self.post("/v1/plans/select", json!({ "name": name })).await
    }

    // ========================================================================
    // Scans
    // ========================================================================

    pub async fn start_scan(&self, kind: &str, input: &str) -> Response {
        self.post("/v1/scan", json!({ "kind": kind, "input": input }))
            .await
    }

    pub async fn get_scan(&self, id: &str) -> Response {
        self.get(&format!("/v1/scan/{}", id)).await
    }

    pub async fn cancel_scan(&self, id: &str) -> Response {
        self.delete(&format!("/v1/scan/{}", id)).await
    }

    /// Polls a scan until it leaves `pending`, returning its final body.
    pub async fn wait_for_scan(&self, id: &str) -> Value {
        for _ in 0..200 {
            let body: Value = self.get_scan(id).await.json().await.unwrap();
            if body["status"] != "pending" {
                return body;
            }
            tokio::time::sleep(Duration::from_millis(20)).await;
        }
        panic!("Scan {} never finished", id);
    }
}
