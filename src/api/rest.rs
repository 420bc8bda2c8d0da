use std::time::Duration;

use async_trait::async_trait;

use super::AdminApi;
use crate::config::Config;
use crate::error::ConsoleResult;
use crate::http_client::HttpClient;
use crate::models::{
    AssignPayload, InventoryItem, NewInventoryPayload, NewRequestPayload, RejectPayload, Request,
    ResourceCount,
};

pub const PENDING_REQUESTS_PATH: &str = "/requests/pending";
pub const ASSIGN_PATH: &str = "/requests/assign";
pub const REJECT_PATH: &str = "/requests/reject";
pub const SUBMIT_PATH: &str = "/requests/submit";
pub const INVENTORY_PATH: &str = "/inventory";
pub const RESOURCE_COUNTS_PATH: &str = "/resource-counts";

/// `AdminApi` over the REST backend.
#[derive(Clone)]
pub struct RestAdminApi {
    http: HttpClient,
}

impl RestAdminApi {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    pub fn from_config(config: &Config) -> ConsoleResult<Self> {
        let timeout = config.http_timeout_secs.map(Duration::from_secs);
        Ok(Self::new(HttpClient::new(config.api_base_url.clone(), timeout)?))
    }
}

pub fn inventory_item_path(item_id: i64) -> String {
    format!("{}/{}", INVENTORY_PATH, item_id)
}

#[async_trait]
impl AdminApi for RestAdminApi {
    async fn list_pending_requests(&self) -> ConsoleResult<Vec<Request>> {
        self.http.get_json(PENDING_REQUESTS_PATH, "Server error").await
    }

    async fn list_inventory(&self) -> ConsoleResult<Vec<InventoryItem>> {
        self.http.get_json(INVENTORY_PATH, "Server error").await
    }

    async fn assign_request(&self, payload: &AssignPayload) -> ConsoleResult<()> {
        self.http
            .post_json(ASSIGN_PATH, payload, "Assignment failed.")
            .await
    }

    async fn reject_request(&self, payload: &RejectPayload) -> ConsoleResult<()> {
        self.http
            .post_json(REJECT_PATH, payload, "Rejection failed.")
            .await
    }

    async fn submit_request(&self, payload: &NewRequestPayload) -> ConsoleResult<()> {
        self.http
            .post_json(
                SUBMIT_PATH,
                payload,
                "Failed to submit request to the server.",
            )
            .await
    }

    async fn create_inventory_item(&self, payload: &NewInventoryPayload) -> ConsoleResult<()> {
        self.http
            .post_json(INVENTORY_PATH, payload, "Failed to add item.")
            .await
    }

    async fn delete_inventory_item(&self, item_id: i64) -> ConsoleResult<()> {
        self.http
            .delete(&inventory_item_path(item_id), "Failed to delete item.")
            .await
    }

    async fn resource_counts(&self) -> ConsoleResult<Vec<ResourceCount>> {
        self.http
            .get_json(RESOURCE_COUNTS_PATH, "Failed to fetch chart data.")
            .await
    }
}
