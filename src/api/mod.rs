// Backend access for the console.

pub mod rest;

#[cfg(test)]
pub mod fake;

pub use rest::RestAdminApi;

use async_trait::async_trait;

use crate::error::ConsoleResult;
use crate::models::{
    AssignPayload, InventoryItem, NewInventoryPayload, NewRequestPayload, RejectPayload, Request,
    ResourceCount,
};

/// One method per admin endpoint. Every call is a single round-trip.
#[async_trait]
pub trait AdminApi: Send + Sync {
    async fn list_pending_requests(&self) -> ConsoleResult<Vec<Request>>;

    async fn list_inventory(&self) -> ConsoleResult<Vec<InventoryItem>>;

    async fn assign_request(&self, payload: &AssignPayload) -> ConsoleResult<()>;

    async fn reject_request(&self, payload: &RejectPayload) -> ConsoleResult<()>;

    async fn submit_request(&self, payload: &NewRequestPayload) -> ConsoleResult<()>;

    async fn create_inventory_item(&self, payload: &NewInventoryPayload) -> ConsoleResult<()>;

    async fn delete_inventory_item(&self, item_id: i64) -> ConsoleResult<()>;

    async fn resource_counts(&self) -> ConsoleResult<Vec<ResourceCount>>;
}
