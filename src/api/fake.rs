// In-memory AdminApi used by the console tests.

use std::sync::Mutex;

use async_trait::async_trait;
use http::StatusCode;

use super::AdminApi;
use crate::error::{ConsoleError, ConsoleResult};
use crate::models::{
    AssignPayload, InventoryItem, NewInventoryPayload, NewRequestPayload, RejectPayload, Request,
    ResourceCount,
};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    ListPending,
    ListInventory,
    Assign(AssignPayload),
    Reject(RejectPayload),
    Submit(NewRequestPayload),
    CreateItem(NewInventoryPayload),
    DeleteItem(i64),
    ResourceCounts,
}

#[derive(Default)]
pub struct FakeApi {
    pub requests: Mutex<Vec<Request>>,
    pub inventory: Mutex<Vec<InventoryItem>>,
    pub counts: Mutex<Vec<ResourceCount>>,
    /// When set, every call fails with this server message.
    pub fail_with: Mutex<Option<String>>,
    calls: Mutex<Vec<Call>>,
}

impl FakeApi {
    pub fn with_requests(requests: Vec<Request>) -> Self {
        let api = FakeApi::default();
        *api.requests.lock().unwrap() = requests;
        api
    }

    pub fn with_inventory(inventory: Vec<InventoryItem>) -> Self {
        let api = FakeApi::default();
        *api.inventory.lock().unwrap() = inventory;
        api
    }

    pub fn fail(&self, message: &str) {
        *self.fail_with.lock().unwrap() = Some(message.to_string());
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn clear_calls(&self) {
        self.calls.lock().unwrap().clear();
    }

    fn record(&self, call: Call) -> ConsoleResult<()> {
        self.calls.lock().unwrap().push(call);
        match self.fail_with.lock().unwrap().as_ref() {
            Some(message) => Err(ConsoleError::Server {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                message: message.clone(),
            }),
            None => Ok(()),
        }
    }
}

pub fn request(id: i64, resource_type: &str, quantity: i64, location: &str) -> Request {
    Request {
        id,
        resource_type: resource_type.to_string(),
        quantity,
        location: location.to_string(),
        status: "pending".to_string(),
        requested_by: 5,
        assigned_to_id: None,
        created_at: None,
        updated_at: None,
    }
}

pub fn item(id: i64, name: &str, category: &str) -> InventoryItem {
    InventoryItem {
        id,
        name: name.to_string(),
        category: category.to_string(),
        quantity_available: None,
        status: None,
        location: None,
        request_id: None,
    }
}

#[async_trait]
impl AdminApi for FakeApi {
    async fn list_pending_requests(&self) -> ConsoleResult<Vec<Request>> {
        self.record(Call::ListPending)?;
        Ok(self.requests.lock().unwrap().clone())
    }

    async fn list_inventory(&self) -> ConsoleResult<Vec<InventoryItem>> {
        self.record(Call::ListInventory)?;
        Ok(self.inventory.lock().unwrap().clone())
    }

    async fn assign_request(&self, payload: &AssignPayload) -> ConsoleResult<()> {
        self.record(Call::Assign(payload.clone()))
    }

    async fn reject_request(&self, payload: &RejectPayload) -> ConsoleResult<()> {
        self.record(Call::Reject(payload.clone()))?;
        self.requests
            .lock()
            .unwrap()
            .retain(|r| r.id != payload.request_id);
        Ok(())
    }

    async fn submit_request(&self, payload: &NewRequestPayload) -> ConsoleResult<()> {
        self.record(Call::Submit(payload.clone()))?;
        let mut requests = self.requests.lock().unwrap();
        let id = requests.iter().map(|r| r.id).max().unwrap_or(0) + 1;
        requests.push(request(
            id,
            &payload.resource_type,
            payload.quantity,
            &payload.location,
        ));
        Ok(())
    }

    async fn create_inventory_item(&self, payload: &NewInventoryPayload) -> ConsoleResult<()> {
        self.record(Call::CreateItem(payload.clone()))?;
        let mut inventory = self.inventory.lock().unwrap();
        let id = inventory.iter().map(|i| i.id).max().unwrap_or(0) + 1;
        let mut created = item(id, &payload.name, &payload.category);
        created.quantity_available = Some(payload.quantity);
        inventory.push(created);
        Ok(())
    }

    async fn delete_inventory_item(&self, item_id: i64) -> ConsoleResult<()> {
        self.record(Call::DeleteItem(item_id))?;
        self.inventory.lock().unwrap().retain(|i| i.id != item_id);
        Ok(())
    }

    async fn resource_counts(&self) -> ConsoleResult<Vec<ResourceCount>> {
        self.record(Call::ResourceCounts)?;
        Ok(self.counts.lock().unwrap().clone())
    }
}
