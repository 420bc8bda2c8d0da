//! The admin console: navigation, data loading and user actions.
//!
//! Nothing fetched is kept past one render. Each mutation is followed by a
//! full re-fetch of the affected list. The console is driven through
//! `&mut self`, so one navigation finishes before the next one starts.

use crate::api::AdminApi;
use crate::charts::dashboard_charts;
use crate::config::Config;
use crate::dispatch::{self, Action};
use crate::forms;
use crate::geo::{Bounds, DEFAULT_CENTER, DEFAULT_ZOOM, FIT_PADDING};
use crate::models::{AssignPayload, RejectPayload};
use crate::prompt::Prompt;
use crate::render;
use crate::session::{MapView, ViewSession, WidgetHost};
use crate::storage::SessionStore;
use crate::view::{Element, Node, Page, PageEffect, Region, ViewState};

pub struct Console<A, P, H> {
    config: Config,
    api: A,
    prompt: P,
    host: H,
    view: ViewState,
    session: ViewSession,
    storage: SessionStore,
}

impl<A, P, H> Console<A, P, H>
where
    A: AdminApi,
    P: Prompt,
    H: WidgetHost,
{
    pub fn new(config: Config, api: A, prompt: P, host: H) -> Self {
        Self {
            config,
            api,
            prompt,
            host,
            view: ViewState::new(Page::Dashboard),
            session: ViewSession::new(),
            storage: SessionStore::new(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn prompt(&self) -> &P {
        &self.prompt
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut ViewState {
        &mut self.view
    }

    pub fn session(&self) -> &ViewSession {
        &self.session
    }

    pub fn storage(&self) -> &SessionStore {
        &self.storage
    }

    /// Initial page load: runs the dashboard's effects if it is active.
    pub async fn load(&mut self) {
        if self.view.is_active(Page::Dashboard) {
            self.run_effects(Page::Dashboard).await;
        }
    }

    pub async fn navigate(&mut self, page: Page) {
        tracing::info!("Navigating to {}", page);
        self.view.activate(page);
        self.run_effects(page).await;
    }

    /// Navigation by link id. Unknown ids change nothing.
    pub async fn navigate_to(&mut self, page_id: &str) -> bool {
        match Page::from_id(page_id) {
            Some(page) => {
                self.navigate(page).await;
                true
            }
            None => {
                tracing::warn!("Ignoring navigation to unknown page '{}'", page_id);
                false
            }
        }
    }

    async fn run_effects(&mut self, page: Page) {
        for effect in page.effects() {
            match effect {
                PageEffect::FetchPendingRequests => self.fetch_pending_requests().await,
                PageEffect::FetchInventory => self.fetch_inventory().await,
                PageEffect::InitMap => self.init_map().await,
                PageEffect::InitCharts => self.init_charts().await,
            }
        }
    }

    /// Refreshes the allocation table and the urgent dashboard.
    pub async fn fetch_pending_requests(&mut self) {
        match self.api.list_pending_requests().await {
            Ok(requests) => {
                self.view
                    .replace(Region::AllocationTable, render::allocation_rows(&requests));
                let urgent = render::urgent_list(&requests, self.config.triage_officer_id);
                self.view.replace(Region::UrgentList, urgent.items);
                self.view
                    .replace(Region::UrgentBadge, vec![Node::from(urgent.badge)]);
            }
            Err(e) => {
                tracing::error!("Error fetching requests: {}", e);
                let message = format!(
                    "Failed to load data. Ensure the backend is reachable at {}.",
                    self.config.api_base_url
                );
                self.view
                    .replace(Region::AllocationTable, render::allocation_error(&message));
                self.view
                    .replace(Region::UrgentList, render::urgent_error(&message));
            }
        }
    }

    pub async fn fetch_inventory(&mut self) {
        match self.api.list_inventory().await {
            Ok(items) => {
                self.view
                    .replace(Region::InventoryTable, render::inventory_rows(&items));
            }
            Err(e) => {
                tracing::error!("Error fetching inventory: {}", e);
                self.view.replace(
                    Region::InventoryTable,
                    render::inventory_error("Failed to load inventory data."),
                );
            }
        }
    }

    /// Rebuilds the triage map from the current pending requests.
    pub async fn init_map(&mut self) {
        self.session.teardown_map(&mut self.host);

        let mut view = MapView::new(DEFAULT_CENTER, DEFAULT_ZOOM);
        match self.api.list_pending_requests().await {
            Ok(requests) => {
                view.markers = render::place_markers(&requests, self.config.triage_officer_id);
                view.viewport = Bounds::around(view.markers.iter().map(|m| m.position))
                    .map(|b| b.pad(FIT_PADDING));
                view.focus = self
                    .storage
                    .triage()
                    .map(|ctx| ctx.request_id)
                    .filter(|id| view.markers.iter().any(|m| m.request_id == *id));
            }
            Err(e) => {
                tracing::error!("Error loading map request data: {}", e);
                self.prompt
                    .alert("Could not load pending requests on the map.");
            }
        }

        self.session.replace_map(&mut self.host, &view);
    }

    /// Rebuilds all four charts. Only the distribution chart uses live data.
    pub async fn init_charts(&mut self) {
        self.session.teardown_charts(&mut self.host);

        let counts = match self.api.resource_counts().await {
            Ok(counts) => counts,
            Err(e) => {
                tracing::error!("Error fetching resource counts for chart: {}", e);
                Vec::new()
            }
        };

        for spec in dashboard_charts(&counts) {
            self.session.replace_chart(&mut self.host, &spec);
        }
    }

    /// Document-level click listener. `path` runs from the document down to
    /// the clicked element.
    pub async fn click(&mut self, path: &[Element]) {
        match dispatch::resolve(path) {
            Ok(Some(action)) => self.perform(action).await,
            Ok(None) => {}
            Err(e) => tracing::warn!("Ignoring click: {}", e),
        }
    }

    pub async fn perform(&mut self, action: Action) {
        if let Some(question) = action.confirmation() {
            if !self.prompt.confirm(&question) {
                tracing::debug!("Action cancelled: {:?}", action);
                return;
            }
        }

        match action {
            Action::Triage(ctx) => {
                self.storage.store_triage(&ctx);
                self.navigate(Page::Map).await;
            }
            Action::Reject { request_id } => self.reject_request(request_id).await,
            Action::Assign {
                request_id,
                officer_id,
                ..
            } => self.assign_request(request_id, officer_id).await,
            Action::DeleteInventory { item_id } => self.delete_inventory_item(item_id).await,
        }
    }

    async fn assign_request(&mut self, request_id: i64, officer_id: i64) {
        let payload = AssignPayload {
            request_id,
            officer_id,
        };
        match self.api.assign_request(&payload).await {
            Ok(()) => {
                tracing::info!("Request #{} assigned to officer {}", request_id, officer_id);
                self.prompt.alert(&format!(
                    "Request #{} successfully APPROVED and assigned!",
                    request_id
                ));
                self.navigate(Page::Allocation).await;
            }
            Err(e) => {
                tracing::error!("Assignment error for request #{}: {}", request_id, e);
                self.prompt
                    .alert(&format!("Assignment Error: {}", e.user_message()));
            }
        }
    }

    async fn reject_request(&mut self, request_id: i64) {
        match self.api.reject_request(&RejectPayload { request_id }).await {
            Ok(()) => {
                tracing::info!("Request #{} rejected", request_id);
                self.prompt
                    .alert(&format!("Request #{} successfully REJECTED.", request_id));
                self.fetch_pending_requests().await;
            }
            Err(e) => {
                tracing::error!("Rejection failed for request #{}: {}", request_id, e);
                self.prompt
                    .alert(&format!("Rejection Error: {}", e.user_message()));
            }
        }
    }

    async fn delete_inventory_item(&mut self, item_id: i64) {
        match self.api.delete_inventory_item(item_id).await {
            Ok(()) => {
                tracing::info!("Inventory item #{} deleted", item_id);
                self.prompt.alert("Inventory item deleted successfully!");
                self.fetch_inventory().await;
            }
            Err(e) => {
                tracing::error!("Delete inventory error for item #{}: {}", item_id, e);
                self.prompt
                    .alert(&format!("Error deleting item: {}", e.user_message()));
            }
        }
    }

    /// Submits the new-request form.
    pub async fn submit_request_form(&mut self) {
        let payload = match forms::request_payload(&self.view.request_form, self.config.submitter_id)
        {
            Ok(payload) => payload,
            Err(e) => {
                self.prompt.alert(&e.user_message());
                return;
            }
        };

        match self.api.submit_request(&payload).await {
            Ok(()) => {
                tracing::info!(
                    "Request submitted: {} x{} at {}",
                    payload.resource_type,
                    payload.quantity,
                    payload.location
                );
                self.prompt
                    .alert("Request successfully submitted! Awaiting Commander approval.");
                self.view.request_form = Default::default();
                self.navigate(Page::Allocation).await;
            }
            Err(e) => {
                tracing::error!("Submission error: {}", e);
                self.prompt
                    .alert(&format!("Error submitting request: {}", e.user_message()));
            }
        }
    }

    /// Submits the add-inventory form.
    pub async fn submit_inventory_form(&mut self) {
        let payload = match forms::inventory_payload(&self.view.inventory_form) {
            Ok(payload) => payload,
            Err(e) => {
                self.prompt.alert(&e.user_message());
                return;
            }
        };

        match self.api.create_inventory_item(&payload).await {
            Ok(()) => {
                tracing::info!("Inventory item added: {}", payload.name);
                self.prompt.alert("Inventory item added successfully!");
                self.view.inventory_form = Default::default();
                self.fetch_inventory().await;
            }
            Err(e) => {
                tracing::error!("Add inventory error: {}", e);
                self.prompt
                    .alert(&format!("Error adding item: {}", e.user_message()));
            }
        }
    }
}
