// Per-tab session storage carrying triage context into the map view.

use std::collections::BTreeMap;

use crate::dispatch::TriageContext;

pub const TRIAGE_REQUEST_ID: &str = "triageRequestID";
pub const TRIAGE_REQUEST_LOCATION: &str = "triageRequestLocation";
pub const TRIAGE_RESOURCE_TYPE: &str = "triageResourceType";
pub const TRIAGE_QUANTITY: &str = "triageQuantity";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionStore {
    entries: BTreeMap<String, String>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_item(&mut self, key: &str, value: impl Into<String>) {
        self.entries.insert(key.to_string(), value.into());
    }

    pub fn get_item(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    #[cfg(test)]
    pub fn remove_item(&mut self, key: &str) -> Option<String> {
        self.entries.remove(key)
    }

    pub fn store_triage(&mut self, ctx: &TriageContext) {
        self.set_item(TRIAGE_REQUEST_ID, ctx.request_id.to_string());
        self.set_item(TRIAGE_REQUEST_LOCATION, ctx.location.as_str());
        self.set_item(TRIAGE_RESOURCE_TYPE, ctx.resource_type.as_str());
        self.set_item(TRIAGE_QUANTITY, ctx.quantity.to_string());
    }

    /// The stored triage context, if all four keys are present and valid.
    pub fn triage(&self) -> Option<TriageContext> {
        Some(TriageContext {
            request_id: self.get_item(TRIAGE_REQUEST_ID)?.parse().ok()?,
            location: self.get_item(TRIAGE_REQUEST_LOCATION)?.to_string(),
            resource_type: self.get_item(TRIAGE_RESOURCE_TYPE)?.to_string(),
            quantity: self.get_item(TRIAGE_QUANTITY)?.parse().ok()?,
        })
    }
}
