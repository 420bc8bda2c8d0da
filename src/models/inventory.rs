use serde::{Deserialize, Serialize};

use super::nullable;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct InventoryItem {
    #[serde(rename = "ID")]
    pub id: i64,
    #[serde(rename = "Name", default)]
    pub name: String,
    #[serde(rename = "Category", default)]
    pub category: String,
    #[serde(rename = "QuantityAvailable", default, deserialize_with = "nullable::int")]
    pub quantity_available: Option<i64>,
    #[serde(rename = "Status", default, deserialize_with = "nullable::string")]
    pub status: Option<String>,
    #[serde(rename = "Location", default, deserialize_with = "nullable::string")]
    pub location: Option<String>,
    #[serde(rename = "RequestID", default, deserialize_with = "nullable::int")]
    pub request_id: Option<i64>,
}

/// Visual severity derived from the inventory status label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Adequate,
    Low,
    Critical,
}

impl Severity {
    pub fn from_status(status: Option<&str>) -> Self {
        match status {
            Some("Low") => Severity::Low,
            Some("Critical") => Severity::Critical,
            _ => Severity::Adequate,
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Severity::Adequate => "status-adequate",
            Severity::Low => "status-low",
            Severity::Critical => "status-critical",
        }
    }
}

impl InventoryItem {
    pub fn severity(&self) -> Severity {
        Severity::from_status(self.status.as_deref())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewInventoryPayload {
    pub name: String,
    pub category: String,
    pub quantity: i64,
    pub location: String,
}

impl NewInventoryPayload {
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty() && !self.category.trim().is_empty() && self.quantity > 0
    }
}
