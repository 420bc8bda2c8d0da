use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::nullable;

/// A resource request as returned by `/requests/pending`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Request {
    #[serde(rename = "ID")]
    pub id: i64,
    #[serde(rename = "ResourceType", default)]
    pub resource_type: String,
    #[serde(rename = "Quantity", default)]
    pub quantity: i64,
    #[serde(rename = "Location", default)]
    pub location: String,
    #[serde(rename = "Status", default)]
    pub status: String,
    #[serde(rename = "RequestedBy", default)]
    pub requested_by: i64,
    #[serde(rename = "AssignedToID", default, deserialize_with = "nullable::int")]
    pub assigned_to_id: Option<i64>,
    #[serde(rename = "CreatedAt", default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "UpdatedAt", default)]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewRequestPayload {
    pub resource_type: String,
    pub quantity: i64,
    pub location: String,
    pub created_by_id: i64,
}

impl NewRequestPayload {
    pub fn is_complete(&self) -> bool {
        !self.resource_type.trim().is_empty()
            && self.quantity > 0
            && !self.location.trim().is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssignPayload {
    pub request_id: i64,
    pub officer_id: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RejectPayload {
    pub request_id: i64,
}
