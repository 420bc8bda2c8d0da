pub mod inventory;
pub mod nullable;
pub mod request;

pub use inventory::*;
pub use request::*;

use serde::{Deserialize, Serialize};

/// Aggregate total per resource category, used by the distribution chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceCount {
    pub category: String,
    pub total: i64,
}
