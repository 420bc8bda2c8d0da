// Projections from fetched records to page nodes.

pub mod allocation;
pub mod inventory;
pub mod markers;
pub mod urgent;

pub use allocation::{allocation_error, allocation_rows};
pub use inventory::{inventory_error, inventory_rows};
pub use markers::place_markers;
pub use urgent::{urgent_error, urgent_list, UrgentView, URGENCY_THRESHOLD};

use crate::view::Element;

pub const NOT_AVAILABLE: &str = "N/A";

pub(crate) fn or_na(value: &str) -> &str {
    if value.trim().is_empty() {
        NOT_AVAILABLE
    } else {
        value
    }
}

pub(crate) fn icon(classes: &str) -> Element {
    Element::new("i").class(classes)
}

/// One row spanning the whole table.
pub(crate) fn full_width_row(colspan: usize, content: Element) -> Element {
    Element::new("tr").child(
        Element::new("td")
            .attr("colspan", colspan)
            .attr("style", "text-align: center;")
            .child(content),
    )
}
