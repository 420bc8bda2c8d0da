use chrono::{DateTime, Local, Utc};

use super::{full_width_row, icon, or_na};
use crate::models::Request;
use crate::view::{Element, Node};

pub const ALLOCATION_COLUMNS: usize = 8;
pub const UNASSIGNED: &str = "Unassigned";

pub fn allocation_rows(requests: &[Request]) -> Vec<Node> {
    if requests.is_empty() {
        return vec![full_width_row(
            ALLOCATION_COLUMNS,
            Element::new("span").text("No pending requests requiring approval."),
        )
        .into()];
    }
    requests.iter().map(|req| allocation_row(req).into()).collect()
}

pub fn allocation_row(req: &Request) -> Element {
    let location = or_na(&req.location);
    let resource_type = or_na(&req.resource_type);
    let status = or_na(&req.status);
    let created = req
        .created_at
        .map(created_date)
        .unwrap_or_else(|| super::NOT_AVAILABLE.to_string());
    let assigned = req
        .assigned_to_id
        .map(|id| id.to_string())
        .unwrap_or_else(|| UNASSIGNED.to_string());

    let triage = Element::new("button")
        .class("action-btn btn-edit btn-map-triage")
        .data("id", req.id)
        .data("location", location)
        .data("resource", resource_type)
        .data("quantity", req.quantity)
        .child(icon("fas fa-map-marker-alt"))
        .text(" Triage Map");
    let reject = Element::new("button")
        .class("action-btn btn-delete btn-reject")
        .data("id", req.id)
        .child(icon("fas fa-times"))
        .text(" Reject");

    Element::new("tr")
        .child(Element::new("td").text(format!("#REQ-{}", req.id)))
        .child(Element::new("td").text(location))
        .child(Element::new("td").text(resource_type))
        .child(Element::new("td").text(req.quantity.to_string()))
        .child(
            Element::new("td").child(Element::new("span").class("priority-medium").text(status)),
        )
        .child(Element::new("td").text(created))
        .child(Element::new("td").text(assigned))
        .child(Element::new("td").child(triage).child(reject))
}

/// Creation date as shown in the table, in the viewer's local time zone.
pub fn created_date(created_at: DateTime<Utc>) -> String {
    created_at.with_timezone(&Local).format("%m/%d/%Y").to_string()
}

pub fn allocation_error(message: &str) -> Vec<Node> {
    vec![full_width_row(
        ALLOCATION_COLUMNS,
        Element::new("span")
            .attr("style", "color: var(--accent);")
            .child(icon("fas fa-exclamation-triangle"))
            .text(format!(" {}", message)),
    )
    .into()]
}
