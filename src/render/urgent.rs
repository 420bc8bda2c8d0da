use super::{icon, or_na};
use crate::models::Request;
use crate::view::{Element, Node};

/// Requests above this quantity are flagged high priority.
pub const URGENCY_THRESHOLD: i64 = 500;

#[derive(Debug, Clone, PartialEq)]
pub struct UrgentView {
    pub items: Vec<Node>,
    pub badge: String,
    pub count: usize,
}

pub fn is_urgent(req: &Request) -> bool {
    req.quantity > URGENCY_THRESHOLD
}

pub fn urgent_list(requests: &[Request], officer_id: i64) -> UrgentView {
    let urgent: Vec<&Request> = requests.iter().filter(|r| is_urgent(r)).collect();

    if urgent.is_empty() {
        return UrgentView {
            items: vec![Element::new("li")
                .child(
                    Element::new("div")
                        .attr("style", "color: var(--info);")
                        .text("No urgent requests at this time."),
                )
                .into()],
            badge: "0 New".to_string(),
            count: 0,
        };
    }

    UrgentView {
        items: urgent
            .iter()
            .map(|req| urgent_item(req, officer_id).into())
            .collect(),
        badge: format!("{} New", urgent.len()),
        count: urgent.len(),
    }
}

fn urgent_item(req: &Request, officer_id: i64) -> Element {
    let location = or_na(&req.location);
    let resource_type = or_na(&req.resource_type);

    Element::new("li")
        .class("request-item")
        .child(
            Element::new("div")
                .class("request-title")
                .text(format!("{} - Qty {}", resource_type, req.quantity)),
        )
        .child(
            Element::new("div")
                .class("request-details")
                .child(Element::new("span").text(format!("Location: {}", location)))
                .child(Element::new("span").class("priority-high").text("High Priority"))
                .child(
                    Element::new("button")
                        .class("btn btn-primary btn-sm btn-map-triage")
                        .data("id", req.id)
                        .data("location", location)
                        .data("resource", resource_type)
                        .data("quantity", req.quantity)
                        .text("Triage Map"),
                )
                .child(
                    Element::new("button")
                        .class("btn btn-success btn-sm assign-urgent")
                        .data("id", req.id)
                        .data("officer", officer_id)
                        .text(format!("Assign Officer {}", officer_id)),
                )
                .child(
                    Element::new("button")
                        .class("btn btn-secondary btn-sm btn-reject")
                        .data("id", req.id)
                        .text("Reject"),
                ),
        )
}

pub fn urgent_error(message: &str) -> Vec<Node> {
    vec![Element::new("li")
        .child(
            Element::new("div")
                .attr("style", "color: var(--accent);")
                .child(icon("fas fa-times-circle"))
                .text(format!(" {}", message)),
        )
        .into()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::fake::request;

    #[test]
    fn test_threshold_is_strict() {
        let requests = vec![
            request(1, "Food", 500, "Headquarters"),
            request(2, "Fuel", 501, "Eastern Depot"),
            request(3, "Medical", 1200, "Jogiwala"),
            request(4, "Weapons", 20, "Leh"),
        ];
        let view = urgent_list(&requests, 4);
        assert_eq!(view.count, 2);
        assert_eq!(view.items.len(), 2);
        assert_eq!(view.badge, "2 New");
        assert!(view.items[0].to_html().contains("Fuel - Qty 501"));
        assert!(view.items[1].to_html().contains("Medical - Qty 1200"));
    }

    #[test]
    fn test_empty_state_is_explicit() {
        let view = urgent_list(&[request(1, "Food", 10, "Dehradun")], 4);
        assert_eq!(view.count, 0);
        assert_eq!(view.badge, "0 New");
        assert_eq!(view.items.len(), 1);
        assert!(view.items[0]
            .to_html()
            .contains("No urgent requests at this time."));
    }

    #[test]
    fn test_item_buttons() {
        let view = urgent_list(&[request(8, "Fuel", 900, "Western Camp")], 4);
        let li = view.items[0].as_element().unwrap();

        let mut assign = Vec::new();
        li.find_by_class("assign-urgent", &mut assign);
        assert_eq!(assign[0].data_attr("id"), Some("8"));
        assert_eq!(assign[0].data_attr("officer"), Some("4"));

        let mut triage = Vec::new();
        li.find_by_class("btn-map-triage", &mut triage);
        assert_eq!(triage[0].data_attr("location"), Some("Western Camp"));

        let mut reject = Vec::new();
        li.find_by_class("btn-reject", &mut reject);
        assert_eq!(reject.len(), 1);
    }

    #[test]
    fn test_badge_matches_filtered_length() {
        let requests: Vec<_> = (0..10)
            .map(|i| request(i, "Food", i * 120, "Headquarters"))
            .collect();
        let view = urgent_list(&requests, 4);
        let expected = requests.iter().filter(|r| r.quantity > 500).count();
        assert_eq!(view.count, expected);
        assert_eq!(view.badge, format!("{} New", expected));
    }
}
