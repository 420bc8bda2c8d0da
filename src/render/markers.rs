use crate::geo::resolve_location;
use crate::models::Request;
use crate::session::Marker;
use crate::view::Element;

/// One marker per request whose location resolves. Unresolvable locations are
/// skipped with a warning.
pub fn place_markers(requests: &[Request], officer_id: i64) -> Vec<Marker> {
    requests
        .iter()
        .filter_map(|req| match resolve_location(&req.location) {
            Some(resolved) => Some(Marker {
                request_id: req.id,
                position: resolved.position(),
                popup: marker_popup(req, officer_id),
            }),
            None => {
                tracing::warn!(
                    "Could not parse or find location for request #{}: {}",
                    req.id,
                    req.location
                );
                None
            }
        })
        .collect()
}

fn marker_popup(req: &Request, officer_id: i64) -> Element {
    Element::new("div")
        .class("marker-popup")
        .child(Element::new("b").text(format!("Pending Request #{}", req.id)))
        .child(Element::new("br"))
        .child(Element::new("b").text("Location:"))
        .text(format!(" {}", req.location))
        .child(Element::new("br"))
        .child(Element::new("b").text("Resource:"))
        .text(format!(" {} (Qty: {})", req.resource_type, req.quantity))
        .child(Element::new("hr"))
        .child(Element::new("p").text(format!(
            "Assign this request to Officer {}?",
            officer_id
        )))
        .child(
            Element::new("button")
                .class("btn btn-primary btn-sm btn-map-assign")
                .data("id", req.id)
                .data("officer", officer_id)
                .text("Confirm Assignment"),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::fake::request;
    use crate::geo::LatLng;

    #[test]
    fn test_bad_location_skips_only_that_marker() {
        let requests = vec![
            request(1, "Food", 600, "28.61,77.20"),
            request(2, "Fuel", 90, "Nonexistent Place"),
            request(3, "Medical", 10, "Headquarters"),
        ];
        let markers = place_markers(&requests, 4);
        assert_eq!(markers.len(), 2);
        assert_eq!(markers[0].request_id, 1);
        assert_eq!(markers[0].position, LatLng::new(28.61, 77.20));
        assert_eq!(markers[1].request_id, 3);
        assert_eq!(markers[1].position, LatLng::new(28.6139, 77.2090));
    }

    #[test]
    fn test_popup_assign_button() {
        let markers = place_markers(&[request(5, "Fuel", 700, "Dehradun")], 4);
        let mut buttons = Vec::new();
        markers[0].popup.find_by_class("btn-map-assign", &mut buttons);
        assert_eq!(buttons[0].data_attr("id"), Some("5"));
        assert_eq!(buttons[0].data_attr("officer"), Some("4"));
        assert!(markers[0].popup.text_content().contains("Fuel (Qty: 700)"));
    }
}
