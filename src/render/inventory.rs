use super::{full_width_row, icon, NOT_AVAILABLE};
use crate::models::InventoryItem;
use crate::view::{Element, Node};

pub const INVENTORY_COLUMNS: usize = 6;

pub fn inventory_rows(items: &[InventoryItem]) -> Vec<Node> {
    if items.is_empty() {
        return vec![full_width_row(
            INVENTORY_COLUMNS,
            Element::new("span").text("No inventory items found."),
        )
        .into()];
    }
    items.iter().map(|item| inventory_row(item).into()).collect()
}

pub fn inventory_row(item: &InventoryItem) -> Element {
    let quantity = item.quantity_available.unwrap_or(0);
    let status = item.status.as_deref().unwrap_or(NOT_AVAILABLE);
    let location = item.location.as_deref().unwrap_or(NOT_AVAILABLE);

    Element::new("tr")
        .child(Element::new("td").text(item.name.as_str()))
        .child(Element::new("td").text(item.category.as_str()))
        .child(Element::new("td").text(quantity.to_string()))
        .child(Element::new("td").text(location))
        .child(
            Element::new("td")
                .child(
                    Element::new("span")
                        .class("status-indicator")
                        .class(item.severity().css_class()),
                )
                .text(format!(" {}", status)),
        )
        .child(
            Element::new("td")
                .child(
                    Element::new("button")
                        .class("action-btn btn-edit")
                        .child(icon("fas fa-edit")),
                )
                .child(
                    Element::new("button")
                        .class("action-btn btn-delete btn-inventory-delete")
                        .data("id", item.id)
                        .child(icon("fas fa-trash")),
                ),
        )
}

pub fn inventory_error(message: &str) -> Vec<Node> {
    vec![full_width_row(
        INVENTORY_COLUMNS,
        Element::new("span")
            .attr("style", "color: var(--accent);")
            .child(icon("fas fa-exclamation-triangle"))
            .text(format!(" {}", message)),
    )
    .into()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::fake::item;

    fn cell_text(row: &Element, index: usize) -> String {
        row.children
            .iter()
            .filter_map(Node::as_element)
            .nth(index)
            .map(Element::text_content)
            .unwrap_or_default()
    }

    fn severity_class(row: &Element) -> String {
        let mut found = Vec::new();
        row.find_by_class("status-indicator", &mut found);
        found[0].classes[1].clone()
    }

    #[test]
    fn test_null_fields_unwrap_to_defaults() {
        let row = inventory_row(&item(1, "Diesel", "Fuel"));
        assert_eq!(cell_text(&row, 2), "0");
        assert_eq!(cell_text(&row, 3), "N/A");
        assert_eq!(cell_text(&row, 4), " N/A");
        assert_eq!(severity_class(&row), "status-adequate");
    }

    #[test]
    fn test_severity_classes() {
        let mut low = item(2, "Bandages", "Medical");
        low.status = Some("Low".to_string());
        low.quantity_available = Some(12);
        low.location = Some("Northern Base".to_string());
        let row = inventory_row(&low);
        assert_eq!(severity_class(&row), "status-low");
        assert_eq!(cell_text(&row, 2), "12");
        assert_eq!(cell_text(&row, 3), "Northern Base");

        let mut critical = item(3, "Rounds", "Weapons");
        critical.status = Some("Critical".to_string());
        assert_eq!(severity_class(&inventory_row(&critical)), "status-critical");

        let mut other = item(4, "Tents", "Shelter");
        other.status = Some("Surplus".to_string());
        assert_eq!(severity_class(&inventory_row(&other)), "status-adequate");
    }

    #[test]
    fn test_delete_button_carries_id() {
        let row = inventory_row(&item(77, "Water", "Food"));
        let mut found = Vec::new();
        row.find_by_class("btn-inventory-delete", &mut found);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].data_attr("id"), Some("77"));
    }

    #[test]
    fn test_empty_state() {
        let rows = inventory_rows(&[]);
        assert_eq!(rows.len(), 1);
        let html = rows[0].to_html();
        assert!(html.contains("colspan=\"6\""));
        assert!(html.contains("No inventory items found."));
    }
}
