use std::sync::LazyLock;

use regex::Regex;

use crate::error::{ConsoleError, ConsoleResult};
use crate::models::{NewInventoryPayload, NewRequestPayload};
use crate::view::{InventoryForm, RequestForm};

/// Leading integer of a number input, e.g. "12abc" -> 12.
static RE_LEADING_INT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*([+-]?\d+)").unwrap());

pub const REQUEST_FORM_INCOMPLETE: &str =
    "Please fill out all required fields: Resource Type, Quantity, and Location.";
pub const INVENTORY_FORM_INCOMPLETE: &str =
    "Please fill out at least Name, Category, and Quantity.";

/// Reads a quantity field; blank or non-numeric input reads as 0.
pub fn parse_quantity(raw: &str) -> i64 {
    RE_LEADING_INT
        .captures(raw)
        .and_then(|caps| caps[1].parse().ok())
        .unwrap_or(0)
}

pub fn request_payload(form: &RequestForm, submitter_id: i64) -> ConsoleResult<NewRequestPayload> {
    let payload = NewRequestPayload {
        resource_type: form.resource_type.trim().to_string(),
        quantity: parse_quantity(&form.quantity),
        location: form.location.trim().to_string(),
        created_by_id: submitter_id,
    };
    if !payload.is_complete() {
        return Err(ConsoleError::Validation(REQUEST_FORM_INCOMPLETE.to_string()));
    }
    Ok(payload)
}

pub fn inventory_payload(form: &InventoryForm) -> ConsoleResult<NewInventoryPayload> {
    let payload = NewInventoryPayload {
        name: form.name.trim().to_string(),
        category: form.category.trim().to_string(),
        quantity: parse_quantity(&form.quantity),
        location: form.location.trim().to_string(),
    };
    if !payload.is_complete() {
        return Err(ConsoleError::Validation(INVENTORY_FORM_INCOMPLETE.to_string()));
    }
    Ok(payload)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("600"), 600);
        assert_eq!(parse_quantity(" 12abc"), 12);
        assert_eq!(parse_quantity("-4"), -4);
        assert_eq!(parse_quantity(""), 0);
        assert_eq!(parse_quantity("ten"), 0);
        assert_eq!(parse_quantity("99999999999999999999999"), 0);
    }

    #[test]
    fn test_request_payload() {
        let form = RequestForm {
            resource_type: "Food".to_string(),
            quantity: "600".to_string(),
            location: "Headquarters".to_string(),
        };
        let payload = request_payload(&form, 5).unwrap();
        assert_eq!(payload.quantity, 600);
        assert_eq!(payload.created_by_id, 5);
    }

    #[test]
    fn test_request_payload_rejects_missing_fields() {
        let mut form = RequestForm {
            resource_type: "Food".to_string(),
            quantity: "0".to_string(),
            location: "Headquarters".to_string(),
        };
        let err = request_payload(&form, 5).unwrap_err();
        assert_eq!(err.user_message(), REQUEST_FORM_INCOMPLETE);

        form.quantity = "10".to_string();
        form.location.clear();
        assert!(request_payload(&form, 5).is_err());
    }

    #[test]
    fn test_inventory_payload() {
        let mut form = InventoryForm {
            name: "Rations".to_string(),
            category: "Food".to_string(),
            quantity: "25".to_string(),
            location: String::new(),
        };
        assert_eq!(inventory_payload(&form).unwrap().quantity, 25);

        form.category = " ".to_string();
        let err = inventory_payload(&form).unwrap_err();
        assert!(matches!(err, ConsoleError::Validation(_)));
    }
}
