//! Delegated click handling.
//!
//! Rows are replaced wholesale on every render, so the console listens once at
//! the document level. A click arrives as the element path from the document
//! down to the target; the nearest element carrying a registered action class
//! decides the action, and its `data-*` attributes supply the payload.

use thiserror::Error;

use crate::view::Element;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    Triage,
    Reject,
    AssignUrgent,
    AssignFromMap,
    DeleteInventory,
}

/// Button class to action binding.
pub const ACTION_TABLE: &[(&str, ActionKind)] = &[
    ("btn-map-triage", ActionKind::Triage),
    ("btn-reject", ActionKind::Reject),
    ("assign-urgent", ActionKind::AssignUrgent),
    ("btn-map-assign", ActionKind::AssignFromMap),
    ("btn-inventory-delete", ActionKind::DeleteInventory),
];

#[derive(Debug, Clone, PartialEq)]
pub struct TriageContext {
    pub request_id: i64,
    pub location: String,
    pub resource_type: String,
    pub quantity: i64,
}

/// Which button an assignment came from; only the confirmation text differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignOrigin {
    UrgentList,
    MapPopup,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Triage(TriageContext),
    Reject {
        request_id: i64,
    },
    Assign {
        request_id: i64,
        officer_id: i64,
        origin: AssignOrigin,
    },
    DeleteInventory {
        item_id: i64,
    },
}

impl Action {
    /// Text of the confirmation step, `None` for non-mutating actions.
    pub fn confirmation(&self) -> Option<String> {
        match self {
            Action::Triage(_) => None,
            Action::Reject { request_id } => Some(format!(
                "Are you sure you want to REJECT Request #{}?",
                request_id
            )),
            Action::Assign {
                request_id,
                officer_id,
                origin: AssignOrigin::UrgentList,
            } => Some(format!(
                "Approve and Assign Urgent Request #{} to Officer {}?",
                request_id, officer_id
            )),
            Action::Assign {
                request_id,
                officer_id,
                origin: AssignOrigin::MapPopup,
            } => Some(format!(
                "Confirm assignment of Request #{} to Officer {}?",
                request_id, officer_id
            )),
            Action::DeleteInventory { item_id } => Some(format!(
                "Are you sure you want to permanently DELETE item #{}?",
                item_id
            )),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DispatchError {
    #[error(".{class} is missing data-{attribute}")]
    MissingAttribute { class: String, attribute: String },

    #[error(".{class} has invalid data-{attribute}='{value}'")]
    InvalidAttribute {
        class: String,
        attribute: String,
        value: String,
    },
}

/// Resolves a click path (outermost first) to an action.
///
/// Returns `Ok(None)` when the click did not land inside any action button.
pub fn resolve(path: &[Element]) -> Result<Option<Action>, DispatchError> {
    for element in path.iter().rev() {
        if let Some((class, kind)) = ACTION_TABLE
            .iter()
            .find(|(class, _)| element.has_class(class))
        {
            return build(kind, class, element).map(Some);
        }
    }
    Ok(None)
}

fn build(kind: &ActionKind, class: &str, el: &Element) -> Result<Action, DispatchError> {
    Ok(match kind {
        ActionKind::Triage => Action::Triage(TriageContext {
            request_id: int_attr(el, class, "id")?,
            location: str_attr(el, class, "location")?.to_string(),
            resource_type: str_attr(el, class, "resource")?.to_string(),
            quantity: int_attr(el, class, "quantity")?,
        }),
        ActionKind::Reject => Action::Reject {
            request_id: int_attr(el, class, "id")?,
        },
        ActionKind::AssignUrgent => assign(el, class, AssignOrigin::UrgentList)?,
        ActionKind::AssignFromMap => assign(el, class, AssignOrigin::MapPopup)?,
        ActionKind::DeleteInventory => Action::DeleteInventory {
            item_id: int_attr(el, class, "id")?,
        },
    })
}

fn assign(el: &Element, class: &str, origin: AssignOrigin) -> Result<Action, DispatchError> {
    Ok(Action::Assign {
        request_id: int_attr(el, class, "id")?,
        officer_id: int_attr(el, class, "officer")?,
        origin,
    })
}

fn str_attr<'a>(el: &'a Element, class: &str, name: &str) -> Result<&'a str, DispatchError> {
    el.data_attr(name)
        .ok_or_else(|| DispatchError::MissingAttribute {
            class: class.to_string(),
            attribute: name.to_string(),
        })
}

fn int_attr(el: &Element, class: &str, name: &str) -> Result<i64, DispatchError> {
    let raw = str_attr(el, class, name)?;
    raw.trim()
        .parse()
        .map_err(|_| DispatchError::InvalidAttribute {
            class: class.to_string(),
            attribute: name.to_string(),
            value: raw.to_string(),
        })
}
