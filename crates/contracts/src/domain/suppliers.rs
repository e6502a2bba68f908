use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::common::Resource;
use crate::shared::validation::{check_required, FieldErrors, Validate};

/// A supplier of raw materials, keyed by the backend-assigned numeric id.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Supplier {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    pub name: String,
    pub contact: String,

    /// Assigned account advisor; the backend accepts an empty string.
    #[serde(default)]
    pub advisor: String,

    #[serde(
        default,
        rename = "createdAt",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(
        default,
        rename = "updatedAt",
        skip_serializing_if = "Option::is_none"
    )]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Resource for Supplier {
    fn collection_name() -> &'static str {
        "suppliers"
    }

    fn element_name() -> &'static str {
        "Supplier"
    }

    fn list_name() -> &'static str {
        "Suppliers"
    }

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn search_text(&self) -> &str {
        &self.name
    }
}

impl Validate for Supplier {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        check_required(&mut errors, "name", &self.name, "Name");
        check_required(&mut errors, "contact", &self.contact, "Contact");
        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_requires_name_and_contact() {
        let supplier = Supplier::default();
        let errors = supplier.validate().unwrap_err();
        assert!(errors.get("name").is_some());
        assert!(errors.get("contact").is_some());
        assert!(errors.get("advisor").is_none());
    }

    #[test]
    fn validate_accepts_missing_advisor() {
        let supplier = Supplier {
            name: "Flour Mills".into(),
            contact: "555-0101".into(),
            ..Default::default()
        };
        assert!(supplier.validate().is_ok());
    }

    #[test]
    fn deserializes_backend_row() {
        let json = r#"{
            "id": 7,
            "name": "Flour Mills",
            "contact": "555-0101",
            "advisor": "Rey",
            "createdAt": "2026-01-05T10:00:00Z",
            "updatedAt": "2026-01-06T09:30:00Z"
        }"#;
        let supplier: Supplier = serde_json::from_str(json).unwrap();
        assert_eq!(supplier.id, Some(7));
        assert_eq!(supplier.search_text(), "Flour Mills");
        assert!(supplier.created_at.is_some());
    }
}
