use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::common::Resource;
use crate::shared::validation::{check_letters_only, check_required, FieldErrors, Validate};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Customer {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    pub name: String,
    pub contact: String,

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

impl Resource for Customer {
    fn collection_name() -> &'static str {
        "customers"
    }

    fn element_name() -> &'static str {
        "Customer"
    }

    fn list_name() -> &'static str {
        "Customers"
    }

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn search_text(&self) -> &str {
        &self.name
    }
}

impl Validate for Customer {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        check_required(&mut errors, "name", &self.name, "Name");
        if errors.get("name").is_none() {
            check_letters_only(&mut errors, "name", &self.name, "Name");
        }
        check_required(&mut errors, "contact", &self.contact, "Contact");
        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_must_be_letters_only() {
        let customer = Customer {
            name: "Ana 99".into(),
            contact: "555-1234".into(),
            ..Default::default()
        };
        let errors = customer.validate().unwrap_err();
        assert!(errors.get("name").is_some());
    }

    #[test]
    fn accepts_accented_names() {
        let customer = Customer {
            name: "María José".into(),
            contact: "555-1234".into(),
            ..Default::default()
        };
        assert!(customer.validate().is_ok());
    }
}
