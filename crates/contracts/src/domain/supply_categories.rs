use serde::{Deserialize, Serialize};

use crate::domain::common::Resource;
use crate::shared::validation::{check_required, FieldErrors, Validate};

/// Grouping for inventory supplies (e.g. dairy, flours, packaging).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SupplyCategory {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    pub name: String,

    #[serde(default)]
    pub description: String,
}

impl Resource for SupplyCategory {
    fn collection_name() -> &'static str {
        "supply-categories"
    }

    fn element_name() -> &'static str {
        "Supply category"
    }

    fn list_name() -> &'static str {
        "Supply categories"
    }

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn search_text(&self) -> &str {
        &self.name
    }
}

impl Validate for SupplyCategory {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        check_required(&mut errors, "name", &self.name, "Name");
        check_required(&mut errors, "description", &self.description, "Description");
        errors.into_result()
    }
}
