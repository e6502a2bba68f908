use serde::{Deserialize, Serialize};

use crate::domain::common::Resource;
use crate::domain::supply_categories::SupplyCategory;
use crate::shared::validation::{check_required, FieldErrors, Validate};

/// An inventory supply (raw material) tracked by current stock.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Supply {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    pub name: String,

    /// Unit of measure ("kg", "l", "pcs").
    #[serde(default)]
    pub unit: String,

    /// Current stock in the supply's unit of measure.
    #[serde(default)]
    pub current_stock: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,

    /// Category row embedded by the backend in GET responses; never sent back.
    #[serde(default, skip_serializing)]
    pub category: Option<SupplyCategory>,
}

impl Supply {
    pub fn category_name(&self) -> &str {
        self.category.as_ref().map(|c| c.name.as_str()).unwrap_or("-")
    }
}

impl Resource for Supply {
    fn collection_name() -> &'static str {
        "supplies"
    }

    fn element_name() -> &'static str {
        "Supply"
    }

    fn list_name() -> &'static str {
        "Supplies"
    }

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn search_text(&self) -> &str {
        &self.name
    }
}

impl Validate for Supply {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        check_required(&mut errors, "name", &self.name, "Name");
        check_required(&mut errors, "unit", &self.unit, "Unit");
        if self.current_stock < 0.0 {
            errors.push("current_stock", "Stock cannot be negative".to_string());
        }
        if self.category_id.is_none() {
            errors.push("category_id", "Select a category".to_string());
        }
        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_needs_category_and_non_negative_stock() {
        let supply = Supply {
            name: "Wheat flour".into(),
            current_stock: -1.0,
            ..Default::default()
        };
        let errors = supply.validate().unwrap_err();
        assert!(errors.get("unit").is_some());
        assert!(errors.get("current_stock").is_some());
        assert!(errors.get("category_id").is_some());
    }

    #[test]
    fn embedded_category_is_read_only() {
        let supply = Supply {
            id: Some(3),
            name: "Butter".into(),
            unit: "kg".into(),
            current_stock: 12.5,
            category_id: Some(1),
            category: Some(SupplyCategory {
                id: Some(1),
                name: "Dairy".into(),
                description: String::new(),
            }),
        };
        let json = serde_json::to_value(&supply).unwrap();
        assert!(json.get("category").is_none());
        assert_eq!(supply.category_name(), "Dairy");
    }
}
