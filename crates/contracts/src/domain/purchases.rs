use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::common::Resource;
use crate::domain::suppliers::Supplier;
use crate::shared::validation::{check_positive, check_required, FieldErrors, Validate};

/// One supply line inside a purchase. Lives only embedded in its parent; the
/// backend persists it when the purchase is saved.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PurchaseItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    pub supply_id: i64,
    pub quantity: i64,
    pub unit_price: f64,
}

/// A supply purchase from a supplier. The backend embeds the supplier row and
/// the line items in every GET response; items travel back on save, the
/// embedded supplier does not.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Purchase {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supplier_id: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purchase_date: Option<NaiveDate>,

    /// Free-form progress note ("pending", "received", ...).
    #[serde(default)]
    pub status: String,

    #[serde(default)]
    pub items: Vec<PurchaseItem>,

    #[serde(default, skip_serializing)]
    pub supplier: Option<Supplier>,
}

impl Purchase {
    pub fn supplier_name(&self) -> &str {
        self.supplier.as_ref().map(|s| s.name.as_str()).unwrap_or("")
    }

    pub fn total(&self) -> f64 {
        self.items
            .iter()
            .map(|i| i.quantity as f64 * i.unit_price)
            .sum()
    }
}

impl Resource for Purchase {
    fn collection_name() -> &'static str {
        "purchases"
    }

    fn element_name() -> &'static str {
        "Purchase"
    }

    fn list_name() -> &'static str {
        "Purchases"
    }

    fn id(&self) -> Option<i64> {
        self.id
    }

    // Purchase lists filter by the embedded supplier's name.
    fn search_text(&self) -> &str {
        self.supplier_name()
    }
}

impl Validate for Purchase {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        if self.supplier_id.is_none() {
            errors.push("supplier_id", "Select a supplier".to_string());
        }
        if self.purchase_date.is_none() {
            errors.push("purchase_date", "Purchase date is required".to_string());
        }
        check_required(&mut errors, "status", &self.status, "Status");
        if self.items.is_empty() {
            errors.push("items", "Add at least one supply line".to_string());
        }
        for item in &self.items {
            check_positive(&mut errors, "items", item.quantity, "Quantity");
            if item.supply_id <= 0 {
                errors.push("items", "Every line needs a supply".to_string());
            }
            if item.unit_price < 0.0 {
                errors.push("items", "Unit price cannot be negative".to_string());
            }
        }
        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_purchase() -> Purchase {
        Purchase {
            supplier_id: Some(2),
            purchase_date: NaiveDate::from_ymd_opt(2026, 8, 15),
            status: "pending".into(),
            items: vec![PurchaseItem {
                id: None,
                supply_id: 7,
                quantity: 4,
                unit_price: 2.5,
            }],
            ..Default::default()
        }
    }

    #[test]
    fn validate_requires_supplier_date_and_items() {
        let errors = Purchase::default().validate().unwrap_err();
        assert!(errors.get("supplier_id").is_some());
        assert!(errors.get("purchase_date").is_some());
        assert!(errors.get("items").is_some());
        assert!(valid_purchase().validate().is_ok());
    }

    #[test]
    fn validate_rejects_negative_unit_price() {
        let mut purchase = valid_purchase();
        purchase.items[0].unit_price = -0.01;
        assert!(purchase.validate().unwrap_err().get("items").is_some());
    }

    #[test]
    fn total_sums_quantity_times_unit_price() {
        let mut purchase = valid_purchase();
        purchase.items.push(PurchaseItem {
            id: None,
            supply_id: 8,
            quantity: 2,
            unit_price: 1.25,
        });
        assert_eq!(purchase.total(), 4.0 * 2.5 + 2.0 * 1.25);
    }

    #[test]
    fn embedded_supplier_is_not_serialized_back() {
        let mut purchase = valid_purchase();
        purchase.supplier = Some(Supplier {
            name: "Molinos".into(),
            ..Default::default()
        });
        let json = serde_json::to_value(&purchase).unwrap();
        assert!(json.get("supplier").is_none());
        assert_eq!(purchase.search_text(), "Molinos");
    }
}
