use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::common::Resource;
use crate::domain::customers::Customer;
use crate::shared::validation::{check_positive, FieldErrors, Validate};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SaleStatus {
    #[default]
    Pending,
    InPreparation,
    Completed,
}

impl SaleStatus {
    pub const ALL: [SaleStatus; 3] = [
        SaleStatus::Pending,
        SaleStatus::InPreparation,
        SaleStatus::Completed,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SaleStatus::Pending => "Pending",
            SaleStatus::InPreparation => "In preparation",
            SaleStatus::Completed => "Completed",
        }
    }

    /// Wire value, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            SaleStatus::Pending => "pending",
            SaleStatus::InPreparation => "in_preparation",
            SaleStatus::Completed => "completed",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|s| s.as_str() == value)
    }
}

/// One product line inside a sale.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SaleItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    pub product_id: i64,
    pub quantity: i64,
    pub unit_price: f64,
}

/// A product sale to a customer, with embedded line items. Same embedding
/// contract as orders: the customer row rides along in GET responses only.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Sale {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sale_date: Option<NaiveDate>,

    #[serde(default)]
    pub status: SaleStatus,

    #[serde(default)]
    pub paid: bool,

    #[serde(default)]
    pub items: Vec<SaleItem>,

    #[serde(default, skip_serializing)]
    pub customer: Option<Customer>,
}

impl Sale {
    pub fn customer_name(&self) -> &str {
        self.customer.as_ref().map(|c| c.name.as_str()).unwrap_or("")
    }

    pub fn total(&self) -> f64 {
        self.items
            .iter()
            .map(|i| i.quantity as f64 * i.unit_price)
            .sum()
    }
}

impl Resource for Sale {
    fn collection_name() -> &'static str {
        "sales"
    }

    fn element_name() -> &'static str {
        "Sale"
    }

    fn list_name() -> &'static str {
        "Sales"
    }

    fn id(&self) -> Option<i64> {
        self.id
    }

    // Sale lists filter by the embedded customer's name.
    fn search_text(&self) -> &str {
        self.customer_name()
    }
}

impl Validate for Sale {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        if self.customer_id.is_none() {
            errors.push("customer_id", "Select a customer".to_string());
        }
        if self.sale_date.is_none() {
            errors.push("sale_date", "Sale date is required".to_string());
        }
        if self.items.is_empty() {
            errors.push("items", "Add at least one product line".to_string());
        }
        for item in &self.items {
            check_positive(&mut errors, "items", item.quantity, "Quantity");
            if item.product_id <= 0 {
                errors.push("items", "Every line needs a product".to_string());
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

    fn valid_sale() -> Sale {
        Sale {
            customer_id: Some(1),
            sale_date: NaiveDate::from_ymd_opt(2026, 8, 20),
            items: vec![SaleItem {
                id: None,
                product_id: 3,
                quantity: 2,
                unit_price: 9.5,
            }],
            ..Default::default()
        }
    }

    #[test]
    fn validate_requires_customer_date_and_items() {
        let errors = Sale::default().validate().unwrap_err();
        assert!(errors.get("customer_id").is_some());
        assert!(errors.get("sale_date").is_some());
        assert!(errors.get("items").is_some());
        assert!(valid_sale().validate().is_ok());
    }

    #[test]
    fn validate_rejects_zero_quantity_and_negative_price() {
        let mut sale = valid_sale();
        sale.items[0].quantity = 0;
        assert!(sale.validate().unwrap_err().get("items").is_some());

        let mut sale = valid_sale();
        sale.items[0].unit_price = -1.0;
        assert!(sale.validate().unwrap_err().get("items").is_some());
    }

    #[test]
    fn status_round_trips_over_the_wire() {
        for status in SaleStatus::ALL {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.as_str()));
            assert_eq!(SaleStatus::from_str(status.as_str()), Some(status));
        }
    }

    #[test]
    fn embedded_customer_is_not_serialized_back() {
        let mut sale = valid_sale();
        sale.customer = Some(Customer {
            name: "Ana".into(),
            ..Default::default()
        });
        let json = serde_json::to_value(&sale).unwrap();
        assert!(json.get("customer").is_none());
        assert_eq!(sale.search_text(), "Ana");
    }
}
