use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::common::Resource;
use crate::domain::customers::Customer;
use crate::shared::validation::{check_positive, FieldErrors, Validate};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    #[default]
    Pending,
    InProgress,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 4] = [
        OrderStatus::Pending,
        OrderStatus::InProgress,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::InProgress => "In progress",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
        }
    }

    /// Wire value, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::InProgress => "in_progress",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|s| s.as_str() == value)
    }
}

/// One product line inside an order. Lives only embedded in its parent; the
/// backend persists it when the order is saved.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct OrderItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    pub product_id: i64,
    pub quantity: i64,
}

/// A customer order. The backend embeds the customer row and the line items
/// in every GET response; both travel back on save (items are authoritative,
/// the embedded customer is ignored server-side).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Order {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_date: Option<NaiveDate>,

    #[serde(default)]
    pub status: OrderStatus,

    #[serde(default)]
    pub paid: bool,

    #[serde(default)]
    pub items: Vec<OrderItem>,

    #[serde(default, skip_serializing)]
    pub customer: Option<Customer>,
}

impl Order {
    pub fn customer_name(&self) -> &str {
        self.customer.as_ref().map(|c| c.name.as_str()).unwrap_or("")
    }
}

impl Resource for Order {
    fn collection_name() -> &'static str {
        "orders"
    }

    fn element_name() -> &'static str {
        "Order"
    }

    fn list_name() -> &'static str {
        "Orders"
    }

    fn id(&self) -> Option<i64> {
        self.id
    }

    // Order lists filter by the embedded customer's name.
    fn search_text(&self) -> &str {
        self.customer_name()
    }
}

impl Validate for Order {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        if self.customer_id.is_none() {
            errors.push("customer_id", "Select a customer".to_string());
        }
        if self.delivery_date.is_none() {
            errors.push("delivery_date", "Delivery date is required".to_string());
        }
        if self.items.is_empty() {
            errors.push("items", "Add at least one product line".to_string());
        }
        for item in &self.items {
            check_positive(&mut errors, "items", item.quantity, "Quantity");
            if item.product_id <= 0 {
                errors.push("items", "Every line needs a product".to_string());
            }
        }
        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_order() -> Order {
        Order {
            customer_id: Some(4),
            delivery_date: NaiveDate::from_ymd_opt(2026, 9, 1),
            items: vec![OrderItem {
                id: None,
                product_id: 2,
                quantity: 10,
            }],
            ..Default::default()
        }
    }

    #[test]
    fn validate_requires_customer_date_and_items() {
        let errors = Order::default().validate().unwrap_err();
        assert!(errors.get("customer_id").is_some());
        assert!(errors.get("delivery_date").is_some());
        assert!(errors.get("items").is_some());
        assert!(valid_order().validate().is_ok());
    }

    #[test]
    fn validate_rejects_zero_quantity_line() {
        let mut order = valid_order();
        order.items[0].quantity = 0;
        assert!(order.validate().unwrap_err().get("items").is_some());
    }

    #[test]
    fn status_round_trips_over_the_wire() {
        for status in OrderStatus::ALL {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.as_str()));
            assert_eq!(OrderStatus::from_str(status.as_str()), Some(status));
        }
    }

    #[test]
    fn embedded_customer_is_not_serialized_back() {
        let mut order = valid_order();
        order.customer = Some(Customer {
            name: "Ana".into(),
            ..Default::default()
        });
        let json = serde_json::to_value(&order).unwrap();
        assert!(json.get("customer").is_none());
        assert_eq!(order.search_text(), "Ana");
    }
}
