use serde::{Deserialize, Serialize};

use crate::domain::common::Resource;

/// Sellable product, referenced by order line items.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Product {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    pub name: String,

    #[serde(default)]
    pub price: f64,
}

impl Resource for Product {
    fn collection_name() -> &'static str {
        "products"
    }

    fn element_name() -> &'static str {
        "Product"
    }

    fn list_name() -> &'static str {
        "Products"
    }

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn search_text(&self) -> &str {
        &self.name
    }
}
