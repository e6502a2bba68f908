pub mod common;
pub mod customers;
pub mod orders;
pub mod products;
pub mod purchases;
pub mod sales;
pub mod suppliers;
pub mod supplies;
pub mod supply_categories;
