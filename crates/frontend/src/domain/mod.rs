pub mod customers;
pub mod orders;
pub mod purchases;
pub mod sales;
pub mod suppliers;
pub mod supplies;
pub mod supply_categories;
