pub mod admin;
pub mod cart;
pub mod checkout;
pub mod customizer;
pub mod login;
pub mod not_found;
pub mod product_detail;
pub mod shop;
