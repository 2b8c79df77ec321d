pub mod dashboard;
pub mod product_form;
pub mod products;
