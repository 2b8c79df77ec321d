pub mod auth;
pub mod cart;
pub mod catalog;
pub mod configurator;
pub mod ui;
