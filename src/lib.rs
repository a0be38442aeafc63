pub mod config;
pub mod errors;
pub mod forms;
pub mod handlers;
pub mod models;
pub mod store;
pub mod utils;
pub mod views;
