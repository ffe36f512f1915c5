pub mod averages;
pub mod config;
pub mod error;
pub mod models;
pub mod store;
pub mod tracker;
pub mod week;
