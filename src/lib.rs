pub mod batch;
pub mod config;
pub mod error;
pub mod genius;
pub mod lyrics;
pub mod models;
