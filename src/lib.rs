pub mod booking;
pub mod carousel;
pub mod config;
pub mod data;
pub mod error;
pub mod export;
pub mod filters;
pub mod models;
pub mod roles;
pub mod ui;

pub use error::{AppError, Result};
