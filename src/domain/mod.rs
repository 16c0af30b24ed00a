//! Domain model: the menu catalog, its configuration, and error taxonomy.

pub mod catalog;
pub mod config;
pub mod error;
pub mod validation;

pub use catalog::{Catalog, MenuItem};
pub use config::Config;
pub use error::AppError;
