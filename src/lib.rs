//! carta: terminal-driven management of a priced menu catalog persisted as JSON.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

pub use app::AppContext;
pub use domain::{AppError, Catalog, Config, MenuItem};
