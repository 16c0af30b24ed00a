use std::io;

use thiserror::Error;

/// Library-wide error type for carta operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// User-supplied price did not parse as a number.
    #[error("Invalid price '{0}'. Please enter a valid number.")]
    InvalidPrice(String),

    /// User-supplied item ID did not parse as a positive integer.
    #[error("Invalid ID '{0}'. Please enter a valid number.")]
    InvalidId(String),

    /// No item with the given ID exists in the catalog.
    #[error("Item with ID {0} not found.")]
    ItemNotFound(u64),

    /// Catalog file could not be read or decoded.
    #[error("Failed to read menu from {path}: {details}")]
    CatalogRead { path: String, details: String },

    /// Catalog file could not be written. The run cannot guarantee its
    /// state was persisted, so this is fatal to the process.
    #[error("Failed to save menu to {path}: {details}")]
    CatalogSave { path: String, details: String },

    /// Terminal prompt interaction failed.
    #[error("Prompt failed: {0}")]
    Prompt(String),

    /// Malformed carta.toml.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),
}

impl AppError {
    /// Errors the menu loop handles in place: the operation is aborted,
    /// a one-line message is shown, and the loop continues.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            AppError::InvalidPrice(_)
                | AppError::InvalidId(_)
                | AppError::ItemNotFound(_)
                | AppError::CatalogRead { .. }
        )
    }
}
