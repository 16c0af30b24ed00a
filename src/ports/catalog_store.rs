use crate::domain::{AppError, MenuItem};

/// Persistence seam for the menu catalog.
///
/// `load` returns `Ok(None)` when no catalog has been persisted yet;
/// unreadable or malformed content is an error the caller may recover
/// from by starting empty. `save` rewrites the full item sequence,
/// replacing whatever was stored before.
pub trait CatalogStore {
    fn load(&self) -> Result<Option<Vec<MenuItem>>, AppError>;

    fn save(&self, items: &[MenuItem]) -> Result<(), AppError>;

    /// Human-readable location for user-facing messages.
    fn location(&self) -> String;
}
