use std::sync::{Arc, Mutex};

use crate::domain::{AppError, MenuItem};
use crate::ports::CatalogStore;

/// In-memory catalog store for testing.
///
/// Holds the serialized JSON document, mirroring what the filesystem
/// store would persist, so malformed content can be injected too.
#[derive(Debug, Clone, Default)]
pub struct MemoryCatalogStore {
    // Arc<Mutex> to allow cloning and shared state inspection
    document: Arc<Mutex<Option<String>>>,
    fail_saves: bool,
}

impl MemoryCatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with a raw JSON document.
    pub fn with_document(document: impl Into<String>) -> Self {
        Self { document: Arc::new(Mutex::new(Some(document.into()))), fail_saves: false }
    }

    /// Store whose saves always fail, for exercising the fatal path.
    pub fn failing() -> Self {
        Self { document: Arc::new(Mutex::new(None)), fail_saves: true }
    }

    /// The last saved document, if any.
    pub fn document(&self) -> Option<String> {
        self.document.lock().unwrap().clone()
    }
}

impl CatalogStore for MemoryCatalogStore {
    fn load(&self) -> Result<Option<Vec<MenuItem>>, AppError> {
        let document = self.document.lock().unwrap();
        match document.as_deref() {
            None => Ok(None),
            Some(content) => serde_json::from_str(content).map(Some).map_err(|err| {
                AppError::CatalogRead { path: self.location(), details: err.to_string() }
            }),
        }
    }

    fn save(&self, items: &[MenuItem]) -> Result<(), AppError> {
        if self.fail_saves {
            return Err(AppError::CatalogSave {
                path: self.location(),
                details: "saving is disabled for this store".to_string(),
            });
        }
        let content = serde_json::to_string(items).map_err(|err| AppError::CatalogSave {
            path: self.location(),
            details: err.to_string(),
        })?;
        *self.document.lock().unwrap() = Some(content);
        Ok(())
    }

    fn location(&self) -> String {
        "<memory>".to_string()
    }
}
