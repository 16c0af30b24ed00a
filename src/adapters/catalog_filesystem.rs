use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::{AppError, MenuItem};
use crate::ports::CatalogStore;

/// Filesystem-backed catalog store: one JSON document holding the full
/// item sequence, rewritten wholesale on every save.
#[derive(Debug, Clone)]
pub struct FilesystemCatalogStore {
    path: PathBuf,
}

impl FilesystemCatalogStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_error(&self, details: impl ToString) -> AppError {
        AppError::CatalogRead {
            path: self.path.display().to_string(),
            details: details.to_string(),
        }
    }

    fn save_error(&self, details: impl ToString) -> AppError {
        AppError::CatalogSave {
            path: self.path.display().to_string(),
            details: details.to_string(),
        }
    }
}

impl CatalogStore for FilesystemCatalogStore {
    fn load(&self) -> Result<Option<Vec<MenuItem>>, AppError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&self.path).map_err(|err| self.read_error(err))?;
        let items = serde_json::from_str(&content).map_err(|err| self.read_error(err))?;
        Ok(Some(items))
    }

    fn save(&self, items: &[MenuItem]) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|err| self.save_error(err))?;
            }
        }
        let content = serde_json::to_string(items).map_err(|err| self.save_error(err))?;
        fs::write(&self.path, content).map_err(|err| self.save_error(err))
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
