use crate::domain::Config;
use crate::ports::CatalogStore;

/// Shared application context: the catalog store plus tool configuration.
pub struct AppContext<S: CatalogStore> {
    store: S,
    config: Config,
}

impl<S: CatalogStore> AppContext<S> {
    pub fn new(store: S, config: Config) -> Self {
        Self { store, config }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}
