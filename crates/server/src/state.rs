use std::sync::Arc;
use revalis_core::{
    Authenticator, Config, ExternalCatalog, GameSearch, GameStore, SanitizedConfig,
};

/// Shared application state
pub struct AppState {
    config: Config,
    authenticator: Arc<dyn Authenticator>,
    store: Arc<dyn GameStore>,
    external_catalog: Arc<dyn ExternalCatalog>,
    search: GameSearch,
}

impl AppState {
    pub fn new(
        config: Config,
        authenticator: Arc<dyn Authenticator>,
        store: Arc<dyn GameStore>,
        external_catalog: Arc<dyn ExternalCatalog>,
    ) -> Self {
        let search = GameSearch::new(Arc::clone(&store), Arc::clone(&external_catalog));
        Self {
            config,
            authenticator,
            store,
            external_catalog,
            search,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn sanitized_config(&self) -> SanitizedConfig {
        SanitizedConfig::from(&self.config)
    }

    pub fn authenticator(&self) -> &dyn Authenticator {
        self.authenticator.as_ref()
    }

    pub fn store(&self) -> &dyn GameStore {
        self.store.as_ref()
    }

    pub fn external_catalog(&self) -> &dyn ExternalCatalog {
        self.external_catalog.as_ref()
    }

    pub fn search(&self) -> &GameSearch {
        &self.search
    }
}
