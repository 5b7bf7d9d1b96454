pub mod auth;
pub mod catalog_client;
pub mod config;
pub mod importer;
pub mod metrics;
pub mod search;
pub mod store;
pub mod testing;
pub mod walkthrough;

pub use auth::{
    create_authenticator, ApiKeyAuthenticator, AuthError, AuthRequest, Authenticator, Identity,
};
pub use catalog_client::{
    CatalogClientError, CatalogEntry, ExternalCatalog, ExternalGame, RawgClient,
};
pub use config::{
    load_config, load_config_from_str, validate_config, Config, ConfigError, RawgConfig,
    SanitizedConfig,
};
pub use importer::{import_games, ImportError};
pub use search::{GameSearch, GameSummary, SearchError, SearchParams, SortOrder};
pub use store::{
    BulkInsertResult, GameDraft, GamePatch, GameRecord, GameStore, SqliteGameStore, StoreError,
};
pub use walkthrough::{slugify, suggest_walkthroughs, WalkthroughSuggestion};
