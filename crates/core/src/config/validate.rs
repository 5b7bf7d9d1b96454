use super::{types::Config, ConfigError};

/// Validate configuration
/// Currently validates:
/// - Server port is not 0
/// - RAWG API key is set
/// - Detail fetch concurrency and import page cap are at least 1
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "server.port cannot be 0".to_string(),
        ));
    }

    if config.rawg.api_key.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "rawg.api_key must be set".to_string(),
        ));
    }

    if config.rawg.detail_concurrency == 0 {
        return Err(ConfigError::ValidationError(
            "rawg.detail_concurrency must be at least 1".to_string(),
        ));
    }

    if config.import.max_pages == 0 {
        return Err(ConfigError::ValidationError(
            "import.max_pages must be at least 1".to_string(),
        ));
    }

    if matches!(&config.auth.import_key, Some(key) if key.trim().is_empty()) {
        return Err(ConfigError::ValidationError(
            "auth.import_key cannot be empty when set".to_string(),
        ));
    }

    Ok(())
}
