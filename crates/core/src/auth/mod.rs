//! Shared-secret authentication for privileged endpoints (`/import`).

mod api_key;
mod traits;
mod types;

pub use api_key::*;
pub use traits::*;
pub use types::*;

use crate::config::Config;

/// Factory function to create the import authenticator from config
pub fn create_authenticator(config: &Config) -> Result<Box<dyn Authenticator>, AuthError> {
    let key = config.import_key();
    if key.trim().is_empty() {
        return Err(AuthError::ConfigurationError(
            "an import key (auth.import_key or rawg.api_key) must be set".to_string(),
        ));
    }
    Ok(Box::new(ApiKeyAuthenticator::new(key.to_string())))
}
