use crate::config::selectors::SelectorSchema;
use crate::config::types::{Config, StorageConfig};
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_site(config)?;
    validate_storage_config(&config.storage)?;
    SelectorSchema::compile(config)?;
    Ok(())
}

/// Validates the site entry points
fn validate_site(config: &Config) -> Result<(), ConfigError> {
    let base = Url::parse(&config.base_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid base_url: {}", e)))?;

    if base.scheme() != "http" && base.scheme() != "https" {
        return Err(ConfigError::InvalidUrl(format!(
            "base_url '{}' must use http or https",
            config.base_url
        )));
    }

    base.join(&config.categories_url).map_err(|e| {
        ConfigError::InvalidUrl(format!(
            "Invalid categories_url '{}': {}",
            config.categories_url, e
        ))
    })?;

    if config.main_category_name.trim().is_empty() {
        return Err(ConfigError::Validation(
            "main_category_name cannot be empty".to_string(),
        ));
    }

    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user_agent cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validates storage configuration
fn validate_storage_config(config: &StorageConfig) -> Result<(), ConfigError> {
    if config.database_path.is_empty() {
        return Err(ConfigError::Validation(
            "database_path cannot be empty".to_string(),
        ));
    }

    if config.collection_name.trim().is_empty() {
        return Err(ConfigError::Validation(
            "collection_name cannot be empty".to_string(),
        ));
    }

    Ok(())
}
