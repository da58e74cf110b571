use crate::config::types::Config;
use crate::ConfigError;

/// Validates a parsed configuration
///
/// Rules:
/// - The target directory must not be empty
/// - Both user agent strings must not be empty
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    if config.download.dir.trim().is_empty() {
        return Err(ConfigError::Validation(
            "download.dir must not be empty".to_string(),
        ));
    }

    if config.user_agent.search.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user-agent.search must not be empty".to_string(),
        ));
    }

    if config.user_agent.image.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user-agent.image must not be empty".to_string(),
        ));
    }

    Ok(())
}
