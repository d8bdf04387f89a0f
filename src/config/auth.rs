//! Authentication configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use super::server::Environment;

const MIN_CODE_LENGTH: usize = 6;
const MAX_CODE_LENGTH: usize = 64;

/// Authentication configuration (token signing, confirmation codes)
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// Shared secret for signing bearer tokens
    pub token_secret: String,

    /// Bearer token lifetime in seconds
    #[serde(default = "default_token_ttl")]
    pub token_ttl_secs: u64,

    /// Length of generated confirmation codes
    #[serde(default = "default_code_length")]
    pub confirmation_code_length: usize,
}

impl AuthConfig {
    /// Get token lifetime as Duration
    pub fn token_ttl(&self) -> Duration {
        Duration::from_secs(self.token_ttl_secs)
    }

    /// Validate authentication configuration
    ///
    /// Production requires a signing secret of at least 32 bytes;
    /// development only requires it to be present.
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        if self.token_secret.is_empty() {
            return Err(ValidationError::MissingRequired("AUTH__TOKEN_SECRET"));
        }
        if *environment == Environment::Production && self.token_secret.len() < 32 {
            return Err(ValidationError::TokenSecretTooShort);
        }
        if self.token_ttl_secs == 0 {
            return Err(ValidationError::InvalidTokenLifetime);
        }
        if !(MIN_CODE_LENGTH..=MAX_CODE_LENGTH).contains(&self.confirmation_code_length) {
            return Err(ValidationError::InvalidCodeLength);
        }
        Ok(())
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_secret: String::new(),
            token_ttl_secs: default_token_ttl(),
            confirmation_code_length: default_code_length(),
        }
    }
}

fn default_token_ttl() -> u64 {
    86_400
}

fn default_code_length() -> usize {
    16
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> AuthConfig {
        AuthConfig {
            token_secret: "0123456789abcdef0123456789abcdef".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_auth_config_defaults() {
        let config = AuthConfig::default();
        assert_eq!(config.token_ttl_secs, 86_400);
        assert_eq!(config.confirmation_code_length, 16);
    }

    #[test]
    fn test_token_ttl_duration() {
        let config = AuthConfig {
            token_ttl_secs: 7200,
            ..valid_config()
        };
        assert_eq!(config.token_ttl(), Duration::from_secs(7200));
    }

    #[test]
    fn test_validation_missing_secret() {
        let config = AuthConfig::default();
        assert!(config.validate(&Environment::Development).is_err());
    }

    #[test]
    fn test_validation_production_requires_long_secret() {
        let config = AuthConfig {
            token_secret: "short".to_string(),
            ..Default::default()
        };
        // Allowed in development
        assert!(config.validate(&Environment::Development).is_ok());
        // Rejected in production
        assert!(config.validate(&Environment::Production).is_err());
    }

    #[test]
    fn test_validation_code_length_bounds() {
        for length in [0, 5, 65] {
            let config = AuthConfig {
                confirmation_code_length: length,
                ..valid_config()
            };
            assert!(config.validate(&Environment::Development).is_err());
        }
        for length in [6, 16, 64] {
            let config = AuthConfig {
                confirmation_code_length: length,
                ..valid_config()
            };
            assert!(config.validate(&Environment::Development).is_ok());
        }
    }

    #[test]
    fn test_validation_zero_ttl_rejected() {
        let config = AuthConfig {
            token_ttl_secs: 0,
            ..valid_config()
        };
        assert!(config.validate(&Environment::Development).is_err());
    }
}
