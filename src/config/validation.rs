//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, limits > 0)
//! - Remote fetch timeout must expire before the request timeout
//! - Check that addresses parse
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: AppConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::AppConfig;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// A single semantic problem with a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field}: `{value}` is not a valid socket address")]
    InvalidAddress { field: &'static str, value: String },

    #[error("{field} must be greater than zero")]
    MustBePositive { field: &'static str },

    #[error("remote.timeout_secs ({remote}) must be shorter than timeouts.request_secs ({request})")]
    RemoteTimeoutTooLong { remote: u64, request: u64 },

    #[error("observability.log_level: `{0}` is not one of trace, debug, info, warn, error")]
    InvalidLogLevel(String),
}

/// Check `config` for semantic errors.
pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidAddress {
            field: "listener.bind_address",
            value: config.listener.bind_address.clone(),
        });
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::MustBePositive {
            field: "timeouts.request_secs",
        });
    }

    if config.remote.timeout_secs == 0 {
        errors.push(ValidationError::MustBePositive {
            field: "remote.timeout_secs",
        });
    } else if config.timeouts.request_secs > 0
        && config.remote.timeout_secs >= config.timeouts.request_secs
    {
        errors.push(ValidationError::RemoteTimeoutTooLong {
            remote: config.remote.timeout_secs,
            request: config.timeouts.request_secs,
        });
    }

    if config.limits.max_body_size == 0 {
        errors.push(ValidationError::MustBePositive {
            field: "limits.max_body_size",
        });
    }

    if config.remote.max_line_bytes == 0 {
        errors.push(ValidationError::MustBePositive {
            field: "remote.max_line_bytes",
        });
    }

    if !LOG_LEVELS.contains(&config.observability.log_level.to_lowercase().as_str()) {
        errors.push(ValidationError::InvalidLogLevel(
            config.observability.log_level.clone(),
        ));
    }

    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::InvalidAddress {
            field: "observability.metrics_address",
            value: config.observability.metrics_address.clone(),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(validate_config(&AppConfig::default()), Ok(()));
    }

    #[test]
    fn test_collects_every_error() {
        let mut config = AppConfig::default();
        config.listener.bind_address = "localhost".to_string();
        config.timeouts.request_secs = 0;
        config.remote.max_line_bytes = 0;
        config.observability.log_level = "loud".to_string();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 4);
        assert!(errors.contains(&ValidationError::MustBePositive {
            field: "timeouts.request_secs"
        }));
        assert!(errors.contains(&ValidationError::InvalidLogLevel("loud".to_string())));
    }

    #[test]
    fn test_remote_timeout_must_undercut_request_timeout() {
        let mut config = AppConfig::default();
        config.timeouts.request_secs = 2;
        config.remote.timeout_secs = 2;
        assert_eq!(
            validate_config(&config).unwrap_err(),
            vec![ValidationError::RemoteTimeoutTooLong {
                remote: 2,
                request: 2
            }]
        );

        config.remote.timeout_secs = 0;
        assert_eq!(
            validate_config(&config).unwrap_err(),
            vec![ValidationError::MustBePositive {
                field: "remote.timeout_secs"
            }]
        );

        config.remote.timeout_secs = 1;
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_metrics_address_checked_only_when_enabled() {
        let mut config = AppConfig::default();
        config.observability.metrics_address = "nowhere".to_string();
        assert!(validate_config(&config).is_ok());

        config.observability.metrics_enabled = true;
        assert_eq!(validate_config(&config).unwrap_err().len(), 1);
    }
}
