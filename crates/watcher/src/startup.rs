//! Startup configuration check.
//!
//! Nothing starts without the three credentials. A failed check is logged at
//! critical severity before the binary exits.

use relay_common::config::AppConfig;
use relay_common::error::ConfigError;

/// Load configuration from `.env` and the process environment.
pub fn load_from_env() -> Result<AppConfig, ConfigError> {
    report(AppConfig::from_env())
}

/// Load configuration from an arbitrary variable lookup.
pub fn load_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    report(AppConfig::from_lookup(lookup))
}

fn report(result: Result<AppConfig, ConfigError>) -> Result<AppConfig, ConfigError> {
    match &result {
        Ok(config) => tracing::info!(
            endpoint = %config.status_api_endpoint,
            poll_interval_secs = config.poll_interval_secs,
            "All required environment variables found"
        ),
        Err(e) => tracing::error!(
            severity = "critical",
            error = %e,
            "Refusing to start status relay"
        ),
    }
    result
}
