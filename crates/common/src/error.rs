use thiserror::Error;

/// Startup configuration errors. The only fatal error kind in the relay.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variables: {}", .0.join(", "))]
    Missing(Vec<&'static str>),

    #[error("Invalid value for {0}: {1}")]
    Invalid(&'static str, String),
}

/// Errors raised while fetching the status API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PollError {
    #[error("API endpoint request failed: {0}")]
    Request(String),

    #[error("API access error, response status: {0}")]
    HttpStatus(u16),

    #[error("Failed to parse API response as JSON: {0}")]
    Decode(String),
}

/// Errors raised while checking the shape of a polled response.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Malformed API response: {0}")]
    Shape(String),

    #[error("API response is missing key '{0}'")]
    MissingKey(&'static str),
}

/// Errors raised while turning a work item into a notification.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranslateError {
    #[error("Work item in API response is missing key '{0}'")]
    MissingField(&'static str),

    #[error("Undocumented work status in API response: {0}")]
    UndocumentedStatus(String),
}

/// A failed poll cycle, aggregated from whichever stage failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CycleError {
    #[error(transparent)]
    Poll(#[from] PollError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Translate(#[from] TranslateError),
}

impl CycleError {
    /// Short stage label for structured logs.
    pub fn stage(&self) -> &'static str {
        match self {
            CycleError::Poll(_) => "poll",
            CycleError::Validation(_) => "validate",
            CycleError::Translate(_) => "translate",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_error_is_transparent() {
        let err: CycleError = PollError::HttpStatus(503).into();
        assert_eq!(err.to_string(), "API access error, response status: 503");
        assert_eq!(err.stage(), "poll");

        let err: CycleError = TranslateError::UndocumentedStatus("lost".into()).into();
        assert_eq!(
            err.to_string(),
            "Undocumented work status in API response: lost"
        );
        assert_eq!(err.stage(), "translate");
    }
}
