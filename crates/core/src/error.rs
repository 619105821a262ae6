//! Error types for the Skycast domain.
//!
//! Uses `thiserror` for ergonomic error definitions.
//! Each bounded context has its own error enum.

use thiserror::Error;

/// The top-level error type for all Skycast operations.
#[derive(Debug, Error)]
pub enum Error {
    // --- Provider errors ---
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    // --- Tool errors ---
    #[error("Tool error: {0}")]
    Tool(#[from] ToolError),

    // --- Weather lookups ---
    #[error(transparent)]
    Weather(#[from] WeatherError),

    // --- Configuration errors ---
    #[error("Configuration error: {message}")]
    Config { message: String },

    // --- Serialization ---
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias using our Error.
pub type Result<T> = std::result::Result<T, Error>;

// --- Bounded context errors ---

#[derive(Debug, Clone, Error)]
pub enum ProviderError {
    #[error("API request failed: {message} (status: {status_code})")]
    ApiError { status_code: u16, message: String },

    #[error("Rate limited by provider, retry after {retry_after_secs}s")]
    RateLimited { retry_after_secs: u64 },

    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    #[error("Network error: {0}")]
    Network(String),
}

/// Failures of the geocoding and forecast lookups.
///
/// The display strings are what a language model sees when a tool fails,
/// so they carry the caller's input verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WeatherError {
    /// Geocoding produced no candidates for the supplied name.
    #[error("Location '{0}' not found")]
    NotFound(String),

    /// The requested date is not one of the dates the forecast returned.
    #[error("No forecast available for date: {0}")]
    DateNotAvailable(String),

    /// Network failure, non-success status, or a malformed response body.
    #[error("Weather service request failed: {0}")]
    Transport(String),
}

#[derive(Debug, Clone, Error)]
pub enum ToolError {
    #[error("Tool not found: {0}")]
    NotFound(String),

    #[error("Tool execution failed: {tool_name}: {reason}")]
    ExecutionFailed { tool_name: String, reason: String },

    #[error("Invalid tool arguments: {0}")]
    InvalidArguments(String),

    #[error(transparent)]
    Weather(#[from] WeatherError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_error_displays_correctly() {
        let err = Error::Provider(ProviderError::ApiError {
            status_code: 429,
            message: "Too many requests".into(),
        });
        assert!(err.to_string().contains("429"));
        assert!(err.to_string().contains("Too many requests"));
    }

    #[test]
    fn weather_errors_carry_input_verbatim() {
        let err = WeatherError::NotFound("Nowhere12345".into());
        assert_eq!(err.to_string(), "Location 'Nowhere12345' not found");

        let err = WeatherError::DateNotAvailable("2099-01-01".into());
        assert_eq!(err.to_string(), "No forecast available for date: 2099-01-01");
    }

    #[test]
    fn tool_error_is_transparent_over_weather_error() {
        let err: ToolError = WeatherError::NotFound("Atlantis".into()).into();
        assert_eq!(err.to_string(), "Location 'Atlantis' not found");
        assert!(matches!(err, ToolError::Weather(WeatherError::NotFound(_))));
    }

    #[test]
    fn invalid_arguments_displays_reason() {
        let err = Error::Tool(ToolError::InvalidArguments("maxResults must be between 1 and 10".into()));
        assert!(err.to_string().contains("maxResults"));
    }
}
