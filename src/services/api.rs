use crate::models::{error::AppError, usage::UsagePayload};
use chrono::{DateTime, Utc};

// CONSTANTS
const DEFAULT_ENDPOINT: &str = "https://script.google.com/macros/s/AKfycbwoqZz-CPgv27QHbxd7KDQikGjQ-VNPUkjN9WSsPPD83agqJEykhzqXGDFl2ThAEYIAPw/exec";
const DEFAULT_CACHE_PARAM: &str = "t";

// API CONFIGURATION
/// Configuration for the usage sheet endpoint.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    endpoint: String,
    cache_param: String,
}

impl ApiConfig {
    /// Creates a builder for constructing an `ApiConfig`.
    pub fn builder() -> ApiConfigBuilder {
        ApiConfigBuilder::default()
    }

    /// Endpoint URL with a cache-busting parameter derived from `now`.
    pub fn usage_url(&self, now: DateTime<Utc>) -> String {
        let separator = if self.endpoint.contains('?') { '&' } else { '?' };
        format!(
            "{}{}{}={}",
            self.endpoint,
            separator,
            self.cache_param,
            now.timestamp_millis()
        )
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfigBuilder::default().build()
    }
}

// API CONFIGURATION BUILDER
/// Builder for constructing an `ApiConfig` with custom settings.
#[derive(Debug, Default)]
pub struct ApiConfigBuilder {
    endpoint: Option<String>,
    cache_param: Option<String>,
}

impl ApiConfigBuilder {
    /// Sets a custom endpoint (primarily for testing).
    pub fn endpoint(mut self, url: impl Into<String>) -> Self {
        self.endpoint = Some(url.into());
        self
    }

    /// Sets the name of the cache-busting query parameter.
    pub fn cache_param(mut self, name: impl Into<String>) -> Self {
        self.cache_param = Some(name.into());
        self
    }

    /// Builds the `ApiConfig`.
    pub fn build(self) -> ApiConfig {
        ApiConfig {
            endpoint: self
                .endpoint
                .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            cache_param: self
                .cache_param
                .unwrap_or_else(|| DEFAULT_CACHE_PARAM.to_string()),
        }
    }
}

// USAGE CLIENT
/// HTTP client for the usage sheet.
pub struct UsageClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl UsageClient {
    /// Creates a new client with default configuration.
    pub fn new() -> Result<Self, AppError> {
        Self::with_config(ApiConfig::default())
    }

    /// Creates a new client with the specified configuration.
    pub fn with_config(config: ApiConfig) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| AppError::ConfigError(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { http, config })
    }

    /// Fetches the usage log and profile. Single attempt, no retry.
    pub async fn fetch_usage(&self) -> Result<UsagePayload, AppError> {
        let url = self.config.usage_url(Utc::now());

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| self.classify_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(self.error_for_status(status, &body));
        }

        let body = response
            .text()
            .await
            .map_err(|e| self.classify_error(e))?;

        parse_payload(&body)
    }

    /// Converts a reqwest error into an appropriate AppError.
    fn classify_error(&self, error: reqwest::Error) -> AppError {
        if error.is_timeout() {
            AppError::NetworkError(format!("Request timeout: {error}"))
        } else if error.is_request() {
            AppError::NetworkError(format!("Request error: {error}"))
        } else {
            AppError::NetworkError(format!("Transport error: {error}"))
        }
    }

    /// Creates an error based on HTTP status code.
    fn error_for_status(&self, status: reqwest::StatusCode, body: &str) -> AppError {
        match status.as_u16() {
            400..=499 => AppError::NetworkError(format!("Client error {status}: {body}")),
            500..=599 => AppError::NetworkError(format!("Server error {status}: {body}")),
            _ => AppError::NetworkError(format!("Unexpected status {status}: {body}")),
        }
    }
}

/// Parses a response body as a whole. Any malformed document is a `ParseError`.
pub fn parse_payload(body: &str) -> Result<UsagePayload, AppError> {
    serde_json::from_str(body)
        .map_err(|e| AppError::ParseError(format!("Failed to parse response: {e}")))
}

// CONVENIENCE FUNCTIONS
/// Fetches the usage payload using default configuration.
pub async fn fetch_usage() -> Result<UsagePayload, AppError> {
    UsageClient::new()?.fetch_usage().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_config_builder_defaults() {
        let config = ApiConfig::builder().build();
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.cache_param, "t");
    }

    #[test]
    fn test_usage_url_cache_busting() {
        let config = ApiConfig::builder()
            .endpoint("https://example.test/exec")
            .build();
        let now = Utc.with_ymd_and_hms(2025, 12, 5, 0, 0, 0).unwrap();

        let url = config.usage_url(now);
        assert_eq!(
            url,
            format!("https://example.test/exec?t={}", now.timestamp_millis())
        );
    }

    #[test]
    fn test_usage_url_with_existing_query() {
        let config = ApiConfig::builder()
            .endpoint("https://example.test/exec?sheet=usage")
            .cache_param("nocache")
            .build();
        let now = Utc.with_ymd_and_hms(2025, 12, 5, 0, 0, 0).unwrap();

        let url = config.usage_url(now);
        assert!(url.starts_with("https://example.test/exec?sheet=usage&nocache="));
    }

    #[test]
    fn test_usage_url_changes_over_time() {
        let config = ApiConfig::default();
        let a = Utc.with_ymd_and_hms(2025, 12, 5, 0, 0, 0).unwrap();
        let b = Utc.with_ymd_and_hms(2025, 12, 5, 0, 0, 1).unwrap();
        assert_ne!(config.usage_url(a), config.usage_url(b));
    }

    #[test]
    fn test_client_creation() {
        let client = UsageClient::new();
        assert!(client.is_ok());
    }

    #[test]
    fn test_parse_payload() {
        let body = r#"{
            "usage": [
                {"timestamp": "2025-12-05T09:00:00Z", "kwh_usage": 1, "cost_baht": 10, "power_watts": 850, "room_number": "A-101"},
                {"timestamp": "2025-12-05T23:00:00Z", "kwh_usage": 2, "cost_baht": 5, "power_watts": 1200, "room_number": "A-101"}
            ],
            "profile": {"name": "A-101"}
        }"#;

        let payload = parse_payload(body).unwrap();
        assert_eq!(payload.usage.len(), 2);
        assert_eq!(payload.usage.total_cost(), 15.0);
    }

    #[test]
    fn test_parse_payload_malformed() {
        let err = parse_payload("<html>Service unavailable</html>").unwrap_err();
        assert!(matches!(err, AppError::ParseError(_)));
    }
}
