use anyhow::Context as _;
use thiserror::Error;

/// Failure of the single catalog read.
///
/// Absorbed by the loader; callers never see it outside of logs.
#[derive(Debug, Error)]
pub enum FetchFailure {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("service responded with {status}: {message}")]
    Service { status: u16, message: String },

    #[error("could not decode catalog response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl FetchFailure {
    pub fn transport(url: &str, source: reqwest::Error) -> Self {
        FetchFailure::Transport {
            url: url.to_string(),
            source,
        }
    }

    pub fn service(status: u16, message: impl Into<String>) -> Self {
        FetchFailure::Service {
            status,
            message: message.into(),
        }
    }
}

/// Invalid startup configuration
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing {0}; pass the flag or set the environment variable")]
    Missing(&'static str),

    #[error("endpoint must be an http(s) URL, got {0:?}")]
    InvalidEndpoint(String),

    #[error("page size must be at least 1")]
    ZeroPageSize,
}

/// Add context to parse errors
pub fn parse_context(data_type: &str) -> String {
    format!("Failed to parse {}", data_type)
}

/// Wrap result with parse context
pub fn with_parse_context<T, E>(result: Result<T, E>, data_type: &str) -> anyhow::Result<T>
where
    E: std::error::Error + Send + Sync + 'static,
{
    result.context(parse_context(data_type))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_failure_message() {
        let err = FetchFailure::service(401, "Invalid API key");
        assert_eq!(err.to_string(), "service responded with 401: Invalid API key");
    }

    #[test]
    fn test_decode_failure_from_serde() {
        let serde_err = serde_json::from_str::<Vec<u8>>("{").unwrap_err();
        let err: FetchFailure = serde_err.into();
        assert!(matches!(err, FetchFailure::Decode(_)));
    }

    #[test]
    fn test_parse_context_wraps_error() {
        let result: Result<u16, _> = "abc".parse::<u16>();
        let err = with_parse_context(result, "page number").unwrap_err();
        assert_eq!(err.to_string(), "Failed to parse page number");
    }
}
