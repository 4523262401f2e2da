use std::io;

use thiserror::Error;

/// 应用级错误
#[derive(Debug, Error)]
pub enum AppError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),

    #[error("invalid config file: {0}")]
    Config(#[from] toml::de::Error),

    #[error("store error: {0}")]
    Store(#[from] StoreError),

    #[error("failed to start async runtime: {0}")]
    Runtime(#[source] io::Error),
}

/// 远程数据存储错误
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("invalid store url: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    #[error("unexpected response: {0}")]
    Decode(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_runtime_error_is_distinct_from_io() {
        let err = AppError::Runtime(io::Error::other("no threads"));
        assert_eq!(err.to_string(), "failed to start async runtime: no threads");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_status_message() {
        let err = StoreError::Status {
            status: 401,
            message: "Invalid API key".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 401: Invalid API key");
    }
}
