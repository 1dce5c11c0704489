//! Application error types with rich context

use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types organized by layer/domain
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Common/Infrastructure Errors
    // ─────────────────────────────────────────────────────────────
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    // ─────────────────────────────────────────────────────────────
    // Terminal/TUI Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Terminal error: {message}")]
    Terminal { message: String },

    // ─────────────────────────────────────────────────────────────
    // Chain/Indexer Errors
    // ─────────────────────────────────────────────────────────────
    #[error("HTTP transport error: {message}")]
    Http { message: String },

    #[error("RPC error: {message}")]
    Rpc { message: String },

    #[error("Contract view '{method}' failed: {message}")]
    ContractView { method: String, message: String },

    #[error("Indexer query error: {message}")]
    Query { message: String },

    // ─────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn terminal(message: impl Into<String>) -> Self {
        Self::Terminal {
            message: message.into(),
        }
    }

    pub fn http(message: impl Into<String>) -> Self {
        Self::Http {
            message: message.into(),
        }
    }

    pub fn rpc(message: impl Into<String>) -> Self {
        Self::Rpc {
            message: message.into(),
        }
    }

    pub fn contract_view(method: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ContractView {
            method: method.into(),
            message: message.into(),
        }
    }

    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Check if this is a recoverable error
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Error::Http { .. }
                | Error::Rpc { .. }
                | Error::ContractView { .. }
                | Error::Query { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_messages() {
        let err = Error::rpc("UNKNOWN_ACCOUNT");
        assert_eq!(err.to_string(), "RPC error: UNKNOWN_ACCOUNT");

        let err = Error::contract_view("view_allowance_raw", "listing not found");
        assert_eq!(
            err.to_string(),
            "Contract view 'view_allowance_raw' failed: listing not found"
        );
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_chain_errors_are_recoverable() {
        assert!(Error::http("connection refused").is_recoverable());
        assert!(Error::rpc("timeout").is_recoverable());
        assert!(Error::contract_view("ft_balance_of", "panicked").is_recoverable());
        assert!(Error::query("syntax").is_recoverable());
        assert!(!Error::terminal("no tty").is_recoverable());
        assert!(!Error::config("bad value").is_recoverable());
    }
}
