//! Custom error types for the monitor console
//!
//! Provides structured error handling with context for different failure scenarios.

use std::fmt;

/// Main error type for the monitor console
#[derive(Debug)]
pub enum ConsoleError {
    /// Configuration-related errors
    Config(ConfigError),

    /// HTTP communication errors with the backend
    Http(HttpError),

    /// Client registry errors
    Registry(RegistryError),

    /// Other errors with context
    Other(String),
}

/// Configuration error variants
#[derive(Debug)]
pub enum ConfigError {
    /// Failed to load configuration file
    LoadFailed { path: String, reason: String },

    /// Invalid configuration value
    InvalidValue { field: String, reason: String },

    /// Configuration parsing error
    ParseError { reason: String },
}

/// HTTP communication error variants
#[derive(Debug)]
pub enum HttpError {
    /// Client could not be constructed
    ClientBuild { client: String, reason: String },

    /// Request URL could not be resolved against the origin
    InvalidUrl { url: String, reason: String },

    /// Request never produced a response
    RequestFailed { url: String, reason: String },

    /// Backend answered with a non-success status
    Status { url: String, status: u16, body: String },

    /// Response body did not match the expected shape
    InvalidResponse { url: String, reason: String },
}

/// Client registry error variants
#[derive(Debug)]
pub enum RegistryError {
    /// The application exposes no global properties slot
    MissingGlobalProperties,

    /// The slot exists but the clients were never installed
    NotInitialized { property: String },
}

impl fmt::Display for ConsoleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConsoleError::Config(e) => write!(f, "Configuration error: {}", e),
            ConsoleError::Http(e) => write!(f, "HTTP error: {}", e),
            ConsoleError::Registry(e) => write!(f, "Registry error: {}", e),
            ConsoleError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::LoadFailed { path, reason } => {
                write!(f, "Failed to load config from '{}': {}", path, reason)
            }
            ConfigError::InvalidValue { field, reason } => {
                write!(f, "Invalid value for '{}': {}", field, reason)
            }
            ConfigError::ParseError { reason } => {
                write!(f, "Failed to parse config: {}", reason)
            }
        }
    }
}

impl fmt::Display for HttpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HttpError::ClientBuild { client, reason } => {
                write!(f, "Failed to build client {}: {}", client, reason)
            }
            HttpError::InvalidUrl { url, reason } => {
                write!(f, "Invalid request URL '{}': {}", url, reason)
            }
            HttpError::RequestFailed { url, reason } => {
                write!(f, "Request to {} failed: {}", url, reason)
            }
            HttpError::Status { url, status, body } => {
                write!(f, "{} answered with status {}: {}", url, status, body)
            }
            HttpError::InvalidResponse { url, reason } => {
                write!(f, "Invalid response from {}: {}", url, reason)
            }
        }
    }
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::MissingGlobalProperties => {
                write!(f, "Application exposes no global properties slot")
            }
            RegistryError::NotInitialized { property } => {
                write!(f, "Client {} is not installed, initialization never ran", property)
            }
        }
    }
}

impl HttpError {
    /// HTTP status of the failed response, if the backend answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            HttpError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl std::error::Error for ConsoleError {}
impl std::error::Error for ConfigError {}
impl std::error::Error for HttpError {}
impl std::error::Error for RegistryError {}

impl From<anyhow::Error> for ConsoleError {
    fn from(err: anyhow::Error) -> Self {
        ConsoleError::Other(err.to_string())
    }
}

impl From<ConfigError> for ConsoleError {
    fn from(err: ConfigError) -> Self {
        ConsoleError::Config(err)
    }
}

impl From<HttpError> for ConsoleError {
    fn from(err: HttpError) -> Self {
        ConsoleError::Http(err)
    }
}

impl From<RegistryError> for ConsoleError {
    fn from(err: RegistryError) -> Self {
        ConsoleError::Registry(err)
    }
}
