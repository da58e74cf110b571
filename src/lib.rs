//! Thumbgrab: a thumbnail downloader for image search results
//!
//! This crate fetches a Google image-search results page for a text query,
//! scans the raw HTML for thumbnail links, and downloads the linked images
//! to a local directory. Only low-resolution thumbnails are reachable from
//! the results markup; full-resolution retrieval is out of scope.

pub mod config;
pub mod download;
pub mod extract;
pub mod pipeline;
pub mod search;

use thiserror::Error;

/// Main error type for thumbgrab operations
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP error for {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("No images could be downloaded for query: {query}")]
    NoResults { query: String },
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type alias for thumbgrab operations
pub type Result<T> = std::result::Result<T, FetchError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::{Config, DownloadConfig};
pub use download::DownloadedImage;
pub use pipeline::Downloader;
