//! Configuration module for thumbgrab
//!
//! This module handles loading, parsing, and validating TOML configuration
//! files. Every field has a default, so a missing config file is not an
//! error; the CLI runs with built-in defaults.
//!
//! # Example
//!
//! ```no_run
//! use thumbgrab::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("config.toml")).unwrap();
//! println!("Images go to: {}", config.download.dir);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    Config, DownloadConfig, UserAgentConfig, DEFAULT_IMAGE_USER_AGENT, DEFAULT_SEARCH_USER_AGENT,
};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash};
