//! Error types for the bluarchive application.

use std::path::PathBuf;

use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for the application.
#[derive(Error, Debug)]
pub enum Error {
    // Configuration errors
    #[error(
        "A template {} has been written. Put your cookies in, and run me again.",
        .0.display()
    )]
    Unconfigured(PathBuf),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration value for '{field}': {message}")]
    ConfigValidation { field: String, message: String },

    #[error("Missing required configuration: {0}")]
    MissingConfig(String),

    // API errors
    #[error(
        "You have more patterns than the API will return on one page ({total_pages} pages). \
         This tool cannot currently download them all."
    )]
    TooManyPatterns { total_pages: u64 },

    #[error("Error retrieving {context} (HTTP {status}). Are you signed in? Response: {body}")]
    NotAuthenticated {
        context: String,
        status: StatusCode,
        body: String,
    },

    #[error("API error: {0}")]
    Api(String),

    // Download errors
    #[error("Download failed: {0}")]
    Download(String),

    // External tool errors
    #[error("ffmpeg failed for episode {episode_id}: {command}")]
    Remux { episode_id: String, command: String },

    #[error("Remux program '{0}' not found. Please install ffmpeg and ensure it's in your PATH.")]
    RemuxNotFound(String),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // HTTP errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("INI parse error: {0}")]
    IniParse(#[from] ini::ParseError),

    // URL parsing errors
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Process exit codes.
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const API_ERROR: i32 = 2;
    pub const CONFIG_ERROR: i32 = 3;
    pub const DOWNLOAD_ERROR: i32 = 4;
    pub const UNEXPECTED_ERROR: i32 = 5;
}
