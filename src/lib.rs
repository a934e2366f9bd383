//! bluarchive - archive purchased Bluprint content to local disk
//!
//! This library retrieves a user's purchased patterns, class materials and class videos
//! from the Bluprint API and lays them out in a browsable directory tree.
//!
//! # Features
//!
//! - Download purchased patterns
//! - Download class materials
//! - Download class episodes, remuxed with chapters and captions through ffmpeg
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use bluarchive::{archive, BluprintApi, Config, Credentials};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load(Path::new("bluarchive.ini"))?;
//!     let api = BluprintApi::new(&Credentials::new(
//!         config.account.user_id.clone(),
//!         config.account.token.clone(),
//!     ))?;
//!
//!     let stats = archive(&api, &config).await?;
//!     println!("{} files written", stats.total_files());
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod download;
pub mod error;
pub mod fs;
pub mod output;

// Re-exports for convenience
pub use api::{BluprintApi, Credentials};
pub use config::{Config, TestMode};
pub use download::{archive, download_classes, download_episode, download_patterns, RunStats};
pub use error::{Error, Result};
