//! Configuration module for bluarchive.
//!
//! This module handles:
//! - Loading configuration from INI files (and writing the first-run template)
//! - Credential validation
//! - Early-exit test modes

pub mod loader;
pub mod modes;
pub mod validation;

pub use loader::{AccountConfig, Config, OptionsConfig, DEFAULT_CONFIG_FILE};
pub use modes::TestMode;
pub use validation::{validate_config, validate_credentials};
