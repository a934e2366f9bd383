//! Download module for content archiving.
//!
//! This module provides:
//! - Run statistics
//! - Pattern downloading
//! - Class and material downloading
//! - Episode downloading and remuxing
//! - The top-level archiving run

pub mod archive;
pub mod classes;
pub mod episode;
pub mod file;
pub mod patterns;
pub mod remux;
pub mod state;

pub use archive::archive;
pub use classes::download_classes;
pub use episode::{download_episode, select_source};
pub use patterns::download_patterns;
pub use state::RunStats;
