//! Bluprint API module.
//!
//! This module provides:
//! - Cookie-authenticated session setup
//! - HTTP client for the Bluprint REST API
//! - API response types

pub mod client;
pub mod session;
pub mod types;

pub use client::{BluprintApi, Reply, API_BASE, PATTERN_PAGE_SIZE};
pub use session::Credentials;
pub use types::*;
