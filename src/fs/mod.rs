//! Filesystem module.
//!
//! Provides:
//! - Output tree layout
//! - Filename derivation and cleaning

pub mod naming;
pub mod paths;

pub use naming::{
    clean_pattern_name, download_filename, episode_base_name, name_fragment,
    pattern_display_name, url_filename,
};
pub use paths::{class_dir, ensure_dir, materials_dir, pattern_dir, patterns_dir};
