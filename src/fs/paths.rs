//! Output tree layout.

use std::path::{Path, PathBuf};

use crate::error::Result;

/// Directory holding every pattern.
pub fn patterns_dir(output_dir: &Path) -> PathBuf {
    output_dir.join("Patterns")
}

/// Raw pattern listing file.
pub fn patterns_listing_file(output_dir: &Path) -> PathBuf {
    patterns_dir(output_dir).join("patterns.json")
}

/// Directory of one pattern, from its already cleaned name.
pub fn pattern_dir(output_dir: &Path, cleaned_name: &str) -> PathBuf {
    patterns_dir(output_dir).join(cleaned_name)
}

/// Directory of one class: `{name} ({id})`.
pub fn class_dir(output_dir: &Path, class_name: &str, class_id: &str) -> PathBuf {
    output_dir.join(format!("{} ({})", class_name, class_id))
}

/// Materials subdirectory of a class.
pub fn materials_dir(class_dir: &Path) -> PathBuf {
    class_dir.join("materials")
}

/// Ensure a directory exists, creating it if necessary.
pub async fn ensure_dir(path: &Path) -> Result<()> {
    tokio::fs::create_dir_all(path).await?;
    Ok(())
}
