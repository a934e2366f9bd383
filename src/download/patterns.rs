//! Pattern download logic.

use crate::api::BluprintApi;
use crate::config::Config;
use crate::download::file::download_to_file;
use crate::download::state::RunStats;
use crate::error::{Error, Result};
use crate::fs::naming::{download_filename, is_usable_component, unnamed_pattern_name};
use crate::fs::paths::patterns_listing_file;
use crate::fs::{clean_pattern_name, ensure_dir, pattern_dir, pattern_display_name, patterns_dir};

/// Download every purchased pattern into `{output}/Patterns`.
pub async fn download_patterns(
    api: &BluprintApi,
    config: &Config,
    stats: &mut RunStats,
) -> Result<()> {
    let output_dir = config.output_directory();

    tracing::info!("Fetching pattern listing...");
    let listing = api.get_patterns().await?;

    // Pagination is not supported; refuse before writing anything.
    if listing.payload.total_pages > 1 {
        return Err(Error::TooManyPatterns {
            total_pages: listing.payload.total_pages,
        });
    }

    ensure_dir(&patterns_dir(&output_dir)).await?;
    tokio::fs::write(patterns_listing_file(&output_dir), &listing.raw).await?;

    tracing::info!("Found {} patterns", listing.payload.hits.len());

    for hit in &listing.payload.hits {
        let card = &hit.library_baseball_card;
        let pattern_id = card.id.to_string();
        tracing::info!(
            "Processing pattern {}: {}",
            pattern_id,
            card.name
                .clone()
                .unwrap_or_else(|| unnamed_pattern_name(&pattern_id))
        );

        let links = api.get_pattern_links(&card.id).await?;

        let display_name = pattern_display_name(&pattern_id, card.name.as_deref(), &links);
        let mut cleaned = clean_pattern_name(&display_name);
        if !is_usable_component(&cleaned) {
            cleaned = unnamed_pattern_name(&pattern_id);
        }

        let target_dir = pattern_dir(&output_dir, &cleaned);
        ensure_dir(&target_dir).await?;

        for url in &links {
            let filename = download_filename(url)?;
            tracing::debug!("Downloading pattern file {:?}", filename);
            let bytes =
                download_to_file(api, url, &target_dir.join(&filename), config.options.show_progress)
                    .await?;
            stats.add_pattern_file(bytes);
        }
        stats.patterns += 1;

        if config.options.test_mode.stop_after_first_item() {
            tracing::info!("Test mode {}: stopping after first pattern", config.options.test_mode);
            break;
        }
    }

    Ok(())
}
