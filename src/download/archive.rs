//! Top-level archiving run.

use crate::api::BluprintApi;
use crate::config::Config;
use crate::download::classes::download_classes;
use crate::download::patterns::download_patterns;
use crate::download::state::RunStats;
use crate::error::Result;

/// Archive everything the configuration selects: patterns first, then classes.
pub async fn archive(api: &BluprintApi, config: &Config) -> Result<RunStats> {
    let mut stats = RunStats::default();

    tracing::info!("Saving to {:?}", config.output_directory());

    if config.options.download_patterns {
        download_patterns(api, config, &mut stats).await?;
    }

    if config.wants_classes() {
        download_classes(api, config, &mut stats).await?;
    }

    Ok(stats)
}
