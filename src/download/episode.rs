//! Episode download logic.

use std::path::Path;

use crate::api::{BluprintApi, Episode, EpisodeSource};
use crate::config::Config;
use crate::download::file::download_to_file;
use crate::download::remux::{chapter_metadata, remux_args, run_remux};
use crate::download::state::RunStats;
use crate::error::{Error, Result};
use crate::fs::episode_base_name;

/// Stream format preferred over every other variant.
const PREFERRED_FORMAT: &str = "mp4";

/// Pick the MP4 variant if there is one, otherwise the first variant.
pub fn select_source(sources: &[EpisodeSource]) -> Option<&EpisodeSource> {
    sources
        .iter()
        .find(|s| s.format == PREFERRED_FORMAT)
        .or_else(|| sources.first())
}

/// Download one episode into `out_dir` as `{index + 1}. {name}.mp4`.
///
/// Captions, when offered, are saved next to it as `.vtt` and muxed in as a subtitle track.
pub async fn download_episode(
    api: &BluprintApi,
    config: &Config,
    stats: &mut RunStats,
    out_dir: &Path,
    index: usize,
    episode: &Episode,
) -> Result<()> {
    let episode_id = episode.episode_id.to_string();
    let sources = api.get_episode_sources(&episode.episode_id).await?;

    let source = select_source(&sources).ok_or_else(|| {
        Error::Api(format!("No stream sources offered for episode {}", episode_id))
    })?;
    tracing::debug!(
        "Episode {} using {} source {}",
        episode_id,
        source.format,
        source.url
    );

    let base_name = episode_base_name(index, &episode.name);
    tracing::info!("Downloading episode {}", base_name);

    let caption_file = match &source.vtt_url {
        Some(vtt_url) => {
            let vtt_name = format!("{}.vtt", base_name);
            let bytes =
                download_to_file(api, vtt_url, &out_dir.join(&vtt_name), config.options.show_progress)
                    .await?;
            stats.add_caption(bytes);
            Some(vtt_name)
        }
        None => None,
    };

    let output_name = format!("{}.mp4", base_name);
    let args = remux_args(&source.url, caption_file.as_deref(), &output_name);
    let metadata = chapter_metadata(episode);

    run_remux(&config.options.ffmpeg, &args, out_dir, &metadata, &episode_id).await?;
    stats.episodes += 1;

    Ok(())
}
