//! Class (enrollment) download logic.

use std::path::Path;

use crate::api::{ApiId, BluprintApi};
use crate::config::Config;
use crate::download::episode::download_episode;
use crate::download::file::download_to_file;
use crate::download::state::RunStats;
use crate::error::Result;
use crate::fs::{class_dir, download_filename, ensure_dir, materials_dir};

/// Download every non-archived class the user is enrolled in.
pub async fn download_classes(
    api: &BluprintApi,
    config: &Config,
    stats: &mut RunStats,
) -> Result<()> {
    let output_dir = config.output_directory();

    tracing::info!("Fetching enrollments...");
    let enrollments = api.get_enrollments().await?;
    tracing::info!("Found {} enrollments", enrollments.len());

    for enrollment in &enrollments {
        let playlist_id = &enrollment.playlist_id;
        if enrollment.archived {
            tracing::info!("Skipping archived playlist {}", playlist_id);
            stats.archived_classes_skipped += 1;
            continue;
        }

        let playlist = api.get_playlist(playlist_id).await?;
        let course = &playlist.payload;
        tracing::info!("Processing class {}: {}", playlist_id, course.name);

        // Platform-supplied names are used as-is
        let course_dir = class_dir(&output_dir, &course.name, &playlist_id.to_string());
        ensure_dir(&course_dir).await?;
        tokio::fs::write(course_dir.join("playlist.json"), &playlist.raw).await?;

        if config.options.download_materials {
            download_materials(api, config, stats, &course_dir, playlist_id, &course.name).await?;
        }

        if config.options.download_videos {
            for (index, episode) in course.episodes.iter().enumerate() {
                download_episode(api, config, stats, &course_dir, index, episode).await?;

                if config.options.test_mode.stop_after_first_episode() {
                    tracing::info!(
                        "Test mode {}: stopping after first episode",
                        config.options.test_mode
                    );
                    break;
                }
            }
        }
        stats.classes += 1;

        if config.options.test_mode.stop_after_first_item() {
            tracing::info!("Test mode {}: stopping after first class", config.options.test_mode);
            break;
        }
    }

    Ok(())
}

/// Download a class's downloadable materials into its `materials` directory.
async fn download_materials(
    api: &BluprintApi,
    config: &Config,
    stats: &mut RunStats,
    course_dir: &Path,
    playlist_id: &ApiId,
    course_name: &str,
) -> Result<()> {
    let materials = api.get_materials(playlist_id).await?;
    if materials.is_empty() {
        tracing::debug!("No materials for {}: {}", playlist_id, course_name);
        return Ok(());
    }

    let target_dir = materials_dir(course_dir);
    ensure_dir(&target_dir).await?;

    for material in &materials {
        if !material.downloadable {
            tracing::debug!(
                "Skipping non-downloadable material {:?}",
                material.material_name
            );
            stats.materials_skipped += 1;
            continue;
        }

        let filename = download_filename(&material.material_path)?;
        tracing::debug!(
            "Downloading material {:?} to {:?}",
            material.material_name,
            filename
        );
        let bytes = download_to_file(
            api,
            &material.material_path,
            &target_dir.join(&filename),
            config.options.show_progress,
        )
        .await?;
        stats.add_material(bytes);
    }

    Ok(())
}
