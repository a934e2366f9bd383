//! Plain file downloading.

use std::path::Path;

use futures::StreamExt;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;

use crate::api::BluprintApi;
use crate::error::{Error, Result};
use crate::output::create_download_bar;

/// Minimum file size to show progress bar (20 MB).
const PROGRESS_THRESHOLD: u64 = 20 * 1024 * 1024;

/// Download a URL to `output_path`, replacing any existing file. Returns the byte count.
pub async fn download_to_file(
    api: &BluprintApi,
    url: &str,
    output_path: &Path,
    show_progress: bool,
) -> Result<u64> {
    let response = api.download_file(url).await?;

    let content_length = response.content_length();
    let progress = match content_length {
        Some(len) if show_progress && len > PROGRESS_THRESHOLD => Some(create_download_bar(len)),
        _ => None,
    };

    // Stream to file
    let mut file = File::create(output_path).await?;
    let mut stream = response.bytes_stream();
    let mut downloaded: u64 = 0;

    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(|e| Error::Download(format!("Stream error: {}", e)))?;
        file.write_all(&chunk).await?;
        downloaded += chunk.len() as u64;

        if let Some(ref pb) = progress {
            pb.set_position(downloaded);
        }
    }

    file.flush().await?;

    if let Some(pb) = progress {
        pb.finish_and_clear();
    }

    tracing::debug!("Wrote {} bytes to {}", downloaded, output_path.display());

    Ok(downloaded)
}
