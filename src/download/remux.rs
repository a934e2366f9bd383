//! Episode remuxing through ffmpeg.

use std::path::Path;
use std::process::Stdio;

use tokio::io::AsyncWriteExt;
use tokio::process::Command;

use crate::api::Episode;
use crate::error::{Error, Result};

/// Build the ffmpeg FFMETADATA document describing an episode's chapters.
pub fn chapter_metadata(episode: &Episode) -> String {
    let mut metadata = format!(";FFMETADATA1\ntitle={}\n\n", episode.name);

    for chapter in &episode.chapters {
        metadata.push_str(&format!(
            "[CHAPTER]\nTIMEBASE=1/1000\nSTART={}\nEND={}\ntitle={}\n\n",
            chapter.video_start_ms, chapter.video_end_ms, chapter.name
        ));
    }

    metadata
}

/// Arguments for ffmpeg.
///
/// Input 0 is the chapter document on stdin, input 1 the video source, input 2 the
/// optional caption file. Audio and video are copied, captions become `mov_text`.
pub fn remux_args(source_url: &str, caption_file: Option<&str>, output_file: &str) -> Vec<String> {
    let mut args = vec!["-hide_banner", "-i", "-", "-i", source_url];
    if let Some(vtt) = caption_file {
        args.extend(["-i", vtt]);
    }

    args.extend(["-map", "1"]);
    if caption_file.is_some() {
        args.extend(["-map", "2"]);
    }

    // Chapters go last
    args.extend(["-map_metadata", "0"]);
    args.extend(["-c", "copy", "-c:s", "mov_text"]);
    args.extend(["-movflags", "+faststart"]);
    args.extend(["-y", output_file]);

    args.into_iter().map(String::from).collect()
}

/// Render a command line for error messages.
pub fn display_command(program: &str, args: &[String]) -> String {
    std::iter::once(program)
        .chain(args.iter().map(String::as_str))
        .map(|part| {
            if part.contains(char::is_whitespace) {
                format!("{:?}", part)
            } else {
                part.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Run the remux program in `working_dir`, feeding `metadata` on stdin.
pub async fn run_remux(
    program: &str,
    args: &[String],
    working_dir: &Path,
    metadata: &str,
    episode_id: &str,
) -> Result<()> {
    tracing::debug!("Running {}", display_command(program, args));

    let mut child = Command::new(program)
        .args(args)
        .current_dir(working_dir)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::RemuxNotFound(program.to_string())
            } else {
                Error::Io(e)
            }
        })?;

    if let Some(mut stdin) = child.stdin.take() {
        match stdin.write_all(metadata.as_bytes()).await {
            // The exit status decides; a program that stops reading early is not an error here.
            Err(e) if e.kind() == std::io::ErrorKind::BrokenPipe => {}
            other => other?,
        }
        // Closing stdin ends the chapter input
        drop(stdin);
    }

    let status = child.wait().await?;

    if !status.success() {
        tracing::error!("ffmpeg exited with status: {}", status);
        return Err(Error::Remux {
            episode_id: episode_id.to_string(),
            command: display_command(program, args),
        });
    }

    Ok(())
}
