//! Command-line argument definitions using clap.

use clap::Parser;
use std::path::PathBuf;

use crate::config::{Config, TestMode, DEFAULT_CONFIG_FILE};

/// Bluprint content archiver CLI.
#[derive(Parser, Debug)]
#[command(
    name = "bluarchive",
    version,
    about = "Archive purchased Bluprint patterns, class materials and videos",
    long_about = "Downloads your purchased patterns, class materials and class videos from Bluprint.\n\n\
                  Session cookies are read from the configuration file; a template is written on first run."
)]
pub struct Args {
    /// Path to configuration file.
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Output directory (overrides `output_dir`; `{user_id}` is substituted).
    #[arg(short = 'o', long = "output-dir")]
    pub output_dir: Option<String>,

    /// Don't download patterns.
    #[arg(long)]
    pub no_patterns: bool,

    /// Don't download class materials.
    #[arg(long)]
    pub no_materials: bool,

    /// Don't download class videos.
    #[arg(long)]
    pub no_videos: bool,

    /// Program used to remux episodes.
    #[arg(long)]
    pub ffmpeg: Option<String>,

    /// Early-exit test mode: 1 stops after the first episode, 2 after the first class.
    #[arg(long = "test-mode", env = "BLU_TEST", hide_env_values = true)]
    pub test_mode: Option<String>,

    /// Hide download progress bars.
    #[arg(long, short)]
    pub quiet: bool,

    /// Enable debug logging.
    #[arg(long)]
    pub debug: bool,
}

impl Args {
    /// Merge CLI arguments into an existing config, overriding where specified.
    pub fn merge_into_config(self, config: &mut Config) {
        if let Some(dir) = self.output_dir {
            config.options.output_dir = dir;
        }

        if let Some(ffmpeg) = self.ffmpeg {
            config.options.ffmpeg = ffmpeg;
        }

        if let Some(mode) = self.test_mode {
            config.options.test_mode = mode.parse().unwrap_or(TestMode::Off);
        }

        // Boolean flags (only override if set to non-default)
        if self.no_patterns {
            config.options.download_patterns = false;
        }

        if self.no_materials {
            config.options.download_materials = false;
        }

        if self.no_videos {
            config.options.download_videos = false;
        }

        if self.quiet {
            config.options.show_progress = false;
        }
    }
}
