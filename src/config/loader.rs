//! Configuration structures and loading logic.

use std::fs;
use std::path::{Path, PathBuf};

use ini::{Ini, ParseOption, Properties};

use crate::config::modes::TestMode;
use crate::error::{Error, Result};

/// Default configuration file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "bluarchive.ini";

/// INI section holding every setting.
pub const CONFIG_SECTION: &str = "bluprint";

/// Session token cookie name (also the config key).
pub const TOKEN_KEY: &str = "craftsy_tok";

/// User id cookie name (also the config key).
pub const USER_ID_KEY: &str = "craftsy_userId";

/// Template written when no configuration file exists yet.
const CONFIG_TEMPLATE: &[&str] = &[
    "[bluprint]",
    "; Mandatory - Get from cookies",
    "craftsy_tok = aAaAbBbBcCcC",
    "craftsy_userId = 123456\r\n",
    "; Optional",
    ";download_patterns = yes",
    ";download_materials = yes",
    ";download_videos = yes",
    ";output_dir = bluprint_{user_id}\r\n",
];

/// Main configuration structure.
#[derive(Debug, Clone)]
pub struct Config {
    pub account: AccountConfig,
    pub options: OptionsConfig,
}

/// Account credentials, both taken from browser cookies.
#[derive(Debug, Clone, Default)]
pub struct AccountConfig {
    /// Value of the `craftsy_tok` cookie.
    pub token: String,

    /// Value of the `craftsy_userId` cookie.
    pub user_id: String,
}

/// Download options configuration.
#[derive(Debug, Clone)]
pub struct OptionsConfig {
    /// Whether to archive purchased patterns.
    pub download_patterns: bool,

    /// Whether to archive class materials.
    pub download_materials: bool,

    /// Whether to archive class videos.
    pub download_videos: bool,

    /// Output directory template; `{user_id}` is substituted.
    pub output_dir: String,

    /// Program invoked to remux episodes.
    pub ffmpeg: String,

    /// Whether to show progress bars for large downloads.
    pub show_progress: bool,

    /// Early-exit mode for validation runs.
    pub test_mode: TestMode,
}

impl Default for OptionsConfig {
    fn default() -> Self {
        Self {
            download_patterns: true,
            download_materials: true,
            download_videos: true,
            output_dir: default_output_dir(),
            ffmpeg: default_ffmpeg(),
            show_progress: true,
            test_mode: TestMode::Off,
        }
    }
}

fn default_output_dir() -> String {
    "bluprint_{user_id}".to_string()
}

fn default_ffmpeg() -> String {
    "ffmpeg".to_string()
}

/// Interpret a boolean-like setting. Only `no` and `false` disable.
fn parse_flag(value: Option<&str>) -> bool {
    match value {
        Some(v) => !matches!(v.trim().to_lowercase().as_str(), "no" | "false"),
        None => true,
    }
}

/// Look up a key ignoring ASCII case, the way INI keys have always been matched here.
fn lookup<'a>(section: &'a Properties, key: &str) -> Option<&'a str> {
    section
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case(key))
        .map(|(_, v)| v.trim())
}

impl Config {
    /// Load configuration from an INI file.
    ///
    /// A missing file is replaced by a template and reported as [`Error::Unconfigured`].
    pub fn load(path: &Path) -> Result<Self> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Self::write_template(path)?;
                return Err(Error::Unconfigured(path.to_path_buf()));
            }
            Err(e) => return Err(Error::Io(e)),
        };

        Self::from_ini_str(&content).map_err(|e| match e {
            Error::Config(msg) => Error::Config(format!(
                "{} Checked {}. If you need a fresh start, delete the file and run this program again.",
                msg,
                path.display()
            )),
            other => other,
        })
    }

    /// Parse configuration from INI text.
    pub fn from_ini_str(content: &str) -> Result<Self> {
        let opt = ParseOption {
            enabled_quote: false,
            enabled_escape: false,
            ..Default::default()
        };
        let ini = Ini::load_from_str_opt(content, opt)?;

        let section = ini
            .section(Some(CONFIG_SECTION))
            .ok_or_else(|| Error::Config(format!("Invalid config: no [{}] section.", CONFIG_SECTION)))?;

        let token = lookup(section, TOKEN_KEY)
            .ok_or_else(|| Error::MissingConfig(TOKEN_KEY.to_string()))?
            .to_string();
        let user_id = lookup(section, USER_ID_KEY)
            .ok_or_else(|| Error::MissingConfig(USER_ID_KEY.to_string()))?
            .to_string();

        let options = OptionsConfig {
            download_patterns: parse_flag(lookup(section, "download_patterns")),
            download_materials: parse_flag(lookup(section, "download_materials")),
            download_videos: parse_flag(lookup(section, "download_videos")),
            output_dir: lookup(section, "output_dir")
                .map(str::to_string)
                .unwrap_or_else(default_output_dir),
            ffmpeg: lookup(section, "ffmpeg")
                .map(str::to_string)
                .unwrap_or_else(default_ffmpeg),
            ..OptionsConfig::default()
        };

        Ok(Self {
            account: AccountConfig { token, user_id },
            options,
        })
    }

    /// Write the placeholder configuration template.
    pub fn write_template(path: &Path) -> Result<()> {
        fs::write(path, CONFIG_TEMPLATE.join("\r\n"))?;
        Ok(())
    }

    /// Get the effective output directory with `{user_id}` substituted.
    pub fn output_directory(&self) -> PathBuf {
        PathBuf::from(
            self.options
                .output_dir
                .replace("{user_id}", &self.account.user_id),
        )
    }

    /// Whether any class content is selected.
    pub fn wants_classes(&self) -> bool {
        self.options.download_videos || self.options.download_materials
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const VALID: &str = "[bluprint]\r\ncraftsy_tok = realtoken\r\ncraftsy_userId = 42\r\n";

    #[test]
    fn test_defaults_when_optional_keys_absent() {
        let config = Config::from_ini_str(VALID).unwrap();
        assert_eq!(config.account.token, "realtoken");
        assert_eq!(config.account.user_id, "42");
        assert!(config.options.download_patterns);
        assert!(config.options.download_materials);
        assert!(config.options.download_videos);
        assert_eq!(config.options.ffmpeg, "ffmpeg");
        assert_eq!(config.output_directory(), PathBuf::from("bluprint_42"));
    }

    #[test]
    fn test_flags_and_output_template() {
        let content = "[bluprint]\n\
                       craftsy_tok = realtoken\n\
                       craftsy_userid = 42\n\
                       download_patterns = No\n\
                       download_materials = false\n\
                       download_videos = 0\n\
                       output_dir = archive/{user_id}/data\n";
        let config = Config::from_ini_str(content).unwrap();
        assert!(!config.options.download_patterns);
        assert!(!config.options.download_materials);
        // Only "no" and "false" disable a toggle.
        assert!(config.options.download_videos);
        assert!(config.wants_classes());
        assert_eq!(
            config.output_directory(),
            PathBuf::from("archive/42/data")
        );
    }

    #[test]
    fn test_missing_section() {
        let err = Config::from_ini_str("[other]\ncraftsy_tok = x\n").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_missing_required_key() {
        let err = Config::from_ini_str("[bluprint]\ncraftsy_tok = x\n").unwrap_err();
        match err {
            Error::MissingConfig(key) => assert_eq!(key, USER_ID_KEY),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_load_writes_template_when_absent() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(DEFAULT_CONFIG_FILE);

        let err = Config::load(&path).unwrap_err();
        assert!(matches!(err, Error::Unconfigured(_)));

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("[bluprint]\r\n"));
        assert!(written.contains("craftsy_tok = aAaAbBbBcCcC"));

        // The template parses, but still carries placeholder credentials.
        let config = Config::load(&path).unwrap();
        assert_eq!(config.account.token, "aAaAbBbBcCcC");
        assert_eq!(config.account.user_id, "123456");
    }
}
