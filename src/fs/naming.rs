//! Filename derivation and cleaning.

use url::Url;

use crate::error::{Error, Result};

/// Marker that starts the asset-id suffix the platform appends to uploaded file names.
const ASSET_ID_MARKER: &str = "_aiid";

/// Decode a `application/x-www-form-urlencoded` style component (`+` means space).
pub fn unquote_plus(s: &str) -> String {
    let replaced = s.replace('+', " ");
    String::from_utf8_lossy(&urlencoding::decode_binary(replaced.as_bytes())).into_owned()
}

/// Path part of a URL, or of a bare path with any query or fragment cut off.
fn url_path(url: &str) -> String {
    match Url::parse(url) {
        Ok(parsed) => parsed.path().to_string(),
        Err(_) => url
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
            .to_string(),
    }
}

/// File name for a downloaded URL: its decoded basename.
pub fn url_filename(url: &str) -> String {
    let path = url_path(url);
    let basename = path.rsplit('/').next().unwrap_or_default();
    unquote_plus(basename)
}

/// File name to save a URL under, refusing names that would leave the target directory.
///
/// Decoding can turn `%2F` into a separator, so the check runs on the decoded name.
pub fn download_filename(url: &str) -> Result<String> {
    let filename = url_filename(url);

    if filename.contains(['/', '\\', '\0']) || !is_usable_component(&filename) {
        return Err(Error::Download(format!(
            "Refusing unsafe file name {:?} from {}",
            filename, url
        )));
    }

    Ok(filename)
}

/// Human-readable fragment of a file name: extension and asset-id suffix removed.
///
/// `Cozy%20Socks_aiid123.pdf` becomes `Cozy Socks`.
pub fn name_fragment(filename: &str) -> &str {
    let stem = match filename.rsplit_once('.') {
        Some((stem, _)) => stem,
        None => filename,
    };
    match stem.split_once(ASSET_ID_MARKER) {
        Some((head, _)) => head,
        None => stem,
    }
}

/// Placeholder name for a pattern the platform has no name for.
pub fn unnamed_pattern_name(pattern_id: &str) -> String {
    format!("Unnamed Pattern {}", pattern_id)
}

/// Display name of a pattern.
///
/// Unnamed patterns with exactly one link get the link's file name appended so they are
/// easier to find.
pub fn pattern_display_name(pattern_id: &str, name: Option<&str>, links: &[String]) -> String {
    match (name, links) {
        (Some(name), _) => name.to_string(),
        (None, [only]) => {
            let filename = url_filename(only);
            format!(
                "{} {}",
                unnamed_pattern_name(pattern_id),
                name_fragment(&filename)
            )
        }
        (None, _) => unnamed_pattern_name(pattern_id),
    }
}

/// Clean a pattern name for use as a directory name.
///
/// Removes path separators and double quotes, and collapses runs of spaces. This does not
/// cover every character Windows rejects.
pub fn clean_pattern_name(name: &str) -> String {
    let mut cleaned: String = name
        .chars()
        .filter(|c| !matches!(c, '/' | '\\' | '"'))
        .collect();

    while cleaned.contains("  ") {
        cleaned = cleaned.replace("  ", " ");
    }

    cleaned
}

/// Whether a cleaned name can stand alone as a directory component.
pub fn is_usable_component(name: &str) -> bool {
    let trimmed = name.trim();
    !trimmed.is_empty() && trimmed != "." && trimmed != ".."
}

/// Base output name of an episode: 1-based position and episode name.
pub fn episode_base_name(index: usize, episode_name: &str) -> String {
    format!("{}. {}", index + 1, episode_name)
}
