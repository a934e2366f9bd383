//! API response type definitions.

use std::fmt;

use serde::Deserialize;

/// Identifier that the API sends either as a number or as a string.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ApiId {
    Number(u64),
    Text(String),
}

impl fmt::Display for ApiId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiId::Number(n) => write!(f, "{}", n),
            ApiId::Text(s) => f.write_str(s),
        }
    }
}

/// Paged pattern listing.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternListing {
    #[serde(default)]
    pub total_pages: u64,
    #[serde(default)]
    pub hits: Vec<PatternHit>,
}

/// One pattern in the listing.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternHit {
    pub library_baseball_card: PatternCard,
}

/// Pattern summary card.
#[derive(Debug, Clone, Deserialize)]
pub struct PatternCard {
    pub id: ApiId,
    pub name: Option<String>,
}

/// Class enrollment.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Enrollment {
    pub playlist_id: ApiId,
    #[serde(default)]
    pub archived: bool,
}

/// Full class record, including its episodes.
#[derive(Debug, Clone, Deserialize)]
pub struct Playlist {
    pub name: String,
    #[serde(default)]
    pub episodes: Vec<Episode>,
}

/// One video unit within a class.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Episode {
    pub episode_id: ApiId,
    pub name: String,
    #[serde(default)]
    pub chapters: Vec<Chapter>,
}

/// Named time range within an episode.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chapter {
    pub video_start_ms: u64,
    pub video_end_ms: u64,
    pub name: String,
}

/// Supplementary class resource.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Material {
    pub material_name: String,
    pub material_path: String,
    #[serde(default)]
    pub downloadable: bool,
}

/// One available stream variant of an episode.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EpisodeSource {
    pub format: String,
    pub url: String,
    pub vtt_url: Option<String>,
}

/// A decoded payload together with the bytes it was decoded from.
#[derive(Debug)]
pub struct Fetched<T> {
    pub payload: T,
    pub raw: Vec<u8>,
}
