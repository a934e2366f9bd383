//! Bluprint API HTTP client.

use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::api::session::{build_client, Credentials};
use crate::api::types::*;
use crate::error::{Error, Result};

/// Bluprint API base URL.
pub const API_BASE: &str = "https://api.mybluprint.com";

/// Page size requested for the pattern listing, large enough to cover a whole library.
pub const PATTERN_PAGE_SIZE: u32 = 99999;

/// Outcome of a single API call.
#[derive(Debug)]
pub enum Reply<T> {
    /// Success status with a decoded payload.
    Success(Fetched<T>),
    /// Non-success status with the response body.
    Failure { status: StatusCode, body: String },
}

impl<T> Reply<T> {
    /// Treat a failure as a generic API error.
    fn or_api_error(self, context: &str) -> Result<Fetched<T>> {
        match self {
            Reply::Success(fetched) => Ok(fetched),
            Reply::Failure { status, body } => Err(Error::Api(format!(
                "Failed to get {}: HTTP {} - {}",
                context, status, body
            ))),
        }
    }

    /// Treat a failure as an expired or missing session.
    fn or_not_authenticated(self, context: &str) -> Result<Fetched<T>> {
        match self {
            Reply::Success(fetched) => Ok(fetched),
            Reply::Failure { status, body } => Err(Error::NotAuthenticated {
                context: context.to_string(),
                status,
                body,
            }),
        }
    }
}

/// Bluprint API client bound to one authenticated user.
pub struct BluprintApi {
    client: Client,
    base_url: String,
    user_id: String,
}

impl BluprintApi {
    /// Create a client for the production API.
    pub fn new(credentials: &Credentials) -> Result<Self> {
        Self::with_base_url(credentials, API_BASE)
    }

    /// Create a client against another API host.
    pub fn with_base_url(credentials: &Credentials, base_url: impl Into<String>) -> Result<Self> {
        let client = build_client(credentials)?;
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Ok(Self {
            client,
            base_url,
            user_id: credentials.user_id.clone(),
        })
    }

    /// The authenticated user's id.
    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    /// Make a GET request against the API host.
    async fn get(&self, path: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;
        tracing::debug!("Response status: {}", response.status());

        Ok(response)
    }

    /// GET a path and decode its JSON body, keeping the raw bytes.
    async fn fetch<T: DeserializeOwned>(&self, path: &str) -> Result<Reply<T>> {
        let response = self.get(path).await?;
        let status = response.status();

        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|e| format!("<unreadable body: {}>", e));
            tracing::debug!("Error response body: {}", body);
            return Ok(Reply::Failure { status, body });
        }

        let raw = response.bytes().await?.to_vec();
        let payload = serde_json::from_slice(&raw).map_err(|e| {
            let text: String = String::from_utf8_lossy(&raw).chars().take(500).collect();
            Error::Api(format!(
                "Failed to parse response from {}: {} - Response: {}",
                path, e, text
            ))
        })?;

        Ok(Reply::Success(Fetched { payload, raw }))
    }

    /// Get the user's whole pattern listing as a single page.
    pub async fn get_patterns(&self) -> Result<Fetched<PatternListing>> {
        let path = format!(
            "/users/{}/patterns?pageSize={}&sortBy=RESOURCE_NAME",
            self.user_id, PATTERN_PAGE_SIZE
        );
        self.fetch(&path).await?.or_api_error("pattern listing")
    }

    /// Get the direct download links of one pattern.
    pub async fn get_pattern_links(&self, pattern_id: &ApiId) -> Result<Vec<String>> {
        let path = format!(
            "/users/{}/patterns/{}/patternDownloadLinks",
            self.user_id, pattern_id
        );
        let fetched = self
            .fetch(&path)
            .await?
            .or_not_authenticated("pattern download links")?;
        Ok(fetched.payload)
    }

    /// Get the user's class enrollments.
    pub async fn get_enrollments(&self) -> Result<Vec<Enrollment>> {
        let path = format!("/enrollments?userId={}", self.user_id);
        let fetched = self.fetch(&path).await?.or_api_error("enrollments")?;
        Ok(fetched.payload)
    }

    /// Get a class's full record, including episodes and chapters.
    pub async fn get_playlist(&self, playlist_id: &ApiId) -> Result<Fetched<Playlist>> {
        let path = format!("/m/playlists/{}", playlist_id);
        self.fetch(&path).await?.or_api_error("class details")
    }

    /// Get a class's supplementary materials.
    pub async fn get_materials(&self, playlist_id: &ApiId) -> Result<Vec<Material>> {
        let path = format!("/b/playlists/{}/materials", playlist_id);
        let fetched = self.fetch(&path).await?.or_api_error("class materials")?;
        Ok(fetched.payload)
    }

    /// Get the available stream variants of an episode.
    pub async fn get_episode_sources(&self, episode_id: &ApiId) -> Result<Vec<EpisodeSource>> {
        let path = format!("/m/videos/secure/episodes/{}", episode_id);
        let fetched = self
            .fetch(&path)
            .await?
            .or_not_authenticated("episode download links")?;
        Ok(fetched.payload)
    }

    /// Start downloading a file from an absolute URL.
    pub async fn download_file(&self, url: &str) -> Result<Response> {
        tracing::debug!("GET {}", url);
        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(Error::Download(format!(
                "Failed to download {}: HTTP {}",
                url,
                response.status()
            )));
        }

        Ok(response)
    }
}
