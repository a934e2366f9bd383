//! Authenticated session setup.

use std::sync::Arc;

use reqwest::cookie::Jar;
use reqwest::Client;
use url::Url;

use crate::config::loader::{TOKEN_KEY, USER_ID_KEY};
use crate::config::validate_credentials;
use crate::error::{Error, Result};

/// Domain the session cookies are scoped to.
pub const COOKIE_DOMAIN: &str = ".mybluprint.com";

/// Origin used when seeding the cookie jar.
const COOKIE_ORIGIN: &str = "https://www.mybluprint.com/";

/// User agent sent with every request.
pub const USER_AGENT: &str = "Bluprint Archiver";

/// Session credentials taken from the browser cookies.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub user_id: String,
    pub token: String,
}

impl Credentials {
    pub fn new(user_id: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            token: token.into(),
        }
    }
}

/// Build a cookie jar holding both session cookies for the platform domain.
pub fn build_cookie_jar(credentials: &Credentials) -> Result<Arc<Jar>> {
    let origin = Url::parse(COOKIE_ORIGIN)?;
    let jar = Jar::default();

    for (name, value) in [
        (TOKEN_KEY, credentials.token.as_str()),
        (USER_ID_KEY, credentials.user_id.as_str()),
    ] {
        jar.add_cookie_str(
            &format!("{}={}; Domain={}; Path=/", name, value, COOKIE_DOMAIN),
            &origin,
        );
    }

    Ok(Arc::new(jar))
}

/// Build the HTTP client every request goes through.
///
/// Fails before any network traffic when the credentials are absent or still
/// the template placeholders.
pub fn build_client(credentials: &Credentials) -> Result<Client> {
    validate_credentials(&credentials.token, &credentials.user_id)?;

    let jar = build_cookie_jar(credentials)?;

    Client::builder()
        .user_agent(USER_AGENT)
        .cookie_provider(jar)
        .build()
        .map_err(|e| Error::Api(format!("Failed to create HTTP client: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::cookie::CookieStore;

    #[test]
    fn test_cookies_sent_to_api_host() {
        let jar = build_cookie_jar(&Credentials::new("987654", "secret")).unwrap();

        let api = Url::parse("https://api.mybluprint.com/enrollments").unwrap();
        let header = jar.cookies(&api).unwrap();
        let header = header.to_str().unwrap();
        assert!(header.contains("craftsy_tok=secret"));
        assert!(header.contains("craftsy_userId=987654"));
    }

    #[test]
    fn test_cookies_not_sent_elsewhere() {
        let jar = build_cookie_jar(&Credentials::new("987654", "secret")).unwrap();

        let other = Url::parse("https://cdn.example.com/file.pdf").unwrap();
        assert!(jar.cookies(&other).is_none());
    }

    #[test]
    fn test_client_rejects_placeholders() {
        let err = build_client(&Credentials::new("123456", "real")).unwrap_err();
        assert!(matches!(err, Error::ConfigValidation { .. }));

        let err = build_client(&Credentials::new("987654", "aAaAbBbBcCcC")).unwrap_err();
        assert!(matches!(err, Error::ConfigValidation { .. }));
    }

    #[test]
    fn test_client_rejects_missing_cookie() {
        let err = build_client(&Credentials::new("987654", "")).unwrap_err();
        assert!(matches!(err, Error::MissingConfig(_)));
    }
}
