//! Configuration validation logic.

use crate::config::loader::{Config, TOKEN_KEY, USER_ID_KEY};
use crate::error::{Error, Result};

/// Prefix of the token written into the configuration template.
const PLACEHOLDER_TOKEN_PREFIX: &str = "aAaAbB";

/// User id written into the configuration template.
const PLACEHOLDER_USER_ID: &str = "123456";

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_credentials(&config.account.token, &config.account.user_id)?;
    validate_output_dir(&config.options.output_dir)?;

    Ok(())
}

/// Validate both session cookies.
pub fn validate_credentials(token: &str, user_id: &str) -> Result<()> {
    validate_token(token)?;
    validate_user_id(user_id)?;

    Ok(())
}

/// Validate the session token cookie.
pub fn validate_token(token: &str) -> Result<()> {
    if token.trim().is_empty() {
        return Err(Error::MissingConfig(TOKEN_KEY.to_string()));
    }

    if token.starts_with(PLACEHOLDER_TOKEN_PREFIX) {
        return Err(Error::ConfigValidation {
            field: TOKEN_KEY.to_string(),
            message: "Token is still the template placeholder. Did you set your cookies in the config file?"
                .to_string(),
        });
    }

    Ok(())
}

/// Validate the user id cookie.
pub fn validate_user_id(user_id: &str) -> Result<()> {
    if user_id.trim().is_empty() {
        return Err(Error::MissingConfig(USER_ID_KEY.to_string()));
    }

    if user_id == PLACEHOLDER_USER_ID {
        return Err(Error::ConfigValidation {
            field: USER_ID_KEY.to_string(),
            message: "User id is still the template placeholder. Did you set your cookies in the config file?"
                .to_string(),
        });
    }

    if !user_id.chars().all(|c| c.is_ascii_digit()) {
        return Err(Error::ConfigValidation {
            field: USER_ID_KEY.to_string(),
            message: format!("User id must be numeric (got '{}')", user_id),
        });
    }

    Ok(())
}

/// Validate the output directory template.
pub fn validate_output_dir(output_dir: &str) -> Result<()> {
    if output_dir.trim().is_empty() {
        return Err(Error::ConfigValidation {
            field: "output_dir".to_string(),
            message: "Output directory cannot be empty".to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_credentials() {
        assert!(validate_credentials("c0ffee-token", "987654").is_ok());
    }

    #[test]
    fn test_placeholder_token() {
        let err = validate_token("aAaAbBbBcCcC").unwrap_err();
        assert!(matches!(err, Error::ConfigValidation { .. }));
    }

    #[test]
    fn test_placeholder_user_id() {
        assert!(validate_user_id("123456").is_err());
    }

    #[test]
    fn test_empty_values() {
        assert!(matches!(
            validate_token("").unwrap_err(),
            Error::MissingConfig(_)
        ));
        assert!(matches!(
            validate_user_id("  ").unwrap_err(),
            Error::MissingConfig(_)
        ));
    }

    #[test]
    fn test_non_numeric_user_id() {
        assert!(validate_user_id("12ab").is_err());
    }

    #[test]
    fn test_empty_output_dir() {
        assert!(validate_output_dir("").is_err());
        assert!(validate_output_dir("bluprint_{user_id}").is_ok());
    }
}
