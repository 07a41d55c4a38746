use crate::utils::error::Result;
use crate::utils::validation::{validate_required_field, validate_url, Validate};
use std::fmt;
use std::path::Path;

pub const URL_ENV: &str = "JIRA_URL";
pub const USERNAME_ENV: &str = "JIRA_USERNAME";
pub const PASSWORD_ENV: &str = "JIRA_PASSWORD";
pub const DEFAULT_ENV_FILE: &str = ".env";

/// Connection settings for the issue tracker.
#[derive(Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub url: String,
    pub username: String,
    pub password: String,
}

impl ServiceConfig {
    /// Seeds the process environment from a settings file, then reads the
    /// required variables. Variables already set are not overridden.
    pub fn load(env_file: Option<&Path>) -> Result<Self> {
        // Only the given file, or `.env` in the working directory; parent
        // directories are never searched.
        let env_file = env_file.unwrap_or(Path::new(DEFAULT_ENV_FILE));
        if let Err(e) = dotenvy::from_path(env_file) {
            tracing::warn!("Error loading {}: {}", env_file.display(), e);
        }

        let config = Self::from_lookup(|key| std::env::var(key).ok())?;
        tracing::debug!("Config loaded: {:?}", config);
        Ok(config)
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let url = lookup(URL_ENV);
        let username = lookup(USERNAME_ENV);
        let password = lookup(PASSWORD_ENV);

        let config = Self {
            url: validate_required_field(URL_ENV, &url)?.trim().to_string(),
            username: validate_required_field(USERNAME_ENV, &username)?.to_string(),
            password: validate_required_field(PASSWORD_ENV, &password)?.to_string(),
        };
        config.validate()?;
        Ok(config)
    }
}

impl Validate for ServiceConfig {
    fn validate(&self) -> Result<()> {
        validate_url(URL_ENV, &self.url)?;
        Ok(())
    }
}

impl fmt::Debug for ServiceConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceConfig")
            .field("url", &self.url)
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}
