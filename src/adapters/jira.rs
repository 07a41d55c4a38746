use crate::config::service::{ServiceConfig, URL_ENV};
use crate::domain::model::{CreatedUser, RemoteUserRequest};
use crate::domain::ports::UserDirectory;
use crate::utils::error::{ImportError, Result};
use crate::utils::validation::validate_url;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::collections::BTreeMap;
use url::Url;

pub const USER_ENDPOINT: &str = "rest/api/2/user";

/// Jira user-management client authenticated with basic auth.
pub struct JiraClient {
    client: Client,
    endpoint: Url,
    username: String,
    password: String,
}

impl JiraClient {
    pub fn new(config: &ServiceConfig) -> Result<Self> {
        let mut base = validate_url(URL_ENV, &config.url)?;

        // "https://host/jira" must resolve to "https://host/jira/rest/...".
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        let endpoint = base
            .join(USER_ENDPOINT)
            .map_err(|e| ImportError::InvalidConfigValue {
                field: URL_ENV.to_string(),
                value: config.url.clone(),
                reason: format!("Cannot build user endpoint: {}", e),
            })?;

        tracing::debug!("Creating Jira client for {}", endpoint);

        Ok(Self {
            client: Client::builder().build()?,
            endpoint,
            username: config.username.clone(),
            password: config.password.clone(),
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl UserDirectory for JiraClient {
    async fn create_user(&self, request: &RemoteUserRequest) -> Result<CreatedUser> {
        tracing::debug!("POST {} for {:?}", self.endpoint, request);

        let response = self
            .client
            .post(self.endpoint.clone())
            .basic_auth(&self.username, Some(&self.password))
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        tracing::debug!("Jira response status: {}", status);

        if !status.is_success() {
            return Err(ImportError::RemoteRejected {
                status: status.as_u16(),
                message: rejection_message(status, &body),
            });
        }

        match serde_json::from_str::<CreatedUser>(&body) {
            Ok(created) => Ok(created),
            Err(e) => {
                tracing::debug!("Unrecognised create-user body ({}), using requested name", e);
                Ok(CreatedUser {
                    name: request.name.clone(),
                    key: None,
                    self_link: None,
                })
            }
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct JiraErrorBody {
    #[serde(default)]
    error_messages: Vec<String>,
    #[serde(default)]
    errors: BTreeMap<String, String>,
}

fn rejection_message(status: StatusCode, body: &str) -> String {
    if let Ok(parsed) = serde_json::from_str::<JiraErrorBody>(body) {
        let mut parts = parsed.error_messages;
        parts.extend(
            parsed
                .errors
                .into_iter()
                .map(|(field, message)| format!("{}: {}", field, message)),
        );
        if !parts.is_empty() {
            return parts.join("; ");
        }
    }

    let body = body.trim();
    if body.is_empty() {
        status
            .canonical_reason()
            .unwrap_or("no response body")
            .to_string()
    } else {
        body.to_string()
    }
}
