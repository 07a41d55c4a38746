use serde::{Deserialize, Serialize};
use std::fmt;

/// One data row of the input file.
#[derive(Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub username: String,
    pub password: String,
    /// 1-based line in the source file.
    pub line: u64,
}

impl fmt::Debug for UserRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserRecord")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("email", &self.email)
            .field("username", &self.username)
            .field("password", &"***")
            .field("line", &self.line)
            .finish()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum DisplayNameStyle {
    /// Use the username as display name.
    #[default]
    Username,
    /// "First Last", falling back to the username when both are blank.
    FullName,
}

/// Body of `POST /rest/api/2/user`.
#[derive(Clone, Serialize)]
pub struct RemoteUserRequest {
    pub name: String,
    pub password: String,
    #[serde(rename = "emailAddress")]
    pub email_address: String,
    #[serde(rename = "displayName")]
    pub display_name: String,
}

impl RemoteUserRequest {
    pub fn from_record(record: &UserRecord, prefix: &str, style: DisplayNameStyle) -> Self {
        let display_name = match style {
            DisplayNameStyle::Username => record.username.clone(),
            DisplayNameStyle::FullName => {
                let full = format!("{} {}", record.first_name.trim(), record.last_name.trim());
                let full = full.trim();
                if full.is_empty() {
                    record.username.clone()
                } else {
                    full.to_string()
                }
            }
        };

        Self {
            name: format!("{}{}", prefix, record.username),
            password: record.password.clone(),
            email_address: record.email.clone(),
            display_name,
        }
    }
}

impl fmt::Debug for RemoteUserRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RemoteUserRequest")
            .field("name", &self.name)
            .field("password", &"***")
            .field("email_address", &self.email_address)
            .field("display_name", &self.display_name)
            .finish()
    }
}

/// What the service acknowledged for a created account.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreatedUser {
    pub name: String,
    #[serde(default)]
    pub key: Option<String>,
    #[serde(rename = "self", default)]
    pub self_link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedUser {
    pub username: String,
    pub line: u64,
    pub reason: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub created: Vec<CreatedUser>,
    pub failed: Vec<FailedUser>,
}

impl ImportSummary {
    pub fn attempted(&self) -> usize {
        self.created.len() + self.failed.len()
    }

    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}
