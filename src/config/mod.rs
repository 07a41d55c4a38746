pub mod service;

pub use crate::domain::model::DisplayNameStyle;
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::path::PathBuf;

/// Prepended to every login name unless `--user-prefix` is given.
pub const DEFAULT_USER_PREFIX: &str = "";

/// Per-run choices for turning input rows into account requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportOptions {
    pub user_prefix: String,
    pub display_name: DisplayNameStyle,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            user_prefix: DEFAULT_USER_PREFIX.to_string(),
            display_name: DisplayNameStyle::default(),
        }
    }
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "jira-user-import")]
#[command(about = "Create Jira user accounts from a ';'-separated file")]
pub struct CliConfig {
    /// Input file: header row, then first;last;email;username;password
    pub input: Option<PathBuf>,

    #[arg(long, help = "Settings file loaded into the environment (default: .env)")]
    pub env_file: Option<PathBuf>,

    #[arg(long, help = "Prefix prepended to every login name")]
    pub user_prefix: Option<String>,

    #[arg(long, value_enum, default_value_t = DisplayNameStyle::Username)]
    pub display_name: DisplayNameStyle,

    #[arg(short, long, help = "Enable debug output (same as DEBUG=true)")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    pub fn import_options(&self) -> ImportOptions {
        ImportOptions {
            user_prefix: self
                .user_prefix
                .clone()
                .unwrap_or_else(|| DEFAULT_USER_PREFIX.to_string()),
            display_name: self.display_name,
        }
    }
}
