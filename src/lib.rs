pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::jira::JiraClient;
pub use app::{resolve_input_path, run_import};
pub use config::{service::ServiceConfig, ImportOptions};
pub use crate::core::{importer::UserImporter, ImportSummary};
pub use utils::error::{ImportError, Result};
