// Application layer: wires the input file, the Jira client and the importer together.

use crate::adapters::csv_source::read_users;
use crate::adapters::jira::JiraClient;
use crate::config::service::ServiceConfig;
use crate::config::ImportOptions;
use crate::core::importer::UserImporter;
use crate::core::ImportSummary;
use crate::utils::error::{ImportError, Result};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Checks the positional input argument before any other work is done.
pub fn resolve_input_path(arg: Option<&Path>) -> Result<PathBuf> {
    let path = arg.ok_or(ImportError::MissingInputFile)?;
    match std::fs::metadata(path) {
        Ok(_) => Ok(path.to_path_buf()),
        Err(e) if e.kind() == ErrorKind::NotFound => Err(ImportError::InputFileNotFound {
            path: path.display().to_string(),
        }),
        Err(e) => Err(ImportError::IoError(e)),
    }
}

/// Reads every user from `input` and creates them one by one.
///
/// Input errors and client construction errors abort before any request
/// is sent. Per-user failures end up in the returned summary.
pub async fn run_import(
    input: &Path,
    service: &ServiceConfig,
    options: ImportOptions,
) -> Result<ImportSummary> {
    let users = read_users(input)?;
    tracing::debug!("Users: {:?}", users);

    let client = JiraClient::new(service)?;
    tracing::info!("Jira client created");

    let importer = UserImporter::new(client, options);
    let summary = importer.run(&users).await;

    tracing::info!(
        "📊 Import finished - attempted: {}, created: {}, failed: {}",
        summary.attempted(),
        summary.created.len(),
        summary.failed.len()
    );
    for failure in &summary.failed {
        tracing::warn!(
            "  - {} (line {}): {}",
            failure.username,
            failure.line,
            failure.reason
        );
    }

    Ok(summary)
}
