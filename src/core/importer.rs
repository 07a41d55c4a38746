use crate::config::ImportOptions;
use crate::core::{ImportSummary, RemoteUserRequest, UserDirectory, UserRecord};
use crate::domain::model::FailedUser;

pub struct UserImporter<D: UserDirectory> {
    directory: D,
    options: ImportOptions,
}

impl<D: UserDirectory> UserImporter<D> {
    pub fn new(directory: D, options: ImportOptions) -> Self {
        Self { directory, options }
    }

    /// Creates one account per record, in order. A rejected record is
    /// recorded and the run moves on to the next one.
    pub async fn run(&self, records: &[UserRecord]) -> ImportSummary {
        let mut summary = ImportSummary::default();

        for record in records {
            tracing::info!("Creating user {}", record.username);
            let request = RemoteUserRequest::from_record(
                record,
                &self.options.user_prefix,
                self.options.display_name,
            );

            match self.directory.create_user(&request).await {
                Ok(created) => {
                    tracing::info!("✅ Created {} (line {})", created.name, record.line);
                    summary.created.push(created);
                }
                Err(e) => {
                    tracing::error!(
                        "❌ Failed to create {} (line {}): {}",
                        request.name,
                        record.line,
                        e
                    );
                    summary.failed.push(FailedUser {
                        username: record.username.clone(),
                        line: record.line,
                        reason: e.to_string(),
                    });
                }
            }
        }

        summary
    }
}
