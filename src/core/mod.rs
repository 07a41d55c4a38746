pub mod importer;

pub use crate::domain::model::{CreatedUser, ImportSummary, RemoteUserRequest, UserRecord};
pub use crate::domain::ports::UserDirectory;
pub use crate::utils::error::Result;
