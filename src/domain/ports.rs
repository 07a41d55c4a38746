use crate::domain::model::{CreatedUser, RemoteUserRequest};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Remote side that owns user accounts.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    async fn create_user(&self, request: &RemoteUserRequest) -> Result<CreatedUser>;
}
