use crate::utils::error::Result;
use async_trait::async_trait;

/// The two IAM calls the provisioner needs. Implemented over the AWS SDK in
/// `config::aws` and by in-memory fakes in tests.
#[async_trait]
pub trait IdentityClient: Send + Sync {
    async fn create_user(&self, user_name: &str) -> Result<()>;
    async fn put_user_policy(
        &self,
        user_name: &str,
        policy_name: &str,
        policy_document: &str,
    ) -> Result<()>;
}
