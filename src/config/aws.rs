use crate::config::toml_config::AwsSettings;
use crate::domain::ports::IdentityClient;
use crate::utils::error::{BrickError, Result};
use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_iam::config::Region;
use aws_sdk_iam::error::DisplayErrorContext;
use aws_sdk_iam::Client as AwsIamClient;

#[derive(Debug, Clone)]
pub struct IamClient {
    client: AwsIamClient,
}

impl IamClient {
    pub fn new(client: AwsIamClient) -> Self {
        Self { client }
    }

    /// Loads shared AWS configuration for the given named profile.
    pub async fn from_settings(settings: &AwsSettings) -> Self {
        let mut loader = aws_config::defaults(BehaviorVersion::latest())
            .profile_name(settings.profile.as_str());
        if let Some(region) = &settings.region {
            loader = loader.region(Region::new(region.clone()));
        }

        let config = loader.load().await;
        tracing::debug!(
            "Loaded AWS config for profile {} (region: {:?})",
            settings.profile,
            config.region()
        );
        Self::new(AwsIamClient::new(&config))
    }
}

#[async_trait]
impl IdentityClient for IamClient {
    async fn create_user(&self, user_name: &str) -> Result<()> {
        self.client
            .create_user()
            .user_name(user_name)
            .send()
            .await
            .map_err(|e| BrickError::ProvisioningError {
                user: user_name.to_string(),
                stage: "create_user".to_string(),
                message: DisplayErrorContext(&e).to_string(),
            })?;
        Ok(())
    }

    async fn put_user_policy(
        &self,
        user_name: &str,
        policy_name: &str,
        policy_document: &str,
    ) -> Result<()> {
        self.client
            .put_user_policy()
            .user_name(user_name)
            .policy_name(policy_name)
            .policy_document(policy_document)
            .send()
            .await
            .map_err(|e| BrickError::ProvisioningError {
                user: user_name.to_string(),
                stage: "put_user_policy".to_string(),
                message: DisplayErrorContext(&e).to_string(),
            })?;
        Ok(())
    }
}
