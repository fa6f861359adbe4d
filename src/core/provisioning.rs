use crate::domain::model::{
    IamUserSpec, ProvisionOutcome, ProvisionReport, ProvisionStage, UserResult,
};
use crate::domain::ports::IdentityClient;

/// Creates each user and attaches its inline policy, one attempt per user.
///
/// A failure is logged and recorded, then the next user is processed.
pub struct Provisioner<C: IdentityClient> {
    client: C,
}

impl<C: IdentityClient> Provisioner<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub async fn run(&self, users: &[IamUserSpec]) -> ProvisionReport {
        let mut report = ProvisionReport::default();

        for user in users {
            let outcome = match self.provision_user(user).await {
                Ok(()) => ProvisionOutcome::Provisioned,
                Err((stage, message)) => {
                    tracing::error!("Error creating user {}: {}", user.user_name, message);
                    ProvisionOutcome::Failed { stage, message }
                }
            };

            report.results.push(UserResult {
                user_name: user.user_name.clone(),
                outcome,
            });
        }

        tracing::info!(
            "Provisioning completed. {} succeeded, {} failed",
            report.succeeded(),
            report.failed()
        );
        report
    }

    async fn provision_user(
        &self,
        user: &IamUserSpec,
    ) -> std::result::Result<(), (ProvisionStage, String)> {
        self.client
            .create_user(&user.user_name)
            .await
            .map_err(|e| (ProvisionStage::CreateUser, e.to_string()))?;
        tracing::info!("Created user {}", user.user_name);

        let document = user
            .policy_document
            .to_json()
            .map_err(|e| (ProvisionStage::PutUserPolicy, e.to_string()))?;
        self.client
            .put_user_policy(&user.user_name, &user.policy_name, &document)
            .await
            .map_err(|e| (ProvisionStage::PutUserPolicy, e.to_string()))?;
        tracing::info!(
            "Attached policy {} to user {}",
            user.policy_name,
            user.user_name
        );

        Ok(())
    }
}
