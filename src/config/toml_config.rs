use crate::domain::model::{IamUserSpec, PolicyAction, PolicyDocument};
use crate::utils::error::{BrickError, Result};
use crate::utils::validation::{validate_iam_name, validate_non_empty_string, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

const MAX_USER_NAME_LEN: usize = 64;
const MAX_POLICY_NAME_LEN: usize = 128;
const ENV_VAR_PATTERN: &str = r"\$\{([^}]+)\}";

fn env_var_regex() -> Result<Regex> {
    Regex::new(ENV_VAR_PATTERN).map_err(|e| BrickError::ConfigError {
        message: format!("Invalid substitution pattern: {}", e),
    })
}

// 未設定的環境變數會保留 ${VAR} 原文，不能直接交給 AWS
fn validate_substituted(field_name: &str, value: &str) -> Result<()> {
    if !value.contains("${") {
        return Ok(());
    }

    let variable = env_var_regex()?
        .captures(value)
        .map(|caps| caps[1].to_string())
        .unwrap_or_else(|| value.to_string());

    Err(BrickError::ConfigError {
        message: format!(
            "{} references environment variable {} which is not set",
            field_name, variable
        ),
    })
}

/// Provisioning manifest: which IAM users to create and the inline policy
/// attached to each.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProvisioningManifest {
    #[serde(default)]
    pub aws: AwsSettings,
    pub users: Vec<IamUserSpec>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AwsSettings {
    #[serde(default = "default_profile")]
    pub profile: String,
    pub region: Option<String>,
}

fn default_profile() -> String {
    "default".to_string()
}

impl Default for AwsSettings {
    fn default() -> Self {
        Self {
            profile: default_profile(),
            region: None,
        }
    }
}

impl Default for ProvisioningManifest {
    /// The three administrator accounts: full access, S3 and EC2.
    fn default() -> Self {
        let admin = |user: &str, policy: &str, action: PolicyAction| IamUserSpec {
            user_name: user.to_string(),
            policy_name: policy.to_string(),
            policy_document: PolicyDocument::allow_all_resources(action),
        };

        Self {
            aws: AwsSettings::default(),
            users: vec![
                admin("AdminUser", "AdminPolicy", PolicyAction::Single("*".to_string())),
                admin(
                    "S3AdminUser",
                    "S3AdminPolicy",
                    PolicyAction::Many(vec!["s3:*".to_string()]),
                ),
                admin(
                    "EC2AdminUser",
                    "EC2AdminPolicy",
                    PolicyAction::Many(vec!["ec2:*".to_string()]),
                ),
            ],
        }
    }
}

impl ProvisioningManifest {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// 替換環境變數 (例如 ${AWS_PROFILE})
    fn substitute_env_vars(content: &str) -> Result<String> {
        let result = env_var_regex()?.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 應用命令列覆蓋設定
    pub fn apply_overrides(&mut self, profile: Option<String>, region: Option<String>) {
        if let Some(profile) = profile {
            tracing::info!("🔧 AWS profile overridden to: {}", profile);
            self.aws.profile = profile;
        }
        if let Some(region) = region {
            tracing::info!("🔧 AWS region overridden to: {}", region);
            self.aws.region = Some(region);
        }
    }

    /// One `user <- policy: {json}` line per user, in manifest order.
    pub fn dry_run_lines(&self) -> Result<Vec<String>> {
        self.users
            .iter()
            .map(|user| {
                Ok(format!(
                    "{} <- {}: {}",
                    user.user_name,
                    user.policy_name,
                    user.policy_document.to_json()?
                ))
            })
            .collect()
    }
}

impl Validate for ProvisioningManifest {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("aws.profile", &self.aws.profile)?;
        validate_substituted("aws.profile", &self.aws.profile)?;
        if let Some(region) = &self.aws.region {
            validate_non_empty_string("aws.region", region)?;
            validate_substituted("aws.region", region)?;
        }

        if self.users.is_empty() {
            return Err(BrickError::ConfigError {
                message: "Manifest must list at least one user".to_string(),
            });
        }

        let mut seen = HashSet::new();
        for user in &self.users {
            validate_iam_name("users.user_name", &user.user_name, MAX_USER_NAME_LEN)?;
            validate_iam_name("users.policy_name", &user.policy_name, MAX_POLICY_NAME_LEN)?;

            if !seen.insert(user.user_name.as_str()) {
                return Err(BrickError::ConfigError {
                    message: format!("User {} is listed more than once", user.user_name),
                });
            }

            if user.policy_document.statement.is_empty() {
                return Err(BrickError::ConfigError {
                    message: format!("Policy {} has no statements", user.policy_name),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const MANIFEST: &str = r#"
[aws]
profile = "staging"
region = "eu-west-1"

[[users]]
user_name = "ReadOnlyUser"
policy_name = "ReadOnlyPolicy"

[users.policy_document]
Version = "2012-10-17"

[[users.policy_document.Statement]]
Effect = "Allow"
Action = ["s3:Get*", "s3:List*"]
Resource = "*"
"#;

    #[test]
    fn test_default_manifest_has_three_admins() {
        let manifest = ProvisioningManifest::default();
        let names: Vec<_> = manifest.users.iter().map(|u| u.user_name.as_str()).collect();

        assert_eq!(names, vec!["AdminUser", "S3AdminUser", "EC2AdminUser"]);
        assert_eq!(manifest.aws.profile, "default");
        assert_eq!(
            manifest.users[0].policy_document.statement[0].action,
            PolicyAction::Single("*".to_string())
        );
        assert!(manifest.validate().is_ok());
    }

    #[test]
    fn test_parse_manifest() {
        let manifest = ProvisioningManifest::from_toml_str(MANIFEST).unwrap();

        assert_eq!(manifest.aws.profile, "staging");
        assert_eq!(manifest.aws.region.as_deref(), Some("eu-west-1"));
        assert_eq!(manifest.users.len(), 1);
        assert_eq!(
            manifest.users[0].policy_document.statement[0].action,
            PolicyAction::Many(vec!["s3:Get*".to_string(), "s3:List*".to_string()])
        );
    }

    #[test]
    fn test_aws_section_is_optional() {
        let content = MANIFEST.replace("[aws]\nprofile = \"staging\"\nregion = \"eu-west-1\"\n", "");
        let manifest = ProvisioningManifest::from_toml_str(&content).unwrap();
        assert_eq!(manifest.aws, AwsSettings::default());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("BRICK_SIZER_TEST_PROFILE", "ops");

        let content = MANIFEST.replace("\"staging\"", "\"${BRICK_SIZER_TEST_PROFILE}\"");
        let manifest = ProvisioningManifest::from_toml_str(&content).unwrap();
        assert_eq!(manifest.aws.profile, "ops");

        std::env::remove_var("BRICK_SIZER_TEST_PROFILE");
    }

    #[test]
    fn test_duplicate_users_fail_validation() {
        let mut manifest = ProvisioningManifest::default();
        manifest.users.push(manifest.users[0].clone());
        assert!(matches!(
            manifest.validate(),
            Err(BrickError::ConfigError { .. })
        ));
    }

    #[test]
    fn test_invalid_toml_is_reported() {
        let err = ProvisioningManifest::from_toml_str("[[users]\n").unwrap_err();
        assert!(matches!(err, BrickError::TomlError(_)));
    }

    #[test]
    fn test_manifest_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(MANIFEST.as_bytes()).unwrap();

        let manifest = ProvisioningManifest::from_file(temp_file.path()).unwrap();
        assert_eq!(manifest.users[0].user_name, "ReadOnlyUser");
        assert!(manifest.validate().is_ok());
    }

    #[test]
    fn test_unset_env_var_fails_validation() {
        std::env::remove_var("BRICK_SIZER_UNSET_PROFILE");
        std::env::remove_var("BRICK_SIZER_UNSET_REGION");

        let content = MANIFEST.replace("\"staging\"", "\"${BRICK_SIZER_UNSET_PROFILE}\"");
        let manifest = ProvisioningManifest::from_toml_str(&content).unwrap();
        assert_eq!(manifest.aws.profile, "${BRICK_SIZER_UNSET_PROFILE}");

        match manifest.validate() {
            Err(BrickError::ConfigError { message }) => {
                assert!(message.contains("aws.profile"));
                assert!(message.contains("BRICK_SIZER_UNSET_PROFILE"));
            }
            other => panic!("expected ConfigError, got {:?}", other),
        }

        let content = MANIFEST.replace("\"eu-west-1\"", "\"${BRICK_SIZER_UNSET_REGION}\"");
        let manifest = ProvisioningManifest::from_toml_str(&content).unwrap();
        assert!(matches!(
            manifest.validate(),
            Err(BrickError::ConfigError { message }) if message.contains("BRICK_SIZER_UNSET_REGION")
        ));
    }

    #[test]
    fn test_overrides_replace_aws_settings() {
        let mut manifest = ProvisioningManifest::from_toml_str(MANIFEST).unwrap();

        manifest.apply_overrides(None, None);
        assert_eq!(manifest.aws.profile, "staging");
        assert_eq!(manifest.aws.region.as_deref(), Some("eu-west-1"));

        manifest.apply_overrides(Some("prod".to_string()), Some("ap-southeast-2".to_string()));
        assert_eq!(manifest.aws.profile, "prod");
        assert_eq!(manifest.aws.region.as_deref(), Some("ap-southeast-2"));
    }

    #[test]
    fn test_dry_run_lines_show_each_policy() {
        let lines = ProvisioningManifest::default().dry_run_lines().unwrap();

        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[0],
            r#"AdminUser <- AdminPolicy: {"Version":"2012-10-17","Statement":[{"Effect":"Allow","Action":"*","Resource":"*"}]}"#
        );
        assert!(lines[1].starts_with("S3AdminUser <- S3AdminPolicy: "));
        assert!(lines[2].contains(r#""Action":["ec2:*"]"#));
    }
}
