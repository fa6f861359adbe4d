use thiserror::Error;

#[derive(Error, Debug)]
pub enum BrickError {
    #[error("Invalid brick type: '{label}'")]
    InvalidVariant { label: String },

    #[error("Invalid input for {field}: '{value}' ({reason})")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Validation error for {field}: '{value}' ({reason})")]
    ValidationError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Provisioning failed for user {user} during {stage}: {message}")]
    ProvisioningError {
        user: String,
        stage: String,
        message: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    Cloud,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    /// 根據錯誤嚴重程度決定退出碼
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl BrickError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            BrickError::InvalidVariant { .. }
            | BrickError::InvalidInput { .. }
            | BrickError::ValidationError { .. } => ErrorCategory::Input,
            BrickError::ConfigError { .. } | BrickError::TomlError(_) => {
                ErrorCategory::Configuration
            }
            BrickError::ProvisioningError { .. } => ErrorCategory::Cloud,
            BrickError::IoError(_) | BrickError::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            BrickError::ProvisioningError { .. } => ErrorSeverity::Medium,
            BrickError::InvalidVariant { .. }
            | BrickError::InvalidInput { .. }
            | BrickError::ValidationError { .. }
            | BrickError::ConfigError { .. }
            | BrickError::TomlError(_) => ErrorSeverity::High,
            BrickError::IoError(_) | BrickError::SerializationError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            BrickError::InvalidVariant { label } => {
                format!("Invalid brick type '{}'", label)
            }
            BrickError::InvalidInput { field, value, .. } => {
                format!("Could not read {} from '{}'", field, value)
            }
            BrickError::ValidationError { field, reason, .. } => {
                format!("{} is not acceptable: {}", field, reason)
            }
            BrickError::ConfigError { message } => format!("Configuration problem: {}", message),
            BrickError::ProvisioningError { user, message, .. } => {
                format!("Error creating user {}: {}", user, message)
            }
            BrickError::IoError(e) => format!("Input/output failure: {}", e),
            BrickError::SerializationError(e) => format!("Could not encode policy: {}", e),
            BrickError::TomlError(e) => format!("Manifest is not valid TOML: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            BrickError::InvalidVariant { .. } => {
                "Use one of the supported brick types: classic, duplo".to_string()
            }
            BrickError::InvalidInput { .. } => "Enter a whole number, e.g. 4".to_string(),
            BrickError::ValidationError { .. } => {
                "Use positive dimensions or run without --strict".to_string()
            }
            BrickError::ConfigError { .. } | BrickError::TomlError(_) => {
                "Check the manifest file against the documented format".to_string()
            }
            BrickError::ProvisioningError { .. } => {
                "Check AWS credentials, the selected profile and IAM permissions".to_string()
            }
            BrickError::IoError(_) => "Check that standard input and files are readable".to_string(),
            BrickError::SerializationError(_) => {
                "Check the policy document in the manifest".to_string()
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, BrickError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_variant_is_high_severity_input_error() {
        let err = BrickError::InvalidVariant {
            label: "lego-technic".to_string(),
        };

        assert_eq!(err.category(), ErrorCategory::Input);
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert_eq!(err.severity().exit_code(), 1);
        assert_eq!(err.to_string(), "Invalid brick type: 'lego-technic'");
    }

    #[test]
    fn test_provisioning_error_maps_to_retry_exit_code() {
        let err = BrickError::ProvisioningError {
            user: "AdminUser".to_string(),
            stage: "create_user".to_string(),
            message: "EntityAlreadyExists".to_string(),
        };

        assert_eq!(err.category(), ErrorCategory::Cloud);
        assert_eq!(err.severity().exit_code(), 2);
        assert!(err.user_friendly_message().contains("AdminUser"));
    }
}
