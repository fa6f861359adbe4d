use crate::utils::error::{BrickError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_positive_dimension(field_name: &str, value: i32) -> Result<()> {
    if value <= 0 {
        return Err(BrickError::ValidationError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value must be greater than 0".to_string(),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(BrickError::ValidationError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// IAM user and inline policy names: non-empty, at most `max_len`
/// characters, drawn from alphanumerics and `+=,.@_-`.
pub fn validate_iam_name(field_name: &str, value: &str, max_len: usize) -> Result<()> {
    validate_non_empty_string(field_name, value)?;

    if value.len() > max_len {
        return Err(BrickError::ValidationError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Name must be at most {} characters", max_len),
        });
    }

    if !value
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || "+=,.@_-".contains(c))
    {
        return Err(BrickError::ValidationError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Name can only contain alphanumerics and +=,.@_-".to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_positive_dimension() {
        assert!(validate_positive_dimension("columns", 4).is_ok());
        assert!(validate_positive_dimension("columns", 0).is_err());
        assert!(validate_positive_dimension("rows", -3).is_err());
    }

    #[test]
    fn test_validate_iam_name() {
        assert!(validate_iam_name("user_name", "S3AdminUser", 64).is_ok());
        assert!(validate_iam_name("user_name", "ops.team@example", 64).is_ok());
        assert!(validate_iam_name("user_name", "", 64).is_err());
        assert!(validate_iam_name("user_name", "has space", 64).is_err());
        assert!(validate_iam_name("user_name", &"a".repeat(65), 64).is_err());
    }

    #[test]
    fn test_validate_iam_name_uses_caller_limit() {
        assert!(validate_iam_name("policy_name", &"p".repeat(128), 128).is_ok());
        assert!(validate_iam_name("policy_name", &"p".repeat(129), 128).is_err());
        assert!(validate_iam_name("user_name", &"u".repeat(100), 64).is_err());
    }
}
