use crate::utils::error::{BrickError, Result};
use crate::utils::validation::{validate_positive_dimension, Validate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The recognised brick kinds. Each one is bound to a fixed scale multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BrickVariant {
    Classic,
    Duplo,
}

impl BrickVariant {
    pub const ALL: [BrickVariant; 2] = [BrickVariant::Classic, BrickVariant::Duplo];

    pub fn scale_factor(self) -> u32 {
        match self {
            BrickVariant::Classic => 1,
            BrickVariant::Duplo => 4,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BrickVariant::Classic => "classic",
            BrickVariant::Duplo => "duplo",
        }
    }
}

impl fmt::Display for BrickVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// 大小寫敏感："Classic" 不是合法的類型
impl FromStr for BrickVariant {
    type Err = BrickError;

    fn from_str(label: &str) -> Result<Self> {
        match label {
            "classic" => Ok(BrickVariant::Classic),
            "duplo" => Ok(BrickVariant::Duplo),
            other => Err(BrickError::InvalidVariant {
                label: other.to_string(),
            }),
        }
    }
}

/// One brick: a grid of `columns` x `rows` studs scaled by its variant's factor.
///
/// Fields are private so the scale factor cannot change after construction.
/// Dimensions are not range-checked; see [`Validate`] for the strict check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Brick {
    columns: i32,
    rows: i32,
    variant: BrickVariant,
    scale_factor: u32,
}

impl Brick {
    pub(crate) fn new(columns: i32, rows: i32, variant: BrickVariant) -> Self {
        Self {
            columns,
            rows,
            variant,
            scale_factor: variant.scale_factor(),
        }
    }

    pub fn columns(&self) -> i32 {
        self.columns
    }

    pub fn rows(&self) -> i32 {
        self.rows
    }

    pub fn variant(&self) -> BrickVariant {
        self.variant
    }

    pub fn scale_factor(&self) -> u32 {
        self.scale_factor
    }

    /// Returns `(scale_factor * columns, scale_factor * rows)`.
    ///
    /// Widened to `i64`, so no input can overflow.
    pub fn scale(&self) -> (i64, i64) {
        let factor = i64::from(self.scale_factor);
        (factor * i64::from(self.columns), factor * i64::from(self.rows))
    }
}

impl Validate for Brick {
    fn validate(&self) -> Result<()> {
        validate_positive_dimension("columns", self.columns)?;
        validate_positive_dimension("rows", self.rows)?;
        Ok(())
    }
}

/// IAM policy statement `Action`: either a single pattern or a list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PolicyAction {
    Single(String),
    Many(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PolicyStatement {
    pub effect: String,
    pub action: PolicyAction,
    pub resource: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PolicyDocument {
    pub version: String,
    pub statement: Vec<PolicyStatement>,
}

impl PolicyDocument {
    pub const VERSION: &'static str = "2012-10-17";

    /// A single `Allow` statement over every resource.
    pub fn allow_all_resources(action: PolicyAction) -> Self {
        Self {
            version: Self::VERSION.to_string(),
            statement: vec![PolicyStatement {
                effect: "Allow".to_string(),
                action,
                resource: "*".to_string(),
            }],
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IamUserSpec {
    pub user_name: String,
    pub policy_name: String,
    pub policy_document: PolicyDocument,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProvisionStage {
    CreateUser,
    PutUserPolicy,
}

impl fmt::Display for ProvisionStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ProvisionStage::CreateUser => "create_user",
            ProvisionStage::PutUserPolicy => "put_user_policy",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProvisionOutcome {
    Provisioned,
    Failed { stage: ProvisionStage, message: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserResult {
    pub user_name: String,
    pub outcome: ProvisionOutcome,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProvisionReport {
    pub results: Vec<UserResult>,
}

impl ProvisionReport {
    pub fn succeeded(&self) -> usize {
        self.results
            .iter()
            .filter(|r| r.outcome == ProvisionOutcome::Provisioned)
            .count()
    }

    pub fn failed(&self) -> usize {
        self.results.len() - self.succeeded()
    }

    pub fn is_complete_success(&self) -> bool {
        self.failed() == 0
    }
}
