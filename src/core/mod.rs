pub mod factory;
pub mod provisioning;

pub use crate::domain::model::{Brick, BrickVariant, IamUserSpec, ProvisionReport};
pub use crate::domain::ports::IdentityClient;
pub use crate::utils::error::Result;
