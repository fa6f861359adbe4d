pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

#[cfg(feature = "provision")]
pub use config::aws::IamClient;

pub use config::toml_config::ProvisioningManifest;
pub use core::{factory::BrickFactory, provisioning::Provisioner};
pub use domain::model::{Brick, BrickVariant};
pub use utils::error::{BrickError, Result};
