#[cfg(feature = "provision")]
pub mod aws;
pub mod toml_config;

#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

/// Command-line options for `brick-sizer`. Any value left out is prompted
/// for on standard input.
#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Serialize, Deserialize, Parser)]
#[command(name = "brick-sizer")]
#[command(about = "Compute the physical size of a Lego brick")]
pub struct CliConfig {
    /// Brick type: classic or duplo
    #[arg(long)]
    pub brick_type: Option<String>,

    /// Number of columns (studs across)
    #[arg(long, allow_hyphen_values = true)]
    pub columns: Option<i32>,

    /// Number of rows (studs deep)
    #[arg(long, allow_hyphen_values = true)]
    pub rows: Option<i32>,

    /// Reject zero or negative dimensions
    #[arg(long)]
    pub strict: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}
