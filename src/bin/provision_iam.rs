use anyhow::Context;
use brick_sizer::utils::{logger, validation::Validate};
use brick_sizer::{IamClient, ProvisioningManifest, Provisioner};
use clap::Parser;

#[derive(Parser)]
#[command(name = "provision-iam")]
#[command(about = "Create IAM users and attach their inline policies")]
struct Args {
    /// Path to a TOML manifest; the built-in admin users are used when omitted
    #[arg(short, long)]
    config: Option<String>,

    /// Override the AWS profile from the manifest
    #[arg(long)]
    profile: Option<String>,

    /// Override the AWS region from the manifest
    #[arg(long)]
    region: Option<String>,

    /// Print the policies that would be attached without calling AWS
    #[arg(long)]
    dry_run: bool,

    /// Emit logs as JSON
    #[arg(long)]
    json_logs: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // 初始化日誌
    logger::init_provision_logger(args.verbose, args.json_logs);

    let mut manifest = match &args.config {
        Some(path) => {
            tracing::info!("📁 Loading manifest from: {}", path);
            ProvisioningManifest::from_file(path)
                .with_context(|| format!("Failed to load manifest '{}'", path))?
        }
        None => {
            tracing::info!("Using built-in admin user manifest");
            ProvisioningManifest::default()
        }
    };

    manifest.apply_overrides(args.profile, args.region);

    if let Err(e) = manifest.validate() {
        tracing::error!("❌ Manifest validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.severity().exit_code());
    }

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - No AWS calls will be made");
        for line in manifest.dry_run_lines()? {
            println!("{}", line);
        }
        return Ok(());
    }

    let client = IamClient::from_settings(&manifest.aws).await;
    let report = Provisioner::new(client).run(&manifest.users).await;

    println!("Script completed.");
    if !report.is_complete_success() {
        eprintln!(
            "❌ {} of {} users could not be provisioned",
            report.failed(),
            report.results.len()
        );
        std::process::exit(2);
    }

    Ok(())
}
