use brick_sizer::app::sizer::{format_size, SizingSession};
use brick_sizer::utils::logger;
use brick_sizer::CliConfig;
use clap::Parser;
use std::io;

fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    match SizingSession::new(&config).run(&mut input, &mut output) {
        Ok(brick) => {
            tracing::info!(
                "Sized {} brick {}x{} (factor {})",
                brick.variant(),
                brick.columns(),
                brick.rows(),
                brick.scale_factor()
            );
            println!("{}", format_size(&brick));
        }
        Err(e) => {
            // 記錄詳細錯誤信息
            tracing::error!(
                "❌ Sizing failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );

            // 輸出用戶友好的錯誤信息
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            std::process::exit(e.severity().exit_code().max(1));
        }
    }
}
