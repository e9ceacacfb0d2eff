use clap::Parser;
use listing_summary::utils::error::{EtlError, ErrorSeverity};
use listing_summary::utils::{logger, validation::Validate};
use listing_summary::{CliConfig, EtlEngine, SummaryPipeline};

fn exit_code(error: &EtlError) -> i32 {
    match error.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    }
}

fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting listing-summary");
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(exit_code(&e));
    }

    let monitor_enabled = config.monitor;
    let engine = EtlEngine::new_with_monitoring(SummaryPipeline::new(config), monitor_enabled);

    match engine.run() {
        Ok(output_path) => {
            tracing::info!("✅ Summary written");
            println!("📁 Output saved to: {}", output_path);
        }
        Err(e) => {
            tracing::error!(
                "❌ Summary failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let code = exit_code(&e);
            if code > 0 {
                std::process::exit(code);
            }
        }
    }
}
