use clap::Parser;
use listing_summary::config::toml_config::TomlConfig;
use listing_summary::core::ConfigProvider;
use listing_summary::utils::{logger, validation::Validate};
use listing_summary::{EtlEngine, SummaryPipeline};

#[derive(Parser)]
#[command(name = "toml-summary")]
#[command(about = "Listing price summary driven by a TOML configuration file")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "listing-summary.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    json_logs: bool,

    /// Override monitoring setting from config
    #[arg(long)]
    monitor: Option<bool>,

    /// Show what would be processed without executing
    #[arg(long)]
    dry_run: bool,
}

fn display_config_summary(config: &TomlConfig) {
    println!("📋 Pipeline: {}", config.pipeline.name);
    if let Some(description) = &config.pipeline.description {
        println!("   {}", description);
    }
    println!("📥 Input:  {}", config.input_path());
    println!("📤 Output: {}", config.output_path());
    if let Some(json_path) = config.json_path() {
        println!("📤 JSON:   {}", json_path);
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = match TomlConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    let verbose = args.verbose || matches!(config.log_level(), Some("debug") | Some("trace"));
    if args.json_logs {
        logger::init_json_logger(verbose);
    } else {
        logger::init_cli_logger(verbose);
    }

    tracing::info!("📁 Loaded configuration from: {}", args.config);

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(2);
    }

    display_config_summary(&config);

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - No actual processing will occur");
        return Ok(());
    }

    let monitor_enabled = args.monitor.unwrap_or_else(|| config.monitoring_enabled());
    let engine = EtlEngine::new_with_monitoring(SummaryPipeline::new(config), monitor_enabled);

    let output_path = engine.run()?;
    println!("✅ Summary saved to: {}", output_path);
    Ok(())
}
