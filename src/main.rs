use clap::Parser;
use voxel_dome::utils::error::{ErrorSeverity, PlannerError, Result};
use voxel_dome::utils::{logger, validation::Validate};
use voxel_dome::{CliConfig, ConfigProvider, PlannerServer, TomlConfig};

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting voxel-dome");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let result = match &cli.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            match TomlConfig::from_file(path) {
                Ok(mut config) => {
                    config.apply_overrides(&cli);
                    serve(&config).await
                }
                Err(e) => Err(e),
            }
        }
        None => serve(&cli).await,
    };

    if let Err(e) = result {
        report(&e);
    }
}

async fn serve<C: ConfigProvider + Validate>(config: &C) -> Result<()> {
    config.validate()?;
    tracing::info!("✅ Configuration validated");

    let server = PlannerServer::bind(config)?;
    server.run_until(shutdown_signal()).await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl-C, serving until killed: {}", e);
        std::future::pending::<()>().await;
    }
}

fn report(e: &PlannerError) {
    tracing::error!(
        "❌ voxel-dome failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    let exit_code = match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };

    if exit_code > 0 {
        std::process::exit(exit_code);
    }
}
