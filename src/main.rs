use clap::Parser;
use jira_user_import::utils::logger;
use jira_user_import::{
    resolve_input_path, run_import, CliConfig, ImportError, ImportSummary, ServiceConfig,
};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let config = CliConfig::parse();

    let debug = config.verbose
        || logger::debug_requested(std::env::var(logger::DEBUG_ENV).ok().as_deref());
    logger::init_cli_logger(debug);
    tracing::debug!("CLI config: {:?}", config);

    match run(&config).await {
        Ok(summary) if summary.is_success() => {
            tracing::info!("✅ Created {} users", summary.created.len());
        }
        Ok(summary) => {
            eprintln!(
                "❌ {} of {} users could not be created",
                summary.failed.len(),
                summary.attempted()
            );
            std::process::exit(2);
        }
        Err(e) => {
            tracing::error!("❌ {} (Category: {:?})", e, e.category());
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }
}

async fn run(config: &CliConfig) -> Result<ImportSummary, ImportError> {
    let input = resolve_input_path(config.input.as_deref())?;
    let service = ServiceConfig::load(config.env_file.as_deref())?;
    run_import(&input, &service, config.import_options()).await
}
