use wellbeing_infrastructure::config::AppConfig;
use wellbeing_infrastructure::logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env()?;

    match logging::init_logger(config.log_dir.clone()) {
        Ok(()) => {
            tracing::info!("Well-Being Tracker starting...");
            tracing::info!("File logging initialized at: {}", config.log_dir.display());
        }
        Err(e) => {
            eprintln!("Failed to initialize file logging: {}", e);
            eprintln!("Falling back to console logging only");
            logging::init_fallback_logger();
        }
    }

    wellbeing_lib::run(config).await
}
