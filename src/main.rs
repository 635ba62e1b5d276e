use chrono::Local;
use tracing_subscriber::EnvFilter;

use lawdesk_cal::storage::config::Config;

mod cli;
use cli::{CliMode, USAGE, parse_cli_mode, run_month_mode};
mod tui;
use tui::run_tui;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    setup_logging();

    let today = Local::now().date_naive();
    let cli_mode = match parse_cli_mode(today) {
        Ok(mode) => mode,
        Err(err) => {
            eprintln!("Error: {}", err);
            println!("{}", USAGE);
            return Ok(());
        }
    };

    let config = Config::load_or_create()?;

    match cli_mode {
        CliMode::Help => {
            println!("{}", USAGE);
            Ok(())
        }
        CliMode::PrintMonth(key) => {
            let key = if key.resource_id.is_none() {
                key.with_resource(config.resource_id())
            } else {
                key
            };
            run_month_mode(&config, key, today).await
        }
        CliMode::Interactive { resource_id } => {
            let resource_id = resource_id.or_else(|| config.resource_id());
            run_tui(config, resource_id).await?;
            Ok(())
        }
    }
}

fn setup_logging() {
    let log_dir = Config::config_dir();

    std::fs::create_dir_all(&log_dir).ok();

    let file_appender = tracing_appender::rolling::daily(log_dir, "lawdesk-cal.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(false)
        .init();

    std::mem::forget(_guard);

    tracing::info!("lawdesk-cal started");
}
