use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use admin_toolbox::infrastructure::{AppConfig, CliArgs, PowerShellRunner, StorageManager};
use admin_toolbox::presentation::{App, runtime};

fn init_logging(config: &AppConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_directive()));

    if let Some(log_path) = config.effective_log_path() {
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .init();

        info!(path = %log_path.display(), "Logging initialized");
    } else {
        tracing_subscriber::registry().with(filter).init();
    }

    Ok(())
}

fn load_config(args: CliArgs) -> Result<AppConfig> {
    let storage = StorageManager::locate(args.config.as_deref())?;
    let mut config = storage
        .load_config(args.config.as_deref())
        .wrap_err("failed to load configuration")?;
    config.merge_with_args(args);
    Ok(config)
}

fn create_app() -> Result<App> {
    let config = load_config(CliArgs::parse())?;

    init_logging(&config)?;

    info!(version = admin_toolbox::VERSION, "Starting {}", admin_toolbox::NAME);

    let runner = PowerShellRunner::new(config.interpreter.clone());
    let resolved = runner.resolve_program();

    let mut app = App::new(&config, Arc::new(runner))
        .wrap_err("menu configuration is inconsistent")?;

    match resolved {
        Ok(path) => info!(path = %path.display(), "Interpreter found"),
        Err(e) => {
            warn!(program = %config.interpreter.program, error = %e, "Interpreter not found on PATH");
            app.report_startup_warning(format!(
                "`{}` was not found on PATH; tasks will fail until it is installed.",
                config.interpreter.program
            ));
        }
    }

    Ok(app)
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let runtime = runtime::build().wrap_err("failed to start async runtime")?;
    let app = create_app()?;

    let mut terminal = ratatui::init();

    let result = runtime.block_on(app.run(&mut terminal));

    ratatui::restore();
    runtime::shutdown(runtime);

    result
}
