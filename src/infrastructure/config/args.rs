use super::app_config::LogLevel;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "admin-toolbox",
    version,
    about = "A terminal menu for running PowerShell administration tasks",
    long_about = None
)]
pub struct CliArgs {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[arg(long, value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Interpreter executable (e.g. `powershell` or `pwsh`).
    #[arg(long, value_name = "PROGRAM", env = "TOOLBOX_INTERPRETER")]
    pub interpreter: Option<String>,

    /// Notification duration in seconds.
    #[arg(long)]
    pub notification_duration: Option<u64>,
}
