//! Infrastructure layer with external service adapters.

/// Application configuration.
pub mod config;
/// External command interpreter.
pub mod powershell;

pub use config::{AppConfig, CliArgs, InterpreterConfig, LogLevel, StorageManager};
pub use powershell::PowerShellRunner;
