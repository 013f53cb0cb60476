//! External command interpreter adapter.

mod runner;

pub use runner::PowerShellRunner;
