//! Admin Toolbox - a terminal menu for PowerShell administration tasks.
//!
//! This crate provides a menu-driven front-end that navigates between views,
//! runs interpreter commands for module installs and service connections, and
//! gates installs behind a prerequisite check with a yes/no prompt.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Application layer containing view routing and use cases.
pub mod application;
/// Domain layer containing menu data, tasks, and port definitions.
pub mod domain;
/// Infrastructure layer containing configuration and the interpreter adapter.
pub mod infrastructure;
/// Presentation layer containing UI components and event handling.
pub mod presentation;

/// Current version of the application.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name.
pub const NAME: &str = "admin-toolbox";
