//! Domain error types.

mod navigation_error;

pub use navigation_error::NavigationError;
