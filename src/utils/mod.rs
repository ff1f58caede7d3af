/// Module containing environment variable helpers for configuration loading
pub mod config;
/// Module containing stateless formatting and conversion helpers
pub mod helpers;
/// Module containing logging utilities
pub mod logger;

pub use config::*;
pub use helpers::*;
pub use logger::*;
