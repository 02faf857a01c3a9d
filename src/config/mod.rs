//! Tool configuration loading
//!
//! Handles the optional config file and environment variables
//! with precedence Env > File > Defaults.

pub mod loader;

pub use loader::{load_config, ENV_PREFIX};
