//! Utility module
//!
//! This module provides:
//! - Configuration management
//! - Logging setup

mod config;
mod logging;

pub use config::{load_config, Config, ModelConfig, OutputConfig};
pub use logging::setup_logging;
