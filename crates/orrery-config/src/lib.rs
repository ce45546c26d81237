//! Configuration for the orrery universe generator.
//!
//! Settings persist to disk as `config.ron`. Missing sections fall back to
//! defaults and unknown fields are ignored, so old and new files both load.

mod config;
mod error;

pub use config::{CacheConfig, Config, DebugConfig, UniverseConfig, default_config_dir};
pub use error::ConfigError;
