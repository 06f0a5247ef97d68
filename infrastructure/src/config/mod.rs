//! Configuration file loading for termgate
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `TERMGATE_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./termgate.toml` or `./.termgate.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/termgate/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileConfig, FileContextConfig, FileDataConfig, FileLoggingConfig,
    FileOutputConfig, FileOutputFormat,
};
pub use loader::ConfigLoader;
