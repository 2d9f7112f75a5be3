//! Configuration for Glow Rise
//!
//! Supports `$XDG_CONFIG_HOME/glow-rise/config.toml` (or an explicit path)
//! layered under command-line overrides.

pub mod settings;
pub mod types;

pub use settings::{
    default_config_path, init_config_file, load_settings, load_settings_from, resolve,
    CONFIG_DIR, CONFIG_FILENAME,
};
pub use types::*;
