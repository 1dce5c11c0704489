//! Configuration file parsing for the launchpad terminal
//!
//! Supports `<config_dir>/launchpad-terminal/config.toml` or an explicit
//! `--config` path, with `LPAD_LAUNCHPAD_CONTRACT` overriding the contract.

pub mod settings;
pub mod types;

pub use settings::{
    default_config_path, init_config_file, load_settings, save_settings, validate_http_url,
    CONTRACT_ENV_VAR,
};
pub use types::*;
