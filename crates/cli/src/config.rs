//! Figment-based configuration loading.
//!
//! Configuration priority (highest wins):
//! 1. Config file (TOML)
//! 2. Environment variables (`ADDRUTIL_` prefix, `__` between sections)
//! 3. Defaults

use std::path::Path;

use addrutil_core::UtilConfig;
use eyre::{Result, WrapErr, eyre};
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};

/// Environment variable prefix for configuration overrides.
pub const ENV_PREFIX: &str = "ADDRUTIL_";

/// Load configuration from defaults, environment, and an optional config file.
///
/// An explicitly given file must exist.
pub fn load_config(config_path: Option<&Path>) -> Result<UtilConfig> {
    let mut figment = Figment::new()
        .merge(Serialized::defaults(UtilConfig::default()))
        .merge(Env::prefixed(ENV_PREFIX).split("__"));

    if let Some(path) = config_path {
        if !path.is_file() {
            return Err(eyre!("config file not found: {}", path.display()));
        }
        figment = figment.merge(Toml::file(path));
    }

    figment.extract().wrap_err("Failed to load configuration")
}
