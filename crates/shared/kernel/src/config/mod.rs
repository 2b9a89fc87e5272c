use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::info;

/// Prefix of environment overrides (`SLEDGER__SERVER__PORT=9000`).
pub const ENV_PREFIX: &str = "SLEDGER";
/// File stem looked up when no explicit path is given (`server.toml`, `server.yaml`, ...).
pub const DEFAULT_CONFIG_STEM: &str = "server";

#[sledger_derive::sledger_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads `T` from a config file overlaid with `SLEDGER__`-prefixed environment variables.
///
/// Nested keys use a double underscore: `SLEDGER__ORDERS__PRICE_PER_KG=80` sets
/// `orders.price_per_kg`.
///
/// With `Some(path)` the file must exist. With `None` the `server` file in the working directory
/// is optional, so a bare environment (or nothing at all) yields `T`'s serde defaults.
///
/// # Errors
/// Returns [`ConfigError::Config`] when an explicit file is missing, a source is malformed or the
/// merged tree does not deserialize into `T`.
///
/// # Example
/// ```rust
/// use sledger_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct AppConfig {
///     port: u16,
/// }
///
/// let cfg: AppConfig = load_config(Some("config/local")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let (source, required) = path.map_or_else(
        || (PathBuf::from(DEFAULT_CONFIG_STEM), false),
        |p| (p.as_ref().to_path_buf(), true),
    );

    info!(path = %source.display(), required, "Loading configuration");

    Config::builder()
        .add_source(File::from(source.as_path()).required(required))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")
}
