use config::{Config, Environment, File};
use cpv_domain::constants::{CONFIG_ENV_PREFIX, CONFIG_ENV_SEPARATOR};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Base name of the configuration file looked up when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "cpv";

/// Custom error type for config loading.
#[cpv_derive::cpv_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Layered configuration: an optional file, then environment overrides.
///
/// 1. **Base File**: `path` when given (must exist; any format the `config` crate knows, picked
///    by extension). Otherwise `cpv.{toml,json,yaml,...}` in the working directory, if present.
/// 2. **Environment Overrides**: variables prefixed with `CPV__`. Nested keys are joined with
///    double underscores, so `CPV__TRANSLATION__LOCALE=de` maps to `translation.locale`.
///    Values that parse as booleans or numbers are passed on typed (`CPV__LOGGING__JSON=true`).
///
/// # Errors
/// * An explicitly given file is missing or unparsable.
/// * The merged values do not deserialize into `T`.
///
/// # Example
/// ```rust
/// use cpv_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct AppConfig {
///     locale: String,
/// }
///
/// let cfg: AppConfig = load_config(Some("config/local.toml")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    load_config_with_env(path, None)
}

/// Same as [`load_config`], but reads overrides from `vars` instead of the process
/// environment when given. Keys still carry the `CPV__` prefix.
///
/// # Errors
/// See [`load_config`].
pub fn load_config_with_env<T>(
    path: Option<impl AsRef<Path>>,
    vars: Option<config::Map<String, String>>,
) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let (effective_path, required) = path
        .map_or_else(|| (PathBuf::from(DEFAULT_CONFIG_FILE), false), |p| (p.as_ref().to_path_buf(), true));

    let builder = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(required))
        .add_source(
            Environment::with_prefix(CONFIG_ENV_PREFIX)
                .separator(CONFIG_ENV_SEPARATOR)
                .convert_case(config::Case::Snake)
                .try_parsing(true)
                .source(vars),
        );

    if required {
        info!("Loading config from {}", effective_path.display());
    } else {
        debug!("Looking for optional config file {}", effective_path.display());
    }

    let config = builder
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}
