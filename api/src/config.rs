//! Layered configuration loading.
//!
//! Precedence, lowest first: environment presets from
//! [`AppConfig::from_env`], the per-environment TOML file (optional), and
//! `HAL__`-prefixed environment variables such as
//! `HAL__LOCALE__AVAILABLE_LOCALES=en,nl,pt`.

use config::{Config, ConfigError, Environment as EnvSource, File, Source};
use hal_shared::AppConfig;

const ENV_PREFIX: &str = "HAL";
const ENV_SEPARATOR: &str = "__";

/// Load the application configuration for the current environment
pub fn load_config() -> Result<AppConfig, ConfigError> {
    let defaults = AppConfig::from_env();
    let file = File::with_name(&defaults.environment.config_file()).required(false);
    build_config(&defaults, file)
}

/// Layer `file` and the environment over `defaults`
pub fn build_config<S>(defaults: &AppConfig, file: S) -> Result<AppConfig, ConfigError>
where
    S: Source + Send + Sync + 'static,
{
    let config = Config::builder()
        .add_source(Config::try_from(defaults)?)
        .add_source(file)
        .add_source(
            EnvSource::with_prefix(ENV_PREFIX)
                .separator(ENV_SEPARATOR)
                .list_separator(",")
                .with_list_parse_key("locale.available_locales")
                .try_parsing(true),
        )
        .build()?;

    let app_config: AppConfig = config.try_deserialize()?;
    log::debug!(
        "Configuration loaded: environment={}, locales={:?}, policy={}",
        app_config.environment,
        app_config.locale.available_locales,
        app_config.locale.policy
    );
    Ok(app_config)
}
