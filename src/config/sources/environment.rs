//! Environment variable source: HOPDIR prefix with __ separator

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::Environment;

/// Add environment variable overlay to builder.
/// Uses HOPDIR__ prefix and __ as separator for nested keys,
/// e.g. `HOPDIR__HISTORY__RECORD=false`.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let builder = builder.add_source(
        Environment::with_prefix("HOPDIR")
            .separator("__")
            .try_parsing(true),
    );
    Ok(builder)
}
