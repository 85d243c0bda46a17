//! Built-in defaults applied before any source.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError};

/// Builder seeded with the defaults every other source overrides.
pub fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("notify", "shell")?
        .set_default("history.record", true)?
        .set_default("keys.enabled", true)
}
