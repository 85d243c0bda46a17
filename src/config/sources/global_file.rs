//! Global file source: $XDG_CONFIG_HOME/hopdir/config.toml (optional)

use crate::config::xdg;
use config::builder::DefaultState;
use config::{ConfigBuilder, ConfigError, File};
use tracing::debug;

/// Add the global config file to builder when the config home resolves.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    match xdg::config_file_path() {
        Ok(path) => {
            debug!(path = %path.display(), "Using global config file");
            Ok(builder.add_source(File::from(path).required(false)))
        }
        Err(e) => {
            debug!(error = %e, "No config home; skipping global config file");
            Ok(builder)
        }
    }
}
