//! ConfigLoader facade delegating to merge service.

use super::merge::service::MergeService;
use super::HopdirConfig;
use config::ConfigError;
use std::path::Path;

/// Configuration loader facade.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from the global file and environment.
    pub fn load() -> Result<HopdirConfig, ConfigError> {
        MergeService::load()
    }

    /// Load configuration from a specific file.
    pub fn load_from_file(path: &Path) -> Result<HopdirConfig, ConfigError> {
        MergeService::load_from_file(path)
    }
}
