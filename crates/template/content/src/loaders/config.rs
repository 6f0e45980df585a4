//! Measurement configuration loader.

use std::path::Path;

use template_core::MeasureConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for measurement configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Missing keys fall back to [`MeasureConfig::default`].
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the TOML file containing MeasureConfig
    pub fn load(path: &Path) -> LoadResult<MeasureConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse config data from TOML text.
    pub fn parse(content: &str) -> LoadResult<MeasureConfig> {
        let config: MeasureConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        if config.origin_snap_resolution == 0 {
            anyhow::bail!("origin_snap_resolution must be at least 1");
        }
        Ok(config)
    }
}
