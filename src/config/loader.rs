use super::{global_config_path, CliOverrides, ConfigFile, ReportConfig, PROJECT_CONFIG_FILE};
use crate::error::{ErrorCode, ErrorExt, ReportError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Builds a [`ReportConfig`] from its layers
pub struct ConfigLoader {
    working_dir: PathBuf,
    global_path: Option<PathBuf>,
}

impl ConfigLoader {
    pub fn new(working_dir: impl Into<PathBuf>) -> Self {
        Self {
            working_dir: working_dir.into(),
            global_path: global_config_path(),
        }
    }

    /// Use a specific global config file instead of the user config dir
    pub fn with_global_path(mut self, path: Option<PathBuf>) -> Self {
        self.global_path = path;
        self
    }

    /// Load all layers.
    ///
    /// An explicit config path replaces the project file and must exist;
    /// missing global or project files are skipped.
    pub fn load(&self, explicit: Option<&Path>, overrides: CliOverrides) -> Result<ReportConfig> {
        let mut config = ReportConfig::default();

        if let Some(global) = &self.global_path {
            if let Some(file) = read_layer(global)? {
                debug!("Loaded global config from {}", global.display());
                config.merge_file(file);
            }
        }

        match explicit {
            Some(path) => {
                let path = self.working_dir.join(path);
                let file = read_layer(&path)?.ok_or_else(|| {
                    ReportError::config_with_code(
                        ErrorCode::CONFIG_NOT_FOUND,
                        "configuration file not found",
                        Some(path.clone()),
                    )
                })?;
                debug!("Loaded config from {}", path.display());
                config.merge_file(file);
            }
            None => {
                let project = self.working_dir.join(PROJECT_CONFIG_FILE);
                if let Some(file) = read_layer(&project)? {
                    debug!("Loaded project config from {}", project.display());
                    config.merge_file(file);
                }
            }
        }

        config.apply_overrides(overrides);
        config.resolve_paths(&self.working_dir);

        if config.max_display_rows == 0 {
            return Err(ReportError::config_with_code(
                ErrorCode::CONFIG_INVALID_VALUE,
                "max_display_rows must be at least 1",
                None,
            ));
        }

        Ok(config)
    }
}

fn read_layer(path: &Path) -> Result<Option<ConfigFile>> {
    if !path.exists() {
        return Ok(None);
    }
    let content =
        fs::read_to_string(path).to_config_error("failed to read configuration file", path)?;
    let file: ConfigFile = toml::from_str(&content).map_err(|e| {
        ReportError::config_with_code(
            ErrorCode::CONFIG_PARSE_ERROR,
            "invalid configuration file",
            Some(path.to_path_buf()),
        )
        .with_source(e)
    })?;
    Ok(Some(file))
}
