use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::color::ColorScale;

/// Settings file looked up in the working directory.
pub const CONFIG_FILE: &str = "dashboard.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("reading {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("parsing {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Dashboard settings.  Every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DashboardConfig {
    /// Price table loaded at startup.
    pub data_path: PathBuf,
    /// Window title and page heading.
    pub title: String,
    pub color_scale: ColorScale,
    pub window_size: [f32; 2],
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("electricity.csv"),
            title: "Electricity Prices by US States".to_string(),
            color_scale: ColorScale::Reds,
            window_size: [1200.0, 800.0],
        }
    }
}

/// Read settings from `path`.  A missing file yields the defaults.
pub fn load_config(path: &Path) -> Result<DashboardConfig, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(DashboardConfig::default()),
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };
    serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Like [`load_config`], but a broken file is logged and replaced by defaults.
pub fn load_or_default(path: &Path) -> DashboardConfig {
    load_config(path).unwrap_or_else(|e| {
        log::warn!("Ignoring config: {e}");
        DashboardConfig::default()
    })
}
