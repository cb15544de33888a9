//! Main DrishtiConfig and conversion methods.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::grid::GridConfig;
use crate::projection::DetectionFilter;

use super::detection::DetectionSection;
use super::error::ConfigLoadError;
use super::grid::GridSection;

/// Full DrishtiMap configuration loaded from YAML
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DrishtiConfig {
    /// Window and viewport geometry
    #[serde(default)]
    pub grid: GridSection,

    /// Detection pre-filter
    #[serde(default)]
    pub detection: DetectionSection,
}

impl DrishtiConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self, ConfigLoadError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigLoadError::Io(e.to_string()))?;
        Self::from_yaml(&contents)
    }

    /// Load from default config path (configs/config.yaml)
    pub fn load_default() -> Result<Self, ConfigLoadError> {
        let path = Path::new("configs/config.yaml");
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        serde_yaml::from_str(yaml).map_err(|e| ConfigLoadError::Parse(e.to_string()))
    }

    /// Convert to GridConfig
    pub fn to_grid_config(&self) -> GridConfig {
        self.grid.to_grid_config()
    }

    /// Convert to DetectionFilter
    pub fn to_detection_filter(&self) -> DetectionFilter {
        self.detection.to_detection_filter()
    }
}
