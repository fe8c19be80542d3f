use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";
pub const DEFAULT_ECHARTS_URL: &str = "https://cdn.jsdelivr.net/npm/echarts@5/dist/echarts.min.js";

/// Settings for the command line viewer, read from a YAML file.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct ViewerConfig {
    /// Where the catalog API lives; requests go to `{base_url}/api/...`
    pub base_url: String,
    /// Lineage hops to request; the catalog picks when unset
    pub lineage_depth: Option<u32>,
    pub chart: ChartConfig,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            lineage_depth: None,
            chart: ChartConfig::default(),
        }
    }
}

/// Page settings for the HTML export. The chart always fills the page width.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct ChartConfig {
    pub height_px: u32,
    pub page_title: String,
    pub echarts_url: String,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            height_px: 600,
            page_title: "Data Lineage".to_string(),
            echarts_url: DEFAULT_ECHARTS_URL.to_string(),
        }
    }
}

impl ViewerConfig {
    /// Reads the config file, or falls back to defaults when it does not exist
    pub fn load(path: &str) -> Result<Self> {
        if !Path::new(path).exists() {
            debug!("No config at {}, using defaults", path);
            return Ok(Self::default());
        }
        let content =
            std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path))?;
        let config: ViewerConfig =
            serde_yaml::from_str(&content).with_context(|| format!("Invalid config {}", path))?;
        info!("Loaded config from {}", path);
        Ok(config)
    }

    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}
