pub mod to_echarts;
pub mod to_html;

use crate::config::ChartConfig;
use crate::graph::RenderDescription;
use std::error::Error;

#[derive(clap::ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExportFormat {
    /// ECharts option object
    #[default]
    Json,
    /// Standalone page embedding the chart
    Html,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Html => "html",
        }
    }
}

pub fn render(
    description: &RenderDescription,
    format: ExportFormat,
    chart_config: &ChartConfig,
) -> Result<String, Box<dyn Error>> {
    match format {
        ExportFormat::Json => Ok(serde_json::to_string_pretty(&to_echarts::render(
            description,
        ))?),
        ExportFormat::Html => to_html::render(description, chart_config),
    }
}
