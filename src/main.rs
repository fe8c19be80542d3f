use anyhow::Result;
use clap::{Parser, Subcommand};
use serde_json::Value;
use tracing::{info, warn, Level};
use tracing_subscriber::EnvFilter;

use lineage_viewer::client::HttpCatalogClient;
use lineage_viewer::common;
use lineage_viewer::config::ViewerConfig;
use lineage_viewer::export::{self, ExportFormat};
use lineage_viewer::graph::{to_render_graph, validate_payload, RenderDescription};
use lineage_viewer::lineage::Outcome;
use lineage_viewer::model::{AssetType, LineagePayload, LineageResponse};
use lineage_viewer::LineageViewer;

#[derive(Parser)]
#[clap(author, version, about)]
struct Cli {
    #[clap(short, long, global = true, default_value = "lineage-viewer.yaml")]
    config: String,
    #[clap(short, long, global = true)]
    log_level: Option<String>,
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default config file
    Init,
    /// Search the catalog
    Search {
        query: String,
        #[clap(short = 't', long)]
        asset_type: Option<String>,
    },
    /// Fetch and render the lineage of one asset
    Lineage {
        asset_id: String,
        #[clap(short, long, value_enum, default_value_t = ExportFormat::Json)]
        format: ExportFormat,
        #[clap(short, long)]
        output: Option<String>,
    },
    /// Render a lineage payload read from a file
    Render {
        #[clap(short, long)]
        input: String,
        #[clap(short, long, value_enum, default_value_t = ExportFormat::Json)]
        format: ExportFormat,
        #[clap(short, long)]
        output: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    setup_logging(args.log_level.as_deref());

    match args.command {
        Commands::Init => {
            info!("Writing default config: {}", args.config);
            let config = ViewerConfig::default();
            common::write_string_to_file(&args.config, &config.to_yaml()?)?;
        }
        Commands::Search { query, asset_type } => {
            let config = ViewerConfig::load(&args.config)?;
            let mut viewer = LineageViewer::new(catalog_client(&config)?);
            viewer
                .search_panel_mut()
                .set_type_filter(asset_type.as_deref().map(AssetType::from));
            viewer.search(&query).await;
            for (idx, asset) in viewer.results().iter().enumerate() {
                println!(
                    "{:>3}  {}  {} [{}]  owner: {}  tags: {}",
                    idx,
                    asset.id,
                    asset.name,
                    asset.asset_type,
                    asset.owner,
                    asset.tags.join(", ")
                );
            }
        }
        Commands::Lineage {
            asset_id,
            format,
            output,
        } => {
            let config = ViewerConfig::load(&args.config)?;
            let mut viewer = LineageViewer::new(catalog_client(&config)?);
            match viewer.select(&asset_id).await {
                Some(Outcome::Failed) => {
                    warn!("Could not fetch lineage for {}, rendering the empty state", asset_id)
                }
                Some(Outcome::Rejected) => {
                    warn!("Lineage for {} is malformed, rendering the empty state", asset_id)
                }
                _ => {}
            }
            let description = viewer.lineage_view().cloned().unwrap_or_default();
            info!("Lineage for {}: {}", asset_id, description.stats());
            write_output(&description, format, output.as_deref(), &config)?;
        }
        Commands::Render {
            input,
            format,
            output,
        } => {
            let config = ViewerConfig::load(&args.config)?;
            let content = std::fs::read_to_string(&input)?;
            let payload = parse_payload(&content)?;
            if let Some(payload) = &payload {
                if let Err(e) = validate_payload(payload) {
                    warn!("{}: {}", input, e);
                }
            }
            let description = to_render_graph(payload.as_ref());
            info!("Rendered {}: {}", input, description.stats());
            write_output(&description, format, output.as_deref(), &config)?;
        }
    }

    Ok(())
}

fn catalog_client(config: &ViewerConfig) -> Result<HttpCatalogClient> {
    Ok(HttpCatalogClient::new(&config.base_url)?.with_lineage_depth(config.lineage_depth))
}

/// Accepts either a bare payload or the `{ "lineage": ... }` envelope the catalog returns
fn parse_payload(content: &str) -> Result<Option<LineagePayload>> {
    let value: Value = serde_json::from_str(content)?;
    if value.get("lineage").is_some() {
        let response: LineageResponse = serde_json::from_value(value)?;
        return Ok(response.lineage);
    }
    Ok(serde_json::from_value(value)?)
}

fn write_output(
    description: &RenderDescription,
    format: ExportFormat,
    output: Option<&str>,
    config: &ViewerConfig,
) -> Result<()> {
    let rendered = export::render(description, format, &config.chart)
        .map_err(|e| anyhow::anyhow!("Failed to render {:?}: {}", format, e))?;
    match output {
        Some(path) => {
            info!("Writing {}", path);
            common::write_string_to_file(path, &rendered)?;
        }
        None => println!("{}", rendered),
    }
    Ok(())
}

fn parse_level(level: &str) -> Level {
    level.parse().unwrap_or(Level::INFO)
}

/// `--log-level` wins; without it `RUST_LOG` is honoured before falling back to info
fn log_filter(log_level: Option<&str>) -> EnvFilter {
    match log_level {
        Some(level) => EnvFilter::new(format!("handlebars=off,{}", parse_level(level))),
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(format!("handlebars=off,{}", Level::INFO))),
    }
}

fn setup_logging(log_level: Option<&str>) {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(log_level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
