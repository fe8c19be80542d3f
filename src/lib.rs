pub mod client;
pub mod color;
pub mod common;
pub mod config;
pub mod errors;
pub mod export;
pub mod graph;
pub mod lineage;
pub mod model;
pub mod search;
pub mod selection;
pub mod viewer;

pub use graph::{to_render_graph, RenderDescription};
pub use viewer::LineageViewer;
