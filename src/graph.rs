use indexmap::IndexMap;
use serde::Serialize;
use tracing::{debug, warn};

use crate::errors::{DataShapeError, DataShapeResult};
use crate::model::LineagePayload;

pub const NODE_SIZE: u32 = 50;
pub const LINK_COLOR: &str = "#aaa";
pub const GRAPH_TITLE: &str = "Data Lineage";
pub const EMPTY_TITLE: &str = "No lineage data";

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct StyledNode {
    pub id: String,
    pub label: String,
    pub size: u32,
    pub color: &'static str,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct LinkStyle {
    pub color: &'static str,
}

/// Endpoints are node ids; the renderer resolves them against the node set.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct StyledLink {
    pub source: String,
    pub target: String,
    pub style: LinkStyle,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relationship: Option<String>,
}

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    Force,
}

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct LabelParams {
    pub show: bool,
    pub position: &'static str,
    pub formatter: &'static str,
}

/// Layout and interaction settings handed to the renderer.
///
/// These are constants: nothing here depends on the payload. Repulsion is kept
/// well above the edge length so dense lineage spreads out.
#[derive(Serialize, Clone, Copy, Debug, PartialEq)]
pub struct LayoutParams {
    pub layout: Layout,
    pub roam: bool,
    pub focus_adjacency: bool,
    pub label: LabelParams,
    /// Series-level line color; `source` tints each edge like its source node
    pub line_color: &'static str,
    pub curveness: f64,
    pub repulsion: u32,
    pub edge_length: u32,
    pub animation_duration_update: u32,
    pub animation_easing_update: &'static str,
    pub tooltip: bool,
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            layout: Layout::Force,
            roam: true,
            focus_adjacency: true,
            label: LabelParams {
                show: true,
                position: "right",
                formatter: "{b}",
            },
            line_color: "source",
            curveness: 0.3,
            repulsion: 1000,
            edge_length: 200,
            animation_duration_update: 1500,
            animation_easing_update: "quinticInOut",
            tooltip: true,
        }
    }
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct RenderGraph {
    pub title: &'static str,
    pub nodes: Vec<StyledNode>,
    pub links: Vec<StyledLink>,
    pub layout: LayoutParams,
}

/// Centered placeholder shown when no lineage exists for the selection.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct EmptyState {
    pub title: &'static str,
}

impl Default for EmptyState {
    fn default() -> Self {
        Self { title: EMPTY_TITLE }
    }
}

/// What the lineage panel shows: either the placeholder or a styled graph.
#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RenderDescription {
    Empty(EmptyState),
    Graph(RenderGraph),
}

impl Default for RenderDescription {
    fn default() -> Self {
        RenderDescription::Empty(EmptyState::default())
    }
}

impl RenderDescription {
    pub fn is_empty_state(&self) -> bool {
        matches!(self, RenderDescription::Empty(_))
    }

    pub fn as_graph(&self) -> Option<&RenderGraph> {
        match self {
            RenderDescription::Graph(graph) => Some(graph),
            RenderDescription::Empty(_) => None,
        }
    }

    pub fn stats(&self) -> String {
        match self {
            RenderDescription::Empty(_) => "Empty".to_string(),
            RenderDescription::Graph(graph) => {
                format!("Nodes: {}, Links: {}", graph.nodes.len(), graph.links.len())
            }
        }
    }
}

/// Builds the renderer-ready description of a lineage payload.
///
/// Total and deterministic. Node and link order follow the payload. Edges are not
/// checked against the node set here; see [`validate_payload`].
pub fn to_render_graph(payload: Option<&LineagePayload>) -> RenderDescription {
    let Some(nodes) = payload.and_then(|p| p.nodes.as_ref()) else {
        debug!("No lineage nodes, rendering empty state");
        return RenderDescription::default();
    };
    let edges = payload.map(LineagePayload::edges).unwrap_or_default();

    let nodes = nodes
        .iter()
        .map(|node| StyledNode {
            id: node.id.clone(),
            label: node.name.clone(),
            size: NODE_SIZE,
            color: node.node_type.color(),
        })
        .collect();

    let links = edges
        .iter()
        .map(|edge| StyledLink {
            source: edge.source.clone(),
            target: edge.target.clone(),
            style: LinkStyle { color: LINK_COLOR },
            relationship: edge.relationship.clone(),
        })
        .collect();

    RenderDescription::Graph(RenderGraph {
        title: GRAPH_TITLE,
        nodes,
        links,
        layout: LayoutParams::default(),
    })
}

/// Checks node id uniqueness and that every edge endpoint names a node.
///
/// A payload without nodes has nothing to check.
pub fn validate_payload(payload: &LineagePayload) -> DataShapeResult<()> {
    let Some(nodes) = payload.nodes.as_ref() else {
        return Ok(());
    };

    let mut node_ids: IndexMap<&str, usize> = IndexMap::with_capacity(nodes.len());
    for (idx, node) in nodes.iter().enumerate() {
        if let Some(first) = node_ids.insert(node.id.as_str(), idx) {
            warn!(
                "Node {:?} at position {} duplicates position {}",
                node.id, idx, first
            );
            return Err(DataShapeError::DuplicateNode(node.id.clone()));
        }
    }

    for edge in payload.edges() {
        for endpoint in [&edge.source, &edge.target] {
            if !node_ids.contains_key(endpoint.as_str()) {
                warn!(
                    "Edge {} -> {} references missing node {:?}",
                    edge.source, edge.target, endpoint
                );
                return Err(DataShapeError::DanglingEdge {
                    from: edge.source.clone(),
                    to: edge.target.clone(),
                    missing: endpoint.clone(),
                });
            }
        }
    }

    debug!("All edges have valid source and target nodes");
    Ok(())
}
