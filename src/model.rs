use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Kind of catalog entry.
///
/// The catalog keeps introducing new tags (`api`, `row`, `sheet`, `database`), so
/// anything that is not one of the three styled kinds is carried verbatim in
/// `Other`. A missing or `null` tag becomes `Other("")`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum AssetType {
    Table,
    File,
    Column,
    Other(String),
}

impl AssetType {
    pub fn as_str(&self) -> &str {
        match self {
            AssetType::Table => "table",
            AssetType::File => "file",
            AssetType::Column => "column",
            AssetType::Other(tag) => tag,
        }
    }
}

impl Default for AssetType {
    fn default() -> Self {
        AssetType::Other(String::new())
    }
}

impl From<&str> for AssetType {
    fn from(tag: &str) -> Self {
        match tag {
            "table" => AssetType::Table,
            "file" => AssetType::File,
            "column" => AssetType::Column,
            other => AssetType::Other(other.to_string()),
        }
    }
}

impl fmt::Display for AssetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for AssetType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for AssetType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag: Option<String> = Option::deserialize(deserializer)?;
        Ok(tag.as_deref().map(AssetType::from).unwrap_or_default())
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A catalog entry as returned by search. Never mutated after decoding.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Asset {
    pub id: String,
    pub name: String,
    #[serde(rename = "type", default)]
    pub asset_type: AssetType,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub owner: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct LineageNode {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(rename = "type", default)]
    pub node_type: AssetType,
}

impl LineageNode {
    pub fn new(id: &str, name: &str, node_type: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            node_type: AssetType::from(node_type),
        }
    }
}

/// Directed edge between two node ids of the same payload.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct LineageEdge {
    pub source: String,
    pub target: String,
    /// Relationship kind reported by the catalog, e.g. `DERIVED_FROM`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relationship: Option<String>,
}

impl LineageEdge {
    pub fn new(source: &str, target: &str) -> Self {
        Self {
            source: source.to_string(),
            target: target.to_string(),
            relationship: None,
        }
    }
}

/// Raw lineage as computed by the catalog.
///
/// `nodes == None` means the catalog has no lineage for the asset, which renders as
/// the empty state. An empty `nodes` list is a real (if trivial) graph.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct LineagePayload {
    #[serde(default)]
    pub nodes: Option<Vec<LineageNode>>,
    #[serde(default)]
    pub edges: Option<Vec<LineageEdge>>,
}

impl LineagePayload {
    pub fn new(nodes: Vec<LineageNode>, edges: Vec<LineageEdge>) -> Self {
        Self {
            nodes: Some(nodes),
            edges: Some(edges),
        }
    }

    pub fn edges(&self) -> &[LineageEdge] {
        self.edges.as_deref().unwrap_or_default()
    }

    pub fn stats(&self) -> String {
        format!(
            "Nodes: {}, Edges: {}",
            self.nodes.as_ref().map_or(0, Vec::len),
            self.edges().len()
        )
    }
}

/// Body of `GET /api/search/`
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct SearchResponse {
    #[serde(default)]
    pub query: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub results: Vec<Asset>,
}

/// Body of `GET /api/assets/{id}/lineage`
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct LineageResponse {
    #[serde(default)]
    pub asset_id: Option<String>,
    #[serde(default)]
    pub lineage: Option<LineagePayload>,
}
