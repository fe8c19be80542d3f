//! End-to-end viewer scenarios against an in-memory catalog
//!
//! Covers search → click → lineage → render, failure handling, and responses that
//! arrive after the selection has moved on.

use async_trait::async_trait;
use lineage_viewer::client::{CatalogApi, SearchQuery};
use lineage_viewer::color::FALLBACK_COLOR;
use lineage_viewer::errors::{FetchError, FetchResult};
use lineage_viewer::export::to_echarts;
use lineage_viewer::lineage::{self, LineagePanel, Outcome};
use lineage_viewer::model::{Asset, AssetType, LineageEdge, LineageNode, LineagePayload};
use lineage_viewer::selection::SelectionState;
use lineage_viewer::{to_render_graph, LineageViewer, RenderDescription};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::sync::oneshot;

#[derive(Default)]
struct MemoryCatalog {
    assets: Vec<Asset>,
    lineage: HashMap<String, FetchResult<Option<LineagePayload>>>,
    failing_search: Mutex<bool>,
}

impl MemoryCatalog {
    fn with_asset(mut self, id: &str, name: &str, asset_type: AssetType) -> Self {
        self.assets.push(Asset {
            id: id.to_string(),
            name: name.to_string(),
            asset_type,
            description: format!("{} description", name),
            owner: "analytics".to_string(),
            tags: vec![],
        });
        self
    }

    fn with_lineage(mut self, id: &str, result: FetchResult<Option<LineagePayload>>) -> Self {
        self.lineage.insert(id.to_string(), result);
        self
    }
}

fn clone_result(result: &FetchResult<Option<LineagePayload>>) -> FetchResult<Option<LineagePayload>> {
    match result {
        Ok(payload) => Ok(payload.clone()),
        Err(FetchError::Status { status, body }) => Err(FetchError::Status {
            status: *status,
            body: body.clone(),
        }),
        Err(e) => Err(FetchError::Status {
            status: 500,
            body: e.to_string(),
        }),
    }
}

#[async_trait]
impl CatalogApi for MemoryCatalog {
    async fn search(&self, query: &SearchQuery) -> FetchResult<Vec<Asset>> {
        if *self.failing_search.lock().unwrap() {
            return Err(FetchError::Status {
                status: 502,
                body: "gateway".to_string(),
            });
        }
        Ok(self
            .assets
            .iter()
            .filter(|a| a.name.contains(query.text.as_str()))
            .cloned()
            .collect())
    }

    async fn lineage(&self, asset_id: &str) -> FetchResult<Option<LineagePayload>> {
        self.lineage
            .get(asset_id)
            .map(clone_result)
            .unwrap_or(Ok(None))
    }
}

fn orders_lineage() -> LineagePayload {
    LineagePayload::new(
        vec![
            LineageNode::new("t1", "orders", "table"),
            LineageNode::new("t2", "daily_revenue", "table"),
        ],
        vec![LineageEdge::new("t1", "t2")],
    )
}

#[test]
fn test_single_table_node() {
    let payload = LineagePayload::new(vec![LineageNode::new("t1", "orders", "table")], vec![]);
    let description = to_render_graph(Some(&payload));
    let graph = description.as_graph().unwrap();

    assert_eq!(graph.nodes.len(), 1);
    assert_eq!(graph.nodes[0].color, "#5470c6");
    assert!(graph.links.is_empty());
}

#[test]
fn test_unknown_type_node_uses_fallback_color() {
    let payload = LineagePayload::new(vec![LineageNode::new("a", "mystery", "unknown")], vec![]);
    let description = to_render_graph(Some(&payload));
    assert_eq!(description.as_graph().unwrap().nodes[0].color, FALLBACK_COLOR);
}

#[test]
fn test_missing_lineage_never_renders_as_graph() {
    let from_json: LineagePayload = serde_json::from_str(r#"{"edges": []}"#).unwrap();
    for description in [to_render_graph(None), to_render_graph(Some(&from_json))] {
        assert!(description.is_empty_state());
        let option = to_echarts::render(&description);
        assert!(option.get("series").is_none());
        assert_eq!(option["title"]["top"], "center");
    }
}

#[tokio::test]
async fn test_empty_search_shows_empty_list() {
    let catalog = MemoryCatalog::default();
    let mut viewer = LineageViewer::new(catalog);

    assert_eq!(viewer.search("").await, Outcome::Applied);
    assert!(viewer.results().is_empty());
}

#[tokio::test]
async fn test_select_renders_two_node_lineage() {
    let catalog = MemoryCatalog::default()
        .with_asset("t1", "orders", AssetType::Table)
        .with_lineage("t1", Ok(Some(orders_lineage())));
    let mut viewer = LineageViewer::new(catalog);

    viewer.search("orders").await;
    assert_eq!(viewer.results().len(), 1);
    assert_eq!(viewer.click_result(0).await, Some(Outcome::Applied));

    let graph = viewer.lineage_view().unwrap().as_graph().unwrap();
    assert_eq!(graph.nodes.len(), 2);
    assert_eq!(graph.links.len(), 1);
    assert_eq!(graph.links[0].source, "t1");
    assert_eq!(graph.links[0].target, "t2");
}

#[tokio::test]
async fn test_failed_fetch_keeps_previous_graph() {
    let catalog = MemoryCatalog::default()
        .with_lineage("t1", Ok(Some(orders_lineage())))
        .with_lineage(
            "t9",
            Err(FetchError::Status {
                status: 503,
                body: "unavailable".to_string(),
            }),
        );
    let mut viewer = LineageViewer::new(catalog);

    viewer.select("t1").await;
    let before = viewer.lineage_view().cloned().unwrap();

    assert_eq!(viewer.select("t9").await, Some(Outcome::Failed));
    assert_eq!(viewer.lineage_view(), Some(&before));
}

#[tokio::test]
async fn test_malformed_lineage_replaces_previous_graph_with_empty_state() {
    let dangling = LineagePayload::new(
        vec![LineageNode::new("b", "orders_copy", "table")],
        vec![LineageEdge::new("b", "ghost")],
    );
    let catalog = MemoryCatalog::default()
        .with_lineage("a", Ok(Some(orders_lineage())))
        .with_lineage("b", Ok(Some(dangling)));
    let mut viewer = LineageViewer::new(catalog);

    assert_eq!(viewer.select("a").await, Some(Outcome::Applied));
    assert!(viewer.lineage_view().unwrap().as_graph().is_some());

    assert_eq!(viewer.select("b").await, Some(Outcome::Rejected));
    assert_eq!(viewer.selection().current(), Some("b"));
    assert_eq!(viewer.lineage_view(), Some(&RenderDescription::default()));
}

#[tokio::test]
async fn test_first_fetch_failure_shows_empty_state() {
    let catalog = MemoryCatalog::default().with_lineage(
        "t9",
        Err(FetchError::Status {
            status: 500,
            body: String::new(),
        }),
    );
    let mut viewer = LineageViewer::new(catalog);

    assert_eq!(viewer.select("t9").await, Some(Outcome::Failed));
    assert!(viewer.lineage_view().unwrap().is_empty_state());
}

#[tokio::test]
async fn test_failed_search_keeps_results() {
    let catalog = MemoryCatalog::default()
        .with_asset("t1", "orders", AssetType::Table)
        .with_asset("f1", "orders.csv", AssetType::File);
    let mut viewer = LineageViewer::new(catalog);

    viewer.search("orders").await;
    *viewer.api().failing_search.lock().unwrap() = true;
    assert_eq!(viewer.search("csv").await, Outcome::Failed);
    assert_eq!(viewer.results().len(), 2);
}

#[tokio::test]
async fn test_asset_without_lineage_shows_empty_state() {
    let catalog = MemoryCatalog::default().with_asset("c1", "orders.amount", AssetType::Column);
    let mut viewer = LineageViewer::new(catalog);

    viewer.search("amount").await;
    assert_eq!(viewer.click_result(0).await, Some(Outcome::Applied));
    assert_eq!(viewer.lineage_view(), Some(&RenderDescription::default()));
}

/// Catalog whose lineage responses are released by the test, in any order.
struct GatedCatalog {
    gates: Mutex<HashMap<String, oneshot::Receiver<LineagePayload>>>,
}

#[async_trait]
impl CatalogApi for GatedCatalog {
    async fn search(&self, _query: &SearchQuery) -> FetchResult<Vec<Asset>> {
        Ok(vec![])
    }

    async fn lineage(&self, asset_id: &str) -> FetchResult<Option<LineagePayload>> {
        let gate = self.gates.lock().unwrap().remove(asset_id);
        match gate {
            Some(rx) => Ok(rx.await.ok()),
            None => Ok(None),
        }
    }
}

#[tokio::test]
async fn test_out_of_order_responses_render_latest_selection() {
    let (release_a, gate_a) = oneshot::channel();
    let (release_b, gate_b) = oneshot::channel();
    let catalog = Arc::new(GatedCatalog {
        gates: Mutex::new(HashMap::from([
            ("a".to_string(), gate_a),
            ("b".to_string(), gate_b),
        ])),
    });

    let mut panel = LineagePanel::new();
    let mut selection = SelectionState::new();

    selection.select("a");
    let ticket_a = panel.begin(&selection).unwrap();
    let pending_a = tokio::spawn({
        let catalog = catalog.clone();
        async move { lineage::fetch(&catalog, ticket_a).await }
    });

    selection.select("b");
    let ticket_b = panel.begin(&selection).unwrap();
    let pending_b = tokio::spawn({
        let catalog = catalog.clone();
        async move { lineage::fetch(&catalog, ticket_b).await }
    });

    // b answers first
    release_b
        .send(LineagePayload::new(
            vec![LineageNode::new("b", "b", "file")],
            vec![],
        ))
        .unwrap();
    let resolved_b = pending_b.await.unwrap();
    assert_eq!(panel.resolve(resolved_b, &selection), Outcome::Applied);

    release_a
        .send(LineagePayload::new(
            vec![
                LineageNode::new("a", "a", "table"),
                LineageNode::new("x", "x", "table"),
            ],
            vec![LineageEdge::new("a", "x")],
        ))
        .unwrap();
    let resolved_a = pending_a.await.unwrap();
    assert_eq!(resolved_a.ticket.asset_id, "a");
    assert_eq!(panel.resolve(resolved_a, &selection), Outcome::Discarded);

    let graph = panel.description().as_graph().unwrap();
    assert_eq!(graph.nodes.len(), 1);
    assert_eq!(graph.nodes[0].id, "b");
    assert_eq!(graph.nodes[0].color, "#91cc75");
    assert_eq!(panel.shown().unwrap().asset_id, "b");
}
