use tracing::info;

use crate::client::CatalogApi;
use crate::graph::RenderDescription;
use crate::lineage::{LineagePanel, Outcome};
use crate::model::Asset;
use crate::search::SearchPanel;
use crate::selection::SelectionState;

/// Search panel and lineage panel sharing one selection.
///
/// The viewer owns the selection and lends it to each panel per call, so the
/// search panel writes it on click and the lineage panel reads it to decide when
/// to fetch.
pub struct LineageViewer<A> {
    api: A,
    search: SearchPanel,
    selection: SelectionState,
    lineage: LineagePanel,
}

impl<A: CatalogApi> LineageViewer<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            search: SearchPanel::new(),
            selection: SelectionState::new(),
            lineage: LineagePanel::new(),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn search_panel(&self) -> &SearchPanel {
        &self.search
    }

    pub fn search_panel_mut(&mut self) -> &mut SearchPanel {
        &mut self.search
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn results(&self) -> &[Asset] {
        self.search.results()
    }

    /// Sets the query text and runs it
    pub async fn search(&mut self, query: &str) -> Outcome {
        self.search.set_query(query);
        self.search.submit(&self.api).await
    }

    /// Click on a search result, then bring the lineage panel up to date
    pub async fn click_result(&mut self, index: usize) -> Option<Outcome> {
        let asset_id = self.search.click(index, &mut self.selection)?.to_string();
        info!("Asset {} selected from results", asset_id);
        self.sync_lineage().await
    }

    /// Select an asset directly, without going through the result list
    pub async fn select(&mut self, asset_id: &str) -> Option<Outcome> {
        self.selection.select(asset_id);
        self.sync_lineage().await
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
        self.lineage.begin(&self.selection);
    }

    /// Fetches lineage if the selection changed since the last sync
    pub async fn sync_lineage(&mut self) -> Option<Outcome> {
        self.lineage.refresh(&self.api, &self.selection).await
    }

    /// The lineage panel's content, or `None` while nothing is selected
    pub fn lineage_view(&self) -> Option<&RenderDescription> {
        self.selection
            .current()
            .map(|_| self.lineage.description())
    }
}
