use tracing::{error, info};

use crate::client::{CatalogApi, SearchQuery};
use crate::lineage::Outcome;
use crate::model::{Asset, AssetType};
use crate::selection::SelectionState;

/// Query box and result list.
///
/// Editing the query never talks to the catalog; only [`SearchPanel::submit`]
/// does, which the UI calls for the search button and the Enter key.
#[derive(Clone, Debug, Default)]
pub struct SearchPanel {
    query: SearchQuery,
    results: Vec<Asset>,
}

impl SearchPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_query(&mut self, text: &str) {
        self.query.text = text.to_string();
    }

    pub fn set_type_filter(&mut self, asset_type: Option<AssetType>) {
        self.query.asset_type = asset_type;
    }

    pub fn query(&self) -> &SearchQuery {
        &self.query
    }

    pub fn results(&self) -> &[Asset] {
        &self.results
    }

    /// Runs the current query.
    ///
    /// A successful response replaces the result list in full. A failure is
    /// logged and the previous list stays visible.
    pub async fn submit<A: CatalogApi + ?Sized>(&mut self, api: &A) -> Outcome {
        match api.search(&self.query).await {
            Ok(assets) => {
                info!("Showing {} results for {:?}", assets.len(), self.query.text);
                self.results = assets;
                Outcome::Applied
            }
            Err(e) => {
                error!("Search failed: {}", e);
                Outcome::Failed
            }
        }
    }

    /// Click on the result at `index`: hands its id to the selection.
    pub fn click(&self, index: usize, selection: &mut SelectionState) -> Option<&str> {
        let asset = self.results.get(index)?;
        selection.select(&asset.id);
        Some(asset.id.as_str())
    }
}
