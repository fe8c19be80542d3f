//! Access to the catalog HTTP API
//!
//! The viewer talks to the catalog through [`CatalogApi`] so the panels can be
//! driven by the real HTTP client or by an in-memory catalog in tests.

pub mod http;

use async_trait::async_trait;

use crate::errors::FetchResult;
use crate::model::{Asset, AssetType, LineagePayload};

pub use http::HttpCatalogClient;

/// A free-text catalog query, optionally narrowed to one asset type.
///
/// The text is sent as typed: empty or whitespace-only queries are not trimmed or
/// rejected.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchQuery {
    pub text: String,
    pub asset_type: Option<AssetType>,
}

impl SearchQuery {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            asset_type: None,
        }
    }

    pub fn with_type(mut self, asset_type: AssetType) -> Self {
        self.asset_type = Some(asset_type);
        self
    }
}

#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// Assets matching the query, in catalog order
    async fn search(&self, query: &SearchQuery) -> FetchResult<Vec<Asset>>;

    /// Lineage of one asset; `None` when the catalog has none
    async fn lineage(&self, asset_id: &str) -> FetchResult<Option<LineagePayload>>;
}

#[async_trait]
impl<T: CatalogApi + ?Sized> CatalogApi for std::sync::Arc<T> {
    async fn search(&self, query: &SearchQuery) -> FetchResult<Vec<Asset>> {
        (**self).search(query).await
    }

    async fn lineage(&self, asset_id: &str) -> FetchResult<Option<LineagePayload>> {
        (**self).lineage(asset_id).await
    }
}
