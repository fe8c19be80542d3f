use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, info};
use url::Url;

use super::{CatalogApi, SearchQuery};
use crate::errors::{FetchError, FetchResult};
use crate::model::{Asset, LineagePayload, LineageResponse, SearchResponse};

/// Catalog client over HTTP.
///
/// No timeout is configured: a request that never completes never resolves.
#[derive(Clone, Debug)]
pub struct HttpCatalogClient {
    client: Client,
    base_url: Url,
    lineage_depth: Option<u32>,
}

impl HttpCatalogClient {
    pub fn new(base_url: &str) -> FetchResult<Self> {
        let mut base_url = Url::parse(base_url)?;
        // Url::join drops the last path segment unless it ends with '/'
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        Ok(Self {
            client: Client::new(),
            base_url,
            lineage_depth: None,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Asks the catalog for this many hops of lineage instead of its default
    pub fn with_lineage_depth(mut self, depth: Option<u32>) -> Self {
        self.lineage_depth = depth;
        self
    }

    pub fn search_url(&self, query: &SearchQuery) -> FetchResult<Url> {
        let mut url = self.base_url.join("api/search/")?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("q", &query.text);
            if let Some(asset_type) = &query.asset_type {
                pairs.append_pair("asset_type", asset_type.as_str());
            }
        }
        Ok(url)
    }

    pub fn lineage_url(&self, asset_id: &str) -> FetchResult<Url> {
        let mut url = self.base_url.join("api/assets/")?;
        url.path_segments_mut()
            .map_err(|_| url::ParseError::RelativeUrlWithCannotBeABaseBase)?
            .pop_if_empty()
            .push(asset_id)
            .push("lineage");
        if let Some(depth) = self.lineage_depth {
            url.query_pairs_mut()
                .append_pair("depth", &depth.to_string());
        }
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> FetchResult<T> {
        debug!("GET {}", url);
        let response = self.client.get(url).send().await?;
        let body = Self::check_status(response).await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn check_status(response: Response) -> FetchResult<String> {
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(body)
    }
}

#[async_trait]
impl CatalogApi for HttpCatalogClient {
    async fn search(&self, query: &SearchQuery) -> FetchResult<Vec<Asset>> {
        let response: SearchResponse = self.get_json(self.search_url(query)?).await?;
        info!(
            "Search {:?} returned {} assets",
            query.text,
            response.results.len()
        );
        Ok(response.results)
    }

    async fn lineage(&self, asset_id: &str) -> FetchResult<Option<LineagePayload>> {
        let response: LineageResponse = self.get_json(self.lineage_url(asset_id)?).await?;
        match &response.lineage {
            Some(payload) => info!("Lineage for {}: {}", asset_id, payload.stats()),
            None => info!("No lineage for {}", asset_id),
        }
        Ok(response.lineage)
    }
}
