use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use super::{CatalogEntry, CatalogError, CatalogResource};
use crate::config::CatalogConfig;

/// One page of a catalog collection. Items only carry a link to their detail document.
#[derive(Debug, Deserialize)]
struct PageEnvelope {
    results: Vec<PageItem>,
}

#[derive(Debug, Deserialize)]
struct PageItem {
    url: String,
}

#[derive(Debug, Deserialize)]
struct DetailEnvelope {
    result: DetailResult,
}

#[derive(Debug, Deserialize)]
struct DetailResult {
    #[serde(default)]
    description: String,
    properties: DetailProperties,
}

#[derive(Debug, Deserialize)]
struct DetailProperties {
    name: String,
}

impl From<DetailEnvelope> for CatalogEntry {
    fn from(detail: DetailEnvelope) -> Self {
        Self {
            name: detail.result.properties.name,
            description: detail.result.description,
        }
    }
}

/// HTTP client for a SWAPI-compatible catalog.
///
/// Requests are issued one after another with neither timeout nor retry.
#[derive(Clone)]
pub struct CatalogClient {
    client: reqwest::Client,
    base_url: String,
    page_limit: u32,
}

impl CatalogClient {
    pub fn new(config: &CatalogConfig) -> Result<Self, CatalogError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("holocron/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(CatalogError::Client)?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            page_limit: config.page_limit,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the first page of `resource` and resolve every item's detail document.
    #[instrument(skip(self), fields(limit = self.page_limit))]
    pub async fn fetch_page(
        &self,
        resource: CatalogResource,
    ) -> Result<Vec<CatalogEntry>, CatalogError> {
        let url = format!(
            "{}/{}?page=1&limit={}",
            self.base_url,
            resource.path(),
            self.page_limit
        );
        let page: PageEnvelope = self.get_json(&url).await?;
        debug!(items = page.results.len(), "Fetched catalog page");

        let mut entries = Vec::with_capacity(page.results.len());
        for item in page.results {
            let detail: DetailEnvelope = self.get_json(&item.url).await?;
            entries.push(CatalogEntry::from(detail));
        }

        Ok(entries)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, CatalogError> {
        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| CatalogError::Request {
                url: url.to_string(),
                source,
            })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(CatalogError::Status {
                url: url.to_string(),
                status,
            });
        }

        resp.json::<T>().await.map_err(|source| CatalogError::Decode {
            url: url.to_string(),
            source,
        })
    }
}
