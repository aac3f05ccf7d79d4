//! Access to the remote science-fiction catalog and lazy population of the
//! local `planet` and `people` tables.

mod client;
pub mod populate;

pub use client::CatalogClient;

use thiserror::Error;

/// A catalog collection that can be mirrored locally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogResource {
    People,
    Planets,
}

impl CatalogResource {
    /// Path segment of the collection under the catalog base URL.
    pub fn path(self) -> &'static str {
        match self {
            CatalogResource::People => "people",
            CatalogResource::Planets => "planets",
        }
    }
}

/// Name and description extracted from an item's detail document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("catalog returned {status} for {url}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("invalid catalog response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}
