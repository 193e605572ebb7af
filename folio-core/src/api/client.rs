use folio_config::ApiConfig;
use folio_model::{ContentKind, CoverArt, RepresentativeWork, ResearchHighlight};
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, info};
use url::Url;

use crate::{
    error::{ApiError, Result},
    media::ImageResolver,
};

/// Read-only client for the public content endpoints.
///
/// Built from an explicit [`ApiConfig`] at start-up; there is no process-wide
/// base URL.
#[derive(Debug, Clone)]
pub struct ContentClient {
    client: Client,
    base_url: Url,
    images: ImageResolver,
}

impl ContentClient {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(ApiError::Client)?;
        let base_url = with_trailing_slash(&config.base_url);
        info!(base_url = %base_url, "content client created");

        Ok(Self {
            client,
            images: ImageResolver::new(&config.base_url),
            base_url,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolver for `image_path` fields of the records this client returns.
    pub fn images(&self) -> &ImageResolver {
        &self.images
    }

    /// `{base}/api/{resource}` with the given query pairs.
    pub fn endpoint(
        &self,
        resource: &str,
        query: &[(&str, &str)],
    ) -> Result<Url> {
        let mut url = self
            .base_url
            .join(&format!("api/{}", resource.trim_matches('/')))
            .map_err(|source| ApiError::Endpoint {
                resource: resource.to_string(),
                source,
            })?;
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        Ok(url)
    }

    /// Fetch a JSON array of records. A `null` body is treated as an empty
    /// list.
    pub async fn list<T: DeserializeOwned>(
        &self,
        resource: &str,
        query: &[(&str, &str)],
    ) -> Result<Vec<T>> {
        let url = self.endpoint(resource, query)?;
        let url_str = url.to_string();
        debug!(url = %url_str, "fetching content list");

        let response = self.client.get(url).send().await.map_err(|source| {
            ApiError::Transport {
                url: url_str.clone(),
                source,
            }
        })?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                url: url_str,
                status,
            });
        }
        let body = response.bytes().await.map_err(|source| ApiError::Transport {
            url: url_str.clone(),
            source,
        })?;
        let records: Option<Vec<T>> = serde_json::from_slice(&body)
            .map_err(|source| ApiError::Decode {
                url: url_str.clone(),
                source,
            })?;
        let records = records.unwrap_or_default();
        debug!(url = %url_str, count = records.len(), "fetched content list");
        Ok(records)
    }

    pub async fn cover_arts(&self, active_only: bool) -> Result<Vec<CoverArt>> {
        let query: &[(&str, &str)] = if active_only {
            &[("active_only", "1")]
        } else {
            &[]
        };
        self.list(ContentKind::CoverArts.resource(), query).await
    }

    pub async fn representative_works(
        &self,
    ) -> Result<Vec<RepresentativeWork>> {
        self.list(ContentKind::RepresentativeWorks.resource(), &[])
            .await
    }

    pub async fn research_highlights(&self) -> Result<Vec<ResearchHighlight>> {
        self.list(ContentKind::ResearchHighlights.resource(), &[])
            .await
    }
}

/// `Url::join` replaces the last path segment unless the base ends in `/`.
fn with_trailing_slash(url: &Url) -> Url {
    let mut url = url.clone();
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}
