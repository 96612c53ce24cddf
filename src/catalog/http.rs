//! HTTP implementation of [`CatalogSource`] against the marketplace API.

use async_trait::async_trait;
use reqwest::Client;

use crate::config::Config;
use crate::error::{LecternError, Result};
use crate::explore::{ExploreSnapshot, Tab};
use crate::types::{
    CourseSummary, ErrorBody, EventSummary, ExploreEnvelope, Listing, ListingPage,
};

use super::CatalogSource;

/// Catalog client for `GET {base_url}/api/explore`.
pub struct HttpCatalog {
    client: Client,
    base_url: String,
    timeout_secs: u64,
}

impl HttpCatalog {
    pub fn from_config(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .user_agent(concat!("lectern/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: config.api_url().trim_end_matches('/').to_string(),
            timeout_secs: config.request_timeout_secs,
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/api/explore", self.base_url)
    }

    /// Map a transport error, distinguishing timeouts for the error surface.
    fn transport_error(&self, error: reqwest::Error) -> LecternError {
        if error.is_timeout() {
            LecternError::Timeout(self.timeout_secs)
        } else {
            LecternError::Http(error)
        }
    }
}

#[async_trait]
impl CatalogSource for HttpCatalog {
    async fn fetch_page(&self, snapshot: &ExploreSnapshot) -> Result<ListingPage> {
        let pairs = snapshot.request_pairs();
        tracing::debug!(endpoint = %self.endpoint(), ?pairs, "explore request");

        let response = self
            .client
            .get(self.endpoint())
            .query(&pairs)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            // Best-effort extraction of the server's error message.
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorBody>(&body)
                .map(|b| b.error)
                .unwrap_or_else(|_| status.to_string());
            return Err(LecternError::Api(message));
        }

        let bytes = response.bytes().await.map_err(|e| self.transport_error(e))?;
        decode_page(snapshot.tab, &bytes)
    }
}

/// Decode the response envelope for the domain that was queried. The item
/// shape depends on the tab, so the caller's snapshot decides the type.
fn decode_page(tab: Tab, bytes: &[u8]) -> Result<ListingPage> {
    match tab {
        Tab::Courses => {
            let envelope: ExploreEnvelope<CourseSummary> = serde_json::from_slice(bytes)?;
            Ok(ListingPage {
                items: envelope.items.into_iter().map(Listing::Course).collect(),
                total_pages: envelope.pagination.total_pages.max(1),
                total_items: envelope.pagination.total_items,
            })
        }
        Tab::Events => {
            let envelope: ExploreEnvelope<EventSummary> = serde_json::from_slice(bytes)?;
            Ok(ListingPage {
                items: envelope.items.into_iter().map(Listing::Event).collect(),
                total_pages: envelope.pagination.total_pages.max(1),
                total_items: envelope.pagination.total_items,
            })
        }
    }
}
