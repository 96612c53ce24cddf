//! Catalog access.
//!
//! [`CatalogSource`] is the seam between the explore controller and the
//! marketplace's listing endpoint. Production uses [`http::HttpCatalog`];
//! tests substitute scripted sources with controllable delays.

pub mod http;

use async_trait::async_trait;

use crate::error::Result;
use crate::explore::ExploreSnapshot;
use crate::types::ListingPage;

pub use http::HttpCatalog;

/// One page of listings for one exact parameter snapshot.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn fetch_page(&self, snapshot: &ExploreSnapshot) -> Result<ListingPage>;
}
