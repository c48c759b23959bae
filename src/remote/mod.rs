pub mod flickr;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::FlickrPhotosContainer;

pub use flickr::FlickrClient;

/// Raw paginated reads against the photo service. One call, one request; no caching.
#[async_trait]
pub trait RemoteDataSource: Send + Sync {
    async fn fetch_recent(&self, page: u32, per_page: u32) -> Result<FlickrPhotosContainer>;

    /// `query` is sent verbatim. Sanitizing it is the caller's job.
    async fn fetch_search(&self, query: &str, page: u32, per_page: u32) -> Result<FlickrPhotosContainer>;
}
