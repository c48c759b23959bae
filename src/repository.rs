use std::sync::Arc;

use async_trait::async_trait;

use crate::error::Result;
use crate::mapper;
use crate::models::{FlickrPhotosContainer, PhotosPage};
use crate::remote::RemoteDataSource;

#[async_trait]
pub trait PhotoRepository: Send + Sync {
    async fn get_recent_photos(&self, page: u32, per_page: u32) -> Result<PhotosPage>;
    async fn search_photos(&self, query: &str, page: u32, per_page: u32) -> Result<PhotosPage>;
}

/// Remote reads run through the mapper. Errors pass through untouched.
pub struct FlickrPhotoRepository {
    remote: Arc<dyn RemoteDataSource>,
}

impl FlickrPhotoRepository {
    pub fn new(remote: Arc<dyn RemoteDataSource>) -> Self {
        Self { remote }
    }
}

fn to_page(container: FlickrPhotosContainer) -> PhotosPage {
    PhotosPage {
        photos: mapper::to_domain_list(&container.photos),
        current_page: container.page,
        total_pages: container.pages,
        total_photos: container.total,
    }
}

#[async_trait]
impl PhotoRepository for FlickrPhotoRepository {
    async fn get_recent_photos(&self, page: u32, per_page: u32) -> Result<PhotosPage> {
        let container = self.remote.fetch_recent(page, per_page).await?;
        Ok(to_page(container))
    }

    async fn search_photos(&self, query: &str, page: u32, per_page: u32) -> Result<PhotosPage> {
        let container = self.remote.fetch_search(query, page, per_page).await?;
        Ok(to_page(container))
    }
}
