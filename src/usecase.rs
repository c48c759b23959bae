//! Thin callables between the grid and the repository.

use std::sync::Arc;

use crate::error::Result;
use crate::models::{PageRequest, PhotosPage};
use crate::repository::PhotoRepository;

#[derive(Clone)]
pub struct GetRecentPhotos {
    repository: Arc<dyn PhotoRepository>,
}

impl GetRecentPhotos {
    pub fn new(repository: Arc<dyn PhotoRepository>) -> Self {
        Self { repository }
    }

    pub async fn run(&self, req: PageRequest) -> Result<PhotosPage> {
        self.repository.get_recent_photos(req.page, req.per_page).await
    }
}

#[derive(Clone)]
pub struct SearchPhotos {
    repository: Arc<dyn PhotoRepository>,
}

impl SearchPhotos {
    pub fn new(repository: Arc<dyn PhotoRepository>) -> Self {
        Self { repository }
    }

    pub async fn run(&self, query: &str, req: PageRequest) -> Result<PhotosPage> {
        self.repository.search_photos(query, req.page, req.per_page).await
    }
}
