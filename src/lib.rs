pub mod utils;
pub mod error;
pub mod models;
pub mod mapper;
pub mod remote;
pub mod repository;
pub mod usecase;
pub mod grid;
pub mod detail;

use std::sync::Arc;

use crate::detail::PhotoDetailViewModel;
use crate::error::Result;
use crate::grid::{GridScope, GridViewModel};
use crate::remote::{FlickrClient, RemoteDataSource};
use crate::repository::{FlickrPhotoRepository, PhotoRepository};
use crate::usecase::{GetRecentPhotos, SearchPhotos};
use crate::utils::config::Config;

pub use crate::error::PhotoError;
pub use crate::grid::{GridPhase, GridState, QueryMode};
pub use crate::models::{PageRequest, Photo, PhotosPage};

/// Shared, long-lived pieces wired once per process. Screens get their own
/// view models from here.
#[derive(Clone)]
pub struct PhotoServices {
    pub config: Config,
    pub repository: Arc<dyn PhotoRepository>,
    pub get_recent: GetRecentPhotos,
    pub search: SearchPhotos,
}

impl PhotoServices {
    pub fn from_config(config: Config) -> Result<Self> {
        let remote: Arc<dyn RemoteDataSource> = Arc::new(FlickrClient::new(&config)?);
        Ok(Self::with_remote(config, remote))
    }

    pub fn with_remote(config: Config, remote: Arc<dyn RemoteDataSource>) -> Self {
        let repository: Arc<dyn PhotoRepository> = Arc::new(FlickrPhotoRepository::new(remote));
        Self::with_repository(config, repository)
    }

    pub fn with_repository(config: Config, repository: Arc<dyn PhotoRepository>) -> Self {
        Self {
            config,
            get_recent: GetRecentPhotos::new(repository.clone()),
            search: SearchPhotos::new(repository.clone()),
            repository,
        }
    }

    /// A fresh, independent grid state machine.
    pub fn grid_view_model(&self) -> Arc<GridViewModel> {
        Arc::new(GridViewModel::new(self.get_recent.clone(), self.search.clone()).with_per_page(self.config.per_page))
    }

    /// A grid screen with its initial load already launched. Needs a tokio runtime.
    pub fn open_grid(&self) -> GridScope {
        GridScope::start(self.grid_view_model())
    }

    pub fn detail_view_model(&self) -> PhotoDetailViewModel {
        PhotoDetailViewModel::new()
    }
}
