#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::http::{header, StatusCode};
use axum::{extract::Query, routing::get, Router};
use parking_lot::Mutex;
use tokio::net::TcpListener;
use tokio::sync::{watch, Notify};

use flickr_grid::grid::GridViewModel;
use flickr_grid::mapper;
use flickr_grid::models::{FlickrPhoto, FlickrPhotosContainer};
use flickr_grid::remote::RemoteDataSource;
use flickr_grid::repository::PhotoRepository;
use flickr_grid::usecase::{GetRecentPhotos, SearchPhotos};
use flickr_grid::utils::config::Config;
use flickr_grid::{GridState, Photo, PhotoError, PhotosPage};

pub fn raw_photo(id: &str) -> FlickrPhoto {
    FlickrPhoto {
        id: id.to_string(),
        owner: format!("owner-{}", id),
        secret: format!("secret{}", id),
        server: "65535".to_string(),
        farm: 66,
        title: format!("Photo {}", id),
        is_public: 1,
        owner_name: Some(format!("Owner {}", id)),
        date_upload: Some("1700000000".to_string()),
        views: Some("10".to_string()),
    }
}

pub fn photo(id: &str) -> Photo {
    mapper::to_domain(&raw_photo(id))
}

pub fn page(ids: &[&str], current_page: u32, total_pages: u32) -> PhotosPage {
    PhotosPage {
        photos: ids.iter().map(|id| photo(id)).collect(),
        current_page,
        total_pages,
        total_photos: (total_pages as u64) * 20,
    }
}

pub fn container(ids: &[&str], page: u32, pages: u32, total: u64) -> FlickrPhotosContainer {
    FlickrPhotosContainer {
        page,
        pages,
        per_page: 20,
        total,
        photos: ids.iter().map(|id| raw_photo(id)).collect(),
    }
}

pub fn ids(state: &GridState) -> Vec<String> {
    state.photos.iter().map(|p| p.id.clone()).collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Recent { page: u32, per_page: u32 },
    Search { query: String, page: u32, per_page: u32 },
}

/// Repository answering from a script of queued results. With a gate, every
/// call parks until the test releases it.
#[derive(Default)]
pub struct FakeRepository {
    results: Mutex<VecDeque<Result<PhotosPage, PhotoError>>>,
    calls: Mutex<Vec<Call>>,
    gate: Option<Arc<Notify>>,
}

impl FakeRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn gated(gate: Arc<Notify>) -> Self {
        Self { gate: Some(gate), ..Self::default() }
    }

    pub fn push_ok(&self, page: PhotosPage) {
        self.results.lock().push_back(Ok(page));
    }

    pub fn push_err(&self, err: PhotoError) {
        self.results.lock().push_back(Err(err));
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().clone()
    }

    async fn answer(&self, call: Call) -> Result<PhotosPage, PhotoError> {
        self.calls.lock().push(call);
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        let next = self.results.lock().pop_front();
        next.unwrap_or_else(|| Err(PhotoError::unknown("no scripted result")))
    }
}

#[async_trait]
impl PhotoRepository for FakeRepository {
    async fn get_recent_photos(&self, page: u32, per_page: u32) -> Result<PhotosPage, PhotoError> {
        self.answer(Call::Recent { page, per_page }).await
    }

    async fn search_photos(&self, query: &str, page: u32, per_page: u32) -> Result<PhotosPage, PhotoError> {
        self.answer(Call::Search { query: query.to_string(), page, per_page }).await
    }
}

/// Remote source returning queued raw containers.
#[derive(Default)]
pub struct FakeRemote {
    results: Mutex<VecDeque<Result<FlickrPhotosContainer, PhotoError>>>,
    pub calls: Mutex<Vec<Call>>,
}

impl FakeRemote {
    pub fn push_ok(&self, c: FlickrPhotosContainer) {
        self.results.lock().push_back(Ok(c));
    }

    pub fn push_err(&self, err: PhotoError) {
        self.results.lock().push_back(Err(err));
    }

    fn answer(&self, call: Call) -> Result<FlickrPhotosContainer, PhotoError> {
        self.calls.lock().push(call);
        self.results
            .lock()
            .pop_front()
            .unwrap_or_else(|| Err(PhotoError::unknown("no scripted result")))
    }
}

#[async_trait]
impl RemoteDataSource for FakeRemote {
    async fn fetch_recent(&self, page: u32, per_page: u32) -> Result<FlickrPhotosContainer, PhotoError> {
        self.answer(Call::Recent { page, per_page })
    }

    async fn fetch_search(&self, query: &str, page: u32, per_page: u32) -> Result<FlickrPhotosContainer, PhotoError> {
        self.answer(Call::Search { query: query.to_string(), page, per_page })
    }
}

pub fn view_model(repo: Arc<FakeRepository>) -> GridViewModel {
    let repo: Arc<dyn PhotoRepository> = repo;
    GridViewModel::new(GetRecentPhotos::new(repo.clone()), SearchPhotos::new(repo))
}

/// Wait until the published state satisfies `pred`, failing after two seconds.
pub async fn wait_for_state<F>(rx: &mut watch::Receiver<GridState>, pred: F)
where
    F: Fn(&GridState) -> bool,
{
    let waited = tokio::time::timeout(Duration::from_secs(2), async {
        loop {
            if pred(&rx.borrow_and_update()) {
                return;
            }
            if rx.changed().await.is_err() {
                return;
            }
        }
    })
    .await;
    assert!(waited.is_ok(), "state never reached expected condition: {:?}", *rx.borrow());
}

/// Fake Flickr REST endpoint at `{base_url}rest/`, recording every query string.
pub struct FakeFlickr {
    pub base_url: String,
    pub requests: Arc<Mutex<Vec<HashMap<String, String>>>>,
}

impl FakeFlickr {
    pub fn config(&self) -> Config {
        Config {
            api_key: "test-key".to_string(),
            base_url: self.base_url.clone(),
            per_page: 20,
            timeout: Duration::from_secs(5),
        }
    }

    pub fn requests(&self) -> Vec<HashMap<String, String>> {
        self.requests.lock().clone()
    }
}

pub async fn spawn_fake_flickr(status: StatusCode, body: impl Into<String>) -> FakeFlickr {
    spawn_fake_flickr_delayed(status, body, Duration::ZERO).await
}

pub async fn spawn_fake_flickr_delayed(status: StatusCode, body: impl Into<String>, delay: Duration) -> FakeFlickr {
    let body = body.into();
    let requests = Arc::new(Mutex::new(Vec::new()));
    let recorded = requests.clone();
    let app = Router::new().route(
        "/services/rest/",
        get(move |Query(params): Query<HashMap<String, String>>| {
            let recorded = recorded.clone();
            let body = body.clone();
            async move {
                recorded.lock().push(params);
                if !delay.is_zero() {
                    tokio::time::sleep(delay).await;
                }
                (status, [(header::CONTENT_TYPE, "application/json")], body)
            }
        }),
    );
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    FakeFlickr {
        base_url: format!("http://127.0.0.1:{}/services/", port),
        requests,
    }
}

pub fn recent_body(ids: &[&str], page: u32, pages: u32) -> String {
    let photos: Vec<serde_json::Value> = ids
        .iter()
        .map(|id| {
            serde_json::json!({
                "id": id, "owner": format!("owner-{}", id), "secret": format!("secret{}", id),
                "server": "65535", "farm": 66, "title": format!("Photo {}", id), "ispublic": 1,
                "isfriend": 0, "isfamily": 0, "ownername": format!("Owner {}", id),
                "dateupload": "1700000000", "views": "10"
            })
        })
        .collect();
    serde_json::json!({
        "photos": {"page": page, "pages": pages, "perpage": 20, "total": pages * 20, "photo": photos},
        "stat": "ok"
    })
    .to_string()
}
