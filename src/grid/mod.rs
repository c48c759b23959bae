//! Grid state machine: recent/search loading, pagination and error display.
//!
//! All state lives in a `watch` channel. Transitions check and set
//! `is_loading` inside one `send_if_modified` call before their first await,
//! so a second fetch-triggering transition started while one is in flight is
//! dropped, never queued.

pub mod paging;
pub mod query;
pub mod scope;

use tokio::sync::watch;
use tracing::{debug, error, info, warn};

use crate::error::PhotoError;
use crate::models::{PageRequest, PhotosPage, Photo, DEFAULT_PER_PAGE};
use crate::usecase::{GetRecentPhotos, SearchPhotos};
use query::SearchInput;

pub use scope::GridScope;

const UNKNOWN_ERROR: &str = "Unknown error occurred";

/// Which listing `load_next_page` continues.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum QueryMode {
    #[default]
    Recent,
    Search(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridPhase {
    Idle(QueryMode),
    Loading(QueryMode),
    Error(QueryMode, String),
}

/// Snapshot published to observers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridState {
    pub photos: Vec<Photo>,
    pub is_loading: bool,
    pub error: Option<String>,
    pub current_page: u32,
    pub total_pages: u32,
    /// Empty in recent mode.
    pub search_query: String,
    mode: QueryMode,
}

impl Default for GridState {
    fn default() -> Self {
        Self {
            photos: Vec::new(),
            is_loading: false,
            error: None,
            current_page: 1,
            total_pages: 0,
            search_query: String::new(),
            mode: QueryMode::Recent,
        }
    }
}

impl GridState {
    fn replaced(page: PhotosPage, mode: QueryMode) -> Self {
        let search_query = match &mode {
            QueryMode::Recent => String::new(),
            QueryMode::Search(term) => term.clone(),
        };
        Self {
            photos: page.photos,
            is_loading: false,
            error: None,
            current_page: page.current_page,
            total_pages: page.total_pages,
            search_query,
            mode,
        }
    }

    pub fn phase(&self) -> GridPhase {
        let mode = self.mode.clone();
        if self.is_loading {
            GridPhase::Loading(mode)
        } else if let Some(message) = &self.error {
            GridPhase::Error(mode, message.clone())
        } else {
            GridPhase::Idle(mode)
        }
    }

    pub fn has_more_pages(&self) -> bool {
        self.current_page < self.total_pages
    }
}

pub struct GridViewModel {
    recent: GetRecentPhotos,
    search: SearchPhotos,
    per_page: u32,
    state: watch::Sender<GridState>,
}

impl GridViewModel {
    pub fn new(recent: GetRecentPhotos, search: SearchPhotos) -> Self {
        let (state, _) = watch::channel(GridState::default());
        Self { recent, search, per_page: DEFAULT_PER_PAGE, state }
    }

    pub fn with_per_page(mut self, per_page: u32) -> Self {
        self.per_page = per_page;
        self
    }

    pub fn state(&self) -> GridState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<GridState> {
        self.state.subscribe()
    }

    pub fn phase(&self) -> GridPhase {
        self.state.borrow().phase()
    }

    /// Replace the grid with page 1 of recent photos. Also the manual retry action.
    pub async fn load_recent(&self) {
        let Some(guard) = self.begin_fetch() else {
            debug!("load_recent ignored, fetch in flight");
            return;
        };
        debug!("loading recent photos");
        let result = self.recent.run(self.first_page()).await;
        guard.disarm();
        match result {
            Ok(page) => {
                info!(count = page.photos.len(), total_pages = page.total_pages, "loaded recent photos");
                self.state.send_replace(GridState::replaced(page, QueryMode::Recent));
            }
            Err(e) => self.fail(e),
        }
    }

    pub async fn search(&self, raw: &str) {
        let term = match query::parse_search_query(raw) {
            Ok(SearchInput::Term(term)) => term,
            Ok(SearchInput::Blank) => {
                debug!("blank search, loading recent photos");
                self.load_recent().await;
                return;
            }
            Err(e) => {
                warn!(error = %e, "search query rejected");
                self.state.send_modify(|s| s.error = Some(e.to_string()));
                return;
            }
        };
        debug!(raw, sanitized = %term, "search query accepted");

        let Some(guard) = self.begin_fetch() else {
            debug!("search ignored, fetch in flight");
            return;
        };
        let result = self.search.run(&term, self.first_page()).await;
        guard.disarm();
        match result {
            Ok(page) => {
                info!(query = %term, count = page.photos.len(), total_pages = page.total_pages, "loaded search results");
                self.state.send_replace(GridState::replaced(page, QueryMode::Search(term)));
            }
            Err(e) => self.fail(e),
        }
    }

    /// Append the next page of whichever listing is active. Duplicates across
    /// pages are kept as the service returns them.
    pub async fn load_next_page(&self) {
        let mut next = None;
        self.state.send_if_modified(|s| {
            if s.is_loading || s.current_page >= s.total_pages {
                return false;
            }
            s.is_loading = true;
            s.error = None;
            next = Some((s.current_page + 1, s.mode.clone()));
            true
        });
        let Some((page, mode)) = next else {
            return;
        };
        let guard = LoadingGuard::new(&self.state);

        let req = PageRequest::page(page).with_per_page(self.per_page);
        let result = match &mode {
            QueryMode::Recent => {
                debug!(page, "loading recent photos page");
                self.recent.run(req).await
            }
            QueryMode::Search(term) => {
                debug!(page, query = %term, "continuing search");
                self.search.run(term, req).await
            }
        };
        guard.disarm();
        match result {
            Ok(fetched) => {
                self.state.send_modify(|s| {
                    s.photos.extend(fetched.photos);
                    s.current_page = fetched.current_page;
                    s.total_pages = fetched.total_pages;
                    s.is_loading = false;
                    s.error = None;
                    info!(page, total = s.photos.len(), "appended page");
                });
            }
            Err(e) => self.fail(e),
        }
    }

    pub fn clear_error(&self) {
        self.state.send_if_modified(|s| s.error.take().is_some());
    }

    fn first_page(&self) -> PageRequest {
        PageRequest::default().with_per_page(self.per_page)
    }

    // None when a fetch is already in flight.
    fn begin_fetch(&self) -> Option<LoadingGuard<'_>> {
        let started = self.state.send_if_modified(|s| {
            if s.is_loading {
                return false;
            }
            s.is_loading = true;
            s.error = None;
            true
        });
        started.then(|| LoadingGuard::new(&self.state))
    }

    // Photos are left as they were.
    fn fail(&self, err: PhotoError) {
        error!(kind = ?err.kind(), error = %err, "grid fetch failed");
        let message = match err.to_string() {
            m if m.is_empty() => UNKNOWN_ERROR.to_string(),
            m => m,
        };
        self.state.send_modify(|s| {
            s.is_loading = false;
            s.error = Some(message);
        });
    }
}

/// Held across a fetch. If the transition is dropped before it publishes a
/// result, the loading flag is cleared and nothing else changes.
struct LoadingGuard<'a> {
    state: &'a watch::Sender<GridState>,
    armed: bool,
}

impl<'a> LoadingGuard<'a> {
    fn new(state: &'a watch::Sender<GridState>) -> Self {
        Self { state, armed: true }
    }

    fn disarm(mut self) {
        self.armed = false;
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        debug!("fetch cancelled, clearing loading flag");
        self.state.send_if_modified(|s| std::mem::replace(&mut s.is_loading, false));
    }
}
