use std::future::Future;
use std::sync::Arc;

use parking_lot::Mutex;
use tokio::task::JoinHandle;
use tracing::debug;

use super::{paging, GridViewModel};

/// Lifetime of one grid screen. Transitions launched here run as tokio tasks;
/// dropping the scope aborts whatever is still in flight so late results are
/// never applied.
pub struct GridScope {
    view_model: Arc<GridViewModel>,
    tasks: Mutex<Vec<JoinHandle<()>>>,
}

impl GridScope {
    pub fn new(view_model: Arc<GridViewModel>) -> Self {
        Self { view_model, tasks: Mutex::new(Vec::new()) }
    }

    /// New scope with the initial recent-photos load already launched.
    pub fn start(view_model: Arc<GridViewModel>) -> Self {
        let scope = Self::new(view_model);
        scope.launch_load_recent();
        scope
    }

    pub fn view_model(&self) -> &Arc<GridViewModel> {
        &self.view_model
    }

    pub fn launch_load_recent(&self) {
        let vm = self.view_model.clone();
        self.spawn(async move { vm.load_recent().await });
    }

    pub fn launch_search(&self, raw: impl Into<String>) {
        let vm = self.view_model.clone();
        let raw = raw.into();
        self.spawn(async move { vm.search(&raw).await });
    }

    pub fn launch_next_page(&self) {
        let vm = self.view_model.clone();
        self.spawn(async move { vm.load_next_page().await });
    }

    /// Scroll hook for the renderer. Returns true if a next-page load was launched.
    pub fn on_scrolled(&self, last_visible: usize) -> bool {
        let state = self.view_model.state();
        if state.is_loading || !state.has_more_pages() || !paging::should_load_more(last_visible, state.photos.len()) {
            return false;
        }
        self.launch_next_page();
        true
    }

    pub fn in_flight(&self) -> usize {
        let mut tasks = self.tasks.lock();
        tasks.retain(|h| !h.is_finished());
        tasks.len()
    }

    fn spawn<F>(&self, fut: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let mut tasks = self.tasks.lock();
        tasks.retain(|h| !h.is_finished());
        tasks.push(tokio::spawn(fut));
    }
}

impl Drop for GridScope {
    fn drop(&mut self) {
        let tasks = self.tasks.get_mut();
        if !tasks.is_empty() {
            debug!(count = tasks.len(), "grid scope dropped, aborting tasks");
        }
        for handle in tasks.drain(..) {
            handle.abort();
        }
    }
}
