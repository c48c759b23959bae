use async_trait::async_trait;
use tracing::{debug, error};

use crate::error::{PhotoError, Result};
use crate::models::{FlickrPhotosContainer, FlickrResponse};
use crate::remote::RemoteDataSource;
use crate::utils::config::Config;

pub const METHOD_RECENT: &str = "flickr.photos.getRecent";
pub const METHOD_SEARCH: &str = "flickr.photos.search";
pub const EXTRAS: &str = "date_upload,owner_name,views";

#[derive(Clone, Copy, Debug)]
enum Operation {
    Recent,
    Search,
}

impl Operation {
    fn method(self) -> &'static str {
        match self {
            Operation::Recent => METHOD_RECENT,
            Operation::Search => METHOD_SEARCH,
        }
    }

    fn fetch_context(self) -> &'static str {
        match self {
            Operation::Recent => "Failed to fetch recent photos",
            Operation::Search => "Failed to search photos",
        }
    }

    fn parse_context(self) -> &'static str {
        match self {
            Operation::Recent => "Error parsing recent photos",
            Operation::Search => "Error parsing search results",
        }
    }
}

/// `RemoteDataSource` over the Flickr REST API.
#[derive(Clone)]
pub struct FlickrClient {
    http: reqwest::Client,
    rest_url: String,
    api_key: String,
    default_per_page: u32,
}

impl FlickrClient {
    pub fn new(cfg: &Config) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(cfg.timeout)
            .build()
            .map_err(|e| PhotoError::from(e).context("Failed to create HTTP client"))?;
        Ok(Self::with_client(http, cfg))
    }

    /// Reuse an existing reqwest client (connection pool, proxies, TLS config).
    pub fn with_client(http: reqwest::Client, cfg: &Config) -> Self {
        Self {
            http,
            rest_url: cfg.rest_url(),
            api_key: cfg.api_key.clone(),
            default_per_page: cfg.per_page,
        }
    }

    async fn call(&self, op: Operation, text: Option<&str>, page: u32, per_page: u32) -> Result<FlickrPhotosContainer> {
        let page = page.max(1);
        let per_page = if per_page == 0 { self.default_per_page } else { per_page };
        debug!(method = op.method(), page, per_page, "flickr request");

        let mut params: Vec<(&str, String)> = vec![
            ("method", op.method().to_string()),
            ("api_key", self.api_key.clone()),
            ("format", "json".to_string()),
            ("nojsoncallback", "1".to_string()),
            ("extras", EXTRAS.to_string()),
            ("page", page.to_string()),
            ("per_page", per_page.to_string()),
        ];
        if let Some(text) = text {
            params.push(("text", text.to_string()));
        }

        let fetch_err = |e: reqwest::Error| {
            let err = PhotoError::from(e).context(op.fetch_context());
            error!(method = op.method(), page, kind = ?err.kind(), error = %err, "flickr request failed");
            err
        };

        let response = self
            .http
            .get(&self.rest_url)
            .query(&params)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(fetch_err)?;
        let body = response.bytes().await.map_err(fetch_err)?;

        let envelope: FlickrResponse = serde_json::from_slice(&body).map_err(|e| {
            let err = PhotoError::from(e).context(op.parse_context());
            error!(method = op.method(), page, error = %err, "flickr response did not parse");
            err
        })?;
        if !envelope.is_ok() {
            let code = envelope.code.unwrap_or(0);
            let message = envelope
                .message
                .unwrap_or_else(|| format!("Flickr returned stat '{}'", envelope.stat));
            error!(method = op.method(), page, code, message = %message, "flickr reported failure");
            return Err(PhotoError::server(code, message));
        }

        let container = envelope
            .photos
            .ok_or_else(|| PhotoError::parse(format!("{}: response has no photos", op.parse_context())))?;
        debug!(
            method = op.method(),
            page = container.page,
            pages = container.pages,
            count = container.photos.len(),
            "flickr response"
        );
        Ok(container)
    }
}

#[async_trait]
impl RemoteDataSource for FlickrClient {
    async fn fetch_recent(&self, page: u32, per_page: u32) -> Result<FlickrPhotosContainer> {
        self.call(Operation::Recent, None, page, per_page).await
    }

    async fn fetch_search(&self, query: &str, page: u32, per_page: u32) -> Result<FlickrPhotosContainer> {
        self.call(Operation::Search, Some(query), page, per_page).await
    }
}
