//! Detail screen state and the text it shows for a photo.

use chrono::{DateTime, TimeZone, Utc};
use tokio::sync::watch;

use crate::models::Photo;

const PHOTO_PAGE_HOST: &str = "https://www.flickr.com/photos";

/// Holds the photo picked from the grid.
pub struct PhotoDetailViewModel {
    photo: watch::Sender<Option<Photo>>,
}

impl Default for PhotoDetailViewModel {
    fn default() -> Self {
        Self::new()
    }
}

impl PhotoDetailViewModel {
    pub fn new() -> Self {
        let (photo, _) = watch::channel(None);
        Self { photo }
    }

    pub fn set_photo(&self, photo: Photo) {
        self.photo.send_replace(Some(photo));
    }

    pub fn photo(&self) -> Option<Photo> {
        self.photo.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<Option<Photo>> {
        self.photo.subscribe()
    }
}

pub struct PhotoDetails<'a> {
    photo: &'a Photo,
}

impl<'a> PhotoDetails<'a> {
    pub fn new(photo: &'a Photo) -> Self {
        Self { photo }
    }

    pub fn owner_display(&self) -> &'a str {
        self.photo.owner_name.as_deref().unwrap_or(&self.photo.owner)
    }

    pub fn views_display(&self) -> String {
        match self.photo.views {
            Some(n) => format_count(n),
            None => "N/A".to_string(),
        }
    }

    pub fn uploaded_at(&self) -> Option<DateTime<Utc>> {
        self.photo.date_upload.and_then(|secs| Utc.timestamp_opt(secs, 0).single())
    }

    pub fn page_url(&self) -> String {
        format!("{}/{}/{}", PHOTO_PAGE_HOST, self.photo.owner, self.photo.id)
    }

    pub fn share_text(&self) -> String {
        format!(
            "Check out this photo: \"{}\" by {}\nView on Flickr: {}",
            self.photo.title,
            self.photo.owner,
            self.page_url()
        )
    }
}

/// 2500 -> "2.5K", 1_200_000 -> "1.2M".
pub fn format_count(n: i64) -> String {
    if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.1}K", n as f64 / 1_000.0)
    } else {
        n.to_string()
    }
}
