use serde::{Deserialize, Serialize};

pub const DEFAULT_PER_PAGE: u32 = 20;

/// A single photo as the grid and detail screens see it. Only the mapper builds these.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Photo {
    pub id: String,
    pub title: String,
    pub owner: String,
    pub secret: String,
    pub server: String,
    pub farm: i64,
    pub image_url: String,
    pub thumbnail_url: String,
    pub owner_name: Option<String>,
    pub views: Option<i64>,
    pub date_upload: Option<i64>,
}

impl Photo {
    /// Same underlying photo, regardless of metadata changes.
    pub fn same_item(&self, other: &Photo) -> bool {
        self.id == other.id
    }
}

/// One fetched page of photos plus the pagination envelope.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct PhotosPage {
    pub photos: Vec<Photo>,
    pub current_page: u32,
    pub total_pages: u32,
    pub total_photos: u64,
}

impl PhotosPage {
    pub fn empty() -> Self {
        Self { photos: Vec::new(), current_page: 1, total_pages: 0, total_photos: 0 }
    }

    pub fn has_more(&self) -> bool {
        self.current_page < self.total_pages
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub per_page: u32,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self { page: 1, per_page: DEFAULT_PER_PAGE }
    }
}

impl PageRequest {
    pub fn page(page: u32) -> Self {
        Self { page, ..Self::default() }
    }

    pub fn with_per_page(self, per_page: u32) -> Self {
        Self { per_page, ..self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn photo(id: &str, title: &str) -> Photo {
        Photo {
            id: id.to_string(),
            title: title.to_string(),
            owner: "owner".to_string(),
            secret: "s".to_string(),
            server: "1".to_string(),
            farm: 1,
            image_url: String::new(),
            thumbnail_url: String::new(),
            owner_name: None,
            views: None,
            date_upload: None,
        }
    }

    #[test]
    fn test_same_item_ignores_metadata() {
        let a = photo("1", "old title");
        let b = photo("1", "new title");
        assert!(a.same_item(&b));
        assert_ne!(a, b);
    }

    #[test]
    fn test_page_request_defaults() {
        assert_eq!(PageRequest::default(), PageRequest { page: 1, per_page: 20 });
        assert_eq!(PageRequest::page(3).per_page, 20);
        assert_eq!(PageRequest::page(3).with_per_page(50), PageRequest { page: 3, per_page: 50 });
    }

    #[test]
    fn test_has_more_pages() {
        let mut page = PhotosPage::empty();
        assert!(!page.has_more());
        page.total_pages = 3;
        assert!(page.has_more());
        page.current_page = 3;
        assert!(!page.has_more());
    }
}
