use tracing::warn;

use crate::models::{FlickrPhoto, Photo};

const STATIC_HOST: &str = "https://live.staticflickr.com";

/// Full-size image: `https://live.staticflickr.com/{server}/{id}_{secret}.jpg`
pub fn image_url(server: &str, id: &str, secret: &str) -> String {
    format!("{}/{}/{}_{}.jpg", STATIC_HOST, server, id, secret)
}

/// 75x75 square thumbnail, size suffix `q`.
pub fn thumbnail_url(server: &str, id: &str, secret: &str) -> String {
    format!("{}/{}/{}_{}_q.jpg", STATIC_HOST, server, id, secret)
}

pub fn to_domain(raw: &FlickrPhoto) -> Photo {
    Photo {
        id: raw.id.clone(),
        title: raw.title.clone(),
        owner: raw.owner.clone(),
        secret: raw.secret.clone(),
        server: raw.server.clone(),
        farm: raw.farm,
        image_url: image_url(&raw.server, &raw.id, &raw.secret),
        thumbnail_url: thumbnail_url(&raw.server, &raw.id, &raw.secret),
        owner_name: raw.owner_name.clone(),
        views: parse_count("views", &raw.id, raw.views.as_deref()),
        date_upload: parse_count("dateupload", &raw.id, raw.date_upload.as_deref()),
    }
}

pub fn to_domain_list(raw: &[FlickrPhoto]) -> Vec<Photo> {
    raw.iter().map(to_domain).collect()
}

// A malformed number only loses that field, never the photo.
fn parse_count(field: &str, photo_id: &str, value: Option<&str>) -> Option<i64> {
    let value = value?;
    match value.trim().parse::<i64>() {
        Ok(n) => Some(n),
        Err(e) => {
            warn!(field, photo_id, value, error = %e, "failed to parse numeric field");
            None
        }
    }
}
