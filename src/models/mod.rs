pub mod flickr;
pub mod photo;

pub use flickr::{FlickrPhoto, FlickrPhotosContainer, FlickrResponse};
pub use photo::{PageRequest, Photo, PhotosPage, DEFAULT_PER_PAGE};
