//! Wire types for the Flickr REST JSON envelope.
//!
//! Flickr is inconsistent about numbers: `total` is a string on some
//! endpoints, `views`/`dateupload` are strings, and the envelope counters are
//! usually numbers. Everything numeric is accepted in either form.

use serde::{Deserialize, Deserializer, Serialize};

/// Top-level envelope. On failure Flickr omits `photos` and sends `code`/`message`.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct FlickrResponse {
    #[serde(default)]
    pub photos: Option<FlickrPhotosContainer>,
    pub stat: String,
    #[serde(default)]
    pub code: Option<i32>,
    #[serde(default)]
    pub message: Option<String>,
}

impl FlickrResponse {
    pub fn is_ok(&self) -> bool {
        self.stat == "ok"
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct FlickrPhotosContainer {
    #[serde(deserialize_with = "de_u32")]
    pub page: u32,
    #[serde(deserialize_with = "de_u32")]
    pub pages: u32,
    #[serde(rename = "perpage", deserialize_with = "de_u32")]
    pub per_page: u32,
    #[serde(deserialize_with = "de_u64")]
    pub total: u64,
    #[serde(rename = "photo", default)]
    pub photos: Vec<FlickrPhoto>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct FlickrPhoto {
    #[serde(deserialize_with = "de_text")]
    pub id: String,
    pub owner: String,
    pub secret: String,
    #[serde(deserialize_with = "de_text")]
    pub server: String,
    #[serde(default, deserialize_with = "de_i64_or_zero")]
    pub farm: i64,
    #[serde(default)]
    pub title: String,
    #[serde(rename = "ispublic", default, deserialize_with = "de_i64_or_zero")]
    pub is_public: i64,
    #[serde(rename = "ownername", default)]
    pub owner_name: Option<String>,
    #[serde(rename = "dateupload", default, deserialize_with = "de_opt_text")]
    pub date_upload: Option<String>,
    #[serde(default, deserialize_with = "de_opt_text")]
    pub views: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Lenient {
    Int(i64),
    Float(f64),
    Text(String),
}

impl Lenient {
    fn into_text(self) -> String {
        match self {
            Lenient::Int(n) => n.to_string(),
            Lenient::Float(f) => f.to_string(),
            Lenient::Text(s) => s,
        }
    }

    fn as_i64(&self) -> Option<i64> {
        match self {
            Lenient::Int(n) => Some(*n),
            // `as` would saturate out-of-range values.
            Lenient::Float(f) if f.fract() == 0.0 && f.abs() < i64::MAX as f64 => Some(*f as i64),
            Lenient::Float(_) => None,
            Lenient::Text(s) => s.trim().parse().ok(),
        }
    }
}

fn de_u32<'de, D: Deserializer<'de>>(d: D) -> Result<u32, D::Error> {
    let raw = Lenient::deserialize(d)?;
    raw.as_i64()
        .and_then(|n| u32::try_from(n).ok())
        .ok_or_else(|| serde::de::Error::custom("expected a non-negative page counter"))
}

fn de_u64<'de, D: Deserializer<'de>>(d: D) -> Result<u64, D::Error> {
    let raw = Lenient::deserialize(d)?;
    raw.as_i64()
        .and_then(|n| u64::try_from(n).ok())
        .ok_or_else(|| serde::de::Error::custom("expected a non-negative total"))
}

fn de_i64_or_zero<'de, D: Deserializer<'de>>(d: D) -> Result<i64, D::Error> {
    let raw = Option::<Lenient>::deserialize(d)?;
    Ok(raw.and_then(|v| v.as_i64()).unwrap_or(0))
}

fn de_text<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    Ok(Lenient::deserialize(d)?.into_text())
}

fn de_opt_text<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
    Ok(Option::<Lenient>::deserialize(d)?.map(Lenient::into_text))
}
