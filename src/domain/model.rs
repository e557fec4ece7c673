use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Normalized photo record, uniform regardless of source provider.
/// `id` carries a provider namespace (`unsplash:...`, `pinterest:...`) so
/// photos aggregated from several providers cannot collide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Photo {
    pub id: String,
    pub url: String,
    pub likes: u32,
}

impl Photo {
    pub fn new(provider: ProviderKind, raw_id: &str, url: String, likes: u32) -> Self {
        Self {
            id: format!("{}:{}", provider, raw_id),
            url,
            likes,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    Unsplash,
    Pinterest,
}

impl ProviderKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::Unsplash => "unsplash",
            ProviderKind::Pinterest => "pinterest",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a single provider search call. A failed call still yields a
/// value: empty photos plus the reason, so one bad provider never aborts a
/// page build.
#[derive(Debug, Clone)]
pub struct ProviderFetch {
    pub provider: ProviderKind,
    pub category: String,
    pub photos: Vec<Photo>,
    pub failure: Option<String>,
}

impl ProviderFetch {
    pub fn success(provider: ProviderKind, category: &str, photos: Vec<Photo>) -> Self {
        Self {
            provider,
            category: category.to_string(),
            photos,
            failure: None,
        }
    }

    pub fn degraded(provider: ProviderKind, category: &str, reason: String) -> Self {
        Self {
            provider,
            category: category.to_string(),
            photos: Vec::new(),
            failure: Some(reason),
        }
    }
}

/// One category tab: display name plus the merged photos of all its queries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryPhotos {
    pub name: String,
    pub display: String,
    pub photos: Vec<Photo>,
}

/// Everything a rendered page needs. Serialized next to the HTML as
/// `<slug>.props.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageProps {
    pub slug: String,
    pub title: String,
    pub categories: Vec<CategoryPhotos>,
    pub all: Vec<Photo>,
    pub warnings: Vec<String>,
    pub generated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct BuildReport {
    pub pages_written: Vec<String>,
    pub warnings: Vec<String>,
}
