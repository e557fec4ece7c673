use crate::domain::model::{Photo, ProviderKind};
use crate::domain::ports::PhotoProvider;
use crate::utils::error::{GalleryError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

pub const UNSPLASH_API_BASE: &str = "https://api.unsplash.com";

/// Unsplash search adapter. Authenticates with the `Client-ID` scheme and
/// normalizes `/search/photos` results.
pub struct UnsplashProvider {
    client: Client,
    base_url: String,
    access_key: String,
    per_page: usize,
}

impl UnsplashProvider {
    pub fn new(client: Client, base_url: String, access_key: String, per_page: usize) -> Self {
        Self {
            client,
            base_url,
            access_key,
            per_page,
        }
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    results: Option<Vec<SearchResult>>,
}

#[derive(Debug, Deserialize)]
struct SearchResult {
    id: String,
    #[serde(default)]
    likes: i64,
    urls: Option<ImageUrls>,
}

#[derive(Debug, Deserialize)]
struct ImageUrls {
    regular: Option<String>,
}

#[async_trait]
impl PhotoProvider for UnsplashProvider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Unsplash
    }

    async fn search(&self, query: &str) -> Result<Vec<Photo>> {
        let url = format!("{}/search/photos", self.base_url);
        tracing::debug!(query, "Unsplash search request");

        let per_page = self.per_page.to_string();
        let response = self
            .client
            .get(&url)
            .query(&[("query", query), ("per_page", per_page.as_str())])
            .header("Authorization", format!("Client-ID {}", self.access_key))
            .send()
            .await?
            .error_for_status()?;

        let body: SearchResponse = response.json().await?;

        let results = body.results.ok_or_else(|| GalleryError::MalformedResponse {
            provider: ProviderKind::Unsplash.to_string(),
            message: "missing `results` field".to_string(),
        })?;

        let photos = results
            .into_iter()
            .filter_map(|result| {
                let url = result.urls.and_then(|urls| urls.regular)?;
                if url.is_empty() {
                    return None;
                }
                Some(Photo::new(
                    ProviderKind::Unsplash,
                    &result.id,
                    url,
                    result.likes.max(0) as u32,
                ))
            })
            .collect::<Vec<_>>();

        tracing::debug!(query, count = photos.len(), "Unsplash search normalized");
        Ok(photos)
    }
}
