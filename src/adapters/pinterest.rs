use crate::domain::model::{Photo, ProviderKind};
use crate::domain::ports::PhotoProvider;
use crate::utils::error::{GalleryError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

pub const PINTEREST_API_BASE: &str = "https://api.pinterest.com";

/// Pinterest pin-search adapter. The v1 endpoint authenticates with an
/// `access_token` query parameter and wraps results in a `data` array.
pub struct PinterestProvider {
    client: Client,
    base_url: String,
    access_token: String,
}

impl PinterestProvider {
    pub fn new(client: Client, base_url: String, access_token: String) -> Self {
        Self {
            client,
            base_url,
            access_token,
        }
    }
}

#[derive(Debug, Deserialize)]
struct PinSearchResponse {
    data: Option<Vec<Pin>>,
}

#[derive(Debug, Deserialize)]
struct Pin {
    id: String,
    #[serde(default)]
    like_count: i64,
    image: Option<PinImage>,
}

#[derive(Debug, Deserialize)]
struct PinImage {
    original: Option<PinImageVariant>,
}

#[derive(Debug, Deserialize)]
struct PinImageVariant {
    url: Option<String>,
}

#[async_trait]
impl PhotoProvider for PinterestProvider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Pinterest
    }

    async fn search(&self, query: &str) -> Result<Vec<Photo>> {
        let url = format!("{}/v1/search/pins/", self.base_url);
        tracing::debug!(query, "Pinterest search request");

        let response = self
            .client
            .get(&url)
            .query(&[("query", query), ("access_token", self.access_token.as_str())])
            .send()
            .await?
            .error_for_status()?;

        let body: PinSearchResponse = response.json().await?;

        let pins = body.data.ok_or_else(|| GalleryError::MalformedResponse {
            provider: ProviderKind::Pinterest.to_string(),
            message: "missing `data` field".to_string(),
        })?;

        let photos = pins
            .into_iter()
            .filter_map(|pin| {
                let url = pin
                    .image
                    .and_then(|image| image.original)
                    .and_then(|variant| variant.url)?;
                if url.is_empty() {
                    return None;
                }
                Some(Photo::new(
                    ProviderKind::Pinterest,
                    &pin.id,
                    url,
                    pin.like_count.max(0) as u32,
                ))
            })
            .collect::<Vec<_>>();

        tracing::debug!(query, count = photos.len(), "Pinterest search normalized");
        Ok(photos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    fn provider_for(server: &MockServer) -> PinterestProvider {
        PinterestProvider::new(Client::new(), server.base_url(), "test-token".to_string())
    }

    #[tokio::test]
    async fn normalizes_pins() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET)
                .path("/v1/search/pins/")
                .query_param("query", "anime")
                .query_param("access_token", "test-token");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({
                    "data": [
                        {"id": "p1", "like_count": 44, "image": {"original": {"url": "https://pin.test/p1.jpg"}}},
                        {"id": "p2", "like_count": 7, "image": {"original": {"url": "https://pin.test/p2.jpg"}}}
                    ]
                }));
        });

        let photos = provider_for(&server).search("anime").await.unwrap();

        api_mock.assert();
        assert_eq!(photos.len(), 2);
        assert_eq!(photos[0].id, "pinterest:p1");
        assert_eq!(photos[0].likes, 44);
        assert_eq!(photos[1].url, "https://pin.test/p2.jpg");
    }

    #[tokio::test]
    async fn missing_data_field_is_a_malformed_response() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/v1/search/pins/");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({"message": "invalid token"}));
        });

        let err = provider_for(&server).search("anime").await.unwrap_err();
        assert!(matches!(err, GalleryError::MalformedResponse { .. }));
    }

    #[tokio::test]
    async fn pins_without_an_original_image_are_dropped() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/v1/search/pins/");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({
                    "data": [
                        {"id": "p1", "like_count": 3},
                        {"id": "p2", "like_count": 9, "image": {}},
                        {"id": "p3", "like_count": 1, "image": {"original": {"url": "https://pin.test/p3.jpg"}}}
                    ]
                }));
        });

        let photos = provider_for(&server).search("cities").await.unwrap();

        assert_eq!(photos.len(), 1);
        assert_eq!(photos[0].id, "pinterest:p3");
    }

    #[tokio::test]
    async fn negative_like_count_clamps_to_zero() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/v1/search/pins/");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({
                    "data": [
                        {"id": "p1", "like_count": -5, "image": {"original": {"url": "https://pin.test/p1.jpg"}}}
                    ]
                }));
        });

        let photos = provider_for(&server).search("cities").await.unwrap();
        assert_eq!(photos[0].likes, 0);
    }
}
