use std::time::Duration;

use reqwest::Client;

use crate::domain::{
    common::entities::app_errors::CoreError,
    food_image::{entities::FetchedImage, ports::ImageFetcher},
};

const FETCH_TIMEOUT: Duration = Duration::from_secs(15);

/// Downloads images for the vision pipeline. Every failure here is a
/// client-input error: the URL came from the caller, not from the model.
#[derive(Debug, Clone)]
pub struct HttpImageFetcher {
    client: Client,
}

impl HttpImageFetcher {
    pub fn new() -> Self {
        // same panic-on-TLS-init behavior as Client::new()
        let client = Client::builder()
            .timeout(FETCH_TIMEOUT)
            .build()
            .expect("failed to build HTTP client");
        Self { client }
    }
}

impl Default for HttpImageFetcher {
    fn default() -> Self {
        Self::new()
    }
}

/// Media type without parameters, e.g. "image/jpeg; charset=binary" ->
/// "image/jpeg".
fn media_type(content_type: &str) -> &str {
    content_type
        .split(';')
        .next()
        .unwrap_or(content_type)
        .trim()
}

impl ImageFetcher for HttpImageFetcher {
    async fn fetch(&self, url: String) -> Result<FetchedImage, CoreError> {
        if url.is_empty() {
            return Err(CoreError::InvalidImage("imageUrl is required".to_string()));
        }

        let response = self.client.get(&url).send().await.map_err(|err| {
            tracing::error!(%url, "failed to fetch image: {}", err);
            CoreError::InvalidImage("Failed to download image from URL".to_string())
        })?;

        if response.status().is_client_error() || response.status().is_server_error() {
            tracing::error!(%url, status = %response.status(), "image URL returned error");
            return Err(CoreError::InvalidImage("Image URL returned error".to_string()));
        }

        let mime_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(media_type)
            .unwrap_or_default()
            .to_string();

        if !mime_type.starts_with("image/") {
            return Err(CoreError::InvalidImage("URL is not an image".to_string()));
        }

        let data = response.bytes().await.map_err(|err| {
            tracing::error!(%url, "failed to read image body: {}", err);
            CoreError::InvalidImage("Failed to download image from URL".to_string())
        })?;

        if data.is_empty() {
            return Err(CoreError::InvalidImage("Empty image content".to_string()));
        }

        Ok(FetchedImage { data, mime_type })
    }
}
