use std::future::Future;

use crate::domain::common::entities::app_errors::CoreError;
use crate::domain::food_image::entities::{FetchedImage, FoodImageResponse};

/// Downloads an image by URL. All failures here are client-input errors
/// (bad or unreachable URL, non-image content), distinct from model errors.
#[cfg_attr(test, mockall::automock)]
pub trait ImageFetcher: Send + Sync {
    fn fetch(&self, url: String) -> impl Future<Output = Result<FetchedImage, CoreError>> + Send;
}

/// Service trait for food identification from an image URL.
#[cfg_attr(test, mockall::automock)]
pub trait FoodImageService: Send + Sync {
    fn identify(
        &self,
        image_url: String,
    ) -> impl Future<Output = Result<FoodImageResponse, CoreError>> + Send;
}
