use axum::extract::State;

use crate::application::http::{
    food_image::validators::FoodImageUrlRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};
use lowcarbon_core::domain::food_image::{
    entities::FoodImageResponse, ports::FoodImageService,
};

#[utoipa::path(
    post,
    path = "/tools/identify_food_image",
    tag = "tools",
    summary = "Identify the primary food in an image",
    description = "Downloads the image server-side and classifies it with the vision model",
    responses(
        (status = 200, body = FoodImageResponse),
        (status = 400, description = "Bad or unreachable image URL, or non-image content"),
        (status = 500, description = "Model API key or vision model not configured"),
        (status = 502, description = "Model unavailable or returned an unusable response")
    ),
    request_body = FoodImageUrlRequest
)]
pub async fn identify_food_image(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<FoodImageUrlRequest>,
) -> Result<Response<FoodImageResponse>, ApiError> {
    let response = state
        .service
        .identify(payload.image_url)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(response))
}
