use axum::{Router, routing::post};
use utoipa::OpenApi;

use super::handlers::identify_food_image::{__path_identify_food_image, identify_food_image};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(identify_food_image))]
pub struct FoodImageApiDoc;

pub fn food_image_routes() -> Router<AppState> {
    Router::new().route("/tools/identify_food_image", post(identify_food_image))
}
