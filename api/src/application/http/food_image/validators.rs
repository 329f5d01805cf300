use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct FoodImageUrlRequest {
    #[serde(rename = "imageUrl")]
    #[validate(length(min = 1, message = "imageUrl is required"))]
    pub image_url: String,
}
