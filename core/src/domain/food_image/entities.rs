use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The primary food identified in an image. `confidence` is expected in
/// [0, 1] but not enforced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct IdentifiedFood {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    pub confidence: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    #[serde(rename = "sourceModel", skip_serializing_if = "Option::is_none")]
    pub source_model: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FoodImageResponse {
    pub item: IdentifiedFood,
}

/// A downloaded image ready to be sent to the vision model.
#[derive(Debug, Clone)]
pub struct FetchedImage {
    pub data: bytes::Bytes,
    pub mime_type: String,
}
