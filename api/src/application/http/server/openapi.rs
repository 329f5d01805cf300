use utoipa::OpenApi;

use crate::application::http::estimate::router::EstimateApiDoc;
use crate::application::http::food_image::router::FoodImageApiDoc;
use crate::application::http::health::HealthApiDoc;
use crate::application::http::planner::router::PlannerApiDoc;

#[derive(OpenApi)]
#[openapi(info(
    title = "Lowest Carbon AI Backend",
    description = "CO2 impact estimation for user-reported activities",
    version = "0.1.0"
))]
pub struct ApiDoc;

impl ApiDoc {
    pub fn build() -> utoipa::openapi::OpenApi {
        let mut doc = Self::openapi();
        doc.merge(EstimateApiDoc::openapi());
        doc.merge(PlannerApiDoc::openapi());
        doc.merge(FoodImageApiDoc::openapi());
        doc.merge(HealthApiDoc::openapi());
        doc
    }
}
