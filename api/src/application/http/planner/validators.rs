use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use lowcarbon_core::domain::planner::entities::TravelPair;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct DailyPlannerRequest {
    /// Daily activities in natural language, English or Thai.
    #[serde(default)]
    pub activities: Vec<String>,
    #[serde(default)]
    pub travel: Vec<TravelPair>,
}
